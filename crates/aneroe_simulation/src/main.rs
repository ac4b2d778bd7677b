//! Headless симуляция Aneroe
//!
//! Спавнит партию из двух персонажей, прогоняет скриптованный ввод
//! (walk → attack → switch) и печатает события.

use bevy::prelude::*;

use aneroe_simulation::character::CharacterBuilder;
use aneroe_simulation::components::{Animator, Inventory};
use aneroe_simulation::item_system::Item;
use aneroe_simulation::player_core::{
    AnimationFinished, AnimationKind, LoadCharacter, PlayerInputEvent, WeaponUseStarted,
};
use aneroe_simulation::{create_headless_app, log_error, log_info, spawn_party, CoreResult, PlayerCharacter};

fn build_party(app: &mut App) -> CoreResult<Vec<Entity>> {
    let hero = CharacterBuilder::new("hero")
        .animator(Animator::new("Party/Hero/Animator"))
        .inventory(Inventory::default())
        .collider(Vec2::new(1.0, 1.0))
        .default_items(vec![Item::sword()])
        .build()?;
    let mage = CharacterBuilder::new("mage")
        .animator(Animator::new("Party/Mage/Animator"))
        .inventory(Inventory::default())
        .collider(Vec2::new(0.8, 1.2))
        .default_items(vec![Item::dagger(), Item::health_potion()])
        .build()?;

    let party = spawn_party(app.world_mut(), vec![hero, mage])?;
    Ok(party.members().to_vec())
}

fn run_ticks(app: &mut App, ticks: usize) {
    for _ in 0..ticks {
        app.world_mut().run_schedule(FixedUpdate);
    }
}

fn main() {
    let mut app = create_headless_app();

    let members = match build_party(&mut app) {
        Ok(members) => members,
        Err(err) => {
            log_error(&format!("Party setup failed: {}", err));
            return;
        }
    };

    // Новая игра: default items → inventory
    for &entity in &members {
        app.world_mut().send_event(LoadCharacter { entity, data: None });
    }
    run_ticks(&mut app, 1);

    let hero = members[0];
    let right = [false, true, false, false];

    // Шаг вправо
    app.world_mut().send_event(PlayerInputEvent {
        held: right,
        tapped: right,
        ..Default::default()
    });
    run_ticks(&mut app, 10);
    app.world_mut().send_event(AnimationFinished {
        entity: hero,
        kind: AnimationKind::WalkCycle,
    });

    // Атака
    app.world_mut().send_event(PlayerInputEvent {
        attack: true,
        ..Default::default()
    });
    run_ticks(&mut app, 20);
    app.world_mut().send_event(AnimationFinished {
        entity: hero,
        kind: AnimationKind::WeaponUse,
    });
    run_ticks(&mut app, 10);

    // Смена персонажа
    app.world_mut().send_event(PlayerInputEvent {
        switch_character: true,
        ..Default::default()
    });
    run_ticks(&mut app, 1);

    let weapon_uses = app.world().resource::<Events<WeaponUseStarted>>().len();
    log_info(&format!("Weapon uses: {}", weapon_uses));

    let mut query = app.world_mut().query::<(&PlayerCharacter, &Transform)>();
    for (character, transform) in query.iter(app.world()) {
        log_info(&format!(
            "{}: state={:?} facing={:?} pos=({:.2}, {:.2})",
            character.name,
            character.state(),
            character.facing(),
            transform.translation.x,
            transform.translation.y
        ));
    }

    log_info("Simulation complete!");
}
