//! Player core systems (FixedUpdate, chained).
//!
//! Порядок выполнения (см. `PlayerCorePlugin`):
//! 1. process_player_input: input → intents (до тика, никогда не вперемешку)
//! 2. process_item_moves / process_interactions / process_item_triggers
//! 3. apply_loads: save data / default items
//! 4. handle_animation_finished: walk/weapon animation ended
//! 5. tick_active_character: queue resolution + timers
//! 6. integrate_walking: Transform movement
//! 7. save_characters, publish_health_changes

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use super::events::*;
use super::party::Party;
use crate::action::CharacterState;
use crate::animation::{AnimationCommandEvent, AnimationRecorder};
use crate::character::{CharacterEvent, DefaultItems, OverlapQuery, PlayerCharacter};
use crate::components::{ActionGate, ActiveCharacter, Health, Inventory, ItemMoved, SpeedModifiers, StatLevels};
use crate::config::InputMode;
use crate::item_system::WeaponUseKind;
use crate::logger;

/// Physics collaborator for manual interaction (host-provided).
///
/// Absent resource → `InteractIntent` is ignored with a warning.
#[derive(Resource)]
pub struct InteractionProbe(pub Box<dyn OverlapQuery + Send + Sync>);

/// Fan-out of core `CharacterEvent`s into typed Bevy events.
#[derive(SystemParam)]
pub struct CharacterEventWriters<'w> {
    weapon_use: EventWriter<'w, WeaponUseStarted>,
    picked_up: EventWriter<'w, ItemPickedUp>,
    equip_changed: EventWriter<'w, ItemEquipChanged>,
    health_changed: EventWriter<'w, PlayerHealthChanged>,
}

impl CharacterEventWriters<'_> {
    pub fn dispatch(&mut self, entity: Entity, events: impl IntoIterator<Item = CharacterEvent>) {
        for event in events {
            match event {
                CharacterEvent::WeaponUseStarted(weapon_use) => {
                    self.weapon_use.write(WeaponUseStarted { entity, weapon_use });
                }
                CharacterEvent::ItemPickedUp { source, item, slot } => {
                    self.picked_up.write(ItemPickedUp {
                        entity,
                        source,
                        item,
                        slot,
                    });
                }
                CharacterEvent::ItemEquipChanged { item, equipped } => {
                    self.equip_changed.write(ItemEquipChanged { entity, item, equipped });
                }
                CharacterEvent::HealthChanged { current, max } => {
                    self.health_changed.write(PlayerHealthChanged { entity, current, max });
                }
            }
        }
    }
}

fn forward_animation(
    entity: Entity,
    recorder: &mut AnimationRecorder,
    writer: &mut EventWriter<AnimationCommandEvent>,
) {
    writer.write_batch(recorder.drain().map(|command| AnimationCommandEvent { entity, command }));
}

/// Player input → active character intents.
///
/// Priority (first match wins, directions are always fed first):
/// attack held → defend held → switch character → any direction → walk.
/// `quicken`/`slowen` обновляются на каждом событии.
pub fn process_player_input(
    mut input_events: EventReader<PlayerInputEvent>,
    mode: Res<InputMode>,
    mut party: ResMut<Party>,
    mut characters: Query<(&mut PlayerCharacter, &ActionGate, &mut SpeedModifiers)>,
    mut switched: EventWriter<ActiveCharacterChanged>,
    mut commands: Commands,
) {
    for input in input_events.read() {
        // UI открыт → мир не получает ввод
        if *mode != InputMode::Free {
            continue;
        }

        let active = party.active();
        let Ok((mut character, gate, mut modifiers)) = characters.get_mut(active) else {
            logger::log_warning(&format!("⚠️ Active character {:?} has no PlayerCharacter", active));
            continue;
        };

        modifiers.quicken = input.quicken;
        modifiers.slowen = input.slowen;

        character.set_directions(&input.active_directions(), &input.tapped, gate);

        if input.attack {
            character.try_attacking();
        } else if input.defend {
            character.try_blocking();
        } else if input.switch_character && character.can_switch_from(gate) {
            let (old, new) = party.rotate();
            commands.entity(old).remove::<ActiveCharacter>();
            commands.entity(new).insert(ActiveCharacter);
            switched.write(ActiveCharacterChanged { old, new });
            logger::log_info(&format!("👥 Active character: {:?} → {:?}", old, new));
        } else if input.any_direction() {
            character.try_walk();
        }
    }
}

/// UI drag&drop between inventory slots.
pub fn process_item_moves(
    mut moves: EventReader<ItemMoved>,
    mut characters: Query<(&mut PlayerCharacter, &mut Inventory)>,
    mut writers: CharacterEventWriters,
) {
    for mv in moves.read() {
        let Ok((mut character, mut inventory)) = characters.get_mut(mv.entity) else {
            continue;
        };
        let events = character.on_item_moved(mv, &mut inventory);
        writers.dispatch(mv.entity, events);
    }
}

/// Manual interaction of the active character.
pub fn process_interactions(
    mut intents: EventReader<InteractIntent>,
    mode: Res<InputMode>,
    party: Res<Party>,
    probe: Option<Res<InteractionProbe>>,
    mut characters: Query<(&PlayerCharacter, &ActionGate, &Transform, &mut Inventory)>,
    mut writers: CharacterEventWriters,
) {
    for _ in intents.read() {
        if *mode != InputMode::Free {
            continue;
        }
        let Some(probe) = probe.as_deref() else {
            logger::log_warning("⚠️ InteractIntent without InteractionProbe resource");
            continue;
        };

        let entity = party.active();
        let Ok((character, gate, transform, mut inventory)) = characters.get_mut(entity) else {
            continue;
        };

        let events = character.try_interacting(
            gate,
            transform.translation.truncate(),
            &mut inventory,
            probe.0.as_ref(),
        );
        writers.dispatch(entity, events);
    }
}

/// Auto-pickup: active character walked over an item.
pub fn process_item_triggers(
    mut triggers: EventReader<ItemTriggerEntered>,
    party: Res<Party>,
    mut characters: Query<(&PlayerCharacter, &mut Inventory)>,
    mut writers: CharacterEventWriters,
) {
    for trigger in triggers.read() {
        if trigger.entity != party.active() {
            continue;
        }
        let Ok((character, mut inventory)) = characters.get_mut(trigger.entity) else {
            continue;
        };

        let events = character.on_item_trigger_enter(trigger.item_entity, trigger.item.clone(), &mut inventory);
        writers.dispatch(trigger.entity, events);
    }
}

/// Restore characters from save data (or give them default items).
pub fn apply_loads(
    mut loads: EventReader<LoadCharacter>,
    mut characters: Query<(
        &mut PlayerCharacter,
        &mut Transform,
        &mut StatLevels,
        &mut Inventory,
        &Health,
        &DefaultItems,
    )>,
    mut writers: CharacterEventWriters,
) {
    for load in loads.read() {
        let Ok((mut character, mut transform, mut stats, mut inventory, health, defaults)) =
            characters.get_mut(load.entity)
        else {
            logger::log_warning(&format!("⚠️ LoadCharacter: {:?} is not a character", load.entity));
            continue;
        };

        let events = match &load.data {
            Some(data) => {
                let mut position = transform.translation.truncate();
                let events = character.load(data, &mut position, &mut stats, &mut inventory, health);
                transform.translation = position.extend(transform.translation.z);
                events
            }
            None => character.load_first_time(&defaults.0, &mut inventory),
        };

        writers.dispatch(load.entity, events);
    }
}

/// Host reports the end of a walk cycle or attack/block animation.
pub fn handle_animation_finished(
    mut finished: EventReader<AnimationFinished>,
    mut characters: Query<(&mut PlayerCharacter, &mut ActionGate)>,
    mut animation_commands: EventWriter<AnimationCommandEvent>,
) {
    for event in finished.read() {
        let Ok((mut character, mut gate)) = characters.get_mut(event.entity) else {
            continue;
        };

        let mut recorder = AnimationRecorder::new();
        match event.kind {
            AnimationKind::WalkCycle => character.end_walk_anim(&mut recorder),
            AnimationKind::WeaponUse => {
                character.end_weapon_use_anim(&mut recorder);
                *gate = ActionGate::default();
            }
        }
        forward_animation(event.entity, &mut recorder, &mut animation_commands);
    }
}

/// Fixed tick of the active character only.
pub fn tick_active_character(
    time: Res<Time<Fixed>>,
    party: Res<Party>,
    mut characters: Query<(&mut PlayerCharacter, &mut ActionGate, &Inventory)>,
    mut animation_commands: EventWriter<AnimationCommandEvent>,
    mut writers: CharacterEventWriters,
) {
    let entity = party.active();
    let Ok((mut character, mut gate, inventory)) = characters.get_mut(entity) else {
        return;
    };

    let rate = time.timestep().as_secs_f32();
    let mut recorder = AnimationRecorder::new();
    let events = character.fixed_update(&*gate, inventory, &mut recorder, rate);

    // Атака/блок держат gate закрытым до AnimationFinished(WeaponUse)
    for event in &events {
        if let CharacterEvent::WeaponUseStarted(weapon_use) = event {
            gate.can_act_out_of_movement = false;
            gate.in_attack = weapon_use.kind == WeaponUseKind::Attack;
        }
    }

    forward_animation(entity, &mut recorder, &mut animation_commands);
    writers.dispatch(entity, events);
}

/// Move walking characters along their held directions.
pub fn integrate_walking(
    time: Res<Time<Fixed>>,
    mut characters: Query<(&PlayerCharacter, &SpeedModifiers, &mut Transform)>,
) {
    let delta = time.timestep().as_secs_f32();

    for (character, modifiers, mut transform) in characters.iter_mut() {
        if character.state() != CharacterState::Walking {
            continue;
        }

        let direction = character.directions().movement_vector();
        if direction == Vec2::ZERO {
            continue;
        }

        transform.translation += (direction * character.speed(modifiers) * delta).extend(0.0);
    }
}

pub fn save_characters(
    mut requests: EventReader<SaveRequested>,
    party: Res<Party>,
    characters: Query<(&PlayerCharacter, &Transform, &StatLevels, &Inventory)>,
    mut saved: EventWriter<CharacterSaved>,
) {
    if requests.read().count() == 0 {
        return;
    }

    for &entity in party.members() {
        let Ok((character, transform, stats, inventory)) = characters.get(entity) else {
            continue;
        };
        saved.write(CharacterSaved {
            entity,
            data: character.save(transform.translation.truncate(), stats, inventory),
        });
    }
}

/// Health changed → PlayerHealthChanged; 0 HP → RestartRequested.
pub fn publish_health_changes(
    characters: Query<(Entity, &Health), (Changed<Health>, With<PlayerCharacter>)>,
    mut health_events: EventWriter<PlayerHealthChanged>,
    mut restart_events: EventWriter<RestartRequested>,
) {
    for (entity, health) in characters.iter() {
        health_events.write(PlayerHealthChanged {
            entity,
            current: health.current,
            max: health.max,
        });

        if !health.is_alive() {
            logger::log_info(&format!("💀 {:?} died, restart requested", entity));
            restart_events.write(RestartRequested { entity });
        }
    }
}
