//! Tests for the PlayerCharacter queue resolution and state machine.

#[cfg(test)]
mod tests {
    use bevy::prelude::Vec2;

    use crate::action::CharacterState;
    use crate::animation::{AnimationCommand, AnimationFlag, AnimationRecorder};
    use crate::character::{CharacterEvent, InteractionShape, PlayerCharacter};
    use crate::components::{ActionGate, Inventory, SpeedFactor};
    use crate::config::CharacterConfig;
    use crate::direction::Direction;
    use crate::item_system::{Item, WeaponUseKind};

    const STEP: f32 = 1.0 / 60.0;
    const NONE: [bool; 4] = [false; 4];

    fn hero() -> PlayerCharacter {
        PlayerCharacter::new(
            "hero",
            CharacterConfig::default(),
            InteractionShape::from_collider(Vec2::ONE),
        )
    }

    fn open_gate() -> ActionGate {
        ActionGate::default()
    }

    fn closed_gate() -> ActionGate {
        ActionGate {
            can_act_out_of_movement: false,
            in_attack: false,
        }
    }

    fn armed() -> Inventory {
        let mut inventory = Inventory::with_capacity(4);
        inventory.add_item(Item::sword()).unwrap();
        inventory
    }

    fn queued_states(character: &PlayerCharacter) -> Vec<CharacterState> {
        character.queue().iter().map(|a| a.state).collect()
    }

    // ------------------------------------------------------------------
    // Still (retry law)
    // ------------------------------------------------------------------

    #[test]
    fn test_still_deferred_then_applied_when_gate_opens() {
        let mut hero = hero();
        let mut sink = AnimationRecorder::new();
        let inventory = armed();

        // Вход с открытым gate → primary = Right, Still в очереди
        hero.set_directions(&[false, true, false, false], &NONE, &open_gate());
        assert_eq!(queued_states(&hero), vec![CharacterState::Still]);

        // Tick с закрытым gate: Still остаётся
        hero.fixed_update(&closed_gate(), &inventory, &mut sink, STEP);
        assert_eq!(queued_states(&hero), vec![CharacterState::Still]);
        assert!(sink.commands.is_empty());

        // Gate открылся: направление применено, очередь пуста
        hero.fixed_update(&open_gate(), &inventory, &mut sink, STEP);
        assert!(hero.queue().is_empty());
        assert_eq!(hero.facing(), Direction::Right);
        assert_eq!(sink.commands, vec![AnimationCommand::SetDirection(Direction::Right)]);
    }

    #[test]
    fn test_still_waits_for_held_direction() {
        let mut hero = hero();
        let mut sink = AnimationRecorder::new();

        hero.set_directions(&NONE, &NONE, &open_gate());
        for _ in 0..5 {
            hero.fixed_update(&open_gate(), &armed(), &mut sink, STEP);
            assert_eq!(queued_states(&hero), vec![CharacterState::Still]);
        }

        hero.set_directions(&[false, false, false, true], &NONE, &open_gate());
        // Повторный вход не дублирует Still
        assert_eq!(queued_states(&hero), vec![CharacterState::Still]);

        hero.fixed_update(&open_gate(), &armed(), &mut sink, STEP);
        assert!(hero.queue().is_empty());
        assert_eq!(hero.facing(), Direction::Left);
    }

    #[test]
    fn test_still_waits_for_link_lock() {
        let mut hero = hero();
        let mut sink = AnimationRecorder::new();
        let inventory = armed();

        hero.end_weapon_use_anim(&mut sink);
        hero.set_directions(&[true, false, false, false], &NONE, &open_gate());

        // Link lock 0.1s = 6 тиков; Still применяется на тике после снятия lock
        let mut ticks = 0;
        while !hero.queue().is_empty() {
            hero.fixed_update(&open_gate(), &inventory, &mut sink, STEP);
            ticks += 1;
            assert!(ticks < 20, "Still never applied");
        }
        assert_eq!(ticks, 7);
        assert_eq!(hero.facing(), Direction::Up);
    }

    // ------------------------------------------------------------------
    // Walking
    // ------------------------------------------------------------------

    #[test]
    fn test_walk_always_applies_and_toggles_step() {
        let mut hero = hero();
        let mut sink = AnimationRecorder::new();

        hero.try_walk();
        hero.fixed_update(&closed_gate(), &Inventory::default(), &mut sink, STEP);

        assert_eq!(hero.state(), CharacterState::Walking);
        assert!(hero.odd_step());
        assert_eq!(hero.speed_factor(), SpeedFactor::Normal);
        assert_eq!(
            sink.commands,
            vec![
                AnimationCommand::SetTime(0.0),
                AnimationCommand::SetState(CharacterState::Walking),
                AnimationCommand::SetBool(AnimationFlag::OddStep, true),
            ]
        );
        assert!(hero.queue().is_empty());
    }

    #[test]
    fn test_walk_only_queued_from_still() {
        let mut hero = hero();
        let mut sink = AnimationRecorder::new();

        hero.try_walk();
        hero.fixed_update(&open_gate(), &armed(), &mut sink, STEP);
        assert_eq!(hero.state(), CharacterState::Walking);

        hero.try_walk();
        assert!(hero.queue().is_empty());

        hero.end_walk_anim(&mut sink);
        assert_eq!(hero.state(), CharacterState::Still);
        hero.try_walk();
        hero.fixed_update(&open_gate(), &armed(), &mut sink, STEP);
        assert!(!hero.odd_step());
    }

    #[test]
    fn test_walk_requests_not_deduplicated() {
        let mut hero = hero();
        let mut sink = AnimationRecorder::new();

        hero.try_walk();
        hero.try_walk();
        assert_eq!(hero.queue().len(), 2);

        hero.fixed_update(&open_gate(), &armed(), &mut sink, STEP);
        // Два переключения → снова чётный шаг
        assert!(!hero.odd_step());
    }

    // ------------------------------------------------------------------
    // Attacking / Blocking (one-shot law)
    // ------------------------------------------------------------------

    #[test]
    fn test_attack_applies_with_weapon() {
        let mut hero = hero();
        let mut sink = AnimationRecorder::new();

        hero.try_attacking();
        let events = hero.fixed_update(&open_gate(), &armed(), &mut sink, STEP);

        assert_eq!(hero.state(), CharacterState::Attacking);
        assert_eq!(hero.speed_factor(), SpeedFactor::Attack);
        assert_eq!(events.len(), 1);
        let CharacterEvent::WeaponUseStarted(weapon_use) = &events[0] else {
            panic!("expected weapon use, got {:?}", events[0]);
        };
        assert_eq!(weapon_use.kind, WeaponUseKind::Attack);
        assert_eq!(weapon_use.direction, Direction::Down); // default facing
        assert_eq!(sink.commands[0], AnimationCommand::SetTime(0.0));
        assert_eq!(sink.commands[1], AnimationCommand::SetState(CharacterState::Attacking));
    }

    #[test]
    fn test_attack_dropped_when_gate_closed() {
        let mut hero = hero();
        let mut sink = AnimationRecorder::new();

        hero.try_attacking();
        let events = hero.fixed_update(&closed_gate(), &armed(), &mut sink, STEP);

        assert!(events.is_empty());
        assert!(hero.queue().is_empty(), "attack must not be retried");
        assert_eq!(hero.state(), CharacterState::Still);

        // Gate открылся позже, атака НЕ должна внезапно сработать
        let events = hero.fixed_update(&open_gate(), &armed(), &mut sink, STEP);
        assert!(events.is_empty());
        assert_eq!(hero.state(), CharacterState::Still);
    }

    #[test]
    fn test_attack_dropped_without_weapon() {
        let mut hero = hero();
        let mut sink = AnimationRecorder::new();
        let mut inventory = Inventory::with_capacity(2);
        inventory.add_item(Item::pickaxe()).unwrap();

        hero.try_attacking();
        let events = hero.fixed_update(&open_gate(), &inventory, &mut sink, STEP);

        assert!(events.is_empty());
        assert!(hero.queue().is_empty());
        assert!(sink.commands.is_empty());
    }

    #[test]
    fn test_block_dropped_for_weapon_without_block() {
        let mut hero = hero();
        let mut sink = AnimationRecorder::new();
        let mut inventory = Inventory::with_capacity(2);
        inventory.add_item(Item::dagger()).unwrap();

        hero.try_blocking();
        let events = hero.fixed_update(&open_gate(), &inventory, &mut sink, STEP);
        assert!(events.is_empty());
        assert!(hero.queue().is_empty());
    }

    #[test]
    fn test_block_applies() {
        let mut hero = hero();
        let mut sink = AnimationRecorder::new();

        hero.try_blocking();
        let events = hero.fixed_update(&open_gate(), &armed(), &mut sink, STEP);

        assert_eq!(hero.state(), CharacterState::Blocking);
        assert_eq!(hero.speed_factor(), SpeedFactor::Block);
        assert!(matches!(
            &events[0],
            CharacterEvent::WeaponUseStarted(u) if u.kind == WeaponUseKind::Block
        ));
    }

    #[test]
    fn test_attack_request_deduplicated() {
        let mut hero = hero();
        hero.try_attacking();
        hero.try_attacking();
        hero.try_blocking();
        hero.try_blocking();

        assert_eq!(
            queued_states(&hero),
            vec![CharacterState::Attacking, CharacterState::Blocking]
        );
    }

    #[test]
    fn test_queue_drains_in_one_tick_with_open_gate() {
        let mut hero = hero();
        let mut sink = AnimationRecorder::new();

        hero.set_directions(&[true, false, false, false], &NONE, &open_gate());
        hero.try_walk();
        hero.try_attacking();
        hero.try_blocking();

        hero.fixed_update(&open_gate(), &armed(), &mut sink, STEP);
        assert!(hero.queue().is_empty());
        // Blocking обработан последним
        assert_eq!(hero.state(), CharacterState::Blocking);
    }

    // ------------------------------------------------------------------
    // Combat direction
    // ------------------------------------------------------------------

    #[test]
    fn test_attack_aims_at_tapped_direction() {
        let mut hero = hero();
        let mut sink = AnimationRecorder::new();

        hero.set_directions(&[false, false, false, true], &[false, false, false, true], &open_gate());
        hero.try_attacking();
        let events = hero.fixed_update(&open_gate(), &armed(), &mut sink, STEP);

        assert_eq!(hero.facing(), Direction::Left);
        assert!(matches!(
            &events[0],
            CharacterEvent::WeaponUseStarted(u) if u.direction == Direction::Left
        ));
    }

    #[test]
    fn test_linked_attack_keeps_previous_facing() {
        let mut hero = hero();
        let mut sink = AnimationRecorder::new();
        let inventory = armed();

        // Первая атака вправо
        hero.set_directions(&NONE, &[false, true, false, false], &open_gate());
        hero.try_attacking();
        hero.fixed_update(&open_gate(), &inventory, &mut sink, STEP);
        assert_eq!(hero.facing(), Direction::Right);

        // Анимация кончилась → link lock; игрок тапает вверх
        hero.end_weapon_use_anim(&mut sink);
        let in_attack = ActionGate {
            can_act_out_of_movement: false,
            in_attack: true,
        };
        hero.set_directions(&NONE, &[true, false, false, false], &in_attack);
        assert_eq!(hero.combat().combat_dir(), Some(Direction::Up));

        // Switch запрещён пока link timer > 0
        let direction = hero.switch_to_combat_direction(&mut sink);
        assert_eq!(direction, Direction::Right);
        assert!(!hero.can_switch_combat_direction());
    }

    #[test]
    fn test_end_weapon_use_anim() {
        let mut hero = hero();
        let mut sink = AnimationRecorder::new();

        hero.try_attacking();
        hero.fixed_update(&open_gate(), &armed(), &mut sink, STEP);
        sink.commands.clear();

        hero.end_weapon_use_anim(&mut sink);
        assert_eq!(hero.state(), CharacterState::Still);
        assert_eq!(hero.speed_factor(), SpeedFactor::Normal);
        assert_eq!(hero.combat().link_timer(), 0.1);
        assert_eq!(sink.commands, vec![AnimationCommand::SetState(CharacterState::Still)]);
    }

    #[test]
    fn test_tap_buffer_expires_through_fixed_update() {
        let mut hero = hero();
        let mut sink = AnimationRecorder::new();

        hero.set_directions(&NONE, &[false, false, true, false], &open_gate());
        assert_eq!(hero.combat().combat_dir(), Some(Direction::Down));

        for _ in 0..12 {
            hero.fixed_update(&open_gate(), &armed(), &mut sink, STEP);
        }
        assert_eq!(hero.combat().combat_dir(), None);
    }

    // ------------------------------------------------------------------
    // Direction gate
    // ------------------------------------------------------------------

    #[test]
    fn test_directions_ignored_when_locked_out() {
        let mut hero = hero();
        hero.set_directions(&[true, false, false, false], &[true, false, false, false], &closed_gate());

        assert_eq!(hero.directions().primary(), None);
        assert_eq!(hero.combat().combat_dir(), None);
        assert!(hero.queue().is_empty());
    }

    #[test]
    fn test_directions_processed_mid_attack() {
        let mut hero = hero();
        let in_attack = ActionGate {
            can_act_out_of_movement: false,
            in_attack: true,
        };
        hero.set_directions(&[false, true, false, false], &NONE, &in_attack);
        assert_eq!(hero.directions().primary(), Some(Direction::Right));
    }

    // ------------------------------------------------------------------
    // Misc
    // ------------------------------------------------------------------

    #[test]
    fn test_can_switch_from() {
        let mut hero = hero();
        assert!(hero.can_switch_from(&open_gate()));
        assert!(!hero.can_switch_from(&closed_gate()));

        hero.try_attacking();
        assert!(!hero.can_switch_from(&open_gate()));
    }

    #[test]
    fn test_speed_uses_factor_and_modifiers() {
        let mut hero = hero();
        let mut sink = AnimationRecorder::new();
        let modifiers = crate::components::SpeedModifiers {
            quicken: true,
            slowen: false,
        };

        assert_eq!(hero.speed(&modifiers), 3.0);

        hero.try_attacking();
        hero.fixed_update(&open_gate(), &armed(), &mut sink, STEP);
        assert!((hero.speed(&Default::default()) - 0.6).abs() < 1e-6);
    }
}
