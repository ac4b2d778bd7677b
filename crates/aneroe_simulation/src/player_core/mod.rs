//! Player core plugin: party, input routing and the fixed character tick.
//!
//! ECS ответственность:
//! - Party / active character, input priority
//! - Fixed tick активного персонажа (queue resolution, timers)
//! - Fan-out core events → typed Bevy events
//!
//! Host ответственность:
//! - Animator (consumes `AnimationCommandEvent`, reports `AnimationFinished`)
//! - Physics (item triggers, `InteractionProbe`)
//! - UI (item moves, `InputMode`)

use bevy::prelude::*;

pub mod events;
pub mod party;
pub mod systems;

pub use events::*;
pub use party::{spawn_party, Party};
pub use systems::{CharacterEventWriters, InteractionProbe};

use crate::animation::AnimationCommandEvent;
use crate::components::{ActionGate, Animator, Health, ItemMoved, SpeedModifiers, StatLevels};
use crate::config::{CharacterConfig, InputMode};

/// Player core plugin.
///
/// Регистрирует системы в FixedUpdate (60Hz), строго последовательно:
/// input → UI/physics events → loads → animation callbacks → tick →
/// movement → saves → health.
///
/// Системы работают только когда `Party` resource существует
/// (см. `spawn_party`).
pub struct PlayerCorePlugin;

impl Plugin for PlayerCorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CharacterConfig>()
            .init_resource::<InputMode>()
            .register_type::<CharacterConfig>()
            .register_type::<ActionGate>()
            .register_type::<Animator>()
            .register_type::<Health>()
            .register_type::<SpeedModifiers>()
            .register_type::<StatLevels>();

        // Входящие
        app.add_event::<PlayerInputEvent>()
            .add_event::<AnimationFinished>()
            .add_event::<ItemTriggerEntered>()
            .add_event::<InteractIntent>()
            .add_event::<ItemMoved>()
            .add_event::<LoadCharacter>()
            .add_event::<SaveRequested>();

        // Исходящие
        app.add_event::<AnimationCommandEvent>()
            .add_event::<WeaponUseStarted>()
            .add_event::<ItemPickedUp>()
            .add_event::<ItemEquipChanged>()
            .add_event::<PlayerHealthChanged>()
            .add_event::<RestartRequested>()
            .add_event::<ActiveCharacterChanged>()
            .add_event::<CharacterSaved>();

        app.add_systems(
            FixedUpdate,
            (
                // Фаза 1: Input (всегда до тика)
                systems::process_player_input,

                // Фаза 2: UI / physics
                systems::process_item_moves,
                systems::process_interactions,
                systems::process_item_triggers,
                systems::apply_loads,

                // Фаза 3: Animation callbacks + tick
                systems::handle_animation_finished,
                systems::tick_active_character,
                systems::integrate_walking,

                // Фаза 4: Persistence / health
                systems::save_characters,
                systems::publish_health_changes,
            )
                .chain()
                .run_if(resource_exists::<Party>),
        );
    }
}
