//! Aneroe Simulation Core
//!
//! Player-character core на Bevy 0.16: очередь state actions, direction
//! registers, combat direction buffer и fixed-tick state machine.
//!
//! ARCHITECTURE:
//! - Core (`character`, `action`, `direction`, `timer`) = чистые типы,
//!   тестируются без App
//! - ECS (`player_core`) = party, input routing, fixed tick, events
//! - Host (animator, physics, UI) = через события и trait-коллабораторы

use bevy::prelude::*;

// Публичные модули
pub mod action;
pub mod animation;
pub mod character;
pub mod components;
pub mod config;
pub mod direction;
pub mod error;
pub mod item_system;
pub mod logger;
pub mod player_core;
pub mod timer;

// Re-export базовых типов для удобства
pub use action::{ActionQueue, CharacterState, StateAction};
pub use animation::{AnimationCommand, AnimationCommandEvent, AnimationSink};
pub use character::{CharacterBuilder, CharacterEvent, PlayerCharacter};
pub use components::*;
pub use config::{CharacterConfig, InputMode};
pub use direction::{Direction, DirectionInput};
pub use error::{CoreError, CoreResult};
pub use item_system::{Item, ItemId, ItemKind};
pub use logger::{init_logger, log, log_error, log_info, log_warning, set_log_level, LogLevel};
pub use player_core::{spawn_party, Party, PlayerCorePlugin};

/// Главный plugin симуляции
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let config = app
            .world()
            .get_resource::<CharacterConfig>()
            .cloned()
            .unwrap_or_default();

        app
            // Fixed timestep 60Hz: все таймеры персонажа считают в тиках этого шага
            .insert_resource(Time::<Fixed>::from_hz(config.fixed_hz))
            .insert_resource(config)
            .add_plugins(PlayerCorePlugin);
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app() -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins).add_plugins(SimulationPlugin);

    app
}
