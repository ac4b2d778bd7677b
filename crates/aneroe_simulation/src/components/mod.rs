//! ECS Components для персонажей игрока
//!
//! Организация по доменам:
//! - actor: базовые характеристики (Health, StatLevels)
//! - movement: speed factor и модификаторы (SpeedFactor, SpeedModifiers)
//! - player: маркер активного персонажа + handles внешних collaborators
//!   (ActiveCharacter, Animator, ActionGate)
//! - inventory: слоты предметов и equipped slot (Inventory)

pub mod actor;
pub mod inventory;
pub mod movement;
pub mod player;

// Re-exports для удобного импорта
pub use actor::*;
pub use inventory::*;
pub use movement::*;
pub use player::*;
