//! Output events of core character operations.
//!
//! Core operations return these instead of calling subscribers directly;
//! the ECS layer fans them out into typed Bevy events.

use bevy::prelude::*;

use crate::item_system::{ItemId, WeaponUse};

#[derive(Debug, Clone, PartialEq)]
pub enum CharacterEvent {
    /// Equipped weapon started an attack/block
    WeaponUseStarted(WeaponUse),
    /// Item moved from the world into the inventory
    ItemPickedUp {
        /// World entity of the picked item (None for default/loaded items)
        source: Option<Entity>,
        item: ItemId,
        slot: usize,
    },
    /// Active item equipped (`true`) or put away (`false`)
    ItemEquipChanged { item: ItemId, equipped: bool },
    /// Health should be re-published (after load)
    HealthChanged { current: u32, max: u32 },
}
