//! Error types for the player-character core.
//!
//! Tick-time precondition failures are NOT errors: they turn into deferred
//! or dropped queue entries. Errors here are setup-time problems and
//! explicit inventory operations.

use thiserror::Error;

/// External collaborator a character cannot run without.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collaborator {
    /// Animator handle (animation sink)
    Animator,
    /// Inventory / equipped-item slot
    EquipmentSlot,
    /// Collider size (interaction offsets are derived from it)
    Collider,
}

impl std::fmt::Display for Collaborator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Collaborator::Animator => "animator",
            Collaborator::EquipmentSlot => "equipment slot",
            Collaborator::Collider => "collider",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("missing required collaborator: {0}")]
    MissingCollaborator(Collaborator),

    #[error("inventory is full")]
    InventoryFull,

    #[error("inventory slot {slot} out of range (capacity {capacity})")]
    InvalidSlot { slot: usize, capacity: usize },

    #[error("party has no characters")]
    EmptyParty,
}

pub type CoreResult<T> = Result<T, CoreError>;
