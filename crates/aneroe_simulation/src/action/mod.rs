//! Character state actions and their priority queue.
//!
//! Очередь пересобирается каждый fixed tick (см. `character::PlayerCharacter::fixed_update`):
//! entries are drained in priority order, deferred ones go into a fresh
//! residual queue, accepted and dropped ones disappear.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

pub mod queue;


pub use queue::ActionQueue;

/// Animation/motion state of a character.
///
/// Exactly one is current at any instant. Declaration order is also the
/// dequeue order of `StateAction`s (lower ordinal first).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Reflect, Serialize, Deserialize,
)]
pub enum CharacterState {
    #[default]
    Still = 0,
    Walking = 1,
    Attacking = 2,
    Blocking = 3,
}

impl CharacterState {
    pub const COUNT: usize = 4;

    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

/// Pending state-change request.
///
/// Two actions "compare equal" when their states match; this is what
/// `ActionQueue::contains_by_compare` uses for de-duplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateAction {
    pub state: CharacterState,
    pub priority: u8,
}

impl StateAction {
    pub fn new(state: CharacterState) -> Self {
        Self {
            state,
            priority: state.ordinal(),
        }
    }

    pub fn same_state(&self, other: &StateAction) -> bool {
        self.state == other.state
    }
}

impl From<CharacterState> for StateAction {
    fn from(state: CharacterState) -> Self {
        Self::new(state)
    }
}
