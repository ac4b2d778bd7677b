//! Directional input: held/tapped 4-way input → primary/secondary movement
//! directions and a buffered combat direction.
//!
//! # Архитектура
//!
//! ```text
//! held[4] / tapped[4]
//!     ↓
//! CombatDirectionBuffer (tap buffer + link timer)
//!     ↓
//! DirectionResolver (primary / secondary, parity check)
//!     ↓
//! Still intent → ActionQueue
//! ```
//!
//! Index order of the raw arrays is fixed: up, right, down, left.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

pub mod combat_buffer;
pub mod resolver;

#[cfg(test)]
mod resolver_tests;

pub use combat_buffer::CombatDirectionBuffer;
pub use resolver::DirectionResolver;

/// Raw 4-way boolean input, indexed up/right/down/left.
pub type DirectionInput = [bool; 4];

/// One of the four cardinal directions.
///
/// Ordinals start at 1 so that `0` stays "no direction" on the animator side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum Direction {
    Up = 1,
    Right = 2,
    Down = 3,
    Left = 4,
}

impl Default for Direction {
    fn default() -> Self {
        Self::Down
    }
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Direction for a raw input index (0..4).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Direction for an animator ordinal (1..=4). `0` maps to None.
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            1..=4 => Self::from_index(ordinal as usize - 1),
            _ => None,
        }
    }

    /// Position in the raw input arrays.
    pub fn index(self) -> usize {
        self as usize - 1
    }

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Parity check: odd ordinal sum ⇒ the two directions lie on different axes.
    ///
    /// Up+Down and Left+Right (and a direction with itself) are never orthogonal.
    pub fn is_orthogonal_to(self, other: Direction) -> bool {
        (self.ordinal() + other.ordinal()) % 2 != 0
    }

    /// World-space unit vector (y up).
    pub fn unit_vector(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::Y,
            Direction::Right => Vec2::X,
            Direction::Down => Vec2::NEG_Y,
            Direction::Left => Vec2::NEG_X,
        }
    }
}
