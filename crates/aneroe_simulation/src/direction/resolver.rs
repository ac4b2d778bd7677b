//! Primary/secondary held-direction registers.

use super::{Direction, DirectionInput};

/// Held movement directions.
///
/// Инвариант: secondary задан только вместе с primary и только ортогонально
/// ему (`primary.is_orthogonal_to(secondary)`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionResolver {
    primary: Option<Direction>,
    secondary: Option<Direction>,
}

impl DirectionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primary(&self) -> Option<Direction> {
        self.primary
    }

    pub fn secondary(&self) -> Option<Direction> {
        self.secondary
    }

    /// Update registers from the currently held directions.
    ///
    /// 1. Released primary → cleared; a still-held secondary is promoted.
    /// 2. Released secondary → cleared.
    /// 3. Scan up/right/down/left: first held direction fills an empty
    ///    primary, first held orthogonal direction fills an empty secondary.
    pub fn update(&mut self, held: &DirectionInput) {
        if let Some(primary) = self.primary {
            if !held[primary.index()] {
                self.primary = self.secondary.filter(|secondary| held[secondary.index()]);
                self.secondary = None;
            }
        }

        if let Some(secondary) = self.secondary {
            if !held[secondary.index()] {
                self.secondary = None;
            }
        }

        for (index, _) in held.iter().enumerate().filter(|(_, down)| **down) {
            let Some(direction) = Direction::from_index(index) else {
                continue;
            };

            match self.primary {
                None => self.primary = Some(direction),
                Some(primary) => {
                    if self.secondary.is_none() && primary.is_orthogonal_to(direction) {
                        self.secondary = Some(direction);
                    }
                }
            }
        }
    }

    /// Combined movement vector (normalized, ZERO when nothing is held).
    pub fn movement_vector(&self) -> bevy::prelude::Vec2 {
        let sum = self.primary.map(Direction::unit_vector).unwrap_or_default()
            + self.secondary.map(Direction::unit_vector).unwrap_or_default();
        sum.normalize_or_zero()
    }

    pub fn clear(&mut self) {
        self.primary = None;
        self.secondary = None;
    }
}
