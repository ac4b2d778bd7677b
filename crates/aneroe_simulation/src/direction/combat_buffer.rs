//! Combat direction buffering (tap window + attack link lock).

use super::{Direction, DirectionInput};
use crate::timer::decrement_timer;

/// Short-lived "tapped direction" intent used to aim attacks and blocks.
///
/// - `combat_dir` живёт `tap_window` секунд после тапа, затем сбрасывается
///   (aim falls back to movement facing)
/// - `link_timer` запускается в конце атаки; пока он > 0, направление атаки
///   не переключается (attack chains stay on target)
#[derive(Debug, Clone, PartialEq)]
pub struct CombatDirectionBuffer {
    combat_dir: Option<Direction>,
    combat_dir_timer: f32,
    link_timer: f32,
    tap_window: f32,
    link_window: f32,
}

impl CombatDirectionBuffer {
    pub fn new(tap_window: f32, link_window: f32) -> Self {
        Self {
            combat_dir: None,
            combat_dir_timer: 0.0,
            link_timer: 0.0,
            tap_window,
            link_window,
        }
    }

    pub fn combat_dir(&self) -> Option<Direction> {
        self.combat_dir
    }

    pub fn combat_dir_timer(&self) -> f32 {
        self.combat_dir_timer
    }

    pub fn link_timer(&self) -> f32 {
        self.link_timer
    }

    /// Register freshly tapped directions.
    ///
    /// First tapped direction that differs from the buffered one wins;
    /// re-tapping the buffered direction does NOT refresh the window.
    pub fn register_taps(&mut self, tapped: &DirectionInput) {
        let candidate = tapped
            .iter()
            .enumerate()
            .filter(|(_, tap)| **tap)
            .filter_map(|(index, _)| Direction::from_index(index))
            .find(|direction| self.combat_dir != Some(*direction));

        if let Some(direction) = candidate {
            self.combat_dir = Some(direction);
            self.combat_dir_timer = self.tap_window;
        }
    }

    /// No chain lock active.
    pub fn can_switch(&self) -> bool {
        self.link_timer == 0.0
    }

    /// Direction an attack/block should face.
    ///
    /// Returns `(direction, switched)`: the buffered combat direction when
    /// no link lock is active, otherwise `facing` unchanged.
    pub fn switch_to_combat_direction(&self, facing: Direction) -> (Direction, bool) {
        match self.combat_dir {
            Some(direction) if self.can_switch() => (direction, true),
            _ => (facing, false),
        }
    }

    /// Start the link lock (end of an attack animation).
    pub fn start_link(&mut self) {
        self.link_timer = self.link_window;
    }

    /// Advance both countdowns by one fixed step.
    pub fn tick(&mut self, rate: f32) {
        if self.combat_dir_timer > 0.0 {
            let step = decrement_timer(self.combat_dir_timer, rate);
            self.combat_dir_timer = step.next;
            if step.expired {
                self.combat_dir = None;
            }
        }

        if self.link_timer > 0.0 {
            self.link_timer = decrement_timer(self.link_timer, rate).next;
        }
    }
}
