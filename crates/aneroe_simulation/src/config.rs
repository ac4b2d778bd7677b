//! Tuning parameters for player characters.

use bevy::prelude::*;

/// Параметры персонажа (буферы ввода, speed factors)
///
/// Insert as a resource for party-wide defaults; `CharacterBuilder` copies
/// it into each character.
#[derive(Resource, Debug, Clone, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct CharacterConfig {
    /// Tap buffer window for the combat direction (seconds)
    pub direction_tap_buffer: f32,
    /// Link lock after an attack animation ends (seconds)
    pub link_attacks_buffer: f32,
    /// Speed multiplier while walking / idle
    pub normal_speed_factor: f32,
    /// Speed multiplier while attacking
    pub attack_speed_factor: f32,
    /// Speed multiplier while blocking
    pub block_speed_factor: f32,
    /// Extra multiplier while "quicken" is held
    pub quicken_multiplier: f32,
    /// Extra multiplier while "slowen" is held
    pub slowen_multiplier: f32,
    /// Base walking speed (units/sec)
    pub base_walk_speed: f32,
    /// Fixed simulation rate
    pub fixed_hz: f64,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            direction_tap_buffer: 0.2,
            link_attacks_buffer: 0.1,
            normal_speed_factor: 1.0,
            attack_speed_factor: 0.3,
            block_speed_factor: 0.5,
            quicken_multiplier: 1.5,
            slowen_multiplier: 0.5,
            base_walk_speed: 2.0,
            fixed_hz: 60.0,
        }
    }
}

impl CharacterConfig {
    /// Duration of one fixed tick (seconds)
    pub fn fixed_step(&self) -> f32 {
        (1.0 / self.fixed_hz) as f32
    }
}

/// Кто сейчас получает ввод: игровой мир или открытое меню
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Free,
    Ui,
}
