//! Movement компоненты: speed factor, quicken/slowen модификаторы

use bevy::prelude::*;

use crate::config::CharacterConfig;

/// Speed multiplier category, set as a side effect of state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum SpeedFactor {
    #[default]
    Normal,
    Attack,
    Block,
}

impl SpeedFactor {
    pub fn multiplier(self, config: &CharacterConfig) -> f32 {
        match self {
            SpeedFactor::Normal => config.normal_speed_factor,
            SpeedFactor::Attack => config.attack_speed_factor,
            SpeedFactor::Block => config.block_speed_factor,
        }
    }
}

/// Held "quicken"/"slowen" modifiers (updated on every input event)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct SpeedModifiers {
    pub quicken: bool,
    pub slowen: bool,
}

impl SpeedModifiers {
    /// Both held → they stack (cancel out roughly with default config)
    pub fn multiplier(&self, config: &CharacterConfig) -> f32 {
        let mut multiplier = 1.0;
        if self.quicken {
            multiplier *= config.quicken_multiplier;
        }
        if self.slowen {
            multiplier *= config.slowen_multiplier;
        }
        multiplier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_factor_multipliers() {
        let config = CharacterConfig::default();
        assert_eq!(SpeedFactor::Normal.multiplier(&config), 1.0);
        assert_eq!(SpeedFactor::Attack.multiplier(&config), 0.3);
        assert_eq!(SpeedFactor::Block.multiplier(&config), 0.5);
    }

    #[test]
    fn test_modifiers_stack() {
        let config = CharacterConfig::default();
        let none = SpeedModifiers::default();
        let quick = SpeedModifiers { quicken: true, slowen: false };
        let both = SpeedModifiers { quicken: true, slowen: true };

        assert_eq!(none.multiplier(&config), 1.0);
        assert_eq!(quick.multiplier(&config), 1.5);
        assert_eq!(both.multiplier(&config), 0.75);
    }
}
