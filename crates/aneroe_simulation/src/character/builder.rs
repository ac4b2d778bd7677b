//! Character setup with fail-fast collaborator validation.

use bevy::prelude::*;

use super::{InteractionShape, PlayerCharacter};
use crate::components::{ActionGate, Animator, Health, Inventory, SpeedModifiers, StatLevels};
use crate::config::CharacterConfig;
use crate::error::{Collaborator, CoreError, CoreResult};
use crate::item_system::Item;

/// Items a character owns when a save is loaded for the first time.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct DefaultItems(pub Vec<Item>);

/// Everything a player character entity needs.
#[derive(Bundle)]
pub struct CharacterBundle {
    pub character: PlayerCharacter,
    pub animator: Animator,
    pub inventory: Inventory,
    pub default_items: DefaultItems,
    pub health: Health,
    pub stats: StatLevels,
    pub gate: ActionGate,
    pub modifiers: SpeedModifiers,
    pub transform: Transform,
}

/// Builder for `CharacterBundle`.
///
/// Animator, inventory (equipped-item slot) and collider size are required;
/// `build()` fails with `MissingCollaborator` before the first tick otherwise.
#[derive(Debug, Clone, Default)]
pub struct CharacterBuilder {
    name: String,
    config: CharacterConfig,
    animator: Option<Animator>,
    inventory: Option<Inventory>,
    collider: Option<Vec2>,
    default_items: Vec<Item>,
    health: Health,
    stats: StatLevels,
    position: Vec2,
}

impl CharacterBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn config(mut self, config: CharacterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn animator(mut self, animator: Animator) -> Self {
        self.animator = Some(animator);
        self
    }

    pub fn inventory(mut self, inventory: Inventory) -> Self {
        self.inventory = Some(inventory);
        self
    }

    /// Collider size (width, height) in world units
    pub fn collider(mut self, size: Vec2) -> Self {
        self.collider = Some(size);
        self
    }

    pub fn default_items(mut self, items: Vec<Item>) -> Self {
        self.default_items = items;
        self
    }

    pub fn health(mut self, health: Health) -> Self {
        self.health = health;
        self
    }

    pub fn stats(mut self, stats: StatLevels) -> Self {
        self.stats = stats;
        self
    }

    pub fn position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn build(self) -> CoreResult<CharacterBundle> {
        let animator = self
            .animator
            .ok_or(CoreError::MissingCollaborator(Collaborator::Animator))?;
        let inventory = self
            .inventory
            .ok_or(CoreError::MissingCollaborator(Collaborator::EquipmentSlot))?;
        let collider = self
            .collider
            .ok_or(CoreError::MissingCollaborator(Collaborator::Collider))?;

        let character = PlayerCharacter::new(
            self.name,
            self.config,
            InteractionShape::from_collider(collider),
        );

        Ok(CharacterBundle {
            character,
            animator,
            inventory,
            default_items: DefaultItems(self.default_items),
            health: self.health,
            stats: self.stats,
            gate: ActionGate::default(),
            modifiers: SpeedModifiers::default(),
            transform: Transform::from_translation(self.position.extend(0.0)),
        })
    }
}
