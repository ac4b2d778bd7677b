//! Player control markers and external collaborator handles.

use bevy::prelude::*;

/// Marker component для персонажа, которым сейчас управляет игрок
///
/// Только у одного entity партии. Input и fixed tick обрабатывают только его.
///
/// ```ignore
/// commands.entity(old).remove::<ActiveCharacter>();
/// commands.entity(new).insert(ActiveCharacter);
/// ```
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct ActiveCharacter;

/// Handle of the animator node that consumes `AnimationCommandEvent`s.
///
/// Required at setup: a character without an animator fails with
/// `CoreError::MissingCollaborator(Collaborator::Animator)`.
#[derive(Component, Debug, Clone, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Animator {
    pub node_path: String,
}

impl Animator {
    pub fn new(node_path: impl Into<String>) -> Self {
        Self {
            node_path: node_path.into(),
        }
    }
}

/// Gating predicates owned by the animation / entity layer.
///
/// - `can_act_out_of_movement`: false while an attack/block animation plays
/// - `in_attack`: attack animation in progress
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct ActionGate {
    pub can_act_out_of_movement: bool,
    pub in_attack: bool,
}

impl Default for ActionGate {
    fn default() -> Self {
        Self {
            can_act_out_of_movement: true,
            in_attack: false,
        }
    }
}

/// Gating predicate provider
pub trait MovementGate {
    fn can_act_out_of_movement(&self) -> bool;
    fn in_attack(&self) -> bool;
}

impl MovementGate for ActionGate {
    fn can_act_out_of_movement(&self) -> bool {
        self.can_act_out_of_movement
    }

    fn in_attack(&self) -> bool {
        self.in_attack
    }
}
