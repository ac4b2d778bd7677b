//! Player core events (host ↔ ECS).
//!
//! Входящие (host → ECS): `PlayerInputEvent`, `AnimationFinished`,
//! `ItemTriggerEntered`, `InteractIntent`, `ItemMoved`, `LoadCharacter`,
//! `SaveRequested`.
//!
//! Исходящие (ECS → host): `WeaponUseStarted`, `ItemPickedUp`,
//! `ItemEquipChanged`, `PlayerHealthChanged`, `RestartRequested`,
//! `ActiveCharacterChanged`, `CharacterSaved` и `AnimationCommandEvent`
//! (см. `crate::animation`).

use bevy::prelude::*;

use crate::character::CharacterSaveData;
use crate::direction::DirectionInput;
use crate::item_system::{Item, ItemId, WeaponUse};

/// Player input snapshot, emitted by the host once per input change.
///
/// # Fields
/// - `held` / `tapped`: 4-way arrays, order up/right/down/left
///   (`tapped` = pressed this frame)
/// - `attack` / `defend`: held
/// - `switch_character`: pressed this frame
/// - `quicken` / `slowen`: held speed modifiers
#[derive(Event, Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerInputEvent {
    pub held: DirectionInput,
    pub tapped: DirectionInput,
    pub attack: bool,
    pub defend: bool,
    pub switch_character: bool,
    pub quicken: bool,
    pub slowen: bool,
}

impl PlayerInputEvent {
    /// Direction counts as active when tapped or held
    pub fn active_directions(&self) -> DirectionInput {
        let mut active = [false; 4];
        for (index, slot) in active.iter_mut().enumerate() {
            *slot = self.held[index] || self.tapped[index];
        }
        active
    }

    pub fn any_direction(&self) -> bool {
        self.active_directions().iter().any(|active| *active)
    }
}

/// Which animation the host reports as finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    WalkCycle,
    WeaponUse,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationFinished {
    pub entity: Entity,
    pub kind: AnimationKind,
}

/// Character walked into an item's trigger (host physics)
#[derive(Event, Debug, Clone, PartialEq)]
pub struct ItemTriggerEntered {
    pub entity: Entity,
    pub item_entity: Entity,
    pub item: Item,
}

/// Manual "interact" request for the active character
#[derive(Event, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractIntent;

/// Restore a character: `Some(data)` from a save, `None` = new game
#[derive(Event, Debug, Clone, PartialEq)]
pub struct LoadCharacter {
    pub entity: Entity,
    pub data: Option<CharacterSaveData>,
}

/// Snapshot every party member (answered with `CharacterSaved`)
#[derive(Event, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaveRequested;

#[derive(Event, Debug, Clone, PartialEq)]
pub struct CharacterSaved {
    pub entity: Entity,
    pub data: CharacterSaveData,
}

// ============================================================================
// Outgoing
// ============================================================================

#[derive(Event, Debug, Clone, PartialEq)]
pub struct WeaponUseStarted {
    pub entity: Entity,
    pub weapon_use: WeaponUse,
}

#[derive(Event, Debug, Clone, PartialEq)]
pub struct ItemPickedUp {
    pub entity: Entity,
    /// World item entity (host despawns it); None for default/loaded items
    pub source: Option<Entity>,
    pub item: ItemId,
    pub slot: usize,
}

#[derive(Event, Debug, Clone, PartialEq)]
pub struct ItemEquipChanged {
    pub entity: Entity,
    pub item: ItemId,
    pub equipped: bool,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerHealthChanged {
    pub entity: Entity,
    pub current: u32,
    pub max: u32,
}

/// Party member died; host reloads the base scene
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestartRequested {
    pub entity: Entity,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveCharacterChanged {
    pub old: Entity,
    pub new: Entity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tapped_counts_as_active() {
        let input = PlayerInputEvent {
            held: [true, false, false, false],
            tapped: [false, false, false, true],
            ..Default::default()
        };
        assert_eq!(input.active_directions(), [true, false, false, true]);
        assert!(input.any_direction());
        assert!(!PlayerInputEvent::default().any_direction());
    }
}
