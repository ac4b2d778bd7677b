//! Party of controllable characters (one active at a time).

use bevy::prelude::*;

use crate::character::CharacterBundle;
use crate::components::ActiveCharacter;
use crate::error::{CoreError, CoreResult};
use crate::logger;

/// Ordered party members + index of the one the player controls.
///
/// Only the active character receives input and fixed ticks.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct Party {
    members: Vec<Entity>,
    active: usize,
}

impl Party {
    pub fn new(members: Vec<Entity>) -> CoreResult<Self> {
        if members.is_empty() {
            return Err(CoreError::EmptyParty);
        }
        Ok(Self { members, active: 0 })
    }

    pub fn members(&self) -> &[Entity] {
        &self.members
    }

    pub fn active(&self) -> Entity {
        self.members[self.active]
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Rotate to the next member; returns `(old, new)`.
    pub fn rotate(&mut self) -> (Entity, Entity) {
        let old = self.active();
        self.active = (self.active + 1) % self.members.len();
        (old, self.active())
    }
}

/// Spawn validated character bundles and install the `Party` resource.
///
/// First bundle becomes the active character.
pub fn spawn_party(world: &mut World, bundles: Vec<CharacterBundle>) -> CoreResult<Party> {
    if bundles.is_empty() {
        return Err(CoreError::EmptyParty);
    }

    let members: Vec<Entity> = bundles.into_iter().map(|bundle| world.spawn(bundle).id()).collect();
    let party = Party::new(members)?;
    world.entity_mut(party.active()).insert(ActiveCharacter);
    world.insert_resource(party.clone());

    logger::log_info(&format!("👥 Party spawned: {} characters", party.members().len()));
    Ok(party)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_party_rejected() {
        assert_eq!(Party::new(Vec::new()), Err(CoreError::EmptyParty));
    }

    #[test]
    fn test_rotate_wraps() {
        let a = Entity::from_raw(1);
        let b = Entity::from_raw(2);
        let mut party = Party::new(vec![a, b]).unwrap();

        assert_eq!(party.active(), a);
        assert_eq!(party.rotate(), (a, b));
        assert_eq!(party.rotate(), (b, a));
        assert_eq!(party.active_index(), 0);
    }

    #[test]
    fn test_single_member_rotates_to_itself() {
        let a = Entity::from_raw(1);
        let mut party = Party::new(vec![a]).unwrap();
        assert_eq!(party.rotate(), (a, a));
    }
}
