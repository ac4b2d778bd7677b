//! Facing-indexed interaction probe (item pickup, interactive tiles).

use bevy::prelude::*;

use super::{CharacterEvent, PlayerCharacter};
use crate::components::{Inventory, ItemMoved, MovementGate};
use crate::direction::Direction;
use crate::item_system::Item;
use crate::logger;

/// Physics layers the interaction probe looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractLayer {
    InteractiveTile,
    Item,
}

pub const INTERACT_LAYERS: [InteractLayer; 2] = [InteractLayer::InteractiveTile, InteractLayer::Item];

/// Something found by the overlap query.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractCandidate {
    Tile { entity: Entity },
    Item { entity: Entity, item: Item },
}

impl InteractCandidate {
    pub fn layer(&self) -> InteractLayer {
        match self {
            InteractCandidate::Tile { .. } => InteractLayer::InteractiveTile,
            InteractCandidate::Item { .. } => InteractLayer::Item,
        }
    }
}

/// Physics collaborator: circle overlap against the given layers.
pub trait OverlapQuery {
    fn overlap_circle(&self, center: Vec2, radius: f32, layers: &[InteractLayer]) -> Vec<InteractCandidate>;
}

/// Interaction offsets (one per facing) and probe radius.
///
/// Derived from the collider size `(w, h)`:
/// - Up: `(0, 1.25 · h/2)`
/// - Right: `(1.5 · w/2, 0)`
/// - Down: `(0, −1.75 · h/2)`
/// - Left: `(−1.5 · w/2, 0)`
/// - radius: `0.5 · (w + h)/2`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionShape {
    pub offsets: [Vec2; 4],
    pub radius: f32,
}

impl InteractionShape {
    pub fn from_collider(size: Vec2) -> Self {
        let half_w = 0.5 * size.x;
        let half_h = 0.5 * size.y;
        Self {
            offsets: [
                Vec2::new(0.0, 1.25 * half_h),
                Vec2::new(1.5 * half_w, 0.0),
                Vec2::new(0.0, -1.75 * half_h),
                Vec2::new(-1.5 * half_w, 0.0),
            ],
            radius: 0.5 * ((size.x + size.y) / 2.0),
        }
    }

    pub fn offset(&self, facing: Direction) -> Vec2 {
        self.offsets[facing.index()]
    }
}

impl PlayerCharacter {
    /// Probe center in front of the character (also the UI drop position).
    pub fn interact_position(&self, position: Vec2) -> Vec2 {
        position + self.interaction.offset(self.facing)
    }

    /// World position for items dropped out of the UI.
    pub fn drop_position(&self, position: Vec2) -> Vec2 {
        self.interact_position(position)
    }

    /// Manual interaction: pick up the first overlapping item.
    ///
    /// One or many candidates resolve the same way (first wins) until a
    /// choice UI exists.
    pub fn try_interacting(
        &self,
        gate: &impl MovementGate,
        position: Vec2,
        inventory: &mut Inventory,
        probe: &dyn OverlapQuery,
    ) -> Vec<CharacterEvent> {
        if !gate.can_act_out_of_movement() {
            return Vec::new();
        }

        let center = self.interact_position(position);
        let candidates = probe.overlap_circle(center, self.interaction.radius, &INTERACT_LAYERS);
        let Some(InteractCandidate::Item { entity, item }) = candidates.into_iter().next() else {
            return Vec::new();
        };

        if inventory.is_full() {
            return Vec::new();
        }
        self.pick_up(Some(entity), item, inventory)
    }

    /// Automatic pickup when walking over an item.
    ///
    /// Coexists with `try_interacting` on purpose; no movement gate here.
    pub fn on_item_trigger_enter(
        &self,
        entity: Entity,
        item: Item,
        inventory: &mut Inventory,
    ) -> Vec<CharacterEvent> {
        self.pick_up(Some(entity), item, inventory)
    }

    /// UI moved an item; re-equip when the equipped slot changed.
    pub fn on_item_moved(&mut self, mv: &ItemMoved, inventory: &mut Inventory) -> Vec<CharacterEvent> {
        if let Err(err) = inventory.apply_move(mv) {
            logger::log_warning(&format!("📦 {}: item move rejected: {}", self.name, err));
            return Vec::new();
        }

        if inventory.affects_equipped(mv) {
            self.reset_active_item(inventory)
        } else {
            Vec::new()
        }
    }

    pub(crate) fn pick_up(
        &self,
        source: Option<Entity>,
        item: Item,
        inventory: &mut Inventory,
    ) -> Vec<CharacterEvent> {
        let id = item.id.clone();
        match inventory.add_item(item) {
            Ok(slot) => {
                logger::log_info(&format!("📦 {}: picked up {} (slot {})", self.name, id, slot));
                vec![CharacterEvent::ItemPickedUp { source, item: id, slot }]
            }
            Err(err) => {
                logger::log_warning(&format!("📦 {}: cannot pick up {}: {}", self.name, id, err));
                Vec::new()
            }
        }
    }
}
