//! Inventory component (fixed slots + equipped slot)
//!
//! # Архитектура
//!
//! - `slots`: фиксированное число слотов (hotbar + extra)
//! - `equipped_slot`: индекс слота, чей предмет сейчас "в руках"
//! - Активный предмет = `slots[equipped_slot]` (может быть пустым)
//! - Save/Load через `InventorySaveData`

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::item_system::Item;

/// Default capacity (hotbar 4 + extra 4)
pub const DEFAULT_INVENTORY_SLOTS: usize = 8;

#[derive(Component, Debug, Clone, PartialEq)]
pub struct Inventory {
    slots: Vec<Option<Item>>,
    pub equipped_slot: usize,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_INVENTORY_SLOTS)
    }
}

impl Inventory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            equipped_slot: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn get_item(&self, slot: usize) -> Option<&Item> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    /// Предмет в equipped слоте
    pub fn active_item(&self) -> Option<&Item> {
        self.get_item(self.equipped_slot)
    }

    /// Put `item` into the first free slot, returns that slot.
    pub fn add_item(&mut self, item: Item) -> CoreResult<usize> {
        let slot = self
            .slots
            .iter()
            .position(Option::is_none)
            .ok_or(CoreError::InventoryFull)?;
        self.slots[slot] = Some(item);
        Ok(slot)
    }

    /// Overwrite a slot, returns the previous occupant.
    pub fn set_item(&mut self, slot: usize, item: Item) -> CoreResult<Option<Item>> {
        let capacity = self.capacity();
        let entry = self
            .slots
            .get_mut(slot)
            .ok_or(CoreError::InvalidSlot { slot, capacity })?;
        Ok(entry.replace(item))
    }

    pub fn remove_item(&mut self, slot: usize) -> CoreResult<Option<Item>> {
        let capacity = self.capacity();
        let entry = self
            .slots
            .get_mut(slot)
            .ok_or(CoreError::InvalidSlot { slot, capacity })?;
        Ok(entry.take())
    }

    /// Apply a UI move: take `item` out of `prev_slot` (if any) and put it
    /// into `new_slot` (if any). `None → Some` is a drop-in, `Some → None`
    /// a drop to the world.
    ///
    /// Returns whatever previously occupied `new_slot`.
    pub fn apply_move(&mut self, mv: &ItemMoved) -> CoreResult<Option<Item>> {
        let capacity = self.capacity();
        for slot in [mv.prev_slot, mv.new_slot].into_iter().flatten() {
            if slot >= capacity {
                return Err(CoreError::InvalidSlot { slot, capacity });
            }
        }

        if let Some(prev) = mv.prev_slot {
            self.slots[prev] = None;
        }
        match mv.new_slot {
            Some(new) => Ok(self.slots[new].replace(mv.item.clone())),
            None => Ok(None),
        }
    }

    /// true if the move touched the equipped slot
    pub fn affects_equipped(&self, mv: &ItemMoved) -> bool {
        mv.prev_slot == Some(self.equipped_slot) || mv.new_slot == Some(self.equipped_slot)
    }

    /// Occupied slots in slot order
    pub fn items(&self) -> impl Iterator<Item = (usize, &Item)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, item)| item.as_ref().map(|item| (slot, item)))
    }

    pub fn save(&self) -> InventorySaveData {
        InventorySaveData {
            slots: self.slots.clone(),
            equipped_slot: self.equipped_slot,
        }
    }

    /// Replace contents with a snapshot.
    ///
    /// Capacity follows the snapshot; an out-of-range equipped slot falls back to 0.
    pub fn load(&mut self, data: &InventorySaveData) {
        self.slots = data.slots.clone();
        self.equipped_slot = if data.equipped_slot < self.slots.len() {
            data.equipped_slot
        } else {
            0
        };
    }
}

/// Item dragged between slots (or in/out of the inventory) by the UI
#[derive(Event, Debug, Clone, PartialEq)]
pub struct ItemMoved {
    pub entity: Entity,
    pub prev_slot: Option<usize>,
    pub new_slot: Option<usize>,
    pub item: Item,
}

/// Inventory snapshot (format owned by the save layer)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventorySaveData {
    pub slots: Vec<Option<Item>>,
    pub equipped_slot: usize,
}
