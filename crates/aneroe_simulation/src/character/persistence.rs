//! Save / load snapshots of a player character.
//!
//! Формат и версионирование на стороне save layer; ядро только
//! собирает и применяет `CharacterSaveData`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::{CharacterEvent, PlayerCharacter};
use crate::components::{Health, Inventory, InventorySaveData, StatLevels};
use crate::item_system::Item;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterSaveData {
    pub pos_x: f32,
    pub pos_y: f32,
    pub stat_levels: Vec<u32>,
    pub inventory: InventorySaveData,
}

impl PlayerCharacter {
    pub fn save(&self, position: Vec2, stats: &StatLevels, inventory: &Inventory) -> CharacterSaveData {
        CharacterSaveData {
            pos_x: position.x,
            pos_y: position.y,
            stat_levels: stats.0.clone(),
            inventory: inventory.save(),
        }
    }

    /// Apply a snapshot: re-publish health, re-announce loaded items, re-equip.
    pub fn load(
        &mut self,
        data: &CharacterSaveData,
        position: &mut Vec2,
        stats: &mut StatLevels,
        inventory: &mut Inventory,
        health: &Health,
    ) -> Vec<CharacterEvent> {
        *position = Vec2::new(data.pos_x, data.pos_y);
        stats.0 = data.stat_levels.clone();

        let mut events = vec![CharacterEvent::HealthChanged {
            current: health.current,
            max: health.max,
        }];

        inventory.load(&data.inventory);
        // UI заново узнаёт о каждом предмете, как при pickup
        events.extend(inventory.items().map(|(slot, item)| CharacterEvent::ItemPickedUp {
            source: None,
            item: item.id.clone(),
            slot,
        }));
        events.extend(self.reset_active_item(inventory));
        events
    }

    /// New game: pick up the default items, then equip.
    pub fn load_first_time(&mut self, default_items: &[Item], inventory: &mut Inventory) -> Vec<CharacterEvent> {
        let mut events = Vec::new();
        for item in default_items {
            events.extend(self.pick_up(None, item.clone(), inventory));
        }
        events.extend(self.reset_active_item(inventory));
        events
    }
}
