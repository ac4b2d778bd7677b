//! Item System: предметы и их боевые capability
//!
//! # Архитектура
//!
//! **Item**: конкретный предмет (id + имя + kind):
//! - Хранится в `Inventory` слотах
//! - Активный предмет = `inventory[equipped_slot]`
//!
//! **ItemKind**: tagged union категорий:
//! - Weapon → может атаковать/блокировать (по `WeaponProfile`)
//! - Tool / Consumable / Material → не боевые
//!
//! **CombatCapable**: capability интерфейс вместо проверки типа:
//! state machine спрашивает `can_attack()` / `can_block()` и вызывает
//! `try_start_attack(dir)` / `try_start_block(dir)`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::direction::Direction;

// ============================================================================
// ItemId
// ============================================================================

/// Item identifier (unique string ID)
///
/// # Examples
/// - "wooden_sword"
/// - "pickaxe"
/// - "health_potion"
#[derive(Clone, Debug, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub struct ItemId(pub String);

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// ItemKind
// ============================================================================

/// Weapon capabilities
#[derive(Clone, Copy, Debug, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub struct WeaponProfile {
    /// Может ли атаковать
    pub can_attack: bool,
    /// Может ли блокировать
    pub can_block: bool,
}

impl Default for WeaponProfile {
    fn default() -> Self {
        Self {
            can_attack: true,
            can_block: true,
        }
    }
}

/// Тип предмета (категория)
#[derive(Clone, Debug, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub enum ItemKind {
    /// Weapon (меч, копьё)
    Weapon(WeaponProfile),
    /// Tool (кирка, топор для ресурсов)
    Tool,
    /// Consumable (зелья, еда)
    Consumable,
    /// Craft material
    Material,
}

// ============================================================================
// Item
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub kind: ItemKind,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id: ItemId(id.into()),
            name: name.into(),
            kind,
        }
    }

    /// Sword preset (attack + block)
    pub fn sword() -> Self {
        Self::new("wooden_sword", "Wooden Sword", ItemKind::Weapon(WeaponProfile::default()))
    }

    /// Dagger preset (быстрое оружие без блока)
    pub fn dagger() -> Self {
        Self::new(
            "dagger",
            "Dagger",
            ItemKind::Weapon(WeaponProfile {
                can_attack: true,
                can_block: false,
            }),
        )
    }

    pub fn pickaxe() -> Self {
        Self::new("pickaxe", "Pickaxe", ItemKind::Tool)
    }

    pub fn health_potion() -> Self {
        Self::new("health_potion", "Health Potion", ItemKind::Consumable)
    }
}

// ============================================================================
// Combat capability
// ============================================================================

/// Attack or block
#[derive(Clone, Copy, Debug, PartialEq, Eq, Reflect)]
pub enum WeaponUseKind {
    Attack,
    Block,
}

/// Weapon use approved by the item (handed to the animation/hitbox layer).
#[derive(Clone, Debug, PartialEq)]
pub struct WeaponUse {
    pub item: ItemId,
    pub kind: WeaponUseKind,
    pub direction: Direction,
}

/// Capability interface of an equipped item.
pub trait CombatCapable {
    fn can_attack(&self) -> bool;

    fn can_block(&self) -> bool;

    /// Start an attack facing `direction`; None if the item cannot attack.
    fn try_start_attack(&self, direction: Direction) -> Option<WeaponUse>;

    /// Start a block facing `direction`; None if the item cannot block.
    fn try_start_block(&self, direction: Direction) -> Option<WeaponUse>;
}

impl CombatCapable for Item {
    fn can_attack(&self) -> bool {
        matches!(self.kind, ItemKind::Weapon(WeaponProfile { can_attack: true, .. }))
    }

    fn can_block(&self) -> bool {
        matches!(self.kind, ItemKind::Weapon(WeaponProfile { can_block: true, .. }))
    }

    fn try_start_attack(&self, direction: Direction) -> Option<WeaponUse> {
        self.can_attack().then(|| WeaponUse {
            item: self.id.clone(),
            kind: WeaponUseKind::Attack,
            direction,
        })
    }

    fn try_start_block(&self, direction: Direction) -> Option<WeaponUse> {
        self.can_block().then(|| WeaponUse {
            item: self.id.clone(),
            kind: WeaponUseKind::Block,
            direction,
        })
    }
}
