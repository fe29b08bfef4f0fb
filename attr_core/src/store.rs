//! ItemStore - Read/write access to the item being derived
//!
//! The engine never owns items. It reads the categorical inputs and writes its
//! outputs through this trait, so any item database can be plugged in.
//! [`ItemTemplate`] is a plain in-memory implementation.

use crate::types::{DamageSchool, InventoryType, ItemClass, ItemContext, Quality, StatKind};
use serde::{Deserialize, Serialize};

/// Number of stat slots on an item
pub const MAX_STAT_SLOTS: usize = 10;

/// Number of damage entries on an item
pub const MAX_DAMAGE_ENTRIES: usize = 2;

/// One used stat slot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatSlot {
    pub kind: StatKind,
    pub value: i32,
}

/// One weapon damage entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageEntry {
    pub min: u32,
    pub max: u32,
    pub school: DamageSchool,
}

/// Item fields read and written during a derivation pass
pub trait ItemStore {
    fn class(&self) -> ItemClass;
    fn subclass(&self) -> u32;
    fn inventory_type(&self) -> InventoryType;
    fn quality(&self) -> Quality;
    fn item_level(&self) -> u32;

    fn armor(&self) -> u32;
    fn set_armor(&mut self, armor: u32);
    fn bonus_armor(&self) -> u32;

    /// Attack speed in milliseconds, 0 when unset
    fn delay(&self) -> u32;
    fn damage_entry(&self, index: usize) -> Option<DamageEntry>;
    fn clear_damage(&mut self);
    fn add_physical_damage(&mut self, min: u32, max: u32);

    /// Stat slot at `index`, `None` when the slot is clear
    fn stat_slot(&self, index: usize) -> Option<StatSlot>;
    fn clear_all_stats(&mut self);
    fn add_stat(&mut self, kind: StatKind, value: i32);

    fn sell_price(&self) -> u32;
    fn buy_price(&self) -> u32;
    fn set_price(&mut self, sell: u32, buy: u32, buy_count: u32);

    fn disenchant_id(&self) -> i32;
    fn set_disenchant_id(&mut self, id: i32);

    /// Budget cached by the last derivation pass
    fn budget(&self) -> f64;
    fn set_budget(&mut self, budget: f64);

    /// The categorical inputs of this item
    fn context(&self) -> ItemContext {
        ItemContext::new(
            self.class(),
            self.inventory_type(),
            self.subclass(),
            self.quality(),
            self.item_level(),
        )
    }

    fn damage_entries(&self) -> Vec<DamageEntry> {
        (0..MAX_DAMAGE_ENTRIES)
            .filter_map(|i| self.damage_entry(i))
            .collect()
    }

    fn stat_slots(&self) -> Vec<StatSlot> {
        (0..MAX_STAT_SLOTS).filter_map(|i| self.stat_slot(i)).collect()
    }
}

/// In-memory item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemTemplate {
    pub id: u32,
    pub name: String,
    pub class: ItemClass,
    pub subclass: u32,
    pub inventory_type: InventoryType,
    pub quality: Quality,
    pub item_level: u32,
    #[serde(default)]
    pub armor: u32,
    #[serde(default)]
    pub bonus_armor: u32,
    #[serde(default)]
    pub delay: u32,
    #[serde(default)]
    pub damage: Vec<DamageEntry>,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub sell_price: u32,
    #[serde(default)]
    pub buy_price: u32,
    #[serde(default = "default_buy_count")]
    pub buy_count: u32,
    #[serde(default)]
    pub disenchant_id: i32,
    #[serde(default)]
    pub budget: f64,
}

fn default_buy_count() -> u32 {
    1
}

impl ItemTemplate {
    pub fn new(
        class: ItemClass,
        inventory_type: InventoryType,
        subclass: u32,
        quality: Quality,
        item_level: u32,
    ) -> Self {
        ItemTemplate {
            id: 0,
            name: String::new(),
            class,
            subclass,
            inventory_type,
            quality,
            item_level,
            armor: 0,
            bonus_armor: 0,
            delay: 0,
            damage: Vec::new(),
            stats: Vec::new(),
            sell_price: 0,
            buy_price: 0,
            buy_count: 1,
            disenchant_id: 0,
            budget: 0.0,
        }
    }

    pub fn armor_piece(inventory_type: InventoryType, subclass: u32, quality: Quality, item_level: u32) -> Self {
        Self::new(ItemClass::Armor, inventory_type, subclass, quality, item_level)
    }

    pub fn weapon(inventory_type: InventoryType, subclass: u32, quality: Quality, item_level: u32) -> Self {
        Self::new(ItemClass::Weapon, inventory_type, subclass, quality, item_level)
    }

    pub fn with_name(mut self, id: u32, name: &str) -> Self {
        self.id = id;
        self.name = name.to_string();
        self
    }

    pub fn with_delay(mut self, delay: u32) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_bonus_armor(mut self, bonus_armor: u32) -> Self {
        self.bonus_armor = bonus_armor;
        self
    }

    /// Value of the first slot holding `kind`
    pub fn stat(&self, kind: StatKind) -> Option<i32> {
        self.stats.iter().find(|s| s.kind == kind).map(|s| s.value)
    }
}

impl ItemStore for ItemTemplate {
    fn class(&self) -> ItemClass {
        self.class
    }

    fn subclass(&self) -> u32 {
        self.subclass
    }

    fn inventory_type(&self) -> InventoryType {
        self.inventory_type
    }

    fn quality(&self) -> Quality {
        self.quality
    }

    fn item_level(&self) -> u32 {
        self.item_level
    }

    fn armor(&self) -> u32 {
        self.armor
    }

    fn set_armor(&mut self, armor: u32) {
        self.armor = armor;
    }

    fn bonus_armor(&self) -> u32 {
        self.bonus_armor
    }

    fn delay(&self) -> u32 {
        self.delay
    }

    fn damage_entry(&self, index: usize) -> Option<DamageEntry> {
        self.damage.get(index).copied()
    }

    fn clear_damage(&mut self) {
        self.damage.clear();
    }

    fn add_physical_damage(&mut self, min: u32, max: u32) {
        if self.damage.len() >= MAX_DAMAGE_ENTRIES {
            log::warn!("item {}: no free damage entry for {}-{}", self.id, min, max);
            return;
        }
        self.damage.push(DamageEntry {
            min,
            max,
            school: DamageSchool::Physical,
        });
    }

    fn stat_slot(&self, index: usize) -> Option<StatSlot> {
        self.stats.get(index).copied()
    }

    fn clear_all_stats(&mut self) {
        self.stats.clear();
    }

    fn add_stat(&mut self, kind: StatKind, value: i32) {
        if self.stats.len() >= MAX_STAT_SLOTS {
            log::warn!("item {}: no free stat slot for {:?} {}", self.id, kind, value);
            return;
        }
        self.stats.push(StatSlot { kind, value });
    }

    fn sell_price(&self) -> u32 {
        self.sell_price
    }

    fn buy_price(&self) -> u32 {
        self.buy_price
    }

    fn set_price(&mut self, sell: u32, buy: u32, buy_count: u32) {
        self.sell_price = sell;
        self.buy_price = buy;
        self.buy_count = buy_count;
    }

    fn disenchant_id(&self) -> i32 {
        self.disenchant_id
    }

    fn set_disenchant_id(&mut self, id: i32) {
        self.disenchant_id = id;
    }

    fn budget(&self) -> f64 {
        self.budget
    }

    fn set_budget(&mut self, budget: f64) {
        self.budget = budget;
    }
}
