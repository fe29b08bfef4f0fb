//! Core item vocabulary: classes, slots, qualities, stat kinds

use serde::{Deserialize, Serialize};
use std::fmt;

/// Item class as stored on the item template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemClass {
    Weapon,
    Armor,
    /// Any other class (consumables, containers, reagents...)
    Other(u32),
}

impl ItemClass {
    pub fn from_id(id: u32) -> Self {
        match id {
            2 => ItemClass::Weapon,
            4 => ItemClass::Armor,
            other => ItemClass::Other(other),
        }
    }

    pub fn id(&self) -> u32 {
        match self {
            ItemClass::Weapon => 2,
            ItemClass::Armor => 4,
            ItemClass::Other(id) => *id,
        }
    }
}

impl fmt::Display for ItemClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemClass::Weapon => write!(f, "Weapon"),
            ItemClass::Armor => write!(f, "Armor"),
            ItemClass::Other(id) => write!(f, "Class {}", id),
        }
    }
}

/// Inventory (equip) slot of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InventoryType {
    NonEquip,
    Head,
    Neck,
    Shoulders,
    Shirt,
    Chest,
    Waist,
    Legs,
    Feet,
    Wrists,
    Hands,
    Finger,
    Trinket,
    OneHand,
    Shield,
    Bow,
    Back,
    TwoHand,
    Bag,
    Tabard,
    Robe,
    MainHand,
    OffHand,
    HeldOffHand,
    Ammo,
    Thrown,
    Ranged,
    Quiver,
    Relic,
}

impl InventoryType {
    /// All inventory types in id order
    pub fn all() -> &'static [InventoryType] {
        use InventoryType::*;
        &[
            NonEquip, Head, Neck, Shoulders, Shirt, Chest, Waist, Legs, Feet, Wrists, Hands,
            Finger, Trinket, OneHand, Shield, Bow, Back, TwoHand, Bag, Tabard, Robe, MainHand,
            OffHand, HeldOffHand, Ammo, Thrown, Ranged, Quiver, Relic,
        ]
    }

    pub fn from_id(id: u32) -> Option<Self> {
        Self::all().get(id as usize).copied()
    }

    pub fn id(&self) -> u32 {
        *self as u32
    }
}

impl fmt::Display for InventoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Item quality (rarity tier)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    Poor,
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Artifact,
    Heirloom,
}

impl Quality {
    pub fn all() -> &'static [Quality] {
        &[
            Quality::Poor,
            Quality::Common,
            Quality::Uncommon,
            Quality::Rare,
            Quality::Epic,
            Quality::Legendary,
            Quality::Artifact,
            Quality::Heirloom,
        ]
    }

    pub fn from_id(id: u32) -> Option<Self> {
        Self::all().get(id as usize).copied()
    }

    pub fn id(&self) -> u32 {
        *self as u32
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Stat kinds that can be written into an item's stat slots
///
/// `BonusArmor` and the resistances have no numeric stat id on the item
/// template; they are budgeted like any other stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    Mana,
    Health,
    Agility,
    Strength,
    Intellect,
    Spirit,
    Stamina,
    DefenseRating,
    DodgeRating,
    ParryRating,
    BlockRating,
    SpellCritRating,
    HitRating,
    CritRating,
    Resilience,
    HasteRating,
    ExpertiseRating,
    AttackPower,
    ManaRegen,
    ArmorPenetrationRating,
    SpellPower,
    HealthRegen,
    SpellPenetration,
    BlockValue,
    BonusArmor,
    ArcaneResistance,
    FireResistance,
    NatureResistance,
    FrostResistance,
    ShadowResistance,
}

impl StatKind {
    pub fn all() -> &'static [StatKind] {
        use StatKind::*;
        &[
            Mana,
            Health,
            Agility,
            Strength,
            Intellect,
            Spirit,
            Stamina,
            DefenseRating,
            DodgeRating,
            ParryRating,
            BlockRating,
            SpellCritRating,
            HitRating,
            CritRating,
            Resilience,
            HasteRating,
            ExpertiseRating,
            AttackPower,
            ManaRegen,
            ArmorPenetrationRating,
            SpellPower,
            HealthRegen,
            SpellPenetration,
            BlockValue,
            BonusArmor,
            ArcaneResistance,
            FireResistance,
            NatureResistance,
            FrostResistance,
            ShadowResistance,
        ]
    }

    /// Numeric stat id on the item template, if the stat has one
    pub fn stat_id(&self) -> Option<u32> {
        use StatKind::*;
        let id = match self {
            Mana => 1,
            Health => 2,
            Agility => 3,
            Strength => 4,
            Intellect => 5,
            Spirit => 6,
            Stamina => 7,
            DefenseRating => 12,
            DodgeRating => 13,
            ParryRating => 14,
            BlockRating => 15,
            SpellCritRating => 21,
            HitRating => 31,
            CritRating => 32,
            Resilience => 35,
            HasteRating => 36,
            ExpertiseRating => 37,
            AttackPower => 38,
            ManaRegen => 43,
            ArmorPenetrationRating => 44,
            SpellPower => 45,
            HealthRegen => 46,
            SpellPenetration => 47,
            BlockValue => 48,
            BonusArmor | ArcaneResistance | FireResistance | NatureResistance
            | FrostResistance | ShadowResistance => return None,
        };
        Some(id)
    }

    pub fn from_stat_id(id: u32) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.stat_id() == Some(id))
    }
}

/// Stat group tag carried by each stat model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatGroup {
    /// Attributes and resistances
    Primary,
    /// Ratings and other secondary stats
    Secondary,
    /// Armor bought with budget
    Armor,
}

/// Armor material used to pick a base armor curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmorType {
    Cloth,
    Leather,
    Mail,
    Plate,
    Shield,
}

impl ArmorType {
    /// Armor type for an armor subclass; unknown subclasses fall back to cloth
    pub fn from_subclass(subclass: u32) -> Self {
        match subclass {
            6 => ArmorType::Shield,
            1 => ArmorType::Cloth,
            2 => ArmorType::Leather,
            3 => ArmorType::Mail,
            4 => ArmorType::Plate,
            _ => ArmorType::Cloth,
        }
    }
}

/// Damage school of a weapon damage entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageSchool {
    Physical,
    Holy,
    Fire,
    Nature,
    Frost,
    Shadow,
    Arcane,
}

/// The categorical inputs every model reads
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemContext {
    pub class: ItemClass,
    pub inventory_type: InventoryType,
    pub subclass: u32,
    pub quality: Quality,
    pub level: u32,
}

impl ItemContext {
    pub fn new(
        class: ItemClass,
        inventory_type: InventoryType,
        subclass: u32,
        quality: Quality,
        level: u32,
    ) -> Self {
        ItemContext {
            class,
            inventory_type,
            subclass,
            quality,
            level,
        }
    }

    /// Item level as a float, the unit every curve is evaluated in
    pub fn level_f64(&self) -> f64 {
        self.level as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_type_ids_follow_declaration_order() {
        assert_eq!(InventoryType::Chest.id(), 5);
        assert_eq!(InventoryType::OneHand.id(), 13);
        assert_eq!(InventoryType::Robe.id(), 20);
        assert_eq!(InventoryType::Relic.id(), 28);
        assert_eq!(InventoryType::from_id(26), Some(InventoryType::Ranged));
        assert_eq!(InventoryType::from_id(29), None);
    }

    #[test]
    fn test_item_class_ids() {
        assert_eq!(ItemClass::from_id(4), ItemClass::Armor);
        assert_eq!(ItemClass::from_id(2), ItemClass::Weapon);
        assert_eq!(ItemClass::from_id(0), ItemClass::Other(0));
        assert_eq!(ItemClass::Other(15).id(), 15);
    }

    #[test]
    fn test_armor_type_defaults_to_cloth() {
        assert_eq!(ArmorType::from_subclass(6), ArmorType::Shield);
        assert_eq!(ArmorType::from_subclass(4), ArmorType::Plate);
        assert_eq!(ArmorType::from_subclass(0), ArmorType::Cloth);
        assert_eq!(ArmorType::from_subclass(9), ArmorType::Cloth);
    }

    #[test]
    fn test_stat_ids() {
        assert_eq!(StatKind::Stamina.stat_id(), Some(7));
        assert_eq!(StatKind::from_stat_id(45), Some(StatKind::SpellPower));
        assert_eq!(StatKind::BonusArmor.stat_id(), None);
    }
}
