//! Balance tables
//!
//! Immutable configuration read by every model: slot coefficients, quality
//! curves, stat efficiencies, weapon DPS and spread, weapon speeds and armor
//! base curves. The reference set is built once per process and shared via
//! [`default_tables`]; custom sets are built by overlaying a config file on top
//! of the defaults (see [`crate::config::load_tables`]).

mod armor;
mod quality;
mod slots;
mod stats;
mod weapons;

use crate::curve::{LinearCurve, Polynomial, SellCurve};
use crate::modifier::Modifier;
use crate::rules::{InclusiveRange, LevelBand, OneOrMany, Rule, SubclassFilter};
use crate::types::{ArmorType, InventoryType, ItemClass, ItemContext, Quality, StatGroup, StatKind};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Reference tables, built on first use
pub static DEFAULT_TABLES: Lazy<AttributeTables> = Lazy::new(AttributeTables::with_defaults);

/// Shared reference to the reference tables
pub fn default_tables() -> &'static AttributeTables {
    &DEFAULT_TABLES
}

/// Per-slot coefficients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotEntry {
    pub name: String,
    /// Share of the quality sell value this slot sells for
    pub sell_mod: f64,
    /// Share of the base armor curve; zero for slots without armor
    #[serde(default)]
    pub armor_mod: f64,
    /// Share of the quality budget this slot receives
    pub slot_mod: Modifier,
    /// Subclasses that can occupy this slot
    #[serde(default)]
    pub subclasses: Vec<u32>,
}

impl SlotEntry {
    pub fn allows_subclass(&self, subclass: u32) -> bool {
        self.subclasses.contains(&subclass)
    }
}

/// Budget and sell curves of a quality tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityEntry {
    pub name: String,
    pub budget: LinearCurve,
    pub sell: SellCurve,
}

/// How many budget points one point of a stat costs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatModel {
    pub name: String,
    pub group: StatGroup,
    pub efficiency: Modifier,
}

/// Weapon DPS row: level band, subclass filter and DPS curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DpsRow {
    #[serde(default)]
    pub sub: SubclassFilter,
    pub min: u32,
    pub max: u32,
    pub curve: Polynomial,
}

impl DpsRow {
    pub fn band(&self) -> LevelBand {
        LevelBand::new(self.min, self.max)
    }
}

impl Rule for DpsRow {
    type Output = f64;

    fn matches(&self, ctx: &ItemContext) -> bool {
        self.sub.matches(ctx.subclass) && self.band().contains(ctx.level)
    }

    fn value(&self, ctx: &ItemContext) -> f64 {
        self.curve.evaluate(ctx.level_f64())
    }
}

/// Weapon damage spread row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpreadRow {
    #[serde(rename = "type")]
    pub inventory_type: OneOrMany<InventoryType>,
    /// Absent matches every subclass
    #[serde(default)]
    pub sub: Option<OneOrMany<u32>>,
    pub quality: OneOrMany<Quality>,
    pub min: u32,
    pub max: u32,
    pub spread: f64,
}

impl SpreadRow {
    pub fn range(&self) -> InclusiveRange {
        InclusiveRange::new(self.min, self.max)
    }
}

impl Rule for SpreadRow {
    type Output = f64;

    fn matches(&self, ctx: &ItemContext) -> bool {
        let type_match = self.inventory_type.contains(&ctx.inventory_type);
        let sub_match = match &self.sub {
            None => true,
            Some(sub) => sub.contains(&ctx.subclass),
        };
        let quality_match = self.quality.contains(&ctx.quality);
        type_match && sub_match && quality_match && self.range().contains(ctx.level)
    }

    fn value(&self, _ctx: &ItemContext) -> f64 {
        self.spread
    }
}

/// Default attack speeds of a weapon subclass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponSubclass {
    pub subclass: u32,
    pub name: String,
    /// Delay in ms per inventory type
    #[serde(default)]
    pub delays: BTreeMap<InventoryType, u32>,
    /// Delay used for inventory types missing from `delays`
    pub default_delay: u32,
}

impl WeaponSubclass {
    pub fn delay_for(&self, inventory_type: InventoryType) -> u32 {
        match self.delays.get(&inventory_type) {
            Some(&delay) if delay > 0 => delay,
            _ => self.default_delay,
        }
    }
}

/// The full set of balance tables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeTables {
    #[serde(default)]
    pub armor_slots: BTreeMap<InventoryType, SlotEntry>,
    #[serde(default)]
    pub weapon_slots: BTreeMap<InventoryType, SlotEntry>,
    #[serde(default)]
    pub qualities: BTreeMap<Quality, QualityEntry>,
    #[serde(default)]
    pub stats: BTreeMap<StatKind, StatModel>,
    #[serde(default)]
    pub weapon_dps: BTreeMap<Quality, BTreeMap<InventoryType, Vec<DpsRow>>>,
    #[serde(default)]
    pub weapon_spread: Vec<SpreadRow>,
    #[serde(default)]
    pub weapon_subclasses: Vec<WeaponSubclass>,
    #[serde(default)]
    pub armor_curves: BTreeMap<Quality, BTreeMap<ArmorType, Polynomial>>,
}

impl AttributeTables {
    /// Build the reference tables
    pub fn with_defaults() -> Self {
        AttributeTables {
            armor_slots: slots::armor_slots(),
            weapon_slots: slots::weapon_slots(),
            qualities: quality::qualities(),
            stats: stats::stat_models(),
            weapon_dps: weapons::weapon_dps(),
            weapon_spread: weapons::weapon_spread(),
            weapon_subclasses: weapons::weapon_subclasses(),
            armor_curves: armor::armor_curves(),
        }
    }

    /// Armor items use the armor slot table, everything else the weapon table
    pub fn slot_table(&self, class: ItemClass) -> &BTreeMap<InventoryType, SlotEntry> {
        match class {
            ItemClass::Armor => &self.armor_slots,
            _ => &self.weapon_slots,
        }
    }

    pub fn slot(&self, class: ItemClass, inventory_type: InventoryType) -> Option<&SlotEntry> {
        self.slot_table(class).get(&inventory_type)
    }

    pub fn quality(&self, quality: Quality) -> Option<&QualityEntry> {
        self.qualities.get(&quality)
    }

    pub fn stat_model(&self, kind: StatKind) -> Option<&StatModel> {
        self.stats.get(&kind)
    }

    pub fn dps_rows(&self, quality: Quality, inventory_type: InventoryType) -> Option<&[DpsRow]> {
        self.weapon_dps
            .get(&quality)?
            .get(&inventory_type)
            .map(Vec::as_slice)
    }

    pub fn weapon_subclass(&self, subclass: u32) -> Option<&WeaponSubclass> {
        self.weapon_subclasses
            .iter()
            .find(|entry| entry.subclass == subclass)
    }

    pub fn armor_curve(&self, quality: Quality, armor_type: ArmorType) -> Option<&Polynomial> {
        self.armor_curves.get(&quality)?.get(&armor_type)
    }

    /// Apply an overlay on top of these tables
    ///
    /// Map entries replace entries with the same key, spread rows are tried
    /// before the existing rows, and weapon subclasses replace entries with
    /// the same subclass id.
    pub fn overlay(&mut self, other: AttributeTables) {
        self.armor_slots.extend(other.armor_slots);
        self.weapon_slots.extend(other.weapon_slots);
        self.qualities.extend(other.qualities);
        self.stats.extend(other.stats);

        for (quality, rows) in other.weapon_dps {
            self.weapon_dps.entry(quality).or_default().extend(rows);
        }
        for (quality, curves) in other.armor_curves {
            self.armor_curves.entry(quality).or_default().extend(curves);
        }

        if !other.weapon_spread.is_empty() {
            let mut spread = other.weapon_spread;
            spread.append(&mut self.weapon_spread);
            self.weapon_spread = spread;
        }

        for entry in other.weapon_subclasses {
            match self
                .weapon_subclasses
                .iter_mut()
                .find(|existing| existing.subclass == entry.subclass)
            {
                Some(existing) => *existing = entry,
                None => self.weapon_subclasses.push(entry),
            }
        }
    }

    /// Check the tables for values no model can use
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        for (label, table) in [("armor", &self.armor_slots), ("weapon", &self.weapon_slots)] {
            for (slot, entry) in table {
                if !entry.sell_mod.is_finite() || entry.sell_mod < 0.0 {
                    issues.push(format!("{} slot {}: invalid sell_mod {}", label, slot, entry.sell_mod));
                }
                if !entry.armor_mod.is_finite() || entry.armor_mod < 0.0 {
                    issues.push(format!("{} slot {}: invalid armor_mod {}", label, slot, entry.armor_mod));
                }
                if !entry.slot_mod.is_finite() {
                    issues.push(format!("{} slot {}: slot_mod is not finite", label, slot));
                }
            }
        }

        for (kind, model) in &self.stats {
            if !model.efficiency.is_finite() {
                issues.push(format!("stat {:?}: efficiency is not finite", kind));
            }
        }

        for (quality, by_type) in &self.weapon_dps {
            for (slot, rows) in by_type {
                for (i, row) in rows.iter().enumerate() {
                    if row.band().is_empty() {
                        issues.push(format!("weapon_dps {} {} row {}: empty level band", quality, slot, i));
                    }
                    if row.curve.coefficients.is_empty() {
                        issues.push(format!("weapon_dps {} {} row {}: empty curve", quality, slot, i));
                    }
                }
            }
        }

        for (i, row) in self.weapon_spread.iter().enumerate() {
            if row.range().is_empty() {
                issues.push(format!("weapon_spread row {}: empty level range", i));
            }
            if !row.spread.is_finite() {
                issues.push(format!("weapon_spread row {}: spread is not finite", i));
            }
        }

        for (quality, curves) in &self.armor_curves {
            for (armor_type, curve) in curves {
                if curve.coefficients.is_empty() {
                    issues.push(format!("armor curve {} {:?}: empty curve", quality, armor_type));
                }
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tables = default_tables();
        assert!(tables.validate().is_empty(), "{:?}", tables.validate());
    }

    #[test]
    fn test_default_table_sizes() {
        let tables = default_tables();
        assert_eq!(tables.armor_slots.len(), 18);
        assert_eq!(tables.weapon_slots.len(), 7);
        assert_eq!(tables.qualities.len(), 3);
        assert_eq!(tables.weapon_spread.len(), 10);
        assert_eq!(tables.weapon_subclasses.len(), 15);
        for quality in [Quality::Uncommon, Quality::Rare, Quality::Epic] {
            assert_eq!(tables.weapon_dps[&quality].len(), 7);
            assert_eq!(tables.armor_curves[&quality].len(), 5);
        }
    }

    #[test]
    fn test_slot_table_by_class() {
        let tables = default_tables();
        assert!(tables.slot(ItemClass::Armor, InventoryType::Chest).is_some());
        assert!(tables.slot(ItemClass::Weapon, InventoryType::Chest).is_none());
        assert!(tables.slot(ItemClass::Weapon, InventoryType::TwoHand).is_some());
        // Classes other than armor read the weapon table
        assert!(tables.slot(ItemClass::Other(0), InventoryType::Bow).is_some());
    }

    #[test]
    fn test_weapon_subclass_delay() {
        let tables = default_tables();
        let sword = tables.weapon_subclass(7).unwrap();
        assert_eq!(sword.delay_for(InventoryType::OneHand), 2200);
        assert_eq!(sword.delay_for(InventoryType::Bow), 1900);
        assert!(tables.weapon_subclass(9).is_none());
    }

    #[test]
    fn test_spread_row_matching() {
        let row = SpreadRow {
            inventory_type: OneOrMany::One(InventoryType::TwoHand),
            sub: Some(OneOrMany::Many(vec![1, 5])),
            quality: OneOrMany::Many(vec![Quality::Rare, Quality::Epic]),
            min: 1,
            max: 140,
            spread: 0.65,
        };
        let ctx = ItemContext::new(ItemClass::Weapon, InventoryType::TwoHand, 5, Quality::Rare, 140);
        assert!(row.matches(&ctx));
        assert!(!row.matches(&ItemContext { subclass: 10, ..ctx }));
        assert!(!row.matches(&ItemContext { quality: Quality::Uncommon, ..ctx }));
        assert!(!row.matches(&ItemContext { level: 141, ..ctx }));
    }

    #[test]
    fn test_overlay_replaces_and_prepends() {
        let mut tables = AttributeTables::with_defaults();
        let mut overlay = AttributeTables::default();
        overlay.armor_slots.insert(
            InventoryType::Chest,
            SlotEntry {
                name: "Chest".to_string(),
                sell_mod: 2.0,
                armor_mod: 1.0,
                slot_mod: Modifier::Constant(1.0),
                subclasses: vec![1],
            },
        );
        overlay.weapon_spread.push(SpreadRow {
            inventory_type: OneOrMany::One(InventoryType::OneHand),
            sub: None,
            quality: OneOrMany::One(Quality::Rare),
            min: 1,
            max: 140,
            spread: 0.3,
        });
        overlay.weapon_subclasses.push(WeaponSubclass {
            subclass: 7,
            name: "Sword".to_string(),
            delays: BTreeMap::new(),
            default_delay: 2500,
        });

        tables.overlay(overlay);

        assert!((tables.armor_slots[&InventoryType::Chest].sell_mod - 2.0).abs() < f64::EPSILON);
        assert_eq!(tables.armor_slots.len(), 18);
        assert_eq!(tables.weapon_spread.len(), 11);
        assert!((tables.weapon_spread[0].spread - 0.3).abs() < f64::EPSILON);
        assert_eq!(tables.weapon_subclasses.len(), 15);
        assert_eq!(tables.weapon_subclass(7).unwrap().default_delay, 2500);
    }

    #[test]
    fn test_validate_reports_bad_rows() {
        let mut tables = AttributeTables::default();
        tables.weapon_spread.push(SpreadRow {
            inventory_type: OneOrMany::One(InventoryType::OneHand),
            sub: None,
            quality: OneOrMany::One(Quality::Rare),
            min: 50,
            max: 10,
            spread: 0.5,
        });
        let issues = tables.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("empty level range"));
    }
}
