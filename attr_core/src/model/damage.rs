//! Weapon damage from DPS curves, damage spread and attack speed

use super::constants::DEFAULT_WEAPON_DELAY;
use crate::error::DerivationError;
use crate::rules;
use crate::store::ItemStore;
use crate::tables::AttributeTables;
use crate::types::{ItemClass, ItemContext};

/// Physical damage range of a weapon
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponDamage {
    pub min: u32,
    pub max: u32,
    /// Attack speed in ms the range was computed with
    pub speed: u32,
    pub dps: f64,
}

/// Attack speed: the item's own delay, else its subclass default
pub fn weapon_speed(tables: &AttributeTables, ctx: &ItemContext, delay: u32) -> u32 {
    if delay != 0 {
        return delay;
    }
    tables
        .weapon_subclass(ctx.subclass)
        .map(|entry| entry.delay_for(ctx.inventory_type))
        .filter(|&speed| speed > 0)
        .unwrap_or(DEFAULT_WEAPON_DELAY)
}

/// Compute the damage range of a weapon-class item
///
/// DPS comes from the first matching row of `weapon_dps[quality][type]`, the
/// spread from the first matching spread row. The range is centered on
/// `dps * speed` and spans `spread` of it.
pub fn compute_damage(
    tables: &AttributeTables,
    ctx: &ItemContext,
    delay: u32,
) -> Result<WeaponDamage, DerivationError> {
    if ctx.class != ItemClass::Weapon {
        return Err(DerivationError::NotApplicable { class: ctx.class });
    }

    let rows = tables
        .dps_rows(ctx.quality, ctx.inventory_type)
        .unwrap_or_default();
    let dps = rules::resolve(rows, ctx).ok_or(DerivationError::NoMatchingRule { table: "weapon dps" })?;
    let spread = rules::resolve(&tables.weapon_spread, ctx)
        .ok_or(DerivationError::NoMatchingRule { table: "weapon spread" })?;

    let speed = weapon_speed(tables, ctx, delay);
    let speed_ms = speed as f64;
    // Damage entries are unsigned; curves that dip below zero at low levels give 0
    let min = (dps * speed_ms / 1000.0 * (1.0 - spread / 2.0)).ceil().max(0.0) as u32;
    let max = (dps * speed_ms / 1000.0 * (1.0 + spread / 2.0)).ceil().max(0.0) as u32;

    log::debug!(
        "damage {:?}: dps={} spread={} speed={} -> {}-{}",
        ctx,
        dps,
        spread,
        speed,
        min,
        max
    );
    Ok(WeaponDamage { min, max, speed, dps })
}

/// Replace the item's damage entries with one physical entry
///
/// Nothing is cleared unless both DPS and spread resolve.
pub fn apply_damage<S: ItemStore + ?Sized>(
    store: &mut S,
    tables: &AttributeTables,
) -> Result<WeaponDamage, DerivationError> {
    let damage = compute_damage(tables, &store.context(), store.delay())?;
    store.clear_damage();
    store.add_physical_damage(damage.min, damage.max);
    Ok(damage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ItemTemplate;
    use crate::tables::default_tables;
    use crate::types::{DamageSchool, InventoryType, Quality};

    #[test]
    fn test_rare_sword_default_speed() {
        let mut sword = ItemTemplate::weapon(InventoryType::OneHand, 7, Quality::Rare, 60);
        let damage = apply_damage(&mut sword, default_tables()).unwrap();
        assert_eq!(damage.speed, 2200);
        assert!((damage.dps - 39.437402622525674).abs() < 1e-9);
        assert_eq!((damage.min, damage.max), (64, 111));

        let entries = sword.damage_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].school, DamageSchool::Physical);
        assert_eq!((entries[0].min, entries[0].max), (64, 111));
    }

    #[test]
    fn test_item_delay_overrides_subclass() {
        let sword = ItemTemplate::weapon(InventoryType::OneHand, 7, Quality::Rare, 60).with_delay(3000);
        let damage = compute_damage(default_tables(), &sword.context(), sword.delay).unwrap();
        assert_eq!(damage.speed, 3000);
        assert_eq!((damage.min, damage.max), (87, 151));
    }

    #[test]
    fn test_epic_bow() {
        let bow = ItemTemplate::weapon(InventoryType::Bow, 2, Quality::Epic, 80);
        let damage = compute_damage(default_tables(), &bow.context(), 0).unwrap();
        assert_eq!(damage.speed, 2700);
        assert_eq!((damage.min, damage.max), (112, 194));
    }

    #[test]
    fn test_weapon_speed_fallbacks() {
        let tables = default_tables();
        let ctx = ItemContext::new(ItemClass::Weapon, InventoryType::OneHand, 2, Quality::Rare, 60);
        // Bows have no one-hand delay, so the subclass default applies
        assert_eq!(weapon_speed(tables, &ctx, 0), 2700);
        let unknown = ItemContext { subclass: 9, ..ctx };
        assert_eq!(weapon_speed(tables, &unknown, 0), DEFAULT_WEAPON_DELAY);
        assert_eq!(weapon_speed(tables, &unknown, 1234), 1234);
    }

    #[test]
    fn test_no_dps_rule_leaves_damage_untouched() {
        let tables = default_tables();
        // Rare two-hand DPS excludes staves
        let mut staff = ItemTemplate::weapon(InventoryType::TwoHand, 10, Quality::Rare, 60);
        staff.add_physical_damage(5, 9);
        assert_eq!(
            apply_damage(&mut staff, tables),
            Err(DerivationError::NoMatchingRule { table: "weapon dps" })
        );
        assert_eq!(staff.damage_entries().len(), 1);

        // The DPS band is half-open
        let sword = ItemTemplate::weapon(InventoryType::OneHand, 7, Quality::Rare, 140);
        assert!(compute_damage(tables, &sword.context(), 0).is_err());
    }

    #[test]
    fn test_negative_curve_clamps_to_zero() {
        let tables = default_tables();
        for (slot, subclass, quality) in [
            (InventoryType::TwoHand, 1, Quality::Rare),
            (InventoryType::TwoHand, 5, Quality::Uncommon),
            (InventoryType::Bow, 2, Quality::Epic),
        ] {
            let mut weapon = ItemTemplate::weapon(slot, subclass, quality, 1);
            let damage = apply_damage(&mut weapon, tables).unwrap();
            assert!(damage.dps < 0.0);
            assert_eq!((damage.min, damage.max), (0, 0));
            assert_eq!((weapon.damage[0].min, weapon.damage[0].max), (0, 0));
        }
    }

    #[test]
    fn test_armor_items_have_no_damage() {
        let chest = ItemTemplate::armor_piece(InventoryType::Chest, 1, Quality::Rare, 60);
        assert_eq!(
            compute_damage(default_tables(), &chest.context(), 0),
            Err(DerivationError::NotApplicable { class: ItemClass::Armor })
        );
    }

    #[test]
    fn test_apply_replaces_existing_entries() {
        let mut sword = ItemTemplate::weapon(InventoryType::OneHand, 7, Quality::Rare, 60);
        sword.add_physical_damage(1, 2);
        sword.add_physical_damage(3, 4);
        apply_damage(&mut sword, default_tables()).unwrap();
        assert_eq!(sword.damage.len(), 1);
        assert_eq!(sword.damage[0].min, 64);
    }
}
