//! Item budget from slot share and quality curve

use super::constants::EXPONENT;
use crate::error::DerivationError;
use crate::tables::AttributeTables;
use crate::types::ItemContext;

/// Compute the power budget of an item
///
/// `budget = (quality_mod * slot_mod)^EXPONENT / slot_mod`, where `slot_mod`
/// is the slot's share of the budget and `quality_mod` the quality curve at
/// the item level. Both must be strictly positive.
pub fn compute_budget(tables: &AttributeTables, ctx: &ItemContext) -> Result<f64, DerivationError> {
    let slot = tables
        .slot(ctx.class, ctx.inventory_type)
        .ok_or(DerivationError::MissingSlot {
            class: ctx.class,
            inventory_type: ctx.inventory_type,
        })?;

    let slot_mod = match slot.slot_mod.evaluate(ctx) {
        Some(value) if value > 0.0 => value,
        other => {
            return Err(DerivationError::InvalidCoefficient {
                name: "slot modifier",
                value: other,
            })
        }
    };

    let quality = tables
        .quality(ctx.quality)
        .ok_or(DerivationError::MissingQuality(ctx.quality))?;

    let quality_mod = quality.budget.evaluate(ctx.level);
    if quality_mod <= 0.0 || !quality_mod.is_finite() {
        return Err(DerivationError::InvalidCoefficient {
            name: "quality modifier",
            value: Some(quality_mod),
        });
    }

    let budget = (quality_mod * slot_mod).powf(EXPONENT) / slot_mod;
    log::debug!(
        "budget {:?}: slot_mod={} quality_mod={} -> {}",
        ctx,
        slot_mod,
        quality_mod,
        budget
    );
    Ok(budget)
}

/// Budget of an item, 0 when it cannot be computed
pub fn item_budget(tables: &AttributeTables, ctx: &ItemContext) -> f64 {
    compute_budget(tables, ctx).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::tables::default_tables;
    use crate::types::{InventoryType, ItemClass, Quality};
    use proptest::prelude::*;

    fn armor(slot: InventoryType, quality: Quality, level: u32) -> ItemContext {
        ItemContext::new(ItemClass::Armor, slot, 1, quality, level)
    }

    #[test]
    fn test_rare_chest_level_80() {
        let ctx = armor(InventoryType::Chest, Quality::Rare, 80);
        let budget = compute_budget(default_tables(), &ctx).unwrap();
        assert!((budget - 47.28_f64.powf(EXPONENT)).abs() < 1e-9);
        assert!((budget - 729.2560498836062).abs() < 1e-9);
    }

    #[test]
    fn test_smaller_slot_share_gets_smaller_budget() {
        let tables = default_tables();
        let chest = item_budget(tables, &armor(InventoryType::Chest, Quality::Epic, 70));
        let wrists = item_budget(tables, &armor(InventoryType::Wrists, Quality::Epic, 70));
        assert!(wrists > 0.0);
        assert!(wrists < chest);
    }

    #[test]
    fn test_missing_slot() {
        let ctx = armor(InventoryType::Bag, Quality::Rare, 80);
        let err = compute_budget(default_tables(), &ctx).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingConfiguration);
        assert_eq!(item_budget(default_tables(), &ctx), 0.0);
    }

    #[test]
    fn test_poor_and_common_have_no_budget() {
        let tables = default_tables();
        for quality in [Quality::Poor, Quality::Common] {
            let ctx = armor(InventoryType::Chest, quality, 80);
            assert_eq!(
                compute_budget(tables, &ctx),
                Err(DerivationError::MissingQuality(quality))
            );
        }
    }

    #[test]
    fn test_non_positive_quality_curve() {
        // 0.641 * 1 - 4 is negative
        let ctx = armor(InventoryType::Chest, Quality::Rare, 1);
        let err = compute_budget(default_tables(), &ctx).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCoefficient);

        let ctx = armor(InventoryType::Chest, Quality::Epic, 0);
        assert_eq!(item_budget(default_tables(), &ctx), 0.0);
    }

    #[test]
    fn test_weapon_reads_weapon_table() {
        let tables = default_tables();
        let bow = ItemContext::new(ItemClass::Weapon, InventoryType::Bow, 2, Quality::Rare, 80);
        let budget = compute_budget(tables, &bow).unwrap();
        assert!((budget - 729.2560498836062).abs() < 1e-9);

        let armor_bow = ItemContext { class: ItemClass::Armor, ..bow };
        assert!(compute_budget(tables, &armor_bow).is_err());
    }

    proptest! {
        #[test]
        fn budget_is_monotonic_in_level(
            level in 1u32..140,
            (class, slot) in prop::sample::select(vec![
                (ItemClass::Armor, InventoryType::Head),
                (ItemClass::Armor, InventoryType::Chest),
                (ItemClass::Armor, InventoryType::Back),
                (ItemClass::Armor, InventoryType::Finger),
                (ItemClass::Armor, InventoryType::Trinket),
                (ItemClass::Weapon, InventoryType::OneHand),
                (ItemClass::Weapon, InventoryType::TwoHand),
                (ItemClass::Weapon, InventoryType::Ranged),
            ]),
            quality in prop::sample::select(vec![Quality::Uncommon, Quality::Rare, Quality::Epic]),
        ) {
            let tables = default_tables();
            let ctx = ItemContext::new(class, slot, 1, quality, level);
            let lower = item_budget(tables, &ctx);
            let upper = item_budget(tables, &ItemContext { level: level + 1, ..ctx });
            prop_assert!(lower.is_finite());
            prop_assert!(lower >= 0.0);
            prop_assert!(upper >= lower);
        }
    }
}
