//! Armor value from base armor curves

use crate::error::DerivationError;
use crate::store::ItemStore;
use crate::tables::AttributeTables;
use crate::types::{ArmorType, ItemClass, ItemContext};

/// Armor of an armor-class item: `max(ceil(curve(level) * armor_mod), 0) + bonus_armor`
pub fn compute_armor(
    tables: &AttributeTables,
    ctx: &ItemContext,
    bonus_armor: u32,
) -> Result<u32, DerivationError> {
    if ctx.class != ItemClass::Armor {
        return Err(DerivationError::NotApplicable { class: ctx.class });
    }

    let slot = tables
        .slot(ctx.class, ctx.inventory_type)
        .ok_or(DerivationError::MissingSlot {
            class: ctx.class,
            inventory_type: ctx.inventory_type,
        })?;
    if slot.armor_mod <= 0.0 {
        return Err(DerivationError::InvalidCoefficient {
            name: "armor modifier",
            value: Some(slot.armor_mod),
        });
    }

    let armor_type = ArmorType::from_subclass(ctx.subclass);
    let curve = tables
        .armor_curve(ctx.quality, armor_type)
        .ok_or(DerivationError::MissingArmorCurve {
            quality: ctx.quality,
            armor_type,
        })?;

    let base = (curve.evaluate(ctx.level_f64()) * slot.armor_mod).ceil().max(0.0) as u32;
    let armor = base.saturating_add(bonus_armor);
    log::debug!(
        "armor {:?}: {:?} curve * {} -> {} + {} bonus",
        ctx,
        armor_type,
        slot.armor_mod,
        base,
        bonus_armor
    );
    Ok(armor)
}

/// Overwrite the item's armor, leaving it untouched on error
pub fn apply_armor<S: ItemStore + ?Sized>(
    store: &mut S,
    tables: &AttributeTables,
) -> Result<u32, DerivationError> {
    let armor = compute_armor(tables, &store.context(), store.bonus_armor())?;
    store.set_armor(armor);
    Ok(armor)
}
