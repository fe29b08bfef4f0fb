//! Vendor prices from quality sell curve and slot share

use super::constants::BUY_PRICE_RATIO;
use crate::error::DerivationError;
use crate::store::ItemStore;
use crate::tables::AttributeTables;
use crate::types::ItemContext;

/// Vendor prices in copper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Price {
    pub sell: u32,
    pub buy: u32,
}

pub fn compute_price(tables: &AttributeTables, ctx: &ItemContext) -> Result<Price, DerivationError> {
    let slot = tables
        .slot(ctx.class, ctx.inventory_type)
        .ok_or(DerivationError::MissingSlot {
            class: ctx.class,
            inventory_type: ctx.inventory_type,
        })?;
    let quality = tables
        .quality(ctx.quality)
        .ok_or(DerivationError::MissingQuality(ctx.quality))?;

    let sell = (quality.sell.evaluate(ctx.level) * slot.sell_mod).ceil().max(0.0) as u32;
    let price = Price {
        sell,
        buy: sell.saturating_mul(BUY_PRICE_RATIO),
    };
    log::debug!("price {:?}: {:?}", ctx, price);
    Ok(price)
}

/// Write sell and buy price, leaving the item untouched on error
pub fn apply_price<S: ItemStore + ?Sized>(
    store: &mut S,
    tables: &AttributeTables,
) -> Result<Price, DerivationError> {
    let price = compute_price(tables, &store.context())?;
    store.set_price(price.sell, price.buy, 1);
    Ok(price)
}
