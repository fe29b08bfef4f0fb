//! StatDistributor - Spend an item budget on weighted stats

use super::constants::EXPONENT_INVERSE;
use crate::error::DerivationError;
use crate::store::{ItemStore, StatSlot};
use crate::tables::AttributeTables;
use crate::types::{ItemContext, StatKind};
use serde::{Deserialize, Serialize};

/// Share of the budget, in percent, given to one stat
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatWeight {
    pub kind: StatKind,
    pub percent: f64,
}

impl StatWeight {
    pub fn new(kind: StatKind, percent: f64) -> Self {
        StatWeight { kind, percent }
    }
}

impl From<(StatKind, f64)> for StatWeight {
    fn from((kind, percent): (StatKind, f64)) -> Self {
        StatWeight { kind, percent }
    }
}

/// Stat values bought with a budget, in weight order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Distribution {
    pub values: Vec<StatSlot>,
    /// Weights that produced no value, with the reason
    pub skipped: Vec<(StatKind, DerivationError)>,
}

impl Distribution {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Convert a budget into stat values
///
/// Each weight gets `budget * percent / 100` budget points, converted to
/// stat points as `ceil((points / efficiency)^(1 / EXPONENT))`. A stat with
/// no model or no positive efficiency for this item is skipped; the others
/// are unaffected.
pub fn distribute(
    tables: &AttributeTables,
    ctx: &ItemContext,
    budget: f64,
    weights: &[StatWeight],
) -> Distribution {
    let mut distribution = Distribution::default();
    if weights.is_empty() || budget.is_nan() || budget <= 0.0 {
        return distribution;
    }

    for weight in weights {
        match stat_value(tables, ctx, budget, weight) {
            Ok(value) => distribution.values.push(StatSlot {
                kind: weight.kind,
                value,
            }),
            Err(err) => {
                log::debug!("stat {:?} skipped: {}", weight.kind, err);
                distribution.skipped.push((weight.kind, err));
            }
        }
    }
    distribution
}

fn stat_value(
    tables: &AttributeTables,
    ctx: &ItemContext,
    budget: f64,
    weight: &StatWeight,
) -> Result<i32, DerivationError> {
    if !weight.percent.is_finite() || weight.percent < 0.0 {
        return Err(DerivationError::InvalidCoefficient {
            name: "stat percent",
            value: Some(weight.percent),
        });
    }

    let model = tables
        .stat_model(weight.kind)
        .ok_or(DerivationError::MissingStatModel(weight.kind))?;
    let efficiency = match model.efficiency.evaluate(ctx) {
        Some(value) if value > 0.0 => value,
        other => {
            return Err(DerivationError::InvalidCoefficient {
                name: "stat efficiency",
                value: other,
            })
        }
    };

    let stat_budget = budget * (weight.percent / 100.0);
    let value = (stat_budget / efficiency).powf(EXPONENT_INVERSE).ceil();
    log::trace!(
        "stat {:?}: {} points at efficiency {} -> {}",
        weight.kind,
        stat_budget,
        efficiency,
        value
    );
    Ok(value as i32)
}

/// Replace the item's stats with a fresh distribution
///
/// All stat slots are cleared first, even when nothing is written.
pub fn apply_stats<S: ItemStore + ?Sized>(
    store: &mut S,
    tables: &AttributeTables,
    budget: f64,
    weights: &[StatWeight],
) -> Distribution {
    let ctx = store.context();
    let distribution = distribute(tables, &ctx, budget, weights);
    store.clear_all_stats();
    for slot in &distribution.values {
        store.add_stat(slot.kind, slot.value);
    }
    distribution
}
