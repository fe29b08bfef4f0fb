//! Budget and sell curves per quality tier
//!
//! Poor and common items have no entry, so they never receive budgeted stats
//! or derived prices.

use super::QualityEntry;
use crate::curve::{LinearCurve, SellCurve};
use crate::types::Quality;
use std::collections::BTreeMap;

pub(super) fn qualities() -> BTreeMap<Quality, QualityEntry> {
    let mut table = BTreeMap::new();
    table.insert(
        Quality::Epic,
        QualityEntry {
            name: "epic".to_string(),
            budget: LinearCurve::new(0.689, 1.0),
            sell: SellCurve {
                base: 10000.0,
                per_level: 600.0,
                squared: Some(0.16),
            },
        },
    );
    table.insert(
        Quality::Rare,
        QualityEntry {
            name: "rare".to_string(),
            budget: LinearCurve::new(0.641, -4.0),
            sell: SellCurve {
                base: 500.0,
                per_level: 525.0,
                squared: None,
            },
        },
    );
    table.insert(
        Quality::Uncommon,
        QualityEntry {
            name: "uncommon".to_string(),
            budget: LinearCurve::new(0.495, -2.85),
            sell: SellCurve {
                base: 0.0,
                per_level: 439.0,
                squared: None,
            },
        },
    );
    table
}
