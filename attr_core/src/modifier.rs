//! Modifier - A table coefficient that is either constant or depends on the item

use crate::rules::{self, Rule};
use crate::types::{InventoryType, ItemContext, Quality};
use serde::{Deserialize, Serialize};

/// One row of a quality/level filter: matches `quality` at `min` level and up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityBand {
    pub quality: Quality,
    #[serde(default = "default_min")]
    pub min: u32,
    pub value: f64,
}

fn default_min() -> u32 {
    1
}

impl QualityBand {
    pub fn new(quality: Quality, min: u32, value: f64) -> Self {
        QualityBand { quality, min, value }
    }
}

impl Rule for QualityBand {
    type Output = f64;

    fn matches(&self, ctx: &ItemContext) -> bool {
        ctx.quality == self.quality && self.min <= ctx.level
    }

    fn value(&self, _ctx: &ItemContext) -> f64 {
        self.value
    }
}

/// A coefficient used by the slot and stat tables
///
/// In configuration files a modifier is written as a bare number, a list of
/// quality bands, or a table with `slots`, `matched` and `otherwise` bands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Modifier {
    /// Same value for every item
    Constant(f64),
    /// First quality band matching the item's quality and level
    ByQuality(Vec<QualityBand>),
    /// Quality bands chosen by whether the item sits in one of `slots`
    BySlot {
        slots: Vec<InventoryType>,
        matched: Vec<QualityBand>,
        otherwise: Vec<QualityBand>,
    },
}

impl Modifier {
    /// Uniform band list for uncommon, rare and epic items from level 1
    pub fn uniform(epic: f64, rare: f64, uncommon: f64) -> Self {
        Modifier::ByQuality(vec![
            QualityBand::new(Quality::Epic, 1, epic),
            QualityBand::new(Quality::Rare, 1, rare),
            QualityBand::new(Quality::Uncommon, 1, uncommon),
        ])
    }

    /// Evaluate against an item; `None` when no band applies
    pub fn evaluate(&self, ctx: &ItemContext) -> Option<f64> {
        match self {
            Modifier::Constant(value) => Some(*value),
            Modifier::ByQuality(bands) => rules::resolve(bands, ctx),
            Modifier::BySlot {
                slots,
                matched,
                otherwise,
            } => {
                if slots.contains(&ctx.inventory_type) {
                    rules::resolve(matched, ctx)
                } else {
                    rules::resolve(otherwise, ctx)
                }
            }
        }
    }

    /// Evaluate and keep only strictly positive values
    pub fn positive(&self, ctx: &ItemContext) -> Option<f64> {
        self.evaluate(ctx).filter(|v| *v > 0.0)
    }

    /// Whether every value this modifier can produce is finite
    pub fn is_finite(&self) -> bool {
        match self {
            Modifier::Constant(value) => value.is_finite(),
            Modifier::ByQuality(bands) => bands.iter().all(|b| b.value.is_finite()),
            Modifier::BySlot {
                matched, otherwise, ..
            } => matched
                .iter()
                .chain(otherwise.iter())
                .all(|b| b.value.is_finite()),
        }
    }
}

impl From<f64> for Modifier {
    fn from(value: f64) -> Self {
        Modifier::Constant(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemClass;

    fn ctx(slot: InventoryType, quality: Quality, level: u32) -> ItemContext {
        ItemContext::new(ItemClass::Armor, slot, 1, quality, level)
    }

    #[test]
    fn test_constant() {
        let m = Modifier::Constant(0.5);
        assert_eq!(m.evaluate(&ctx(InventoryType::Chest, Quality::Poor, 1)), Some(0.5));
    }

    #[test]
    fn test_by_quality_level_threshold() {
        // Uncommon cloaks get a bigger slot share from level 80
        let m = Modifier::ByQuality(vec![
            QualityBand::new(Quality::Epic, 1, 4.0 / 16.0),
            QualityBand::new(Quality::Uncommon, 80, 4.0 / 16.0),
            QualityBand::new(Quality::Uncommon, 1, 3.0 / 16.0),
        ]);
        assert_eq!(m.evaluate(&ctx(InventoryType::Back, Quality::Uncommon, 80)), Some(0.25));
        assert_eq!(m.evaluate(&ctx(InventoryType::Back, Quality::Uncommon, 79)), Some(0.1875));
        assert_eq!(m.evaluate(&ctx(InventoryType::Back, Quality::Common, 80)), None);
    }

    #[test]
    fn test_by_slot() {
        let m = Modifier::BySlot {
            slots: vec![InventoryType::Neck, InventoryType::Finger],
            matched: vec![QualityBand::new(Quality::Rare, 1, 3.0)],
            otherwise: vec![QualityBand::new(Quality::Rare, 1, 2.875)],
        };
        assert_eq!(m.evaluate(&ctx(InventoryType::Finger, Quality::Rare, 10)), Some(3.0));
        assert_eq!(m.evaluate(&ctx(InventoryType::Chest, Quality::Rare, 10)), Some(2.875));
    }

    #[test]
    fn test_positive_filters_zero() {
        let m = Modifier::Constant(0.0);
        assert_eq!(m.positive(&ctx(InventoryType::Chest, Quality::Rare, 10)), None);
    }

    #[test]
    fn test_parse_forms() {
        #[derive(Deserialize)]
        struct Holder {
            a: Modifier,
            b: Modifier,
        }
        let holder: Holder = toml::from_str(
            r#"
a = 0.5
b = [{ quality = "rare", min = 1, value = 1.0 }]
"#,
        )
        .unwrap();
        assert_eq!(holder.a, Modifier::Constant(0.5));
        assert!(matches!(holder.b, Modifier::ByQuality(ref bands) if bands.len() == 1));
    }
}
