//! AttributeOrchestrator - One derivation pass over an item
//!
//! [`ItemAttributes`] keeps the settings of previous calls and runs every
//! model in a fixed order: budget, stats, disenchant, price, then armor or
//! damage. A step that cannot compute its value leaves its outputs alone and
//! the pass goes on.

use crate::error::DerivationError;
use crate::model::{self, Distribution, StatWeight};
use crate::store::ItemStore;
use crate::tables::AttributeTables;
use crate::types::ItemClass;
use serde::{Deserialize, Serialize};

/// Options of one `set` call; absent fields keep their previous setting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeConfig {
    /// Ordered stat weights, replacing any previously configured list
    #[serde(default)]
    pub stats: Option<Vec<StatWeight>>,
    /// `false` forces the disenchant id to 0
    #[serde(default)]
    pub disenchant: Option<bool>,
    #[serde(default)]
    pub price: Option<bool>,
    #[serde(default)]
    pub armor_or_damage: Option<bool>,
}

impl AttributeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stats<I, W>(mut self, weights: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<StatWeight>,
    {
        self.stats = Some(weights.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_disenchant(mut self, enabled: bool) -> Self {
        self.disenchant = Some(enabled);
        self
    }

    pub fn with_price(mut self, enabled: bool) -> Self {
        self.price = Some(enabled);
        self
    }

    pub fn with_armor_or_damage(mut self, enabled: bool) -> Self {
        self.armor_or_damage = Some(enabled);
        self
    }
}

/// What happened to one step of a pass
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// The step ran
    Applied,
    /// The step is turned off
    Disabled,
    /// The step could not compute its value; outputs were left untouched
    Skipped(DerivationError),
}

impl StepOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, StepOutcome::Applied)
    }

    fn from_result<T>(step: &str, result: Result<T, DerivationError>) -> Self {
        match result {
            Ok(_) => StepOutcome::Applied,
            Err(err) => {
                log::debug!("{} skipped: {}", step, err);
                StepOutcome::Skipped(err)
            }
        }
    }
}

/// Result of one derivation pass
#[derive(Debug, Clone, PartialEq)]
pub struct DerivationReport {
    /// Budget cached on the item, 0 when it could not be computed
    pub budget: f64,
    pub budget_outcome: StepOutcome,
    pub stats: StepOutcome,
    /// Stat values written by this pass, if the stats step ran
    pub distribution: Option<Distribution>,
    pub disenchant: StepOutcome,
    pub price: StepOutcome,
    pub armor_or_damage: StepOutcome,
}

/// Persistent derivation settings bound to a set of tables
#[derive(Debug, Clone)]
pub struct ItemAttributes<'a> {
    tables: &'a AttributeTables,
    stats: Option<Vec<StatWeight>>,
    disenchant: bool,
    price: bool,
    armor_or_damage: bool,
}

impl<'a> ItemAttributes<'a> {
    pub fn new(tables: &'a AttributeTables) -> Self {
        ItemAttributes {
            tables,
            stats: None,
            disenchant: true,
            price: true,
            armor_or_damage: true,
        }
    }

    pub fn tables(&self) -> &'a AttributeTables {
        self.tables
    }

    /// Configured stat weights, `None` until a list is given
    pub fn stats(&self) -> Option<&[StatWeight]> {
        self.stats.as_deref()
    }

    pub fn disenchant(&self) -> bool {
        self.disenchant
    }

    pub fn price(&self) -> bool {
        self.price
    }

    pub fn armor_or_damage(&self) -> bool {
        self.armor_or_damage
    }

    fn merge(&mut self, config: AttributeConfig) {
        if let Some(stats) = config.stats {
            self.stats = Some(stats);
        }
        if let Some(disenchant) = config.disenchant {
            self.disenchant = disenchant;
        }
        if let Some(price) = config.price {
            self.price = price;
        }
        if let Some(armor_or_damage) = config.armor_or_damage {
            self.armor_or_damage = armor_or_damage;
        }
    }

    /// Merge `config` into the settings and derive every attribute of `store`
    pub fn set<S: ItemStore + ?Sized>(&mut self, store: &mut S, config: AttributeConfig) -> DerivationReport {
        self.merge(config);
        self.apply(store)
    }

    /// Derive every attribute of `store` with the current settings
    pub fn apply<S: ItemStore + ?Sized>(&self, store: &mut S) -> DerivationReport {
        let ctx = store.context();
        log::debug!("deriving attributes for {:?}", ctx);

        let (budget, budget_outcome) = match model::compute_budget(self.tables, &ctx) {
            Ok(budget) => (budget, StepOutcome::Applied),
            Err(err) => {
                log::debug!("budget unavailable: {}", err);
                (0.0, StepOutcome::Skipped(err))
            }
        };
        store.set_budget(budget);

        let (stats, distribution) = match &self.stats {
            Some(weights) => {
                let distribution = model::apply_stats(store, self.tables, budget, weights);
                (StepOutcome::Applied, Some(distribution))
            }
            None => (StepOutcome::Disabled, None),
        };

        if !self.disenchant {
            store.set_disenchant_id(0);
        }
        let disenchant = StepOutcome::Applied;

        let price = if self.price {
            StepOutcome::from_result("price", model::apply_price(store, self.tables))
        } else {
            StepOutcome::Disabled
        };

        let armor_or_damage = if !self.armor_or_damage {
            StepOutcome::Disabled
        } else {
            match ctx.class {
                ItemClass::Armor => StepOutcome::from_result("armor", model::apply_armor(store, self.tables)),
                ItemClass::Weapon => StepOutcome::from_result("damage", model::apply_damage(store, self.tables)),
                class => StepOutcome::Skipped(DerivationError::NotApplicable { class }),
            }
        };

        DerivationReport {
            budget,
            budget_outcome,
            stats,
            distribution,
            disenchant,
            price,
            armor_or_damage,
        }
    }
}
