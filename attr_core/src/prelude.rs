//! Prelude module for convenient imports
//!
//! ```rust
//! use attr_core::prelude::*;
//! ```

// Core types
pub use crate::types::{ArmorType, InventoryType, ItemClass, ItemContext, Quality, StatKind};

// Tables
pub use crate::tables::{default_tables, AttributeTables};

// Models
pub use crate::model::{
    compute_armor, compute_budget, compute_damage, compute_price, distribute, item_budget,
    Distribution, Price, StatWeight, WeaponDamage,
};

// Orchestration
pub use crate::attributes::{AttributeConfig, DerivationReport, ItemAttributes, StepOutcome};
pub use crate::error::DerivationError;

// Store
pub use crate::store::{ItemStore, ItemTemplate};

// Config
pub use crate::config::{load_tables, ConfigError};
