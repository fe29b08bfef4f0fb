//! attr_core - Deterministic attribute derivation for equippable items
//!
//! This library provides:
//! - AttributeTables: Slot, quality, stat, weapon and armor balance tables
//! - Models: Item budget, stat distribution, price, armor and weapon damage
//! - ItemAttributes: One derivation pass over an item, driven by options
//! - ItemStore: The read/write seam to whatever holds the item

pub mod attributes;
pub mod config;
pub mod curve;
pub mod error;
pub mod model;
pub mod modifier;
pub mod prelude;
pub mod rules;
pub mod store;
pub mod tables;
pub mod types;

// Re-export core types for convenience
pub use attributes::{AttributeConfig, DerivationReport, ItemAttributes, StepOutcome};
pub use error::{DerivationError, ErrorKind};
pub use model::{Distribution, Price, StatWeight, WeaponDamage};
pub use store::{DamageEntry, ItemStore, ItemTemplate, StatSlot};
pub use tables::{default_tables, AttributeTables};
pub use types::{ArmorType, DamageSchool, InventoryType, ItemClass, ItemContext, Quality, StatKind};
