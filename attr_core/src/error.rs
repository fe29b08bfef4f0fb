//! Derivation errors
//!
//! None of these abort a derivation pass. Each one explains why a single
//! computation left its output untouched.

use crate::types::{ArmorType, InventoryType, ItemClass, Quality, StatKind};
use thiserror::Error;

/// Why a computation could not produce a value
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DerivationError {
    #[error("no {class} slot entry for inventory type {inventory_type}")]
    MissingSlot {
        class: ItemClass,
        inventory_type: InventoryType,
    },
    #[error("no quality coefficients for {0} items")]
    MissingQuality(Quality),
    #[error("no stat model for {0:?}")]
    MissingStatModel(StatKind),
    #[error("no {armor_type:?} armor curve for {quality} items")]
    MissingArmorCurve {
        quality: Quality,
        armor_type: ArmorType,
    },
    #[error("{name} must be positive, got {value:?}")]
    InvalidCoefficient {
        name: &'static str,
        value: Option<f64>,
    },
    #[error("no rule in {table} matches the item")]
    NoMatchingRule { table: &'static str },
    #[error("does not apply to {class} items")]
    NotApplicable { class: ItemClass },
}

/// Error taxonomy of derivation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingConfiguration,
    InvalidCoefficient,
    NoMatchingRule,
    NotApplicable,
}

impl DerivationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DerivationError::MissingSlot { .. }
            | DerivationError::MissingQuality(_)
            | DerivationError::MissingStatModel(_)
            | DerivationError::MissingArmorCurve { .. } => ErrorKind::MissingConfiguration,
            DerivationError::InvalidCoefficient { .. } => ErrorKind::InvalidCoefficient,
            DerivationError::NoMatchingRule { .. } => ErrorKind::NoMatchingRule,
            DerivationError::NotApplicable { .. } => ErrorKind::NotApplicable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(
            DerivationError::MissingQuality(Quality::Common).kind(),
            ErrorKind::MissingConfiguration
        );
        assert_eq!(
            DerivationError::NoMatchingRule { table: "weapon_dps" }.kind(),
            ErrorKind::NoMatchingRule
        );
    }

    #[test]
    fn test_messages() {
        let err = DerivationError::MissingSlot {
            class: ItemClass::Armor,
            inventory_type: InventoryType::Bag,
        };
        assert_eq!(err.to_string(), "no Armor slot entry for inventory type Bag");

        let err = DerivationError::InvalidCoefficient {
            name: "slot modifier",
            value: Some(0.0),
        };
        assert_eq!(err.to_string(), "slot modifier must be positive, got Some(0.0)");
    }
}
