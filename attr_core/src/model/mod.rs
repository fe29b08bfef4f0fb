//! Derivation models - Budget, stats, price, armor and weapon damage
//!
//! Each model has a pure `compute_*` function that returns the derived value
//! or the reason it could not be derived, and an `apply_*` writer that only
//! touches the store once the value is known.

mod armor;
mod budget;
mod damage;
mod distribute;
mod price;

pub use armor::{apply_armor, compute_armor};
pub use budget::{compute_budget, item_budget};
pub use damage::{apply_damage, compute_damage, weapon_speed, WeaponDamage};
pub use distribute::{apply_stats, distribute, Distribution, StatWeight};
pub use price::{apply_price, compute_price, Price};

/// Derivation constants
pub mod constants {
    /// Budget curve exponent, `ln 2 / ln 1.5`
    pub const EXPONENT: f64 = 1.7095112913514547;

    /// Inverse of [`EXPONENT`], used to turn a stat budget back into points
    pub const EXPONENT_INVERSE: f64 = 1.0 / EXPONENT;

    /// Vendor buy price as a multiple of the sell price
    pub const BUY_PRICE_RATIO: u32 = 5;

    /// Attack speed in ms when neither the item nor its subclass has one
    pub const DEFAULT_WEAPON_DELAY: u32 = 2000;
}
