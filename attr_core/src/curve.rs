//! Curve shapes used by the balance tables
//!
//! All curves are functions of item level. They are plain data so they can be
//! overridden from configuration files.

use serde::{Deserialize, Serialize};

/// Regression polynomial in item level
///
/// `coefficients[i]` multiplies `level^i`. Terms are summed in ascending
/// order, each power computed with `powf`, so results match the reference
/// curve set bit for bit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polynomial {
    pub coefficients: Vec<f64>,
}

impl Polynomial {
    pub fn new(coefficients: Vec<f64>) -> Self {
        Polynomial { coefficients }
    }

    pub fn evaluate(&self, level: f64) -> f64 {
        let mut terms = self.coefficients.iter().enumerate();
        let Some((_, constant)) = terms.next() else {
            return 0.0;
        };
        terms.fold(*constant, |acc, (power, coefficient)| {
            if power == 1 {
                acc + coefficient * level
            } else {
                acc + coefficient * level.powf(power as f64)
            }
        })
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }
}

/// `level * mult + base`, zero below `min_level`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearCurve {
    pub mult: f64,
    pub base: f64,
    #[serde(default = "default_min_level")]
    pub min_level: u32,
}

fn default_min_level() -> u32 {
    1
}

impl LinearCurve {
    pub fn new(mult: f64, base: f64) -> Self {
        LinearCurve {
            mult,
            base,
            min_level: 1,
        }
    }

    pub fn evaluate(&self, level: u32) -> f64 {
        if level < self.min_level {
            return 0.0;
        }
        level as f64 * self.mult + self.base
    }
}

/// Vendor sell value in copper: `base + per_level * level + (squared * level)^2`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SellCurve {
    #[serde(default)]
    pub base: f64,
    pub per_level: f64,
    /// Factor inside the squared term; absent means no squared term
    #[serde(default)]
    pub squared: Option<f64>,
}

impl SellCurve {
    pub fn evaluate(&self, level: u32) -> f64 {
        let level = level as f64;
        let linear = if self.base == 0.0 {
            self.per_level * level
        } else {
            self.base + self.per_level * level
        };
        match self.squared {
            Some(factor) => linear + (factor * level).powf(2.0),
            None => linear,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_polynomial_is_zero() {
        assert_eq!(Polynomial::new(vec![]).evaluate(50.0), 0.0);
    }

    #[test]
    fn test_polynomial_terms() {
        // 1 + 2x + 3x^2 at x = 2 -> 1 + 4 + 12
        let poly = Polynomial::new(vec![1.0, 2.0, 3.0]);
        assert!((poly.evaluate(2.0) - 17.0).abs() < f64::EPSILON);
        assert_eq!(poly.degree(), 2);
    }

    #[test]
    fn test_linear_curve_below_min_level() {
        let curve = LinearCurve::new(0.641, -4.0);
        assert_eq!(curve.evaluate(0), 0.0);
        assert!((curve.evaluate(80) - 47.28).abs() < 1e-9);
    }

    #[test]
    fn test_sell_curve() {
        let epic = SellCurve {
            base: 10000.0,
            per_level: 600.0,
            squared: Some(0.16),
        };
        // 10000 + 6000 + (1.6)^2
        assert!((epic.evaluate(10) - 16002.56).abs() < 1e-9);

        let uncommon = SellCurve {
            base: 0.0,
            per_level: 439.0,
            squared: None,
        };
        assert!((uncommon.evaluate(10) - 4390.0).abs() < f64::EPSILON);
    }
}
