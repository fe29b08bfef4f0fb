//! Constraint vocabulary shared by the rule tables

use serde::{Deserialize, Serialize};

/// A scalar or a list of values, as written in the tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T: PartialEq> OneOrMany<T> {
    /// Exact equality for a scalar, membership for a list
    pub fn contains(&self, value: &T) -> bool {
        match self {
            OneOrMany::One(v) => v == value,
            OneOrMany::Many(values) => values.contains(value),
        }
    }
}

impl<T> From<T> for OneOrMany<T> {
    fn from(value: T) -> Self {
        OneOrMany::One(value)
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(values: Vec<T>) -> Self {
        OneOrMany::Many(values)
    }
}

/// Subclass filter of the weapon DPS table
///
/// Negative values are exclusion markers. The scalar and list forms are
/// deliberately not equivalent:
/// - absent: every subclass
/// - list: any element `s` with `s >= 0 && s == sub`, or `s < 0 && s != -sub`
/// - scalar `s >= 0`: `s == sub`
/// - scalar `s < 0`: every subclass except `-s`
///
/// In list form a negative element matches every subclass but its own, so
/// `[3, -18]` matches everything except 18, and also 3.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubclassFilter(pub Option<OneOrMany<i32>>);

impl SubclassFilter {
    pub fn any() -> Self {
        SubclassFilter(None)
    }

    pub fn one(subclass: i32) -> Self {
        SubclassFilter(Some(OneOrMany::One(subclass)))
    }

    pub fn many(subclasses: Vec<i32>) -> Self {
        SubclassFilter(Some(OneOrMany::Many(subclasses)))
    }

    pub fn matches(&self, subclass: u32) -> bool {
        let sub = i64::from(subclass);
        match &self.0 {
            None => true,
            Some(OneOrMany::Many(list)) => list.iter().any(|&s| {
                let s = i64::from(s);
                (s >= 0 && s == sub) || (s < 0 && -s != sub)
            }),
            Some(OneOrMany::One(s)) => {
                let s = i64::from(*s);
                if s < 0 {
                    -s != sub
                } else {
                    s == sub
                }
            }
        }
    }
}

/// Half-open level band `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelBand {
    pub min: u32,
    pub max: u32,
}

impl LevelBand {
    pub fn new(min: u32, max: u32) -> Self {
        LevelBand { min, max }
    }

    pub fn contains(&self, level: u32) -> bool {
        level >= self.min && level < self.max
    }

    pub fn is_empty(&self) -> bool {
        self.min >= self.max
    }
}

/// Inclusive level range `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InclusiveRange {
    pub min: u32,
    pub max: u32,
}

impl InclusiveRange {
    pub fn new(min: u32, max: u32) -> Self {
        InclusiveRange { min, max }
    }

    pub fn contains(&self, level: u32) -> bool {
        level >= self.min && level <= self.max
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_any_subclass() {
        let filter = SubclassFilter::any();
        assert!(filter.matches(0));
        assert!(filter.matches(10));
    }

    #[test]
    fn test_scalar_exclusion() {
        let filter = SubclassFilter::one(-10);
        assert!(filter.matches(1));
        assert!(filter.matches(5));
        assert!(!filter.matches(10));
    }

    #[test]
    fn test_scalar_exact() {
        let filter = SubclassFilter::one(2);
        assert!(filter.matches(2));
        assert!(!filter.matches(3));
    }

    #[test]
    fn test_list_membership() {
        let filter = SubclassFilter::many(vec![3, 18]);
        assert!(filter.matches(3));
        assert!(filter.matches(18));
        assert!(!filter.matches(19));
    }

    #[test]
    fn test_list_negative_element_is_open_exclusion() {
        let filter = SubclassFilter::many(vec![3, -18]);
        assert!(filter.matches(3));
        assert!(filter.matches(19));
        assert!(!filter.matches(18));
    }

    #[test]
    fn test_list_of_two_exclusions_matches_everything() {
        // Each negative element only excludes itself, so any subclass
        // satisfies at least one of them.
        let filter = SubclassFilter::many(vec![-2, -3]);
        assert!(filter.matches(2));
        assert!(filter.matches(3));
    }

    #[test]
    fn test_ids_above_i32_range() {
        let high = 1u32 << 31;
        for sub in [high, u32::MAX] {
            assert!(SubclassFilter::one(-10).matches(sub));
            assert!(!SubclassFilter::one(10).matches(sub));
            assert!(SubclassFilter::many(vec![3, -18]).matches(sub));
            assert!(!SubclassFilter::many(vec![3, 18]).matches(sub));
        }
        // i32::MIN excludes exactly 2^31
        assert!(!SubclassFilter::one(i32::MIN).matches(high));
        assert!(SubclassFilter::one(i32::MIN).matches(u32::MAX));
    }

    #[test]
    fn test_one_or_many_contains() {
        let one: OneOrMany<u32> = 17.into();
        assert!(one.contains(&17));
        assert!(!one.contains(&13));
        let many: OneOrMany<u32> = vec![13, 15].into();
        assert!(many.contains(&15));
        assert!(!many.contains(&17));
    }

    #[test]
    fn test_level_bands() {
        let band = LevelBand::new(1, 140);
        assert!(band.contains(1));
        assert!(band.contains(139));
        assert!(!band.contains(140));
        assert!(!band.contains(0));

        let range = InclusiveRange::new(1, 140);
        assert!(range.contains(140));
        assert!(!range.contains(141));
    }

    proptest! {
        #[test]
        fn absent_filter_matches_everything(sub in 0u32..1000) {
            prop_assert!(SubclassFilter::any().matches(sub));
        }

        #[test]
        fn scalar_is_equality_or_exclusion(s in 0i32..40, sub in 0u32..40) {
            prop_assert_eq!(SubclassFilter::one(s).matches(sub), sub as i32 == s);
            if s > 0 {
                prop_assert_eq!(SubclassFilter::one(-s).matches(sub), sub as i32 != s);
            }
        }

        #[test]
        fn non_negative_list_is_membership(
            list in prop::collection::vec(0i32..20, 0..6),
            sub in 0u32..20,
        ) {
            let expected = list.contains(&(sub as i32));
            prop_assert_eq!(SubclassFilter::many(list).matches(sub), expected);
        }

        #[test]
        fn list_element_agrees_with_scalar(s in -20i32..20, sub in 0u32..20) {
            prop_assume!(s != 0);
            prop_assert_eq!(
                SubclassFilter::many(vec![s]).matches(sub),
                SubclassFilter::one(s).matches(sub)
            );
        }
    }
}
