//! PiecewiseResolver - Ordered first-match rule tables
//!
//! Every balance table that depends on quality, level, slot or subclass is an
//! ordered list of rules. Rules are tried in declared order and the first one
//! whose constraints all hold against the [`ItemContext`] supplies the value.
//! Running out of rules is not an error: the caller gets `None` and leaves its
//! output untouched.

mod filter;

pub use filter::{InclusiveRange, LevelBand, OneOrMany, SubclassFilter};

use crate::types::ItemContext;

/// A single entry of a piecewise rule table
pub trait Rule {
    /// Value produced by a matching rule
    type Output;

    /// Whether every constraint of this rule holds for `ctx`
    fn matches(&self, ctx: &ItemContext) -> bool;

    /// Evaluate the rule's value (constant or function of the context)
    fn value(&self, ctx: &ItemContext) -> Self::Output;
}

/// Find the first matching rule and return its index
pub fn first_match<R: Rule>(rules: &[R], ctx: &ItemContext) -> Option<usize> {
    rules.iter().position(|rule| rule.matches(ctx))
}

/// Resolve a rule table against a context, first match wins
pub fn resolve<R: Rule>(rules: &[R], ctx: &ItemContext) -> Option<R::Output> {
    let index = first_match(rules, ctx)?;
    log::trace!("rule {} of {} matched {:?}", index, rules.len(), ctx);
    Some(rules[index].value(ctx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{InventoryType, ItemClass, Quality};

    struct MinLevel {
        min: u32,
        value: f64,
    }

    impl Rule for MinLevel {
        type Output = f64;

        fn matches(&self, ctx: &ItemContext) -> bool {
            ctx.level >= self.min
        }

        fn value(&self, ctx: &ItemContext) -> f64 {
            self.value * ctx.level_f64()
        }
    }

    fn ctx(level: u32) -> ItemContext {
        ItemContext::new(ItemClass::Armor, InventoryType::Back, 1, Quality::Uncommon, level)
    }

    #[test]
    fn test_first_match_wins() {
        let rules = [
            MinLevel { min: 80, value: 2.0 },
            MinLevel { min: 1, value: 1.0 },
        ];
        assert_eq!(resolve(&rules, &ctx(80)), Some(160.0));
        assert_eq!(resolve(&rules, &ctx(79)), Some(79.0));
        assert_eq!(first_match(&rules, &ctx(79)), Some(1));
    }

    #[test]
    fn test_no_match_is_none() {
        let rules = [MinLevel { min: 10, value: 1.0 }];
        assert_eq!(resolve(&rules, &ctx(5)), None);
        let empty: [MinLevel; 0] = [];
        assert_eq!(resolve(&empty, &ctx(5)), None);
    }
}
