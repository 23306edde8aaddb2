//! Ordered decision tables
//!
//! The order, payment and inquiry endpoints answer with a small cascade of
//! checks where the first matching check wins. Each cascade is written down
//! as a slice of [`Rule`]s evaluated top to bottom, so the precedence can be
//! read (and tested) without following nested conditionals.

use super::envelope::{ApiError, Outcome};

/// A single `(predicate, outcome)` row of a decision table
pub struct Rule<T: ?Sized> {
    /// Short name used in debug logs and tests
    pub name: &'static str,
    pub when: fn(&T) -> bool,
    pub then: Outcome,
}

/// Return the first rule whose predicate holds for `input`
pub fn first_match<'r, T: ?Sized>(rules: &'r [Rule<T>], input: &T) -> Option<&'r Rule<T>> {
    rules.iter().find(|rule| (rule.when)(input))
}

/// Evaluate a table, falling back to `otherwise` when no rule matches
pub fn evaluate<T: ?Sized>(rules: &[Rule<T>], input: &T, otherwise: ApiError) -> Outcome {
    first_match(rules, input).map_or(Outcome::Reject(otherwise), |rule| {
        crate::logger::log_debug(&format!("[Rule] matched '{}'", rule.name));
        rule.then
    })
}
