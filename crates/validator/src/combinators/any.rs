//! ANY combinator - logical disjunction over a list of validators

use serde_json::Value;

use crate::foundation::{BoxedValidate, Outcome, Validate};

/// Combines a list of validators with logical OR.
///
/// Accepts iff at least one child accepts, returning the *original* input
/// unchanged. An empty child list rejects unless `allow_empty` is set.
///
/// The short-circuit policy is asymmetric: evaluation stops only while the
/// running result is still false — that is, on an unbroken chain of
/// failures. An early success never stops evaluation of the remaining
/// children.
///
/// # Examples
///
/// ```
/// use lumber_validator::prelude::*;
/// use serde_json::json;
///
/// let v = any(vec![is_number().boxed(), is_string().boxed()]);
/// assert_eq!(v.validate(&json!("abc")), Outcome::Accepted(json!("abc")));
/// assert_eq!(v.validate(&json!(true)), Outcome::Rejected);
/// ```
#[derive(Debug, Default)]
pub struct Any {
    validators: Vec<BoxedValidate>,
    short_circuit: bool,
    allow_empty: bool,
}

impl Any {
    /// Creates a new `Any` combinator over the given children.
    ///
    /// Short-circuiting and the empty-list acceptance are both off by
    /// default.
    pub fn new(validators: Vec<BoxedValidate>) -> Self {
        Self {
            validators,
            short_circuit: false,
            allow_empty: false,
        }
    }

    /// Sets whether evaluation stops while the running result is still
    /// negative. A child that accepts disables the stop for the rest of the
    /// list.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_short_circuit(mut self, short_circuit: bool) -> Self {
        self.short_circuit = short_circuit;
        self
    }

    /// Sets whether an empty child list accepts instead of rejecting.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_allow_empty(mut self, allow_empty: bool) -> Self {
        self.allow_empty = allow_empty;
        self
    }

    /// Returns the child validators.
    pub fn validators(&self) -> &[BoxedValidate] {
        &self.validators
    }
}

impl Validate for Any {
    fn validate(&self, value: &Value) -> Outcome {
        if self.validators.is_empty() {
            return if self.allow_empty {
                Outcome::Accepted(value.clone())
            } else {
                Outcome::Rejected
            };
        }

        let mut passed = false;
        for validator in &self.validators {
            passed = validator.validate(value).is_accepted() || passed;
            // Stops only on failure chains: once `passed` flips to true it
            // can never flip back, and the loop runs to the end.
            if self.short_circuit && !passed {
                break;
            }
        }
        if passed {
            Outcome::Accepted(value.clone())
        } else {
            Outcome::Rejected
        }
    }
}

/// Creates an `Any` combinator from a vector of validators.
///
/// # Examples
///
/// ```
/// use lumber_validator::prelude::*;
/// use serde_json::json;
///
/// let v = any(vec![is_bool().boxed(), is_null().boxed()]);
/// assert!(v.validate(&json!(null)).is_accepted());
/// ```
pub fn any(validators: Vec<BoxedValidate>) -> Any {
    Any::new(validators)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{is_number, is_string};

    #[derive(Debug)]
    struct Probe {
        hits: Arc<AtomicUsize>,
        pass: bool,
    }

    impl Probe {
        fn new(hits: &Arc<AtomicUsize>, pass: bool) -> Self {
            Self {
                hits: Arc::clone(hits),
                pass,
            }
        }
    }

    impl Validate for Probe {
        fn validate(&self, value: &Value) -> Outcome {
            self.hits.fetch_add(1, Ordering::Relaxed);
            if self.pass {
                Outcome::Accepted(value.clone())
            } else {
                Outcome::Rejected
            }
        }
    }

    #[test]
    fn empty_children_reject_by_default() {
        assert_eq!(any(vec![]).validate(&json!(5)), Outcome::Rejected);
    }

    #[test]
    fn empty_children_accept_when_allowed() {
        let v = any(vec![]).with_allow_empty(true);
        assert_eq!(v.validate(&json!(5)), Outcome::Accepted(json!(5)));
    }

    #[test]
    fn one_accepting_child_suffices() {
        let v = any(vec![is_string().boxed(), is_number().boxed()]);
        assert_eq!(v.validate(&json!(5)), Outcome::Accepted(json!(5)));
    }

    #[test]
    fn all_rejecting_children_reject() {
        let v = any(vec![is_string().boxed(), is_string().boxed()]);
        assert_eq!(v.validate(&json!(5)), Outcome::Rejected);
    }

    #[test]
    fn short_circuit_stops_a_failure_chain() {
        let hits = Arc::new(AtomicUsize::new(0));
        // Second child would accept, but the stop fires on the first
        // failure before it is reached.
        let v = any(vec![
            Probe::new(&hits, false).boxed(),
            Probe::new(&hits, true).boxed(),
        ])
        .with_short_circuit(true);

        assert_eq!(v.validate(&json!(1)), Outcome::Rejected);
        assert_eq!(hits.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn short_circuit_does_not_stop_after_success() {
        let hits = Arc::new(AtomicUsize::new(0));
        let v = any(vec![
            Probe::new(&hits, true).boxed(),
            Probe::new(&hits, false).boxed(),
            Probe::new(&hits, false).boxed(),
        ])
        .with_short_circuit(true);

        assert_eq!(v.validate(&json!(1)), Outcome::Accepted(json!(1)));
        assert_eq!(hits.load(Ordering::Relaxed), 3);
    }
}
