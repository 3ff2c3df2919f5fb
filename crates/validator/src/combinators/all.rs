//! ALL combinator - logical conjunction over a list of validators

use serde_json::Value;

use crate::foundation::{BoxedValidate, Outcome, Validate};

/// Combines a list of validators with logical AND.
///
/// Accepts iff every child accepts. On success the *original* input is
/// returned unchanged — child transformations are discarded, not threaded
/// through.
///
/// An empty child list rejects unless `allow_empty` is set, in which case
/// the input is accepted unchanged.
///
/// # Examples
///
/// ```
/// use lumber_validator::prelude::*;
/// use serde_json::json;
///
/// let v = all(vec![is_number().boxed(), is_number().or_replace(0).boxed()]);
/// assert_eq!(v.validate(&json!(5)), Outcome::Accepted(json!(5)));
/// assert_eq!(v.validate(&json!("abc")), Outcome::Rejected);
/// ```
#[derive(Debug, Default)]
pub struct All {
    validators: Vec<BoxedValidate>,
    short_circuit: bool,
    allow_empty: bool,
}

impl All {
    /// Creates a new `All` combinator over the given children.
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

    /// Sets whether evaluation stops once the running result is already
    /// negative. Children after the stop are not invoked at all.
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

impl Validate for All {
    fn validate(&self, value: &Value) -> Outcome {
        if self.validators.is_empty() {
            return if self.allow_empty {
                Outcome::Accepted(value.clone())
            } else {
                Outcome::Rejected
            };
        }

        let mut passed = true;
        for validator in &self.validators {
            // The child runs before the running result is folded in, so a
            // non-short-circuit evaluation visits every child.
            passed = validator.validate(value).is_accepted() && passed;
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

/// Creates an `All` combinator from a vector of validators.
///
/// # Examples
///
/// ```
/// use lumber_validator::prelude::*;
/// use serde_json::json;
///
/// let v = all(vec![is_string().boxed()]);
/// assert!(v.validate(&json!("hello")).is_accepted());
/// ```
pub fn all(validators: Vec<BoxedValidate>) -> All {
    All::new(validators)
}
