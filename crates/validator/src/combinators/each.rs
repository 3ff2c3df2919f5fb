//! EACH combinator - element-wise validation of arrays

use serde_json::Value;

use crate::foundation::{Outcome, Validate};

/// Validates each element of an array with a child validator.
///
/// Non-array input rejects the whole call. Array input is always accepted;
/// what the output looks like depends on the mode:
///
/// - **drop mode** (default): the ordered list of accepted payloads, with
///   rejected elements omitted. An empty input — or an input whose every
///   element was rejected — yields an empty array, not a rejection.
/// - **keep mode**: the per-element outcomes in their tagged form (see
///   [`Outcome::into_tagged`]), collected into an array that is wrapped as
///   the single element of an outer one-element array.
///
/// # Examples
///
/// ```
/// use lumber_validator::prelude::*;
/// use serde_json::json;
///
/// let v = each(is_number());
/// assert_eq!(v.validate(&json!([1, "a", 3])), Outcome::Accepted(json!([1, 3])));
/// assert_eq!(v.validate(&json!(5)), Outcome::Rejected);
/// ```
#[derive(Debug, Clone)]
pub struct Each<V> {
    inner: V,
    drop_rejected: bool,
}

impl<V> Each<V> {
    /// Creates an element-wise validator that drops rejected elements.
    pub fn new(inner: V) -> Self {
        Self {
            inner,
            drop_rejected: true,
        }
    }

    /// Creates an element-wise validator that keeps per-element outcomes.
    pub fn keeping_rejected(inner: V) -> Self {
        Self {
            inner,
            drop_rejected: false,
        }
    }

    /// Sets whether rejected elements are dropped from the output.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_drop_rejected(mut self, drop_rejected: bool) -> Self {
        self.drop_rejected = drop_rejected;
        self
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Each<V>
where
    V: Validate,
{
    fn validate(&self, value: &Value) -> Outcome {
        let Value::Array(items) = value else {
            return Outcome::Rejected;
        };

        if self.drop_rejected {
            let kept: Vec<Value> = items
                .iter()
                .filter_map(|item| self.inner.validate(item).into_value())
                .collect();
            return Outcome::Accepted(Value::Array(kept));
        }

        // Keep mode nests the per-element outcomes one level deeper than the
        // drop mode: the output is a one-element array whose sole element is
        // the list of tagged outcomes. Existing consumers read through `[0]`.
        // TODO: flatten the extra nesting level once those consumers migrate.
        let outcomes: Vec<Value> = items
            .iter()
            .map(|item| self.inner.validate(item).into_tagged())
            .collect();
        Outcome::Accepted(Value::Array(vec![Value::Array(outcomes)]))
    }
}

/// Creates an `Each` combinator that drops rejected elements.
///
/// # Examples
///
/// ```
/// use lumber_validator::prelude::*;
/// use serde_json::json;
///
/// let v = each(is_string());
/// assert_eq!(
///     v.validate(&json!(["a", 1, "b"])),
///     Outcome::Accepted(json!(["a", "b"])),
/// );
/// ```
pub fn each<V>(inner: V) -> Each<V>
where
    V: Validate,
{
    Each::new(inner)
}

/// Creates an `Each` combinator that keeps per-element outcomes.
pub fn each_keeping_rejected<V>(inner: V) -> Each<V>
where
    V: Validate,
{
    Each::keeping_rejected(inner)
}
