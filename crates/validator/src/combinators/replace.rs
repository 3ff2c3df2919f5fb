//! REPLACE combinator - masks rejection with a default value

use serde_json::Value;

use crate::foundation::{Outcome, Validate};

/// Wraps a validator and a fixed replacement value.
///
/// When the inner validator accepts, its (possibly transformed) result is
/// passed through. When it rejects, the replacement is returned instead —
/// this combinator never rejects. The replacement itself is not
/// re-validated.
///
/// # Examples
///
/// ```
/// use lumber_validator::prelude::*;
/// use serde_json::json;
///
/// let v = replace(is_number(), 0);
/// assert_eq!(v.validate(&json!(5)), Outcome::Accepted(json!(5)));
/// assert_eq!(v.validate(&json!("abc")), Outcome::Accepted(json!(0)));
/// ```
#[derive(Debug, Clone)]
pub struct Replace<V> {
    inner: V,
    replacement: Value,
}

impl<V> Replace<V> {
    /// Creates a new `Replace` combinator.
    pub fn new(inner: V, replacement: impl Into<Value>) -> Self {
        Self {
            inner,
            replacement: replacement.into(),
        }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Returns the replacement value.
    pub fn replacement(&self) -> &Value {
        &self.replacement
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Replace<V>
where
    V: Validate,
{
    fn validate(&self, value: &Value) -> Outcome {
        match self.inner.validate(value) {
            outcome @ Outcome::Accepted(_) => outcome,
            Outcome::Rejected => Outcome::Accepted(self.replacement.clone()),
        }
    }
}

/// Creates a `Replace` combinator from a validator and a replacement value.
///
/// # Examples
///
/// ```
/// use lumber_validator::prelude::*;
/// use serde_json::json;
///
/// let v = replace(is_string(), "unknown");
/// assert_eq!(v.validate(&json!(42)), Outcome::Accepted(json!("unknown")));
/// ```
pub fn replace<V>(inner: V, replacement: impl Into<Value>) -> Replace<V>
where
    V: Validate,
{
    Replace::new(inner, replacement)
}
