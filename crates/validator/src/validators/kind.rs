//! Kind validators

use serde_json::Value;

use crate::foundation::{Outcome, Validate, ValueKind};

/// Validates that a value belongs to a fixed category.
///
/// Accepts the value unchanged; never transforms.
///
/// # Examples
///
/// ```
/// use lumber_validator::prelude::*;
/// use serde_json::json;
///
/// let v = of_kind(ValueKind::Number);
/// assert_eq!(v.validate(&json!(5)), Outcome::Accepted(json!(5)));
/// assert_eq!(v.validate(&json!("5")), Outcome::Rejected);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OfKind {
    kind: ValueKind,
}

impl OfKind {
    /// Creates a validator for the given category.
    pub fn new(kind: ValueKind) -> Self {
        Self { kind }
    }

    /// Returns the category this validator checks for.
    pub fn kind(&self) -> ValueKind {
        self.kind
    }
}

impl Validate for OfKind {
    fn validate(&self, value: &Value) -> Outcome {
        if ValueKind::of(value) == self.kind {
            Outcome::Accepted(value.clone())
        } else {
            Outcome::Rejected
        }
    }
}

/// Creates a validator for the given category.
pub fn of_kind(kind: ValueKind) -> OfKind {
    OfKind::new(kind)
}

/// Validates that a value is `null`.
pub fn is_null() -> OfKind {
    OfKind::new(ValueKind::Null)
}

/// Validates that a value is a boolean.
pub fn is_bool() -> OfKind {
    OfKind::new(ValueKind::Bool)
}

/// Validates that a value is a number.
pub fn is_number() -> OfKind {
    OfKind::new(ValueKind::Number)
}

/// Validates that a value is a string.
pub fn is_string() -> OfKind {
    OfKind::new(ValueKind::String)
}

/// Validates that a value is an array.
pub fn is_array() -> OfKind {
    OfKind::new(ValueKind::Array)
}

/// Validates that a value is an object.
pub fn is_object() -> OfKind {
    OfKind::new(ValueKind::Object)
}
