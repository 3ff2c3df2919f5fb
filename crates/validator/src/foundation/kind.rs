//! Closed set of value categories
//!
//! Category checks go through [`ValueKind::of`] rather than open-ended
//! runtime inspection, so the set of recognized categories is fixed at
//! compile time.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The category of a dynamically typed value.
///
/// Classification is total: every [`Value`] belongs to exactly one kind.
///
/// # Examples
///
/// ```
/// use lumber_validator::foundation::ValueKind;
/// use serde_json::json;
///
/// assert_eq!(ValueKind::of(&json!(5)), ValueKind::Number);
/// assert_eq!(ValueKind::of(&json!({"a": 1})), ValueKind::Object);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// JSON `null`.
    Null,
    /// `true` or `false`.
    Bool,
    /// Any numeric value, integral or floating.
    Number,
    /// A string.
    String,
    /// An ordered sequence of values.
    Array,
    /// A string-keyed mapping of values.
    Object,
}

impl ValueKind {
    /// Classifies a value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Stable lowercase name, matching the `serde` representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
