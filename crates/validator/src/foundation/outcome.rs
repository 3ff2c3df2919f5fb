//! Validation outcome type
//!
//! Rejection is a first-class result, not an error: combinators propagate
//! [`Outcome::Rejected`] by value instead of raising anything. A legitimate
//! payload that happens to equal a "missing" value (JSON `null`) stays
//! representable as `Accepted(Value::Null)` and is never conflated with a
//! failed validation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The result of applying a validator to a single value.
///
/// Exactly one of the two cases is produced by every validation — never
/// both, never neither.
///
/// # Examples
///
/// ```
/// use lumber_validator::foundation::Outcome;
/// use serde_json::json;
///
/// let accepted = Outcome::Accepted(json!(5));
/// assert!(accepted.is_accepted());
/// assert_eq!(accepted.into_value(), Some(json!(5)));
///
/// assert!(Outcome::Rejected.is_rejected());
/// assert_eq!(Outcome::Rejected.into_value(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The value passed validation; carries the (possibly transformed) payload.
    Accepted(Value),
    /// The value did not validate.
    Rejected,
}

impl Outcome {
    /// Returns `true` if the value passed validation.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// Returns `true` if the value did not validate.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected)
    }

    /// Extracts the accepted payload, if any.
    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::Accepted(value) => Some(value),
            Self::Rejected => None,
        }
    }

    /// Borrows the accepted payload, if any.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Accepted(value) => Some(value),
            Self::Rejected => None,
        }
    }

    /// Extracts the accepted payload, or `default` on rejection.
    pub fn into_value_or(self, default: Value) -> Value {
        match self {
            Self::Accepted(value) => value,
            Self::Rejected => default,
        }
    }

    /// Renders the outcome into its tagged `Value` form:
    /// `{"accepted": <payload>}` or `"rejected"`.
    ///
    /// This matches the `serde` representation of [`Outcome`] without the
    /// fallible detour through `serde_json::to_value`.
    pub fn into_tagged(self) -> Value {
        match self {
            Self::Accepted(value) => {
                let mut map = Map::with_capacity(1);
                map.insert("accepted".to_owned(), value);
                Value::Object(map)
            }
            Self::Rejected => Value::String("rejected".to_owned()),
        }
    }
}

impl From<Option<Value>> for Outcome {
    fn from(value: Option<Value>) -> Self {
        match value {
            Some(value) => Self::Accepted(value),
            None => Self::Rejected,
        }
    }
}
