//! ENTRIES combinator - key/value validation of objects

use serde_json::{Map, Value};

use crate::foundation::{Outcome, Validate};

/// Validates every key and value of an object independently.
///
/// Non-object input rejects the whole call. No entry is filtered: a
/// rejected value surfaces as JSON `null`, and a rejected key collapses to
/// the literal key `"null"` — multiple rejected keys therefore overwrite
/// one another, last one wins. Callers that need to tell a rejected entry
/// from a legitimate `null` should validate keys and values separately.
///
/// Keys reach the key validator as strings; a key transformed into a
/// non-string keeps its JSON rendering as the new key.
///
/// # Examples
///
/// ```
/// use lumber_validator::prelude::*;
/// use serde_json::json;
///
/// let v = entries(is_string(), is_number());
/// assert_eq!(
///     v.validate(&json!({"a": 1, "b": "x"})),
///     Outcome::Accepted(json!({"a": 1, "b": null})),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Entries<K, W> {
    keys: K,
    values: W,
}

impl<K, W> Entries<K, W> {
    /// Creates a new `Entries` combinator from a key validator and a value
    /// validator.
    pub fn new(keys: K, values: W) -> Self {
        Self { keys, values }
    }

    /// Returns a reference to the key validator.
    pub fn keys(&self) -> &K {
        &self.keys
    }

    /// Returns a reference to the value validator.
    pub fn values(&self) -> &W {
        &self.values
    }

    /// Extracts the key and value validators.
    pub fn into_parts(self) -> (K, W) {
        (self.keys, self.values)
    }
}

impl<K, W> Validate for Entries<K, W>
where
    K: Validate,
    W: Validate,
{
    fn validate(&self, value: &Value) -> Outcome {
        let Value::Object(map) = value else {
            return Outcome::Rejected;
        };

        let mut out = Map::with_capacity(map.len());
        for (key, val) in map {
            let new_key = match self.keys.validate(&Value::String(key.clone())) {
                Outcome::Accepted(Value::String(s)) => s,
                Outcome::Accepted(other) => other.to_string(),
                Outcome::Rejected => Value::Null.to_string(),
            };
            let new_val = self.values.validate(val).into_value_or(Value::Null);
            out.insert(new_key, new_val);
        }
        Outcome::Accepted(Value::Object(out))
    }
}

/// Creates an `Entries` combinator from a key validator and a value
/// validator.
///
/// # Examples
///
/// ```
/// use lumber_validator::prelude::*;
/// use serde_json::json;
///
/// let v = entries(is_string(), is_number());
/// assert!(v.validate(&json!({"a": 1})).is_accepted());
/// assert!(v.validate(&json!([1, 2])).is_rejected());
/// ```
pub fn entries<K, W>(keys: K, values: W) -> Entries<K, W>
where
    K: Validate,
    W: Validate,
{
    Entries::new(keys, values)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::validators::{is_number, is_string};

    #[test]
    fn validates_keys_and_values_independently() {
        let v = entries(is_string(), is_number());
        assert_eq!(
            v.validate(&json!({"a": 1, "b": "x"})),
            Outcome::Accepted(json!({"a": 1, "b": null})),
        );
    }

    #[test]
    fn non_object_input_rejects() {
        let v = entries(is_string(), is_number());
        assert_eq!(v.validate(&json!([1, 2])), Outcome::Rejected);
        assert_eq!(v.validate(&json!("abc")), Outcome::Rejected);
    }

    #[test]
    fn rejected_keys_collapse_to_the_null_key() {
        // Keys are strings, so a number-kind key check rejects them all;
        // the last entry wins the collapsed key.
        let v = entries(is_number(), is_number());
        assert_eq!(
            v.validate(&json!({"a": 1, "b": 2})),
            Outcome::Accepted(json!({"null": 2})),
        );
    }

    #[test]
    fn empty_object_is_accepted_empty() {
        let v = entries(is_string(), is_number());
        assert_eq!(v.validate(&json!({})), Outcome::Accepted(json!({})));
    }
}
