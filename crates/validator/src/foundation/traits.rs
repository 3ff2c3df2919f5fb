//! Core traits for the validation system
//!
//! This module defines the single capability every validator implements,
//! plus the extension trait that provides fluent composition helpers.

use std::fmt;

use serde_json::Value;

use crate::combinators::Replace;
use crate::foundation::Outcome;

/// The core trait that all validators implement.
///
/// A validator is one capability: take one value, return either the
/// (possibly transformed) value or a rejection. Implementations hold only
/// construction-time configuration and never mutate it during a call, so a
/// single instance can be reused — and shared across threads — freely.
///
/// The `Debug` supertrait keeps every validator printable, which combinator
/// types rely on for their own `Debug` output.
///
/// # Examples
///
/// ```
/// use lumber_validator::foundation::{Outcome, Validate};
/// use serde_json::{Value, json};
///
/// /// Accepts strings that are not empty.
/// #[derive(Debug)]
/// struct NonEmptyText;
///
/// impl Validate for NonEmptyText {
///     fn validate(&self, value: &Value) -> Outcome {
///         match value.as_str() {
///             Some(s) if !s.is_empty() => Outcome::Accepted(value.clone()),
///             _ => Outcome::Rejected,
///         }
///     }
/// }
///
/// assert!(NonEmptyText.validate(&json!("hello")).is_accepted());
/// assert!(NonEmptyText.validate(&json!("")).is_rejected());
/// ```
pub trait Validate: fmt::Debug {
    /// Validates one value.
    fn validate(&self, value: &Value) -> Outcome;
}

/// A type-erased validator — the uniform child type for list-configured
/// combinators such as [`All`](crate::combinators::All) and
/// [`Any`](crate::combinators::Any).
///
/// `Send + Sync` is part of the alias so composed validators stay shareable
/// across threads.
pub type BoxedValidate = Box<dyn Validate + Send + Sync>;

impl<T> Validate for Box<T>
where
    T: Validate + ?Sized,
{
    fn validate(&self, value: &Value) -> Outcome {
        (**self).validate(value)
    }
}

/// Extension trait providing composition helpers for validators.
///
/// This trait is automatically implemented for all types that implement
/// [`Validate`].
///
/// # Examples
///
/// ```
/// use lumber_validator::prelude::*;
/// use serde_json::json;
///
/// let v = is_number().or_replace(0);
/// assert_eq!(v.validate(&json!("nope")), Outcome::Accepted(json!(0)));
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Boxes the validator for use in heterogeneous child lists.
    fn boxed(self) -> BoxedValidate
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }

    /// Masks rejection with a fixed fallback value.
    ///
    /// See [`Replace`] for the exact semantics.
    fn or_replace(self, replacement: impl Into<Value>) -> Replace<Self> {
        Replace::new(self, replacement)
    }
}

impl<T: Validate> ValidateExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug)]
    struct AlwaysAccept;

    impl Validate for AlwaysAccept {
        fn validate(&self, value: &Value) -> Outcome {
            Outcome::Accepted(value.clone())
        }
    }

    #[test]
    fn boxed_validator_delegates() {
        let boxed: BoxedValidate = AlwaysAccept.boxed();
        assert_eq!(boxed.validate(&json!(1)), Outcome::Accepted(json!(1)));
    }

    #[test]
    fn or_replace_wraps() {
        let v = AlwaysAccept.or_replace(json!("fallback"));
        assert_eq!(v.validate(&json!(1)), Outcome::Accepted(json!(1)));
    }
}
