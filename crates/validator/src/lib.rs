//! # lumber-validator
//!
//! A small, composable validation framework over dynamically typed
//! (`serde_json::Value`) values.
//!
//! A validator is a unary operation: it takes one value and returns either
//! the (possibly transformed) value or a first-class rejection — never an
//! error, never a sentinel payload. Validators compose through logical
//! combinators ([`All`](combinators::All), [`Any`](combinators::Any)),
//! structural combinators ([`Each`](combinators::Each),
//! [`Entries`](combinators::Entries)), and a fallback combinator
//! ([`Replace`](combinators::Replace)).
//!
//! ## Quick Start
//!
//! ```
//! use lumber_validator::prelude::*;
//! use serde_json::json;
//!
//! // Keep the numbers, replace everything else with zero.
//! let sanitize = each(replace(is_number(), 0));
//! let outcome = sanitize.validate(&json!([1, "two", 3]));
//! assert_eq!(outcome, Outcome::Accepted(json!([1, 0, 3])));
//! ```
//!
//! Validators are immutable after construction: the same instance can be
//! applied to any number of values, from any number of threads, and always
//! yields the same outcome for the same input.

pub mod combinators;
pub mod foundation;
pub mod prelude;
pub mod validators;
