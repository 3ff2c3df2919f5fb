//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation
//! system:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Results**: [`Outcome`] — acceptance with a payload, or rejection
//! - **Categories**: [`ValueKind`] — the closed set of value categories
//!
//! Rejection travels by value through combinators; no error type and no
//! reserved sentinel payload is involved. See [`Outcome`] for the contract.

pub mod kind;
pub mod outcome;
pub mod traits;

pub use kind::ValueKind;
pub use outcome::Outcome;
pub use traits::{BoxedValidate, Validate, ValidateExt};
