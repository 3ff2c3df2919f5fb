//! Prelude module for convenient imports.
//!
//! Provides a single `use lumber_validator::prelude::*;` import that brings
//! in the core trait, the outcome type, and all built-in validators and
//! combinators.
//!
//! # Examples
//!
//! ```
//! use lumber_validator::prelude::*;
//! use serde_json::json;
//!
//! let v = any(vec![is_number().boxed(), is_string().boxed()]);
//! assert!(v.validate(&json!("abc")).is_accepted());
//! ```

// ============================================================================
// FOUNDATION: Core traits, outcome, categories
// ============================================================================

pub use crate::foundation::{BoxedValidate, Outcome, Validate, ValidateExt, ValueKind};

// ============================================================================
// VALIDATORS: Built-in leaf validators
// ============================================================================

pub use crate::validators::{
    OfKind, is_array, is_bool, is_null, is_number, is_object, is_string, of_kind,
};

// ============================================================================
// COMBINATORS: Composition types and factory functions
// ============================================================================

pub use crate::combinators::{
    All, Any, Each, Entries, Replace, all, any, each, each_keeping_rejected, entries, replace,
};
