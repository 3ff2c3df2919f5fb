//! Built-in leaf validators
//!
//! Leaf validators accept or reject a single value on its own, without
//! delegating to children. Combine them with the types in
//! [`combinators`](crate::combinators).

pub mod kind;

pub use kind::{
    OfKind, is_array, is_bool, is_null, is_number, is_object, is_string, of_kind,
};
