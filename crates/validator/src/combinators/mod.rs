//! Combinators for composing validators
//!
//! A combinator is a validator built from other validators:
//!
//! - **Logical**: [`All`] (conjunction), [`Any`] (disjunction) — list
//!   configured, with short-circuit and empty-list policies
//! - **Structural**: [`Each`] (element-wise over arrays), [`Entries`]
//!   (key/value-wise over objects)
//! - **Fallback**: [`Replace`] — substitutes a default when the inner
//!   validator rejects
//!
//! Each combinator has a lowercase factory function ([`all`], [`any`],
//! [`each`], [`entries`], [`replace`]) alongside its type.

pub mod all;
pub mod any;
pub mod each;
pub mod entries;
pub mod replace;

pub use all::{All, all};
pub use any::{Any, any};
pub use each::{Each, each, each_keeping_rejected};
pub use entries::{Entries, entries};
pub use replace::{Replace, replace};
