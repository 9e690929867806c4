//! Core types shared by every guard clause
//!
//! - **Context**: [`ArgumentContext`], the value under validation plus its name
//! - **Errors**: [`EnsureError`], [`ErrorKind`], [`EnsureResult`]
//! - **Options**: [`CheckOptions`], the per-check overrides
//! - **Nullability**: [`Nullable`], what "null" means for a Rust type
//!
//! # Architecture
//!
//! The core stays deliberately small. A check is a predicate plus a default
//! message; [`ArgumentContext`] resolves the parameter name and overrides, and
//! [`crate::ensure`] runs the predicate and builds the error. The typed
//! extensions in [`crate::checks`] only supply predicates and messages.

pub mod context;
pub mod error;
pub mod nullable;
pub mod options;

pub use context::ArgumentContext;
pub use error::{DEFAULT_NULL_MESSAGE, EnsureError, EnsureResult, ErrorKind, GENERIC_LABEL};
pub use nullable::Nullable;
pub use options::CheckOptions;
