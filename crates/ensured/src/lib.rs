//! # ensured
//!
//! Fluent guard clauses for argument validation.
//!
//! A check either hands the guarded value back unchanged or fails with an
//! [`EnsureError`] that says whether the value was absent
//! ([`NullArgument`](EnsureError::NullArgument)) or rejected
//! ([`FailedCondition`](EnsureError::FailedCondition)), with a message and the
//! name of the parameter.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ensured::prelude::*;
//!
//! fn create_user(name: &str, age: u8, roles: &[&str]) -> EnsureResult<()> {
//!     that!(name).is_not_empty_or_whitespace()?;
//!     that!(age).is_in_range(17, 130)?;
//!     that!(roles).contains("member")?;
//!     Ok(())
//! }
//!
//! let err = create_user("ada", 12, &["member"]).unwrap_err();
//! assert_eq!(err.param_name(), Some("age"));
//! assert_eq!(err.message(), "Expected <12> to be in range of <17> and <130>");
//! ```
//!
//! ## Building Blocks
//!
//! - [`ensure`]: the `not_null` and `condition` primitives and the `that`
//!   entry points
//! - [`ArgumentContext`]: a value plus its parameter name and per-check
//!   overrides
//! - [`checks`]: typed extension traits for booleans, collections, numbers
//!   and strings
//! - [`that!`], [`not_null!`], [`condition!`]: infer the parameter name from
//!   the member being read
//!
//! "Null" is `Option::None`; see [`Nullable`].
//!
//! ## Features
//!
//! - `serde`: `Serialize` for [`EnsureError`] and
//!   `EnsureError::to_json_value`

pub mod checks;
pub mod core;
pub mod ensure;
mod macros;
pub mod prelude;

pub use crate::core::{
    ArgumentContext, CheckOptions, DEFAULT_NULL_MESSAGE, EnsureError, EnsureResult, ErrorKind,
    GENERIC_LABEL, Nullable,
};
