//! Typed checks
//!
//! Each family is an extension trait on [`ArgumentContext`](crate::ArgumentContext)
//! whose methods supply a predicate and a default message and delegate to
//! the core condition. All of them honor the context's name and its
//! `with_message` / `with_param_name` overrides.
//!
//! # Categories
//!
//! - **Boolean**: `is_true`, `is_false` and their `_or_null` forms
//! - **Collection**: `is_not_empty`, `count_is`, `contains`
//! - **Numeric**: sign, parity, primality, strict bounds and ranges
//! - **String**: emptiness, whitespace, affixes, substrings, regex, length,
//!   integer parsing
//!
//! # Examples
//!
//! ```rust,ignore
//! use ensured::prelude::*;
//!
//! fn schedule(name: &str, retries: i32, hosts: &[&str]) -> EnsureResult<()> {
//!     that!(name).is_not_empty_or_whitespace()?;
//!     that!(retries).is_in_range(0, 10)?;
//!     that!(hosts).is_not_empty()?;
//!     Ok(())
//! }
//! ```

use std::fmt::Display;

pub mod boolean;
pub mod collection;
pub mod numeric;
pub mod string;

pub use boolean::{BooleanChecks, NullableBooleanChecks};
pub use collection::{Collection, CollectionChecks};
pub use numeric::{
    Integer, IntegerChecks, NullableIntegerChecks, NullableNumericChecks, Number, NumericChecks,
    is_prime,
};
pub use string::{StringChecks, Text};

/// Renders an optional value for messages, with `null` for `None`.
pub(crate) fn describe<T: Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map_or_else(|| "null".to_owned(), ToString::to_string)
}
