//! Macros that infer the parameter name from the member being read.
//!
//! # Available Macros
//!
//! - [`that!`]: build an [`ArgumentContext`](crate::ArgumentContext) named after the member
//! - [`not_null!`]: require a member to be non-null
//! - [`condition!`]: require a member to satisfy a predicate
//! - [`never_null!`]: declare types without an absent state
//!
//! Each accepts a bare member path (`value`, `self.limit`, `req.body.items`),
//! optionally behind a single `&`. The last segment becomes the parameter
//! name. Anything else (calls, indexing, literals) is rejected at compile
//! time, so a name can never be inferred from an expression it does not
//! describe. Use the functions in [`ensure`](crate::ensure) for those.
//!
//! # Examples
//!
//! ```rust,ignore
//! use ensured::prelude::*;
//!
//! struct Request { user: Option<String>, items: Vec<u32> }
//!
//! fn handle(request: &Request) -> EnsureResult<()> {
//!     not_null!(&request.user)?;
//!     that!(&request.items).is_not_empty()?;
//!     condition!(&request.items, |items| items.len() < 100)?;
//!     Ok(())
//! }
//! ```

// ============================================================================
// THAT
// ============================================================================

/// Wraps a member read in a context named after the member.
///
/// ```rust,ignore
/// let retries = 3;
/// let context = that!(retries);
/// assert_eq!(context.name(), Some("retries"));
/// ```
///
/// Computed expressions have no member name and do not compile:
///
/// ```compile_fail
/// fn limit() -> u32 { 3 }
/// let context = ensured::that!(limit());
/// ```
#[macro_export]
macro_rules! that {
    (& $($member:ident).+) => {
        $crate::ArgumentContext::from_named_accessor(
            || &$($member).+,
            $crate::__member_name!($($member).+),
        )
    };
    ($($member:ident).+) => {
        $crate::ArgumentContext::from_named_accessor(
            || $($member).+,
            $crate::__member_name!($($member).+),
        )
    };
}

// ============================================================================
// NOT NULL
// ============================================================================

/// Requires a member to be non-null, reporting failures under its name.
///
/// An explicit `param_name` in the optional [`CheckOptions`](crate::CheckOptions)
/// wins over the inferred one.
///
/// ```rust,ignore
/// let timeout: Option<u32> = None;
/// let err = not_null!(timeout).unwrap_err();
/// assert_eq!(err.param_name(), Some("timeout"));
///
/// let err = not_null!(timeout, CheckOptions::new().with_message("set a timeout"))
///     .unwrap_err();
/// assert_eq!(err.message(), "set a timeout");
/// ```
#[macro_export]
macro_rules! not_null {
    (& $($member:ident).+ $(, $options:expr)? $(,)?) => {
        $crate::ensure::not_null_with(
            ::std::option::Option::Some(|| &$($member).+),
            $crate::__options!($($options)?).or_param_name($crate::__member_name!($($member).+)),
        )
    };
    ($($member:ident).+ $(, $options:expr)? $(,)?) => {
        $crate::ensure::not_null_with(
            ::std::option::Option::Some(|| $($member).+),
            $crate::__options!($($options)?).or_param_name($crate::__member_name!($($member).+)),
        )
    };
}

// ============================================================================
// CONDITION
// ============================================================================

/// Requires a member to be non-null and satisfy `predicate`, reporting
/// failures under its name.
///
/// ```rust,ignore
/// let port = 80u16;
/// let err = condition!(port, |p| *p > 1023).unwrap_err();
/// assert_eq!(err.param_name(), Some("port"));
/// assert_eq!(err.message(), "<80> does not meet the condition");
/// ```
#[macro_export]
macro_rules! condition {
    (& $($member:ident).+, $predicate:expr $(, $options:expr)? $(,)?) => {
        $crate::ensure::condition_with(
            ::std::option::Option::Some(|| &$($member).+),
            $predicate,
            $crate::__options!($($options)?).or_param_name($crate::__member_name!($($member).+)),
        )
    };
    ($($member:ident).+, $predicate:expr $(, $options:expr)? $(,)?) => {
        $crate::ensure::condition_with(
            ::std::option::Option::Some(|| $($member).+),
            $predicate,
            $crate::__options!($($options)?).or_param_name($crate::__member_name!($($member).+)),
        )
    };
}

// ============================================================================
// HELPERS
// ============================================================================

/// The last segment of a member path, as a string literal.
#[doc(hidden)]
#[macro_export]
macro_rules! __member_name {
    ($last:ident) => {
        ::std::stringify!($last)
    };
    ($head:ident . $($rest:ident).+) => {
        $crate::__member_name!($($rest).+)
    };
}

/// The given options, or the defaults.
#[doc(hidden)]
#[macro_export]
macro_rules! __options {
    () => {
        $crate::CheckOptions::new()
    };
    ($options:expr) => {
        $options
    };
}
