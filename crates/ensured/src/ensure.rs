//! Entry points and core assertions
//!
//! Everything in this crate reduces to two primitives:
//!
//! - [`not_null`]: the value must not be in its absent state
//! - [`condition`]: the value must be non-null (unless allowed) and satisfy a
//!   predicate
//!
//! [`that`] and friends build an [`ArgumentContext`] on which the typed
//! checks of [`crate::checks`] are called. Each primitive also has an
//! accessor form (`*_with`) that evaluates a closure exactly once before
//! checking its result. The [`that!`](crate::that),
//! [`not_null!`](crate::not_null) and [`condition!`](crate::condition) macros
//! wrap the accessor forms and infer the parameter name from the member that
//! was read.
//!
//! # Examples
//!
//! ```rust,ignore
//! use ensured::prelude::*;
//!
//! fn resize(width: Option<u32>, height: u32) -> EnsureResult<(u32, u32)> {
//!     let width = not_null!(width)?;
//!     let height = condition!(height, |h| *h > 0)?;
//!     Ok((width.unwrap_or_default(), height))
//! }
//!
//! let err = resize(None, 10).unwrap_err();
//! assert!(err.is_null_argument());
//! assert_eq!(err.param_name(), Some("width"));
//! ```

use std::borrow::Cow;
use std::fmt;

use crate::core::{
    ArgumentContext, CheckOptions, EnsureError, EnsureResult, GENERIC_LABEL, Nullable,
};

/// Parameter name reported when an accessor is absent.
const EXPRESSION: &str = "expression";

/// Parameter name reported when a predicate is absent.
const CONDITION: &str = "condition";

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Wraps `value` in a context without a name.
///
/// Never fails. Use [`that!`](crate::that) to have the name inferred.
pub const fn that<T>(value: T) -> ArgumentContext<T> {
    ArgumentContext::new(value)
}

/// Evaluates `accessor` once and wraps the result in a context without a name.
pub fn that_with<T, F>(accessor: F) -> ArgumentContext<T>
where
    F: FnOnce() -> T,
{
    ArgumentContext::from_accessor(accessor)
}

/// Wraps `value` in a context under an explicit name.
pub fn that_named<T>(value: T, name: impl Into<Cow<'static, str>>) -> ArgumentContext<T> {
    ArgumentContext::named(value, name)
}

// ============================================================================
// NOT NULL
// ============================================================================

/// Returns `value` unchanged unless it is null.
///
/// # Errors
///
/// [`EnsureError::NullArgument`] named after `options.param_name` (absent
/// otherwise), carrying `options.message` or the default null message.
///
/// # Examples
///
/// ```rust,ignore
/// use ensured::prelude::*;
///
/// assert_eq!(ensure::not_null(Some(3), CheckOptions::new()), Ok(Some(3)));
/// assert!(ensure::not_null(None::<i32>, CheckOptions::new()).is_err());
/// ```
pub fn not_null<T: Nullable>(value: T, options: CheckOptions) -> EnsureResult<T> {
    let (message, param_name, _) = options.into_parts();
    require(value, param_name, message)
}

/// Evaluates `accessor` once and passes its result through [`not_null`].
///
/// # Errors
///
/// A missing accessor fails with [`EnsureError::NullArgument`] for
/// `"expression"`; otherwise as [`not_null`].
pub fn not_null_with<T, F>(accessor: Option<F>, options: CheckOptions) -> EnsureResult<T>
where
    T: Nullable,
    F: FnOnce() -> T,
{
    let Some(accessor) = accessor else {
        return Err(report(EnsureError::null_argument(
            Some(Cow::Borrowed(EXPRESSION)),
            None,
        )));
    };
    not_null(accessor(), options)
}

// ============================================================================
// CONDITION
// ============================================================================

/// Returns `value` unchanged if it is non-null and `predicate` holds.
///
/// With `options.allow_null` set, null values are handed to the predicate
/// instead of failing up front, so the predicate must handle them.
///
/// # Errors
///
/// - [`EnsureError::NullArgument`] when `value` is null and nulls are not
///   allowed
/// - [`EnsureError::FailedCondition`] when the predicate returns `false`,
///   carrying `options.message` (or a description of the value) and
///   `options.param_name`
///
/// # Examples
///
/// ```rust,ignore
/// use ensured::prelude::*;
///
/// assert_eq!(ensure::condition(4, |v| v % 2 == 0, CheckOptions::new()), Ok(4));
///
/// let err = ensure::condition(3, |v| v % 2 == 0, CheckOptions::new()).unwrap_err();
/// assert_eq!(err.message(), "<3> does not meet the condition");
/// ```
pub fn condition<T, F>(value: T, predicate: F, options: CheckOptions) -> EnsureResult<T>
where
    T: Nullable + fmt::Debug,
    F: FnOnce(&T) -> bool,
{
    condition_opt(value, Some(predicate), options)
}

/// [`condition`] with a predicate that may be absent.
///
/// # Errors
///
/// A missing predicate fails with [`EnsureError::NullArgument`] for
/// `"condition"` before the value is looked at; otherwise as [`condition`].
pub fn condition_opt<T, F>(
    value: T,
    predicate: Option<F>,
    options: CheckOptions,
) -> EnsureResult<T>
where
    T: Nullable + fmt::Debug,
    F: FnOnce(&T) -> bool,
{
    let (message, param_name, allow_null) = options.into_parts();
    check(
        value,
        predicate,
        message,
        param_name,
        |value| Cow::Owned(default_condition_message(value)),
        allow_null,
    )
}

/// Evaluates `accessor` once and passes its result through [`condition`].
///
/// # Errors
///
/// A missing accessor fails with [`EnsureError::NullArgument`] for
/// `"expression"`; otherwise as [`condition`].
pub fn condition_with<T, A, F>(
    accessor: Option<A>,
    predicate: F,
    options: CheckOptions,
) -> EnsureResult<T>
where
    T: Nullable + fmt::Debug,
    A: FnOnce() -> T,
    F: FnOnce(&T) -> bool,
{
    let Some(accessor) = accessor else {
        return Err(report(EnsureError::null_argument(
            Some(Cow::Borrowed(EXPRESSION)),
            None,
        )));
    };
    condition(accessor(), predicate, options)
}

// ============================================================================
// SHARED MACHINERY
// ============================================================================

/// The non-null requirement with already-resolved name and message.
pub(crate) fn require<T: Nullable>(
    value: T,
    param_name: Option<Cow<'static, str>>,
    message: Option<Cow<'static, str>>,
) -> EnsureResult<T> {
    if value.is_null() {
        return Err(report(EnsureError::null_argument(param_name, message)));
    }
    Ok(value)
}

/// The full condition algorithm.
///
/// Order matters: a missing predicate is reported before the value is
/// inspected, and the null check runs before the predicate.
pub(crate) fn check<T, P, M>(
    value: T,
    predicate: Option<P>,
    message: Option<Cow<'static, str>>,
    param_name: Option<Cow<'static, str>>,
    default_message: M,
    allow_null: bool,
) -> EnsureResult<T>
where
    T: Nullable,
    P: FnOnce(&T) -> bool,
    M: FnOnce(&T) -> Cow<'static, str>,
{
    let Some(predicate) = predicate else {
        return Err(report(EnsureError::null_argument(
            Some(Cow::Borrowed(CONDITION)),
            None,
        )));
    };

    let value = if allow_null {
        value
    } else {
        require(value, param_name.clone(), None)?
    };

    if predicate(&value) {
        return Ok(value);
    }

    let message = message.unwrap_or_else(|| default_message(&value));
    Err(report(EnsureError::failed_condition(param_name, message)))
}

pub(crate) fn default_condition_message<T: fmt::Debug + ?Sized>(value: &T) -> String {
    format!("<{value:?}> does not meet the condition")
}

/// Emits the failure as a `debug` event and hands it back.
pub(crate) fn report(error: EnsureError) -> EnsureError {
    tracing::debug!(
        target: "ensured",
        code = error.code(),
        param = error.param_name().unwrap_or(GENERIC_LABEL),
        reason = error.message(),
        "guard clause failed"
    );
    error
}

// ============================================================================
// TESTS
// ============================================================================
