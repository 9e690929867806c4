//! The argument context that every check hangs off
//!
//! An [`ArgumentContext`] carries the guarded value, the parameter name it
//! was reached through (when known), and the overrides for the next check.
//! Checks consume the context and hand back the raw value, so a context is a
//! short-lived, single-use wrapper.

use std::borrow::Cow;
use std::fmt;

use crate::core::{CheckOptions, EnsureResult, Nullable};
use crate::ensure;

/// A value under validation together with its parameter name.
///
/// Build one with [`ensure::that`], [`ensure::that_with`],
/// [`ensure::that_named`] or the [`that!`](crate::that) macro, then call a
/// check on it. Type-specific checks live in the extension traits of
/// [`crate::checks`].
///
/// # Examples
///
/// ```rust,ignore
/// use ensured::prelude::*;
///
/// fn connect(port: u16) -> EnsureResult<u16> {
///     let port = that!(port).is_more_than(1023)?;
///     Ok(port)
/// }
///
/// let err = connect(80).unwrap_err();
/// assert_eq!(err.param_name(), Some("port"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a context does nothing until a check is called on it"]
pub struct ArgumentContext<T> {
    value: T,
    name: Option<Cow<'static, str>>,
    options: CheckOptions,
}

impl<T> ArgumentContext<T> {
    /// Wraps a value without a name.
    pub const fn new(value: T) -> Self {
        Self {
            value,
            name: None,
            options: CheckOptions::new(),
        }
    }

    /// Wraps a value under an explicit name.
    pub fn named(value: T, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            value,
            name: Some(name.into()),
            options: CheckOptions::new(),
        }
    }

    /// Evaluates `accessor` once and wraps the result without a name.
    pub fn from_accessor<F>(accessor: F) -> Self
    where
        F: FnOnce() -> T,
    {
        Self::new(accessor())
    }

    /// Evaluates `accessor` once and wraps the result under `name`.
    ///
    /// This is what [`that!`](crate::that) expands to, with `name` being the
    /// last segment of the member path that was read.
    pub fn from_named_accessor<F>(accessor: F, name: &'static str) -> Self
    where
        F: FnOnce() -> T,
    {
        Self::named(accessor(), name)
    }

    /// The guarded value.
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Unwraps the context without checking anything.
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }

    /// The inferred or explicit parameter name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The overrides the next check will apply.
    #[must_use]
    pub const fn options(&self) -> &CheckOptions {
        &self.options
    }

    /// Replaces the failure message of the next check.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.options = self.options.with_message(message);
        self
    }

    /// Reports failures of the next check under `param_name` instead of the
    /// context's name.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param_name(mut self, param_name: impl Into<Cow<'static, str>>) -> Self {
        self.options = self.options.with_param_name(param_name);
        self
    }

    /// Replaces all overrides at once.
    ///
    /// `allow_null` is only read by [`satisfies`](Self::satisfies). Typed
    /// checks decide null handling themselves (the `_or_null` forms accept
    /// null, the others reject it), and [`not_null`](Self::not_null) always
    /// rejects it.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_options(mut self, options: CheckOptions) -> Self {
        self.options = options;
        self
    }

    /// Runs `predicate` through [`ensure::check`] with the context's name and
    /// overrides. `default_message` is only formatted on failure.
    ///
    /// Every typed extension funnels through here.
    pub(crate) fn check<P, M>(
        self,
        predicate: P,
        default_message: M,
        allow_null: bool,
    ) -> EnsureResult<T>
    where
        T: Nullable,
        P: FnOnce(&T) -> bool,
        M: FnOnce(&T) -> String,
    {
        let (message, param_name, _) = self.options.into_parts();
        ensure::check(
            self.value,
            Some(predicate),
            message,
            param_name.or(self.name),
            |value| Cow::Owned(default_message(value)),
            allow_null,
        )
    }
}

// ============================================================================
// CHECKS AVAILABLE FOR EVERY TYPE
// ============================================================================

impl<T: Nullable> ArgumentContext<T> {
    /// Requires the value to be non-null.
    pub fn not_null(self) -> EnsureResult<T> {
        let (message, param_name, _) = self.options.into_parts();
        ensure::require(self.value, param_name.or(self.name), message)
    }

    /// Requires `predicate` to hold for the value.
    ///
    /// Honors `allow_null` from [`with_options`](Self::with_options).
    pub fn satisfies<P>(self, predicate: P) -> EnsureResult<T>
    where
        T: fmt::Debug,
        P: FnOnce(&T) -> bool,
    {
        let allow_null = self.options.allow_null();
        self.check(predicate, ensure::default_condition_message, allow_null)
    }

    /// Requires the value to equal `other`.
    pub fn is_equal_to<U>(self, other: U) -> EnsureResult<T>
    where
        T: PartialEq<U> + fmt::Debug,
        U: Nullable + fmt::Debug,
    {
        let other = ensure::require(other, Some(Cow::Borrowed("value")), None)?;
        self.check(
            |value| *value == other,
            |value| format!("Expected <{value:?}> to be equal to <{other:?}>"),
            false,
        )
    }
}

impl<T: fmt::Display> fmt::Display for ArgumentContext<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
