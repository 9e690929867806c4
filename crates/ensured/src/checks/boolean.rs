//! Boolean checks

use crate::checks::describe;
use crate::core::{ArgumentContext, EnsureResult};

/// Checks for `bool` values.
pub trait BooleanChecks: Sized {
    /// Requires `true`.
    ///
    /// # Errors
    ///
    /// Fails with `"Expected <false> to be true."` unless overridden.
    fn is_true(self) -> EnsureResult<bool>;

    /// Requires `false`.
    ///
    /// # Errors
    ///
    /// Fails with `"Expected <true> to be false."` unless overridden.
    fn is_false(self) -> EnsureResult<bool>;
}

impl BooleanChecks for ArgumentContext<bool> {
    fn is_true(self) -> EnsureResult<bool> {
        self.check(|v| *v, |v| format!("Expected <{v}> to be true."), false)
    }

    fn is_false(self) -> EnsureResult<bool> {
        self.check(|v| !*v, |v| format!("Expected <{v}> to be false."), false)
    }
}

/// Checks for `Option<bool>` values, where `None` is null.
pub trait NullableBooleanChecks: Sized {
    /// Requires `Some(true)`.
    ///
    /// # Errors
    ///
    /// `None` fails as a null argument; `Some(false)` as a failed condition.
    fn is_true(self) -> EnsureResult<Option<bool>>;

    /// Requires `Some(true)` or `None`.
    ///
    /// # Errors
    ///
    /// Fails for `Some(false)`.
    fn is_true_or_null(self) -> EnsureResult<Option<bool>>;

    /// Requires `Some(false)`.
    ///
    /// # Errors
    ///
    /// `None` fails as a null argument; `Some(true)` as a failed condition.
    fn is_false(self) -> EnsureResult<Option<bool>>;

    /// Requires `Some(false)` or `None`.
    ///
    /// # Errors
    ///
    /// Fails for `Some(true)`.
    fn is_false_or_null(self) -> EnsureResult<Option<bool>>;
}

impl NullableBooleanChecks for ArgumentContext<Option<bool>> {
    fn is_true(self) -> EnsureResult<Option<bool>> {
        self.check(
            |v| *v == Some(true),
            |v| format!("Expected <{}> to be true.", describe(v)),
            false,
        )
    }

    fn is_true_or_null(self) -> EnsureResult<Option<bool>> {
        self.check(
            |v| v.is_none_or(|v| v),
            |v| format!("Expected <{}> to be true.", describe(v)),
            true,
        )
    }

    fn is_false(self) -> EnsureResult<Option<bool>> {
        self.check(
            |v| *v == Some(false),
            |v| format!("Expected <{}> to be false.", describe(v)),
            false,
        )
    }

    fn is_false_or_null(self) -> EnsureResult<Option<bool>> {
        self.check(
            |v| v.is_none_or(|v| !v),
            |v| format!("Expected <{}> to be false.", describe(v)),
            true,
        )
    }
}
