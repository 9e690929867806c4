//! Error types for failed guard clauses
//!
//! Every check either hands the guarded value back or fails with an
//! [`EnsureError`]. There are exactly two kinds of failure:
//!
//! - **null argument**: a required value (or accessor, or predicate) is absent
//! - **failed condition**: a predicate evaluated to `false`
//!
//! Both carry a human-readable message and, when known, the name of the
//! parameter that was checked. String fields use `Cow<'static, str>` so the
//! common case of static names and default messages never allocates.

use std::borrow::Cow;
use std::fmt;

use thiserror::Error;

/// Label used in rendered errors when no parameter name is known.
pub const GENERIC_LABEL: &str = "argument";

/// Message used for null-argument errors when the caller supplied none.
pub const DEFAULT_NULL_MESSAGE: &str = "Value cannot be null.";

// ============================================================================
// ENSURE ERROR
// ============================================================================

/// A failed guard clause.
///
/// # Examples
///
/// ```rust,ignore
/// use ensured::prelude::*;
///
/// let err = ensure::not_null(None::<u32>, CheckOptions::new().with_param_name("port"))
///     .unwrap_err();
///
/// assert!(err.is_null_argument());
/// assert_eq!(err.param_name(), Some("port"));
/// assert_eq!(err.to_string(), "Value cannot be null. (parameter 'port')");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum EnsureError {
    /// A required value was absent.
    #[error("{message} (parameter '{}')", label(.param_name))]
    NullArgument {
        /// Name of the absent parameter, if known.
        param_name: Option<Cow<'static, str>>,
        /// Human-readable description.
        message: Cow<'static, str>,
    },

    /// A predicate rejected the value.
    #[error("{message} (parameter '{}')", label(.param_name))]
    FailedCondition {
        /// Name of the rejected parameter, if known.
        param_name: Option<Cow<'static, str>>,
        /// Human-readable description.
        message: Cow<'static, str>,
    },
}

fn label<'a>(param_name: &'a Option<Cow<'static, str>>) -> &'a str {
    param_name.as_deref().unwrap_or(GENERIC_LABEL)
}

/// The kind of an [`EnsureError`], for callers that only need to branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`EnsureError::NullArgument`].
    NullArgument,
    /// See [`EnsureError::FailedCondition`].
    FailedCondition,
}

impl ErrorKind {
    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::NullArgument => "null_argument",
            Self::FailedCondition => "failed_condition",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl EnsureError {
    /// Creates a null-argument error.
    ///
    /// A missing message falls back to [`DEFAULT_NULL_MESSAGE`].
    pub fn null_argument(
        param_name: Option<Cow<'static, str>>,
        message: Option<Cow<'static, str>>,
    ) -> Self {
        Self::NullArgument {
            param_name,
            message: message.unwrap_or(Cow::Borrowed(DEFAULT_NULL_MESSAGE)),
        }
    }

    /// Creates a failed-condition error.
    pub fn failed_condition(
        param_name: Option<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::FailedCondition {
            param_name,
            message: message.into(),
        }
    }

    /// Returns the kind of failure.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NullArgument { .. } => ErrorKind::NullArgument,
            Self::FailedCondition { .. } => ErrorKind::FailedCondition,
        }
    }

    /// Machine-readable code, `"null_argument"` or `"failed_condition"`.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// The human-readable message, without the parameter suffix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::NullArgument { message, .. } | Self::FailedCondition { message, .. } => message,
        }
    }

    /// The parameter name attached to this error, if any.
    #[must_use]
    pub fn param_name(&self) -> Option<&str> {
        match self {
            Self::NullArgument { param_name, .. } | Self::FailedCondition { param_name, .. } => {
                param_name.as_deref()
            }
        }
    }

    /// Returns true for [`EnsureError::NullArgument`].
    #[must_use]
    pub const fn is_null_argument(&self) -> bool {
        matches!(self, Self::NullArgument { .. })
    }

    /// Returns true for [`EnsureError::FailedCondition`].
    #[must_use]
    pub const fn is_failed_condition(&self) -> bool {
        matches!(self, Self::FailedCondition { .. })
    }

    /// Converts the error to a JSON object with `code`, `message` and
    /// `param_name` keys.
    #[cfg(feature = "serde")]
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.code(),
            "message": self.message(),
            "param_name": self.param_name(),
        })
    }
}

/// Result of a guard clause: the guarded value, or the reason it was rejected.
pub type EnsureResult<T> = Result<T, EnsureError>;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_argument_default_message() {
        let error = EnsureError::null_argument(Some("port".into()), None);
        assert_eq!(error.kind(), ErrorKind::NullArgument);
        assert_eq!(error.message(), DEFAULT_NULL_MESSAGE);
        assert_eq!(error.param_name(), Some("port"));
    }

    #[test]
    fn test_failed_condition_without_name() {
        let error = EnsureError::failed_condition(None, "too small");
        assert!(error.is_failed_condition());
        assert!(!error.is_null_argument());
        assert_eq!(error.param_name(), None);
        assert_eq!(error.to_string(), "too small (parameter 'argument')");
    }

    #[test]
    fn test_display_with_name() {
        let error = EnsureError::null_argument(Some("port".into()), Some("port is required".into()));
        assert_eq!(error.to_string(), "port is required (parameter 'port')");
    }

    #[test]
    fn test_label_borrows_owned_name() {
        let error = EnsureError::failed_condition(Some(Cow::Owned(format!("item_{}", 3))), "missing");
        assert_eq!(label(&Some(Cow::Owned("item_3".to_owned()))), "item_3");
        assert_eq!(label(&None), GENERIC_LABEL);
        assert_eq!(error.to_string(), "missing (parameter 'item_3')");
    }

    #[test]
    fn test_codes() {
        assert_eq!(EnsureError::null_argument(None, None).code(), "null_argument");
        assert_eq!(
            EnsureError::failed_condition(None, "x").code(),
            "failed_condition"
        );
        assert_eq!(ErrorKind::FailedCondition.to_string(), "failed_condition");
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = EnsureError::null_argument(Some(Cow::Borrowed("port")), None);
        let EnsureError::NullArgument {
            param_name,
            message,
        } = error
        else {
            unreachable!("constructed a null argument");
        };
        assert!(matches!(param_name, Some(Cow::Borrowed(_))));
        assert!(matches!(message, Cow::Borrowed(_)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_to_json_value() {
        let error = EnsureError::failed_condition(Some("age".into()), "too young");
        let json = error.to_json_value();
        assert_eq!(json["code"], "failed_condition");
        assert_eq!(json["message"], "too young");
        assert_eq!(json["param_name"], "age");
    }
}
