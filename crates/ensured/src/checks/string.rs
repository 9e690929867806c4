//! String checks
//!
//! Work on anything that can be viewed as `&str` through [`Text`]: owned and
//! borrowed strings, `Cow<str>`, boxed and shared `str`, and `Option`s of
//! those with `None` as the null state.

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

use regex::Regex;

use crate::core::{ArgumentContext, EnsureError, EnsureResult, Nullable};
use crate::ensure;

// ============================================================================
// TEXT ABSTRACTION
// ============================================================================

/// A value that can be viewed as a string slice.
///
/// Returns `None` only for an absent optional string.
pub trait Text {
    /// The string view, if present.
    fn as_text(&self) -> Option<&str>;
}

impl Text for str {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl Text for String {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl Text for Cow<'_, str> {
    fn as_text(&self) -> Option<&str> {
        Some(&**self)
    }
}

impl Text for Box<str> {
    fn as_text(&self) -> Option<&str> {
        Some(&**self)
    }
}

impl Text for Rc<str> {
    fn as_text(&self) -> Option<&str> {
        Some(&**self)
    }
}

impl Text for Arc<str> {
    fn as_text(&self) -> Option<&str> {
        Some(&**self)
    }
}

impl<S: Text + ?Sized> Text for &S {
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }
}

impl<S: Text> Text for Option<S> {
    fn as_text(&self) -> Option<&str> {
        self.as_ref().and_then(Text::as_text)
    }
}

/// The text a message interpolates.
fn shown<S: Text + ?Sized>(value: &S) -> &str {
    value.as_text().unwrap_or("null")
}

/// Whether `text` parses as a 32-bit signed integer, surrounding whitespace
/// allowed.
fn is_number(text: &str) -> bool {
    text.trim().parse::<i32>().is_ok()
}

// ============================================================================
// CHECKS
// ============================================================================

/// Checks for [`Text`] values.
///
/// # Examples
///
/// ```rust,ignore
/// use ensured::prelude::*;
///
/// let code = "AB-1234";
/// let code = that!(code).starts_with("AB-")?;
/// let code = that!(code).is_match(r"^[A-Z]{2}-\d{4}$")?;
/// ```
pub trait StringChecks: Sized {
    /// The string type being checked.
    type Target;

    /// Requires at least one character.
    ///
    /// # Errors
    ///
    /// Fails with `"Expected <> to have length."` for `""`.
    fn is_not_empty(self) -> EnsureResult<Self::Target>;

    /// Requires at least one non-whitespace character.
    ///
    /// # Errors
    ///
    /// Fails for empty and whitespace-only strings.
    fn is_not_empty_or_whitespace(self) -> EnsureResult<Self::Target>;

    /// Requires the string to start with `value`.
    ///
    /// # Errors
    ///
    /// Fails when `value` is not a prefix.
    fn starts_with(self, value: &str) -> EnsureResult<Self::Target>;

    /// Requires the string to end with `value`.
    ///
    /// # Errors
    ///
    /// Fails when `value` is not a suffix.
    fn ends_with(self, value: &str) -> EnsureResult<Self::Target>;

    /// Requires `value` to occur in the string.
    ///
    /// # Errors
    ///
    /// Fails when `value` is not a substring.
    fn contains(self, value: &str) -> EnsureResult<Self::Target>;

    /// Requires `value` not to occur in the string.
    ///
    /// # Errors
    ///
    /// Fails when `value` is a substring.
    fn does_not_contain(self, value: &str) -> EnsureResult<Self::Target>;

    /// Requires the string to parse as an `i32`. Leading and trailing
    /// whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Fails with `"Expected <{value}> to be a number."` unless overridden.
    fn is_number(self) -> EnsureResult<Self::Target>;

    /// Requires the regular expression `pattern` to match somewhere in the
    /// string. The pattern is compiled on every call; use
    /// [`matches_regex`](Self::matches_regex) on hot paths.
    ///
    /// # Errors
    ///
    /// An invalid `pattern` fails as a failed condition named `"pattern"`
    /// before the value is looked at. Otherwise fails when nothing matches.
    fn is_match(self, pattern: &str) -> EnsureResult<Self::Target>;

    /// Requires a precompiled `regex` to match somewhere in the string.
    ///
    /// # Errors
    ///
    /// Fails when nothing matches.
    fn matches_regex(self, regex: &Regex) -> EnsureResult<Self::Target>;

    /// Requires exactly `length` characters (Unicode scalar values, not
    /// bytes).
    ///
    /// # Errors
    ///
    /// Fails with `"Expected length of <{value}> is <{length}>."` unless
    /// overridden.
    fn has_length(self, length: usize) -> EnsureResult<Self::Target>;
}

impl<S> StringChecks for ArgumentContext<S>
where
    S: Text + Nullable,
{
    type Target = S;

    fn is_not_empty(self) -> EnsureResult<S> {
        self.check(
            |s| s.as_text().is_some_and(|s| !s.is_empty()),
            |s| format!("Expected <{}> to have length.", shown(s)),
            false,
        )
    }

    fn is_not_empty_or_whitespace(self) -> EnsureResult<S> {
        self.check(
            |s| s.as_text().is_some_and(|s| !s.trim().is_empty()),
            |s| format!("Expected <{}> to have length.", shown(s)),
            false,
        )
    }

    fn starts_with(self, value: &str) -> EnsureResult<S> {
        let value = ensure::require(value, Some(Cow::Borrowed("value")), None)?;
        self.check(
            |s| s.as_text().is_some_and(|s| s.starts_with(value)),
            |s| format!("Expected <{}> to start with <{value}>", shown(s)),
            false,
        )
    }

    fn ends_with(self, value: &str) -> EnsureResult<S> {
        let value = ensure::require(value, Some(Cow::Borrowed("value")), None)?;
        self.check(
            |s| s.as_text().is_some_and(|s| s.ends_with(value)),
            |s| format!("Expected <{}> to end with <{value}>", shown(s)),
            false,
        )
    }

    fn contains(self, value: &str) -> EnsureResult<S> {
        let value = ensure::require(value, Some(Cow::Borrowed("value")), None)?;
        self.check(
            |s| s.as_text().is_some_and(|s| s.contains(value)),
            |s| format!("Expected <{}> to contain <{value}>", shown(s)),
            false,
        )
    }

    fn does_not_contain(self, value: &str) -> EnsureResult<S> {
        let value = ensure::require(value, Some(Cow::Borrowed("value")), None)?;
        self.check(
            |s| s.as_text().is_some_and(|s| !s.contains(value)),
            |s| format!("Expected <{}> not to contain <{value}>", shown(s)),
            false,
        )
    }

    fn is_number(self) -> EnsureResult<S> {
        self.check(
            |s| s.as_text().is_some_and(is_number),
            |s| format!("Expected <{}> to be a number.", shown(s)),
            false,
        )
    }

    fn is_match(self, pattern: &str) -> EnsureResult<S> {
        let pattern = ensure::require(pattern, Some(Cow::Borrowed("pattern")), None)?;
        let regex = Regex::new(pattern).map_err(|error| {
            ensure::report(EnsureError::failed_condition(
                Some(Cow::Borrowed("pattern")),
                format!("Invalid pattern <{pattern}>: {error}"),
            ))
        })?;
        self.check(
            |s| s.as_text().is_some_and(|s| regex.is_match(s)),
            |s| format!("Expected <{}> to match <{pattern}>", shown(s)),
            false,
        )
    }

    fn matches_regex(self, regex: &Regex) -> EnsureResult<S> {
        self.check(
            |s| s.as_text().is_some_and(|s| regex.is_match(s)),
            |s| format!("Expected <{}> to match <{}>", shown(s), regex.as_str()),
            false,
        )
    }

    fn has_length(self, length: usize) -> EnsureResult<S> {
        let length = ensure::require(length, Some(Cow::Borrowed("length")), None)?;
        self.check(
            |s| s.as_text().is_some_and(|s| s.chars().count() == length),
            |s| format!("Expected length of <{}> is <{length}>.", shown(s)),
            false,
        )
    }
}
