//! Per-check overrides

use std::borrow::Cow;

/// Overrides for a single check.
///
/// The recognised options are exactly:
///
/// - `message`: replaces the default failure text
/// - `param_name`: replaces the inferred parameter name
/// - `allow_null`: skips the non-null requirement before the predicate runs
///
/// # Examples
///
/// ```rust,ignore
/// use ensured::prelude::*;
///
/// let options = CheckOptions::new()
///     .with_param_name("retries")
///     .with_message("retries must be positive");
///
/// let err = ensure::condition(0u32, |r| *r > 0, options).unwrap_err();
/// assert_eq!(err.param_name(), Some("retries"));
/// assert_eq!(err.message(), "retries must be positive");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckOptions {
    message: Option<Cow<'static, str>>,
    param_name: Option<Cow<'static, str>>,
    allow_null: bool,
}

impl CheckOptions {
    /// Creates options with every override unset.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            message: None,
            param_name: None,
            allow_null: false,
        }
    }

    /// Sets the failure message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the parameter name reported on failure.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param_name(mut self, param_name: impl Into<Cow<'static, str>>) -> Self {
        self.param_name = Some(param_name.into());
        self
    }

    /// Lets null values reach the predicate instead of failing up front.
    ///
    /// Read by the `ensure` functions and `ArgumentContext::satisfies`; the
    /// typed checks ignore it.
    #[must_use = "builder methods must be chained or built"]
    pub const fn with_allow_null(mut self, allow_null: bool) -> Self {
        self.allow_null = allow_null;
        self
    }

    /// Fills in the parameter name only if none was set.
    ///
    /// Used by the accessor macros to apply an inferred name without
    /// overriding an explicit one.
    #[doc(hidden)]
    #[must_use = "builder methods must be chained or built"]
    pub fn or_param_name(mut self, param_name: impl Into<Cow<'static, str>>) -> Self {
        if self.param_name.is_none() {
            self.param_name = Some(param_name.into());
        }
        self
    }

    /// The failure message override, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The parameter name override, if any.
    #[must_use]
    pub fn param_name(&self) -> Option<&str> {
        self.param_name.as_deref()
    }

    /// Whether null values bypass the non-null requirement.
    #[must_use]
    pub const fn allow_null(&self) -> bool {
        self.allow_null
    }

    pub(crate) fn into_parts(self) -> (Option<Cow<'static, str>>, Option<Cow<'static, str>>, bool) {
        (self.message, self.param_name, self.allow_null)
    }
}
