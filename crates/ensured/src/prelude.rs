//! Prelude module for convenient imports.
//!
//! Provides a single `use ensured::prelude::*;` import that brings in the
//! entry points, the macros, the error types and every check trait.
//!
//! # Examples
//!
//! ```rust,ignore
//! use ensured::prelude::*;
//!
//! let limit = Some(10);
//! let limit = that!(limit).is_positive()?;
//! let name = that("job").is_not_empty()?;
//! let flag = ensure::condition(true, |f| *f, CheckOptions::new())?;
//! ```

// ============================================================================
// CORE: Context, options, errors
// ============================================================================

pub use crate::core::{
    ArgumentContext, CheckOptions, EnsureError, EnsureResult, ErrorKind, Nullable,
};

// ============================================================================
// ENTRY POINTS
// ============================================================================

pub use crate::ensure::{self, that, that_named, that_with};
pub use crate::{condition, never_null, not_null, that};

// ============================================================================
// CHECKS: Extension traits
// ============================================================================

pub use crate::checks::{
    BooleanChecks, CollectionChecks, IntegerChecks, NullableBooleanChecks,
    NullableIntegerChecks, NullableNumericChecks, NumericChecks, StringChecks,
};
