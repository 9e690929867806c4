//! Sign, parity, bound and primality checks for plain numbers

use std::borrow::Cow;

use crate::checks::numeric::{Integer, Number, is_even, is_prime};
use crate::core::{ArgumentContext, EnsureResult};
use crate::ensure;

/// Checks for any [`Number`].
///
/// Bounds are strict: `is_more_than(5)` rejects 5, and
/// `is_in_range(0, 10)` accepts only values strictly between 0 and 10.
///
/// # Examples
///
/// ```rust,ignore
/// use ensured::prelude::*;
///
/// assert_eq!(that(5).is_in_range(0, 10), Ok(5));
/// assert!(that(10).is_in_range(0, 10).is_err());
/// ```
pub trait NumericChecks<N: Number>: Sized {
    /// Requires a value greater than zero.
    ///
    /// # Errors
    ///
    /// Fails for zero, negatives and NaN.
    fn is_positive(self) -> EnsureResult<N>;

    /// Requires a value less than zero.
    ///
    /// # Errors
    ///
    /// Fails for zero, positives and NaN.
    fn is_negative(self) -> EnsureResult<N>;

    /// Requires `value % 2 == 0`.
    ///
    /// # Errors
    ///
    /// Fails for odd values and for floats with a fractional part.
    fn is_even(self) -> EnsureResult<N>;

    /// Requires `value % 2 != 0`.
    ///
    /// # Errors
    ///
    /// Fails for even values. Floats with a fractional part pass.
    fn is_odd(self) -> EnsureResult<N>;

    /// Requires `value > min_value`.
    ///
    /// # Errors
    ///
    /// Fails when the value is at or below `min_value`.
    fn is_more_than(self, min_value: N) -> EnsureResult<N>;

    /// Requires `value < max_value`.
    ///
    /// # Errors
    ///
    /// Fails when the value is at or above `max_value`.
    fn is_less_than(self, max_value: N) -> EnsureResult<N>;

    /// Requires `min_value < value < max_value`.
    ///
    /// # Errors
    ///
    /// Fails when the value is outside the open interval, including either
    /// endpoint.
    fn is_in_range(self, min_value: N, max_value: N) -> EnsureResult<N>;
}

impl<N: Number> NumericChecks<N> for ArgumentContext<N> {
    fn is_positive(self) -> EnsureResult<N> {
        self.check(
            |a| *a > N::ZERO,
            |a| format!("Expected <{a}> to be a positive number"),
            false,
        )
    }

    fn is_negative(self) -> EnsureResult<N> {
        self.check(
            |a| *a < N::ZERO,
            |a| format!("Expected <{a}> to be a negative number"),
            false,
        )
    }

    fn is_even(self) -> EnsureResult<N> {
        self.check(
            |a| is_even(*a),
            |a| format!("Expected <{a}> to be an even number"),
            false,
        )
    }

    fn is_odd(self) -> EnsureResult<N> {
        self.check(
            |a| !is_even(*a),
            |a| format!("Expected <{a}> to be an odd number"),
            false,
        )
    }

    fn is_more_than(self, min_value: N) -> EnsureResult<N> {
        let min_value = ensure::require(min_value, Some(Cow::Borrowed("min_value")), None)?;
        self.check(
            |a| *a > min_value,
            |a| format!("Expected <{a}> to be more than <{min_value}>"),
            false,
        )
    }

    fn is_less_than(self, max_value: N) -> EnsureResult<N> {
        let max_value = ensure::require(max_value, Some(Cow::Borrowed("max_value")), None)?;
        self.check(
            |a| *a < max_value,
            |a| format!("Expected <{a}> to be less than <{max_value}>"),
            false,
        )
    }

    fn is_in_range(self, min_value: N, max_value: N) -> EnsureResult<N> {
        let min_value = ensure::require(min_value, Some(Cow::Borrowed("min_value")), None)?;
        let max_value = ensure::require(max_value, Some(Cow::Borrowed("max_value")), None)?;
        self.check(
            |a| *a > min_value && *a < max_value,
            |a| format!("Expected <{a}> to be in range of <{min_value}> and <{max_value}>"),
            false,
        )
    }
}

/// Checks that only make sense for integers.
pub trait IntegerChecks<N: Integer>: Sized {
    /// Requires a prime number. See [`is_prime`](crate::checks::is_prime).
    ///
    /// # Errors
    ///
    /// Fails for composites, 0, 1 and negatives.
    fn is_prime(self) -> EnsureResult<N>;
}

impl<N: Integer> IntegerChecks<N> for ArgumentContext<N> {
    fn is_prime(self) -> EnsureResult<N> {
        self.check(
            |a| is_prime(*a),
            |a| format!("Expected <{a}> to be a prime number"),
            false,
        )
    }
}
