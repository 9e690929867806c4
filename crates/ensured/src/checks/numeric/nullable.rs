//! Numeric checks for `Option<N>`
//!
//! The plain forms reject `None` as a null argument. The `_or_null` forms let
//! `None` through and only test a present value.

use std::borrow::Cow;

use crate::checks::describe;
use crate::checks::numeric::{Integer, Number, is_even, is_prime};
use crate::core::{ArgumentContext, EnsureResult};
use crate::ensure;

type Optional<N> = EnsureResult<Option<N>>;

/// Checks for optional numbers.
///
/// # Examples
///
/// ```rust,ignore
/// use ensured::prelude::*;
///
/// let timeout: Option<u32> = None;
/// assert_eq!(that!(timeout).is_positive_or_null(), Ok(None));
/// assert!(that!(timeout).is_positive().unwrap_err().is_null_argument());
/// ```
pub trait NullableNumericChecks<N: Number>: Sized {
    /// Requires `Some(a)` with `a > 0`.
    ///
    /// # Errors
    ///
    /// `None` fails as a null argument, anything else not positive as a failed
    /// condition. The same split applies to every non-`_or_null` method.
    fn is_positive(self) -> Optional<N>;

    /// Requires `None` or a value greater than zero.
    ///
    /// # Errors
    ///
    /// Fails for a present value that is not positive.
    fn is_positive_or_null(self) -> Optional<N>;

    /// Requires `Some(a)` with `a < 0`.
    ///
    /// # Errors
    ///
    /// Fails for `None` or a value that is not negative.
    fn is_negative(self) -> Optional<N>;

    /// Requires `None` or a value less than zero.
    ///
    /// # Errors
    ///
    /// Fails for a present value that is not negative.
    fn is_negative_or_null(self) -> Optional<N>;

    /// Requires `Some(a)` with `a % 2 == 0`.
    ///
    /// # Errors
    ///
    /// Fails for `None` or an odd value.
    fn is_even(self) -> Optional<N>;

    /// Requires `None` or an even value.
    ///
    /// # Errors
    ///
    /// Fails for a present odd value.
    fn is_even_or_null(self) -> Optional<N>;

    /// Requires `Some(a)` with `a % 2 != 0`.
    ///
    /// # Errors
    ///
    /// Fails for `None` or an even value.
    fn is_odd(self) -> Optional<N>;

    /// Requires `None` or an odd value.
    ///
    /// # Errors
    ///
    /// Fails for a present even value.
    fn is_odd_or_null(self) -> Optional<N>;

    /// Requires `Some(a)` with `a > min_value`.
    ///
    /// # Errors
    ///
    /// Fails for `None` or a value at or below `min_value`.
    fn is_more_than(self, min_value: N) -> Optional<N>;

    /// Requires `None` or a value greater than `min_value`.
    ///
    /// # Errors
    ///
    /// Fails for a present value at or below `min_value`.
    fn is_more_than_or_null(self, min_value: N) -> Optional<N>;

    /// Requires `Some(a)` with `a < max_value`.
    ///
    /// # Errors
    ///
    /// Fails for `None` or a value at or above `max_value`.
    fn is_less_than(self, max_value: N) -> Optional<N>;

    /// Requires `None` or a value less than `max_value`.
    ///
    /// # Errors
    ///
    /// Fails for a present value at or above `max_value`.
    fn is_less_than_or_null(self, max_value: N) -> Optional<N>;

    /// Requires `Some(a)` with `min_value < a < max_value`.
    ///
    /// # Errors
    ///
    /// Fails for `None` or a value outside the open interval.
    fn is_in_range(self, min_value: N, max_value: N) -> Optional<N>;

    /// Requires `None` or a value strictly between the bounds.
    ///
    /// # Errors
    ///
    /// Fails for a present value outside the open interval.
    fn is_in_range_or_null(self, min_value: N, max_value: N) -> Optional<N>;
}

/// Tests a present value with `predicate`. `None` only reaches the predicate
/// when `allow_null` is set, and then passes.
fn check_present<N, P, M>(
    context: ArgumentContext<Option<N>>,
    predicate: P,
    message: M,
    allow_null: bool,
) -> Optional<N>
where
    N: Number,
    P: FnOnce(N) -> bool,
    M: FnOnce(String) -> String,
{
    context.check(
        |value| value.is_none_or(predicate),
        |value| message(describe(value)),
        allow_null,
    )
}

fn bound<N: Number>(value: N, name: &'static str) -> EnsureResult<N> {
    ensure::require(value, Some(Cow::Borrowed(name)), None)
}

impl<N: Number> NullableNumericChecks<N> for ArgumentContext<Option<N>> {
    fn is_positive(self) -> Optional<N> {
        check_present(
            self,
            |a| a > N::ZERO,
            |a| format!("Expected <{a}> to be a positive number"),
            false,
        )
    }

    fn is_positive_or_null(self) -> Optional<N> {
        check_present(
            self,
            |a| a > N::ZERO,
            |a| format!("Expected <{a}> to be null or a positive number"),
            true,
        )
    }

    fn is_negative(self) -> Optional<N> {
        check_present(
            self,
            |a| a < N::ZERO,
            |a| format!("Expected <{a}> to be a negative number"),
            false,
        )
    }

    fn is_negative_or_null(self) -> Optional<N> {
        check_present(
            self,
            |a| a < N::ZERO,
            |a| format!("Expected <{a}> to be null or a negative number"),
            true,
        )
    }

    fn is_even(self) -> Optional<N> {
        check_present(
            self,
            is_even,
            |a| format!("Expected <{a}> to be an even number"),
            false,
        )
    }

    fn is_even_or_null(self) -> Optional<N> {
        check_present(
            self,
            is_even,
            |a| format!("Expected <{a}> to be null or an even number"),
            true,
        )
    }

    fn is_odd(self) -> Optional<N> {
        check_present(
            self,
            |a| !is_even(a),
            |a| format!("Expected <{a}> to be an odd number"),
            false,
        )
    }

    fn is_odd_or_null(self) -> Optional<N> {
        check_present(
            self,
            |a| !is_even(a),
            |a| format!("Expected <{a}> to be null or an odd number"),
            true,
        )
    }

    fn is_more_than(self, min_value: N) -> Optional<N> {
        let min_value = bound(min_value, "min_value")?;
        check_present(
            self,
            |a| a > min_value,
            |a| format!("Expected <{a}> to be more than <{min_value}>"),
            false,
        )
    }

    fn is_more_than_or_null(self, min_value: N) -> Optional<N> {
        let min_value = bound(min_value, "min_value")?;
        check_present(
            self,
            |a| a > min_value,
            |a| format!("Expected <{a}> to be null or more than <{min_value}>"),
            true,
        )
    }

    fn is_less_than(self, max_value: N) -> Optional<N> {
        let max_value = bound(max_value, "max_value")?;
        check_present(
            self,
            |a| a < max_value,
            |a| format!("Expected <{a}> to be less than <{max_value}>"),
            false,
        )
    }

    fn is_less_than_or_null(self, max_value: N) -> Optional<N> {
        let max_value = bound(max_value, "max_value")?;
        check_present(
            self,
            |a| a < max_value,
            |a| format!("Expected <{a}> to be null or less than <{max_value}>"),
            true,
        )
    }

    fn is_in_range(self, min_value: N, max_value: N) -> Optional<N> {
        let min_value = bound(min_value, "min_value")?;
        let max_value = bound(max_value, "max_value")?;
        check_present(
            self,
            |a| a > min_value && a < max_value,
            |a| format!("Expected <{a}> to be in range of <{min_value}> and <{max_value}>"),
            false,
        )
    }

    fn is_in_range_or_null(self, min_value: N, max_value: N) -> Optional<N> {
        let min_value = bound(min_value, "min_value")?;
        let max_value = bound(max_value, "max_value")?;
        check_present(
            self,
            |a| a > min_value && a < max_value,
            |a| {
                format!("Expected <{a}> to be null or in range of <{min_value}> and <{max_value}>")
            },
            true,
        )
    }
}

/// Primality for optional integers.
pub trait NullableIntegerChecks<N: Integer>: Sized {
    /// Requires `Some(a)` with `a` prime.
    ///
    /// # Errors
    ///
    /// Fails for `None` or a present value that is not prime.
    fn is_prime(self) -> Optional<N>;
}

impl<N: Integer> NullableIntegerChecks<N> for ArgumentContext<Option<N>> {
    fn is_prime(self) -> Optional<N> {
        check_present(
            self,
            is_prime,
            |a| format!("Expected <{a}> to be a prime number"),
            false,
        )
    }
}
