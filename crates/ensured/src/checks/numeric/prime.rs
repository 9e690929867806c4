//! Primality by trial division

use crate::checks::numeric::Integer;

/// Returns true when `value` is prime.
///
/// Trial division by every candidate `d` from 2 while `d <= value / d`, i.e.
/// up to the integer square root. Values at or below one (including all
/// negatives) are not prime. The bound `d <= value / d` never overflows.
///
/// # Examples
///
/// ```
/// use ensured::checks::is_prime;
///
/// assert!(is_prime(7));
/// assert!(!is_prime(8));
/// assert!(!is_prime(1));
/// assert!(!is_prime(-7));
/// ```
#[must_use]
pub fn is_prime<N: Integer>(value: N) -> bool {
    if value <= N::ONE {
        return false;
    }

    let mut divisor = N::TWO;
    while divisor <= value / divisor {
        if value % divisor == N::ZERO {
            return false;
        }
        divisor = divisor + N::ONE;
    }

    true
}
