//! Numeric checks
//!
//! One generic implementation covers every primitive number type through the
//! [`Number`] and [`Integer`] traits, instead of one method per type.

use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Rem};

use crate::core::Nullable;

pub mod nullable;
pub mod prime;
pub mod properties;

pub use nullable::{NullableIntegerChecks, NullableNumericChecks};
pub use prime::is_prime;
pub use properties::{IntegerChecks, NumericChecks};

// ============================================================================
// NUMBER ABSTRACTION
// ============================================================================

/// A primitive number: ordered, with zero, two and a remainder.
///
/// Implemented for every primitive integer and for `f32` / `f64`.
pub trait Number:
    Copy + PartialOrd + Rem<Output = Self> + Display + Debug + Nullable
{
    /// Additive identity.
    const ZERO: Self;

    /// The divisor used for parity checks.
    const TWO: Self;
}

/// A primitive integer. Adds what trial division needs.
pub trait Integer: Number + Add<Output = Self> + Div<Output = Self> {
    /// Multiplicative identity.
    const ONE: Self;
}

macro_rules! impl_integer {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Number for $ty {
                const ZERO: Self = 0;
                const TWO: Self = 2;
            }

            impl Integer for $ty {
                const ONE: Self = 1;
            }
        )+
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_float {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Number for $ty {
                const ZERO: Self = 0.0;
                const TWO: Self = 2.0;
            }
        )+
    };
}

impl_float!(f32, f64);

/// `value % 2 == 0`, for integers and floats alike.
pub(crate) fn is_even<N: Number>(value: N) -> bool {
    value % N::TWO == N::ZERO
}
