//! Nullability of guarded values
//!
//! Rust has no null reference. A value is "null" when its type can express
//! absence and the value is in that absent state, which in practice means
//! `Option::None`. Everything else is never null.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

/// Types whose values may be absent.
///
/// `not_null` and `condition` consult this trait before running a predicate.
/// Implement it for your own types with [`never_null!`](crate::never_null)
/// when they have no absent state.
///
/// # Examples
///
/// ```rust,ignore
/// use ensured::Nullable;
///
/// assert!(None::<u8>.is_null());
/// assert!(!Some(0u8).is_null());
/// assert!(!"".is_null());
/// ```
pub trait Nullable {
    /// Returns true when the value is in its absent state.
    fn is_null(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<T: Nullable + ?Sized> Nullable for &T {
    #[inline]
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T: Nullable + ?Sized> Nullable for &mut T {
    #[inline]
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

/// Implements [`Nullable`] for types that have no absent state.
///
/// ```rust,ignore
/// struct Port(u16);
/// ensured::never_null!(Port);
/// ```
#[macro_export]
macro_rules! never_null {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Nullable for $ty {
                #[inline]
                fn is_null(&self) -> bool {
                    false
                }
            }
        )+
    };
}

crate::never_null!(
    bool, char, (), i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    str, String,
);

macro_rules! never_null_generic {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl<T> Nullable for $ty<T> {
                #[inline]
                fn is_null(&self) -> bool {
                    false
                }
            }
        )+
    };
}

never_null_generic!(Vec, VecDeque, LinkedList, BinaryHeap, BTreeSet);

impl<T> Nullable for [T] {
    #[inline]
    fn is_null(&self) -> bool {
        false
    }
}

impl<T, const N: usize> Nullable for [T; N] {
    #[inline]
    fn is_null(&self) -> bool {
        false
    }
}

impl<T, S> Nullable for HashSet<T, S> {
    #[inline]
    fn is_null(&self) -> bool {
        false
    }
}

impl<K, V, S> Nullable for HashMap<K, V, S> {
    #[inline]
    fn is_null(&self) -> bool {
        false
    }
}

impl<K, V> Nullable for BTreeMap<K, V> {
    #[inline]
    fn is_null(&self) -> bool {
        false
    }
}

impl<T: ?Sized> Nullable for Box<T> {
    #[inline]
    fn is_null(&self) -> bool {
        false
    }
}

impl<T: ?Sized> Nullable for Rc<T> {
    #[inline]
    fn is_null(&self) -> bool {
        false
    }
}

impl<T: ?Sized> Nullable for Arc<T> {
    #[inline]
    fn is_null(&self) -> bool {
        false
    }
}

impl<B: ToOwned + ?Sized> Nullable for Cow<'_, B> {
    #[inline]
    fn is_null(&self) -> bool {
        false
    }
}
