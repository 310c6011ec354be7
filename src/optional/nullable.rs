//! Conversion of value-like and nullable values into [`Optional`].

use super::Optional;
use std::rc::Rc;
use std::sync::Arc;

/// Types that know whether they denote a value or its absence.
///
/// Value-like types always produce a present container, zero values
/// included: `0`, `false` and `""` are legitimate data. Nullable types
/// (`Option<T>` and `Optional<T>` itself) produce an absent container when
/// they hold nothing.
///
/// Implemented for the primitive types, `String`, `Vec`, the smart pointers
/// and references. Other types opt in through [`value_like!`](crate::value_like),
/// or a manual impl when they have a null-like state of their own. A type
/// without an impl can always be wrapped with [`Optional::present`].
///
/// # Examples
///
/// ```rust
/// use totality::{IntoOptional, Optional};
///
/// assert_eq!(0_u8.into_optional(), Optional::present(0));
/// assert_eq!(false.into_optional(), Optional::present(false));
/// assert_eq!(None::<String>.into_optional(), Optional::absent());
/// ```
pub trait IntoOptional {
    /// The wrapped value type.
    type Value;

    /// Wraps `self`, absent iff `self` is null-like.
    fn into_optional(self) -> Optional<Self::Value>;
}

impl<T> IntoOptional for Option<T> {
    type Value = T;

    #[inline]
    fn into_optional(self) -> Optional<T> {
        Optional::some_or_none(self)
    }
}

impl<T> IntoOptional for Optional<T> {
    type Value = T;

    #[inline]
    fn into_optional(self) -> Self {
        self
    }
}

/// Implements [`IntoOptional`] for value-like types, which are always present.
///
/// # Examples
///
/// ```rust
/// use totality::{Optional, value_like};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Default)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// value_like!(Point);
///
/// let origin = Point::default();
/// assert_eq!(Optional::from_value_or_reference(origin), Optional::present(origin));
/// ```
#[macro_export]
macro_rules! value_like {
    ($($type:ty),* $(,)?) => {
        $(
            impl $crate::IntoOptional for $type {
                type Value = Self;

                #[inline]
                fn into_optional(self) -> $crate::Optional<Self> {
                    $crate::Optional::Present(self)
                }
            }
        )*
    };
}

crate::value_like!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, (),
    String,
);

macro_rules! always_present_pointer {
    ($($pointer:ident),* $(,)?) => {
        $(
            impl<T: ?Sized> IntoOptional for $pointer<T> {
                type Value = Self;

                #[inline]
                fn into_optional(self) -> Optional<Self> {
                    Optional::Present(self)
                }
            }
        )*
    };
}

always_present_pointer!(Box, Rc, Arc);

impl<T> IntoOptional for Vec<T> {
    type Value = Self;

    #[inline]
    fn into_optional(self) -> Optional<Self> {
        Optional::Present(self)
    }
}

// Rust references are never null.
impl<'a, T: ?Sized> IntoOptional for &'a T {
    type Value = Self;

    #[inline]
    fn into_optional(self) -> Optional<&'a T> {
        Optional::Present(self)
    }
}

impl<'a, T: ?Sized> IntoOptional for &'a mut T {
    type Value = Self;

    #[inline]
    fn into_optional(self) -> Optional<&'a mut T> {
        Optional::Present(self)
    }
}
