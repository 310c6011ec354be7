//! Disjoint type - exactly one of two alternatives.
//!
//! This module provides [`Disjoint<L, R>`], a value that is either a
//! `Left(L)` or a `Right(R)`. The parameter order is error-first:
//!
//! - `Left` carries the error channel
//! - `Right` carries the success channel
//!
//! Every combinator works on `Right` and passes `Left` through untouched,
//! so a chain of `map`/`flat_map` calls stops at the first error.
//!
//! `Disjoint` has no zero value. The flag-plus-payload record shape, which
//! does have one, is kept as [`DisjointRecord`] for callers that build
//! values field by field (deserializers, foreign layouts) and must validate
//! them before use.
//!
//! # Examples
//!
//! ```rust
//! use totality::Disjoint;
//!
//! fn parse(text: &str) -> Disjoint<String, i32> {
//!     text.parse::<i32>()
//!         .map_err(|error| error.to_string())
//!         .into()
//! }
//!
//! let total = parse("40").flat_map(|a| parse("2").map(|b| a + b));
//! assert_eq!(total.to_string(), "Right 42");
//!
//! let broken = parse("x").flat_map(|a| parse("2").map(|b| a + b));
//! assert!(broken.is_left());
//! ```

mod record;

pub use record::{Discriminant, DisjointRecord};

use crate::optional::Optional;
use std::fmt;

/// A value that is exactly one of two alternatives.
///
/// # Type Parameters
///
/// * `L` - The error channel
/// * `R` - The success channel
///
/// # Examples
///
/// ```rust
/// use totality::Disjoint;
///
/// let success: Disjoint<String, i32> = Disjoint::right(10);
/// let failure: Disjoint<i32, String> = Disjoint::left(5);
///
/// assert_eq!(success.to_string(), "Right 10");
/// assert_eq!(failure.to_string(), "Left 5");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Disjoint<L, R> {
    /// The error alternative.
    Left(L),
    /// The success alternative.
    Right(R),
}

impl<L, R> Disjoint<L, R> {
    // =========================================================================
    // Construction and Type Checking
    // =========================================================================

    /// Wraps an error value.
    #[inline]
    pub const fn left(error: L) -> Self {
        Self::Left(error)
    }

    /// Wraps a success value.
    #[inline]
    pub const fn right(value: R) -> Self {
        Self::Right(value)
    }

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to the right value; a left value passes through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::Disjoint;
    ///
    /// let right: Disjoint<&str, i32> = Disjoint::right(2);
    /// assert_eq!(right.map(|x| x * 10), Disjoint::right(20));
    ///
    /// let left: Disjoint<&str, i32> = Disjoint::left("boom");
    /// assert_eq!(left.map(|x| x * 10), Disjoint::left("boom"));
    /// ```
    #[inline]
    pub fn map<T, F>(self, function: F) -> Disjoint<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(error) => Disjoint::Left(error),
            Self::Right(value) => Disjoint::Right(function(value)),
        }
    }

    /// Runs `function` on the right value, then returns `self`.
    #[inline]
    pub fn map_discard<F>(self, function: F) -> Self
    where
        F: FnOnce(&R),
    {
        if let Self::Right(value) = &self {
            function(value);
        }
        self
    }

    /// Monadic bind on the right value.
    ///
    /// A left value short-circuits and keeps its payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::Disjoint;
    ///
    /// fn checked_half(n: i32) -> Disjoint<String, i32> {
    ///     if n % 2 == 0 {
    ///         Disjoint::right(n / 2)
    ///     } else {
    ///         Disjoint::left(format!("{n} is odd"))
    ///     }
    /// }
    ///
    /// assert_eq!(Disjoint::right(12).flat_map(checked_half), Disjoint::right(6));
    /// assert_eq!(
    ///     Disjoint::right(12).flat_map(checked_half).flat_map(checked_half).flat_map(checked_half),
    ///     Disjoint::left("3 is odd".to_string())
    /// );
    /// ```
    #[inline]
    pub fn flat_map<T, F>(self, function: F) -> Disjoint<L, T>
    where
        F: FnOnce(R) -> Disjoint<L, T>,
    {
        match self {
            Self::Left(error) => Disjoint::Left(error),
            Self::Right(value) => function(value),
        }
    }

    /// Two-step composition keeping the first right value in scope.
    ///
    /// Equivalent to `flat_map(|x| first(&x).map(|y| second(x, y)))`.
    #[inline]
    pub fn flat_map2<U, T, F, G>(self, first: F, second: G) -> Disjoint<L, T>
    where
        F: FnOnce(&R) -> Disjoint<L, U>,
        G: FnOnce(R, U) -> T,
    {
        match self {
            Self::Left(error) => Disjoint::Left(error),
            Self::Right(value) => match first(&value) {
                Disjoint::Left(error) => Disjoint::Left(error),
                Disjoint::Right(intermediate) => Disjoint::Right(second(value, intermediate)),
            },
        }
    }

    // =========================================================================
    // Fold Operations
    // =========================================================================

    /// Exhaustive fold: `on_right` for a right value, `on_left` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::Disjoint;
    ///
    /// let value: Disjoint<String, i32> = Disjoint::right(3);
    /// let text = value.match_with(|x| format!("ok {x}"), |e| format!("err {e}"));
    /// assert_eq!(text, "ok 3");
    /// ```
    #[inline]
    pub fn match_with<T, F, G>(self, on_right: F, on_left: G) -> T
    where
        F: FnOnce(R) -> T,
        G: FnOnce(L) -> T,
    {
        match self {
            Self::Left(error) => on_left(error),
            Self::Right(value) => on_right(value),
        }
    }

    /// Side-effect fold: exactly one of the two functions runs, then `self`
    /// is returned.
    #[inline]
    pub fn match_discard<F, G>(self, on_right: F, on_left: G) -> Self
    where
        F: FnOnce(&R),
        G: FnOnce(&L),
    {
        match &self {
            Self::Left(error) => on_left(error),
            Self::Right(value) => on_right(value),
        }
        self
    }

    // =========================================================================
    // Fallback and Conversion
    // =========================================================================

    /// Returns the right value, or `fallback` for a left value.
    #[inline]
    pub fn get_or_else(self, fallback: R) -> R {
        match self {
            Self::Left(_) => fallback,
            Self::Right(value) => value,
        }
    }

    /// Keeps a right value as present and drops a left value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::{Disjoint, Optional};
    ///
    /// let right: Disjoint<&str, i32> = Disjoint::right(1);
    /// let left: Disjoint<&str, i32> = Disjoint::left("lost");
    /// assert_eq!(right.to_optional(), Optional::present(1));
    /// assert_eq!(left.to_optional(), Optional::absent());
    /// ```
    #[inline]
    pub fn to_optional(self) -> Optional<R> {
        match self {
            Self::Left(_) => Optional::Absent,
            Self::Right(value) => Optional::Present(value),
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Disjoint<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(error) => write!(formatter, "Left {error}"),
            Self::Right(value) => write!(formatter, "Right {value}"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Disjoint<L, R> {
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Disjoint<L, R>> for Result<R, L> {
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(disjoint: Disjoint<L, R>) -> Self {
        match disjoint {
            Disjoint::Left(error) => Err(error),
            Disjoint::Right(value) => Ok(value),
        }
    }
}

static_assertions::assert_impl_all!(Disjoint<String, i32>: Send, Sync);
static_assertions::assert_not_impl_any!(Disjoint<String, i32>: Default);
