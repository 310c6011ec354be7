//! Applicative type class - lifting values and combining independent
//! containers.
//!
//! # Laws
//!
//! ```text
//! Self::pure(x).fmap(f) == Self::pure(f(x))
//! fa.map2(Self::pure(b), |a, b| (a, b)) == fa.fmap(|a| (a, b))
//! ```
//!
//! `map2` calls its function only when both containers carry a payload.

use super::functor::Functor;
use crate::attempt::Attempt;
use crate::disjoint::Disjoint;
use crate::optional::Optional;
use std::error::Error;

/// A [`Functor`] that can lift plain values and combine two containers.
pub trait Applicative: Functor {
    /// Lifts a value into the container.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines the payloads of `self` and `other` with `function`.
    ///
    /// The first container without a payload decides the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::Optional;
    /// use totality::typeclass::Applicative;
    ///
    /// let sum = Optional::present(2).map2(Optional::present(3), |a, b| a + b);
    /// assert_eq!(sum, Optional::present(5));
    ///
    /// let missing = Optional::present(2).map2(Optional::<i32>::absent(), |a, b| a + b);
    /// assert!(missing.is_absent());
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;
}

impl<A> Applicative for Optional<A> {
    #[inline]
    fn pure<B>(value: B) -> Optional<B> {
        Optional::Present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Optional<B>, function: F) -> Optional<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Present(first), Optional::Present(second)) => {
                Optional::Present(function(first, second))
            }
            _ => Optional::Absent,
        }
    }
}

impl<L, R> Applicative for Disjoint<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Disjoint<L, B> {
        Disjoint::Right(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Disjoint<L, B>, function: F) -> Disjoint<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        match (self, other) {
            (Self::Left(error), _) | (Self::Right(_), Disjoint::Left(error)) => {
                Disjoint::Left(error)
            }
            (Self::Right(first), Disjoint::Right(second)) => Disjoint::Right(function(first, second)),
        }
    }
}

impl<T, E: Error> Applicative for Attempt<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Attempt<B, E> {
        Attempt::Success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Attempt<B, E>, function: F) -> Attempt<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Failure(error), _) | (Self::Success(_), Attempt::Failure(error)) => {
                Attempt::Failure(error)
            }
            (Self::Success(first), Attempt::Success(second)) => {
                Attempt::Success(function(first, second))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn disjoint_map2_reports_first_left() {
        let first: Disjoint<&str, i32> = Disjoint::left("first");
        let second: Disjoint<&str, i32> = Disjoint::left("second");
        assert_eq!(first.map2(second, |a, b| a + b), Disjoint::left("first"));

        let first: Disjoint<&str, i32> = Disjoint::right(1);
        assert_eq!(first.map2(second, |a, b| a + b), Disjoint::left("second"));
    }

    #[rstest]
    fn attempt_pure_is_success() {
        let lifted: Attempt<u8, std::fmt::Error> = <Attempt<(), std::fmt::Error>>::pure(3);
        assert_eq!(lifted, Attempt::success(3));
    }

    #[rstest]
    fn optional_pure_is_present() {
        assert_eq!(<Optional<()>>::pure(1), Optional::present(1));
    }
}
