//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use totality::{Disjoint, Optional};
//! use totality::typeclass::Functor;
//!
//! fn describe<F: Functor<Inner = i32>>(container: F) -> F::WithType<String> {
//!     container.fmap(|n| format!("#{n}"))
//! }
//!
//! assert_eq!(describe(Optional::present(1)), Optional::present("#1".to_string()));
//! assert_eq!(
//!     describe(Disjoint::<&str, i32>::left("no")),
//!     Disjoint::left("no")
//! );
//! ```

use super::higher::TypeConstructor;
use crate::attempt::Attempt;
use crate::disjoint::Disjoint;
use crate::optional::Optional;
use std::error::Error;

/// A type class for containers that can have a function mapped over their
/// payload while keeping their shape.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the payload, if there is one.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Replaces the payload with `value`, keeping the shape.
    ///
    /// This is equivalent to `fmap(|_| value)`.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(move |_| value)
    }

    /// Discards the payload, keeping only the shape.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Optional<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

impl<L, R> Functor for Disjoint<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Disjoint<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map(function)
    }
}

impl<T, E: Error> Functor for Attempt<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Attempt<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }
}
