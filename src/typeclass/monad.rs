//! Monad type class - sequencing computations within a context.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use totality::{Disjoint, Optional};
//! use totality::typeclass::Monad;
//!
//! fn halve_twice<M>(container: M) -> M::WithType<i32>
//! where
//!     M: Monad<Inner = i32, WithType<i32> = M>,
//! {
//!     container
//!         .bind::<i32, _>(|n| M::pure::<i32>(n / 2))
//!         .bind::<i32, _>(|n| M::pure::<i32>(n / 2))
//! }
//!
//! assert_eq!(halve_twice(Optional::present(20)), Optional::present(5));
//! assert_eq!(halve_twice(Disjoint::<&str, i32>::left("e")), Disjoint::left("e"));
//! ```

use super::applicative::Applicative;
use crate::attempt::Attempt;
use crate::disjoint::Disjoint;
use crate::optional::Optional;
use std::error::Error;

/// A type class for containers that support sequencing of computations.
///
/// The method is named `bind` so it does not shadow the inherent
/// `flat_map` of each container.
pub trait Monad: Applicative {
    /// Applies `function` to the payload and flattens the result.
    ///
    /// A container without a payload short-circuits without calling
    /// `function`.
    fn bind<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Sequences `self` and `next`, keeping `next` if `self` has a payload.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.bind(move |_| next)
    }
}

impl<A> Monad for Optional<A> {
    #[inline]
    fn bind<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> Optional<B>,
    {
        self.flat_map(function)
    }
}

impl<L, R> Monad for Disjoint<L, R> {
    #[inline]
    fn bind<B, F>(self, function: F) -> Disjoint<L, B>
    where
        F: FnOnce(R) -> Disjoint<L, B>,
    {
        self.flat_map(function)
    }
}

impl<T, E: Error> Monad for Attempt<T, E> {
    #[inline]
    fn bind<B, F>(self, function: F) -> Attempt<B, E>
    where
        F: FnOnce(T) -> Attempt<B, E>,
    {
        self.flat_map(function)
    }
}
