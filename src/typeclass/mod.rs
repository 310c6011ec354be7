//! Type class instances for the containers.
//!
//! The three containers share one combinator vocabulary. This module makes
//! that vocabulary available to generic code:
//!
//! - [`TypeConstructor`]: GAT emulation of higher-kinded types
//! - [`Functor`]: Mapping over the payload
//! - [`Applicative`]: Lifting values and combining independent containers
//! - [`Monad`]: Sequencing dependent computations
//!
//! Each container fixes its error channel: `Disjoint<L, _>` ranges over the
//! right value and `Attempt<_, E>` over the success value.

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
