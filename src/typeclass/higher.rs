//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Optional<_>` as a type constructor directly.
//! [`TypeConstructor`] recovers that ability with a GAT: `WithType<B>` names
//! the same container applied to another payload type.
//!
//! ```rust
//! use totality::Optional;
//! use totality::typeclass::TypeConstructor;
//!
//! fn reset<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let cleared: Optional<String> = reset(Optional::present(42));
//! assert!(cleared.is_absent());
//! ```

use crate::attempt::Attempt;
use crate::disjoint::Disjoint;
use crate::optional::Optional;

/// A type constructor applied to `Inner`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The payload type the constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Optional<A> {
    type Inner = A;
    type WithType<B> = Optional<B>;
}

/// The error channel `L` is fixed; the constructor ranges over `Right`.
impl<L, R> TypeConstructor for Disjoint<L, R> {
    type Inner = R;
    type WithType<B> = Disjoint<L, B>;
}

/// The error signal `E` is fixed; the constructor ranges over `Success`.
impl<T, E> TypeConstructor for Attempt<T, E> {
    type Inner = T;
    type WithType<B> = Attempt<B, E>;
}
