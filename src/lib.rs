//! # totality
//!
//! Total algebraic containers for Rust: absence, alternatives and failure
//! expressed as values, with one combinator vocabulary across all of them.
//!
//! ## Overview
//!
//! - **[`Optional<T>`]**: A value that may be absent
//! - **[`Disjoint<L, R>`]**: Exactly one of two alternatives, error-first
//! - **[`Attempt<T, E>`]**: The outcome of a computation that can fail
//! - **Combinators**: [`identity`](combinators::identity) and
//!   [`constant`](combinators::constant)
//! - **Adapters**: Extension traits that make standard lookups return
//!   [`Optional`]
//!
//! Every container offers `map`, `flat_map`, `flat_map2`, `match_with` and
//! `get_or_else` (or their failure-aware counterparts). No operation panics
//! on absence or failure; the only error the crate ever reports is a
//! [`ContractViolation`] when validating a [`DisjointRecord`].
//!
//! ## Feature Flags
//!
//! - `typeclass`: Functor, Applicative and Monad instances for the containers
//! - `adapters`: Sequence, collection, enumeration and downcast adapters
//! - `derive`: `#[derive(EnumMembers)]` for integral enumeration parsing
//! - `serde`: Serialize and Deserialize for every container
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use totality::prelude::*;
//!
//! let greeting = Optional::present("world")
//!     .map(|name| format!("hello, {name}"))
//!     .get_or_else(String::from("hello"));
//! assert_eq!(greeting, "hello, world");
//!
//! let halved: Disjoint<&str, i32> = Disjoint::right(10)
//!     .flat_map(|n| if n % 2 == 0 { Disjoint::right(n / 2) } else { Disjoint::left("odd") });
//! assert_eq!(halved.to_optional(), Optional::present(5));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers, the combinators and, when enabled, the type
/// classes and adapter traits.
///
/// # Usage
///
/// ```rust
/// use totality::prelude::*;
/// ```
pub mod prelude {
    pub use crate::attempt::Attempt;
    pub use crate::combinators::{constant, identity};
    pub use crate::disjoint::{Discriminant, Disjoint, DisjointRecord};
    pub use crate::error::ContractViolation;
    pub use crate::optional::{IntoOptional, Optional};

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "adapters")]
    pub use crate::adapters::*;
}

pub mod attempt;
pub mod combinators;
pub mod disjoint;
pub mod error;
pub mod optional;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "adapters")]
pub mod adapters;

pub use attempt::Attempt;
pub use disjoint::{Discriminant, Disjoint, DisjointRecord};
pub use error::ContractViolation;
pub use optional::{IntoOptional, Optional};
