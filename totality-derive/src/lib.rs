//! Derive macros for totality.
//!
//! # Available Derive Macros
//!
//! - [`EnumMembers`]: Generates the member table used by
//!   `totality::adapters::IntegralExt::parse_enum`
//!
//! # Example
//!
//! ```rust,ignore
//! use totality::adapters::IntegralExt;
//! use totality_derive::EnumMembers;
//!
//! #[derive(Clone, Copy, Debug, PartialEq, EnumMembers)]
//! #[repr(u8)]
//! enum Weekday {
//!     Saturday = 1,
//!     Sunday = 2,
//!     Monday = 3,
//! }
//!
//! assert!(2_u8.parse_enum::<Weekday>().is_present());
//! assert!(4_u8.parse_enum::<Weekday>().is_absent());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod members;

use proc_macro::TokenStream;

/// Derive macro implementing `totality::adapters::EnumMembers`.
///
/// The member table pairs every variant with its integral discriminant, so
/// that an integral value can be mapped back to the declared member.
///
/// # Requirements
///
/// - The type must be an enum without generics
/// - Every variant must be a unit variant
/// - The enum must implement `Copy`
///
/// The representation type is read from `#[repr(..)]`. Without an explicit
/// integral repr the discriminants are `isize`, as for any fieldless enum.
///
/// # Generated Code
///
/// ```rust,ignore
/// impl ::totality::adapters::EnumMembers for Weekday {
///     type Repr = u8;
///     const MEMBERS: &'static [(u8, Self)] = &[
///         (Self::Saturday as u8, Self::Saturday),
///         (Self::Sunday as u8, Self::Sunday),
///         (Self::Monday as u8, Self::Monday),
///     ];
/// }
/// ```
#[proc_macro_derive(EnumMembers)]
pub fn derive_enum_members(input: TokenStream) -> TokenStream {
    members::derive_enum_members_impl(input)
}
