//! Parsing integral values into enumeration members.
//!
//! An enumeration opts in by implementing [`EnumMembers`], usually through
//! `#[derive(EnumMembers)]`. Every integral type then gains
//! [`IntegralExt::parse_enum`], which returns the member whose discriminant
//! equals the raw value, or absent.

use crate::optional::Optional;
use std::fmt;

/// The declared members of a fieldless enumeration.
///
/// # Examples
///
/// ```rust
/// use totality::Optional;
/// use totality::adapters::{EnumMembers, IntegralExt};
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// #[repr(u8)]
/// enum Signal {
///     Red = 0,
///     Amber = 1,
///     Green = 2,
/// }
///
/// impl EnumMembers for Signal {
///     type Repr = u8;
///     const MEMBERS: &'static [(u8, Self)] = &[
///         (Self::Red as u8, Self::Red),
///         (Self::Amber as u8, Self::Amber),
///         (Self::Green as u8, Self::Green),
///     ];
/// }
///
/// assert_eq!(2.parse_enum::<Signal>(), Optional::present(Signal::Green));
/// assert_eq!(3.parse_enum::<Signal>(), Optional::absent());
/// ```
pub trait EnumMembers: Copy + 'static {
    /// The integral representation of the discriminants.
    type Repr: Copy + PartialEq + fmt::Debug + 'static;

    /// Every declared member paired with its discriminant.
    const MEMBERS: &'static [(Self::Repr, Self)];

    /// Looks up the member with discriminant `raw`.
    fn from_repr(raw: Self::Repr) -> Optional<Self> {
        Self::MEMBERS
            .iter()
            .find(|(discriminant, _)| *discriminant == raw)
            .map(|(_, member)| *member)
            .into()
    }
}

/// Integral values that can name an enumeration member.
///
/// Implemented once per integral width and signedness. The raw value is
/// first converted into the enumeration's representation; a value outside
/// that representation's range is absent, like any undeclared value.
pub trait IntegralExt: Copy + fmt::Debug {
    /// Returns the member of `E` whose discriminant equals `self`.
    fn parse_enum<E>(self) -> Optional<E>
    where
        E: EnumMembers,
        E::Repr: TryFrom<Self>;
}

macro_rules! integral_ext {
    ($($integral:ty),* $(,)?) => {
        $(
            impl IntegralExt for $integral {
                #[inline]
                fn parse_enum<E>(self) -> Optional<E>
                where
                    E: EnumMembers,
                    E::Repr: TryFrom<Self>,
                {
                    parse_member(self)
                }
            }
        )*
    };
}

integral_ext!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

fn parse_member<I, E>(raw: I) -> Optional<E>
where
    I: Copy + fmt::Debug,
    E: EnumMembers,
    E::Repr: TryFrom<I>,
{
    let member = <E::Repr as TryFrom<I>>::try_from(raw)
        .ok()
        .map_or(Optional::Absent, E::from_repr);

    if member.is_absent() {
        tracing::trace!(
            value = ?raw,
            enumeration = std::any::type_name::<E>(),
            "value is not a declared member"
        );
    }
    member
}
