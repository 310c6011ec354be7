//! Field-by-field representation of a [`Disjoint`].
//!
//! A record carries a [`Discriminant`] and two optional payload fields. Its
//! default value has the `Uninitialized` discriminant, a state no
//! [`Disjoint`] factory can produce. The record can be printed in any
//! state, but the only way to operate on its content is to convert it with
//! [`DisjointRecord::into_disjoint`], which rejects ill-formed records.

use super::Disjoint;
use crate::error::ContractViolation;
use std::fmt;

/// The tag selecting which payload of a [`DisjointRecord`] is meaningful.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Discriminant {
    /// Reached through `Default` only; never produced by a factory.
    #[default]
    Uninitialized,
    /// The left (error) payload is meaningful.
    Left,
    /// The right (success) payload is meaningful.
    Right,
}

/// A [`Disjoint`] spelled out as a discriminant plus two payload fields.
///
/// # Examples
///
/// ```rust
/// use totality::{ContractViolation, Discriminant, Disjoint, DisjointRecord};
///
/// let record: DisjointRecord<String, i32> = Disjoint::right(10).into();
/// assert_eq!(record.discriminant, Discriminant::Right);
/// assert_eq!(record.to_string(), "Right 10");
/// assert_eq!(record.into_disjoint(), Ok(Disjoint::right(10)));
///
/// let blank: DisjointRecord<String, i32> = DisjointRecord::default();
/// assert_eq!(blank.to_string(), "Invalid Either");
/// assert_eq!(blank.into_disjoint(), Err(ContractViolation::UninitializedDisjoint));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisjointRecord<L, R> {
    /// Which payload is meaningful.
    pub discriminant: Discriminant,
    /// The error payload.
    pub left: Option<L>,
    /// The success payload.
    pub right: Option<R>,
}

impl<L, R> DisjointRecord<L, R> {
    /// Validates the record and converts it into a [`Disjoint`].
    ///
    /// # Errors
    ///
    /// - [`ContractViolation::UninitializedDisjoint`] if the discriminant is
    ///   `Uninitialized`
    /// - [`ContractViolation::MissingPayload`] if the selected payload field
    ///   is empty
    pub fn into_disjoint(self) -> Result<Disjoint<L, R>, ContractViolation> {
        let violation = match self.discriminant {
            Discriminant::Left => match self.left {
                Some(error) => return Ok(Disjoint::Left(error)),
                None => ContractViolation::MissingPayload {
                    discriminant: Discriminant::Left,
                },
            },
            Discriminant::Right => match self.right {
                Some(value) => return Ok(Disjoint::Right(value)),
                None => ContractViolation::MissingPayload {
                    discriminant: Discriminant::Right,
                },
            },
            Discriminant::Uninitialized => ContractViolation::UninitializedDisjoint,
        };

        tracing::warn!(
            discriminant = ?self.discriminant,
            %violation,
            "rejected disjoint record"
        );
        Err(violation)
    }
}

impl<L, R> Default for DisjointRecord<L, R> {
    fn default() -> Self {
        Self {
            discriminant: Discriminant::Uninitialized,
            left: None,
            right: None,
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for DisjointRecord<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.discriminant, &self.left, &self.right) {
            (Discriminant::Left, Some(error), _) => write!(formatter, "Left {error}"),
            (Discriminant::Right, _, Some(value)) => write!(formatter, "Right {value}"),
            _ => formatter.write_str("Invalid Either"),
        }
    }
}

impl<L, R> From<Disjoint<L, R>> for DisjointRecord<L, R> {
    fn from(disjoint: Disjoint<L, R>) -> Self {
        match disjoint {
            Disjoint::Left(error) => Self {
                discriminant: Discriminant::Left,
                left: Some(error),
                right: None,
            },
            Disjoint::Right(value) => Self {
                discriminant: Discriminant::Right,
                left: None,
                right: Some(value),
            },
        }
    }
}

impl<L, R> TryFrom<DisjointRecord<L, R>> for Disjoint<L, R> {
    type Error = ContractViolation;

    #[inline]
    fn try_from(record: DisjointRecord<L, R>) -> Result<Self, Self::Error> {
        record.into_disjoint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_record_is_uninitialized() {
        let record: DisjointRecord<i32, i32> = DisjointRecord::default();
        assert_eq!(record.discriminant, Discriminant::Uninitialized);
        assert_eq!(record.to_string(), "Invalid Either");
    }

    #[rstest]
    fn uninitialized_record_is_rejected_even_with_payloads() {
        let record = DisjointRecord {
            discriminant: Discriminant::Uninitialized,
            left: Some(1),
            right: Some(2),
        };
        assert_eq!(record.into_disjoint(), Err(ContractViolation::UninitializedDisjoint));
    }

    #[rstest]
    #[case(Discriminant::Left)]
    #[case(Discriminant::Right)]
    fn empty_selected_payload_is_rejected(#[case] discriminant: Discriminant) {
        let record: DisjointRecord<i32, i32> = DisjointRecord {
            discriminant,
            left: None,
            right: None,
        };
        assert_eq!(record.to_string(), "Invalid Either");
        assert_eq!(
            Disjoint::<i32, i32>::try_from(record),
            Err(ContractViolation::MissingPayload { discriminant })
        );
    }

    #[rstest]
    fn left_record_ignores_stray_right_payload() {
        let record = DisjointRecord {
            discriminant: Discriminant::Left,
            left: Some("error"),
            right: Some(5),
        };
        assert_eq!(record.to_string(), "Left error");
        assert_eq!(record.into_disjoint(), Ok(Disjoint::left("error")));
    }

    #[rstest]
    fn record_roundtrip_preserves_value() {
        let original: Disjoint<String, i32> = Disjoint::left("bad".to_string());
        let record = DisjointRecord::from(original.clone());
        assert_eq!(record.into_disjoint(), Ok(original));
    }
}
