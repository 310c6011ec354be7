//! Contract violation errors.
//!
//! Absence and failure are container states, never errors. The only errors
//! this crate produces are contract violations: attempts to turn an
//! ill-formed [`DisjointRecord`](crate::DisjointRecord) into a
//! [`Disjoint`](crate::Disjoint).

use crate::disjoint::Discriminant;

/// A contract violation detected at a container boundary.
///
/// # Examples
///
/// ```rust
/// use totality::{ContractViolation, Disjoint, DisjointRecord};
///
/// let record: DisjointRecord<String, i32> = DisjointRecord::default();
/// let error = Disjoint::<String, i32>::try_from(record).unwrap_err();
/// assert_eq!(error, ContractViolation::UninitializedDisjoint);
/// assert_eq!(
///     error.to_string(),
///     "invalid operation: disjoint record was never initialized by a factory"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum ContractViolation {
    /// The record still carries the `Uninitialized` discriminant.
    #[error("invalid operation: disjoint record was never initialized by a factory")]
    UninitializedDisjoint,
    /// The discriminant selects a payload field that holds no value.
    #[error("invalid operation: discriminant {discriminant:?} selects an empty payload")]
    MissingPayload {
        /// The discriminant found on the record.
        discriminant: Discriminant,
    },
}
