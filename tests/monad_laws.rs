//! Property-based tests for the Monad laws and the conversion properties.
//!
//! - **Left Identity**: `pure(a).flat_map(f) == f(a)`
//! - **Right Identity**: `m.flat_map(pure) == m`
//! - **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! Plus `get_or_else` and the lossy `to_optional` conversions.

use proptest::prelude::*;
use std::fmt;
use totality::{Attempt, Disjoint, Optional};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Overflow;

impl fmt::Display for Overflow {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("overflow")
    }
}

impl std::error::Error for Overflow {}

fn half(n: i32) -> Optional<i32> {
    if n % 2 == 0 { Optional::present(n / 2) } else { Optional::absent() }
}

fn positive(n: i32) -> Optional<i32> {
    if n > 0 { Optional::present(n) } else { Optional::absent() }
}

fn checked_double(n: i32) -> Disjoint<String, i32> {
    n.checked_mul(2).ok_or_else(|| format!("{n} overflows")).into()
}

fn checked_increment(n: i32) -> Attempt<i32, Overflow> {
    n.checked_add(1).ok_or(Overflow).into()
}

// =============================================================================
// Optional<A>
// =============================================================================

proptest! {
    #[test]
    fn prop_optional_get_or_else(value in any::<i32>(), fallback in any::<i32>()) {
        prop_assert_eq!(Optional::present(value).get_or_else(fallback), value);
        prop_assert_eq!(Optional::absent().get_or_else(fallback), fallback);
    }

    #[test]
    fn prop_optional_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Optional::present(value).flat_map(half), half(value));
    }

    #[test]
    fn prop_optional_right_identity(value in any::<Option<i32>>()) {
        let container = Optional::from(value);
        prop_assert_eq!(container.flat_map(Optional::present), container);
    }

    #[test]
    fn prop_optional_associativity(value in any::<Option<i32>>()) {
        let container = Optional::from(value);
        let left = container.flat_map(half).flat_map(positive);
        let right = container.flat_map(|x| half(x).flat_map(positive));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_optional_flat_map2_matches_nested_bind(value in any::<i32>()) {
        let combined = Optional::present(value).flat_map2(|x| half(*x), |x, y| (x, y));
        let nested = Optional::present(value).flat_map(|x| half(x).map(|y| (x, y)));
        prop_assert_eq!(combined, nested);
    }
}

// =============================================================================
// Disjoint<L, R>
// =============================================================================

proptest! {
    #[test]
    fn prop_disjoint_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Disjoint::right(value).flat_map(checked_double), checked_double(value));
    }

    #[test]
    fn prop_disjoint_right_identity(value in any::<Result<i32, String>>()) {
        let container: Disjoint<String, i32> = value.into();
        prop_assert_eq!(container.clone().flat_map(Disjoint::right), container);
    }

    #[test]
    fn prop_disjoint_to_optional(value in any::<i32>(), error in ".*") {
        prop_assert!(Disjoint::<String, i32>::right(value).to_optional().is_present());
        prop_assert!(Disjoint::<String, i32>::left(error).to_optional().is_absent());
    }
}

// =============================================================================
// Attempt<T, E>
// =============================================================================

proptest! {
    #[test]
    fn prop_attempt_left_identity(value in any::<i32>()) {
        prop_assert_eq!(
            Attempt::success(value).flat_map(checked_increment),
            checked_increment(value)
        );
    }

    #[test]
    fn prop_attempt_right_identity(value in any::<i32>()) {
        let container = checked_increment(value);
        prop_assert_eq!(container.clone().flat_map(Attempt::success), container);
    }

    #[test]
    fn prop_attempt_to_optional(value in any::<i32>(), fallback in any::<i32>()) {
        prop_assert_eq!(
            Attempt::<i32, Overflow>::success(value).to_optional().get_or_else(fallback),
            value
        );
        prop_assert_eq!(
            Attempt::<i32, Overflow>::failure(Overflow).to_optional().get_or_else(fallback),
            fallback
        );
    }
}
