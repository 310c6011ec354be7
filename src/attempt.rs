//! Attempt type - the outcome of a computation that can fail.
//!
//! [`Attempt<T, E>`] holds either a success value or a failure. A failure
//! normally carries an error signal `E: std::error::Error`, but it may also
//! carry none: `Attempt::default()` and a rejected [`Attempt::filter`] are
//! valid, non-informative failures.
//!
//! Binding with [`Attempt::flat_map`] keeps the original error, the same way
//! [`Disjoint::flat_map`](crate::Disjoint::flat_map) keeps its left value.
//!
//! # Examples
//!
//! ```rust
//! use std::num::ParseIntError;
//! use totality::Attempt;
//!
//! fn parse(text: &str) -> Attempt<i32, ParseIntError> {
//!     text.parse::<i32>().into()
//! }
//!
//! let doubled = parse("21").flat_map(|n| Attempt::success(n * 2));
//! assert_eq!(doubled.recover(|| 0), 42);
//!
//! let broken = parse("x").flat_map(|n| Attempt::success(n * 2));
//! assert!(broken.is_failure());
//! assert!(broken.error().is_some());
//! ```

use crate::optional::Optional;
use std::error::Error;
use std::fmt;

/// The outcome of a computation: a success value or a failure.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attempt<T, E> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed, with or without an error signal.
    Failure(Option<E>),
}

impl<T, E: Error> Attempt<T, E> {
    /// Wraps a success value.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps an error signal.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Failure(Some(error))
    }

    /// Returns `true` for a success.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for a failure, with or without an error.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrows the error signal of a failure, if one was set.
    #[inline]
    pub const fn error(&self) -> Option<&E> {
        match self {
            Self::Failure(Some(error)) => Some(error),
            _ => None,
        }
    }

    /// Applies `function` to a success value.
    #[inline]
    pub fn map<R, F>(self, function: F) -> Attempt<R, E>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Success(value) => Attempt::Success(function(value)),
            Self::Failure(error) => Attempt::Failure(error),
        }
    }

    /// Monadic bind on the success value.
    ///
    /// A failure short-circuits without invoking `function` and keeps its
    /// error signal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::fmt;
    /// use totality::Attempt;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Overflow;
    ///
    /// impl fmt::Display for Overflow {
    ///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    ///         f.write_str("overflow")
    ///     }
    /// }
    ///
    /// impl std::error::Error for Overflow {}
    ///
    /// let increment = |n: u8| match n.checked_add(1) {
    ///     Some(next) => Attempt::success(next),
    ///     None => Attempt::failure(Overflow),
    /// };
    ///
    /// assert_eq!(Attempt::success(1).flat_map(increment), Attempt::success(2));
    /// assert_eq!(Attempt::success(255).flat_map(increment), Attempt::failure(Overflow));
    /// assert_eq!(
    ///     Attempt::<u8, _>::failure(Overflow).flat_map(increment).error(),
    ///     Some(&Overflow)
    /// );
    /// ```
    #[inline]
    pub fn flat_map<R, F>(self, function: F) -> Attempt<R, E>
    where
        F: FnOnce(T) -> Attempt<R, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Attempt::Failure(error),
        }
    }

    /// Runs `function` on a success value, then returns `self`.
    #[inline]
    pub fn map_discard<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            function(value);
        }
        self
    }

    /// Replaces a failure with a freshly computed attempt.
    ///
    /// A success is returned unchanged and `function` is not invoked.
    #[inline]
    pub fn recover_with<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Success(_) => self,
            Self::Failure(_) => function(),
        }
    }

    /// Returns the success value, or computes a fallback for a failure.
    #[inline]
    pub fn recover<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => function(),
        }
    }

    /// Keeps a success only if `predicate` accepts its value.
    ///
    /// A rejected success becomes a failure without an error signal. A
    /// failure stays as it is, error included, and `predicate` is not
    /// invoked. An existing error is never replaced by the default failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::num::ParseIntError;
    /// use totality::Attempt;
    ///
    /// let even = Attempt::<i32, ParseIntError>::success(4).filter(|n| n % 2 == 0);
    /// assert_eq!(even, Attempt::success(4));
    ///
    /// let odd = Attempt::<i32, ParseIntError>::success(3).filter(|n| n % 2 == 0);
    /// assert!(odd.is_failure());
    /// assert!(odd.error().is_none());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::Failure(None)
                }
            }
            Self::Failure(error) => Self::Failure(error),
        }
    }

    /// Keeps a success as present; a failure and its error are dropped.
    #[inline]
    pub fn to_optional(self) -> Optional<T> {
        match self {
            Self::Success(value) => Optional::Present(value),
            Self::Failure(_) => Optional::Absent,
        }
    }

    /// Converts into a `Result` whose error side may be empty.
    #[inline]
    pub fn into_result(self) -> Result<T, Option<E>> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<T, E: Error> Default for Attempt<T, E> {
    /// A failure without an error signal.
    fn default() -> Self {
        Self::Failure(None)
    }
}

impl<T, E: Error> From<Result<T, E>> for Attempt<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(Some(error)),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Attempt<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success {value}"),
            Self::Failure(Some(error)) => write!(formatter, "Failure {error}"),
            Self::Failure(None) => formatter.write_str("Failure"),
        }
    }
}

static_assertions::assert_impl_all!(Attempt<i32, std::io::Error>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContractViolation;
    use rstest::rstest;
    use std::cell::Cell;

    type Outcome = Attempt<i32, ContractViolation>;

    #[rstest]
    fn default_is_failure_without_error() {
        let outcome = Outcome::default();
        assert!(outcome.is_failure());
        assert!(!outcome.is_success());
        assert_eq!(outcome.error(), None);
    }

    #[rstest]
    fn flat_map_preserves_error() {
        let calls = Cell::new(0);
        let failed = Outcome::failure(ContractViolation::UninitializedDisjoint);
        let bound = failed.flat_map(|x| {
            calls.set(calls.get() + 1);
            Outcome::success(x + 1)
        });
        assert_eq!(bound.error(), Some(&ContractViolation::UninitializedDisjoint));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn recover_with_is_identity_on_success() {
        let calls = Cell::new(0);
        let outcome = Outcome::success(1).recover_with(|| {
            calls.set(calls.get() + 1);
            Outcome::success(2)
        });
        assert_eq!(outcome, Outcome::success(1));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn recover_with_replaces_failure() {
        let outcome = Outcome::default().recover_with(|| Outcome::success(7));
        assert_eq!(outcome, Outcome::success(7));
    }

    #[rstest]
    #[case(Outcome::success(5), 5)]
    #[case(Outcome::failure(ContractViolation::UninitializedDisjoint), -1)]
    #[case(Outcome::default(), -1)]
    fn recover_falls_back_on_failure(#[case] outcome: Outcome, #[case] expected: i32) {
        assert_eq!(outcome.recover(|| -1), expected);
    }

    #[rstest]
    fn filter_keeps_failure_without_calling_predicate() {
        let calls = Cell::new(0);
        let failed = Outcome::failure(ContractViolation::UninitializedDisjoint);
        let filtered = failed.filter(|_| {
            calls.set(calls.get() + 1);
            true
        });
        assert_eq!(filtered.error(), Some(&ContractViolation::UninitializedDisjoint));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn map_discard_sees_success_only() {
        let seen = Cell::new(0);
        let _ = Outcome::default().map_discard(|x| seen.set(*x));
        assert_eq!(seen.get(), 0);
        let _ = Outcome::success(3).map_discard(|x| seen.set(*x));
        assert_eq!(seen.get(), 3);
    }

    #[rstest]
    #[case(Outcome::success(5), "Success 5")]
    #[case(Outcome::default(), "Failure")]
    fn display_renders_state(#[case] outcome: Outcome, #[case] expected: &str) {
        assert_eq!(outcome.to_string(), expected);
    }

    #[rstest]
    fn into_result_keeps_error() {
        let failed = Outcome::failure(ContractViolation::UninitializedDisjoint);
        assert_eq!(
            failed.into_result(),
            Err(Some(ContractViolation::UninitializedDisjoint))
        );
        assert_eq!(Outcome::success(1).into_result(), Ok(1));
    }
}
