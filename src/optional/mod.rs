//! Optional type - presence or absence of a single value.
//!
//! This module provides [`Optional<T>`], a container that either holds one
//! value (`Present`) or nothing (`Absent`). Absence is total and silent: no
//! operation panics because a value is missing, and callbacks meant for the
//! present case are never invoked on an absent container.
//!
//! # Legacy null-means-absent constructor
//!
//! An older, narrower optional type only wrapped nullable references and
//! treated null as absence. That behavior is a subset of `Optional<T>` and
//! lives on as [`Optional::some_or_none`] and `From<Option<T>>`:
//!
//! | Legacy operation | `Optional<T>` operation        |
//! |------------------|--------------------------------|
//! | `Some(v)`        | [`Optional::present`]          |
//! | `None()`         | [`Optional::absent`]           |
//! | `SomeOrNone(r)`  | [`Optional::some_or_none`]     |
//! | `Otherwise(f)`   | [`Optional::or_else_run`]      |
//! | `Select_(f)`     | [`Optional::map_discard`]      |
//! | `Match_(n, s)`   | [`Optional::match_discard`]    |
//!
//! # Examples
//!
//! ```rust
//! use totality::Optional;
//!
//! let port = Optional::present("8080")
//!     .flat_map(|text| Optional::from(text.parse::<u16>().ok()))
//!     .map(|port| port + 1);
//! assert_eq!(port, Optional::present(8081));
//!
//! let missing: Optional<u16> = Optional::absent();
//! assert_eq!(missing.get_or_else(80), 80);
//! assert_eq!(missing.to_string(), "Nothing");
//! ```

mod nullable;

pub use nullable::IntoOptional;

use std::fmt;

/// A value that may be absent.
///
/// `Optional<T>` is a native sum type, so the payload cannot be read when
/// absent. The [`Default`] value is `Absent`.
///
/// # Type Parameters
///
/// * `T` - The type of the wrapped value
///
/// # Examples
///
/// ```rust
/// use totality::Optional;
///
/// let present = Optional::present(5);
/// let absent: Optional<i32> = Optional::absent();
///
/// assert_eq!(present.to_string(), "Just 5");
/// assert_eq!(absent.to_string(), "Nothing");
/// assert_eq!(Optional::<i32>::default(), absent);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Optional<T> {
    /// No value is present.
    #[default]
    Absent,
    /// A value is present.
    Present(T),
}

impl<T> Optional<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::Optional;
    ///
    /// assert!(Optional::present(0).is_present());
    /// ```
    #[inline]
    pub const fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// Creates an absent container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::Optional;
    ///
    /// assert!(Optional::<String>::absent().is_absent());
    /// ```
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }

    /// Legacy constructor: `None` means absent, `Some(v)` means present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::Optional;
    ///
    /// let name: Option<&str> = None;
    /// assert!(Optional::some_or_none(name).is_absent());
    /// assert_eq!(Optional::some_or_none(Some("x")), Optional::present("x"));
    /// ```
    #[inline]
    pub fn some_or_none(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }

    /// Wraps a value-like or nullable value.
    ///
    /// Value-like inputs (numbers, strings, references, boxes) are always
    /// present, including zero values. Nullable inputs (`Option<T>`,
    /// `Optional<T>`) are present iff they hold a value. See
    /// [`IntoOptional`] for the full list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::Optional;
    ///
    /// assert_eq!(Optional::from_value_or_reference(0), Optional::present(0));
    /// assert_eq!(Optional::from_value_or_reference(Some(7)), Optional::present(7));
    /// assert!(Optional::<&str>::from_value_or_reference(None::<&str>).is_absent());
    /// ```
    #[inline]
    pub fn from_value_or_reference<V>(value: V) -> Self
    where
        V: IntoOptional<Value = T>,
    {
        value.into_optional()
    }

    // =========================================================================
    // Predicates
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Borrows the payload, leaving the container untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::Optional;
    ///
    /// let name = Optional::present("Ada".to_string());
    /// assert_eq!(name.as_ref().map(|s| s.len()), Optional::present(3));
    /// assert!(name.is_present());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    // =========================================================================
    // Fallback
    // =========================================================================

    /// Returns the value if present, otherwise `fallback`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::Optional;
    ///
    /// assert_eq!(Optional::present(3).get_or_else(9), 3);
    /// assert_eq!(Optional::absent().get_or_else(9), 9);
    /// ```
    #[inline]
    pub fn get_or_else(self, fallback: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => fallback,
        }
    }

    /// Runs `function` only if absent, then returns `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::Optional;
    ///
    /// let mut misses = 0;
    /// let value = Optional::<i32>::absent().or_else_run(|| misses += 1);
    /// assert!(value.is_absent());
    /// assert_eq!(misses, 1);
    /// ```
    #[inline]
    pub fn or_else_run<F>(self, function: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_absent() {
            function();
        }
        self
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to the value if present.
    ///
    /// `function` is never invoked on an absent container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::Optional;
    ///
    /// assert_eq!(Optional::present(4).map(|x| x * 2), Optional::present(8));
    /// assert_eq!(Optional::<i32>::absent().map(|x| x * 2), Optional::absent());
    /// ```
    #[inline]
    pub fn map<R, F>(self, function: F) -> Optional<R>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Present(value) => Optional::Present(function(value)),
            Self::Absent => Optional::Absent,
        }
    }

    /// Runs `function` on the value if present, then returns `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::Optional;
    ///
    /// let mut seen = Vec::new();
    /// let value = Optional::present(1)
    ///     .map_discard(|x| seen.push(*x))
    ///     .map(|x| x + 1);
    /// assert_eq!(value, Optional::present(2));
    /// assert_eq!(seen, vec![1]);
    /// ```
    #[inline]
    pub fn map_discard<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Present(value) = &self {
            function(value);
        }
        self
    }

    /// Monadic bind: applies `function` if present and flattens the result.
    ///
    /// An absent container short-circuits without invoking `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::Optional;
    ///
    /// fn half(n: i32) -> Optional<i32> {
    ///     if n % 2 == 0 { Optional::present(n / 2) } else { Optional::absent() }
    /// }
    ///
    /// assert_eq!(Optional::present(8).flat_map(half).flat_map(half), Optional::present(2));
    /// assert_eq!(Optional::present(6).flat_map(half).flat_map(half), Optional::absent());
    /// ```
    #[inline]
    pub fn flat_map<R, F>(self, function: F) -> Optional<R>
    where
        F: FnOnce(T) -> Optional<R>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Two-step composition keeping the first value in scope.
    ///
    /// Equivalent to `flat_map(|x| first(&x).map(|y| second(x, y)))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::Optional;
    ///
    /// let user = Optional::present("ada");
    /// let greeting = user.flat_map2(
    ///     |name| Optional::present(name.len()),
    ///     |name, length| format!("{name}:{length}"),
    /// );
    /// assert_eq!(greeting, Optional::present("ada:3".to_string()));
    /// ```
    #[inline]
    pub fn flat_map2<U, R, F, G>(self, first: F, second: G) -> Optional<R>
    where
        F: FnOnce(&T) -> Optional<U>,
        G: FnOnce(T, U) -> R,
    {
        match self {
            Self::Present(value) => match first(&value) {
                Optional::Present(intermediate) => Optional::Present(second(value, intermediate)),
                Optional::Absent => Optional::Absent,
            },
            Self::Absent => Optional::Absent,
        }
    }

    // =========================================================================
    // Fold Operations
    // =========================================================================

    /// Exhaustive fold: exactly one of the two functions runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::Optional;
    ///
    /// let describe = |value: Optional<i32>| {
    ///     value.match_with(|| "none".to_string(), |x| format!("got {x}"))
    /// };
    /// assert_eq!(describe(Optional::present(1)), "got 1");
    /// assert_eq!(describe(Optional::absent()), "none");
    /// ```
    #[inline]
    pub fn match_with<R, N, P>(self, on_absent: N, on_present: P) -> R
    where
        N: FnOnce() -> R,
        P: FnOnce(T) -> R,
    {
        match self {
            Self::Present(value) => on_present(value),
            Self::Absent => on_absent(),
        }
    }

    /// Side-effect fold: exactly one of the two functions runs, then `self`
    /// is returned.
    #[inline]
    pub fn match_discard<N, P>(self, on_absent: N, on_present: P) -> Self
    where
        N: FnOnce(),
        P: FnOnce(&T),
    {
        match &self {
            Self::Present(value) => on_present(value),
            Self::Absent => on_absent(),
        }
        self
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Converts into a lazy sequence of length 0 or 1.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::Optional;
    ///
    /// assert_eq!(Optional::present(3).to_enumerable().collect::<Vec<_>>(), vec![3]);
    /// assert_eq!(Optional::<i32>::absent().to_enumerable().count(), 0);
    /// ```
    #[inline]
    pub fn to_enumerable(self) -> std::option::IntoIter<T> {
        Option::from(self).into_iter()
    }

    /// Iterates over a borrowed payload.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().to_enumerable()
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(formatter, "Just {value}"),
            Self::Absent => formatter.write_str("Nothing"),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        Self::some_or_none(option)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        match optional {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.to_enumerable()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

static_assertions::assert_impl_all!(Optional<i32>: Send, Sync, Copy);
static_assertions::assert_not_impl_any!(Optional<std::rc::Rc<i32>>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(Optional::present(5), "Just 5")]
    #[case(Optional::absent(), "Nothing")]
    fn display_renders_state(#[case] value: Optional<i32>, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    fn map_is_not_invoked_on_absent() {
        let calls = Cell::new(0);
        let result = Optional::<i32>::absent().map(|x| {
            calls.set(calls.get() + 1);
            x
        });
        assert!(result.is_absent());
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn flat_map2_short_circuits_on_inner_absence() {
        let second_calls = Cell::new(0);
        let result = Optional::present(1).flat_map2(
            |_| Optional::<i32>::absent(),
            |x, y| {
                second_calls.set(second_calls.get() + 1);
                x + y
            },
        );
        assert!(result.is_absent());
        assert_eq!(second_calls.get(), 0);
    }

    #[rstest]
    fn or_else_run_skips_present() {
        let calls = Cell::new(0);
        let value = Optional::present(1).or_else_run(|| calls.set(calls.get() + 1));
        assert_eq!(value, Optional::present(1));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    #[case(Optional::present(2))]
    #[case(Optional::absent())]
    fn match_discard_runs_exactly_one_branch(#[case] value: Optional<i32>) {
        let absent_calls = Cell::new(0);
        let present_calls = Cell::new(0);
        let returned = value.match_discard(
            || absent_calls.set(absent_calls.get() + 1),
            |_| present_calls.set(present_calls.get() + 1),
        );
        assert_eq!(returned, value);
        assert_eq!(absent_calls.get() + present_calls.get(), 1);
        assert_eq!(present_calls.get() == 1, value.is_present());
    }

    #[rstest]
    fn option_bridge_is_lossless() {
        let back: Option<i32> = Optional::from(Some(3)).into();
        assert_eq!(back, Some(3));
        let back: Option<i32> = Optional::from(None).into();
        assert_eq!(back, None);
    }

    #[rstest]
    fn borrowed_iteration_leaves_value_intact() {
        let value = Optional::present(String::from("kept"));
        let lengths: Vec<usize> = (&value).into_iter().map(String::len).collect();
        assert_eq!(lengths, vec![4]);
        assert_eq!(value.get_or_else(String::new()), "kept");
    }
}
