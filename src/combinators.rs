//! Total helper functions usable as default callbacks.
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`constant`]: Returns its first argument, ignoring the second (K combinator)
//!
//! Both are failure-free and can stand in wherever an API asks for a
//! transform the caller does not need.
//!
//! ```rust
//! use totality::Optional;
//! use totality::combinators::{constant, identity};
//!
//! assert_eq!(Optional::present(3).map(identity), Optional::present(3));
//!
//! let labelled = Optional::present(3).flat_map2(|_| Optional::present("ignored"), constant);
//! assert_eq!(labelled, Optional::present(3));
//! ```

/// Returns the value unchanged.
///
/// # Examples
///
/// ```
/// use totality::combinators::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Returns `value`, discarding `ignored`.
///
/// # Examples
///
/// ```
/// use totality::combinators::constant;
///
/// assert_eq!(constant(1, "unused"), 1);
/// ```
#[inline]
pub fn constant<A, B>(value: A, _ignored: B) -> A {
    value
}
