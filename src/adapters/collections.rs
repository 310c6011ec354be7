//! Stack and map lookups returning [`Optional`].

use crate::optional::Optional;
use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::{BuildHasher, Hash};

/// Removing the top of a stack without panicking on empty stacks.
///
/// # Examples
///
/// ```rust
/// use totality::Optional;
/// use totality::adapters::StackExt;
///
/// let mut stack = vec![1, 2];
/// assert_eq!(stack.pop_or_absent(), Optional::present(2));
/// assert_eq!(stack.pop_or_absent(), Optional::present(1));
/// assert_eq!(stack.pop_or_absent(), Optional::absent());
/// ```
pub trait StackExt<T> {
    /// Removes and returns the top element, or absent if the stack is empty.
    fn pop_or_absent(&mut self) -> Optional<T>;
}

impl<T> StackExt<T> for Vec<T> {
    #[inline]
    fn pop_or_absent(&mut self) -> Optional<T> {
        self.pop().into()
    }
}

/// The back of the deque is the top of the stack.
impl<T> StackExt<T> for VecDeque<T> {
    #[inline]
    fn pop_or_absent(&mut self) -> Optional<T> {
        self.pop_back().into()
    }
}

/// Key lookups that report a missing key as absence.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use totality::Optional;
/// use totality::adapters::LookupExt;
///
/// let ports = HashMap::from([("http", 80), ("https", 443)]);
/// assert_eq!(ports.get_optional("https"), Optional::present(&443));
/// assert_eq!(ports.get_cloned("gopher"), Optional::absent());
/// ```
pub trait LookupExt<Q: ?Sized> {
    /// The mapped value type.
    type Value;

    /// Borrows the value stored under `key`.
    fn get_optional(&self, key: &Q) -> Optional<&Self::Value>;

    /// Clones the value stored under `key`.
    fn get_cloned(&self, key: &Q) -> Optional<Self::Value>
    where
        Self::Value: Clone,
    {
        self.get_optional(key).map(Clone::clone)
    }
}

impl<K, V, Q, S> LookupExt<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Value = V;

    #[inline]
    fn get_optional(&self, key: &Q) -> Optional<&V> {
        self.get(key).into()
    }
}

impl<K, V, Q> LookupExt<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    type Value = V;

    #[inline]
    fn get_optional(&self, key: &Q) -> Optional<&V> {
        self.get(key).into()
    }
}
