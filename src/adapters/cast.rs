//! Checked downcasts reported as [`Optional`] or [`Disjoint`].

use crate::disjoint::Disjoint;
use crate::optional::Optional;
use std::any::Any;

/// Borrows `value` as a `T` if that is its concrete type.
///
/// # Examples
///
/// ```rust
/// use std::any::Any;
/// use totality::Optional;
/// use totality::adapters::cast_ref;
///
/// let boxed: Box<dyn Any> = Box::new(5_i32);
/// assert_eq!(cast_ref::<i32>(boxed.as_ref()), Optional::present(&5));
/// assert!(cast_ref::<String>(boxed.as_ref()).is_absent());
/// ```
#[inline]
pub fn cast_ref<T: Any>(value: &dyn Any) -> Optional<&T> {
    value.downcast_ref::<T>().into()
}

/// Takes ownership of `value` as a `T`, handing the box back on mismatch.
#[inline]
pub fn cast_box<T: Any>(value: Box<dyn Any>) -> Disjoint<Box<dyn Any>, Box<T>> {
    value.downcast::<T>().into()
}
