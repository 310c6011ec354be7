//! Extension traits bridging standard library APIs to [`Optional`].
//!
//! Standard lookups signal a miss with `Option::None`, a panic, or a default
//! value. The adapters here report every miss as absence:
//!
//! - [`SequenceExt`]: First, last and single element of any iterable
//! - [`StackExt`]: Popping from `Vec` and `VecDeque`
//! - [`LookupExt`]: Key lookups on `HashMap` and `BTreeMap`
//! - [`IntegralExt`]: Parsing integers into enumeration members
//! - [`cast_ref`] and [`cast_box`]: Checked downcasts from `dyn Any`
//!
//! [`Optional`]: crate::Optional

mod cast;
mod collections;
mod enumeration;
mod sequence;

pub use cast::{cast_box, cast_ref};
pub use collections::{LookupExt, StackExt};
pub use enumeration::{EnumMembers, IntegralExt};
pub use sequence::SequenceExt;

#[cfg(feature = "derive")]
pub use totality_derive::EnumMembers;
