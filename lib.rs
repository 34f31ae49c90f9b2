// Sorted-list: Guaranteed-sorted list containers.
// Copyright (c) 2014, Kang Seonghoon.
// See README.md for details.

//! Guaranteed-sorted list containers.
//!
//! Every container here keeps its elements in ascending order at all times,
//! accepts duplicates (equal elements stay in insertion order) and gives
//! list-like indexed access. The operation surface is the
//! [`OrderedContainer`] trait, implemented by:
//!
//! - [`LinkedOrderedContainer`], a doubly-linked list. Appending at or past
//!   the tail is O(1); other insertions scan from the head but never shift
//!   elements around.
//! - [`SortedVec`], a contiguous vector with binary-searched insertion.
//!
//! ```
//! use sorted_list::{LinkedOrderedContainer, OrderedContainer};
//!
//! let mut list = LinkedOrderedContainer::new();
//! list.insert(3);
//! list.insert(1);
//! list.insert(2);
//! assert_eq!(list.to_string(), "[1, 2, 3]");
//! assert_eq!(list.remove_at(0), Ok(1));
//! assert_eq!(list.to_string(), "[2, 3]");
//! ```

use std::fmt;

pub use contract::{OrderedContainer, PositionCursor};
pub use error::{Error, ErrorKind, Result};
pub use linked::LinkedOrderedContainer;
pub use vec::SortedVec;

pub mod contract;
pub mod error;
pub mod linked;
#[cfg(feature = "serde")]
mod snapshot;
pub mod vec;

/// Returns true if the values never decrease.
pub fn is_sorted<'a, T, I>(values: I) -> bool
where
    T: Ord + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut values = values.into_iter();
    let mut prev = match values.next() {
        Some(v) => v,
        None => return true,
    };
    for v in values {
        if prev > v {
            return false;
        }
        prev = v;
    }
    true
}

/// Returns the first index `i` such that `v[i]` is no less than the target,
/// or `v.len()` if there is no such `i`.
pub(crate) fn bsearch_no_less<T: Ord>(v: &[T], target: &T) -> usize {
    v.partition_point(|x| x < target)
}

/// Returns the first index `i` such that `v[i]` is greater than the target,
/// or `v.len()` if there is no such `i`.
pub(crate) fn bsearch_greater<T: Ord>(v: &[T], target: &T) -> usize {
    v.partition_point(|x| x <= target)
}

/// Writes `[a, b, c]`, or `[]` when there is nothing to write.
pub(crate) fn fmt_list<'a, T, I>(f: &mut fmt::Formatter<'_>, values: I) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    f.write_str("[")?;
    for (i, v) in values.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", v)?;
    }
    f.write_str("]")
}
