// Sorted-list: Guaranteed-sorted list containers.
// Copyright (c) 2014, Kang Seonghoon.
// See README.md for details.

//! A sorted vector, the array-backed [`OrderedContainer`].

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;
use std::slice;
use std::vec;

use log::debug;

use crate::contract::{OrderedContainer, PositionCursor};
use crate::error::{check_index, check_position, Error, Result};
use crate::linked::LinkedOrderedContainer;
use crate::{bsearch_greater, bsearch_no_less, fmt_list, is_sorted};

/// Merges the sorted `b` into the sorted `a`. On ties the elements of `a`
/// come first.
fn merge_into_sorted_vec<T: Ord>(a: &mut Vec<T>, b: Vec<T>) {
    if b.is_empty() {
        return;
    }
    let capacity = a.len() + b.len();
    let mut left = std::mem::replace(a, Vec::with_capacity(capacity)).into_iter().peekable();
    let mut right = b.into_iter().peekable();
    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => r < l,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        a.extend(if take_right { right.next() } else { left.next() });
    }
}

/// A sorted vector. Equivalent to `Vec<T>` except that it is known to be sorted.
///
/// Insertion binary-searches past every equal element and shifts the tail,
/// so it costs O(n) moves but only O(log n) comparisons. Indexed access is
/// O(1).
pub struct SortedVec<T> {
    inner: Vec<T>,
}

impl<T> SortedVec<T> {
    pub fn new() -> SortedVec<T> {
        SortedVec { inner: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> SortedVec<T> {
        SortedVec { inner: Vec::with_capacity(capacity) }
    }

    pub fn into_vec(self) -> Vec<T> {
        self.inner
    }

    pub fn as_slice(&self) -> &[T] {
        &self.inner
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.inner.iter()
    }

    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.inner.reserve(additional);
    }

    pub fn shrink_to_fit(&mut self) {
        self.inner.shrink_to_fit();
    }

    pub fn truncate(&mut self, len: usize) {
        self.inner.truncate(len);
    }

    pub fn retain<F: FnMut(&T) -> bool>(&mut self, f: F) {
        self.inner.retain(f);
    }

    pub fn pop_first(&mut self) -> Option<T> {
        if self.inner.is_empty() {
            None
        } else {
            Some(self.inner.remove(0))
        }
    }

    pub fn pop_last(&mut self) -> Option<T> {
        self.inner.pop()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inner.clone()
    }
}

impl<T: Ord> SortedVec<T> {
    /// Wraps `vec` if it is already sorted, and hands it back otherwise.
    pub fn from_vec(vec: Vec<T>) -> std::result::Result<SortedVec<T>, Vec<T>> {
        if is_sorted(&vec) {
            Ok(SortedVec { inner: vec })
        } else {
            Err(vec)
        }
    }

    pub fn from_unsorted_vec(mut vec: Vec<T>) -> SortedVec<T> {
        vec.sort();
        SortedVec { inner: vec }
    }

    pub fn dedup(&mut self) {
        self.inner.dedup();
    }

    /// Moves every element of `other` in, after any equal elements already here.
    pub fn push_all_move(&mut self, other: SortedVec<T>) {
        merge_into_sorted_vec(&mut self.inner, other.inner);
    }

    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Position of the first element equal to `value`.
    ///
    /// Elements that compare equal to `value` are not necessarily `==` to it,
    /// so the whole run of them is searched.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        let lo = bsearch_no_less(&self.inner, value);
        let hi = bsearch_greater(&self.inner, value);
        self.inner[lo..hi].iter().position(|v| v == value).map(|i| lo + i)
    }
}

impl<T: Ord> OrderedContainer<T> for SortedVec<T> {
    type Cursor<'a> = SliceCursor<'a, T> where Self: 'a, T: 'a;

    fn insert(&mut self, value: T) -> bool {
        let i = bsearch_greater(&self.inner, &value);
        self.inner.insert(i, value);
        true
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        check_index(index, self.inner.len())?;
        Ok(self.inner.remove(index))
    }

    fn remove_value(&mut self, value: &T) -> bool {
        match self.index_of(value) {
            Some(i) => {
                self.inner.remove(i);
                true
            }
            None => false,
        }
    }

    fn clear(&mut self) {
        debug!("clearing {} elements", self.inner.len());
        self.inner.clear();
    }

    fn get(&self, index: usize) -> Result<&T> {
        self.inner.get(index).ok_or(Error::IndexOutOfBounds { index, len: self.inner.len() })
    }

    fn cursor(&self, index: usize) -> Result<SliceCursor<'_, T>> {
        check_position(index, self.inner.len())?;
        Ok(SliceCursor { slice: &self.inner, index })
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn duplicate(&self) -> SortedVec<T>
    where
        T: Clone,
    {
        debug!("duplicating {} elements", self.inner.len());
        SortedVec { inner: self.inner.clone() }
    }

    fn first(&self) -> Result<&T> {
        self.inner.first().ok_or(Error::NoSuchElement)
    }

    fn last(&self) -> Result<&T> {
        self.inner.last().ok_or(Error::NoSuchElement)
    }
}

/// Read-only [`PositionCursor`] over a [`SortedVec`].
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    index: usize,
}

impl<'a, T> Iterator for SliceCursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let v = self.slice.get(self.index)?;
        self.index += 1;
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.slice.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl<'a, T> PositionCursor<'a, T> for SliceCursor<'a, T> {
    fn previous(&mut self) -> Option<&'a T> {
        let i = self.index.checked_sub(1)?;
        self.index = i;
        self.slice.get(i)
    }

    fn next_index(&self) -> usize {
        self.index
    }

    fn has_next(&self) -> bool {
        self.index < self.slice.len()
    }
}

impl<T> Default for SortedVec<T> {
    fn default() -> SortedVec<T> {
        SortedVec { inner: Vec::new() }
    }
}

impl<T: Ord + Clone> Clone for SortedVec<T> {
    fn clone(&self) -> SortedVec<T> {
        self.duplicate()
    }

    fn clone_from(&mut self, other: &SortedVec<T>) {
        self.inner.clone_from(&other.inner);
    }
}

impl<T> Index<usize> for SortedVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.inner[index]
    }
}

impl<T: Ord> FromIterator<T> for SortedVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> SortedVec<T> {
        SortedVec::from_unsorted_vec(iter.into_iter().collect())
    }
}

/// Sorts the batch and merges it in one pass instead of going through
/// [`OrderedContainer::insert_all`]. Equal elements end up in the same order
/// repeated `insert` calls would give them.
impl<T: Ord> Extend<T> for SortedVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_all_move(iter.into_iter().collect());
    }
}

impl<'a, T> IntoIterator for &'a SortedVec<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> slice::Iter<'a, T> {
        self.inner.iter()
    }
}

impl<T> IntoIterator for SortedVec<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> vec::IntoIter<T> {
        self.inner.into_iter()
    }
}

impl<T: PartialEq> PartialEq for SortedVec<T> {
    fn eq(&self, other: &SortedVec<T>) -> bool {
        self.inner == other.inner
    }
}

impl<T: Eq> Eq for SortedVec<T> {}

impl<T: PartialEq> PartialEq<LinkedOrderedContainer<T>> for SortedVec<T> {
    fn eq(&self, other: &LinkedOrderedContainer<T>) -> bool {
        self.inner.len() == other.iter().len() && self.inner.iter().eq(other.iter())
    }
}

impl<T: PartialEq> PartialEq<SortedVec<T>> for LinkedOrderedContainer<T> {
    fn eq(&self, other: &SortedVec<T>) -> bool {
        other == self
    }
}

impl<T: PartialOrd> PartialOrd for SortedVec<T> {
    fn partial_cmp(&self, other: &SortedVec<T>) -> Option<Ordering> {
        self.inner.partial_cmp(&other.inner)
    }
}

impl<T: Ord> Ord for SortedVec<T> {
    fn cmp(&self, other: &SortedVec<T>) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}

impl<T: Hash> Hash for SortedVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash(state)
    }
}

impl<T: fmt::Debug> fmt::Debug for SortedVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl<T: fmt::Display> fmt::Display for SortedVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_list(f, &self.inner)
    }
}
