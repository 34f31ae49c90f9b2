// Sorted-list: Guaranteed-sorted list containers.
// Copyright (c) 2014, Kang Seonghoon.
// See README.md for details.

//! The operation surface shared by every sorted container.

use crate::error::{Error, Result};

/// A bidirectional cursor over a sorted container.
///
/// A cursor sits between two elements. Stepping forward (through
/// [`Iterator::next`]) returns the element after it, [`previous`] the one
/// before it. A cursor created at `index` returns the element at `index`
/// from its first `next()`.
///
/// Cursors borrow their container, so it cannot be modified while one is
/// alive.
///
/// [`previous`]: PositionCursor::previous
pub trait PositionCursor<'a, E: 'a>: Iterator<Item = &'a E> {
    /// Steps back over one element and returns it.
    fn previous(&mut self) -> Option<&'a E>;

    /// Index of the element the next call to `next()` would return.
    fn next_index(&self) -> usize;

    fn has_next(&self) -> bool;

    /// Index of the element `previous()` would return, if any.
    fn previous_index(&self) -> Option<usize> {
        self.next_index().checked_sub(1)
    }

    fn has_previous(&self) -> bool {
        self.next_index() > 0
    }
}

/// A sequence kept in ascending order of `E`.
///
/// Duplicates are allowed and keep their insertion order: an element is
/// always placed after every element equal to it. Homogeneity comes from `E`
/// itself; there is no runtime type check.
///
/// The absent value is modelled as `None` at the [`try_insert`] and
/// [`try_insert_all`] boundary; the plain entry points cannot receive one.
///
/// [`try_insert`]: OrderedContainer::try_insert
/// [`try_insert_all`]: OrderedContainer::try_insert_all
pub trait OrderedContainer<E: Ord> {
    type Cursor<'a>: PositionCursor<'a, E>
    where
        Self: 'a,
        E: 'a;

    /// Inserts `element` at its sorted position. Always returns `true`.
    fn insert(&mut self, element: E) -> bool;

    /// Inserts `element`, failing with [`Error::NullElement`] if it is absent.
    fn try_insert(&mut self, element: Option<E>) -> Result<bool> {
        match element {
            Some(element) => Ok(self.insert(element)),
            None => Err(Error::NullElement),
        }
    }

    /// Inserts every element, in the order given. Returns true if any
    /// insertion changed the container.
    fn insert_all<I>(&mut self, elements: I) -> bool
    where
        I: IntoIterator<Item = E>,
    {
        let mut modified = false;
        for element in elements {
            modified |= self.insert(element);
        }
        modified
    }

    /// Like [`insert_all`](OrderedContainer::insert_all), for a collection
    /// and elements that may be absent.
    ///
    /// An absent collection fails with [`Error::NullCollection`] without
    /// touching the container. An absent element stops the batch with
    /// [`Error::NullElement`]; the elements before it stay inserted.
    fn try_insert_all<I>(&mut self, elements: Option<I>) -> Result<bool>
    where
        I: IntoIterator<Item = Option<E>>,
    {
        let elements = elements.ok_or(Error::NullCollection)?;
        let mut modified = false;
        for element in elements {
            modified |= self.try_insert(element)?;
        }
        Ok(modified)
    }

    /// Always fails with [`Error::Unsupported`]: a batch placed at an
    /// arbitrary position would break the ordering.
    fn insert_all_at<I>(&mut self, _index: usize, _elements: I) -> Result<bool>
    where
        I: IntoIterator<Item = E>,
    {
        Err(Error::Unsupported)
    }

    /// Removes and returns the element at `index`.
    fn remove_at(&mut self, index: usize) -> Result<E>;

    /// Removes the first element equal to `element`. Returns false if there
    /// is none.
    fn remove_value(&mut self, element: &E) -> bool;

    fn clear(&mut self);

    fn get(&self, index: usize) -> Result<&E>;

    /// Returns a cursor whose first `next()` yields the element at `index`.
    /// `index` may equal `len()`.
    fn cursor(&self, index: usize) -> Result<Self::Cursor<'_>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an independent container holding clones of the elements, in
    /// the same order.
    fn duplicate(&self) -> Self
    where
        Self: Sized,
        E: Clone;

    fn first(&self) -> Result<&E>;

    fn last(&self) -> Result<&E>;
}
