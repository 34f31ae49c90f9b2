// Sorted-list: Guaranteed-sorted list containers.
// Copyright (c) 2014, Kang Seonghoon.
// See README.md for details.

//! A sorted doubly-linked list.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

use log::{debug, trace};

use crate::contract::{OrderedContainer, PositionCursor};
use crate::error::{check_index, check_position, Error, Result};
use crate::fmt_list;

/// Link value meaning "no node".
const NIL: usize = usize::MAX;

#[derive(Debug)]
struct Node<E> {
    value: E,
    prev: usize,
    next: usize,
}

/// A sorted list backed by doubly-linked nodes.
///
/// Nodes live in one dense arena and link to each other by slot index. A
/// removed node's slot is refilled by the last slot, so the arena never has
/// holes.
///
/// Inserting an element no less than the current last one is O(1). Any other
/// insertion scans from the head for the first strictly greater element and
/// links in front of it. Indexed access walks from whichever end is closer.
pub struct LinkedOrderedContainer<E> {
    nodes: Vec<Node<E>>,
    head: usize,
    tail: usize,
}

impl<E> LinkedOrderedContainer<E> {
    pub fn new() -> LinkedOrderedContainer<E> {
        LinkedOrderedContainer { nodes: Vec::new(), head: NIL, tail: NIL }
    }

    /// Creates an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> LinkedOrderedContainer<E> {
        LinkedOrderedContainer { nodes: Vec::with_capacity(capacity), head: NIL, tail: NIL }
    }

    pub fn iter(&self) -> Iter<'_, E> {
        Iter { list: self, front: self.head, back: self.tail, remaining: self.nodes.len() }
    }

    /// Removes and returns the smallest element.
    pub fn pop_first(&mut self) -> Option<E> {
        match self.head {
            NIL => None,
            at => Some(self.unlink(at)),
        }
    }

    /// Removes and returns the largest element.
    pub fn pop_last(&mut self) -> Option<E> {
        match self.tail {
            NIL => None,
            at => Some(self.unlink(at)),
        }
    }

    /// Returns a cursor that can also remove elements.
    pub fn cursor_mut(&mut self, index: usize) -> Result<CursorMut<'_, E>> {
        check_position(index, self.nodes.len())?;
        let next = self.link_at(index);
        Ok(CursorMut { list: self, next, index, last: NIL })
    }

    pub fn to_vec(&self) -> Vec<E>
    where
        E: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Slot of the node at position `index`, or `NIL` when `index == len`.
    fn link_at(&self, index: usize) -> usize {
        let len = self.nodes.len();
        if index >= len {
            NIL
        } else if index < len / 2 {
            let mut at = self.head;
            for _ in 0..index {
                at = self.nodes[at].next;
            }
            at
        } else {
            let mut at = self.tail;
            for _ in index + 1..len {
                at = self.nodes[at].prev;
            }
            at
        }
    }

    fn push_back(&mut self, value: E) {
        let at = self.nodes.len();
        self.nodes.push(Node { value, prev: self.tail, next: NIL });
        match self.tail {
            NIL => self.head = at,
            tail => self.nodes[tail].next = at,
        }
        self.tail = at;
    }

    /// Links `value` in front of the node at `next`, which must exist.
    fn insert_before(&mut self, next: usize, value: E) {
        let at = self.nodes.len();
        let prev = self.nodes[next].prev;
        self.nodes.push(Node { value, prev, next });
        self.nodes[next].prev = at;
        match prev {
            NIL => self.head = at,
            prev => self.nodes[prev].next = at,
        }
    }

    /// Unlinks the node at `at` and returns its value.
    ///
    /// The last slot moves into `at` afterwards; anyone holding the slot
    /// index `len() - 1` must switch to `at`.
    fn unlink(&mut self, at: usize) -> E {
        let Node { prev, next, .. } = self.nodes[at];
        match prev {
            NIL => self.head = next,
            prev => self.nodes[prev].next = next,
        }
        match next {
            NIL => self.tail = prev,
            next => self.nodes[next].prev = prev,
        }

        let moved = self.nodes.len() - 1;
        let node = self.nodes.swap_remove(at);
        if at != moved {
            self.relink(at);
        }
        node.value
    }

    /// Points the neighbours of the node now in slot `at` back to it.
    fn relink(&mut self, at: usize) {
        let Node { prev, next, .. } = self.nodes[at];
        match prev {
            NIL => self.head = at,
            prev => self.nodes[prev].next = at,
        }
        match next {
            NIL => self.tail = at,
            next => self.nodes[next].prev = at,
        }
    }
}

impl<E: Ord> LinkedOrderedContainer<E> {
    /// Slot and position of the first element equal to `element`.
    fn find(&self, element: &E) -> Option<(usize, usize)> {
        let mut at = self.head;
        let mut index = 0;
        while let Some(node) = self.nodes.get(at) {
            match node.value.cmp(element) {
                Ordering::Less => {}
                Ordering::Equal if node.value == *element => return Some((at, index)),
                Ordering::Equal => {}
                Ordering::Greater => break,
            }
            at = node.next;
            index += 1;
        }
        None
    }

    pub fn contains(&self, element: &E) -> bool {
        self.find(element).is_some()
    }

    /// Position of the first element equal to `element`.
    pub fn index_of(&self, element: &E) -> Option<usize> {
        self.find(element).map(|(_, index)| index)
    }
}

impl<E: Ord> OrderedContainer<E> for LinkedOrderedContainer<E> {
    type Cursor<'a> = Cursor<'a, E> where Self: 'a, E: 'a;

    fn insert(&mut self, element: E) -> bool {
        let append = match self.nodes.get(self.tail) {
            None => true,
            Some(last) => element >= last.value,
        };
        if append {
            self.push_back(element);
            return true;
        }

        // the tail is greater, so the scan stops at the latest on it
        let mut at = self.head;
        let mut index = 0;
        while element >= self.nodes[at].value {
            at = self.nodes[at].next;
            index += 1;
        }
        trace!("inserting before position {} of {}", index, self.nodes.len());
        self.insert_before(at, element);
        true
    }

    fn remove_at(&mut self, index: usize) -> Result<E> {
        check_index(index, self.nodes.len())?;
        trace!("removing position {} of {}", index, self.nodes.len());
        let at = self.link_at(index);
        Ok(self.unlink(at))
    }

    fn remove_value(&mut self, element: &E) -> bool {
        match self.find(element) {
            Some((at, _)) => {
                self.unlink(at);
                true
            }
            None => false,
        }
    }

    fn clear(&mut self) {
        debug!("clearing {} elements", self.nodes.len());
        self.nodes.clear();
        self.head = NIL;
        self.tail = NIL;
    }

    fn get(&self, index: usize) -> Result<&E> {
        check_index(index, self.nodes.len())?;
        Ok(&self.nodes[self.link_at(index)].value)
    }

    fn cursor(&self, index: usize) -> Result<Cursor<'_, E>> {
        check_position(index, self.nodes.len())?;
        Ok(Cursor { list: self, next: self.link_at(index), index })
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn duplicate(&self) -> LinkedOrderedContainer<E>
    where
        E: Clone,
    {
        debug!("duplicating {} elements", self.nodes.len());
        let mut copy = LinkedOrderedContainer::with_capacity(self.nodes.len());
        for value in self.iter() {
            copy.push_back(value.clone());
        }
        copy
    }

    fn first(&self) -> Result<&E> {
        self.nodes.get(self.head).map(|node| &node.value).ok_or(Error::NoSuchElement)
    }

    fn last(&self) -> Result<&E> {
        self.nodes.get(self.tail).map(|node| &node.value).ok_or(Error::NoSuchElement)
    }
}

impl<E> Default for LinkedOrderedContainer<E> {
    fn default() -> LinkedOrderedContainer<E> {
        LinkedOrderedContainer::new()
    }
}

impl<E: Ord + Clone> Clone for LinkedOrderedContainer<E> {
    fn clone(&self) -> LinkedOrderedContainer<E> {
        self.duplicate()
    }
}

impl<E: PartialEq> PartialEq for LinkedOrderedContainer<E> {
    fn eq(&self, other: &LinkedOrderedContainer<E>) -> bool {
        self.nodes.len() == other.nodes.len() && self.iter().eq(other.iter())
    }
}

impl<E: Eq> Eq for LinkedOrderedContainer<E> {}

impl<E: PartialOrd> PartialOrd for LinkedOrderedContainer<E> {
    fn partial_cmp(&self, other: &LinkedOrderedContainer<E>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<E: Ord> Ord for LinkedOrderedContainer<E> {
    fn cmp(&self, other: &LinkedOrderedContainer<E>) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<E: Hash> Hash for LinkedOrderedContainer<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.nodes.len());
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for LinkedOrderedContainer<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<E: fmt::Display> fmt::Display for LinkedOrderedContainer<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_list(f, self.iter())
    }
}

impl<E: Ord> FromIterator<E> for LinkedOrderedContainer<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> LinkedOrderedContainer<E> {
        let mut list = LinkedOrderedContainer::new();
        list.insert_all(iter);
        list
    }
}

impl<E: Ord> Extend<E> for LinkedOrderedContainer<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<'a, E> IntoIterator for &'a LinkedOrderedContainer<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Iter<'a, E> {
        self.iter()
    }
}

impl<E> IntoIterator for LinkedOrderedContainer<E> {
    type Item = E;
    type IntoIter = IntoIter<E>;

    fn into_iter(self) -> IntoIter<E> {
        IntoIter { list: self }
    }
}

/// Borrowing iterator over a [`LinkedOrderedContainer`], in ascending order.
pub struct Iter<'a, E> {
    list: &'a LinkedOrderedContainer<E>,
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<&'a E> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.list.nodes[self.front];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, E> DoubleEndedIterator for Iter<'a, E> {
    fn next_back(&mut self) -> Option<&'a E> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.list.nodes[self.back];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<'a, E> ExactSizeIterator for Iter<'a, E> {}

impl<'a, E> FusedIterator for Iter<'a, E> {}

impl<'a, E> Clone for Iter<'a, E> {
    fn clone(&self) -> Iter<'a, E> {
        Iter { list: self.list, front: self.front, back: self.back, remaining: self.remaining }
    }
}

/// Owning iterator over a [`LinkedOrderedContainer`], in ascending order.
pub struct IntoIter<E> {
    list: LinkedOrderedContainer<E>,
}

impl<E> Iterator for IntoIter<E> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        self.list.pop_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.nodes.len(), Some(self.list.nodes.len()))
    }
}

impl<E> DoubleEndedIterator for IntoIter<E> {
    fn next_back(&mut self) -> Option<E> {
        self.list.pop_last()
    }
}

impl<E> ExactSizeIterator for IntoIter<E> {}

impl<E> FusedIterator for IntoIter<E> {}

/// Read-only [`PositionCursor`] over a [`LinkedOrderedContainer`].
pub struct Cursor<'a, E> {
    list: &'a LinkedOrderedContainer<E>,
    next: usize,
    index: usize,
}

impl<'a, E> Iterator for Cursor<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<&'a E> {
        let list = self.list;
        let node = list.nodes.get(self.next)?;
        self.next = node.next;
        self.index += 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.nodes.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl<'a, E> PositionCursor<'a, E> for Cursor<'a, E> {
    fn previous(&mut self) -> Option<&'a E> {
        let list = self.list;
        let prev = match list.nodes.get(self.next) {
            Some(node) => node.prev,
            None => list.tail,
        };
        let node = list.nodes.get(prev)?;
        self.next = prev;
        self.index -= 1;
        Some(&node.value)
    }

    fn next_index(&self) -> usize {
        self.index
    }

    fn has_next(&self) -> bool {
        self.next != NIL
    }
}

/// Cursor over a [`LinkedOrderedContainer`] that can remove the element it
/// last stepped over.
///
/// There is no way to insert or replace through a cursor, since either could
/// break the ordering.
pub struct CursorMut<'a, E> {
    list: &'a mut LinkedOrderedContainer<E>,
    next: usize,
    index: usize,
    /// Slot last returned by `next` or `previous`, `NIL` after a removal.
    last: usize,
}

impl<'a, E> CursorMut<'a, E> {
    pub fn next(&mut self) -> Option<&E> {
        let at = self.next;
        let node = self.list.nodes.get(at)?;
        self.next = node.next;
        self.index += 1;
        self.last = at;
        Some(&node.value)
    }

    pub fn previous(&mut self) -> Option<&E> {
        let prev = match self.list.nodes.get(self.next) {
            Some(node) => node.prev,
            None => self.list.tail,
        };
        let node = self.list.nodes.get(prev)?;
        self.next = prev;
        self.index -= 1;
        self.last = prev;
        Some(&node.value)
    }

    pub fn next_index(&self) -> usize {
        self.index
    }

    pub fn has_next(&self) -> bool {
        self.next != NIL
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    /// Removes the element last returned by `next` or `previous`.
    pub fn remove(&mut self) -> Result<E> {
        let at = self.last;
        if at == NIL {
            return Err(Error::NoCurrentElement);
        }
        if self.next == at {
            // came from `previous`
            self.next = self.list.nodes[at].next;
        } else {
            self.index -= 1;
        }

        let moved = self.list.nodes.len() - 1;
        let value = self.list.unlink(at);
        if self.next == moved {
            self.next = at;
        }
        self.last = NIL;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is_sorted;
    use pretty_assertions::assert_eq;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    fn of(values: &[i32]) -> LinkedOrderedContainer<i32> {
        values.iter().copied().collect()
    }

    /// Walks the links both ways and checks them against each other.
    fn assert_links<E: Ord + fmt::Debug>(list: &LinkedOrderedContainer<E>) {
        let forward: Vec<&E> = list.iter().collect();
        let mut backward: Vec<&E> = list.iter().rev().collect();
        backward.reverse();
        assert_eq!(forward, backward);
        assert_eq!(forward.len(), list.len());
        assert!(is_sorted(forward.iter().copied()));
    }

    #[test]
    fn test_insert() {
        let mut list: LinkedOrderedContainer<i32> = LinkedOrderedContainer::new();
        assert!(list.insert(3));
        assert!(list.insert(1));
        assert!(list.insert(2));
        assert_eq!(list.to_string(), "[1, 2, 3]");
        assert_links(&list);

        let mut iter = list.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_insert_all() {
        let mut list: LinkedOrderedContainer<i32> = LinkedOrderedContainer::new();
        assert!(list.insert_all(vec![3, 1, 2]));
        assert_eq!(list.to_string(), "[1, 2, 3]");
        assert!(!list.insert_all(Vec::new()));
    }

    #[test]
    fn test_try_insert_none() {
        let mut list = of(&[1, 2]);
        assert_eq!(list.try_insert(None), Err(Error::NullElement));
        assert_eq!(list.try_insert(Some(0)), Ok(true));
        assert_eq!(list.to_string(), "[0, 1, 2]");
    }

    #[test]
    fn test_try_insert_all_with_none_element() {
        let mut list: LinkedOrderedContainer<i32> = LinkedOrderedContainer::new();
        assert_eq!(list.try_insert_all(Some(vec![Some(1), None, Some(2)])), Err(Error::NullElement));
        assert_eq!(list.to_string(), "[1]");
    }

    #[test]
    fn test_remove_at() {
        let mut list = of(&[3, 1, 2]);
        assert_eq!(list.remove_at(0), Ok(1));
        assert_eq!(list.to_string(), "[2, 3]");
        assert_eq!(list.remove_at(5), Err(Error::IndexOutOfBounds { index: 5, len: 2 }));
        assert_eq!(list.remove_at(1), Ok(3));
        assert_eq!(list.remove_at(0), Ok(2));
        assert!(list.is_empty());
        assert_eq!(list.first(), Err(Error::NoSuchElement));
    }

    #[test]
    fn test_remove_value() {
        let mut list = of(&[3, 1, 2, 2]);
        assert!(list.remove_value(&2));
        assert!(!list.remove_value(&5));
        assert_eq!(list.to_string(), "[1, 2, 3]");
        assert_links(&list);
    }

    #[test]
    fn test_clear() {
        let mut list = of(&[3, 1, 2]);
        list.clear();
        assert_eq!(list.to_string(), "[]");
        assert_eq!(list.len(), 0);
        list.insert(7);
        assert_eq!(list.to_string(), "[7]");
    }

    #[test]
    fn test_get() {
        let list = of(&[5, 3, 1, 2, 4]);
        for i in 0..5 {
            assert_eq!(list.get(i), Ok(&(i as i32 + 1)));
        }
        assert_eq!(list.get(5), Err(Error::IndexOutOfBounds { index: 5, len: 5 }));
    }

    #[test]
    fn test_first_last() {
        let list = of(&[3, 1, 2]);
        assert_eq!(list.first(), Ok(&1));
        assert_eq!(list.last(), Ok(&3));

        let empty: LinkedOrderedContainer<i32> = LinkedOrderedContainer::new();
        assert_eq!(empty.first(), Err(Error::NoSuchElement));
        assert_eq!(empty.last(), Err(Error::NoSuchElement));
    }

    #[test]
    fn test_strings() {
        let mut list: LinkedOrderedContainer<&str> = LinkedOrderedContainer::new();
        list.insert("banana");
        list.insert("apple");
        list.insert("cherry");
        assert_eq!(list.to_string(), "[apple, banana, cherry]");

        let mut list: LinkedOrderedContainer<&str> = LinkedOrderedContainer::new();
        list.insert("");
        list.insert("apple");
        assert_eq!(list.to_string(), "[, apple]");

        let list: LinkedOrderedContainer<&str> = vec![" banana", "apple ", " cherry "].into_iter().collect();
        assert_eq!(list.to_string(), "[ banana,  cherry , apple ]");
    }

    #[derive(Debug, Clone)]
    struct Tagged(u8, u32);

    impl PartialEq for Tagged {
        fn eq(&self, other: &Tagged) -> bool {
            self.0 == other.0
        }
    }
    impl Eq for Tagged {}
    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Tagged) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }
    impl Ord for Tagged {
        fn cmp(&self, other: &Tagged) -> Ordering {
            self.0.cmp(&other.0)
        }
    }

    #[test]
    fn test_equal_elements_keep_insertion_order() {
        let mut list: LinkedOrderedContainer<Tagged> = LinkedOrderedContainer::new();
        list.insert(Tagged(2, 0));
        list.insert(Tagged(1, 1));
        list.insert(Tagged(2, 2));
        list.insert(Tagged(1, 3));
        list.insert(Tagged(3, 4));
        list.insert(Tagged(2, 5));
        let tags: Vec<u32> = list.iter().map(|t| t.1).collect();
        assert_eq!(tags, vec![1, 3, 0, 2, 5, 4]);
    }

    #[test]
    fn test_duplicate_is_independent() {
        let mut list = of(&[3, 1, 2]);
        let mut copy = list.duplicate();
        assert_eq!(copy, list);
        assert_eq!(copy.to_string(), list.to_string());

        copy.insert(0);
        list.remove_at(2).unwrap();
        assert_eq!(list.to_string(), "[1, 2]");
        assert_eq!(copy.to_string(), "[0, 1, 2, 3]");
        assert_links(&list);
        assert_links(&copy);
    }

    #[test]
    fn test_duplicate_shares_reference_counted_elements() {
        use std::rc::Rc;

        let shared = Rc::new(1);
        let mut list: LinkedOrderedContainer<Rc<i32>> = LinkedOrderedContainer::new();
        list.insert(Rc::clone(&shared));
        let copy = list.duplicate();
        assert!(Rc::ptr_eq(list.first().unwrap(), copy.first().unwrap()));
        assert_eq!(Rc::strong_count(&shared), 3);
    }

    #[test]
    fn test_cursor() {
        let list = of(&[1, 2, 3]);
        let mut cursor = list.cursor(1).unwrap();
        assert_eq!(cursor.next_index(), 1);
        assert_eq!(cursor.previous_index(), Some(0));
        assert_eq!(cursor.next(), Some(&2));
        assert_eq!(cursor.next(), Some(&3));
        assert!(!cursor.has_next());
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.previous(), Some(&3));
        assert_eq!(cursor.previous(), Some(&2));
        assert_eq!(cursor.previous(), Some(&1));
        assert!(!cursor.has_previous());
        assert_eq!(cursor.previous(), None);
        assert_eq!(cursor.next_index(), 0);

        let mut end = list.cursor(3).unwrap();
        assert_eq!(end.next(), None);
        assert_eq!(end.previous(), Some(&3));

        assert!(list.cursor(4).is_err());
    }

    #[test]
    fn test_cursor_mut_remove() {
        let mut list = of(&[1, 2, 3, 4, 5]);
        {
            let mut cursor = list.cursor_mut(0).unwrap();
            assert_eq!(cursor.remove(), Err(Error::NoCurrentElement));
            while let Some(&v) = cursor.next() {
                if v % 2 == 0 {
                    cursor.remove().unwrap();
                    assert_eq!(cursor.remove(), Err(Error::NoCurrentElement));
                }
            }
            assert_eq!(cursor.next_index(), 3);
        }
        assert_eq!(list.to_string(), "[1, 3, 5]");
        assert_links(&list);

        {
            let mut cursor = list.cursor_mut(3).unwrap();
            assert_eq!(cursor.previous(), Some(&5));
            assert_eq!(cursor.remove(), Ok(5));
            assert_eq!(cursor.next_index(), 2);
            assert_eq!(cursor.previous(), Some(&3));
            assert_eq!(cursor.remove(), Ok(3));
            assert_eq!(cursor.next(), None);
            assert_eq!(cursor.previous(), Some(&1));
        }
        assert_eq!(list.to_string(), "[1]");
        assert_links(&list);
    }

    #[test]
    fn test_pop_and_into_iter() {
        let mut list = of(&[4, 2, 3, 1]);
        assert_eq!(list.pop_first(), Some(1));
        assert_eq!(list.pop_last(), Some(4));
        assert_links(&list);
        let rest: Vec<i32> = list.into_iter().collect();
        assert_eq!(rest, vec![2, 3]);

        let reversed: Vec<i32> = of(&[2, 3, 1]).into_iter().rev().collect();
        assert_eq!(reversed, vec![3, 2, 1]);
    }

    #[test]
    fn test_contains_index_of() {
        let list = of(&[5, 1, 3, 3]);
        assert!(list.contains(&3));
        assert!(!list.contains(&4));
        assert_eq!(list.index_of(&3), Some(1));
        assert_eq!(list.index_of(&6), None);
    }

    #[test]
    fn test_ordering_and_hash() {
        use std::collections::hash_map::DefaultHasher;

        let hash = |list: &LinkedOrderedContainer<i32>| {
            let mut h = DefaultHasher::new();
            list.hash(&mut h);
            h.finish()
        };
        let a = of(&[1, 2, 3]);
        let b = of(&[3, 2, 1]);
        assert_eq!(a, b);
        assert_eq!(hash(&a), hash(&b));
        assert!(of(&[1, 2]) < of(&[1, 3]));
        assert_eq!(format!("{:?}", a), "[1, 2, 3]");
    }

    #[quickcheck]
    fn test_insert_keeps_sorted(values: Vec<i16>) -> bool {
        let mut list: LinkedOrderedContainer<i16> = LinkedOrderedContainer::new();
        values.into_iter().all(|v| {
            list.insert(v);
            is_sorted(&list)
        })
    }

    #[quickcheck]
    fn test_matches_sorted_vec(values: Vec<i16>) -> bool {
        let list: LinkedOrderedContainer<i16> = values.iter().copied().collect();
        let mut expected = values;
        expected.sort();
        list.to_vec() == expected && list.iter().rev().copied().eq(expected.into_iter().rev())
    }

    #[quickcheck]
    fn test_size_accounting(ops: Vec<(bool, u8)>) -> bool {
        let mut list: LinkedOrderedContainer<u8> = LinkedOrderedContainer::new();
        let mut expected = 0usize;
        for (insert, v) in ops {
            if insert {
                list.insert(v);
                expected += 1;
            } else if list.remove_value(&v) {
                expected -= 1;
            }
        }
        list.len() == expected && list.iter().count() == expected && is_sorted(&list)
    }

    #[quickcheck]
    fn test_remove_at_matches_vec(values: Vec<u8>, index: usize) -> TestResult {
        if values.is_empty() {
            return TestResult::discard();
        }
        let mut list: LinkedOrderedContainer<u8> = values.iter().copied().collect();
        let mut expected = values;
        expected.sort();
        let index = index % expected.len();
        let removed = list.remove_at(index);
        let want = expected.remove(index);
        TestResult::from_bool(removed == Ok(want) && list.to_vec() == expected && list.iter().rev().count() == expected.len())
    }

    #[quickcheck]
    fn test_get_matches_vec(values: Vec<u8>) -> bool {
        let list: LinkedOrderedContainer<u8> = values.iter().copied().collect();
        let mut expected = values;
        expected.sort();
        (0..expected.len()).all(|i| list.get(i) == Ok(&expected[i]))
            && list.get(expected.len()) == Err(Error::IndexOutOfBounds { index: expected.len(), len: expected.len() })
    }
}
