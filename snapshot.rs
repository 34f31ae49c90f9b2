// Sorted-list: Guaranteed-sorted list containers.
// Copyright (c) 2014, Kang Seonghoon.
// See README.md for details.

//! Snapshots as plain element sequences. Loading re-inserts every element,
//! so an out-of-order snapshot still produces a sorted container.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::linked::LinkedOrderedContainer;
use crate::vec::SortedVec;

impl<E: Serialize> Serialize for LinkedOrderedContainer<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, E: Ord + Deserialize<'de>> Deserialize<'de> for LinkedOrderedContainer<E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<E>::deserialize(deserializer).map(|elements| elements.into_iter().collect())
    }
}

impl<T: Serialize> Serialize for SortedVec<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_slice().serialize(serializer)
    }
}

impl<'de, T: Ord + Deserialize<'de>> Deserialize<'de> for SortedVec<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(SortedVec::from_unsorted_vec)
    }
}
