// Sorted-list: Guaranteed-sorted list containers.
// Copyright (c) 2014, Kang Seonghoon.
// See README.md for details.

use thiserror::Error;

/// Error type for sorted containers.
///
/// Every error is raised before the container is touched, so a failed call
/// leaves the contents exactly as they were.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An absent value was offered as an element.
    #[error("Null elements are not permitted in the list")]
    NullElement,
    /// An absent collection was offered to a bulk insertion.
    #[error("Null collection is not permitted")]
    NullCollection,
    /// An index outside of the valid range.
    #[error("Index: {index}, Size: {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    /// `first` or `last` on an empty container.
    #[error("The container is empty")]
    NoSuchElement,
    /// Inserting a batch at a given position.
    #[error("Cannot add a collection at a specific index")]
    Unsupported,
    /// A cursor removal with no element returned since the last move or removal.
    #[error("The cursor has no current element")]
    NoCurrentElement,
}

/// Broad classes of [`Error`], for callers that only care about the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    OutOfBounds,
    NotFound,
    Unsupported,
    IllegalState,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match *self {
            Error::NullElement | Error::NullCollection => ErrorKind::InvalidArgument,
            Error::IndexOutOfBounds { .. } => ErrorKind::OutOfBounds,
            Error::NoSuchElement => ErrorKind::NotFound,
            Error::Unsupported => ErrorKind::Unsupported,
            Error::NoCurrentElement => ErrorKind::IllegalState,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Fails unless `index < len`.
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::IndexOutOfBounds { index, len })
    }
}

/// Fails unless `index <= len`; cursors may sit past the last element.
pub(crate) fn check_position(index: usize, len: usize) -> Result<()> {
    if index <= len {
        Ok(())
    } else {
        Err(Error::IndexOutOfBounds { index, len })
    }
}
