use crate::subject::debug_list;
use crate::{FailureKind, FailureMetadata};
use std::borrow::Borrow;
use std::fmt::Debug;

/// Assertions on the elements of a collection, in iteration order.
#[derive(Debug, Clone)]
pub struct IterableSubject<T> {
    metadata: FailureMetadata,
    actual: Vec<T>,
}

/// Assertions on the items a stream produced.
///
/// An alias of [`IterableSubject`]: the stream is collected up front.
pub type StreamSubject<T> = IterableSubject<T>;

/// Alias of [`IterableSubject`] for `i32` streams.
pub type IntStreamSubject<T = i32> = IterableSubject<T>;

/// Alias of [`IterableSubject`] for `i64` streams.
pub type LongStreamSubject<T = i64> = IterableSubject<T>;

impl<T> IterableSubject<T> {
    pub fn new(metadata: FailureMetadata, actual: Vec<T>) -> Self {
        IterableSubject { metadata, actual }
    }

    pub fn metadata(&self) -> &FailureMetadata {
        &self.metadata
    }

    /// The collected elements.
    pub fn elements(&self) -> &[T] {
        &self.actual
    }
}

impl<T: Debug> IterableSubject<T> {
    #[track_caller]
    pub fn is_empty(&self) {
        if !self.actual.is_empty() {
            self.metadata.fail(FailureKind::Size, self.describe(), "empty");
        }
    }

    #[track_caller]
    pub fn is_not_empty(&self) {
        if self.actual.is_empty() {
            self.metadata.fail(FailureKind::Size, "[]", "not empty");
        }
    }

    #[track_caller]
    pub fn has_size(&self, expected: usize) {
        if self.actual.len() != expected {
            self.metadata.fail(
                FailureKind::Size,
                format!("{} elements {}", self.actual.len(), self.describe()),
                format!("{expected} elements"),
            );
        }
    }

    #[track_caller]
    pub fn contains<E>(&self, expected: &E)
    where
        T: Borrow<E>,
        E: ?Sized + PartialEq + Debug,
    {
        if !self.has(expected) {
            self.metadata.fail(
                FailureKind::Membership,
                self.describe(),
                format!("to contain {expected:?}"),
            );
        }
    }

    #[track_caller]
    pub fn does_not_contain<E>(&self, expected: &E)
    where
        T: Borrow<E>,
        E: ?Sized + PartialEq + Debug,
    {
        if self.has(expected) {
            self.metadata.fail(
                FailureKind::Membership,
                self.describe(),
                format!("not to contain {expected:?}"),
            );
        }
    }

    /// Every expected element is present, in any order.
    #[track_caller]
    pub fn contains_all<E>(&self, expected: &[E])
    where
        T: Borrow<E>,
        E: PartialEq + Debug,
    {
        let missing: Vec<&E> = expected.iter().filter(|item| !self.has(*item)).collect();
        if !missing.is_empty() {
            self.metadata.fail(
                FailureKind::Membership,
                self.describe(),
                format!("to contain all of {}, missing {}", debug_list(expected), debug_list(missing)),
            );
        }
    }

    /// No expected element is present.
    #[track_caller]
    pub fn contains_none<E>(&self, expected: &[E])
    where
        T: Borrow<E>,
        E: PartialEq + Debug,
    {
        let present: Vec<&E> = expected.iter().filter(|item| self.has(*item)).collect();
        if !present.is_empty() {
            self.metadata.fail(
                FailureKind::Membership,
                self.describe(),
                format!("to contain none of {}, found {}", debug_list(expected), debug_list(present)),
            );
        }
    }

    /// The elements equal `expected`, in order.
    #[track_caller]
    pub fn contains_exactly<E>(&self, expected: &[E])
    where
        T: Borrow<E>,
        E: PartialEq + Debug,
    {
        let equal = self.actual.len() == expected.len()
            && self
                .actual
                .iter()
                .zip(expected)
                .all(|(actual, expected)| <T as Borrow<E>>::borrow(actual) == expected);

        if !equal {
            self.metadata
                .fail(FailureKind::Value, self.describe(), debug_list(expected));
        }
    }

    fn has<E>(&self, expected: &E) -> bool
    where
        T: Borrow<E>,
        E: ?Sized + PartialEq,
    {
        self.actual
            .iter()
            .any(|item| <T as Borrow<E>>::borrow(item) == expected)
    }

    pub(crate) fn describe(&self) -> String {
        debug_list(&self.actual)
    }
}
