use crate::{FailureKind, FailureMetadata};
use std::borrow::Borrow;
use std::fmt::Debug;

/// Assertions on the entries of a map.
#[derive(Debug, Clone)]
pub struct MapSubject<K, V> {
    metadata: FailureMetadata,
    actual: Vec<(K, V)>,
}

impl<K, V> MapSubject<K, V> {
    pub fn new(metadata: FailureMetadata, actual: Vec<(K, V)>) -> Self {
        MapSubject { metadata, actual }
    }
}

impl<K: Debug, V: Debug> MapSubject<K, V> {
    #[track_caller]
    pub fn is_empty(&self) {
        if !self.actual.is_empty() {
            self.metadata.fail(FailureKind::Size, self.describe(), "empty");
        }
    }

    #[track_caller]
    pub fn is_not_empty(&self) {
        if self.actual.is_empty() {
            self.metadata.fail(FailureKind::Size, "{}", "not empty");
        }
    }

    #[track_caller]
    pub fn has_size(&self, expected: usize) {
        if self.actual.len() != expected {
            self.metadata.fail(
                FailureKind::Size,
                format!("{} entries {}", self.actual.len(), self.describe()),
                format!("{expected} entries"),
            );
        }
    }

    #[track_caller]
    pub fn contains_key<Q>(&self, key: &Q)
    where
        K: Borrow<Q>,
        Q: ?Sized + PartialEq + Debug,
    {
        if self.get(key).is_none() {
            self.metadata.fail(
                FailureKind::Membership,
                self.describe(),
                format!("to contain key {key:?}"),
            );
        }
    }

    #[track_caller]
    pub fn does_not_contain_key<Q>(&self, key: &Q)
    where
        K: Borrow<Q>,
        Q: ?Sized + PartialEq + Debug,
    {
        if self.get(key).is_some() {
            self.metadata.fail(
                FailureKind::Membership,
                self.describe(),
                format!("not to contain key {key:?}"),
            );
        }
    }

    #[track_caller]
    pub fn contains_entry<Q, W>(&self, key: &Q, value: &W)
    where
        K: Borrow<Q>,
        V: Borrow<W>,
        Q: ?Sized + PartialEq + Debug,
        W: ?Sized + PartialEq + Debug,
    {
        let matches = self
            .get(key)
            .is_some_and(|actual| <V as Borrow<W>>::borrow(actual) == value);

        if !matches {
            self.metadata.fail(
                FailureKind::Membership,
                self.describe(),
                format!("to contain entry {key:?}: {value:?}"),
            );
        }
    }

    fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + PartialEq,
    {
        self.actual
            .iter()
            .find(|(actual, _)| <K as Borrow<Q>>::borrow(actual) == key)
            .map(|(_, value)| value)
    }

    fn describe(&self) -> String {
        let entries: Vec<String> = self
            .actual
            .iter()
            .map(|(key, value)| format!("{key:?}: {value:?}"))
            .collect();
        format!("{{{}}}", entries.join(", "))
    }
}
