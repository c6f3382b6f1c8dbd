use crate::{FailureKind, FailureMetadata};
use std::borrow::Borrow;
use std::fmt::Debug;

/// Assertions on an optional value.
#[derive(Debug, Clone)]
pub struct OptionSubject<T> {
    metadata: FailureMetadata,
    actual: Option<T>,
}

/// Alias of [`OptionSubject`] for `Option<i32>`.
pub type IntOptionSubject<T = i32> = OptionSubject<T>;

/// Alias of [`OptionSubject`] for `Option<i64>`.
pub type LongOptionSubject<T = i64> = OptionSubject<T>;

/// Alias of [`OptionSubject`] for `Option<f64>`.
pub type DoubleOptionSubject<T = f64> = OptionSubject<T>;

impl<T> OptionSubject<T> {
    pub fn new(metadata: FailureMetadata, actual: Option<T>) -> Self {
        OptionSubject { metadata, actual }
    }
}

impl<T: Debug> OptionSubject<T> {
    #[track_caller]
    pub fn is_present(&self) {
        if self.actual.is_none() {
            self.metadata.fail(FailureKind::Presence, "None", "Some(_)");
        }
    }

    #[track_caller]
    pub fn is_empty(&self) {
        if let Some(actual) = &self.actual {
            self.metadata
                .fail(FailureKind::Presence, format!("Some({actual:?})"), "None");
        }
    }

    #[track_caller]
    pub fn has_value<E>(&self, expected: &E)
    where
        T: Borrow<E>,
        E: ?Sized + PartialEq + Debug,
    {
        match &self.actual {
            Some(actual) if <T as Borrow<E>>::borrow(actual) == expected => {}
            actual => self.metadata.fail(
                FailureKind::Value,
                format!("{actual:?}"),
                format!("Some({expected:?})"),
            ),
        }
    }
}

impl<T: Borrow<f64> + Debug> OptionSubject<T> {
    /// The value is present and within `tolerance` of `expected`.
    #[track_caller]
    pub fn has_value_within(&self, tolerance: f64, expected: f64) {
        match &self.actual {
            Some(actual) if (<T as Borrow<f64>>::borrow(actual) - expected).abs() <= tolerance => {}
            actual => self.metadata.fail(
                FailureKind::Value,
                format!("{actual:?}"),
                format!("Some({expected:?}) within {tolerance}"),
            ),
        }
    }
}
