use crate::subject::IterableSubject;
use crate::{FailureKind, FailureMetadata};
use std::borrow::Borrow;
use std::fmt::Debug;
use std::ops::Deref;

/// Assertions on the elements of an array or slice.
///
/// Derefs to [`IterableSubject`] for the collection assertions and adds
/// whole-array equality.
#[derive(Debug, Clone)]
pub struct ArraySubject<T> {
    inner: IterableSubject<T>,
}

// Aliases of `ArraySubject` named after the component type. They are all the
// same type and add no assertions of their own.

/// Alias of [`ArraySubject`] for `bool` arrays.
pub type BooleanArraySubject<T> = ArraySubject<T>;
/// Alias of [`ArraySubject`] for `u8` and `i8` arrays.
pub type ByteArraySubject<T> = ArraySubject<T>;
/// Alias of [`ArraySubject`] for `i16` and `u16` arrays.
pub type ShortArraySubject<T> = ArraySubject<T>;
/// Alias of [`ArraySubject`] for `i32` and `u32` arrays.
pub type IntArraySubject<T> = ArraySubject<T>;
/// Alias of [`ArraySubject`] for 64-bit, 128-bit and pointer-sized integer arrays.
pub type LongArraySubject<T> = ArraySubject<T>;
/// Alias of [`ArraySubject`] for `char` arrays.
pub type CharArraySubject<T> = ArraySubject<T>;
/// Alias of [`ArraySubject`] for `f32` arrays.
pub type FloatArraySubject<T> = ArraySubject<T>;
/// Alias of [`ArraySubject`] for `f64` arrays.
pub type DoubleArraySubject<T> = ArraySubject<T>;
/// Alias of [`ArraySubject`] for non-primitive arrays.
pub type ObjectArraySubject<T> = ArraySubject<T>;

impl<T> ArraySubject<T> {
    pub fn new(metadata: FailureMetadata, actual: Vec<T>) -> Self {
        ArraySubject {
            inner: IterableSubject::new(metadata, actual),
        }
    }
}

impl<T> Deref for ArraySubject<T> {
    type Target = IterableSubject<T>;

    fn deref(&self) -> &IterableSubject<T> {
        &self.inner
    }
}

impl<T: Debug> ArraySubject<T> {
    /// Same length, equal elements, same order.
    #[track_caller]
    pub fn is_equal_to<E>(&self, expected: &[E])
    where
        T: Borrow<E>,
        E: PartialEq + Debug,
    {
        self.inner.contains_exactly(expected);
    }
}

impl<T: Borrow<f64> + Debug> ArraySubject<T> {
    /// Same length, each element within `tolerance` of its expected value.
    #[track_caller]
    pub fn is_within(&self, tolerance: f64, expected: &[f64]) {
        let actual = self.inner.elements();
        let close = actual.len() == expected.len()
            && actual
                .iter()
                .zip(expected)
                .all(|(actual, expected)| (<T as Borrow<f64>>::borrow(actual) - expected).abs() <= tolerance);

        if !close {
            self.inner.metadata().fail(
                FailureKind::Value,
                self.inner.describe(),
                format!("{expected:?} within {tolerance}"),
            );
        }
    }
}
