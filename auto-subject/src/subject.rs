//! Subjects that generated accessors delegate to.
//!
//! Each subject owns the elements it checks, collected when the accessor is
//! called. Elements read from a field are references into the value under
//! test; elements returned by value from an accessor method are owned. The
//! assertions compare through [`Borrow`](std::borrow::Borrow), so both cases
//! take the same `&expected` argument.

mod array;
mod class;
mod iterable;
mod map;
mod option;

pub use array::{
    ArraySubject, BooleanArraySubject, ByteArraySubject, CharArraySubject, DoubleArraySubject,
    FloatArraySubject, IntArraySubject, LongArraySubject, ObjectArraySubject, ShortArraySubject,
};
pub use class::ClassSubject;
pub use iterable::{IntStreamSubject, IterableSubject, LongStreamSubject, StreamSubject};
pub use map::MapSubject;
pub use option::{DoubleOptionSubject, IntOptionSubject, LongOptionSubject, OptionSubject};

use std::fmt::Debug;

/// `[a, b, c]` using each element's `Debug` output.
pub(crate) fn debug_list<'a, T: Debug + 'a>(items: impl IntoIterator<Item = &'a T>) -> String {
    let items: Vec<String> = items.into_iter().map(|item| format!("{item:?}")).collect();
    format!("[{}]", items.join(", "))
}
