//! # auto-subject: Generated Assertion Subjects
//!
//! `auto-subject` generates a fluent "assertion subject" for your value types.
//! Derive [`Subject`] on a struct or enum and you get a companion type with
//! one or more assertion methods per property, shaped by the property's type:
//! booleans get `is_x` / `is_not_x`, collections hand off to a collection
//! subject, enum variants get identity checks, and everything else gets an
//! equality check.
//!
//! # Table of Contents
//!
//! - [Quick Start](#quick-start)
//! - [Generated Methods](#generated-methods)
//! - [Enums](#enums)
//! - [Configuration](#configuration)
//! - [Error Messages](#error-messages)
//!
//! # Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! auto-subject = "0.1"
//! ```
//!
//! Basic example:
//!
//! ```rust
//! use auto_subject::{Subject, assert_about};
//!
//! #[derive(Subject)]
//! pub struct User {
//!     pub name: String,
//!     pub is_admin: bool,
//!     pub roles: Vec<String>,
//! }
//!
//! let user = User {
//!     name: "Alice".to_string(),
//!     is_admin: false,
//!     roles: vec!["editor".to_string()],
//! };
//!
//! let subject = assert_about(AutoUser::user()).that(&user);
//! subject.has_name("Alice");
//! subject.is_not_admin();
//! subject.roles().has_size(1);
//! subject.has_roles(&["editor"]);
//! ```
//!
//! # Generated Methods
//!
//! Only `pub` named fields become properties. The first rule that fits a
//! field's type decides what is generated; references and boxes are looked
//! through, so `Box<bool>` is a boolean.
//!
//! | Field type | Generated |
//! |------------|-----------|
//! | `()` | nothing |
//! | `bool` | `is_x()`, `is_not_x()` |
//! | `[T; N]`, `Box<[T]>`, `&[T]` | `x()` → [`ArraySubject`] |
//! | `Vec<T>`, `VecDeque<T>`, `HashSet<T>`, ... | `x()` → [`IterableSubject`], `has_x(&[..])`, `does_not_have_x(&[..])` |
//! | `HashMap<K, V>`, `BTreeMap<K, V>` | `x()` → [`MapSubject`] |
//! | `Option<T>` | `x()` → [`OptionSubject`] |
//! | `std::vec::IntoIter<T>` | `x()` → [`StreamSubject`] |
//! | `TypeId` | `x()` → [`ClassSubject`] |
//! | anything else | `has_x(expected)` |
//!
//! Getter-style names are shortened: a field `is_admin` produces
//! `is_admin()` / `is_not_admin()`, not `is_is_admin()`.
//!
//! ```rust
//! use auto_subject::{Subject, assert_about};
//! use std::collections::HashMap;
//!
//! #[derive(Subject)]
//! pub struct Account {
//!     pub limit: Option<i64>,
//!     pub scores: [i32; 3],
//!     pub labels: HashMap<String, String>,
//! }
//!
//! let account = Account {
//!     limit: Some(500),
//!     scores: [1, 2, 3],
//!     labels: HashMap::from([("tier".to_string(), "gold".to_string())]),
//! };
//!
//! let subject = assert_about(AutoAccount::account()).that(&account);
//! subject.limit().has_value(&500i64);
//! subject.scores().is_equal_to(&[1i32, 2, 3]);
//! subject.labels().contains_entry(&"tier".to_string(), &"gold".to_string());
//! ```
//!
//! # Enums
//!
//! Every variant gets a pair of identity checks:
//!
//! ```rust
//! use auto_subject::{Subject, assert_about};
//!
//! #[derive(Subject)]
//! pub enum Direction {
//!     NORTH,
//!     SOUTH_WEST,
//!     Heading(u16),
//! }
//!
//! let subject = assert_about(AutoDirection::direction()).that(&Direction::SOUTH_WEST);
//! subject.is_south_west();
//! subject.is_not_north();
//! subject.is_not_heading();
//! ```
//!
//! # Configuration
//!
//! The `#[subject(...)]` attribute changes the generated type's name:
//!
//! ```rust
//! use auto_subject::{Subject, assert_about};
//!
//! #[derive(Subject)]
//! #[subject(prefix = "", suffix = "Subject")]
//! pub struct Point {
//!     pub x: i32,
//! }
//!
//! assert_about(PointSubject::point()).that(&Point { x: 1 }).has_x(1);
//! ```
//!
//! # Error Messages
//!
//! A failed assertion panics with the path of the property and both values:
//!
//! ```text
//! auto_subject assertion failed:
//!
//! value mismatch:
//!   --> `User.name`
//!   actual: "Alice"
//!   expected: "Bob"
//! ```
//!
//! Assertions are `#[track_caller]`, so the panic points at your test.

mod failure;
mod subject;

pub use auto_subject_macros::Subject;
pub use failure::{Failure, FailureKind, FailureMetadata};
pub use subject::{
    ArraySubject, BooleanArraySubject, ByteArraySubject, CharArraySubject, ClassSubject,
    DoubleArraySubject, DoubleOptionSubject, FloatArraySubject, IntArraySubject,
    IntOptionSubject, IntStreamSubject, IterableSubject, LongArraySubject, LongOptionSubject,
    LongStreamSubject, MapSubject, ObjectArraySubject, OptionSubject, ShortArraySubject,
    StreamSubject,
};

/// Builds a subject from failure metadata and the value under test.
///
/// Every generated subject exposes one, named after the value type:
/// `AutoUser::user()`.
pub type Factory<'a, T, S> = fn(FailureMetadata, &'a T) -> S;

/// Starts an assertion with the given subject factory.
///
/// ```rust
/// # use auto_subject::{Subject, assert_about};
/// # #[derive(Subject)]
/// # pub struct User { pub age: u32 }
/// # let user = User { age: 30 };
/// assert_about(AutoUser::user()).that(&user).has_age(30u32);
/// ```
pub fn assert_about<'a, T: ?Sized, S>(factory: Factory<'a, T, S>) -> SubjectBuilder<'a, T, S> {
    SubjectBuilder { factory }
}

/// Returned by [`assert_about`].
pub struct SubjectBuilder<'a, T: ?Sized, S> {
    factory: Factory<'a, T, S>,
}

impl<'a, T: ?Sized, S> SubjectBuilder<'a, T, S> {
    /// The subject for `actual`. Failures are reported under the short name
    /// of `T`.
    pub fn that(self, actual: &'a T) -> S {
        (self.factory)(FailureMetadata::for_type::<T>(), actual)
    }
}

// Called by generated code; not public API.
#[doc(hidden)]
pub mod __support {
    use crate::{FailureKind, FailureMetadata};
    use std::borrow::Borrow;
    use std::fmt::Debug;

    /// An expected value comparable with an actual value of type `A`.
    ///
    /// Generated equality methods bound their argument with this instead of
    /// bounding the property type, so a value type whose fields are not all
    /// comparable still gets a subject.
    pub trait EqualTo<A: ?Sized> {
        fn equal_to(&self, actual: &A) -> bool;

        fn describe(&self) -> String;

        fn describe_actual(actual: &A) -> String;
    }

    impl<A, E> EqualTo<A> for E
    where
        A: ?Sized + PartialEq<E> + Debug,
        E: Debug,
    {
        fn equal_to(&self, actual: &A) -> bool {
            <A as PartialEq<E>>::eq(actual, self)
        }

        fn describe(&self) -> String {
            format!("{self:?}")
        }

        fn describe_actual(actual: &A) -> String {
            format!("{actual:?}")
        }
    }

    #[track_caller]
    pub fn check_true(metadata: &FailureMetadata, label: &str, value: bool) {
        if !value {
            metadata.child(label).fail(FailureKind::Boolean, "false", "true");
        }
    }

    #[track_caller]
    pub fn check_false(metadata: &FailureMetadata, label: &str, value: bool) {
        if value {
            metadata.child(label).fail(FailureKind::Boolean, "true", "false");
        }
    }

    #[track_caller]
    pub fn check_eq<A, E>(metadata: &FailureMetadata, label: &str, actual: &A, expected: &E)
    where
        A: ?Sized,
        E: EqualTo<A>,
    {
        if !expected.equal_to(actual) {
            metadata.child(label).fail(
                FailureKind::Value,
                <E as EqualTo<A>>::describe_actual(actual),
                expected.describe(),
            );
        }
    }

    #[track_caller]
    pub fn check_contains_all<T, I, E>(
        metadata: &FailureMetadata,
        label: &str,
        actual: I,
        expected: &[E],
    ) where
        T: ?Sized,
        I: IntoIterator,
        I::Item: Borrow<T>,
        E: EqualTo<T>,
    {
        let actual: Vec<I::Item> = actual.into_iter().collect();
        let missing: Vec<String> = expected
            .iter()
            .filter(|expected| !contains::<T, _, _>(actual.as_slice(), *expected))
            .map(<E as EqualTo<T>>::describe)
            .collect();

        if !missing.is_empty() {
            metadata.child(label).fail(
                FailureKind::Membership,
                describe_actual::<T, _, E>(actual.as_slice()),
                format!(
                    "to contain all of {}, missing {}",
                    describe_expected::<T, E>(expected),
                    list(&missing)
                ),
            );
        }
    }

    #[track_caller]
    pub fn check_contains_none<T, I, E>(
        metadata: &FailureMetadata,
        label: &str,
        actual: I,
        expected: &[E],
    ) where
        T: ?Sized,
        I: IntoIterator,
        I::Item: Borrow<T>,
        E: EqualTo<T>,
    {
        let actual: Vec<I::Item> = actual.into_iter().collect();
        let present: Vec<String> = expected
            .iter()
            .filter(|expected| contains::<T, _, _>(actual.as_slice(), *expected))
            .map(<E as EqualTo<T>>::describe)
            .collect();

        if !present.is_empty() {
            metadata.child(label).fail(
                FailureKind::Membership,
                describe_actual::<T, _, E>(actual.as_slice()),
                format!(
                    "to contain none of {}, found {}",
                    describe_expected::<T, E>(expected),
                    list(&present)
                ),
            );
        }
    }

    /// Fails unless `matched == expected`. `matched` says whether the value
    /// is `variant`.
    #[track_caller]
    pub fn check_variant(metadata: &FailureMetadata, variant: &str, matched: bool, expected: bool) {
        if matched == expected {
            return;
        }

        if expected {
            metadata.fail(FailureKind::Variant, "another variant", format!("`{variant}`"));
        } else {
            metadata.fail(
                FailureKind::Variant,
                format!("`{variant}`"),
                format!("any variant but `{variant}`"),
            );
        }
    }

    fn contains<T, A, E>(actual: &[A], expected: &E) -> bool
    where
        T: ?Sized,
        A: Borrow<T>,
        E: EqualTo<T>,
    {
        actual
            .iter()
            .any(|item| expected.equal_to(<A as Borrow<T>>::borrow(item)))
    }

    fn describe_expected<T: ?Sized, E: EqualTo<T>>(expected: &[E]) -> String {
        let items: Vec<String> = expected.iter().map(<E as EqualTo<T>>::describe).collect();
        list(&items)
    }

    fn describe_actual<T, A, E>(actual: &[A]) -> String
    where
        T: ?Sized,
        A: Borrow<T>,
        E: EqualTo<T>,
    {
        let items: Vec<String> = actual
            .iter()
            .map(|item| <E as EqualTo<T>>::describe_actual(<A as Borrow<T>>::borrow(item)))
            .collect();
        list(&items)
    }

    fn list(items: &[String]) -> String {
        format!("[{}]", items.join(", "))
    }
}
