//! Type matchers and the method synthesizers paired with them.
//!
//! Each category lives in its own module exposing a `matches` predicate and a
//! `synthesize` function. [`Matcher`] ties them together and is what the
//! pipeline holds, in priority order.
//!
//! # Standard priority
//!
//! | # | Matcher | Claims | Generates |
//! |---|---------|--------|-----------|
//! | 1 | `Void` | `()`, `Box<()>` | nothing |
//! | 2 | `Boolean` | `bool`, `Box<bool>` | `isX`, `isNotX` |
//! | 3 | `Array` | `[T; N]`, `[T]`, `Box<[T]>` | `x()` → array subject |
//! | 4 | `Iterable` | `Vec<T>`, `HashSet<T>`, ... (one type argument) | `x()` → iterable subject, optionally `hasX`/`doesNotHaveX` |
//! | 5 | `Map` | `HashMap<K, V>`, `BTreeMap<K, V>` | `x()` → map subject |
//! | 6 | `Wrapper` | `Option<T>`, iterators | `x()` → optional/stream subject |
//! | 7 | `ClassLiteral` | `TypeId` | `x()` → class subject |
//! | 8 | `EnumConstant` | enum variants | `isX`, `isNotX` |
//! | 9 | `Default` | everything | `hasX(expected)` |
//!
//! The first matcher that claims a property wins, so a type that fits several
//! predicates always lands in the earliest category.

mod array;
mod boolean;
mod class;
mod default;
mod enum_constant;
mod iterable;
mod map;
mod void;
mod wrapper;

use crate::descriptor::MethodDescriptor;
use crate::property::PropertyModel;
use std::fmt;

/// The category a matcher assigns to a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Void,
    Boolean,
    Array,
    Iterable,
    Map,
    Wrapper,
    ClassLiteral,
    EnumConstant,
    Default,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Void => "void",
            Category::Boolean => "boolean",
            Category::Array => "array",
            Category::Iterable => "iterable",
            Category::Map => "map",
            Category::Wrapper => "wrapper",
            Category::ClassLiteral => "class literal",
            Category::EnumConstant => "enum constant",
            Category::Default => "default",
        };
        f.write_str(name)
    }
}

/// Which membership assertions the iterable matcher adds next to its
/// delegating accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Membership {
    /// `hasX(expected...)`: every expected element is present.
    pub contains: bool,

    /// `doesNotHaveX(expected...)`: no expected element is present.
    pub does_not_contain: bool,
}

impl Membership {
    pub const NONE: Membership = Membership {
        contains: false,
        does_not_contain: false,
    };

    pub const ALL: Membership = Membership {
        contains: true,
        does_not_contain: true,
    };
}

/// A matcher/synthesizer pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Matcher {
    Void,
    Boolean,
    Array,
    Iterable(Membership),
    Map,
    Wrapper,
    ClassLiteral,
    EnumConstant,
    Default,
}

impl Matcher {
    /// The standard priority list, without membership assertions.
    pub fn standard() -> Vec<Matcher> {
        Self::standard_with(Membership::NONE)
    }

    /// The standard priority list with the given iterable membership
    /// assertions.
    pub fn standard_with(membership: Membership) -> Vec<Matcher> {
        vec![
            Matcher::Void,
            Matcher::Boolean,
            Matcher::Array,
            Matcher::Iterable(membership),
            Matcher::Map,
            Matcher::Wrapper,
            Matcher::ClassLiteral,
            Matcher::EnumConstant,
            Matcher::Default,
        ]
    }

    pub fn category(&self) -> Category {
        match self {
            Matcher::Void => Category::Void,
            Matcher::Boolean => Category::Boolean,
            Matcher::Array => Category::Array,
            Matcher::Iterable(_) => Category::Iterable,
            Matcher::Map => Category::Map,
            Matcher::Wrapper => Category::Wrapper,
            Matcher::ClassLiteral => Category::ClassLiteral,
            Matcher::EnumConstant => Category::EnumConstant,
            Matcher::Default => Category::Default,
        }
    }

    /// Returns `true` if this matcher claims the property.
    ///
    /// Type-based matchers never claim enum variants: a variant's type is the
    /// enum itself, whatever it happens to be called.
    pub fn matches(&self, property: &PropertyModel) -> bool {
        let ty = &property.ty;
        match self {
            Matcher::EnumConstant => enum_constant::matches(property),
            Matcher::Default => default::matches(property),
            _ if property.is_enum_constant() => false,
            Matcher::Void => void::matches(ty),
            Matcher::Boolean => boolean::matches(ty),
            Matcher::Array => array::matches(ty),
            Matcher::Iterable(_) => iterable::matches(ty),
            Matcher::Map => map::matches(ty),
            Matcher::Wrapper => wrapper::matches(property),
            Matcher::ClassLiteral => class::matches(ty),
        }
    }

    /// Generates the methods for a property this matcher claimed.
    pub fn synthesize(&self, property: &PropertyModel) -> Vec<MethodDescriptor> {
        match self {
            Matcher::Void => void::synthesize(property),
            Matcher::Boolean => boolean::synthesize(property),
            Matcher::Array => array::synthesize(property),
            Matcher::Iterable(membership) => iterable::synthesize(property, *membership),
            Matcher::Map => map::synthesize(property),
            Matcher::Wrapper => wrapper::synthesize(property),
            Matcher::ClassLiteral => class::synthesize(property),
            Matcher::EnumConstant => enum_constant::synthesize(property),
            Matcher::Default => default::synthesize(property),
        }
    }
}

#[cfg(test)]
pub(crate) fn property(field: syn::Field) -> PropertyModel {
    PropertyModel::from_field(&field).expect("named field")
}
