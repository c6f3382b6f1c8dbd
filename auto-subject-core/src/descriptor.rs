//! Renderer-agnostic description of a generated subject.
//!
//! The pipeline produces these values; a renderer turns them into source.
//! Nothing in here knows how the final code is spelled, only what members
//! exist and what each assertion checks.

use crate::property::{Access, PropertyModel};
use crate::types::PrimitiveKind;
use syn::{Generics, Ident, Type};

/// The complete description of one generated subject type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedType {
    /// Module the value type lives in, when known.
    pub module: Option<syn::Path>,

    /// Name of the subject: prefix + value name + suffix.
    pub ident: Ident,

    /// The value type the subject wraps.
    pub value: ValueRef,

    /// The private field holding the wrapped value.
    pub field: FieldDescriptor,

    pub constructor: ConstructorDescriptor,

    pub factory: FactoryDescriptor,

    /// Assertion methods in property discovery order.
    pub methods: Vec<MethodDescriptor>,
}

impl GeneratedType {
    /// Looks up a generated method by name.
    pub fn method(&self, name: &str) -> Option<&MethodDescriptor> {
        self.methods.iter().find(|method| method.name == name)
    }

    /// Names of all generated methods, in order.
    pub fn method_names(&self) -> Vec<&str> {
        self.methods.iter().map(|method| method.name.as_str()).collect()
    }
}

/// A value type: its name and generic parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueRef {
    pub ident: Ident,
    pub generics: Generics,
}

impl ValueRef {
    /// The value type as it is written in a type position, e.g. `Page<T>`.
    pub fn ty(&self) -> Type {
        let ident = &self.ident;
        let (_, ty_generics, _) = self.generics.split_for_impl();
        syn::parse_quote!(#ident #ty_generics)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub ty: Type,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorDescriptor {
    pub name: String,
    pub params: Vec<Parameter>,
}

/// The static factory producing subjects from a failure context and value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactoryDescriptor {
    pub name: String,
}

/// One generated assertion method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    /// Lower-camel method name, e.g. `isNotAdmin`.
    pub name: String,
    pub params: Vec<Parameter>,
    pub returns: ReturnType,
    pub body: Check,
}

impl MethodDescriptor {
    /// A method that asserts and returns nothing.
    pub fn assertion(name: impl Into<String>, params: Vec<Parameter>, body: Check) -> Self {
        MethodDescriptor {
            name: name.into(),
            params,
            returns: ReturnType::Unit,
            body,
        }
    }

    /// A zero-argument method handing the property to a nested subject.
    pub fn delegate(name: impl Into<String>, property: &PropertyModel, subject: SubjectType) -> Self {
        MethodDescriptor {
            name: name.into(),
            params: Vec::new(),
            returns: ReturnType::Subject(subject.clone()),
            body: Check::Delegate {
                property: PropertyRef::from(property),
                subject,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub ty: ParamType,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: ParamType) -> Self {
        Parameter {
            name: name.into(),
            ty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamType {
    /// The opaque failure context subjects are constructed with.
    FailureMetadata,

    /// A value of exactly this type.
    Value(Type),

    /// Any value comparable for equality with this type.
    Expected(Type),

    /// Any number of elements of this type.
    Variadic(Type),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnType {
    Unit,
    Subject(SubjectType),
}

/// Nested subjects a delegating method can return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubjectType {
    PrimitiveArray(PrimitiveKind),
    ObjectArray(Type),
    Iterable(Type),
    Map { key: Type, value: Type },
    Optional(WrapperKind, Type),
    Stream(WrapperKind, Type),
    Class,
}

/// Specialization of an optional or stream subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WrapperKind {
    Generic,
    Int,
    Long,
    Double,
}

impl WrapperKind {
    /// Prefix of the specialized subject name; empty for the generic one.
    pub fn name(self) -> &'static str {
        match self {
            WrapperKind::Generic => "",
            WrapperKind::Int => "Int",
            WrapperKind::Long => "Long",
            WrapperKind::Double => "Double",
        }
    }
}

/// The property a check reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRef {
    /// Member name as written; used to describe failures.
    pub name: String,
    pub access: Access,
    pub ty: Type,
}

impl From<&PropertyModel> for PropertyRef {
    fn from(property: &PropertyModel) -> Self {
        PropertyRef {
            name: property.raw_name.clone(),
            access: property.access.clone(),
            ty: property.ty.clone(),
        }
    }
}

/// What a generated method checks at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Check {
    /// Fails unless the property equals the `expected` parameter.
    Equals {
        property: PropertyRef,
        expected: String,
    },

    /// Fails if the property is `false`.
    IsTrue { property: PropertyRef },

    /// Fails if the property is `true`.
    IsFalse { property: PropertyRef },

    /// Hands the property to a nested subject.
    Delegate {
        property: PropertyRef,
        subject: SubjectType,
    },

    /// Fails unless every element of the `expected` parameter is present.
    ContainsAll {
        property: PropertyRef,
        element: Type,
        expected: String,
    },

    /// Fails if any element of the `expected` parameter is present.
    ContainsNone {
        property: PropertyRef,
        element: Type,
        expected: String,
    },

    /// Fails unless the value is this very variant.
    IsVariant { property: PropertyRef },

    /// Fails if the value is this very variant.
    IsNotVariant { property: PropertyRef },
}

impl Check {
    /// The property this check reads.
    pub fn property(&self) -> &PropertyRef {
        match self {
            Check::Equals { property, .. }
            | Check::IsTrue { property }
            | Check::IsFalse { property }
            | Check::Delegate { property, .. }
            | Check::ContainsAll { property, .. }
            | Check::ContainsNone { property, .. }
            | Check::IsVariant { property }
            | Check::IsNotVariant { property } => property,
        }
    }
}
