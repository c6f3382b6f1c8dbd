//! Structural queries over `syn::Type`.
//!
//! Matchers only ever look at the shape of a declared type; nothing here
//! resolves names, so `HashMap` means "a path whose last segment is
//! `HashMap`" no matter where it was imported from.

use std::fmt;
use syn::{GenericArgument, PathArguments, PathSegment, Type, TypeParamBound};

/// Component kinds that get a dedicated array subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
}

impl PrimitiveKind {
    /// Classifies a primitive type by name.
    pub fn of(ty: &Type) -> Option<Self> {
        let ident = single_ident(ty)?;
        let kind = match ident.to_string().as_str() {
            "bool" => PrimitiveKind::Boolean,
            "i8" | "u8" => PrimitiveKind::Byte,
            "i16" | "u16" => PrimitiveKind::Short,
            "i32" | "u32" => PrimitiveKind::Int,
            "i64" | "u64" | "i128" | "u128" | "isize" | "usize" => PrimitiveKind::Long,
            "char" => PrimitiveKind::Char,
            "f32" => PrimitiveKind::Float,
            "f64" => PrimitiveKind::Double,
            _ => return None,
        };
        Some(kind)
    }

    /// The name used for the kind's subject, e.g. `Int` for `IntArraySubject`.
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "Boolean",
            PrimitiveKind::Byte => "Byte",
            PrimitiveKind::Short => "Short",
            PrimitiveKind::Int => "Int",
            PrimitiveKind::Long => "Long",
            PrimitiveKind::Char => "Char",
            PrimitiveKind::Float => "Float",
            PrimitiveKind::Double => "Double",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Removes parentheses and invisible groups.
pub(crate) fn ungroup(mut ty: &Type) -> &Type {
    loop {
        match ty {
            Type::Paren(paren) => ty = &paren.elem,
            Type::Group(group) => ty = &group.elem,
            _ => return ty,
        }
    }
}

/// Removes references, boxes and grouping.
///
/// Returns the innermost type together with the number of dereferences
/// needed to reach it from a value of the outer type.
pub(crate) fn peel(ty: &Type) -> (&Type, usize) {
    let mut ty = ungroup(ty);
    let mut derefs = 0;

    loop {
        if let Type::Reference(reference) = ty {
            ty = ungroup(&reference.elem);
            derefs += 1;
            continue;
        }

        if let Some([inner]) = generic_args(ty, &["Box"]).as_deref() {
            ty = ungroup(*inner);
            derefs += 1;
            continue;
        }

        return (ty, derefs);
    }
}

/// Returns `true` if the type is a reference after removing grouping.
pub(crate) fn is_reference(ty: &Type) -> bool {
    matches!(ungroup(ty), Type::Reference(_))
}

/// `()`
pub(crate) fn is_unit(ty: &Type) -> bool {
    matches!(ungroup(ty), Type::Tuple(tuple) if tuple.elems.is_empty())
}

/// The last segment of a plain path type (no qualified self).
pub(crate) fn last_segment(ty: &Type) -> Option<&PathSegment> {
    match ungroup(ty) {
        Type::Path(path) if path.qself.is_none() => path.path.segments.last(),
        _ => None,
    }
}

/// A path type made of a single argument-less identifier, like `bool`.
fn single_ident(ty: &Type) -> Option<&syn::Ident> {
    match ungroup(ty) {
        Type::Path(path) if path.qself.is_none() => path.path.get_ident(),
        _ => None,
    }
}

/// If the type's last segment is one of `names`, returns its type arguments.
///
/// Lifetime and const arguments are skipped; an argument-less path yields an
/// empty list.
pub(crate) fn generic_args<'a>(ty: &'a Type, names: &[&str]) -> Option<Vec<&'a Type>> {
    let segment = last_segment(ty)?;
    if !names.iter().any(|name| segment.ident == name) {
        return None;
    }

    let args = match &segment.arguments {
        PathArguments::AngleBracketed(args) => args
            .args
            .iter()
            .filter_map(|arg| match arg {
                GenericArgument::Type(ty) => Some(ty),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };

    Some(args)
}

/// The element type of `[T; N]`, `[T]`, `&[T]` or `Box<[T]>`.
pub(crate) fn array_element(ty: &Type) -> Option<&Type> {
    match peel(ty).0 {
        Type::Array(array) => Some(&array.elem),
        Type::Slice(slice) => Some(&slice.elem),
        _ => None,
    }
}

/// The `Item` of `impl Iterator<Item = T>` or `dyn Iterator<Item = T>`.
pub(crate) fn iterator_item(ty: &Type) -> Option<&Type> {
    let bounds = match ungroup(ty) {
        Type::ImplTrait(imp) => &imp.bounds,
        Type::TraitObject(obj) => &obj.bounds,
        _ => return None,
    };

    bounds.iter().find_map(|bound| {
        let TypeParamBound::Trait(bound) = bound else {
            return None;
        };
        let segment = bound.path.segments.last()?;
        if !ITERATOR_TRAITS.iter().any(|name| segment.ident == name) {
            return None;
        }
        let PathArguments::AngleBracketed(args) = &segment.arguments else {
            return None;
        };
        args.args.iter().find_map(|arg| match arg {
            GenericArgument::AssocType(assoc) if assoc.ident == "Item" => Some(&assoc.ty),
            _ => None,
        })
    })
}

const ITERATOR_TRAITS: &[&str] = &["Iterator", "DoubleEndedIterator", "ExactSizeIterator"];

/// Renders a type the way it would be written in source, for messages.
pub(crate) fn type_to_string(ty: &Type) -> String {
    quote::quote! { #ty }.to_string()
}

/// Renders a path without token spacing: `crate::model::User`.
pub(crate) fn path_to_string(path: &syn::Path) -> String {
    let segments: Vec<String> = path
        .segments
        .iter()
        .map(|segment| segment.ident.to_string())
        .collect();
    let prefix = if path.leading_colon.is_some() { "::" } else { "" };
    format!("{prefix}{}", segments.join("::"))
}
