//! Optional values and streams, delegated to wrapper subjects.
//!
//! `Option<i32>`, `Option<i64>` and `Option<f64>` get specialized optional
//! subjects; `i32` and `i64` streams get specialized stream subjects. Any
//! other element type uses the generic subject.
//!
//! A stream is collected from a clone of the property when it is read in
//! place, so fields and borrowed results only count as streams when they are
//! an `IntoIter<T>` adapter. Iterator trait objects and `impl Iterator` are
//! streams only when an accessor hands them out by value.

use crate::descriptor::{MethodDescriptor, SubjectType, WrapperKind};
use crate::name::decapitalize;
use crate::property::{Access, PropertyModel};
use crate::types::{generic_args, is_reference, iterator_item, peel, type_to_string};
use syn::Type;

fn optional(ty: &Type) -> Option<&Type> {
    match generic_args(peel(ty).0, &["Option"])?.as_slice() {
        [element] => Some(*element),
        _ => None,
    }
}

/// An `IntoIter<T>` adapter, or `impl Iterator<Item = T>` and
/// `Box<dyn Iterator<Item = T>>` returned by value from an accessor.
fn stream(property: &PropertyModel) -> Option<&Type> {
    let ty = &property.ty;
    let inner = peel(ty).0;
    if let [element] = generic_args(inner, &["IntoIter"]).unwrap_or_default().as_slice() {
        return Some(*element);
    }

    let owned = matches!(property.access, Access::Call(_)) && !is_reference(ty);
    if owned { iterator_item(inner) } else { None }
}

/// Exact element types only: `Option<u32>` stays generic.
fn kind(element: &Type, double: bool) -> WrapperKind {
    match type_to_string(element).as_str() {
        "i32" => WrapperKind::Int,
        "i64" => WrapperKind::Long,
        "f64" if double => WrapperKind::Double,
        _ => WrapperKind::Generic,
    }
}

pub(super) fn matches(property: &PropertyModel) -> bool {
    optional(&property.ty).is_some() || stream(property).is_some()
}

pub(super) fn synthesize(property: &PropertyModel) -> Vec<MethodDescriptor> {
    let subject = if let Some(element) = optional(&property.ty) {
        SubjectType::Optional(kind(element, true), element.clone())
    } else if let Some(element) = stream(property) {
        SubjectType::Stream(kind(element, false), element.clone())
    } else {
        return Vec::new();
    };

    vec![MethodDescriptor::delegate(
        decapitalize(&property.display_name),
        property,
        subject,
    )]
}
