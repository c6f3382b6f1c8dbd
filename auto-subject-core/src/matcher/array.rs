//! Fixed arrays and slices, delegated to a subject keyed by component kind.

use crate::descriptor::{MethodDescriptor, SubjectType};
use crate::name::decapitalize;
use crate::property::PropertyModel;
use crate::types::{PrimitiveKind, array_element};
use syn::Type;

pub(super) fn matches(ty: &Type) -> bool {
    array_element(ty).is_some()
}

pub(super) fn synthesize(property: &PropertyModel) -> Vec<MethodDescriptor> {
    let Some(element) = array_element(&property.ty) else {
        return Vec::new();
    };

    let subject = match PrimitiveKind::of(element) {
        Some(kind) => SubjectType::PrimitiveArray(kind),
        None => SubjectType::ObjectArray(element.clone()),
    };

    vec![MethodDescriptor::delegate(
        decapitalize(&property.display_name),
        property,
        subject,
    )]
}
