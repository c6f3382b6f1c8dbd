//! Booleans, bare or boxed: a positive and a negative assertion.

use crate::descriptor::{Check, MethodDescriptor, PropertyRef};
use crate::name::capitalize;
use crate::property::PropertyModel;
use crate::types::{PrimitiveKind, peel};
use syn::Type;

pub(super) fn matches(ty: &Type) -> bool {
    PrimitiveKind::of(peel(ty).0) == Some(PrimitiveKind::Boolean)
}

/// `isX()` fails when the value is `false`; `isNotX()` when it is `true`.
pub(super) fn synthesize(property: &PropertyModel) -> Vec<MethodDescriptor> {
    let name = capitalize(&property.display_name);
    let property = PropertyRef::from(property);

    vec![
        MethodDescriptor::assertion(
            format!("is{name}"),
            Vec::new(),
            Check::IsTrue {
                property: property.clone(),
            },
        ),
        MethodDescriptor::assertion(format!("isNot{name}"), Vec::new(), Check::IsFalse { property }),
    ]
}
