//! Enum variants: identity assertions against one variant.

use crate::descriptor::{Check, MethodDescriptor, PropertyRef};
use crate::name::capitalize;
use crate::property::PropertyModel;

pub(super) fn matches(property: &PropertyModel) -> bool {
    property.is_enum_constant()
}

/// `isX()` fails unless the value is variant `X`; `isNotX()` fails if it is.
pub(super) fn synthesize(property: &PropertyModel) -> Vec<MethodDescriptor> {
    let name = capitalize(&property.display_name);
    let property = PropertyRef::from(property);

    vec![
        MethodDescriptor::assertion(
            format!("is{name}"),
            Vec::new(),
            Check::IsVariant {
                property: property.clone(),
            },
        ),
        MethodDescriptor::assertion(
            format!("isNot{name}"),
            Vec::new(),
            Check::IsNotVariant { property },
        ),
    ]
}
