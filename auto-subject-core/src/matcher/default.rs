//! Fallback: an equality assertion against any comparable value.

use crate::descriptor::{Check, MethodDescriptor, ParamType, Parameter, PropertyRef};
use crate::name::capitalize;
use crate::property::PropertyModel;

pub(super) fn matches(_property: &PropertyModel) -> bool {
    true
}

pub(super) fn synthesize(property: &PropertyModel) -> Vec<MethodDescriptor> {
    vec![MethodDescriptor::assertion(
        format!("has{}", capitalize(&property.display_name)),
        vec![Parameter::new(
            "expected",
            ParamType::Expected(property.ty.clone()),
        )],
        Check::Equals {
            property: PropertyRef::from(property),
            expected: "expected".to_string(),
        },
    )]
}
