//! Key/value maps, delegated to a map subject.

use crate::descriptor::{MethodDescriptor, SubjectType};
use crate::name::decapitalize;
use crate::property::PropertyModel;
use crate::types::{generic_args, peel};
use syn::Type;

const MAPS: &[&str] = &["HashMap", "BTreeMap"];

fn entry(ty: &Type) -> Option<(&Type, &Type)> {
    match generic_args(peel(ty).0, MAPS)?.as_slice() {
        [key, value] => Some((*key, *value)),
        _ => None,
    }
}

pub(super) fn matches(ty: &Type) -> bool {
    entry(ty).is_some()
}

pub(super) fn synthesize(property: &PropertyModel) -> Vec<MethodDescriptor> {
    let Some((key, value)) = entry(&property.ty) else {
        return Vec::new();
    };

    vec![MethodDescriptor::delegate(
        decapitalize(&property.display_name),
        property,
        SubjectType::Map {
            key: key.clone(),
            value: value.clone(),
        },
    )]
}
