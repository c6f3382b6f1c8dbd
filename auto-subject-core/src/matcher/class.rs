//! `TypeId` values, delegated to a class subject.

use crate::descriptor::{MethodDescriptor, SubjectType};
use crate::name::decapitalize;
use crate::property::PropertyModel;
use crate::types::{generic_args, peel};
use syn::Type;

pub(super) fn matches(ty: &Type) -> bool {
    generic_args(peel(ty).0, &["TypeId"]).is_some_and(|args| args.is_empty())
}

pub(super) fn synthesize(property: &PropertyModel) -> Vec<MethodDescriptor> {
    vec![MethodDescriptor::delegate(
        decapitalize(&property.display_name),
        property,
        SubjectType::Class,
    )]
}
