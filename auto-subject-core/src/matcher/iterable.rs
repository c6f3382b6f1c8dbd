//! Single-element collections: a delegating accessor plus optional
//! membership assertions.

use crate::descriptor::{Check, MethodDescriptor, ParamType, Parameter, PropertyRef, SubjectType};
use crate::matcher::Membership;
use crate::name::{capitalize, decapitalize};
use crate::property::PropertyModel;
use crate::types::{generic_args, peel};
use syn::Type;

const ITERABLES: &[&str] = &[
    "Vec",
    "VecDeque",
    "LinkedList",
    "HashSet",
    "BTreeSet",
    "BinaryHeap",
];

/// The element type, only when the collection has exactly one type argument.
fn element(ty: &Type) -> Option<&Type> {
    match generic_args(peel(ty).0, ITERABLES)?.as_slice() {
        [element] => Some(*element),
        _ => None,
    }
}

pub(super) fn matches(ty: &Type) -> bool {
    element(ty).is_some()
}

pub(super) fn synthesize(property: &PropertyModel, membership: Membership) -> Vec<MethodDescriptor> {
    let Some(element) = element(&property.ty) else {
        return Vec::new();
    };

    let mut methods = vec![MethodDescriptor::delegate(
        decapitalize(&property.display_name),
        property,
        SubjectType::Iterable(element.clone()),
    )];

    let name = capitalize(&property.display_name);
    let expected = || vec![Parameter::new("expected", ParamType::Variadic(element.clone()))];

    if membership.contains {
        methods.push(MethodDescriptor::assertion(
            format!("has{name}"),
            expected(),
            Check::ContainsAll {
                property: PropertyRef::from(property),
                element: element.clone(),
                expected: "expected".to_string(),
            },
        ));
    }

    if membership.does_not_contain {
        methods.push(MethodDescriptor::assertion(
            format!("doesNotHave{name}"),
            expected(),
            Check::ContainsNone {
                property: PropertyRef::from(property),
                element: element.clone(),
                expected: "expected".to_string(),
            },
        ));
    }

    methods
}
