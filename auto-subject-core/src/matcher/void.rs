//! `()` and `Box<()>`: accessors that carry nothing to assert on.

use crate::descriptor::MethodDescriptor;
use crate::property::PropertyModel;
use crate::types::{is_unit, peel};
use syn::Type;

pub(super) fn matches(ty: &Type) -> bool {
    is_unit(peel(ty).0)
}

pub(super) fn synthesize(_property: &PropertyModel) -> Vec<MethodDescriptor> {
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::property;
    use syn::parse_quote;

    #[test]
    fn matches_unit_and_boxed_unit() {
        assert!(matches(&parse_quote!(())));
        assert!(matches(&parse_quote!(Box<()>)));
        assert!(matches(&parse_quote!(&())));
        assert!(!matches(&parse_quote!((u8, u8))));
        assert!(!matches(&parse_quote!(PhantomData<()>)));
    }

    #[test]
    fn generates_nothing() {
        let property = property(parse_quote!(pub marker: Box<()>));
        assert!(synthesize(&property).is_empty());
    }
}
