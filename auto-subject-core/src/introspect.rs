//! Discovering the properties of a value type.
//!
//! Two sources are supported: a derive input, which only sees the
//! declaration itself (fields or variants), and a set of parsed items, which
//! also sees the accessor methods of the type's inherent impls.

use crate::property::{Member, PropertyModel};
use crate::types::is_unit;
use crate::{Error, Result};
use syn::ext::IdentExt;
use syn::{Attribute, Data, DeriveInput, Fields, Generics, Ident, ImplItem, ImplItemFn, Item, Type, Visibility};

/// A value type and its properties, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueType {
    pub ident: Ident,
    pub generics: Generics,

    /// Module path the type is reachable through from the generated code.
    pub module: Option<syn::Path>,

    pub properties: Vec<PropertyModel>,
}

/// Looks up value types by path.
pub trait Introspect {
    fn introspect(&self, target: &syn::Path) -> Result<ValueType>;
}

/// The default synthetic-member predicate: names starting with `__`.
pub fn is_synthetic(name: &str) -> bool {
    name.starts_with("__")
}

impl ValueType {
    /// Reads the properties of a derive input: public named fields of a
    /// struct, or every variant of an enum.
    pub fn from_derive(input: &DeriveInput) -> Result<Self> {
        let properties = match &input.data {
            Data::Struct(data) => field_properties(&data.fields, is_synthetic)?,
            Data::Enum(data) => {
                let ty = self_type(&input.ident, &input.generics);
                data.variants
                    .iter()
                    .map(|variant| PropertyModel::from_variant(variant, &ty))
                    .collect()
            }
            Data::Union(_) => {
                return Err(Error::UnsupportedTarget {
                    target: input.ident.to_string(),
                    reason: "unions have no properties",
                });
            }
        };

        Ok(ValueType {
            ident: input.ident.clone(),
            generics: input.generics.clone(),
            module: None,
            properties,
        })
    }
}

/// Introspects value types declared in a list of parsed items.
///
/// Properties come in declaration order: fields (or variants) first, then the
/// accessor methods of every inherent `impl` block for the type. Trait impls
/// and `#[automatically_derived]` impls are ignored.
///
/// Methods returning nothing or `()` are not accessors and are skipped.
/// Fields of type `()` or `Box<()>`, and accessors returning `Box<()>`, are
/// still introspected; the void matcher then gives them no methods.
#[derive(Debug, Clone)]
pub struct SourceIntrospector<'a> {
    items: &'a [Item],
    module: Option<syn::Path>,
    synthetic: fn(&str) -> bool,
}

impl<'a> SourceIntrospector<'a> {
    pub fn new(items: &'a [Item]) -> Self {
        SourceIntrospector {
            items,
            module: None,
            synthetic: is_synthetic,
        }
    }

    /// Sets the module path the items live in.
    ///
    /// A target path with more than one segment overrides this.
    pub fn with_module(mut self, module: syn::Path) -> Self {
        self.module = Some(module);
        self
    }

    /// Replaces the predicate deciding which members are synthetic and
    /// therefore skipped.
    pub fn with_synthetic(mut self, predicate: fn(&str) -> bool) -> Self {
        self.synthetic = predicate;
        self
    }

    fn methods(&self, ident: &Ident) -> Result<Vec<PropertyModel>> {
        let mut properties = Vec::new();

        for item in self.items {
            let Item::Impl(imp) = item else { continue };

            if imp.trait_.is_some() || is_automatically_derived(&imp.attrs) {
                continue;
            }

            if !matches!(&*imp.self_ty, Type::Path(path) if path.path.segments.last().is_some_and(|s| s.ident == *ident))
            {
                continue;
            }

            for item in &imp.items {
                let ImplItem::Fn(method) = item else { continue };
                if self.is_accessor(method) {
                    properties.push(PropertyModel::from_member(Member::Method(method))?);
                }
            }
        }

        Ok(properties)
    }

    fn is_accessor(&self, method: &ImplItemFn) -> bool {
        let sig = &method.sig;

        let by_ref = sig
            .receiver()
            .is_some_and(|receiver| matches!(&*receiver.ty, Type::Reference(r) if r.mutability.is_none()));

        let returns_value = match &sig.output {
            syn::ReturnType::Default => false,
            syn::ReturnType::Type(_, ty) => !is_unit(ty),
        };

        matches!(method.vis, Visibility::Public(_))
            && by_ref
            && sig.inputs.len() == 1
            && sig.generics.params.is_empty()
            && returns_value
            && !(self.synthetic)(&sig.ident.unraw().to_string())
    }

    fn module_for(&self, target: &syn::Path) -> Option<syn::Path> {
        if target.segments.len() < 2 {
            return self.module.clone();
        }

        let segments = target.segments.iter().take(target.segments.len() - 1);
        Some(syn::Path {
            leading_colon: target.leading_colon,
            segments: segments.cloned().collect(),
        })
    }
}

impl Introspect for SourceIntrospector<'_> {
    fn introspect(&self, target: &syn::Path) -> Result<ValueType> {
        let not_found = || Error::TargetNotFound {
            target: crate::types::path_to_string(target),
        };
        let name = target.segments.last().ok_or_else(not_found)?;

        for item in self.items {
            let (ident, generics, mut properties) = match item {
                Item::Struct(item) if item.ident == name.ident => (
                    &item.ident,
                    &item.generics,
                    field_properties(&item.fields, self.synthetic)?,
                ),
                Item::Enum(item) if item.ident == name.ident => {
                    let ty = self_type(&item.ident, &item.generics);
                    let variants = item
                        .variants
                        .iter()
                        .map(|variant| PropertyModel::from_member(Member::Variant { variant, of: &ty }))
                        .collect::<Result<_>>()?;
                    (&item.ident, &item.generics, variants)
                }
                Item::Union(item) if item.ident == name.ident => {
                    return Err(Error::UnsupportedTarget {
                        target: item.ident.to_string(),
                        reason: "unions have no properties",
                    });
                }
                _ => continue,
            };

            properties.extend(self.methods(ident)?);

            return Ok(ValueType {
                ident: ident.clone(),
                generics: generics.clone(),
                module: self.module_for(target),
                properties,
            });
        }

        Err(not_found())
    }
}

/// Public named fields, skipping synthetic ones. Tuple fields have no name
/// to build methods from and are skipped too.
fn field_properties(fields: &Fields, synthetic: fn(&str) -> bool) -> Result<Vec<PropertyModel>> {
    let Fields::Named(fields) = fields else {
        return Ok(Vec::new());
    };

    fields
        .named
        .iter()
        .filter(|field| matches!(field.vis, Visibility::Public(_)))
        .filter(|field| {
            field
                .ident
                .as_ref()
                .is_some_and(|ident| !synthetic(&ident.unraw().to_string()))
        })
        .map(|field| PropertyModel::from_member(Member::Field(field)))
        .collect()
}

fn self_type(ident: &Ident, generics: &Generics) -> Type {
    let (_, ty_generics, _) = generics.split_for_impl();
    syn::parse_quote!(#ident #ty_generics)
}

fn is_automatically_derived(attrs: &[Attribute]) -> bool {
    attrs
        .iter()
        .any(|attr| attr.path().is_ident("automatically_derived"))
}
