//! Properties: the uniform view of fields, accessors and enum variants.

use crate::name::canonicalize;
use crate::{Error, Result};
use syn::ext::IdentExt;
use syn::{Fields, Ident, ImplItem, ImplItemFn, Type};

/// How a property's value is read from an instance of the value type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Access {
    /// `value.name`
    Field(Ident),

    /// `value.name()`
    Call(Ident),

    /// The property *is* one variant of the value enum.
    Variant { ident: Ident, shape: VariantShape },
}

/// Shape of an enum variant, needed to write a pattern that matches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantShape {
    /// `North`
    Unit,
    /// `Moved(..)`
    Tuple,
    /// `Resized { .. }`
    Named,
}

impl From<&Fields> for VariantShape {
    fn from(fields: &Fields) -> Self {
        match fields {
            Fields::Unit => VariantShape::Unit,
            Fields::Unnamed(_) => VariantShape::Tuple,
            Fields::Named(_) => VariantShape::Named,
        }
    }
}

/// A member handed to [`PropertyModel::from_member`].
///
/// Introspectors filter members before converting them, so anything that is
/// not a property arriving here is a bug in the introspector.
#[derive(Debug, Clone, Copy)]
pub enum Member<'a> {
    Field(&'a syn::Field),
    Method(&'a ImplItemFn),
    Variant {
        variant: &'a syn::Variant,
        of: &'a Type,
    },
    ImplItem(&'a ImplItem),
}

/// One assertable property of a value type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyModel {
    /// Declared type of the property.
    pub ty: Type,

    /// Member name as written, without any `r#` prefix.
    pub raw_name: String,

    /// Canonical name the assertion methods are built from.
    pub display_name: String,

    /// How the value is read.
    pub access: Access,
}

impl PropertyModel {
    pub fn new(ty: Type, raw_name: impl Into<String>, access: Access) -> Self {
        let raw_name = raw_name.into();
        let display_name = canonicalize(&raw_name);
        PropertyModel {
            ty,
            raw_name,
            display_name,
            access,
        }
    }

    /// Converts any member, failing loudly on members that are not
    /// properties.
    pub fn from_member(member: Member<'_>) -> Result<Self> {
        match member {
            Member::Field(field) => Self::from_field(field),
            Member::Method(method) => Self::from_method(method),
            Member::Variant { variant, of } => Ok(Self::from_variant(variant, of)),
            Member::ImplItem(ImplItem::Fn(method)) => Self::from_method(method),
            Member::ImplItem(item) => {
                let (kind, name) = match item {
                    ImplItem::Const(item) => ("associated const", item.ident.to_string()),
                    ImplItem::Type(item) => ("associated type", item.ident.to_string()),
                    ImplItem::Macro(item) => ("macro invocation", path_name(&item.mac.path)),
                    _ => ("impl item", String::new()),
                };
                Err(Error::UnsupportedMember { kind, name })
            }
        }
    }

    pub fn from_field(field: &syn::Field) -> Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(Error::UnsupportedMember {
                kind: "unnamed field",
                name: String::new(),
            });
        };

        Ok(Self::new(
            field.ty.clone(),
            ident.unraw().to_string(),
            Access::Field(ident.clone()),
        ))
    }

    /// Converts a zero-argument `&self` accessor.
    ///
    /// A method without a return type becomes a `()` property, which the
    /// void matcher then drops.
    pub fn from_method(method: &ImplItemFn) -> Result<Self> {
        let sig = &method.sig;
        let name = sig.ident.unraw().to_string();

        let Some(receiver) = sig.receiver() else {
            return Err(Error::UnsupportedMember {
                kind: "associated function",
                name,
            });
        };

        if !matches!(&*receiver.ty, Type::Reference(r) if r.mutability.is_none()) {
            return Err(Error::UnsupportedMember {
                kind: "method without a `&self` receiver",
                name,
            });
        }

        if sig.inputs.len() > 1 {
            return Err(Error::UnsupportedMember {
                kind: "method with parameters",
                name,
            });
        }

        if !sig.generics.params.is_empty() {
            return Err(Error::UnsupportedMember {
                kind: "generic method",
                name,
            });
        }

        let ty = match &sig.output {
            syn::ReturnType::Default => syn::parse_quote!(()),
            syn::ReturnType::Type(_, ty) => (**ty).clone(),
        };

        Ok(Self::new(ty, name, Access::Call(sig.ident.clone())))
    }

    /// Converts an enum variant; `of` is the enum type itself.
    pub fn from_variant(variant: &syn::Variant, of: &Type) -> Self {
        Self::new(
            of.clone(),
            variant.ident.unraw().to_string(),
            Access::Variant {
                ident: variant.ident.clone(),
                shape: VariantShape::from(&variant.fields),
            },
        )
    }

    /// Returns `true` for properties derived from enum variants.
    pub fn is_enum_constant(&self) -> bool {
        matches!(self.access, Access::Variant { .. })
    }
}

fn path_name(path: &syn::Path) -> String {
    quote::quote! { #path }.to_string()
}
