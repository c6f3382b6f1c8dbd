//! Rendering a [`GeneratedType`] as Rust source.
//!
//! The generated code targets the `auto_subject` runtime crate by absolute
//! path, so it works anywhere the runtime is a dependency. For a value type
//! `User` with default settings the output has this shape:
//!
//! ```text
//! pub struct AutoUser<'subject> {
//!     metadata: ::auto_subject::FailureMetadata,
//!     actual: &'subject User,
//! }
//!
//! impl<'subject> AutoUser<'subject> {
//!     pub fn new(metadata: ::auto_subject::FailureMetadata, actual: &'subject User) -> Self { .. }
//!     pub fn user() -> ::auto_subject::Factory<'subject, User, Self> { Self::new }
//!     pub fn has_name<__E>(&self, expected: __E) where __E: ::auto_subject::__support::EqualTo<String> { .. }
//! }
//! ```

use crate::descriptor::{Check, GeneratedType, MethodDescriptor, PropertyRef, SubjectType, WrapperKind};
use crate::name::to_snake_case;
use crate::property::{Access, VariantShape};
use crate::types::{array_element, is_reference, peel};
use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::visit_mut::{self, VisitMut};
use syn::{Ident, Lifetime, Type, TypeReference, parse_quote};

/// Renders the subject struct and its inherent impl.
pub fn render(generated: &GeneratedType) -> TokenStream {
    let subject = &generated.ident;
    let value_ident = &generated.value.ident;
    let value_path = match &generated.module {
        Some(module) => quote!(#module::#value_ident),
        None => quote!(#value_ident),
    };

    let (_, value_generics, _) = generated.value.generics.split_for_impl();
    let value_ty: Type = parse_quote!(#value_path #value_generics);

    let mut generics = generated.value.generics.clone();
    generics.params.insert(0, parse_quote!('subject));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let params = &generics.params;

    let actual = format_ident!("{}", generated.field.name);
    let constructor = format_ident!("{}", generated.constructor.name);
    let factory = method_ident(&generated.factory.name);

    let cx = Context {
        actual: &actual,
        value_ty: &value_ty,
        value_path: &value_path,
    };
    let methods = generated.methods.iter().map(|method| cx.method(method));

    let doc = format!(" Fluent assertions on [`{value_ident}`].");

    quote! {
        #[doc = #doc]
        pub struct #subject<#params> #where_clause {
            metadata: ::auto_subject::FailureMetadata,
            #actual: &'subject #value_ty,
        }

        #[allow(clippy::needless_lifetimes, clippy::wrong_self_convention)]
        impl #impl_generics #subject #ty_generics #where_clause {
            pub fn #constructor(metadata: ::auto_subject::FailureMetadata, #actual: &'subject #value_ty) -> Self {
                Self { metadata, #actual }
            }

            /// The factory to hand to [`auto_subject::assert_about`].
            pub fn #factory() -> ::auto_subject::Factory<'subject, #value_ty, Self> {
                Self::#constructor
            }

            #(#methods)*
        }
    }
}

/// The snake_case identifier for a descriptor method name, raw when it
/// collides with a keyword.
///
/// Names without a raw form are rejected by the pipeline before rendering.
pub fn method_ident(name: &str) -> Ident {
    let snake = to_snake_case(name);
    if syn::parse_str::<Ident>(&snake).is_ok() {
        Ident::new(&snake, Span::call_site())
    } else {
        Ident::new_raw(&snake, Span::call_site())
    }
}

struct Context<'a> {
    actual: &'a Ident,
    value_ty: &'a Type,
    value_path: &'a TokenStream,
}

impl Context<'_> {
    fn method(&self, method: &MethodDescriptor) -> TokenStream {
        let name = method_ident(&method.name);
        let metadata = quote!(&self.metadata);
        let support = quote!(::auto_subject::__support);

        match &method.body {
            Check::IsTrue { property } | Check::IsFalse { property } => {
                let label = label(property);
                let value = deref(self.read(property), peel(&property.ty).1);
                let check = match &method.body {
                    Check::IsTrue { .. } => quote!(check_true),
                    _ => quote!(check_false),
                };
                quote! {
                    #[track_caller]
                    pub fn #name(&self) {
                        #support::#check(#metadata, #label, #value);
                    }
                }
            }
            Check::Equals { property, expected } => {
                let label = label(property);
                let ty = self.normalize(&property.ty);
                let expected = format_ident!("{}", expected);
                let value = self.read(property);
                quote! {
                    #[track_caller]
                    pub fn #name<__E>(&self, #expected: __E)
                    where
                        __E: #support::EqualTo<#ty>,
                    {
                        #support::check_eq(#metadata, #label, &#value, &#expected);
                    }
                }
            }
            Check::ContainsAll {
                property,
                element,
                expected,
            }
            | Check::ContainsNone {
                property,
                element,
                expected,
            } => {
                let label = label(property);
                let element = self.normalize(element);
                let expected = format_ident!("{}", expected);
                let (items, _) = self.iterate(property);
                let check = match &method.body {
                    Check::ContainsAll { .. } => quote!(check_contains_all),
                    _ => quote!(check_contains_none),
                };
                quote! {
                    #[track_caller]
                    pub fn #name<__E>(&self, #expected: &[__E])
                    where
                        __E: #support::EqualTo<#element>,
                    {
                        #support::#check::<#element, _, _>(#metadata, #label, #items, #expected);
                    }
                }
            }
            Check::IsVariant { property } | Check::IsNotVariant { property } => {
                let label = label(property);
                let pattern = self.variant_pattern(property);
                let expected = matches!(method.body, Check::IsVariant { .. });
                let actual = self.actual;
                quote! {
                    #[track_caller]
                    pub fn #name(&self) {
                        #support::check_variant(
                            #metadata,
                            #label,
                            ::core::matches!(self.#actual, #pattern),
                            #expected,
                        );
                    }
                }
            }
            Check::Delegate { property, subject } => {
                let (ty, construct) = self.delegate(property, subject);
                quote! {
                    pub fn #name(&self) -> #ty {
                        #construct
                    }
                }
            }
        }
    }

    /// Returns the nested subject type and the expression building it.
    fn delegate(&self, property: &PropertyRef, subject: &SubjectType) -> (TokenStream, TokenStream) {
        let metadata = {
            let label = label(property);
            quote!(self.metadata.child(#label))
        };

        match subject {
            SubjectType::PrimitiveArray(_) | SubjectType::ObjectArray(_) => {
                let name = match subject {
                    SubjectType::PrimitiveArray(kind) => format_ident!("{}ArraySubject", kind.name()),
                    _ => format_ident!("ObjectArraySubject"),
                };
                let (items, borrowed) = self.iterate(property);
                let element = array_element(&property.ty).map(|element| self.element(element, borrowed));
                (
                    quote!(::auto_subject::#name<#element>),
                    quote!(::auto_subject::ArraySubject::new(#metadata, #items.collect())),
                )
            }
            SubjectType::Iterable(element) => {
                let (items, borrowed) = self.iterate(property);
                let element = self.element(element, borrowed);
                (
                    quote!(::auto_subject::IterableSubject<#element>),
                    quote!(::auto_subject::IterableSubject::new(#metadata, #items.collect())),
                )
            }
            SubjectType::Map { key, value } => {
                let (entries, borrowed) = self.iterate(property);
                let key = self.element(key, borrowed);
                let value = self.element(value, borrowed);
                (
                    quote!(::auto_subject::MapSubject<#key, #value>),
                    quote!(::auto_subject::MapSubject::new(#metadata, #entries.collect())),
                )
            }
            SubjectType::Optional(kind, element) => {
                let name = format_ident!("{}OptionSubject", kind.name());
                let read = self.read(property);
                let (option, borrowed) = match &property.access {
                    Access::Call(_) if !is_reference(&property.ty) => (deref(read, peel(&property.ty).1), false),
                    _ => (quote!(::core::option::Option::as_ref(&#read)), true),
                };
                let element = self.element(element, borrowed);
                (
                    quote!(::auto_subject::#name<#element>),
                    quote!(::auto_subject::OptionSubject::new(#metadata, #option)),
                )
            }
            SubjectType::Stream(kind, element) => {
                let name = match kind {
                    WrapperKind::Generic => format_ident!("StreamSubject"),
                    _ => format_ident!("{}StreamSubject", kind.name()),
                };
                let read = self.read(property);
                let stream = match &property.access {
                    Access::Call(_) if !is_reference(&property.ty) => read,
                    _ => quote!(#read.clone()),
                };
                let element = self.normalize(element);
                (
                    quote!(::auto_subject::#name<#element>),
                    quote!(::auto_subject::IterableSubject::new(#metadata, ::core::iter::Iterator::collect(#stream))),
                )
            }
            SubjectType::Class => {
                let value = deref(self.read(property), peel(&property.ty).1);
                (
                    quote!(::auto_subject::ClassSubject),
                    quote!(::auto_subject::ClassSubject::new(#metadata, #value)),
                )
            }
        }
    }

    /// An iterator over the elements of a collection property, and whether it
    /// yields references.
    ///
    /// Fields and borrowed accessor results are iterated by reference. Owned
    /// accessor results are consumed, after moving them out of any boxes.
    fn iterate(&self, property: &PropertyRef) -> (TokenStream, bool) {
        let read = self.read(property);

        if matches!(property.access, Access::Field(_)) || is_reference(&property.ty) {
            return (quote!(#read.iter()), true);
        }

        let (inner, boxes) = peel(&property.ty);
        let boxes = match inner {
            Type::Slice(_) => boxes.saturating_sub(1),
            _ => boxes,
        };
        let owned = deref(read, boxes);
        (quote!(::core::iter::IntoIterator::into_iter(#owned)), false)
    }

    fn element(&self, ty: &Type, borrowed: bool) -> Type {
        let ty = self.normalize(ty);
        if borrowed {
            parse_quote!(&'subject #ty)
        } else {
            ty
        }
    }

    fn read(&self, property: &PropertyRef) -> TokenStream {
        let actual = self.actual;
        match &property.access {
            Access::Field(ident) => quote!(self.#actual.#ident),
            Access::Call(ident) => quote!(self.#actual.#ident()),
            Access::Variant { ident, .. } => quote!(self.#actual.#ident),
        }
    }

    fn variant_pattern(&self, property: &PropertyRef) -> TokenStream {
        let path = self.value_path;
        match &property.access {
            Access::Variant { ident, shape } => match shape {
                VariantShape::Unit => quote!(#path::#ident),
                VariantShape::Tuple => quote!(#path::#ident(..)),
                VariantShape::Named => quote!(#path::#ident { .. }),
            },
            _ => quote!(_),
        }
    }

    /// Rewrites a property type so it can be spelled inside the subject's
    /// impl: `Self` becomes the value type, elided lifetimes become
    /// `'subject`.
    fn normalize(&self, ty: &Type) -> Type {
        let mut ty = ty.clone();
        Normalize {
            value_ty: self.value_ty,
        }
        .visit_type_mut(&mut ty);
        ty
    }
}

struct Normalize<'a> {
    value_ty: &'a Type,
}

impl VisitMut for Normalize<'_> {
    fn visit_type_mut(&mut self, ty: &mut Type) {
        if let Type::Path(path) = ty {
            if path.qself.is_none() && path.path.is_ident("Self") {
                *ty = self.value_ty.clone();
                return;
            }
        }
        visit_mut::visit_type_mut(self, ty);
    }

    fn visit_type_reference_mut(&mut self, reference: &mut TypeReference) {
        if reference.lifetime.is_none() {
            reference.lifetime = Some(parse_quote!('subject));
        }
        visit_mut::visit_type_reference_mut(self, reference);
    }

    fn visit_lifetime_mut(&mut self, lifetime: &mut Lifetime) {
        if lifetime.ident == "_" {
            *lifetime = parse_quote!('subject);
        }
    }
}

fn label(property: &PropertyRef) -> String {
    match property.access {
        Access::Call(_) => format!("{}()", property.name),
        Access::Field(_) | Access::Variant { .. } => property.name.clone(),
    }
}

fn deref(expr: TokenStream, count: usize) -> TokenStream {
    (0..count).fold(expr, |expr, _| quote!((*#expr)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SubjectConfig;
    use crate::introspect::{Introspect, SourceIntrospector, ValueType};
    use crate::pipeline::Pipeline;
    use syn::{ImplItem, Item, ItemImpl, ItemStruct};

    fn rendered(input: syn::DeriveInput) -> (ItemStruct, ItemImpl) {
        let value = ValueType::from_derive(&input).unwrap();
        let generated = Pipeline::builder()
            .contains(true)
            .does_not_contain(true)
            .build()
            .generate(&value, &SubjectConfig::default())
            .unwrap();
        split(render(&generated))
    }

    fn split(tokens: TokenStream) -> (ItemStruct, ItemImpl) {
        let file: syn::File = syn::parse2(tokens).expect("rendered code parses");
        let mut items = file.items.into_iter();
        match (items.next(), items.next(), items.next()) {
            (Some(Item::Struct(subject)), Some(Item::Impl(imp)), None) => (subject, imp),
            other => panic!("unexpected items: {other:?}"),
        }
    }

    fn method<'a>(imp: &'a ItemImpl, name: &str) -> &'a syn::ImplItemFn {
        imp.items
            .iter()
            .find_map(|item| match item {
                ImplItem::Fn(method) if method.sig.ident == name => Some(method),
                _ => None,
            })
            .unwrap_or_else(|| panic!("no method `{name}`"))
    }

    fn method_names(imp: &ItemImpl) -> Vec<String> {
        imp.items
            .iter()
            .filter_map(|item| match item {
                ImplItem::Fn(method) => Some(method.sig.ident.to_string()),
                _ => None,
            })
            .collect()
    }

    fn tokens<T: quote::ToTokens>(node: &T) -> String {
        quote!(#node).to_string()
    }

    #[test]
    fn subject_struct_and_constructor() {
        let (subject, imp) = rendered(parse_quote! {
            pub struct User { pub name: String }
        });

        assert_eq!(subject.ident, "AutoUser");
        assert_eq!(subject.generics.params.len(), 1);
        assert_eq!(subject.fields.len(), 2);

        assert_eq!(method_names(&imp), ["new", "user", "has_name"]);
        assert_eq!(
            tokens(&method(&imp, "user").sig.output),
            tokens(&quote!(-> ::auto_subject::Factory<'subject, User, Self>))
        );
    }

    #[test]
    fn boolean_methods_deref_boxes() {
        let (_, imp) = rendered(parse_quote! {
            pub struct Flags { pub is_admin: bool, pub verified: Box<bool> }
        });

        assert_eq!(
            method_names(&imp),
            ["new", "flags", "is_admin", "is_not_admin", "is_verified", "is_not_verified"]
        );

        let body = tokens(&method(&imp, "is_verified").block);
        assert!(body.contains("check_true"), "{body}");
        assert!(body.contains(&tokens(&quote!((*self.actual.verified)))), "{body}");
        assert!(method(&imp, "is_admin").attrs.iter().any(|attr| attr.path().is_ident("track_caller")));
    }

    #[test]
    fn equality_is_generic_over_the_expected_value() {
        let (_, imp) = rendered(parse_quote! {
            pub struct User { pub age: u32 }
        });

        let has_age = method(&imp, "has_age");
        assert_eq!(has_age.sig.generics.params.len(), 1);
        assert_eq!(
            tokens(&has_age.sig.generics.where_clause),
            tokens(&quote!(where __E: ::auto_subject::__support::EqualTo<u32>,))
        );
    }

    #[test]
    fn iterable_delegate_and_membership() {
        let (_, imp) = rendered(parse_quote! {
            pub struct User { pub roles: Vec<Role> }
        });

        assert_eq!(
            method_names(&imp),
            ["new", "user", "roles", "has_roles", "does_not_have_roles"]
        );
        assert_eq!(
            tokens(&method(&imp, "roles").sig.output),
            tokens(&quote!(-> ::auto_subject::IterableSubject<&'subject Role>))
        );

        let body = tokens(&method(&imp, "does_not_have_roles").block);
        assert!(body.contains("check_contains_none"), "{body}");
    }

    #[test]
    fn arrays_use_component_kind() {
        let (_, imp) = rendered(parse_quote! {
            pub struct Packet { pub bytes: [u8; 4], pub names: Vec<String>, pub samples: Box<[f64]> }
        });

        assert_eq!(
            tokens(&method(&imp, "bytes").sig.output),
            tokens(&quote!(-> ::auto_subject::ByteArraySubject<&'subject u8>))
        );
        assert_eq!(
            tokens(&method(&imp, "samples").sig.output),
            tokens(&quote!(-> ::auto_subject::DoubleArraySubject<&'subject f64>))
        );
    }

    #[test]
    fn wrappers_pick_the_specialized_subject() {
        let (_, imp) = rendered(parse_quote! {
            pub struct Account {
                pub limit: Option<i64>,
                pub nickname: Option<String>,
                pub pending: std::vec::IntoIter<i32>,
            }
        });

        assert_eq!(
            tokens(&method(&imp, "limit").sig.output),
            tokens(&quote!(-> ::auto_subject::LongOptionSubject<&'subject i64>))
        );
        assert_eq!(
            tokens(&method(&imp, "nickname").sig.output),
            tokens(&quote!(-> ::auto_subject::OptionSubject<&'subject String>))
        );
        assert_eq!(
            tokens(&method(&imp, "pending").sig.output),
            tokens(&quote!(-> ::auto_subject::IntStreamSubject<i32>))
        );
    }

    #[test]
    fn enum_identity_checks() {
        let (subject, imp) = rendered(parse_quote! {
            pub enum Direction { NORTH, Moved(i32), Resized { width: u32 } }
        });

        assert_eq!(subject.ident, "AutoDirection");
        assert_eq!(
            method_names(&imp),
            [
                "new",
                "direction",
                "is_north",
                "is_not_north",
                "is_moved",
                "is_not_moved",
                "is_resized",
                "is_not_resized",
            ]
        );

        let body = tokens(&method(&imp, "is_not_moved").block);
        assert!(body.contains(&tokens(&quote!(Direction::Moved(..)))), "{body}");
        assert!(body.contains("false"), "{body}");
    }

    #[test]
    fn generics_get_the_subject_lifetime_first() {
        let (subject, imp) = rendered(parse_quote! {
            pub struct Page<'a, T: Clone> where T: Default { pub items: Vec<T>, pub title: &'a str }
        });

        assert_eq!(
            tokens(&subject.generics.params),
            tokens(&quote!('subject, 'a, T: Clone))
        );
        assert!(subject.generics.where_clause.is_some());
        assert_eq!(
            tokens(&imp.self_ty),
            tokens(&quote!(AutoPage<'subject, 'a, T>))
        );
    }

    #[test]
    fn accessor_results_are_normalized() {
        let file: syn::File = parse_quote! {
            pub struct Node { pub id: u32 }

            impl Node {
                pub fn getName(&self) -> &str { "" }
                pub fn children(&self) -> Vec<Self> { Vec::new() }
                pub fn tags(&self) -> &[String] { &[] }
            }
        };
        let value = SourceIntrospector::new(&file.items)
            .with_module(parse_quote!(crate::tree))
            .introspect(&parse_quote!(Node))
            .unwrap();
        let generated = Pipeline::standard()
            .generate(&value, &SubjectConfig::default())
            .unwrap();
        let (subject, imp) = split(render(&generated));

        assert_eq!(
            tokens(&subject.fields.iter().nth(1).unwrap().ty),
            tokens(&quote!(&'subject crate::tree::Node))
        );
        assert_eq!(
            tokens(&method(&imp, "has_name").sig.generics.where_clause),
            tokens(&quote!(where __E: ::auto_subject::__support::EqualTo<&'subject str>,))
        );
        assert_eq!(
            tokens(&method(&imp, "children").sig.output),
            tokens(&quote!(-> ::auto_subject::IterableSubject<crate::tree::Node>))
        );
        assert_eq!(
            tokens(&method(&imp, "tags").sig.output),
            tokens(&quote!(-> ::auto_subject::ObjectArraySubject<&'subject String>))
        );

        let body = tokens(&method(&imp, "has_name").block);
        assert!(body.contains("\"getName()\""), "{body}");
    }

    #[test]
    fn custom_prefix_and_suffix() {
        let value = ValueType::from_derive(&parse_quote! {
            pub struct User { pub id: u64 }
        })
        .unwrap();
        let config = SubjectConfig {
            prefix: String::new(),
            suffix: "Subject".into(),
            ..SubjectConfig::default()
        };
        let generated = Pipeline::standard().generate(&value, &config).unwrap();
        let (subject, _) = split(render(&generated));

        assert_eq!(subject.ident, "UserSubject");
    }

    #[test]
    fn keyword_method_names_are_raw() {
        assert_eq!(method_ident("type").to_string(), "r#type");
        assert_eq!(method_ident("hasType").to_string(), "has_type");
        assert_eq!(method_ident("isNotAdmin").to_string(), "is_not_admin");
    }
}
