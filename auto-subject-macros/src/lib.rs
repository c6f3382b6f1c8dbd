//! Procedural macro implementation for auto-subject.
//!
//! This crate only wires `#[derive(Subject)]` to `auto-subject-core`. Users
//! should depend on the main `auto-subject` crate, which re-exports the
//! derive alongside the runtime the generated code calls into.
//!
//! # Architecture Overview
//!
//! 1. **Configure**: read `#[subject(...)]` from the derive input
//! 2. **Introspect**: collect the public fields or variants
//! 3. **Generate**: classify every property and describe the subject
//! 4. **Render**: emit the subject `struct` and its `impl`

use auto_subject_core::config::SubjectConfig;
use auto_subject_core::introspect::ValueType;
use auto_subject_core::matcher::Membership;
use auto_subject_core::pipeline::Pipeline;
use auto_subject_core::render;
use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derives an assertion subject for a struct or enum.
///
/// The subject is named `Auto{Type}` unless `#[subject(prefix = "..",
/// suffix = "..")]` says otherwise, and borrows the value it checks:
///
/// ```rust
/// use auto_subject::{Subject, assert_about};
///
/// #[derive(Subject)]
/// pub struct User {
///     pub name: String,
///     pub is_active: bool,
/// }
///
/// let user = User { name: "Alice".into(), is_active: true };
/// let subject = assert_about(AutoUser::user()).that(&user);
/// subject.has_name("Alice");
/// subject.is_active();
/// ```
///
/// Collection properties also get `has_x` / `does_not_have_x` membership
/// checks.
///
/// # Errors
///
/// Compilation fails when the attribute is malformed, when the prefix or
/// suffix would not produce a valid type name, when two properties would
/// produce the same method, or when the input is a union.
#[proc_macro_derive(Subject, attributes(subject))]
pub fn derive_subject(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let config = SubjectConfig::from_attributes(&input.attrs)?.unwrap_or_default();

    if let Some(target) = &config.target {
        return Err(syn::Error::new_spanned(
            target,
            "`target` is not supported by `#[derive(Subject)]`; the subject is always generated for the annotated type",
        ));
    }

    if config.prefix.is_empty() && config.suffix.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "`prefix` and `suffix` cannot both be empty; the subject would shadow the value type",
        ));
    }

    let value = ValueType::from_derive(input).map_err(|err| syn::Error::new_spanned(&input.ident, err))?;

    let generated = Pipeline::builder()
        .membership(Membership::ALL)
        .build()
        .generate(&value, &config)
        .map_err(|err| syn::Error::new_spanned(&input.ident, err))?;

    Ok(render::render(&generated))
}
