//! Engine behind `#[derive(Subject)]`.
//!
//! Given a value type (a struct with public fields and accessor methods, or an
//! enum) this crate works out which assertion methods its companion subject
//! should have, and renders them as Rust code.
//!
//! Generation runs in one direction:
//!
//! 1. **Introspect** ([`introspect`]): read the value type into an ordered
//!    list of [`PropertyModel`](property::PropertyModel)s.
//! 2. **Classify** ([`pipeline`], [`matcher`]): for each property, the first
//!    matcher that claims its type synthesizes the property's methods.
//! 3. **Describe** ([`descriptor`]): the methods, constructor and factory of
//!    the subject, independent of how they are spelled.
//! 4. **Render** ([`render`]): turn the description into a `struct` and
//!    `impl` targeting the `auto_subject` runtime.
//!
//! # Example
//!
//! ```
//! use auto_subject_core::config::SubjectConfig;
//! use auto_subject_core::introspect::ValueType;
//! use auto_subject_core::pipeline::Pipeline;
//!
//! let input: syn::DeriveInput = syn::parse_quote! {
//!     pub struct User {
//!         pub name: String,
//!         pub is_admin: bool,
//!     }
//! };
//!
//! let value = ValueType::from_derive(&input).unwrap();
//! let generated = Pipeline::standard()
//!     .generate(&value, &SubjectConfig::default())
//!     .unwrap();
//!
//! assert_eq!(generated.ident, "AutoUser");
//! assert_eq!(generated.method_names(), ["hasName", "isAdmin", "isNotAdmin"]);
//! ```
//!
//! Everything here is synchronous and free of shared state: the same input
//! always produces the same output.

pub mod config;
pub mod descriptor;
mod error;
pub mod introspect;
pub mod matcher;
pub mod name;
pub mod pipeline;
pub mod property;
pub mod render;
pub mod types;

pub use error::{DeclarationError, Error, Result};
