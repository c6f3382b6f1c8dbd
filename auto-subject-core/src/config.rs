//! The `#[subject(...)]` attribute.

use syn::parse::{Parse, ParseStream};
use syn::{Attribute, Ident, LitStr, Meta, Token};

/// Name of the attribute carrying subject configuration.
pub const ATTRIBUTE: &str = "subject";

/// Prefix used when the attribute does not set one.
pub const DEFAULT_PREFIX: &str = "Auto";

/// Per-declaration generation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectConfig {
    /// The value type to generate a subject for. `None` means the annotated
    /// declaration itself.
    pub target: Option<syn::Path>,

    /// Prepended to the value type's name.
    pub prefix: String,

    /// Appended to the value type's name.
    pub suffix: String,
}

impl Default for SubjectConfig {
    fn default() -> Self {
        SubjectConfig {
            target: None,
            prefix: DEFAULT_PREFIX.to_string(),
            suffix: String::new(),
        }
    }
}

impl SubjectConfig {
    /// Reads the configuration from a declaration's attributes.
    ///
    /// Returns `Ok(None)` when no `#[subject]` attribute is present. A bare
    /// `#[subject]` yields the defaults.
    pub fn from_attributes(attrs: &[Attribute]) -> syn::Result<Option<Self>> {
        let mut found = None;

        for attr in attrs {
            if !attr.path().is_ident(ATTRIBUTE) {
                continue;
            }

            if found.is_some() {
                return Err(syn::Error::new_spanned(
                    attr,
                    "duplicate `#[subject]` attribute",
                ));
            }

            let config = match &attr.meta {
                Meta::Path(_) => SubjectConfig::default(),
                _ => attr.parse_args::<SubjectConfig>()?,
            };
            found = Some(config);
        }

        Ok(found)
    }
}

impl Parse for SubjectConfig {
    /// Parses the attribute arguments.
    ///
    /// # Example Input
    /// ```text
    /// target = crate::model::User, prefix = "Check", suffix = "Subject"
    /// ```
    ///
    /// Every key is optional and may appear at most once.
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut config = SubjectConfig::default();
        let mut prefix_set = false;
        let mut suffix_set = false;

        while !input.is_empty() {
            let key: Ident = input.parse()?;
            let _: Token![=] = input.parse()?;

            let duplicate = match key.to_string().as_str() {
                "target" => {
                    let seen = config.target.is_some();
                    config.target = Some(input.parse()?);
                    seen
                }
                "prefix" => {
                    config.prefix = input.parse::<LitStr>()?.value();
                    std::mem::replace(&mut prefix_set, true)
                }
                "suffix" => {
                    config.suffix = input.parse::<LitStr>()?.value();
                    std::mem::replace(&mut suffix_set, true)
                }
                other => {
                    return Err(syn::Error::new(
                        key.span(),
                        format!("unknown `subject` option `{other}`; expected `target`, `prefix` or `suffix`"),
                    ));
                }
            };

            if duplicate {
                return Err(syn::Error::new(
                    key.span(),
                    format!("duplicate `subject` option `{key}`"),
                ));
            }

            if input.is_empty() {
                break;
            }
            let _: Token![,] = input.parse()?;
        }

        Ok(config)
    }
}
