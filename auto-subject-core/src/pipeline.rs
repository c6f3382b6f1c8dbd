//! The classification pipeline.
//!
//! For every property of a value type the pipeline asks its matchers, in
//! order, whether they claim the property. The first one that does
//! synthesizes the property's methods. The methods of all properties, in
//! discovery order, make up the generated subject.

use crate::config::SubjectConfig;
use crate::descriptor::{
    ConstructorDescriptor, FactoryDescriptor, FieldDescriptor, GeneratedType, ParamType,
    Parameter, ValueRef,
};
use crate::introspect::{Introspect, ValueType};
use crate::matcher::{Matcher, Membership};
use crate::name::{canonicalize, is_identifier, is_identifier_part, is_method_name, to_snake_case};
use crate::property::PropertyModel;
use crate::types::type_to_string;
use crate::{DeclarationError, Error, Result};
use std::collections::HashMap;
use syn::ext::IdentExt;
use syn::{Ident, Item};

/// Name of the generated constructor.
pub const CONSTRUCTOR: &str = "new";

/// Name of the generated field holding the value under test.
pub const ACTUAL: &str = "actual";

/// An ordered, immutable list of matchers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    matchers: Vec<Matcher>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Pipeline::standard()
    }
}

impl Pipeline {
    /// Creates a pipeline from an explicit priority list.
    ///
    /// Nothing forces the list to end in [`Matcher::Default`]; without it,
    /// unclaimed properties fail with [`Error::ClassificationGap`].
    pub fn new(matchers: Vec<Matcher>) -> Self {
        Pipeline { matchers }
    }

    /// The standard priority list, without membership assertions.
    pub fn standard() -> Self {
        Pipeline::new(Matcher::standard())
    }

    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn matchers(&self) -> &[Matcher] {
        &self.matchers
    }

    /// Returns the first matcher that claims the property.
    pub fn classify(&self, property: &PropertyModel) -> Option<&Matcher> {
        self.matchers.iter().find(|matcher| {
            let claimed = matcher.matches(property);
            tracing::trace!(
                property = %property.raw_name,
                matcher = %matcher.category(),
                claimed,
                "probing matcher"
            );
            claimed
        })
    }

    /// Builds the descriptor of the subject for one value type.
    pub fn generate(&self, value: &ValueType, config: &SubjectConfig) -> Result<GeneratedType> {
        if !config.prefix.is_empty() && !is_identifier(&config.prefix) {
            return Err(Error::InvalidPrefix(config.prefix.clone()));
        }

        if !is_identifier_part(&config.suffix) {
            return Err(Error::InvalidSuffix(config.suffix.clone()));
        }

        let base = value.ident.unraw().to_string();
        let ident = Ident::new(
            &format!("{}{base}{}", config.prefix, config.suffix),
            value.ident.span(),
        );
        let factory = canonicalize(&base);

        let mut names = Names::default();
        names.reserve(CONSTRUCTOR, "the constructor")?;
        names.reserve(&factory, "the factory")?;

        let mut methods = Vec::new();

        for property in &value.properties {
            let Some(matcher) = self.classify(property) else {
                let ty = type_to_string(&property.ty);
                tracing::error!(
                    value = %base,
                    property = %property.raw_name,
                    ty = %ty,
                    "no matcher classified property"
                );
                return Err(Error::ClassificationGap {
                    property: property.raw_name.clone(),
                    ty,
                });
            };

            let synthesized = matcher.synthesize(property);
            tracing::debug!(
                value = %base,
                property = %property.raw_name,
                category = %matcher.category(),
                methods = synthesized.len(),
                "classified property"
            );

            for method in &synthesized {
                names.reserve(&method.name, &property.raw_name)?;
            }
            methods.extend(synthesized);
        }

        let value_ref = ValueRef {
            ident: value.ident.clone(),
            generics: value.generics.clone(),
        };

        Ok(GeneratedType {
            module: value.module.clone(),
            ident,
            field: FieldDescriptor {
                name: ACTUAL.to_string(),
                ty: value_ref.ty(),
            },
            constructor: ConstructorDescriptor {
                name: CONSTRUCTOR.to_string(),
                params: vec![
                    Parameter::new("metadata", ParamType::FailureMetadata),
                    Parameter::new(ACTUAL, ParamType::Value(value_ref.ty())),
                ],
            },
            factory: FactoryDescriptor { name: factory },
            value: value_ref,
            methods,
        })
    }

    /// Generates subjects for every annotated declaration among `items`.
    ///
    /// Each struct or enum is handled on its own: a declaration without a
    /// `#[subject]` attribute, or one that fails to generate, yields an error
    /// for that declaration only.
    pub fn generate_declarations(
        &self,
        introspector: &impl Introspect,
        items: &[Item],
    ) -> Vec<Result<GeneratedType, DeclarationError>> {
        items
            .iter()
            .filter_map(|item| match item {
                Item::Struct(item) => Some((&item.ident, &item.attrs)),
                Item::Enum(item) => Some((&item.ident, &item.attrs)),
                _ => None,
            })
            .map(|(ident, attrs)| {
                self.generate_declaration(introspector, ident, attrs)
                    .map_err(|source| {
                        let err = DeclarationError {
                            declaration: ident.to_string(),
                            source,
                        };
                        tracing::warn!(declaration = %ident, error = %err.source, "skipping declaration");
                        err
                    })
            })
            .collect()
    }

    fn generate_declaration(
        &self,
        introspector: &impl Introspect,
        ident: &Ident,
        attrs: &[syn::Attribute],
    ) -> Result<GeneratedType> {
        let config = SubjectConfig::from_attributes(attrs)?.ok_or_else(|| Error::MissingAnnotation {
            declaration: ident.to_string(),
        })?;

        let target = match &config.target {
            Some(target) => target.clone(),
            None => syn::Path::from(ident.clone()),
        };

        let value = introspector.introspect(&target)?;
        self.generate(&value, &config)
    }
}

/// Configures a [`Pipeline`].
#[derive(Debug, Clone, Default)]
pub struct Builder {
    membership: Membership,
    matchers: Option<Vec<Matcher>>,
}

impl Builder {
    /// Enables or disables `hasX(expected...)` on iterables.
    pub fn contains(mut self, enabled: bool) -> Self {
        self.membership.contains = enabled;
        self
    }

    /// Enables or disables `doesNotHaveX(expected...)` on iterables.
    pub fn does_not_contain(mut self, enabled: bool) -> Self {
        self.membership.does_not_contain = enabled;
        self
    }

    pub fn membership(mut self, membership: Membership) -> Self {
        self.membership = membership;
        self
    }

    /// Uses a custom priority list instead of the standard one. The
    /// membership settings only apply to the standard list.
    pub fn matchers(mut self, matchers: Vec<Matcher>) -> Self {
        self.matchers = Some(matchers);
        self
    }

    pub fn build(self) -> Pipeline {
        let matchers = self
            .matchers
            .unwrap_or_else(|| Matcher::standard_with(self.membership));
        Pipeline::new(matchers)
    }
}

/// Generated method names, compared in their rendered snake_case form.
#[derive(Default)]
struct Names {
    owners: HashMap<String, (String, String)>,
}

impl Names {
    fn reserve(&mut self, method: &str, owner: &str) -> Result<()> {
        let key = to_snake_case(method);
        if !is_method_name(&key) {
            return Err(Error::InvalidMethodName {
                method: key,
                owner: owner.to_string(),
            });
        }
        if let Some((first_method, first_owner)) = self.owners.get(&key) {
            return Err(Error::NameCollision {
                method: first_method.clone(),
                first: first_owner.clone(),
                second: owner.to_string(),
            });
        }
        self.owners.insert(key, (method.to_string(), owner.to_string()));
        Ok(())
    }
}
