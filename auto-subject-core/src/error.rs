//! Error types for subject generation.

use thiserror::Error;

/// Errors that abort generation for one value type.
///
/// Every variant is deterministic: the same input always produces the same
/// error, so callers never retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The subject prefix would not start a valid identifier.
    #[error("invalid subject prefix `{0}`: must be empty or a valid identifier start")]
    InvalidPrefix(String),

    /// The subject suffix contains characters not allowed in identifiers.
    #[error("invalid subject suffix `{0}`: must contain only identifier characters")]
    InvalidSuffix(String),

    /// The declaration under process carries no `#[subject(...)]` attribute.
    #[error("`{declaration}` is missing the `#[subject(...)]` attribute")]
    MissingAnnotation { declaration: String },

    /// The `#[subject(...)]` attribute could not be read.
    #[error("invalid `#[subject(...)]` attribute: {0}")]
    Config(String),

    /// The introspector has no declaration for the requested target.
    #[error("no struct or enum named `{target}` was found")]
    TargetNotFound { target: String },

    /// The target exists but cannot have a subject.
    #[error("cannot generate a subject for `{target}`: {reason}")]
    UnsupportedTarget { target: String, reason: &'static str },

    /// A member that is not a property was handed to property construction.
    #[error("{kind} `{name}` cannot be used as a property")]
    UnsupportedMember { kind: &'static str, name: String },

    /// No matcher in the pipeline claimed the property.
    #[error("no matcher classified property `{property}` of type `{ty}`")]
    ClassificationGap { property: String, ty: String },

    /// Two properties would generate methods with the same name.
    #[error("method `{method}` generated for `{second}` collides with the one generated for `{first}`")]
    NameCollision {
        method: String,
        first: String,
        second: String,
    },

    /// A generated method name is a path keyword and cannot be an
    /// identifier, not even a raw one.
    #[error("method `{method}` generated for `{owner}` is not a valid method name")]
    InvalidMethodName { method: String, owner: String },
}

impl From<syn::Error> for Error {
    fn from(err: syn::Error) -> Self {
        Error::Config(err.to_string())
    }
}

/// Result type for subject generation.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A failure tied to the declaration it was raised for.
///
/// Returned by batch generation so one broken declaration can be reported
/// without affecting the others.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to generate a subject for `{declaration}`: {source}")]
pub struct DeclarationError {
    pub declaration: String,
    #[source]
    pub source: Error,
}
