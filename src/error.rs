//! Error types for hydration and serialization

use thiserror::Error;

/// Errors that can occur while hydrating or serializing a DTO
#[derive(Error, Debug)]
pub enum DtoError {
    /// Malformed JSON text given to `from_input`, `collect` or `Data::wrap`
    #[error("JSON parsing error: {0}")]
    Parse(String),

    /// A required constructor parameter had no input key and no default
    #[error("Missing required parameter: {0}")]
    MissingField(String),

    /// A caster or typed binding could not produce a value of the target type
    #[error("Cannot cast value to {target}: {reason}")]
    Cast { target: String, reason: String },

    /// A cast failure re-wrapped with the field it happened on
    #[error("Unable to cast property '{field}' to {target}: {source}")]
    CastField {
        field: String,
        target: String,
        #[source]
        source: Box<DtoError>,
    },

    /// An attribute or caster was configured with something it cannot use
    #[error("Invalid attribute configuration: {0}")]
    InvalidAttribute(String),

    /// A post-hydration validator rejected a field value
    #[error("Invalid value for property '{field}': {message}")]
    Validation { field: String, message: String },

    /// `to_json` met a value that has no JSON representation
    #[error("JSON encoding error: {0}")]
    Encode(String),

    /// Nested DTOs recursed deeper than the configured limit
    #[error("Maximum nesting depth exceeded: {depth} > {max}")]
    MaxDepthExceeded { depth: usize, max: usize },
}

/// Result type for DTO operations
pub type DtoResult<T> = Result<T, DtoError>;

impl DtoError {
    /// Build a caster-level failure
    pub fn cast(target: impl Into<String>, reason: impl Into<String>) -> Self {
        DtoError::Cast {
            target: target.into(),
            reason: reason.into(),
        }
    }

    /// Wrap an error with the field and target type it was raised for
    pub fn cast_field(field: impl Into<String>, target: impl Into<String>, source: DtoError) -> Self {
        DtoError::CastField {
            field: field.into(),
            target: target.into(),
            source: Box::new(source),
        }
    }

    /// Whether this is a cast failure (including misconfigured casters)
    pub fn is_cast(&self) -> bool {
        matches!(
            self,
            DtoError::Cast { .. } | DtoError::CastField { .. } | DtoError::InvalidAttribute(_)
        )
    }

    /// The innermost error of a `CastField` chain
    pub fn root_cause(&self) -> &DtoError {
        match self {
            DtoError::CastField { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

impl From<serde_json::Error> for DtoError {
    fn from(e: serde_json::Error) -> Self {
        DtoError::Parse(e.to_string())
    }
}
