//! Capability contracts for attributes
//!
//! An attribute is bound to a field or to a whole DTO type and takes part in
//! the pipeline through any of these capabilities:
//! - Pre-hydration (class or property scope): rewrite the input before
//!   constructor arguments are resolved, e.g. `MapFrom`, `CastWith`
//! - Hydration (class or property scope): adjust or validate a present value
//!   right before it is bound
//! - Transformation (class or property scope): rename, replace or omit a
//!   field during serialization, e.g. `MapTo`, `Hidden`
//!
//! [`Attribute`] is the dispatch point: the engines ask each attribute for a
//! capability and skip those that do not provide it.

use std::fmt;

use crate::config::Context;
use crate::data::Data;
use crate::error::DtoResult;
use crate::schema::Field;
use crate::value::Value;

/// Built-in attribute identity, used for precedence checks between attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    MapFrom,
    MapTo,
    GroupFrom,
    CastWith,
    ConvertEmptyToNull,
    Hidden,
    SnakeCase,
    EnumSerialize,
    Custom,
}

/// Outcome of a serialization transform
#[derive(Debug, Clone, PartialEq)]
pub enum Transformed {
    /// Emit the field under `key` with `value`
    Keep { key: String, value: Value },
    /// Leave the field out of the output entirely
    Omit,
}

impl Transformed {
    pub fn keep(key: impl Into<String>, value: Value) -> Self {
        Transformed::Keep {
            key: key.into(),
            value,
        }
    }
}

/// Pre-hydration at class scope, invoked once per field of the type
pub trait ClassPreHydrate {
    fn class_pre_hydrate(&self, field: &Field, data: &mut Data, ctx: &Context<'_>) -> DtoResult<()>;
}

/// Pre-hydration at property scope, invoked for the field it is bound to
pub trait PropertyPreHydrate {
    fn property_pre_hydrate(
        &self,
        field: &Field,
        data: &mut Data,
        ctx: &Context<'_>,
    ) -> DtoResult<()>;
}

/// Post-hydration adjust/validate at class scope, for each present field
pub trait ClassHydrate {
    fn class_hydrate(&self, field: &Field, data: &mut Data, ctx: &Context<'_>) -> DtoResult<()>;
}

/// Post-hydration adjust/validate at property scope
pub trait PropertyHydrate {
    fn property_hydrate(&self, field: &Field, data: &mut Data, ctx: &Context<'_>) -> DtoResult<()>;
}

/// Serialization transform at class scope, invoked once per field
pub trait ClassTransform {
    fn class_transform(&self, field: &Field, key: &str, value: Value) -> DtoResult<Transformed>;
}

/// Serialization transform at property scope
///
/// `key` is the output key so far; earlier transforms on the same field may
/// already have renamed it.
pub trait PropertyTransform {
    fn property_transform(
        &self,
        field: &Field,
        key: &str,
        value: Value,
    ) -> DtoResult<Transformed>;
}

/// Metadata bound to a field or DTO type
///
/// Implement the capability traits an attribute needs and return `Some(self)`
/// from the matching accessor.
///
/// ```rust
/// use carapace::config::Context;
/// use carapace::contracts::{Attribute, PropertyHydrate};
/// use carapace::data::Data;
/// use carapace::error::{DtoError, DtoResult};
/// use carapace::schema::Field;
///
/// #[derive(Debug)]
/// struct NotBlank;
///
/// impl PropertyHydrate for NotBlank {
///     fn property_hydrate(&self, field: &Field, data: &mut Data, _ctx: &Context<'_>) -> DtoResult<()> {
///         match data.get(field.name()).as_str() {
///             Some(s) if s.trim().is_empty() => Err(DtoError::Validation {
///                 field: field.name().to_string(),
///                 message: "must not be blank".to_string(),
///             }),
///             _ => Ok(()),
///         }
///     }
/// }
///
/// impl Attribute for NotBlank {
///     fn as_property_hydrate(&self) -> Option<&dyn PropertyHydrate> {
///         Some(self)
///     }
/// }
/// ```
pub trait Attribute: fmt::Debug + Send + Sync {
    fn kind(&self) -> AttributeKind {
        AttributeKind::Custom
    }

    fn as_class_pre_hydrate(&self) -> Option<&dyn ClassPreHydrate> {
        None
    }

    fn as_property_pre_hydrate(&self) -> Option<&dyn PropertyPreHydrate> {
        None
    }

    fn as_class_hydrate(&self) -> Option<&dyn ClassHydrate> {
        None
    }

    fn as_property_hydrate(&self) -> Option<&dyn PropertyHydrate> {
        None
    }

    fn as_class_transform(&self) -> Option<&dyn ClassTransform> {
        None
    }

    fn as_property_transform(&self) -> Option<&dyn PropertyTransform> {
        None
    }
}
