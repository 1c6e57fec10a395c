//! Carapace - immutable DTO hydration and serialization
//!
//! Provides:
//! - A unified accessor over maps, JSON text and model-like objects
//! - Attribute-driven hydration (rename, group, cast, convert-empty, snake_case)
//! - Casters for primitives, date-times, enumerations and nested DTOs
//! - Attribute-driven serialization to maps and JSON (rename, hide, enum output)
//!
//! Types register their fields once through a [`Schema`] and implement [`Dto`].

pub mod attributes;
pub mod casters;
pub mod config;
pub mod contracts;
pub mod data;
pub mod docgen;
pub mod dto;
pub mod error;
pub mod hydration;
pub mod schema;
pub mod serialization;
pub mod value;

// Re-export commonly used types
pub use config::{Config, ConfigBuilder, Context};
pub use data::{Data, Input, ObjectRef, ObjectSource, PlainObject};
pub use dto::{Arguments, Dto, DtoInstance};
pub use error::{DtoError, DtoResult};
pub use schema::{DtoType, Field, FieldSummary, FieldType, Schema};
pub use value::{
    Backing, DtoEnum, EnumCase, EnumDef, FromValue, IntoValue, Value, ValueMap,
};

// Re-export handler contracts
pub use contracts::{
    Attribute, AttributeKind, ClassHydrate, ClassPreHydrate, ClassTransform, PropertyHydrate,
    PropertyPreHydrate, PropertyTransform, Transformed,
};

// Re-export casters
pub use casters::{Caster, DateTimeCaster, DtoCaster, EnumCaster, Primitive, PrimitiveCaster};
