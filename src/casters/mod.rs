//! Value casters
//!
//! A caster converts one loosely-typed value into its target type or fails.
//! Casters are applied through the `CastWith` attribute and must leave values
//! that already have the target type untouched, so casting is idempotent.

pub mod datetime;
pub mod dto;
pub mod enumeration;
pub mod primitive;

use std::fmt;

use crate::config::Context;
use crate::error::DtoResult;
use crate::value::Value;

pub use datetime::DateTimeCaster;
pub use dto::DtoCaster;
pub use enumeration::EnumCaster;
pub use primitive::{Primitive, PrimitiveCaster};

/// Strategy converting a value to a target type
pub trait Caster: fmt::Debug + Send + Sync {
    /// Convert the value, or fail with a cast error
    fn cast(&self, value: Value, ctx: &Context<'_>) -> DtoResult<Value>;

    /// Name of the target type, used when failures are reported
    fn target(&self) -> String;
}
