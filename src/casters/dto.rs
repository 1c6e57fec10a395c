//! Nested DTO casting

use crate::config::Context;
use crate::data::Input;
use crate::dto::Dto;
use crate::error::{DtoError, DtoResult};
use crate::schema::DtoType;
use crate::value::Value;

use super::Caster;

/// Casts maps, objects and JSON text into DTO instances, or lists of them
///
/// Instances of the target type pass through untouched, both on their own
/// and as list items.
#[derive(Debug, Clone, Copy)]
pub struct DtoCaster {
    dto: DtoType,
}

impl DtoCaster {
    pub fn new(dto: DtoType) -> Self {
        Self { dto }
    }

    pub fn of<T: Dto>() -> Self {
        Self::new(DtoType::of::<T>())
    }

    pub fn dto_type(&self) -> DtoType {
        self.dto
    }

    fn hydrate_one(&self, value: Value, ctx: &Context<'_>, list_item: bool) -> DtoResult<Value> {
        if self.dto.is_instance(&value) {
            return Ok(value);
        }

        let shape = value.type_name();
        match Input::from_value(value) {
            Some(input @ (Input::Map(_) | Input::Json(_) | Input::Object(_))) => {
                self.dto.hydrate(input, &ctx.descend()?)
            }
            _ if list_item => Err(DtoError::cast(
                self.dto.name(),
                format!("Cannot cast list item to DTO {}: unsupported input {}", self.dto.name(), shape),
            )),
            _ => Err(DtoError::cast(
                self.dto.name(),
                format!("Cannot cast value to DTO {}: unsupported input {}", self.dto.name(), shape),
            )),
        }
    }
}

impl Caster for DtoCaster {
    fn cast(&self, value: Value, ctx: &Context<'_>) -> DtoResult<Value> {
        match value {
            Value::List(items) => items
                .into_iter()
                .map(|item| self.hydrate_one(item, ctx, true))
                .collect::<DtoResult<Vec<_>>>()
                .map(Value::List),
            single => self.hydrate_one(single, ctx, false),
        }
    }

    fn target(&self) -> String {
        self.dto.name().to_string()
    }
}
