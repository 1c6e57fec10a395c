//! Hydration engine: `from_input`, `collect` and `with`
//!
//! Hydrating a type runs in two passes over one [`Data`] view of the input:
//! 1. Pre-hydration: class-scope handlers (own and inherited) for every
//!    field, then field-scope handlers in declaration order
//! 2. Resolution: per field, apply the absence rules or run post-hydration
//!    handlers, read the value and recurse into nested DTOs
//!
//! The constructor only runs once every argument resolved, so a failure never
//! leaves a partially built instance behind.

use tracing::{debug, trace};

use crate::config::Context;
use crate::data::{Data, Input};
use crate::dto::Dto;
use crate::error::{DtoError, DtoResult};
use crate::schema::{Field, FieldType, Schema};
use crate::value::{FromValue, Value, ValueMap};

/// Resolved constructor arguments, in schema order
#[derive(Debug, Clone)]
pub struct Arguments {
    dto: &'static str,
    values: Vec<(String, Value)>,
}

impl Arguments {
    pub fn new(dto: &'static str, values: Vec<(String, Value)>) -> Self {
        Self { dto, values }
    }

    /// Name of the type being constructed
    pub fn dto(&self) -> &'static str {
        self.dto
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Move an argument out, bound to its Rust type
    ///
    /// Binding failures name the field and the expected type.
    pub fn take<T: FromValue>(&mut self, name: &str) -> DtoResult<T> {
        let value = self
            .values
            .iter_mut()
            .find(|(key, _)| key == name)
            .map(|(_, value)| std::mem::replace(value, Value::Null))
            .ok_or_else(|| DtoError::MissingField(format!("{}::{}", self.dto, name)))?;

        T::from_value(value).map_err(|err| DtoError::cast_field(name, T::type_label(), err))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Hydrate one instance of `T`
pub fn hydrate<T: Dto>(input: Input, ctx: &Context<'_>) -> DtoResult<T> {
    let schema = T::schema();
    debug!(
        "Hydrating {} ({} fields, depth {})",
        schema.name(),
        schema.fields().len(),
        ctx.depth()
    );

    let mut args = resolve_arguments(schema, input, ctx)?;
    T::construct(&mut args)
}

/// Type-erased [`hydrate`], as stored in [`DtoType`](crate::schema::DtoType)
pub(crate) fn hydrate_value<T: Dto>(input: Input, ctx: &Context<'_>) -> DtoResult<Value> {
    hydrate::<T>(input, ctx).map(Value::dto)
}

/// Run both passes of the pipeline and return the constructor arguments
pub fn resolve_arguments(schema: &Schema, input: Input, ctx: &Context<'_>) -> DtoResult<Arguments> {
    let mut data = Data::wrap(input)?;

    for attribute in schema.class_attributes() {
        if let Some(handler) = attribute.as_class_pre_hydrate() {
            for field in schema.fields() {
                handler.class_pre_hydrate(field, &mut data, ctx)?;
            }
        }
    }

    for field in schema.fields() {
        for attribute in field.attributes() {
            if let Some(handler) = attribute.as_property_pre_hydrate() {
                trace!("{:?} on {}.{}", attribute.kind(), schema.name(), field.name());
                handler.property_pre_hydrate(field, &mut data, ctx)?;
            }
        }
    }

    let mut values = Vec::with_capacity(schema.fields().len());
    for field in schema.fields() {
        let value = resolve_field(schema, field, &mut data, ctx)?;
        values.push((field.name().to_string(), value));
    }

    Ok(Arguments::new(schema.name(), values))
}

fn resolve_field(
    schema: &Schema,
    field: &Field,
    data: &mut Data,
    ctx: &Context<'_>,
) -> DtoResult<Value> {
    if !data.has(field.name()) {
        return match field.default() {
            Some(default) => Ok(default.clone()),
            None if field.is_nullable() => Ok(Value::Null),
            None => Err(DtoError::MissingField(field.name().to_string())),
        };
    }

    for attribute in schema.class_attributes() {
        if let Some(handler) = attribute.as_class_hydrate() {
            handler.class_hydrate(field, data, ctx)?;
        }
    }
    for attribute in field.attributes() {
        if let Some(handler) = attribute.as_property_hydrate() {
            handler.property_hydrate(field, data, ctx)?;
        }
    }

    bind_nested(field, data.get(field.name()), ctx)
}

/// Recurse into a nested DTO field given as a map or object
fn bind_nested(field: &Field, value: Value, ctx: &Context<'_>) -> DtoResult<Value> {
    let FieldType::Dto(dto) = field.ty() else {
        return Ok(value);
    };
    if dto.is_instance(&value) {
        return Ok(value);
    }

    let input = match value {
        Value::Map(map) => Input::Map(map),
        Value::Object(object) => Input::Object(object),
        Value::Dto(instance) => Input::from(instance),
        other => return Ok(other),
    };
    dto.hydrate(input, &ctx.descend()?)
}

/// Hydrate one instance per item
pub fn collect<T: Dto>(input: Input, ctx: &Context<'_>) -> DtoResult<Vec<T>> {
    let items = Data::wrap(input)?.items();
    debug!("Collecting {} {} items", items.len(), T::schema().name());

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let shape = item.type_name();
            let input = Input::from_value(item).ok_or_else(|| {
                DtoError::cast(
                    T::schema().name(),
                    format!("item {} is not an entity shape: {}", index, shape),
                )
            })?;
            hydrate::<T>(input, ctx)
        })
        .collect()
}

/// Copy of `dto` with overrides applied, re-hydrated from scratch
///
/// Each field takes the first non-null of: named override, override, current
/// value.
pub fn with<T: Dto>(
    dto: &T,
    overrides: Input,
    named: ValueMap,
    ctx: &Context<'_>,
) -> DtoResult<T> {
    let schema = T::schema();
    if schema.fields().is_empty() {
        return hydrate::<T>(Input::default(), ctx);
    }

    let mut combined = Data::wrap(overrides)?;
    for (key, value) in named {
        combined.set(&key, value);
    }

    let current = dto.values();
    let input: ValueMap = schema
        .fields()
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let value = match combined.get(field.name()) {
                Value::Null => current.get(index).cloned().unwrap_or(Value::Null),
                replaced => replaced,
            };
            (field.name().to_string(), value)
        })
        .collect();

    hydrate::<T>(Input::Map(input), ctx)
}
