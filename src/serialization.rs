//! Serialization engine: `to_map` and `to_json`

use tracing::debug;

use crate::config::Config;
use crate::contracts::{AttributeKind, Transformed};
use crate::error::{DtoError, DtoResult};
use crate::schema::Schema;
use crate::value::{Value, ValueMap};

/// Serialize field values (in schema order) into an output map
///
/// Field-scope transforms run first, in declaration order, then class-scope
/// transforms, closest type first. The first class-scope rename wins over
/// ancestors' renames, and none overrides an explicit `MapTo` on the field.
/// Omission at either scope drops the field.
pub fn serialize(schema: &Schema, values: Vec<Value>) -> DtoResult<ValueMap> {
    debug!("Serializing {} ({} fields)", schema.name(), schema.fields().len());

    let mut output = ValueMap::with_capacity(schema.fields().len());
    'fields: for (field, mut value) in schema.fields().iter().zip(values) {
        let mut key = field.name().to_string();

        for attribute in field.attributes() {
            if let Some(transform) = attribute.as_property_transform() {
                match transform.property_transform(field, &key, value)? {
                    Transformed::Keep {
                        key: next_key,
                        value: next_value,
                    } => {
                        key = next_key;
                        value = next_value;
                    }
                    Transformed::Omit => continue 'fields,
                }
            }
        }

        // The closest class-scope rename sticks; explicit MapTo beats all of them
        let mut key_fixed = field.has_attribute(AttributeKind::MapTo);
        for attribute in schema.class_attributes() {
            if let Some(transform) = attribute.as_class_transform() {
                match transform.class_transform(field, &key, value)? {
                    Transformed::Keep {
                        key: next_key,
                        value: next_value,
                    } => {
                        if !key_fixed && next_key != key {
                            key = next_key;
                            key_fixed = true;
                        }
                        value = next_value;
                    }
                    Transformed::Omit => continue 'fields,
                }
            }
        }

        output.insert(key, flatten(value)?);
    }

    Ok(output)
}

/// Lists element-wise, maps value-wise, nested DTOs through their own
/// serialization; everything else as-is
fn flatten(value: Value) -> DtoResult<Value> {
    Ok(match value {
        Value::List(items) => Value::List(
            items
                .into_iter()
                .map(flatten)
                .collect::<DtoResult<Vec<_>>>()?,
        ),
        Value::Map(map) => Value::Map(
            map.into_iter()
                .map(|(key, value)| flatten(value).map(|value| (key, value)))
                .collect::<DtoResult<ValueMap>>()?,
        ),
        Value::Dto(instance) => Value::Map(instance.to_map()?),
        other => other,
    })
}

/// Encode a serialized map as JSON text
pub fn encode(map: ValueMap, config: &Config) -> DtoResult<String> {
    let json = Value::Map(map).to_json()?;
    let text = if config.pretty_json {
        serde_json::to_string_pretty(&json)
    } else {
        serde_json::to_string(&json)
    };
    text.map_err(|e| DtoError::Encode(e.to_string()))
}
