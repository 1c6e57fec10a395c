//! Rename-to: emit a field under another key

use crate::contracts::{Attribute, AttributeKind, PropertyTransform, Transformed};
use crate::error::DtoResult;
use crate::schema::Field;
use crate::value::Value;

/// Serializes the field under `destination_key`, value unchanged
///
/// Takes precedence over automatic renames such as a class-level
/// [`SnakeCase`](super::SnakeCase).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapTo {
    destination_key: String,
}

impl MapTo {
    pub fn new(destination_key: impl Into<String>) -> Self {
        Self {
            destination_key: destination_key.into(),
        }
    }

    pub fn destination_key(&self) -> &str {
        &self.destination_key
    }
}

impl PropertyTransform for MapTo {
    fn property_transform(
        &self,
        _field: &Field,
        _key: &str,
        value: Value,
    ) -> DtoResult<Transformed> {
        Ok(Transformed::keep(self.destination_key.clone(), value))
    }
}

impl Attribute for MapTo {
    fn kind(&self) -> AttributeKind {
        AttributeKind::MapTo
    }

    fn as_property_transform(&self) -> Option<&dyn PropertyTransform> {
        Some(self)
    }
}
