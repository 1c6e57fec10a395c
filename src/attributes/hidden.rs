//! Hide-on-serialize

use crate::contracts::{Attribute, AttributeKind, ClassTransform, PropertyTransform, Transformed};
use crate::error::DtoResult;
use crate::schema::Field;
use crate::value::Value;

/// Leaves the field, or every field of the type, out of serialized output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hidden;

impl PropertyTransform for Hidden {
    fn property_transform(
        &self,
        _field: &Field,
        _key: &str,
        _value: Value,
    ) -> DtoResult<Transformed> {
        Ok(Transformed::Omit)
    }
}

impl ClassTransform for Hidden {
    fn class_transform(&self, _field: &Field, _key: &str, _value: Value) -> DtoResult<Transformed> {
        Ok(Transformed::Omit)
    }
}

impl Attribute for Hidden {
    fn kind(&self) -> AttributeKind {
        AttributeKind::Hidden
    }

    fn as_property_transform(&self) -> Option<&dyn PropertyTransform> {
        Some(self)
    }

    fn as_class_transform(&self) -> Option<&dyn ClassTransform> {
        Some(self)
    }
}
