//! Convert-empty-to-null

use crate::config::Context;
use crate::contracts::{Attribute, AttributeKind, ClassPreHydrate, PropertyPreHydrate};
use crate::data::Data;
use crate::error::DtoResult;
use crate::schema::Field;
use crate::value::Value;

/// Turns an empty string, list or map into null on nullable fields
///
/// Inert on fields that do not accept null.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertEmptyToNull;

impl ConvertEmptyToNull {
    fn convert(&self, field: &Field, data: &mut Data) {
        if !field.is_nullable() || !data.has(field.name()) {
            return;
        }
        if data.get(field.name()).is_empty() {
            tracing::trace!("Converting empty {} to null", field.name());
            data.set(field.name(), Value::Null);
        }
    }
}

impl ClassPreHydrate for ConvertEmptyToNull {
    fn class_pre_hydrate(&self, field: &Field, data: &mut Data, _ctx: &Context<'_>) -> DtoResult<()> {
        self.convert(field, data);
        Ok(())
    }
}

impl PropertyPreHydrate for ConvertEmptyToNull {
    fn property_pre_hydrate(
        &self,
        field: &Field,
        data: &mut Data,
        _ctx: &Context<'_>,
    ) -> DtoResult<()> {
        self.convert(field, data);
        Ok(())
    }
}

impl Attribute for ConvertEmptyToNull {
    fn kind(&self) -> AttributeKind {
        AttributeKind::ConvertEmptyToNull
    }

    fn as_class_pre_hydrate(&self) -> Option<&dyn ClassPreHydrate> {
        Some(self)
    }

    fn as_property_pre_hydrate(&self) -> Option<&dyn PropertyPreHydrate> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::test_support::map;
    use serde_json::json;

    fn apply(field: &Field, input: serde_json::Value) -> Data {
        let mut data = Data::wrap(map(input)).unwrap();
        ConvertEmptyToNull
            .property_pre_hydrate(field, &mut data, &Context::default())
            .unwrap();
        data
    }

    #[test]
    fn test_empty_values_become_null() {
        let field = Field::string("name").nullable();
        assert_eq!(apply(&field, json!({"name": ""})).get("name"), Value::Null);
        assert_eq!(apply(&field, json!({"name": []})).get("name"), Value::Null);
        assert_eq!(apply(&field, json!({"name": {}})).get("name"), Value::Null);
    }

    #[test]
    fn test_non_empty_values_pass_through() {
        let field = Field::string("name").nullable();
        assert_eq!(apply(&field, json!({"name": "0"})).get("name"), Value::from("0"));
        assert_eq!(apply(&field, json!({"name": 0})).get("name"), Value::Int(0));
    }

    #[test]
    fn test_non_nullable_field_is_inert() {
        let data = apply(&Field::string("name"), json!({"name": ""}));
        assert_eq!(data.get("name"), Value::from(""));
    }

    #[test]
    fn test_absent_field_stays_absent() {
        let data = apply(&Field::string("name").nullable(), json!({}));
        assert!(!data.has("name"));
    }
}
