//! Rename-from: read a field from other input keys

use crate::config::Context;
use crate::contracts::{Attribute, AttributeKind, PropertyPreHydrate};
use crate::data::Data;
use crate::error::DtoResult;
use crate::schema::Field;

/// Moves the first present source key onto the field name
///
/// Source keys are tried in order; the one used is removed from the input.
/// With no source key present the field resolves through the usual absence
/// rules. Bind it several times to chain fallbacks across attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapFrom {
    source_keys: Vec<String>,
}

impl MapFrom {
    pub fn new<I, S>(source_keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            source_keys: source_keys.into_iter().map(Into::into).collect(),
        }
    }

    pub fn source_keys(&self) -> &[String] {
        &self.source_keys
    }
}

impl PropertyPreHydrate for MapFrom {
    fn property_pre_hydrate(
        &self,
        field: &Field,
        data: &mut Data,
        _ctx: &Context<'_>,
    ) -> DtoResult<()> {
        if let Some(source) = self.source_keys.iter().find(|key| data.has(key)) {
            let value = data.get(source);
            data.set(field.name(), value);
            data.unset(source);
        }
        Ok(())
    }
}

impl Attribute for MapFrom {
    fn kind(&self) -> AttributeKind {
        AttributeKind::MapFrom
    }

    fn as_property_pre_hydrate(&self) -> Option<&dyn PropertyPreHydrate> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::test_support::{field, map};
    use crate::value::Value;
    use serde_json::json;

    fn apply(attribute: &MapFrom, input: serde_json::Value) -> Data {
        let mut data = Data::wrap(map(input)).unwrap();
        attribute
            .property_pre_hydrate(&field("email"), &mut data, &Context::default())
            .unwrap();
        data
    }

    #[test]
    fn test_first_present_key_wins() {
        let attribute = MapFrom::new(["a", "b"]);
        let data = apply(&attribute, json!({"a": "first", "b": "second"}));

        assert_eq!(data.get("email"), Value::from("first"));
        assert!(!data.has("a"));
        assert!(data.has("b"));
    }

    #[test]
    fn test_falls_back_to_later_key() {
        let data = apply(&MapFrom::new(["a", "b"]), json!({"b": "second"}));
        assert_eq!(data.get("email"), Value::from("second"));
        assert!(!data.has("b"));
    }

    #[test]
    fn test_no_source_present_is_noop() {
        let data = apply(&MapFrom::new(["a"]), json!({"other": 1}));
        assert!(!data.has("email"));
        assert!(data.has("other"));
    }

    #[test]
    fn test_empty_key_list_is_noop() {
        let data = apply(&MapFrom::new(Vec::<String>::new()), json!({"email": "kept"}));
        assert_eq!(data.get("email"), Value::from("kept"));
    }
}
