//! Group-from: fold flat input keys into one nested map

use crate::config::Context;
use crate::contracts::{Attribute, AttributeKind, PropertyPreHydrate};
use crate::data::Data;
use crate::error::DtoResult;
use crate::schema::Field;
use crate::value::{Value, ValueMap};

/// Collects the listed keys into a map assigned to the field
///
/// ```rust
/// use carapace::attributes::GroupFrom;
///
/// // street/city/postcode at the top level become `address: {street, city, postcode}`
/// let grouping = GroupFrom::new(["street", "city", "postcode"]);
/// assert_eq!(grouping.source_keys().len(), 3);
/// ```
///
/// Nothing happens when the field key is already present. Keys that are
/// grouped are removed from the input; if none is present the field is left
/// unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupFrom {
    source_keys: Vec<String>,
}

impl GroupFrom {
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

impl PropertyPreHydrate for GroupFrom {
    fn property_pre_hydrate(
        &self,
        field: &Field,
        data: &mut Data,
        _ctx: &Context<'_>,
    ) -> DtoResult<()> {
        if data.has(field.name()) {
            return Ok(());
        }

        let mut group = ValueMap::new();
        for key in &self.source_keys {
            if data.has(key) {
                group.insert(key.clone(), data.get(key));
                data.unset(key);
            }
        }

        if !group.is_empty() {
            data.set(field.name(), Value::Map(group));
        }
        Ok(())
    }
}

impl Attribute for GroupFrom {
    fn kind(&self) -> AttributeKind {
        AttributeKind::GroupFrom
    }

    fn as_property_pre_hydrate(&self) -> Option<&dyn PropertyPreHydrate> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::test_support::{field, map};
    use serde_json::json;

    fn apply(input: serde_json::Value) -> Data {
        let mut data = Data::wrap(map(input)).unwrap();
        GroupFrom::new(["street", "city", "postcode"])
            .property_pre_hydrate(&field("address"), &mut data, &Context::default())
            .unwrap();
        data
    }

    #[test]
    fn test_groups_present_keys() {
        let data = apply(json!({"street": "S", "city": "C", "name": "Nick"}));
        let address = data.get("address");
        let grouped = address.as_map().unwrap();

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped["street"], Value::from("S"));
        assert!(!data.has("street"));
        assert!(!data.has("city"));
        assert!(data.has("name"));
    }

    #[test]
    fn test_existing_field_is_not_overridden() {
        let data = apply(json!({"address": {"street": "X"}, "street": "S"}));

        assert_eq!(data.get("address").as_map().unwrap()["street"], Value::from("X"));
        assert!(data.has("street"));
    }

    #[test]
    fn test_nothing_found_leaves_field_unset() {
        let data = apply(json!({"name": "Nick"}));
        assert!(!data.has("address"));
    }
}
