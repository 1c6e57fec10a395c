//! Automatic snake_case mapping

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::config::Context;
use crate::contracts::{
    Attribute, AttributeKind, ClassPreHydrate, ClassTransform, PropertyPreHydrate,
    PropertyTransform, Transformed,
};
use crate::data::Data;
use crate::error::DtoResult;
use crate::schema::Field;
use crate::value::Value;

static UPPERCASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z]").expect("valid uppercase pattern"));

/// `firstName` -> `first_name`, `HTTPCode` -> `h_t_t_p_code`
///
/// An underscore goes before every capital letter not at the start, then the
/// whole name is lower-cased.
pub fn to_snake(name: &str) -> String {
    UPPERCASE
        .replace_all(name, |caps: &Captures<'_>| match caps.get(0) {
            Some(m) if m.start() > 0 => format!("_{}", m.as_str()),
            Some(m) => m.as_str().to_string(),
            None => String::new(),
        })
        .to_lowercase()
}

/// Reads fields from snake_case input keys and writes them back as snake_case
///
/// Hydration moves `first_name` onto `firstName` unless `firstName` is
/// already present. Serialization emits the snake_case key unless the field
/// has an explicit [`MapTo`](super::MapTo). At class scope, fields carrying
/// their own [`MapFrom`](super::MapFrom) are left to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SnakeCase;

impl SnakeCase {
    fn remap(&self, field: &Field, data: &mut Data) {
        let camel = field.name();
        if data.has(camel) {
            return;
        }

        let snake = to_snake(camel);
        if snake != camel && data.has(&snake) {
            tracing::trace!("Mapping {} from {}", camel, snake);
            let value = data.get(&snake);
            data.set(camel, value);
            data.unset(&snake);
        }
    }

    fn rename(&self, field: &Field, key: &str, value: Value) -> Transformed {
        if field.has_attribute(AttributeKind::MapTo) {
            Transformed::keep(key, value)
        } else {
            Transformed::keep(to_snake(field.name()), value)
        }
    }
}

impl ClassPreHydrate for SnakeCase {
    fn class_pre_hydrate(&self, field: &Field, data: &mut Data, _ctx: &Context<'_>) -> DtoResult<()> {
        if !field.has_attribute(AttributeKind::MapFrom) {
            self.remap(field, data);
        }
        Ok(())
    }
}

impl PropertyPreHydrate for SnakeCase {
    fn property_pre_hydrate(
        &self,
        field: &Field,
        data: &mut Data,
        _ctx: &Context<'_>,
    ) -> DtoResult<()> {
        self.remap(field, data);
        Ok(())
    }
}

impl ClassTransform for SnakeCase {
    fn class_transform(&self, field: &Field, key: &str, value: Value) -> DtoResult<Transformed> {
        Ok(self.rename(field, key, value))
    }
}

impl PropertyTransform for SnakeCase {
    fn property_transform(
        &self,
        field: &Field,
        key: &str,
        value: Value,
    ) -> DtoResult<Transformed> {
        Ok(self.rename(field, key, value))
    }
}

impl Attribute for SnakeCase {
    fn kind(&self) -> AttributeKind {
        AttributeKind::SnakeCase
    }

    fn as_class_pre_hydrate(&self) -> Option<&dyn ClassPreHydrate> {
        Some(self)
    }

    fn as_property_pre_hydrate(&self) -> Option<&dyn PropertyPreHydrate> {
        Some(self)
    }

    fn as_class_transform(&self) -> Option<&dyn ClassTransform> {
        Some(self)
    }

    fn as_property_transform(&self) -> Option<&dyn PropertyTransform> {
        Some(self)
    }
}
