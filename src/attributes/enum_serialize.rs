//! Enumeration output control

use crate::contracts::{Attribute, AttributeKind, PropertyTransform, Transformed};
use crate::error::DtoResult;
use crate::schema::Field;
use crate::value::Value;

/// How an enumeration case is written out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EnumStrategy {
    /// Backing value; the case name for unit enumerations
    #[default]
    Value,
    /// Symbolic case name
    Name,
}

/// Serializes an enumeration field as its backing value, its case name or
/// the result of a named method
///
/// A method the enumeration does not define falls back to the strategy.
/// Values that are not enumeration cases pass through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumSerialize {
    strategy: EnumStrategy,
    method: Option<String>,
}

impl EnumSerialize {
    pub fn new(strategy: EnumStrategy) -> Self {
        Self {
            strategy,
            method: None,
        }
    }

    pub fn value() -> Self {
        Self::new(EnumStrategy::Value)
    }

    pub fn name() -> Self {
        Self::new(EnumStrategy::Name)
    }

    /// Serialize through a zero-argument method registered on the enumeration
    pub fn method(method: impl Into<String>) -> Self {
        Self {
            strategy: EnumStrategy::Value,
            method: Some(method.into()),
        }
    }

    pub fn strategy(&self) -> EnumStrategy {
        self.strategy
    }
}

impl PropertyTransform for EnumSerialize {
    fn property_transform(
        &self,
        _field: &Field,
        key: &str,
        value: Value,
    ) -> DtoResult<Transformed> {
        let Value::Enum(case) = value else {
            return Ok(Transformed::keep(key, value));
        };

        if let Some(output) = self.method.as_deref().and_then(|method| case.call(method)) {
            return Ok(Transformed::keep(key, output));
        }

        let output = match (self.strategy, case.backing()) {
            (EnumStrategy::Value, Some(backing)) => backing.to_value(),
            _ => Value::from(case.name()),
        };
        Ok(Transformed::keep(key, output))
    }
}

impl Attribute for EnumSerialize {
    fn kind(&self) -> AttributeKind {
        AttributeKind::EnumSerialize
    }

    fn as_property_transform(&self) -> Option<&dyn PropertyTransform> {
        Some(self)
    }
}
