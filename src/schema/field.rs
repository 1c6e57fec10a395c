//! Field descriptors

use std::sync::Arc;

use crate::contracts::{Attribute, AttributeKind};
use crate::dto::Dto;
use crate::value::{EnumDef, Value};

use super::{DtoType, FieldType};

/// One declared field of a DTO: name, type, nullability, default and the
/// attributes bound to it in declaration order
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    ty: FieldType,
    nullable: bool,
    default: Option<Value>,
    attributes: Vec<Arc<dyn Attribute>>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
            nullable: false,
            default: None,
            attributes: Vec::new(),
        }
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::String)
    }

    pub fn int(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Int)
    }

    pub fn float(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Float)
    }

    pub fn bool(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Bool)
    }

    pub fn list(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::List)
    }

    pub fn map(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Map)
    }

    pub fn datetime(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::DateTime)
    }

    pub fn any(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Any).nullable()
    }

    pub fn enumeration(name: impl Into<String>, def: &'static EnumDef) -> Self {
        Self::new(name, FieldType::Enum(def))
    }

    /// Field holding a nested DTO
    pub fn dto<T: Dto>(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Dto(DtoType::of::<T>()))
    }

    /// The field accepts null
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Value used when the input has no key for this field
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Bind an attribute; attributes run in the order they are bound
    pub fn attribute(mut self, attribute: impl Attribute + 'static) -> Self {
        self.attributes.push(Arc::new(attribute));
        self
    }

    pub fn shared_attribute(mut self, attribute: Arc<dyn Attribute>) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &FieldType {
        &self.ty
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn attributes(&self) -> &[Arc<dyn Attribute>] {
        &self.attributes
    }

    /// Whether an attribute of the given kind is bound directly to this field
    pub fn has_attribute(&self, kind: AttributeKind) -> bool {
        self.attributes.iter().any(|attribute| attribute.kind() == kind)
    }
}
