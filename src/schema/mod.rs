//! Static registration tables for DTO types
//!
//! A [`Schema`] is the ordered list of fields a DTO is constructed from,
//! together with the attributes bound to each field and to the type itself.
//! Schemas are built once per type, usually inside a `once_cell` `Lazy`.

pub mod field;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::Context;
use crate::contracts::Attribute;
use crate::data::Input;
use crate::dto::Dto;
use crate::error::DtoResult;
use crate::hydration;
use crate::value::{EnumDef, Value};

pub use field::Field;

/// Declared type of a field
#[derive(Debug, Clone)]
pub enum FieldType {
    /// Anything; bound as-is
    Any,
    Bool,
    Int,
    Float,
    String,
    /// Homogeneous or mixed list
    List,
    /// Associative collection
    Map,
    DateTime,
    Enum(&'static EnumDef),
    /// Nested DTO, hydrated recursively from maps and objects
    Dto(DtoType),
}

impl FieldType {
    /// Type name as exposed to documentation and error messages
    pub fn name(&self) -> String {
        match self {
            FieldType::Any => "mixed".to_string(),
            FieldType::Bool => "bool".to_string(),
            FieldType::Int => "int".to_string(),
            FieldType::Float => "float".to_string(),
            FieldType::String => "string".to_string(),
            FieldType::List => "list".to_string(),
            FieldType::Map => "map".to_string(),
            FieldType::DateTime => "DateTime".to_string(),
            FieldType::Enum(def) => def.name().to_string(),
            FieldType::Dto(dto) => dto.name().to_string(),
        }
    }
}

/// Type-erased handle on a DTO type
///
/// Holds function pointers rather than the schema itself, so types that
/// nest themselves never force their own schema during construction.
#[derive(Clone, Copy)]
pub struct DtoType {
    schema: fn() -> &'static Schema,
    hydrate: fn(Input, &Context<'_>) -> DtoResult<Value>,
    is_instance: fn(&Value) -> bool,
}

impl DtoType {
    pub fn of<T: Dto>() -> Self {
        Self {
            schema: T::schema,
            hydrate: hydration::hydrate_value::<T>,
            is_instance: is_instance_of::<T>,
        }
    }

    pub fn schema(&self) -> &'static Schema {
        (self.schema)()
    }

    pub fn name(&self) -> &'static str {
        self.schema().name()
    }

    /// Hydrate one instance, returned as [`Value::Dto`]
    pub fn hydrate(&self, input: Input, ctx: &Context<'_>) -> DtoResult<Value> {
        (self.hydrate)(input, ctx)
    }

    /// Whether the value already is an instance of this type
    pub fn is_instance(&self, value: &Value) -> bool {
        (self.is_instance)(value)
    }
}

fn is_instance_of<T: Dto>(value: &Value) -> bool {
    value
        .as_dto()
        .is_some_and(|instance| instance.downcast_ref::<T>().is_some())
}

impl fmt::Debug for DtoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DtoType({})", self.name())
    }
}

/// Field name, type and nullability, as consumed by documentation tooling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSummary {
    pub name: String,
    pub type_name: String,
    pub nullable: bool,
}

/// Registration table for one DTO type
///
/// # Example
///
/// ```rust
/// use carapace::attributes::{MapFrom, SnakeCase};
/// use carapace::schema::{Field, FieldType, Schema};
///
/// let schema = Schema::builder("User")
///     .attribute(SnakeCase)
///     .field(Field::new("name", FieldType::String))
///     .field(Field::new("email", FieldType::String).attribute(MapFrom::new(["email_address"])))
///     .build();
///
/// assert_eq!(schema.fields().len(), 2);
/// assert_eq!(schema.class_attributes().len(), 1);
/// ```
pub struct Schema {
    name: &'static str,
    fields: Vec<Field>,
    /// Own class attributes followed by every ancestor's, closest first
    lineage: Vec<Arc<dyn Attribute>>,
}

impl Schema {
    pub fn builder(name: &'static str) -> SchemaBuilder {
        SchemaBuilder {
            name,
            fields: Vec::new(),
            attributes: Vec::new(),
            parents: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Fields in declaration (constructor) order
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Class-level attributes of this type and its ancestors, closest first
    pub fn class_attributes(&self) -> &[Arc<dyn Attribute>] {
        &self.lineage
    }

    /// Ordered field names, types and nullability
    pub fn describe(&self) -> Vec<FieldSummary> {
        self.fields
            .iter()
            .map(|field| FieldSummary {
                name: field.name().to_string(),
                type_name: field.ty().name(),
                nullable: field.is_nullable(),
            })
            .collect()
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .field("class_attributes", &self.lineage)
            .finish()
    }
}

/// Builder for [`Schema`]
pub struct SchemaBuilder {
    name: &'static str,
    fields: Vec<Field>,
    attributes: Vec<Arc<dyn Attribute>>,
    parents: Vec<&'static Schema>,
}

impl SchemaBuilder {
    /// Inherit the class-level attributes of a parent type
    pub fn extends(mut self, parent: &'static Schema) -> Self {
        self.parents.push(parent);
        self
    }

    /// Add a class-level attribute
    pub fn attribute(mut self, attribute: impl Attribute + 'static) -> Self {
        self.attributes.push(Arc::new(attribute));
        self
    }

    /// Add a class-level attribute that is already shared
    pub fn shared_attribute(mut self, attribute: Arc<dyn Attribute>) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Append a field; order of calls is constructor order
    pub fn field(mut self, field: Field) -> Self {
        if self.fields.iter().any(|existing| existing.name() == field.name()) {
            tracing::warn!("{} declares field '{}' twice", self.name, field.name());
        }
        self.fields.push(field);
        self
    }

    pub fn build(self) -> Schema {
        let mut lineage = self.attributes;
        for parent in &self.parents {
            lineage.extend(parent.class_attributes().iter().cloned());
        }

        Schema {
            name: self.name,
            fields: self.fields,
            lineage,
        }
    }
}
