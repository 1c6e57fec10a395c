//! The `Dto` trait tying registration, hydration and serialization together
//!
//! User types implement three functions (schema, constructor, field values)
//! and get `from_input`, `collect`, `with`, `to_map` and `to_json` for free.
//!
//! # Example
//!
//! ```rust
//! use carapace::attributes::MapFrom;
//! use carapace::dto::{Arguments, Dto};
//! use carapace::error::DtoResult;
//! use carapace::schema::{Field, Schema};
//! use carapace::value::{IntoValue, Value};
//! use once_cell::sync::Lazy;
//! use serde_json::json;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Contact {
//!     name: String,
//!     email: String,
//! }
//!
//! static CONTACT: Lazy<Schema> = Lazy::new(|| {
//!     Schema::builder("Contact")
//!         .field(Field::string("name"))
//!         .field(Field::string("email").attribute(MapFrom::new(["email_address"])))
//!         .build()
//! });
//!
//! impl Dto for Contact {
//!     fn schema() -> &'static Schema {
//!         &CONTACT
//!     }
//!
//!     fn construct(args: &mut Arguments) -> DtoResult<Self> {
//!         Ok(Self {
//!             name: args.take("name")?,
//!             email: args.take("email")?,
//!         })
//!     }
//!
//!     fn values(&self) -> Vec<Value> {
//!         vec![self.name.clone().into_value(), self.email.clone().into_value()]
//!     }
//! }
//!
//! let contact = Contact::from_input(json!({"name": "Nick", "email_address": "nick@x.com"})).unwrap();
//! assert_eq!(contact.email, "nick@x.com");
//! assert_eq!(contact.to_json().unwrap(), r#"{"name":"Nick","email":"nick@x.com"}"#);
//! ```

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::config::{Config, Context};
use crate::data::{Input, ObjectSource};
use crate::error::{DtoError, DtoResult};
use crate::hydration;
use crate::schema::Schema;
use crate::serialization;
use crate::value::{Value, ValueMap};

pub use crate::hydration::Arguments;

/// An immutable value object built through the hydration pipeline
pub trait Dto: Clone + fmt::Debug + PartialEq + Send + Sync + 'static {
    /// Registration table, built once per type
    fn schema() -> &'static Schema;

    /// Constructor: bind typed values out of the resolved arguments
    fn construct(args: &mut Arguments) -> DtoResult<Self>;

    /// Current field values, in schema order
    fn values(&self) -> Vec<Value>;

    /// Hydrate an instance from a map, JSON text or object
    fn from_input(input: impl Into<Input>) -> DtoResult<Self> {
        Self::from_input_with(input, Config::global_default())
    }

    fn from_input_with(input: impl Into<Input>, config: &Config) -> DtoResult<Self> {
        hydration::hydrate::<Self>(input.into(), &Context::new(config))
    }

    /// Hydrate one instance per item of a list, JSON array or iterable object
    fn collect(input: impl Into<Input>) -> DtoResult<Vec<Self>> {
        Self::collect_with(input, Config::global_default())
    }

    fn collect_with(input: impl Into<Input>, config: &Config) -> DtoResult<Vec<Self>> {
        hydration::collect::<Self>(input.into(), &Context::new(config))
    }

    /// New instance with some fields replaced; `self` is left untouched
    fn with(&self, overrides: impl Into<Input>) -> DtoResult<Self> {
        self.with_named(overrides, ValueMap::new())
    }

    /// Like [`Dto::with`]; `named` wins over `overrides` on the same key
    fn with_named(&self, overrides: impl Into<Input>, named: ValueMap) -> DtoResult<Self> {
        self.with_named_with(overrides, named, Config::global_default())
    }

    fn with_named_with(
        &self,
        overrides: impl Into<Input>,
        named: ValueMap,
        config: &Config,
    ) -> DtoResult<Self> {
        hydration::with(self, overrides.into(), named, &Context::new(config))
    }

    /// Serialize to a map, applying transform attributes
    fn to_map(&self) -> DtoResult<ValueMap> {
        serialization::serialize(Self::schema(), self.values())
    }

    fn to_json(&self) -> DtoResult<String> {
        self.to_json_with(Config::global_default())
    }

    fn to_json_with(&self, config: &Config) -> DtoResult<String> {
        serialization::encode(self.to_map()?, config)
    }
}

/// Object-safe view of any [`Dto`]
pub trait AnyDto: fmt::Debug + Send + Sync {
    fn dyn_schema(&self) -> &'static Schema;

    fn field_values(&self) -> Vec<Value>;

    fn as_any(&self) -> &dyn Any;

    fn dyn_eq(&self, other: &dyn AnyDto) -> bool;
}

impl<T: Dto> AnyDto for T {
    fn dyn_schema(&self) -> &'static Schema {
        <T as Dto>::schema()
    }

    fn field_values(&self) -> Vec<Value> {
        self.values()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn AnyDto) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }
}

/// A hydrated DTO of any type, as held inside [`Value::Dto`]
#[derive(Clone)]
pub struct DtoInstance(Arc<dyn AnyDto>);

impl DtoInstance {
    pub fn new<T: Dto>(dto: T) -> Self {
        Self(Arc::new(dto))
    }

    pub fn downcast_ref<T: Dto>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }

    pub fn schema(&self) -> &'static Schema {
        self.0.dyn_schema()
    }

    pub fn name(&self) -> &'static str {
        self.schema().name()
    }

    /// Serialized form, transform attributes applied
    pub fn to_map(&self) -> DtoResult<ValueMap> {
        serialization::serialize(self.schema(), self.0.field_values())
    }

    /// Raw field values keyed by field name, no transforms applied
    pub fn fields(&self) -> ValueMap {
        self.schema()
            .fields()
            .iter()
            .map(|field| field.name().to_string())
            .zip(self.0.field_values())
            .collect()
    }
}

impl PartialEq for DtoInstance {
    fn eq(&self, other: &Self) -> bool {
        self.0.dyn_eq(other.0.as_ref())
    }
}

impl fmt::Debug for DtoInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

/// Instances re-hydrate like objects, exposing their raw fields
impl ObjectSource for DtoInstance {
    fn properties(&self) -> ValueMap {
        self.fields()
    }
}

/// Bind a [`Value::Dto`] back to its concrete type
pub fn dto_from_value<T: Dto>(value: Value) -> DtoResult<T> {
    let expected = T::schema().name();
    match value {
        Value::Dto(instance) => match instance.downcast_ref::<T>() {
            Some(dto) => Ok(dto.clone()),
            None => Err(DtoError::cast(
                expected,
                format!("expected {}, found {}", expected, instance.name()),
            )),
        },
        other => Err(DtoError::cast(
            expected,
            format!("expected {}, found {}", expected, other.type_name()),
        )),
    }
}

/// Implement [`FromValue`](crate::value::FromValue) and
/// [`IntoValue`](crate::value::IntoValue) for a [`Dto`], so it can be nested
/// in other DTOs
#[macro_export]
macro_rules! dto_value {
    ($ty:ty) => {
        impl $crate::value::FromValue for $ty {
            fn from_value(value: $crate::value::Value) -> $crate::error::DtoResult<Self> {
                $crate::dto::dto_from_value::<$ty>(value)
            }

            fn type_label() -> String {
                <$ty as $crate::dto::Dto>::schema().name().to_string()
            }
        }

        impl $crate::value::IntoValue for $ty {
            fn into_value(self) -> $crate::value::Value {
                $crate::value::Value::dto(self)
            }
        }
    };
}
