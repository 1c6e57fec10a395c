//! Primitive coercion

use std::fmt;
use std::str::FromStr;

use crate::config::Context;
use crate::error::{DtoError, DtoResult};
use crate::value::Value;

use super::Caster;

/// Primitive target types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Int,
    Float,
    String,
    Bool,
    /// Generic collection (list or map)
    Array,
}

impl FromStr for Primitive {
    type Err = DtoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" | "integer" => Ok(Primitive::Int),
            "float" | "double" => Ok(Primitive::Float),
            "string" => Ok(Primitive::String),
            "bool" | "boolean" => Ok(Primitive::Bool),
            "array" => Ok(Primitive::Array),
            other => Err(DtoError::InvalidAttribute(format!(
                "Unsupported primitive type: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Int => write!(f, "int"),
            Primitive::Float => write!(f, "float"),
            Primitive::String => write!(f, "string"),
            Primitive::Bool => write!(f, "bool"),
            Primitive::Array => write!(f, "array"),
        }
    }
}

/// Coerces values to int, float, string, bool or a generic collection
///
/// Scalars convert between each other; numeric text parses, other text
/// fails. Collections come from lists and maps as-is, JSON text holding a
/// collection, objects (as their properties) or any other value wrapped as a
/// one-item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimitiveCaster {
    target: Primitive,
}

impl PrimitiveCaster {
    pub fn new(target: Primitive) -> Self {
        Self { target }
    }

    /// Caster for a type given by name (`"int"`, `"float"`, `"string"`,
    /// `"bool"`, `"array"`)
    pub fn named(type_name: &str) -> DtoResult<Self> {
        type_name.parse().map(Self::new)
    }

    fn unsupported(&self, value: &Value) -> DtoError {
        DtoError::cast(
            self.target.to_string(),
            format!("unsupported type {}", value.type_name()),
        )
    }

    fn to_int(&self, value: Value) -> DtoResult<Value> {
        Ok(Value::Int(match value {
            Value::Int(i) => i,
            Value::Float(f) if f.is_finite() => truncate(f)?,
            Value::Bool(b) => i64::from(b),
            Value::Null => 0,
            Value::String(ref s) => {
                let trimmed = s.trim();
                match trimmed.parse::<i64>() {
                    Ok(i) => i,
                    Err(_) => match trimmed.parse::<f64>() {
                        Ok(f) if f.is_finite() => truncate(f)?,
                        _ => {
                            return Err(DtoError::cast(
                                "int",
                                format!("'{}' is not numeric", s),
                            ));
                        }
                    },
                }
            }
            other => return Err(self.unsupported(&other)),
        }))
    }

    fn to_float(&self, value: Value) -> DtoResult<Value> {
        Ok(Value::Float(match value {
            Value::Float(f) => f,
            Value::Int(i) => i as f64,
            Value::Bool(b) => f64::from(u8::from(b)),
            Value::Null => 0.0,
            Value::String(ref s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| DtoError::cast("float", format!("'{}' is not numeric", s)))?,
            other => return Err(self.unsupported(&other)),
        }))
    }

    fn to_text(&self, value: Value) -> DtoResult<Value> {
        Ok(Value::String(match value {
            Value::String(s) => s,
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Bool(true) => "1".to_string(),
            Value::Bool(false) | Value::Null => String::new(),
            Value::Enum(case) => match case.backing() {
                Some(backing) => backing.to_string(),
                None => return Err(self.unsupported(&Value::Enum(case))),
            },
            other => return Err(self.unsupported(&other)),
        }))
    }

    fn to_bool(&self, value: Value) -> Value {
        Value::Bool(match value {
            Value::Null => false,
            Value::Bool(b) => b,
            Value::Int(i) => i != 0,
            Value::Float(f) => f != 0.0,
            Value::String(s) => !(s.is_empty() || s == "0"),
            Value::List(items) => !items.is_empty(),
            Value::Map(map) => !map.is_empty(),
            _ => true,
        })
    }

    fn to_array(&self, value: Value) -> DtoResult<Value> {
        Ok(match value {
            Value::List(_) | Value::Map(_) => value,
            Value::Null => Value::List(Vec::new()),
            Value::String(text) => match Value::from_json_str(&text) {
                Ok(parsed @ (Value::List(_) | Value::Map(_))) => parsed,
                _ => Value::List(vec![Value::String(text)]),
            },
            Value::Object(object) => Value::Map(object.properties()),
            Value::Dto(instance) => Value::Map(instance.fields()),
            other => Value::List(vec![other]),
        })
    }
}

/// Drop the fractional part; values outside the `i64` range are rejected
fn truncate(f: f64) -> DtoResult<i64> {
    let whole = f.trunc();
    if whole < i64::MIN as f64 || whole >= i64::MAX as f64 {
        return Err(DtoError::cast("int", format!("{} is out of range", f)));
    }
    Ok(whole as i64)
}

impl Caster for PrimitiveCaster {
    fn cast(&self, value: Value, _ctx: &Context<'_>) -> DtoResult<Value> {
        match self.target {
            Primitive::Int => self.to_int(value),
            Primitive::Float => self.to_float(value),
            Primitive::String => self.to_text(value),
            Primitive::Bool => Ok(self.to_bool(value)),
            Primitive::Array => self.to_array(value),
        }
    }

    fn target(&self) -> String {
        self.target.to_string()
    }
}
