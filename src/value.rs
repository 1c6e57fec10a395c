//! Dynamic values flowing through the hydration pipeline
//!
//! Loosely-typed input (maps, JSON text, objects) is normalized into [`Value`]
//! trees before handlers and casters run. Typed DTO fields are bound from
//! these values through [`FromValue`] and read back through [`IntoValue`].

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Utc};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::data::ObjectRef;
use crate::dto::{Dto, DtoInstance};
use crate::error::{DtoError, DtoResult};

/// Ordered string-keyed map, the shape of every hydration input
pub type ValueMap = IndexMap<String, Value>;

/// A loosely-typed value
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(ValueMap),
    DateTime(DateTime<FixedOffset>),
    Enum(EnumCase),
    /// A hydrated DTO instance
    Dto(DtoInstance),
    /// A caller-owned model-like object, read through its properties
    Object(ObjectRef),
}

impl Value {
    /// Wrap a hydrated DTO
    pub fn dto<T: Dto>(dto: T) -> Value {
        Value::Dto(DtoInstance::new(dto))
    }

    /// Wrap a caller-owned object
    pub fn object(object: ObjectRef) -> Value {
        Value::Object(object)
    }

    /// Parse JSON text into a value
    pub fn from_json_str(text: &str) -> DtoResult<Value> {
        let json: serde_json::Value = serde_json::from_str(text)?;
        Ok(Value::from(json))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Empty string, empty list or empty map
    pub fn is_empty(&self) -> bool {
        match self {
            Value::String(s) => s.is_empty(),
            Value::List(items) => items.is_empty(),
            Value::Map(map) => map.is_empty(),
            _ => false,
        }
    }

    /// Map, object or DTO: something that can be hydrated from
    pub fn is_map_or_object(&self) -> bool {
        matches!(self, Value::Map(_) | Value::Object(_) | Value::Dto(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumCase> {
        match self {
            Value::Enum(case) => Some(case),
            _ => None,
        }
    }

    pub fn as_dto(&self) -> Option<&DtoInstance> {
        match self {
            Value::Dto(instance) => Some(instance),
            _ => None,
        }
    }

    /// Short name of the value's shape, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::DateTime(_) => "datetime",
            Value::Enum(_) => "enum",
            Value::Dto(_) => "dto",
            Value::Object(_) => "object",
        }
    }

    /// Encode into a JSON value, failing on anything JSON cannot represent
    pub fn to_json(&self) -> DtoResult<serde_json::Value> {
        Ok(match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(i) => serde_json::Value::from(*i),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .ok_or_else(|| DtoError::Encode(format!("float {} is not representable", f)))?,
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::List(items) => serde_json::Value::Array(
                items.iter().map(Value::to_json).collect::<DtoResult<Vec<_>>>()?,
            ),
            Value::Map(map) => {
                let mut object = serde_json::Map::with_capacity(map.len());
                for (key, value) in map {
                    object.insert(key.clone(), value.to_json()?);
                }
                serde_json::Value::Object(object)
            }
            Value::DateTime(dt) => serde_json::Value::String(dt.to_rfc3339()),
            Value::Enum(case) => match case.backing() {
                Some(backing) => backing.to_value().to_json()?,
                None => {
                    return Err(DtoError::Encode(format!(
                        "non-backed enum case {} cannot be encoded",
                        case
                    )));
                }
            },
            Value::Dto(instance) => Value::Map(instance.to_map()?).to_json()?,
            Value::Object(object) => Value::Map(object.properties()).to_json()?,
        })
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::DateTime(a), Value::DateTime(b)) => a == b,
            (Value::Enum(a), Value::Enum(b)) => a == b,
            (Value::Dto(a), Value::Dto(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            _ => false,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(object) => Value::Map(
                object
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<ValueMap> for Value {
    fn from(map: ValueMap) -> Self {
        Value::Map(map)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

/// Backing scalar of a value-backed enumeration case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backing {
    Int(i64),
    Str(&'static str),
}

impl Backing {
    pub fn to_value(self) -> Value {
        match self {
            Backing::Int(i) => Value::Int(i),
            Backing::Str(s) => Value::String(s.to_string()),
        }
    }
}

impl fmt::Display for Backing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backing::Int(i) => write!(f, "{}", i),
            Backing::Str(s) => write!(f, "{}", s),
        }
    }
}

/// Zero-argument method callable on an enumeration case by name
pub type EnumMethod = fn(&EnumCase) -> Value;

#[derive(Debug, Clone)]
struct EnumCaseDef {
    name: &'static str,
    backing: Option<Backing>,
}

/// Static description of an enumeration type
///
/// Enumerations are either unit (cases are symbolic names only) or
/// value-backed, where every case carries an integer or string.
///
/// ```rust
/// use carapace::value::EnumDef;
///
/// let status = EnumDef::string_backed("Status", &[("ACTIVE", "active"), ("INACTIVE", "inactive")]);
/// assert!(status.is_backed());
/// ```
pub struct EnumDef {
    name: &'static str,
    cases: Vec<EnumCaseDef>,
    methods: Vec<(&'static str, EnumMethod)>,
}

impl EnumDef {
    /// Enumeration whose cases have no backing value
    pub fn unit(name: &'static str, cases: &[&'static str]) -> Self {
        Self {
            name,
            cases: cases
                .iter()
                .map(|case| EnumCaseDef {
                    name: *case,
                    backing: None,
                })
                .collect(),
            methods: Vec::new(),
        }
    }

    /// Enumeration backed by strings, given as `(case name, value)` pairs
    pub fn string_backed(name: &'static str, cases: &[(&'static str, &'static str)]) -> Self {
        Self {
            name,
            cases: cases
                .iter()
                .map(|(case, value)| EnumCaseDef {
                    name: *case,
                    backing: Some(Backing::Str(*value)),
                })
                .collect(),
            methods: Vec::new(),
        }
    }

    /// Enumeration backed by integers, given as `(case name, value)` pairs
    pub fn int_backed(name: &'static str, cases: &[(&'static str, i64)]) -> Self {
        Self {
            name,
            cases: cases
                .iter()
                .map(|(case, value)| EnumCaseDef {
                    name: *case,
                    backing: Some(Backing::Int(*value)),
                })
                .collect(),
            methods: Vec::new(),
        }
    }

    /// Register a named zero-argument method
    pub fn with_method(mut self, name: &'static str, method: EnumMethod) -> Self {
        self.methods.push((name, method));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_backed(&self) -> bool {
        self.cases.iter().any(|case| case.backing.is_some())
    }

    /// Whether every case is backed by an integer
    pub fn is_int_backed(&self) -> bool {
        !self.cases.is_empty()
            && self
                .cases
                .iter()
                .all(|case| matches!(case.backing, Some(Backing::Int(_))))
    }

    pub fn cases(&'static self) -> impl Iterator<Item = EnumCase> {
        (0..self.cases.len()).map(move |index| EnumCase { def: self, index })
    }

    /// Look up a case by its exact symbolic name
    pub fn case(&'static self, name: &str) -> Option<EnumCase> {
        self.cases().find(|case| case.name() == name)
    }

    /// Look up a case by its exact backing value
    pub fn case_by_backing(&'static self, backing: &Backing) -> Option<EnumCase> {
        self.cases().find(|case| case.backing().as_ref() == Some(backing))
    }

    pub fn method(&self, name: &str) -> Option<EnumMethod> {
        self.methods
            .iter()
            .find(|(method, _)| *method == name)
            .map(|(_, f)| *f)
    }
}

impl fmt::Debug for EnumDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumDef")
            .field("name", &self.name)
            .field("cases", &self.cases)
            .field(
                "methods",
                &self.methods.iter().map(|(name, _)| *name).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// One case of a registered enumeration
#[derive(Clone, Copy)]
pub struct EnumCase {
    def: &'static EnumDef,
    index: usize,
}

impl EnumCase {
    pub fn definition(&self) -> &'static EnumDef {
        self.def
    }

    pub fn name(&self) -> &'static str {
        self.def.cases[self.index].name
    }

    pub fn backing(&self) -> Option<Backing> {
        self.def.cases[self.index].backing
    }

    /// Call a registered method, if the enumeration defines it
    pub fn call(&self, method: &str) -> Option<Value> {
        self.def.method(method).map(|f| f(self))
    }

    /// Whether this case belongs to the given enumeration
    pub fn is_of(&self, def: &EnumDef) -> bool {
        std::ptr::eq(self.def, def)
    }
}

impl PartialEq for EnumCase {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.def, other.def) && self.index == other.index
    }
}

impl fmt::Debug for EnumCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.def.name, self.name())
    }
}

impl fmt::Display for EnumCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.def.name, self.name())
    }
}

/// A Rust enum bound to an [`EnumDef`]
pub trait DtoEnum: Sized + Copy + 'static {
    fn definition() -> &'static EnumDef;

    /// Map a case of the definition back onto the Rust enum
    fn from_case(case: &EnumCase) -> Option<Self>;

    /// Symbolic name of this variant in the definition
    fn case_name(&self) -> &'static str;

    fn to_case(&self) -> Option<EnumCase> {
        Self::definition().case(self.case_name())
    }
}

static MODULE_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-z_][a-z0-9_]*::").expect("valid module path pattern"));

/// Strip module paths from a Rust type name (`alloc::string::String` -> `String`)
pub fn short_type_name<T: ?Sized>() -> String {
    MODULE_PATH
        .replace_all(std::any::type_name::<T>(), "")
        .into_owned()
}

/// Convert a [`Value`] into a typed constructor argument
pub trait FromValue: Sized {
    fn from_value(value: Value) -> DtoResult<Self>;

    /// Name of the target type for error messages
    fn type_label() -> String {
        short_type_name::<Self>()
    }
}

/// Convert a typed field back into a [`Value`]
pub trait IntoValue {
    fn into_value(self) -> Value;
}

fn mismatch<T: FromValue>(value: &Value) -> DtoError {
    DtoError::cast(
        T::type_label(),
        format!("expected {}, found {}", T::type_label(), value.type_name()),
    )
}

impl FromValue for Value {
    fn from_value(value: Value) -> DtoResult<Self> {
        Ok(value)
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> DtoResult<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl FromValue for i64 {
    fn from_value(value: Value) -> DtoResult<Self> {
        match value {
            Value::Int(i) => Ok(i),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl FromValue for i32 {
    fn from_value(value: Value) -> DtoResult<Self> {
        match value {
            Value::Int(i) => i32::try_from(i)
                .map_err(|_| DtoError::cast("i32", format!("{} is out of range", i))),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl FromValue for u32 {
    fn from_value(value: Value) -> DtoResult<Self> {
        match value {
            Value::Int(i) => u32::try_from(i)
                .map_err(|_| DtoError::cast("u32", format!("{} is out of range", i))),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl FromValue for f64 {
    fn from_value(value: Value) -> DtoResult<Self> {
        match value {
            Value::Float(f) => Ok(f),
            // Integers widen to floats, nothing else coerces
            Value::Int(i) => Ok(i as f64),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> DtoResult<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl FromValue for DateTime<FixedOffset> {
    fn from_value(value: Value) -> DtoResult<Self> {
        match value {
            Value::DateTime(dt) => Ok(dt),
            other => Err(mismatch::<Self>(&other)),
        }
    }

    fn type_label() -> String {
        "DateTime".to_string()
    }
}

impl FromValue for DateTime<Utc> {
    fn from_value(value: Value) -> DtoResult<Self> {
        match value {
            Value::DateTime(dt) => Ok(dt.with_timezone(&Utc)),
            other => Err(mismatch::<Self>(&other)),
        }
    }

    fn type_label() -> String {
        "DateTime".to_string()
    }
}

impl FromValue for ValueMap {
    fn from_value(value: Value) -> DtoResult<Self> {
        match value {
            Value::Map(map) => Ok(map),
            other => Err(mismatch::<Self>(&other)),
        }
    }

    fn type_label() -> String {
        "map".to_string()
    }
}

impl FromValue for EnumCase {
    fn from_value(value: Value) -> DtoResult<Self> {
        match value {
            Value::Enum(case) => Ok(case),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl FromValue for DtoInstance {
    fn from_value(value: Value) -> DtoResult<Self> {
        match value {
            Value::Dto(instance) => Ok(instance),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> DtoResult<Self> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }

    fn type_label() -> String {
        format!("?{}", T::type_label())
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: Value) -> DtoResult<Self> {
        match value {
            Value::List(items) => items.into_iter().map(T::from_value).collect(),
            other => Err(mismatch::<Self>(&other)),
        }
    }

    fn type_label() -> String {
        format!("{}[]", T::type_label())
    }
}

impl<T: FromValue> FromValue for Box<T> {
    fn from_value(value: Value) -> DtoResult<Self> {
        T::from_value(value).map(Box::new)
    }

    fn type_label() -> String {
        T::type_label()
    }
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl IntoValue for bool {
    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

impl IntoValue for i64 {
    fn into_value(self) -> Value {
        Value::Int(self)
    }
}

impl IntoValue for i32 {
    fn into_value(self) -> Value {
        Value::Int(i64::from(self))
    }
}

impl IntoValue for u32 {
    fn into_value(self) -> Value {
        Value::Int(i64::from(self))
    }
}

impl IntoValue for f64 {
    fn into_value(self) -> Value {
        Value::Float(self)
    }
}

impl IntoValue for String {
    fn into_value(self) -> Value {
        Value::String(self)
    }
}

impl IntoValue for &str {
    fn into_value(self) -> Value {
        Value::String(self.to_string())
    }
}

impl IntoValue for DateTime<FixedOffset> {
    fn into_value(self) -> Value {
        Value::DateTime(self)
    }
}

impl IntoValue for DateTime<Utc> {
    fn into_value(self) -> Value {
        Value::DateTime(self.fixed_offset())
    }
}

impl IntoValue for ValueMap {
    fn into_value(self) -> Value {
        Value::Map(self)
    }
}

impl IntoValue for EnumCase {
    fn into_value(self) -> Value {
        Value::Enum(self)
    }
}

impl IntoValue for DtoInstance {
    fn into_value(self) -> Value {
        Value::Dto(self)
    }
}

impl<T: IntoValue> IntoValue for Option<T> {
    fn into_value(self) -> Value {
        match self {
            Some(value) => value.into_value(),
            None => Value::Null,
        }
    }
}

impl<T: IntoValue> IntoValue for Vec<T> {
    fn into_value(self) -> Value {
        Value::List(self.into_iter().map(IntoValue::into_value).collect())
    }
}

impl<T: IntoValue> IntoValue for Box<T> {
    fn into_value(self) -> Value {
        (*self).into_value()
    }
}

/// Bind a Rust enum implementing [`DtoEnum`] into values
pub fn enum_from_value<T: DtoEnum>(value: Value) -> DtoResult<T> {
    let def = T::definition();
    match value {
        Value::Enum(case) if case.is_of(def) => T::from_case(&case).ok_or_else(|| {
            DtoError::cast(def.name(), format!("case {} has no Rust variant", case.name()))
        }),
        other => Err(DtoError::cast(
            def.name(),
            format!("expected {} case, found {}", def.name(), other.type_name()),
        )),
    }
}

/// Turn a Rust enum implementing [`DtoEnum`] into a value
pub fn enum_into_value<T: DtoEnum>(variant: T) -> Value {
    match variant.to_case() {
        Some(case) => Value::Enum(case),
        None => {
            tracing::warn!(
                "{} has no case named {}",
                T::definition().name(),
                variant.case_name()
            );
            Value::String(variant.case_name().to_string())
        }
    }
}

/// Implement [`FromValue`] and [`IntoValue`] for a [`DtoEnum`]
#[macro_export]
macro_rules! dto_enum {
    ($ty:ty) => {
        impl $crate::value::FromValue for $ty {
            fn from_value(value: $crate::value::Value) -> $crate::error::DtoResult<Self> {
                $crate::value::enum_from_value::<$ty>(value)
            }

            fn type_label() -> String {
                <$ty as $crate::value::DtoEnum>::definition().name().to_string()
            }
        }

        impl $crate::value::IntoValue for $ty {
            fn into_value(self) -> $crate::value::Value {
                $crate::value::enum_into_value(self)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    static COLOR: Lazy<EnumDef> =
        Lazy::new(|| EnumDef::unit("Color", &["RED", "GREEN", "BLUE"]));

    static CODE: Lazy<EnumDef> =
        Lazy::new(|| EnumDef::int_backed("StatusCode", &[("PENDING", 100), ("ACTIVE", 200)]));

    #[test]
    fn test_json_numbers_keep_integer_shape() {
        let value = Value::from(serde_json::json!({"a": 1, "b": 1.5}));
        let map = value.as_map().unwrap();

        assert_eq!(map["a"], Value::Int(1));
        assert_eq!(map["b"], Value::Float(1.5));
    }

    #[test]
    fn test_json_object_preserves_key_order() {
        let value = Value::from_json_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let keys: Vec<&str> = value.as_map().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_non_finite_float_fails_encoding() {
        assert!(matches!(
            Value::Float(f64::NAN).to_json(),
            Err(DtoError::Encode(_))
        ));
    }

    #[test]
    fn test_unit_enum_fails_encoding() {
        let red = COLOR.case("RED").unwrap();
        assert!(matches!(Value::Enum(red).to_json(), Err(DtoError::Encode(_))));
    }

    #[test]
    fn test_backed_enum_encodes_backing_value() {
        let active = CODE.case("ACTIVE").unwrap();
        assert_eq!(Value::Enum(active).to_json().unwrap(), serde_json::json!(200));
    }

    #[test]
    fn test_enum_lookup() {
        assert!(CODE.is_int_backed());
        assert!(!COLOR.is_backed());
        assert_eq!(
            CODE.case_by_backing(&Backing::Int(100)).map(|c| c.name()),
            Some("PENDING")
        );
        assert_eq!(format!("{}", COLOR.case("BLUE").unwrap()), "Color::BLUE");
    }

    #[test]
    fn test_option_and_vec_binding() {
        let none: Option<String> = FromValue::from_value(Value::Null).unwrap();
        assert_eq!(none, None);

        let names: Vec<String> =
            FromValue::from_value(Value::List(vec!["a".into(), "b".into()])).unwrap();
        assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_binding_mismatch_is_cast_error() {
        let err = String::from_value(Value::Int(3)).unwrap_err();
        assert!(matches!(err, DtoError::Cast { ref target, .. } if target == "String"));
    }

    #[test]
    fn test_int_widens_to_float() {
        assert_eq!(f64::from_value(Value::Int(2)).unwrap(), 2.0);
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name::<String>(), "String");
        assert_eq!(short_type_name::<Option<String>>(), "Option<String>");
    }
}
