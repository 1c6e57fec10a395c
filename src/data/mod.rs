//! Unified accessor over hydration input
//!
//! Wraps a map, JSON text or a model-like object behind one
//! read/write/delete interface so handlers never branch on input shape.
//!
//! Writes never reach the caller's storage:
//! - Maps: the wrapper owns a copy, mutated freely
//! - Objects: writes land in an overlay map; deletions mask the key so the
//!   object's own property reads as absent

pub mod object;

use std::collections::HashSet;
use std::sync::Arc;

use crate::dto::DtoInstance;
use crate::error::DtoResult;
use crate::value::{Value, ValueMap};

pub use object::{ItemList, ObjectRef, ObjectSource, PlainObject};

/// Raw input accepted by `from_input`, `collect` and `with`
#[derive(Debug, Clone)]
pub enum Input {
    /// Ordered key-value map
    Map(ValueMap),
    /// List of entity-shaped items (keyed by position when wrapped)
    List(Vec<Value>),
    /// JSON text, decoded eagerly on wrap
    Json(String),
    /// Model-like object read through its properties
    Object(ObjectRef),
}

impl Input {
    /// Wrap any object source
    pub fn object(object: impl ObjectSource + 'static) -> Self {
        Input::Object(Arc::new(object))
    }

    /// Interpret a value as hydration input, if it has an entity shape
    pub fn from_value(value: Value) -> Option<Input> {
        match value {
            Value::Map(map) => Some(Input::Map(map)),
            Value::List(items) => Some(Input::List(items)),
            Value::String(text) => Some(Input::Json(text)),
            Value::Object(object) => Some(Input::Object(object)),
            Value::Dto(instance) => Some(Input::Object(Arc::new(instance))),
            _ => None,
        }
    }
}

impl Default for Input {
    fn default() -> Self {
        Input::Map(ValueMap::new())
    }
}

impl From<ValueMap> for Input {
    fn from(map: ValueMap) -> Self {
        Input::Map(map)
    }
}

impl From<Vec<Value>> for Input {
    fn from(items: Vec<Value>) -> Self {
        Input::List(items)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Json(text.to_string())
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Json(text)
    }
}

impl From<ObjectRef> for Input {
    fn from(object: ObjectRef) -> Self {
        Input::Object(object)
    }
}

impl From<DtoInstance> for Input {
    fn from(instance: DtoInstance) -> Self {
        Input::Object(Arc::new(instance))
    }
}

impl From<serde_json::Value> for Input {
    fn from(json: serde_json::Value) -> Self {
        match Value::from(json) {
            Value::Map(map) => Input::Map(map),
            Value::List(items) => Input::List(items),
            scalar => Input::List(vec![scalar]),
        }
    }
}

/// Index-keyed map of list items, so lists read like any other map
fn list_to_map(items: Vec<Value>) -> ValueMap {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| (index.to_string(), item))
        .collect()
}

#[derive(Debug)]
enum Source {
    /// Mutable copy of the caller's map
    Map(ValueMap),
    /// Live reference to the caller's object plus pending writes and deletions
    Object {
        original: ObjectRef,
        overlay: ValueMap,
        masked: HashSet<String>,
    },
}

/// Unified read/write/delete view over one hydration input
///
/// # Example
///
/// ```rust
/// use carapace::data::Data;
///
/// let mut data = Data::wrap(r#"{"email_address": "nick@x.com"}"#).unwrap();
/// let email = data.get("email_address");
/// data.set("email", email);
/// data.unset("email_address");
///
/// assert!(data.has("email"));
/// assert!(!data.has("email_address"));
/// ```
#[derive(Debug)]
pub struct Data {
    source: Source,
}

impl Data {
    /// Wrap a map, object or JSON text
    ///
    /// JSON text is decoded eagerly; malformed text fails with
    /// [`DtoError::Parse`](crate::error::DtoError::Parse). A JSON scalar becomes a one-item list.
    pub fn wrap(input: impl Into<Input>) -> DtoResult<Self> {
        let source = match input.into() {
            Input::Map(map) => Source::Map(map),
            Input::List(items) => Source::Map(list_to_map(items)),
            Input::Json(text) => {
                let json: serde_json::Value = serde_json::from_str(&text)?;
                match Value::from(json) {
                    Value::Map(map) => Source::Map(map),
                    Value::List(items) => Source::Map(list_to_map(items)),
                    scalar => Source::Map(list_to_map(vec![scalar])),
                }
            }
            Input::Object(original) => Source::Object {
                original,
                overlay: ValueMap::new(),
                masked: HashSet::new(),
            },
        };
        Ok(Self { source })
    }

    pub fn is_map(&self) -> bool {
        matches!(self.source, Source::Map(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self.source, Source::Object { .. })
    }

    /// Whether the key is present
    ///
    /// Objects resolve overlay, then mask, then the original's properties,
    /// then its virtual-property probes.
    pub fn has(&self, key: &str) -> bool {
        match &self.source {
            Source::Map(map) => map.contains_key(key),
            Source::Object {
                original,
                overlay,
                masked,
            } => {
                if masked.contains(key) {
                    return false;
                }
                if overlay.contains_key(key) {
                    return true;
                }
                original.has_property(key)
                    || original.has_virtual(key)
                    || original.get_virtual(key).is_some()
            }
        }
    }

    /// Read a key, [`Value::Null`] when absent
    pub fn get(&self, key: &str) -> Value {
        match &self.source {
            Source::Map(map) => map.get(key).cloned().unwrap_or(Value::Null),
            Source::Object {
                original,
                overlay,
                masked,
            } => {
                if masked.contains(key) {
                    return Value::Null;
                }
                if let Some(value) = overlay.get(key) {
                    return value.clone();
                }
                original
                    .property(key)
                    .or_else(|| original.get_virtual(key))
                    .unwrap_or(Value::Null)
            }
        }
    }

    /// Write a key; a write after `unset` makes the key visible again
    pub fn set(&mut self, key: &str, value: Value) {
        match &mut self.source {
            Source::Map(map) => {
                map.insert(key.to_string(), value);
            }
            Source::Object {
                overlay, masked, ..
            } => {
                masked.remove(key);
                overlay.insert(key.to_string(), value);
            }
        }
    }

    /// Remove a key from view without touching the caller's data
    pub fn unset(&mut self, key: &str) {
        match &mut self.source {
            Source::Map(map) => {
                map.shift_remove(key);
            }
            Source::Object {
                overlay, masked, ..
            } => {
                overlay.shift_remove(key);
                masked.insert(key.to_string());
            }
        }
    }

    /// Snapshot of the current state as a map
    pub fn to_map(&self) -> ValueMap {
        match &self.source {
            Source::Map(map) => map.clone(),
            Source::Object {
                original,
                overlay,
                masked,
            } => merge_properties(original.properties(), overlay, masked),
        }
    }

    /// The wrapped items as a list
    ///
    /// - Maps: current values in order
    /// - Iterable objects: their items
    /// - Plain objects: property values merged with pending writes
    pub fn items(&self) -> Vec<Value> {
        match &self.source {
            Source::Map(map) => map.values().cloned().collect(),
            Source::Object {
                original,
                overlay,
                masked,
            } => match original.items() {
                Some(items) => items,
                None => merge_properties(original.properties(), overlay, masked)
                    .into_values()
                    .collect(),
            },
        }
    }
}

fn merge_properties(
    mut base: ValueMap,
    overlay: &ValueMap,
    masked: &HashSet<String>,
) -> ValueMap {
    base.retain(|key, _| !masked.contains(key));
    for (key, value) in overlay {
        base.insert(key.clone(), value.clone());
    }
    base
}
