//! Model-like objects as hydration input

use std::fmt;
use std::sync::Arc;

use crate::value::{Value, ValueMap};

/// Shared reference to a caller-owned object
pub type ObjectRef = Arc<dyn ObjectSource>;

/// A model-like object that can be read through named properties
///
/// Only [`properties`](ObjectSource::properties) is required. Objects with
/// dynamic properties override the virtual probes; iterable containers
/// override [`items`](ObjectSource::items).
pub trait ObjectSource: fmt::Debug + Send + Sync {
    /// Enumerable properties in declaration order
    fn properties(&self) -> ValueMap;

    /// Read one declared property; `Some(Value::Null)` is a present null
    fn property(&self, key: &str) -> Option<Value> {
        self.properties().shift_remove(key)
    }

    fn has_property(&self, key: &str) -> bool {
        self.properties().contains_key(key)
    }

    /// Probe for a dynamic property that is not enumerable
    fn has_virtual(&self, _key: &str) -> bool {
        false
    }

    /// Read a dynamic property; `None` when the read fails
    fn get_virtual(&self, _key: &str) -> Option<Value> {
        None
    }

    /// Items of an iterable object, `None` for plain objects
    fn items(&self) -> Option<Vec<Value>> {
        None
    }
}

/// Plain object backed by a fixed property map
#[derive(Debug, Clone, Default)]
pub struct PlainObject {
    properties: ValueMap,
}

impl PlainObject {
    pub fn new(properties: ValueMap) -> Self {
        Self { properties }
    }

    /// Build from `(name, value)` pairs
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Self {
            properties: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl ObjectSource for PlainObject {
    fn properties(&self) -> ValueMap {
        self.properties.clone()
    }

    fn property(&self, key: &str) -> Option<Value> {
        self.properties.get(key).cloned()
    }

    fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }
}

/// Iterable object yielding a fixed list of items
#[derive(Debug, Clone, Default)]
pub struct ItemList {
    items: Vec<Value>,
}

impl ItemList {
    pub fn new(items: Vec<Value>) -> Self {
        Self { items }
    }
}

impl ObjectSource for ItemList {
    fn properties(&self) -> ValueMap {
        ValueMap::new()
    }

    fn items(&self) -> Option<Vec<Value>> {
        Some(self.items.clone())
    }
}
