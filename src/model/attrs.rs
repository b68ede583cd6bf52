//! Node attribute bags and typed attribute keys.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

/// The attribute bag carried by every non-text node.
///
/// Values are kept in their host JSON form and converted to typed values on
/// read through an [`AttrKey`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attrs(BTreeMap<String, Value>);

impl Attrs {
    /// Create an empty attribute bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the raw value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Store `value` under `key`, returning the previous value.
    pub fn set(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Remove the value stored under `key`.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// Check whether `key` holds a non-null value.
    pub fn contains(&self, key: &str) -> bool {
        self.0.get(key).is_some_and(|v| !v.is_null())
    }

    /// Check if the bag holds no attributes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Attrs {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// A typed handle on one attribute name.
///
/// `AttrKey<PaperSize>` reads the stored JSON value and converts it to a
/// `PaperSize`; absent, `null` and malformed values all read as `None`.
pub struct AttrKey<T> {
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> AttrKey<T> {
    /// Create a key for the attribute `name`.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    /// Get the attribute name.
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T: DeserializeOwned> AttrKey<T> {
    /// Read the attribute from `attrs`.
    pub fn read(&self, attrs: &Attrs) -> Option<T> {
        let value = attrs.get(self.name)?;
        if value.is_null() {
            return None;
        }
        match serde_json::from_value(value.clone()) {
            Ok(v) => Some(v),
            Err(e) => {
                log::debug!("Ignoring malformed attribute '{}': {}", self.name, e);
                None
            }
        }
    }
}

impl<T: Serialize> AttrKey<T> {
    /// Convert a typed value to its stored JSON form.
    pub fn to_value(&self, value: &T) -> Result<Value> {
        serde_json::to_value(value).map_err(|e| Error::Attribute {
            key: self.name.to_string(),
            reason: e.to_string(),
        })
    }
}

impl<T> Clone for AttrKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for AttrKey<T> {}

impl<T> fmt::Debug for AttrKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AttrKey").field(&self.name).finish()
    }
}
