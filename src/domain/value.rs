//! The payload model for persisted preferences.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A value the persistence layer can hold: a flag, a text setting, or a
/// string-keyed record.
///
/// Serialized form is the bare JSON value (`true`, `"dark"`,
/// `{"default": 100}`), so stored entries stay readable by other tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredValue {
    /// A boolean flag.
    Bool(bool),
    /// A text setting.
    Text(String),
    /// A string-keyed record of arbitrary JSON values.
    Map(Map<String, Value>),
}

impl StoredValue {
    /// Whether this value is falsy: `false`, empty text, or an empty map.
    ///
    /// The gateway represents falsy values by absence, removing the entry
    /// instead of writing it, so a falsy value never reaches the store.
    #[must_use]
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::Bool(flag) => !flag,
            Self::Text(text) => text.is_empty(),
            Self::Map(map) => map.is_empty(),
        }
    }

    /// Whether this value would actually be written by a save.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        !self.is_falsy()
    }

    /// The flag payload, if this is a [`StoredValue::Bool`].
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// The text payload, if this is a [`StoredValue::Text`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The record payload, if this is a [`StoredValue::Map`].
    #[must_use]
    pub const fn as_map(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<bool> for StoredValue {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<&str> for StoredValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for StoredValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Map<String, Value>> for StoredValue {
    fn from(map: Map<String, Value>) -> Self {
        Self::Map(map)
    }
}

impl TryFrom<Value> for StoredValue {
    type Error = Value;

    /// Convert a free-form JSON value into the stored domain.
    ///
    /// # Errors
    ///
    /// Hands the value back when it is not representable (numbers,
    /// arrays, `null`).
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(flag) => Ok(Self::Bool(flag)),
            Value::String(text) => Ok(Self::Text(text)),
            Value::Object(map) => Ok(Self::Map(map)),
            other => Err(other),
        }
    }
}

impl From<StoredValue> for Value {
    fn from(value: StoredValue) -> Self {
        match value {
            StoredValue::Bool(flag) => Self::Bool(flag),
            StoredValue::Text(text) => Self::String(text),
            StoredValue::Map(map) => Self::Object(map),
        }
    }
}
