use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Accumulated option state: option name to validated value, insertion
/// ordered, last write wins per key.
pub type OptionMap = IndexMap<String, OptionValue>;

/// A single validated option value.
///
/// Serializes untagged so the option mapping lands in exactly the JSON shape
/// the browser-side rendering engine expects (`true`, `50`, `"65%"`,
/// `{"groupWidth": "20%"}`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<OptionValue>),
    Map(OptionMap),
}

impl OptionValue {
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_map(&self) -> Option<&OptionMap> {
        match self {
            Self::Map(value) => Some(value),
            _ => None,
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<OptionValue>> for OptionValue {
    fn from(value: Vec<OptionValue>) -> Self {
        Self::List(value)
    }
}

impl From<OptionMap> for OptionValue {
    fn from(value: OptionMap) -> Self {
        Self::Map(value)
    }
}

/// Builds a single-key option fragment, the unit every merge operates on.
#[must_use]
pub fn fragment(key: impl Into<String>, value: impl Into<OptionValue>) -> OptionMap {
    let mut map = OptionMap::with_capacity(1);
    map.insert(key.into(), value.into());
    map
}
