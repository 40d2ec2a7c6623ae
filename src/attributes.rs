//! Attribute values carried by nodes and edges
//!
//! The store treats attribute maps as opaque user data: it never inspects
//! them beyond "present or empty" during serialization. Values use an
//! untagged representation so maps round-trip as plain JSON objects in the
//! interchange format.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// User-supplied key/value mapping attached to a node or an edge.
///
/// Insertion order is preserved, mirroring the interchange format's
/// plain-object semantics.
pub type AttributeMap = IndexMap<String, AttributeValue>;

/// A single attribute value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Array(Vec<AttributeValue>),
    Map(IndexMap<String, AttributeValue>),
    Null,
}

impl AttributeValue {
    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, AttributeValue::Null)
    }

    /// Get string value if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get integer value if this is an integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            AttributeValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get float value if this is a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            AttributeValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get boolean value if this is a boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            AttributeValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get array value if this is an array
    pub fn as_array(&self) -> Option<&[AttributeValue]> {
        match self {
            AttributeValue::Array(values) => Some(values),
            _ => None,
        }
    }

    /// Get map value if this is a map
    pub fn as_map(&self) -> Option<&IndexMap<String, AttributeValue>> {
        match self {
            AttributeValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Get type name as string
    pub fn type_name(&self) -> &'static str {
        match self {
            AttributeValue::String(_) => "String",
            AttributeValue::Integer(_) => "Integer",
            AttributeValue::Float(_) => "Float",
            AttributeValue::Boolean(_) => "Boolean",
            AttributeValue::Array(_) => "Array",
            AttributeValue::Map(_) => "Map",
            AttributeValue::Null => "Null",
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::String(s) => write!(f, "\"{}\"", s),
            AttributeValue::Integer(i) => write!(f, "{}", i),
            AttributeValue::Float(fl) => write!(f, "{}", fl),
            AttributeValue::Boolean(b) => write!(f, "{}", b),
            AttributeValue::Array(values) => {
                write!(f, "[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                write!(f, "]")
            }
            AttributeValue::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
            AttributeValue::Null => write!(f, "null"),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::String(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::String(s)
    }
}

impl From<i64> for AttributeValue {
    fn from(i: i64) -> Self {
        AttributeValue::Integer(i)
    }
}

impl From<f64> for AttributeValue {
    fn from(f: f64) -> Self {
        AttributeValue::Float(f)
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        AttributeValue::Boolean(b)
    }
}

impl From<Vec<AttributeValue>> for AttributeValue {
    fn from(values: Vec<AttributeValue>) -> Self {
        AttributeValue::Array(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_serialization() {
        assert_eq!(
            serde_json::to_string(&AttributeValue::from("red")).unwrap(),
            "\"red\""
        );
        assert_eq!(serde_json::to_string(&AttributeValue::from(5i64)).unwrap(), "5");
        assert_eq!(
            serde_json::to_string(&AttributeValue::from(true)).unwrap(),
            "true"
        );
        assert_eq!(
            serde_json::to_string(&AttributeValue::Null).unwrap(),
            "null"
        );
    }

    #[test]
    fn test_map_serializes_as_plain_object() {
        let mut attributes = AttributeMap::new();
        attributes.insert("color".to_string(), "red".into());
        attributes.insert("weight".to_string(), 3i64.into());

        let json = serde_json::to_string(&attributes).unwrap();
        assert_eq!(json, r#"{"color":"red","weight":3}"#);
    }

    #[test]
    fn test_untagged_deserialization() {
        let value: AttributeValue = serde_json::from_str("4.5").unwrap();
        assert_eq!(value.as_float(), Some(4.5));

        let value: AttributeValue = serde_json::from_str("12").unwrap();
        assert_eq!(value.as_integer(), Some(12));

        let value: AttributeValue = serde_json::from_str(r#"{"a":[1,2]}"#).unwrap();
        let inner = value.as_map().unwrap();
        assert_eq!(inner["a"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_accessors() {
        let value = AttributeValue::from("hello");
        assert_eq!(value.as_str(), Some("hello"));
        assert_eq!(value.as_integer(), None);
        assert_eq!(value.type_name(), "String");
        assert!(!value.is_null());
    }
}
