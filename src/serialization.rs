//! Serialization contracts between live records and the interchange format
//!
//! Everything here is pure: serializers copy attribute maps instead of
//! aliasing them, and validators never mutate their input. Validators run
//! against untrusted `serde_json::Value`s before anything is admitted into
//! a store.
//!
//! Wire convention: an empty attribute map is omitted from the serialized
//! form rather than written as an empty placeholder. The reverse direction
//! treats an absent map and a `null` map the same way ("no attributes"),
//! so round-tripping is semantically exact but not byte-exact.

use crate::attributes::AttributeMap;
use crate::edge::EdgeRecord;
use crate::error::InvalidInput;
use crate::node::NodeRecord;
use crate::types::GraphType;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Interchange form of a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedNode {
    pub key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<AttributeMap>,
}

/// Interchange form of an edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedEdge {
    pub key: String,
    pub source: String,
    pub target: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<AttributeMap>,

    /// Present (and `true`) only for undirected edges of a mixed store;
    /// pure-orientation stores omit it as redundant with the store type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub undirected: Option<bool>,
}

fn copied_attributes(attributes: &AttributeMap) -> Option<AttributeMap> {
    if attributes.is_empty() {
        None
    } else {
        Some(attributes.clone())
    }
}

/// Formats a node record into its interchange form
pub fn serialize_node(key: &str, record: &NodeRecord) -> SerializedNode {
    SerializedNode {
        key: key.to_string(),
        attributes: copied_attributes(&record.attributes),
    }
}

/// Formats an edge record into its interchange form.
///
/// Endpoint records are passed in resolved because edge records hold arena
/// handles, not keys.
pub fn serialize_edge(
    graph_type: GraphType,
    key: &str,
    record: &EdgeRecord,
    source: &NodeRecord,
    target: &NodeRecord,
) -> SerializedEdge {
    SerializedEdge {
        key: key.to_string(),
        source: source.key().to_string(),
        target: target.key().to_string(),
        attributes: copied_attributes(&record.attributes),
        undirected: if graph_type.is_mixed() && record.undirected() {
            Some(true)
        } else {
            None
        },
    }
}

fn validate_attributes(object: &serde_json::Map<String, Value>) -> Result<(), InvalidInput> {
    match object.get("attributes") {
        None | Some(Value::Object(_)) => Ok(()),
        Some(_) => Err(InvalidInput::InvalidAttributes),
    }
}

/// Checks whether the given untrusted value is a serialized node
pub fn validate_serialized_node(value: &Value) -> Result<(), InvalidInput> {
    let object = value.as_object().ok_or(InvalidInput::NotPlainObject)?;

    if !object.contains_key("key") {
        return Err(InvalidInput::MissingKey);
    }

    validate_attributes(object)
}

/// Checks whether the given untrusted value is a serialized edge.
///
/// Source and target are checked independently so the failure reasons stay
/// distinguishable.
pub fn validate_serialized_edge(value: &Value) -> Result<(), InvalidInput> {
    let object = value.as_object().ok_or(InvalidInput::NotPlainObject)?;

    if !object.contains_key("source") {
        return Err(InvalidInput::MissingSource);
    }

    if !object.contains_key("target") {
        return Err(InvalidInput::MissingTarget);
    }

    validate_attributes(object)?;

    match object.get("undirected") {
        None | Some(Value::Bool(_)) => Ok(()),
        Some(_) => Err(InvalidInput::InvalidUndirectedness),
    }
}
