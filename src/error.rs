//! Error types surfaced by the store and the serialization layer

use crate::types::NodeId;
use thiserror::Error;

/// Rejection of untrusted interchange input.
///
/// The only recoverable, user-facing error kind. Validators fail fast on
/// the first violated condition in a fixed order, so the reported reason
/// is stable for a given input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("invalid serialized element: expected a plain key-value object")]
    NotPlainObject,

    #[error("serialized node is missing its key")]
    MissingKey,

    #[error("serialized edge is missing its source")]
    MissingSource,

    #[error("serialized edge is missing its target")]
    MissingTarget,

    #[error("invalid attributes: expected a plain key-value object or no entry")]
    InvalidAttributes,

    #[error("invalid undirectedness information: expected a boolean or no entry")]
    InvalidUndirectedness,
}

/// Errors that can occur during graph mutations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("node {0} already exists")]
    DuplicateNode(String),

    #[error("edge {0} already exists")]
    DuplicateEdge(String),

    #[error("node {0} not found")]
    NodeNotFound(String),

    #[error("edge {0} not found")]
    EdgeNotFound(String),

    #[error("invalid edge: source node {0} does not exist")]
    InvalidEdgeSource(NodeId),

    #[error("invalid edge: target node {0} does not exist")]
    InvalidEdgeTarget(NodeId),

    #[error("an edge already links {src} to {target} in this simple graph")]
    ConflictingEdge { src: String, target: String },

    #[error("cannot add an undirected edge to a directed graph")]
    UndirectedEdgeInDirectedGraph,

    #[error("cannot add a directed edge to an undirected graph")]
    DirectedEdgeInUndirectedGraph,

    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),
}

pub type GraphResult<T> = Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_stable() {
        assert_eq!(
            InvalidInput::MissingTarget.to_string(),
            "serialized edge is missing its target"
        );
        assert_eq!(
            GraphError::DuplicateNode("a".to_string()).to_string(),
            "node a already exists"
        );
        assert_eq!(
            GraphError::ConflictingEdge {
                src: "a".to_string(),
                target: "b".to_string()
            }
            .to_string(),
            "an edge already links a to b in this simple graph"
        );
    }

    #[test]
    fn test_invalid_input_converts_into_graph_error() {
        let err: GraphError = InvalidInput::MissingKey.into();
        assert_eq!(err, GraphError::InvalidInput(InvalidInput::MissingKey));
    }
}
