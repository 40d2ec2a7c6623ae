//! Core type definitions for the graph store

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared orientation capability of a store, fixed for its whole lifetime
///
/// The type decides which adjacency structures every node record carries
/// and which edge orientations `GraphStore::add_edge` accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphType {
    Directed,
    Undirected,
    Mixed,
}

impl GraphType {
    /// Whether an edge of the given orientation can live in a store of this type
    pub fn supports(&self, undirected: bool) -> bool {
        match self {
            GraphType::Directed => !undirected,
            GraphType::Undirected => undirected,
            GraphType::Mixed => true,
        }
    }

    pub fn is_mixed(&self) -> bool {
        matches!(self, GraphType::Mixed)
    }
}

impl fmt::Display for GraphType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GraphType::Directed => "directed",
            GraphType::Undirected => "undirected",
            GraphType::Mixed => "mixed",
        };
        write!(f, "{}", name)
    }
}

/// Stable arena handle for a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl NodeId {
    pub fn new(id: u64) -> Self {
        NodeId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        NodeId(id)
    }
}

/// Stable arena handle for an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EdgeId(pub u64);

impl EdgeId {
    pub fn new(id: u64) -> Self {
        EdgeId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl From<u64> for EdgeId {
    fn from(id: u64) -> Self {
        EdgeId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_type_capabilities() {
        assert!(GraphType::Directed.supports(false));
        assert!(!GraphType::Directed.supports(true));
        assert!(GraphType::Undirected.supports(true));
        assert!(!GraphType::Undirected.supports(false));
        assert!(GraphType::Mixed.supports(true));
        assert!(GraphType::Mixed.supports(false));
    }

    #[test]
    fn test_graph_type_display() {
        assert_eq!(format!("{}", GraphType::Mixed), "mixed");
        assert_eq!(format!("{}", GraphType::Directed), "directed");
    }

    #[test]
    fn test_node_id() {
        let id = NodeId::new(42);
        assert_eq!(id.as_u64(), 42);
        assert_eq!(format!("{}", id), "NodeId(42)");

        let id2: NodeId = 100.into();
        assert_eq!(id2.as_u64(), 100);
    }

    #[test]
    fn test_edge_id() {
        let id = EdgeId::new(99);
        assert_eq!(id.as_u64(), 99);
        assert_eq!(format!("{}", id), "EdgeId(99)");
    }

    #[test]
    fn test_graph_type_serde() {
        assert_eq!(
            serde_json::to_string(&GraphType::Undirected).unwrap(),
            "\"undirected\""
        );
        let parsed: GraphType = serde_json::from_str("\"mixed\"").unwrap();
        assert_eq!(parsed, GraphType::Mixed);
    }
}
