//! Tangle
//!
//! An in-memory multigraph storage core: a mutable store of nodes and
//! edges, each carrying a user-defined attribute map, addressable by
//! string key.
//!
//! # Features
//!
//! - Directed, undirected, and mixed stores, in simple or multi flavors
//!   (at most one edge per direction per pair, or arbitrarily many
//!   parallel edges) — six structural variants in total
//! - O(1) neighbor and edge lookup through per-node adjacency indices
//! - O(1) edge insertion and removal even under heavy parallel-edge
//!   fan-out, via a doubly-linked chain threading each pair's edges
//! - Exact degree and self-loop accounting under arbitrary mutation order
//! - Serialization and validation contracts converting records to and
//!   from a plain interchange format
//!
//! # Example
//!
//! ```
//! use tangle::{AttributeMap, GraphStore, GraphType};
//!
//! let mut store = GraphStore::new(GraphType::Mixed, true);
//! let a = store.add_node("a", AttributeMap::new())?;
//! let b = store.add_node("b", AttributeMap::new())?;
//! store.add_edge("a->b", a, b, false, AttributeMap::new())?;
//! store.add_edge("a--b", a, b, true, AttributeMap::new())?;
//!
//! assert_eq!(store.node(a).unwrap().degree(), 2);
//! assert_eq!(store.edges_connecting(a, b).count(), 2);
//! # Ok::<(), tangle::GraphError>(())
//! ```
//!
//! The store is single-threaded and synchronous by design: every
//! operation runs to completion, performs no I/O, and is O(1) or
//! O(degree). Structural mutation takes `&mut self`, so mutating while
//! iterating is rejected at compile time.

pub mod attributes;
pub mod edge;
pub mod error;
pub mod iter;
pub mod node;
pub mod serialization;
pub mod store;
pub mod types;

mod arena;

// Re-export main types
pub use attributes::{AttributeMap, AttributeValue};
pub use edge::EdgeRecord;
pub use error::{GraphError, GraphResult, InvalidInput};
pub use iter::{chain, empty_sequence, map, Chain, Empty, Map, ParallelEdges};
pub use node::{AdjacencyMap, NodeRecord, Topology};
pub use serialization::{
    serialize_edge, serialize_node, validate_serialized_edge, validate_serialized_node,
    SerializedEdge, SerializedNode,
};
pub use store::GraphStore;
pub use types::{EdgeId, GraphType, NodeId};
