//! The in-memory graph store and its adjacency maintenance protocol
//!
//! `GraphStore` owns two slot arenas (nodes, edges) plus the string-key
//! indices that make both addressable by key. Structural mutation funnels
//! through the attach/detach protocol, which installs and removes edges
//! from their endpoints' adjacency indices and keeps the degree counters
//! exact:
//!
//! - simple mode: one adjacency slot per (source, target, orientation),
//!   installed on both endpoints (a single slot for undirected self-loops)
//! - multi mode: the slot holds the head of a doubly-linked chain of
//!   parallel edges; attach prepends in O(1), detach splices in O(1)
//!   without walking the chain

use crate::arena::Arena;
use crate::attributes::AttributeMap;
use crate::edge::EdgeRecord;
use crate::error::{GraphError, GraphResult};
use crate::iter::{chain, Chain, ParallelEdges};
use crate::node::NodeRecord;
use crate::serialization::{serialize_edge, serialize_node, SerializedEdge, SerializedNode};
use crate::types::{EdgeId, GraphType, NodeId};
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use tracing::{debug, trace};

type KeyIndex<Id> = IndexMap<String, Id, FxBuildHasher>;

/// Mutable store of nodes and edges, addressable by string key
///
/// The declared [`GraphType`] and the simple/multi flag are fixed for the
/// store's whole lifetime and decide which node topology variant gets
/// built and which attach/detach flavor runs.
#[derive(Debug)]
pub struct GraphStore {
    graph_type: GraphType,
    multi: bool,

    nodes: Arena<NodeRecord>,
    edges: Arena<EdgeRecord>,

    /// Node key index, iterated in insertion order
    node_keys: KeyIndex<NodeId>,

    /// Edge key index, iterated in insertion order
    edge_keys: KeyIndex<EdgeId>,
}

impl GraphStore {
    /// Create a new empty store of the given shape
    pub fn new(graph_type: GraphType, multi: bool) -> Self {
        GraphStore {
            graph_type,
            multi,
            nodes: Arena::with_capacity(1024),
            edges: Arena::with_capacity(4096),
            node_keys: KeyIndex::default(),
            edge_keys: KeyIndex::default(),
        }
    }

    pub fn graph_type(&self) -> GraphType {
        self.graph_type
    }

    pub fn is_multi(&self) -> bool {
        self.multi
    }

    // ============================================================
    // Node management
    // ============================================================

    /// Insert a node under a fresh key
    pub fn add_node(
        &mut self,
        key: impl Into<String>,
        attributes: AttributeMap,
    ) -> GraphResult<NodeId> {
        let key = key.into();

        if self.node_keys.contains_key(&key) {
            return Err(GraphError::DuplicateNode(key));
        }

        let record = NodeRecord::new(self.graph_type, key.clone(), attributes);
        let id = NodeId::new(self.nodes.insert(record));
        self.node_keys.insert(key, id);

        trace!(node = %id, "node inserted");
        Ok(id)
    }

    pub fn node_id(&self, key: &str) -> Option<NodeId> {
        self.node_keys.get(key).copied()
    }

    pub fn node(&self, id: NodeId) -> Option<&NodeRecord> {
        self.nodes.get(id.as_u64())
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut NodeRecord> {
        self.nodes.get_mut(id.as_u64())
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains(id.as_u64())
    }

    /// Remove a node, detaching every incident edge first
    pub fn remove_node(&mut self, key: &str) -> GraphResult<NodeRecord> {
        let id = self
            .node_id(key)
            .ok_or_else(|| GraphError::NodeNotFound(key.to_string()))?;

        for edge_id in self.incident_edges(id) {
            self.drop_edge(edge_id);
        }

        self.node_keys.swap_remove(key);
        let record = self
            .nodes
            .remove(id.as_u64())
            .ok_or_else(|| GraphError::NodeNotFound(key.to_string()))?;

        debug!(node = %id, "node removed");
        Ok(record)
    }

    // ============================================================
    // Edge management
    // ============================================================

    /// Insert an edge under a fresh key and attach it to both endpoints
    pub fn add_edge(
        &mut self,
        key: impl Into<String>,
        source: NodeId,
        target: NodeId,
        undirected: bool,
        attributes: AttributeMap,
    ) -> GraphResult<EdgeId> {
        let key = key.into();

        if self.edge_keys.contains_key(&key) {
            return Err(GraphError::DuplicateEdge(key));
        }
        if !self.contains_node(source) {
            return Err(GraphError::InvalidEdgeSource(source));
        }
        if !self.contains_node(target) {
            return Err(GraphError::InvalidEdgeTarget(target));
        }
        if !self.graph_type.supports(undirected) {
            return Err(if undirected {
                GraphError::UndirectedEdgeInDirectedGraph
            } else {
                GraphError::DirectedEdgeInUndirectedGraph
            });
        }
        if !self.multi
            && self.nodes[source.as_u64()]
                .peek_slot(undirected, true, target)
                .is_some()
        {
            return Err(GraphError::ConflictingEdge {
                src: self.nodes[source.as_u64()].key().to_string(),
                target: self.nodes[target.as_u64()].key().to_string(),
            });
        }

        let record = EdgeRecord::new(key.clone(), undirected, source, target, attributes);
        let id = EdgeId::new(self.edges.insert(record));
        self.edge_keys.insert(key, id);

        if self.multi {
            self.attach_multi(id);
        } else {
            self.attach(id);
        }

        trace!(edge = %id, "edge inserted");
        Ok(id)
    }

    pub fn edge_id(&self, key: &str) -> Option<EdgeId> {
        self.edge_keys.get(key).copied()
    }

    pub fn edge(&self, id: EdgeId) -> Option<&EdgeRecord> {
        self.edges.get(id.as_u64())
    }

    pub fn edge_mut(&mut self, id: EdgeId) -> Option<&mut EdgeRecord> {
        self.edges.get_mut(id.as_u64())
    }

    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edges.contains(id.as_u64())
    }

    /// Remove an edge, detaching it from both endpoints
    pub fn remove_edge(&mut self, key: &str) -> GraphResult<EdgeRecord> {
        let id = self
            .edge_id(key)
            .ok_or_else(|| GraphError::EdgeNotFound(key.to_string()))?;

        if self.multi {
            self.detach_multi(id);
        } else {
            self.detach(id);
        }

        self.edge_keys.swap_remove(key);
        self.edges
            .remove(id.as_u64())
            .ok_or_else(|| GraphError::EdgeNotFound(key.to_string()))
    }

    // ============================================================
    // Attach/detach protocol — simple mode
    // ============================================================

    /// Installs a freshly constructed edge into both endpoints' adjacency
    /// indices. The caller has already checked that the (source, target,
    /// orientation) slot is free.
    fn attach(&mut self, id: EdgeId) {
        let (source, target, undirected) = self.edge_shape(id);

        // Handling source
        self.nodes[source.as_u64()].set_slot(undirected, true, target, id);

        // An undirected self-loop occupies a single slot
        if !(undirected && source == target) {
            // Handling target
            self.nodes[target.as_u64()].set_slot(undirected, false, source, id);
        }

        self.credit_degrees(source, target, undirected);
    }

    /// Removes the slots installed by `attach`
    fn detach(&mut self, id: EdgeId) {
        let (source, target, undirected) = self.edge_shape(id);

        let removed = self.nodes[source.as_u64()].remove_slot(undirected, true, target);
        debug_assert!(removed.is_some(), "edge detached twice");

        // No-op removal when the edge is an undirected self-loop
        self.nodes[target.as_u64()].remove_slot(undirected, false, source);

        self.debit_degrees(source, target, undirected);
    }

    // ============================================================
    // Attach/detach protocol — multi mode
    // ============================================================

    /// Prepends an edge to its pair's parallel-edge chain, or behaves as
    /// `attach` when the pair had no edge yet. O(1) regardless of how many
    /// parallel edges the pair already carries.
    fn attach_multi(&mut self, id: EdgeId) {
        let (source, target, undirected) = self.edge_shape(id);

        let head = self.nodes[source.as_u64()].peek_slot(undirected, true, target);

        match head {
            None => {
                self.nodes[source.as_u64()].set_slot(undirected, true, target, id);

                if !(undirected && source == target) {
                    self.nodes[target.as_u64()].set_slot(undirected, false, source, id);
                }
            }
            Some(head) => {
                // Prepend to the chain, then repoint both slots to the new
                // head. Iteration order over a pair is therefore reverse
                // insertion order.
                self.edges[head.as_u64()].previous = Some(id);
                self.edges[id.as_u64()].next = Some(head);

                self.nodes[source.as_u64()].set_slot(undirected, true, target, id);
                self.nodes[target.as_u64()].set_slot(undirected, false, source, id);
            }
        }

        self.credit_degrees(source, target, undirected);
    }

    /// Unlinks an edge from its pair's chain. The record's own links decide
    /// the case; no chain walk ever happens.
    fn detach_multi(&mut self, id: EdgeId) {
        let (source, target, undirected) = self.edge_shape(id);
        let (previous, next) = {
            let edge = &self.edges[id.as_u64()];
            (edge.previous, edge.next)
        };

        match (previous, next) {
            (None, None) => {
                // Sole member: the pair's slots disappear entirely
                self.nodes[source.as_u64()].remove_slot(undirected, true, target);
                self.nodes[target.as_u64()].remove_slot(undirected, false, source);
            }
            (None, Some(next)) => {
                // Head with a successor: both slots repoint to it
                self.edges[next.as_u64()].previous = None;
                self.nodes[source.as_u64()].set_slot(undirected, true, target, next);
                self.nodes[target.as_u64()].set_slot(undirected, false, source, next);
            }
            (Some(previous), next) => {
                // Interior or tail: splice around this record. The slots
                // only ever reference the head and stay untouched.
                self.edges[previous.as_u64()].next = next;
                if let Some(next) = next {
                    self.edges[next.as_u64()].previous = Some(previous);
                }
            }
        }

        // Links are meaningless once the record leaves the chain
        let edge = &mut self.edges[id.as_u64()];
        edge.previous = None;
        edge.next = None;

        self.debit_degrees(source, target, undirected);
    }

    fn edge_shape(&self, id: EdgeId) -> (NodeId, NodeId, bool) {
        let edge = &self.edges[id.as_u64()];
        (edge.source(), edge.target(), edge.undirected())
    }

    fn credit_degrees(&mut self, source: NodeId, target: NodeId, undirected: bool) {
        if source == target {
            self.nodes[source.as_u64()].credit_edge(undirected, true, true);
        } else {
            self.nodes[source.as_u64()].credit_edge(undirected, false, true);
            self.nodes[target.as_u64()].credit_edge(undirected, false, false);
        }
    }

    fn debit_degrees(&mut self, source: NodeId, target: NodeId, undirected: bool) {
        if source == target {
            self.nodes[source.as_u64()].debit_edge(undirected, true, true);
        } else {
            self.nodes[source.as_u64()].debit_edge(undirected, false, true);
            self.nodes[target.as_u64()].debit_edge(undirected, false, false);
        }
    }

    /// Detach an edge and free its record and key, without touching the
    /// caller's borrow of the incident list
    fn drop_edge(&mut self, id: EdgeId) {
        if self.multi {
            self.detach_multi(id);
        } else {
            self.detach(id);
        }

        if let Some(record) = self.edges.remove(id.as_u64()) {
            self.edge_keys.swap_remove(record.key());
        }
    }

    /// Every edge incident to the node, parallel chains included, each
    /// edge exactly once
    fn incident_edges(&self, id: NodeId) -> Vec<EdgeId> {
        let mut incident = Vec::new();
        let node = &self.nodes[id.as_u64()];

        if let Some(map) = node.outbound() {
            for &head in map.values() {
                incident.extend(ParallelEdges::new(&self.edges, Some(head)));
            }
        }
        if let Some(map) = node.inbound() {
            for (&neighbor, &head) in map.iter() {
                // Directed self-loops already came out of the outbound map
                if neighbor != id {
                    incident.extend(ParallelEdges::new(&self.edges, Some(head)));
                }
            }
        }
        if let Some(map) = node.undirected() {
            for &head in map.values() {
                incident.extend(ParallelEdges::new(&self.edges, Some(head)));
            }
        }

        incident
    }

    // ============================================================
    // Queries
    // ============================================================

    /// First edge linking source to target, if any. On a mixed store the
    /// directed slot is consulted before the undirected one.
    pub fn edge_connecting(&self, source: NodeId, target: NodeId) -> Option<EdgeId> {
        let node = self.nodes.get(source.as_u64())?;

        match self.graph_type {
            GraphType::Directed => node.peek_slot(false, true, target),
            GraphType::Undirected => node.peek_slot(true, true, target),
            GraphType::Mixed => node
                .peek_slot(false, true, target)
                .or_else(|| node.peek_slot(true, true, target)),
        }
    }

    /// Every edge linking source to target, lazily: the directed chain
    /// first, then the undirected one, each in reverse insertion order
    pub fn edges_connecting(
        &self,
        source: NodeId,
        target: NodeId,
    ) -> Chain<ParallelEdges<'_>> {
        let node = self.nodes.get(source.as_u64());
        let directed_head = node.and_then(|n| n.peek_slot(false, true, target));
        let undirected_head = node.and_then(|n| n.peek_slot(true, true, target));

        chain(vec![
            ParallelEdges::new(&self.edges, directed_head),
            ParallelEdges::new(&self.edges, undirected_head),
        ])
    }

    pub fn out_neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .get(id.as_u64())
            .and_then(NodeRecord::outbound)
            .into_iter()
            .flat_map(|map| map.keys().copied())
    }

    pub fn in_neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .get(id.as_u64())
            .and_then(NodeRecord::inbound)
            .into_iter()
            .flat_map(|map| map.keys().copied())
    }

    pub fn undirected_neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .get(id.as_u64())
            .and_then(NodeRecord::undirected)
            .into_iter()
            .flat_map(|map| map.keys().copied())
    }

    /// Node keys and handles in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = (&str, NodeId)> + '_ {
        self.node_keys.iter().map(|(key, id)| (key.as_str(), *id))
    }

    /// Edge keys and handles in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (&str, EdgeId)> + '_ {
        self.edge_keys.iter().map(|(key, id)| (key.as_str(), *id))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    // ============================================================
    // Serialization
    // ============================================================

    /// Interchange form of the node, if it exists
    pub fn serialized_node(&self, id: NodeId) -> Option<SerializedNode> {
        let record = self.node(id)?;
        Some(serialize_node(record.key(), record))
    }

    /// Interchange form of the edge, if it exists
    pub fn serialized_edge(&self, id: EdgeId) -> Option<SerializedEdge> {
        let record = self.edge(id)?;
        let source = self.node(record.source())?;
        let target = self.node(record.target())?;
        Some(serialize_edge(
            self.graph_type,
            record.key(),
            record,
            source,
            target,
        ))
    }

    // ============================================================
    // Bulk reset
    // ============================================================

    /// Drop every node and edge
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.node_keys.clear();
        self.edge_keys.clear();
        debug!("store cleared");
    }

    /// Drop every edge, recycling the node records in place
    pub fn clear_edges(&mut self) {
        for node in self.nodes.iter_mut() {
            node.clear();
        }
        self.edges.clear();
        self.edge_keys.clear();
        debug!("edges cleared");
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new(GraphType::Mixed, false)
    }
}
