//! Node records and their per-orientation topologies
//!
//! A node's topology variant is decided by the store's declared type and
//! never changes afterwards. Each variant carries only the degree counters
//! and adjacency maps its orientations need, so a pure-directed store pays
//! nothing for undirected bookkeeping and vice versa.

use crate::attributes::AttributeMap;
use crate::types::{EdgeId, GraphType, NodeId};
use rustc_hash::FxHashMap;

/// Adjacency index embedded in a node record: neighbor handle to incident
/// edge record, or to the head of the parallel-edge chain in multi mode.
pub type AdjacencyMap = FxHashMap<NodeId, EdgeId>;

/// Topology of a node living in a directed store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectedTopology {
    pub(crate) in_degree: usize,
    pub(crate) out_degree: usize,
    pub(crate) directed_loops: usize,
    pub(crate) inbound: AdjacencyMap,
    pub(crate) outbound: AdjacencyMap,
}

/// Topology of a node living in an undirected store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UndirectedTopology {
    pub(crate) undirected_degree: usize,
    pub(crate) undirected_loops: usize,
    pub(crate) undirected: AdjacencyMap,
}

/// Topology of a node living in a mixed store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MixedTopology {
    pub(crate) in_degree: usize,
    pub(crate) out_degree: usize,
    pub(crate) undirected_degree: usize,
    pub(crate) directed_loops: usize,
    pub(crate) undirected_loops: usize,
    pub(crate) inbound: AdjacencyMap,
    pub(crate) outbound: AdjacencyMap,
    pub(crate) undirected: AdjacencyMap,
}

/// Closed set of node shapes, fixed at construction
#[derive(Debug, Clone, PartialEq)]
pub enum Topology {
    Directed(DirectedTopology),
    Undirected(UndirectedTopology),
    Mixed(MixedTopology),
}

/// A node of the store: immutable key, caller-owned attributes, and the
/// degree/adjacency bookkeeping maintained by the attach/detach protocol.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRecord {
    key: String,

    /// Attributes associated with this node, owned by the record
    pub attributes: AttributeMap,

    topology: Topology,
}

impl NodeRecord {
    /// Creates a record equivalent to a freshly cleared one: every counter
    /// at zero, every adjacency map empty.
    pub(crate) fn new(graph_type: GraphType, key: String, attributes: AttributeMap) -> Self {
        let topology = match graph_type {
            GraphType::Directed => Topology::Directed(DirectedTopology::default()),
            GraphType::Undirected => Topology::Undirected(UndirectedTopology::default()),
            GraphType::Mixed => Topology::Mixed(MixedTopology::default()),
        };

        NodeRecord {
            key,
            attributes,
            topology,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Resets every counter and adjacency map, recycling the record.
    ///
    /// Idempotent. Key and attributes are untouched.
    pub fn clear(&mut self) {
        match &mut self.topology {
            Topology::Directed(t) => *t = DirectedTopology::default(),
            Topology::Undirected(t) => *t = UndirectedTopology::default(),
            Topology::Mixed(t) => *t = MixedTopology::default(),
        }
    }

    // ------------------------------------------------------------------
    // Adjacency access
    // ------------------------------------------------------------------

    /// Outgoing adjacency index, if this variant carries one
    pub fn outbound(&self) -> Option<&AdjacencyMap> {
        match &self.topology {
            Topology::Directed(t) => Some(&t.outbound),
            Topology::Mixed(t) => Some(&t.outbound),
            Topology::Undirected(_) => None,
        }
    }

    /// Incoming adjacency index, if this variant carries one
    pub fn inbound(&self) -> Option<&AdjacencyMap> {
        match &self.topology {
            Topology::Directed(t) => Some(&t.inbound),
            Topology::Mixed(t) => Some(&t.inbound),
            Topology::Undirected(_) => None,
        }
    }

    /// Undirected adjacency index, if this variant carries one
    pub fn undirected(&self) -> Option<&AdjacencyMap> {
        match &self.topology {
            Topology::Undirected(t) => Some(&t.undirected),
            Topology::Mixed(t) => Some(&t.undirected),
            Topology::Directed(_) => None,
        }
    }

    /// Selects the adjacency map an edge's endpoint installs into.
    ///
    /// `outgoing` is meaningful for directed edges only; undirected edges
    /// always resolve to the single undirected map.
    fn slot_map_mut(&mut self, undirected: bool, outgoing: bool) -> Option<&mut AdjacencyMap> {
        match (&mut self.topology, undirected) {
            (Topology::Directed(t), false) => {
                Some(if outgoing { &mut t.outbound } else { &mut t.inbound })
            }
            (Topology::Mixed(t), false) => {
                Some(if outgoing { &mut t.outbound } else { &mut t.inbound })
            }
            (Topology::Undirected(t), true) => Some(&mut t.undirected),
            (Topology::Mixed(t), true) => Some(&mut t.undirected),
            _ => None,
        }
    }

    fn slot_map(&self, undirected: bool, outgoing: bool) -> Option<&AdjacencyMap> {
        match (&self.topology, undirected) {
            (Topology::Directed(t), false) => Some(if outgoing { &t.outbound } else { &t.inbound }),
            (Topology::Mixed(t), false) => Some(if outgoing { &t.outbound } else { &t.inbound }),
            (Topology::Undirected(t), true) => Some(&t.undirected),
            (Topology::Mixed(t), true) => Some(&t.undirected),
            _ => None,
        }
    }

    pub(crate) fn set_slot(
        &mut self,
        undirected: bool,
        outgoing: bool,
        neighbor: NodeId,
        edge: EdgeId,
    ) {
        if let Some(map) = self.slot_map_mut(undirected, outgoing) {
            map.insert(neighbor, edge);
        }
    }

    pub(crate) fn remove_slot(
        &mut self,
        undirected: bool,
        outgoing: bool,
        neighbor: NodeId,
    ) -> Option<EdgeId> {
        self.slot_map_mut(undirected, outgoing)?.remove(&neighbor)
    }

    pub(crate) fn peek_slot(
        &self,
        undirected: bool,
        outgoing: bool,
        neighbor: NodeId,
    ) -> Option<EdgeId> {
        self.slot_map(undirected, outgoing)?.get(&neighbor).copied()
    }

    // ------------------------------------------------------------------
    // Degree bookkeeping
    // ------------------------------------------------------------------

    /// Registers one endpoint's share of a newly attached edge.
    ///
    /// A loop is credited once, on its single node.
    pub(crate) fn credit_edge(&mut self, undirected: bool, is_loop: bool, outgoing: bool) {
        match (&mut self.topology, undirected) {
            (Topology::Directed(t), false) => {
                if is_loop {
                    t.directed_loops += 1;
                } else if outgoing {
                    t.out_degree += 1;
                } else {
                    t.in_degree += 1;
                }
            }
            (Topology::Undirected(t), true) => {
                if is_loop {
                    t.undirected_loops += 1;
                } else {
                    t.undirected_degree += 1;
                }
            }
            (Topology::Mixed(t), false) => {
                if is_loop {
                    t.directed_loops += 1;
                } else if outgoing {
                    t.out_degree += 1;
                } else {
                    t.in_degree += 1;
                }
            }
            (Topology::Mixed(t), true) => {
                if is_loop {
                    t.undirected_loops += 1;
                } else {
                    t.undirected_degree += 1;
                }
            }
            _ => debug_assert!(false, "edge orientation unsupported by this node variant"),
        }
    }

    /// Reverses one endpoint's share of a detached edge
    pub(crate) fn debit_edge(&mut self, undirected: bool, is_loop: bool, outgoing: bool) {
        match (&mut self.topology, undirected) {
            (Topology::Directed(t), false) => {
                if is_loop {
                    debug_assert!(t.directed_loops > 0);
                    t.directed_loops -= 1;
                } else if outgoing {
                    debug_assert!(t.out_degree > 0);
                    t.out_degree -= 1;
                } else {
                    debug_assert!(t.in_degree > 0);
                    t.in_degree -= 1;
                }
            }
            (Topology::Undirected(t), true) => {
                if is_loop {
                    debug_assert!(t.undirected_loops > 0);
                    t.undirected_loops -= 1;
                } else {
                    debug_assert!(t.undirected_degree > 0);
                    t.undirected_degree -= 1;
                }
            }
            (Topology::Mixed(t), false) => {
                if is_loop {
                    debug_assert!(t.directed_loops > 0);
                    t.directed_loops -= 1;
                } else if outgoing {
                    debug_assert!(t.out_degree > 0);
                    t.out_degree -= 1;
                } else {
                    debug_assert!(t.in_degree > 0);
                    t.in_degree -= 1;
                }
            }
            (Topology::Mixed(t), true) => {
                if is_loop {
                    debug_assert!(t.undirected_loops > 0);
                    t.undirected_loops -= 1;
                } else {
                    debug_assert!(t.undirected_degree > 0);
                    t.undirected_degree -= 1;
                }
            }
            _ => debug_assert!(false, "edge orientation unsupported by this node variant"),
        }
    }

    // ------------------------------------------------------------------
    // Degree accessors
    // ------------------------------------------------------------------

    /// Number of incoming directed edges; a directed self-loop counts once
    pub fn in_degree(&self) -> usize {
        match &self.topology {
            Topology::Directed(t) => t.in_degree + t.directed_loops,
            Topology::Mixed(t) => t.in_degree + t.directed_loops,
            Topology::Undirected(_) => 0,
        }
    }

    /// Number of outgoing directed edges; a directed self-loop counts once
    pub fn out_degree(&self) -> usize {
        match &self.topology {
            Topology::Directed(t) => t.out_degree + t.directed_loops,
            Topology::Mixed(t) => t.out_degree + t.directed_loops,
            Topology::Undirected(_) => 0,
        }
    }

    /// Number of undirected edge ends; an undirected self-loop counts twice
    pub fn undirected_degree(&self) -> usize {
        match &self.topology {
            Topology::Undirected(t) => t.undirected_degree + 2 * t.undirected_loops,
            Topology::Mixed(t) => t.undirected_degree + 2 * t.undirected_loops,
            Topology::Directed(_) => 0,
        }
    }

    /// Total degree across every orientation, self-loops counted twice
    pub fn degree(&self) -> usize {
        self.in_degree() + self.out_degree() + self.undirected_degree()
    }

    /// Number of self-loops of any orientation on this node
    pub fn self_loop_count(&self) -> usize {
        match &self.topology {
            Topology::Directed(t) => t.directed_loops,
            Topology::Undirected(t) => t.undirected_loops,
            Topology::Mixed(t) => t.directed_loops + t.undirected_loops,
        }
    }
}
