//! In-memory graph container.
//!
//! MemGraph wraps a petgraph `StableGraph` and adds a value-to-index map so
//! vertices are addressed by value. Edges are always stored with the
//! orientation they were added with; the [`GraphType`] tag decides whether
//! that orientation means anything to incidence queries.

use crate::error::GraphError;
use crate::graph::{Graph, GraphMut};
use crate::graph_type::GraphType;
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{self, Debug};
use std::hash::Hash;
use tracing::trace;

/// Opaque handle of an edge in a [`MemGraph`].
///
/// Handles are assigned in insertion order and compare by identity, never
/// by endpoints: two parallel edges always have different handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(usize);

impl EdgeId {
    /// Position of the edge in insertion order.
    pub fn index(self) -> usize {
        self.0
    }

    fn raw(self) -> EdgeIndex {
        EdgeIndex::new(self.0)
    }
}

impl From<EdgeIndex> for EdgeId {
    fn from(index: EdgeIndex) -> Self {
        Self(index.index())
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// A graph of copyable vertex values.
///
/// Vertices and edges are reported in insertion order.
#[derive(Debug, Clone)]
pub struct MemGraph<V> {
    /// The underlying petgraph graph.
    graph: StableDiGraph<V, ()>,

    /// Maps vertex values to graph node indexes.
    vertex_index: HashMap<V, NodeIndex>,

    graph_type: GraphType,
}

impl<V> MemGraph<V>
where
    V: Copy + Eq + Hash + Debug,
{
    /// Creates an empty graph with the given policy.
    pub fn new(graph_type: GraphType) -> Self {
        Self {
            graph: StableDiGraph::default(),
            vertex_index: HashMap::new(),
            graph_type,
        }
    }

    /// Creates an empty graph with room for the given number of vertices
    /// and edges.
    pub fn with_capacity(graph_type: GraphType, vertices: usize, edges: usize) -> Self {
        Self {
            graph: StableDiGraph::with_capacity(vertices, edges),
            vertex_index: HashMap::with_capacity(vertices),
            graph_type,
        }
    }

    fn node(&self, vertex: V) -> Option<NodeIndex> {
        self.vertex_index.get(&vertex).copied()
    }

    fn require_node(&self, vertex: V) -> Result<NodeIndex, GraphError> {
        self.node(vertex)
            .ok_or_else(|| GraphError::VertexNotFound(format!("{:?}", vertex)))
    }

    /// Edges stored with the given orientation at `node`, in insertion order.
    fn oriented_edges(&self, node: NodeIndex, direction: Direction) -> Vec<EdgeId> {
        let mut edges: Vec<EdgeId> = self
            .graph
            .edges_directed(node, direction)
            .map(|edge| EdgeId::from(edge.id()))
            .collect();
        edges.sort_unstable();
        edges
    }

    /// Every edge touching `node`, loops once.
    fn incident_edges(&self, node: NodeIndex) -> Vec<EdgeId> {
        let mut edges: Vec<EdgeId> = self
            .graph
            .edges_directed(node, Direction::Outgoing)
            .chain(self.graph.edges_directed(node, Direction::Incoming))
            .map(|edge| EdgeId::from(edge.id()))
            .collect();
        edges.sort_unstable();
        // A loop shows up in both lists.
        edges.dedup();
        edges
    }

    /// Returns both endpoints of an edge.
    pub fn endpoints(&self, edge: EdgeId) -> Option<(V, V)> {
        let (source, target) = self.graph.edge_endpoints(edge.raw())?;
        Some((self.graph[source], self.graph[target]))
    }

    /// All edges joining `source` to `target`.
    ///
    /// For undirected graphs the orientation of the pair is ignored.
    pub fn edges_between(&self, source: V, target: V) -> Vec<EdgeId> {
        let (Some(a), Some(b)) = (self.node(source), self.node(target)) else {
            return Vec::new();
        };
        let directed = self.graph_type.is_directed();

        let mut edges: Vec<EdgeId> = self
            .graph
            .edges_directed(a, Direction::Outgoing)
            .chain(self.graph.edges_directed(a, Direction::Incoming))
            .map(|edge| edge.id())
            .filter(|&id| match self.graph.edge_endpoints(id) {
                Some((s, t)) => (s == a && t == b) || (!directed && s == b && t == a),
                None => false,
            })
            .map(EdgeId::from)
            .collect();
        edges.sort_unstable();
        edges.dedup();
        edges
    }

    /// Whether any edge joins `source` to `target`.
    pub fn contains_edge(&self, source: V, target: V) -> bool {
        !self.edges_between(source, target).is_empty()
    }

    /// Every edge touching `vertex`, regardless of orientation.
    pub fn edges_of(&self, vertex: V) -> Vec<EdgeId> {
        self.node(vertex)
            .map(|node| self.incident_edges(node))
            .unwrap_or_default()
    }

    /// Number of edge ends at `vertex`. A loop counts twice.
    pub fn degree_of(&self, vertex: V) -> usize {
        self.node(vertex)
            .map(|node| {
                self.graph.edges_directed(node, Direction::Outgoing).count()
                    + self.graph.edges_directed(node, Direction::Incoming).count()
            })
            .unwrap_or(0)
    }

    /// Removes all vertices and edges, keeping the graph type.
    pub fn clear(&mut self) {
        self.graph.clear();
        self.vertex_index.clear();
    }
}

impl<V> Graph for MemGraph<V>
where
    V: Copy + Eq + Hash + Debug,
{
    type Vertex = V;
    type Edge = EdgeId;

    fn graph_type(&self) -> GraphType {
        self.graph_type
    }

    fn vertex_set(&self) -> Vec<V> {
        self.graph
            .node_indices()
            .map(|node| self.graph[node])
            .collect()
    }

    fn edge_set(&self) -> Vec<EdgeId> {
        self.graph.edge_indices().map(EdgeId::from).collect()
    }

    fn contains_vertex(&self, vertex: V) -> bool {
        self.vertex_index.contains_key(&vertex)
    }

    fn incoming_edges_of(&self, vertex: V) -> Vec<EdgeId> {
        match self.node(vertex) {
            Some(node) if self.graph_type.is_directed() => {
                self.oriented_edges(node, Direction::Incoming)
            }
            Some(node) => self.incident_edges(node),
            None => Vec::new(),
        }
    }

    fn outgoing_edges_of(&self, vertex: V) -> Vec<EdgeId> {
        match self.node(vertex) {
            Some(node) if self.graph_type.is_directed() => {
                self.oriented_edges(node, Direction::Outgoing)
            }
            Some(node) => self.incident_edges(node),
            None => Vec::new(),
        }
    }

    fn edge_source(&self, edge: EdgeId) -> Option<V> {
        self.endpoints(edge).map(|(source, _)| source)
    }

    fn edge_target(&self, edge: EdgeId) -> Option<V> {
        self.endpoints(edge).map(|(_, target)| target)
    }

    fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl<V> GraphMut for MemGraph<V>
where
    V: Copy + Eq + Hash + Debug,
{
    fn add_vertex(&mut self, vertex: V) -> bool {
        if self.vertex_index.contains_key(&vertex) {
            return false;
        }
        let node = self.graph.add_node(vertex);
        self.vertex_index.insert(vertex, node);
        true
    }

    fn add_edge(&mut self, source: V, target: V) -> Result<Option<EdgeId>, GraphError> {
        let a = self.require_node(source)?;
        let b = self.require_node(target)?;

        if a == b && !self.graph_type.allows_self_loops {
            return Err(GraphError::LoopsNotAllowed(format!("{:?}", source)));
        }

        if !self.graph_type.allows_multiple_edges && self.contains_edge(source, target) {
            trace!("Skipping parallel edge {:?} -> {:?}", source, target);
            return Ok(None);
        }

        Ok(Some(EdgeId::from(self.graph.add_edge(a, b, ()))))
    }
}
