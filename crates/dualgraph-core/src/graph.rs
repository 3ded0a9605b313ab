//! The graph capability set.
//!
//! Algorithms take `&impl Graph` for the graphs they read and
//! `&mut impl GraphMut` for the graphs they populate. Sets are returned as
//! owned vectors in a stable order so callers can mutate another graph
//! while walking them.

use crate::error::GraphError;
use crate::graph_type::GraphType;
use std::fmt::Debug;
use std::hash::Hash;

/// Read access to a graph.
pub trait Graph {
    /// Vertex identifier.
    type Vertex: Copy + Eq + Hash + Debug;

    /// Edge identifier.
    ///
    /// Distinct edges have distinct identifiers even when they join the
    /// same endpoints, so parallel edges can be told apart by equality.
    type Edge: Copy + Eq + Hash + Debug;

    /// Directedness and edge policy.
    fn graph_type(&self) -> GraphType;

    fn is_directed(&self) -> bool {
        self.graph_type().is_directed()
    }

    /// All vertices.
    fn vertex_set(&self) -> Vec<Self::Vertex>;

    /// All edges.
    fn edge_set(&self) -> Vec<Self::Edge>;

    fn contains_vertex(&self, vertex: Self::Vertex) -> bool;

    /// Edges entering `vertex`.
    ///
    /// For undirected graphs this is every edge touching `vertex`, with a
    /// self-loop reported once. Unknown vertices have no edges.
    fn incoming_edges_of(&self, vertex: Self::Vertex) -> Vec<Self::Edge>;

    /// Edges leaving `vertex`.
    ///
    /// For undirected graphs this is the same set as
    /// [`incoming_edges_of`](Graph::incoming_edges_of).
    fn outgoing_edges_of(&self, vertex: Self::Vertex) -> Vec<Self::Edge>;

    /// The first endpoint of `edge`, or `None` if the edge is unknown.
    fn edge_source(&self, edge: Self::Edge) -> Option<Self::Vertex>;

    /// The second endpoint of `edge`, or `None` if the edge is unknown.
    fn edge_target(&self, edge: Self::Edge) -> Option<Self::Vertex>;

    fn vertex_count(&self) -> usize {
        self.vertex_set().len()
    }

    fn edge_count(&self) -> usize {
        self.edge_set().len()
    }
}

/// Mutation of a graph.
pub trait GraphMut: Graph {
    /// Adds a vertex. Returns `false` if it was already present.
    fn add_vertex(&mut self, vertex: Self::Vertex) -> bool;

    /// Adds every vertex, skipping those already present.
    ///
    /// Returns `true` if the vertex set changed.
    fn add_all_vertices<I>(&mut self, vertices: I) -> bool
    where
        I: IntoIterator<Item = Self::Vertex>,
        Self: Sized,
    {
        let mut changed = false;
        for vertex in vertices {
            changed |= self.add_vertex(vertex);
        }
        changed
    }

    /// Adds an edge between two existing vertices.
    ///
    /// Returns `Ok(None)` when the container already holds an edge between
    /// the endpoints and does not accept parallel edges.
    fn add_edge(
        &mut self,
        source: Self::Vertex,
        target: Self::Vertex,
    ) -> Result<Option<Self::Edge>, GraphError>;
}

/// Fails with [`GraphError::InvalidGraphType`] unless `graph` is directed.
pub fn require_directed<G>(graph: &G, message: &str) -> Result<(), GraphError>
where
    G: Graph + ?Sized,
{
    if graph.is_directed() {
        Ok(())
    } else {
        Err(GraphError::InvalidGraphType(message.to_string()))
    }
}

/// Fails with [`GraphError::InvalidGraphType`] unless `graph` is undirected.
pub fn require_undirected<G>(graph: &G, message: &str) -> Result<(), GraphError>
where
    G: Graph + ?Sized,
{
    if graph.is_directed() {
        Err(GraphError::InvalidGraphType(message.to_string()))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemGraph;

    #[test]
    fn test_require_directed() {
        let directed: MemGraph<u32> = MemGraph::new(GraphType::simple_directed_graph());
        let undirected: MemGraph<u32> = MemGraph::new(GraphType::simple_graph());

        assert!(require_directed(&directed, "must be directed").is_ok());
        assert_eq!(
            require_directed(&undirected, "must be directed"),
            Err(GraphError::InvalidGraphType("must be directed".into()))
        );
    }

    #[test]
    fn test_require_undirected() {
        let directed: MemGraph<u32> = MemGraph::new(GraphType::directed_pseudograph());
        let undirected: MemGraph<u32> = MemGraph::new(GraphType::pseudograph());

        assert!(require_undirected(&undirected, "must be undirected").is_ok());
        let err = require_undirected(&directed, "must be undirected").unwrap_err();
        assert_eq!(err.to_string(), "must be undirected");
    }

    #[test]
    fn test_add_all_vertices_reports_change() {
        let mut graph: MemGraph<u32> = MemGraph::new(GraphType::simple_graph());
        assert!(graph.add_all_vertices([1, 2]));
        assert!(!graph.add_all_vertices([2, 1]));
        assert!(graph.add_all_vertices([2, 3]));
        assert_eq!(graph.vertex_count(), 3);
    }
}
