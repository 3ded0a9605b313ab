//! Graph type policy.
//!
//! A [`GraphType`] says whether a graph is directed and which structural
//! features (parallel edges, self-loops) its container accepts. It is the
//! only configuration in the workspace and can be loaded with serde.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Directedness and edge policy of a graph.
///
/// Missing fields deserialize to the simple undirected policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphType {
    /// Edges have an orientation.
    pub directed: bool,

    /// More than one edge may join the same endpoint pair.
    pub allows_multiple_edges: bool,

    /// An edge may start and end at the same vertex.
    pub allows_self_loops: bool,
}

impl Default for GraphType {
    fn default() -> Self {
        Self::simple_graph()
    }
}

impl GraphType {
    /// Undirected, no parallel edges, no loops.
    pub fn simple_graph() -> Self {
        Self {
            directed: false,
            allows_multiple_edges: false,
            allows_self_loops: false,
        }
    }

    /// Undirected, parallel edges, no loops.
    pub fn multigraph() -> Self {
        Self {
            allows_multiple_edges: true,
            ..Self::simple_graph()
        }
    }

    /// Undirected, parallel edges and loops.
    pub fn pseudograph() -> Self {
        Self {
            allows_multiple_edges: true,
            allows_self_loops: true,
            ..Self::simple_graph()
        }
    }

    /// Directed, no parallel edges, no loops.
    pub fn simple_directed_graph() -> Self {
        Self {
            directed: true,
            ..Self::simple_graph()
        }
    }

    /// Directed, parallel edges, no loops.
    pub fn directed_multigraph() -> Self {
        Self {
            directed: true,
            ..Self::multigraph()
        }
    }

    /// Directed, parallel edges and loops.
    pub fn directed_pseudograph() -> Self {
        Self {
            directed: true,
            ..Self::pseudograph()
        }
    }

    /// Starts a builder from the simple undirected policy.
    pub fn builder() -> GraphTypeBuilder {
        GraphTypeBuilder::default()
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn is_undirected(&self) -> bool {
        !self.directed
    }

    pub fn is_simple(&self) -> bool {
        !self.allows_multiple_edges && !self.allows_self_loops
    }

    /// Returns a copy with the given directedness and the same edge policy.
    pub fn as_directed(self, directed: bool) -> Self {
        Self { directed, ..self }
    }
}

impl fmt::Display for GraphType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match (self.allows_multiple_edges, self.allows_self_loops) {
            (false, false) => "simple graph",
            (true, false) => "multigraph",
            (false, true) => "graph with loops",
            (true, true) => "pseudograph",
        };
        if self.directed {
            write!(f, "directed {}", s)
        } else {
            write!(f, "undirected {}", s)
        }
    }
}

/// Incremental construction of a [`GraphType`].
#[derive(Debug, Clone, Default)]
pub struct GraphTypeBuilder {
    graph_type: GraphType,
}

impl GraphTypeBuilder {
    pub fn directed(mut self) -> Self {
        self.graph_type.directed = true;
        self
    }

    pub fn undirected(mut self) -> Self {
        self.graph_type.directed = false;
        self
    }

    pub fn allowing_multiple_edges(mut self, allow: bool) -> Self {
        self.graph_type.allows_multiple_edges = allow;
        self
    }

    pub fn allowing_self_loops(mut self, allow: bool) -> Self {
        self.graph_type.allows_self_loops = allow;
        self
    }

    pub fn build(self) -> GraphType {
        self.graph_type
    }
}
