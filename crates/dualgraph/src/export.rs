//! Export helpers for built line graphs.
//!
//! These flatten a line graph into plain serde-serializable records, for
//! visualisation or for comparing results across runs.

use dualgraph_core::Graph;
use serde::{Deserialize, Serialize};

/// A single adjacency of a line graph, by vertex (source edge) identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineGraphEdge<V> {
    pub source: V,
    pub target: V,
}

/// Summary counts for a line graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineGraphStats {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub self_loops: usize,
    pub directed: bool,
}

impl LineGraphStats {
    pub fn of<G: Graph>(graph: &G) -> Self {
        let edges = export_edges(graph);
        Self {
            vertex_count: graph.vertex_count(),
            edge_count: edges.len(),
            self_loops: edges.iter().filter(|e| e.source == e.target).count(),
            directed: graph.is_directed(),
        }
    }
}

/// Returns all edges of `graph` with their endpoints, in edge order.
pub fn export_edges<G: Graph>(graph: &G) -> Vec<LineGraphEdge<G::Vertex>> {
    graph
        .edge_set()
        .into_iter()
        .filter_map(|edge| {
            Some(LineGraphEdge {
                source: graph.edge_source(edge)?,
                target: graph.edge_target(edge)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LineGraphConstructor;
    use dualgraph_core::{GraphMut, GraphType, MemGraph};

    #[test]
    fn test_export_directed_loop() {
        let mut graph = MemGraph::new(GraphType::directed_pseudograph());
        graph.add_all_vertices(["a", "b"]);
        let lp = graph.add_edge("a", "a").unwrap().unwrap();
        let ab = graph.add_edge("a", "b").unwrap().unwrap();

        let line = LineGraphConstructor::new(&graph).line_graph().unwrap();
        let edges = export_edges(&line);

        // Both arcs leave the loop at "a".
        assert_eq!(
            edges,
            vec![
                LineGraphEdge { source: lp, target: lp },
                LineGraphEdge { source: lp, target: ab },
            ]
        );

        let stats = LineGraphStats::of(&line);
        assert_eq!(
            stats,
            LineGraphStats {
                vertex_count: 2,
                edge_count: 2,
                self_loops: 1,
                directed: true,
            }
        );
    }

    #[test]
    fn test_export_serializes() {
        let edge = LineGraphEdge { source: 3u32, target: 5u32 };
        let json = serde_json::to_string(&edge).unwrap();
        assert_eq!(json, r#"{"source":3,"target":5}"#);
    }
}
