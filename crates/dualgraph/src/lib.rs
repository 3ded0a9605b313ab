//! Dualgraph - Line graph construction
//!
//! Turns every edge of a graph into a vertex and connects those vertices
//! by incidence. Undirected edges are adjacent when they share an
//! endpoint; a directed edge e1 points at e2 when e1 ends where e2 starts.
//!
//! The algorithm works against the [`Graph`](dualgraph_core::Graph) and
//! [`GraphMut`](dualgraph_core::GraphMut) traits, so any container that
//! implements them can be used as source or target.
//!
//! # Example
//!
//! ```
//! use dualgraph::LineGraphConstructor;
//! use dualgraph_core::{EdgeId, Graph, GraphMut, GraphType, MemGraph};
//!
//! let mut graph = MemGraph::new(GraphType::simple_graph());
//! graph.add_all_vertices([1, 2, 3]);
//! let a = graph.add_edge(1, 2).unwrap().unwrap();
//! let b = graph.add_edge(2, 3).unwrap().unwrap();
//!
//! let mut line: MemGraph<EdgeId> = MemGraph::new(GraphType::simple_graph());
//! LineGraphConstructor::new(&graph).construct_graph(&mut line).unwrap();
//!
//! assert_eq!(line.vertex_set(), vec![a, b]);
//! assert!(line.contains_edge(a, b));
//! ```

mod constructor;
mod error;
mod export;

pub use constructor::{LineGraphConstructor, LineGraphConstructorBuilder};
pub use error::{LineGraphError, Result};
pub use export::{export_edges, LineGraphEdge, LineGraphStats};
