//! Dualgraph Core - Graph abstraction for the line graph builder
//!
//! This crate defines the capability set that graph algorithms in the
//! workspace are written against, plus one in-memory implementation of it.
//!
//! # Architecture
//!
//! - [`Graph`] is the read side: vertex and edge sets, incidence queries,
//!   edge endpoints and the [`GraphType`] tag.
//! - [`GraphMut`] adds vertex and edge insertion.
//! - [`MemGraph`] wraps a petgraph `StableGraph` with a vertex-value index,
//!   so any small copyable value (including another graph's [`EdgeId`]) can
//!   be used as a vertex.
//!
//! Directedness is a runtime tag rather than a type parameter. Algorithms
//! check it at their boundary with [`require_directed`] and
//! [`require_undirected`].
//!
//! # Example
//!
//! ```
//! use dualgraph_core::{Graph, GraphMut, GraphType, MemGraph};
//!
//! let mut graph = MemGraph::new(GraphType::simple_graph());
//! graph.add_all_vertices([1, 2, 3]);
//! let a = graph.add_edge(1, 2).unwrap().unwrap();
//!
//! assert_eq!(graph.edge_source(a), Some(1));
//! assert_eq!(graph.incoming_edges_of(2), vec![a]);
//! ```

mod error;
mod graph;
mod graph_type;
mod mem_graph;

pub use error::GraphError;
pub use graph::{require_directed, require_undirected, Graph, GraphMut};
pub use graph_type::{GraphType, GraphTypeBuilder};
pub use mem_graph::{EdgeId, MemGraph};
