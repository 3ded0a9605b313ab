//! Line graph construction.
//!
//! The line graph L(G) has one vertex per edge of G. For undirected G two
//! vertices are joined when their edges share an endpoint. For directed G
//! there is an arc from e1 to e2 when the head of e1 is the tail of e2.
//!
//! Construction runs in O(|E|) for simple graphs of bounded degree. In
//! general the directed case costs the sum of indeg(v) * outdeg(v) over
//! all vertices, which grows past |E| around dense vertices and parallel
//! edges. [`LineGraphConstructor::estimated_additions`] reports that cost
//! up front.

use crate::error::{LineGraphError, Result};
use dualgraph_core::{
    require_directed, require_undirected, Graph, GraphError, GraphMut, GraphType, MemGraph,
};
use tracing::{debug, trace, warn};

const MISSING_SOURCE: &str = "Graph cannot be null";
const MUST_BE_DIRECTED: &str = "Graph must be directed";
const MUST_BE_UNDIRECTED: &str = "Graph must be undirected";

/// Builds the line graph of a borrowed source graph.
///
/// The constructor only holds the source reference, so one source can feed
/// any number of targets, from any number of threads when `G: Sync`.
#[derive(Debug)]
pub struct LineGraphConstructor<'g, G> {
    graph: &'g G,
}

impl<G> Clone for LineGraphConstructor<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G> Copy for LineGraphConstructor<'_, G> {}

impl<'g, G: Graph> LineGraphConstructor<'g, G> {
    /// Binds the constructor to a source graph.
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// Binds the constructor to a source graph that may be absent.
    ///
    /// Fails with [`LineGraphError::NullArgument`] for `None`.
    pub fn from_option(graph: Option<&'g G>) -> Result<Self> {
        graph
            .map(Self::new)
            .ok_or(LineGraphError::NullArgument(MISSING_SOURCE))
    }

    pub fn builder() -> LineGraphConstructorBuilder<'g, G> {
        LineGraphConstructorBuilder { graph: None }
    }

    /// The bound source graph.
    pub fn source(&self) -> &'g G {
        self.graph
    }

    /// Populates `target` with the line graph of the source.
    ///
    /// `target` must have the same directedness as the source; otherwise
    /// this fails with [`LineGraphError::InvalidGraphType`] and `target` is
    /// left untouched. Every source edge is added to `target` as a vertex
    /// (already-present vertices are kept as they are), then one add-edge
    /// call is issued per adjacency. Whether repeated adjacencies collapse
    /// is up to the target's own edge policy.
    pub fn construct_graph<T>(&self, target: &mut T) -> Result<()>
    where
        T: GraphMut<Vertex = G::Edge>,
    {
        self.validate(target)?;

        debug!(
            "Constructing {} line graph from {} vertices and {} edges",
            if self.graph.is_directed() { "directed" } else { "undirected" },
            self.graph.vertex_count(),
            self.graph.edge_count()
        );

        target.add_all_vertices(self.graph.edge_set());

        if self.graph.is_directed() {
            self.derive_directed(target)?;
        } else {
            self.derive_undirected(target)?;
        }

        debug!(
            "Line graph has {} vertices and {} edges",
            target.vertex_count(),
            target.edge_count()
        );
        Ok(())
    }

    /// Builds the line graph into a fresh [`MemGraph`].
    ///
    /// The result has the source's directedness, refuses parallel edges and
    /// accepts self-loops only when directed, since directed source loops
    /// are the only way L(G) gains a loop.
    pub fn line_graph(&self) -> Result<MemGraph<G::Edge>> {
        let directed = self.graph.is_directed();
        let graph_type = GraphType::builder()
            .allowing_multiple_edges(false)
            .allowing_self_loops(directed)
            .build()
            .as_directed(directed);

        let edges = self.graph.edge_count();
        let mut target = MemGraph::with_capacity(graph_type, edges, edges);
        self.construct_graph(&mut target)?;
        Ok(target)
    }

    /// Number of add-edge calls [`construct_graph`](Self::construct_graph)
    /// will issue for the current source.
    pub fn estimated_additions(&self) -> usize {
        if self.graph.is_directed() {
            self.graph
                .vertex_set()
                .into_iter()
                .map(|vertex| {
                    self.graph.incoming_edges_of(vertex).len()
                        * self.graph.outgoing_edges_of(vertex).len()
                })
                .sum()
        } else {
            self.graph
                .edge_set()
                .into_iter()
                .map(|edge| {
                    self.endpoints(edge)
                        .map(|endpoint| {
                            self.graph
                                .incoming_edges_of(endpoint)
                                .into_iter()
                                .filter(|&other| other != edge)
                                .count()
                        })
                        .sum::<usize>()
                })
                .sum()
        }
    }

    fn validate<T>(&self, target: &T) -> Result<()>
    where
        T: Graph,
    {
        let checked = if self.graph.is_directed() {
            require_directed(target, MUST_BE_DIRECTED)
        } else {
            require_undirected(target, MUST_BE_UNDIRECTED)
        };

        checked.map_err(|err| {
            warn!("Rejected line graph target: {}", err);
            match err {
                GraphError::InvalidGraphType(message) => LineGraphError::InvalidGraphType(message),
                other => LineGraphError::Graph(other),
            }
        })
    }

    /// Target endpoint first, then source endpoint.
    fn endpoints(&self, edge: G::Edge) -> impl Iterator<Item = G::Vertex> {
        [self.graph.edge_target(edge), self.graph.edge_source(edge)]
            .into_iter()
            .flatten()
    }

    fn derive_directed<T>(&self, target: &mut T) -> Result<()>
    where
        T: GraphMut<Vertex = G::Edge>,
    {
        for vertex in self.graph.vertex_set() {
            let outgoing = self.graph.outgoing_edges_of(vertex);
            for head in self.graph.incoming_edges_of(vertex) {
                for &tail in &outgoing {
                    trace!("Arc {:?} -> {:?} via {:?}", head, tail, vertex);
                    target.add_edge(head, tail)?;
                }
            }
        }
        Ok(())
    }

    fn derive_undirected<T>(&self, target: &mut T) -> Result<()>
    where
        T: GraphMut<Vertex = G::Edge>,
    {
        for edge in self.graph.edge_set() {
            for endpoint in self.endpoints(edge) {
                for other in self.graph.incoming_edges_of(endpoint) {
                    // Identity, not endpoints: parallel edges stay adjacent.
                    if other != edge {
                        trace!("Edge {:?} -- {:?} via {:?}", edge, other, endpoint);
                        target.add_edge(edge, other)?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Builder for [`LineGraphConstructor`] when the source is supplied late.
#[derive(Debug)]
pub struct LineGraphConstructorBuilder<'g, G> {
    graph: Option<&'g G>,
}

impl<'g, G: Graph> LineGraphConstructorBuilder<'g, G> {
    pub fn source(mut self, graph: &'g G) -> Self {
        self.graph = Some(graph);
        self
    }

    /// Fails with [`LineGraphError::NullArgument`] if no source was set.
    pub fn build(self) -> Result<LineGraphConstructor<'g, G>> {
        LineGraphConstructor::from_option(self.graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dualgraph_core::EdgeId;

    fn undirected_path() -> (MemGraph<u32>, EdgeId, EdgeId) {
        let mut graph = MemGraph::new(GraphType::simple_graph());
        graph.add_all_vertices([1, 2, 3]);
        let a = graph.add_edge(1, 2).unwrap().unwrap();
        let b = graph.add_edge(2, 3).unwrap().unwrap();
        (graph, a, b)
    }

    fn directed_cycle() -> (MemGraph<u32>, EdgeId, EdgeId) {
        let mut graph = MemGraph::new(GraphType::simple_directed_graph());
        graph.add_all_vertices([1, 2]);
        let a = graph.add_edge(1, 2).unwrap().unwrap();
        let b = graph.add_edge(2, 1).unwrap().unwrap();
        (graph, a, b)
    }

    #[test]
    fn test_undirected_path() {
        let (graph, a, b) = undirected_path();
        let mut target: MemGraph<EdgeId> = MemGraph::new(GraphType::simple_graph());

        LineGraphConstructor::new(&graph)
            .construct_graph(&mut target)
            .unwrap();

        assert_eq!(target.vertex_set(), vec![a, b]);
        assert_eq!(target.edge_count(), 1);
        assert!(target.contains_edge(a, b));
        assert!(!target.contains_edge(a, a));
    }

    #[test]
    fn test_directed_two_cycle() {
        let (graph, a, b) = directed_cycle();
        let mut target: MemGraph<EdgeId> = MemGraph::new(GraphType::simple_directed_graph());

        LineGraphConstructor::new(&graph)
            .construct_graph(&mut target)
            .unwrap();

        assert_eq!(target.vertex_set(), vec![a, b]);
        assert_eq!(target.edge_count(), 2);
        assert!(target.contains_edge(a, b));
        assert!(target.contains_edge(b, a));
    }

    #[test]
    fn test_directed_source_rejects_undirected_target() {
        let (graph, _, _) = directed_cycle();
        let mut target: MemGraph<EdgeId> = MemGraph::new(GraphType::pseudograph());

        let err = LineGraphConstructor::new(&graph)
            .construct_graph(&mut target)
            .unwrap_err();

        assert_eq!(
            err,
            LineGraphError::InvalidGraphType("Graph must be directed".into())
        );
        assert_eq!(target.vertex_count(), 0);
    }

    #[test]
    fn test_undirected_source_rejects_directed_target() {
        let (graph, _, _) = undirected_path();
        let mut target: MemGraph<EdgeId> = MemGraph::new(GraphType::directed_pseudograph());

        let err = LineGraphConstructor::new(&graph)
            .construct_graph(&mut target)
            .unwrap_err();

        assert_eq!(err.to_string(), "invalid graph type: Graph must be undirected");
        assert_eq!(target.vertex_count(), 0);
        assert_eq!(target.edge_count(), 0);
    }

    #[test]
    fn test_missing_source() {
        let err = LineGraphConstructor::<MemGraph<u32>>::from_option(None).unwrap_err();
        assert_eq!(err, LineGraphError::NullArgument("Graph cannot be null"));

        let err = LineGraphConstructor::<MemGraph<u32>>::builder()
            .build()
            .unwrap_err();
        assert!(matches!(err, LineGraphError::NullArgument(_)));
    }

    #[test]
    fn test_builder_with_source() {
        let (graph, _, _) = undirected_path();
        let constructor = LineGraphConstructor::builder().source(&graph).build().unwrap();
        assert_eq!(constructor.source().edge_count(), 2);
    }

    #[test]
    fn test_line_graph_matches_source_directedness() {
        let (graph, a, b) = directed_cycle();
        let line = LineGraphConstructor::new(&graph).line_graph().unwrap();

        assert!(line.is_directed());
        assert!(line.graph_type().allows_self_loops);
        assert_eq!(line.edges_between(a, b).len(), 1);

        let (graph, _, _) = undirected_path();
        let line = LineGraphConstructor::new(&graph).line_graph().unwrap();
        assert!(!line.is_directed());
        assert!(line.graph_type().is_simple());
    }

    #[test]
    fn test_directed_loop_into_loop_free_target() {
        let mut graph = MemGraph::new(GraphType::directed_pseudograph());
        graph.add_vertex(1);
        graph.add_edge(1, 1).unwrap();
        let mut target: MemGraph<EdgeId> = MemGraph::new(GraphType::simple_directed_graph());

        let err = LineGraphConstructor::new(&graph)
            .construct_graph(&mut target)
            .unwrap_err();

        assert!(matches!(
            err,
            LineGraphError::Graph(GraphError::LoopsNotAllowed(_))
        ));
    }

    #[test]
    fn test_estimated_additions() {
        let (graph, _, _) = undirected_path();
        // a sees b at vertex 2, b sees a at vertex 2.
        assert_eq!(LineGraphConstructor::new(&graph).estimated_additions(), 2);

        let (graph, _, _) = directed_cycle();
        assert_eq!(LineGraphConstructor::new(&graph).estimated_additions(), 2);
    }
}
