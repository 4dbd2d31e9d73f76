use super::*;
use smallvec::SmallVec;

type Neighborhood = SmallVec<[HalfEdge; 4]>;

/// Immutable undirected multigraph: the input edge list plus an adjacency structure over it.
/// Edge ids are positions in the input list, so parallel edges stay distinguishable.
#[derive(Clone, Debug, Default)]
pub struct WeightedGraph {
    edges: Vec<WeightedEdge>,
    adj: Vec<Neighborhood>,
}

impl WeightedGraph {
    /// Builds the graph on nodes `0..n` from an edge list.
    /// ** Panics if an endpoint is >= n, a weight exceeds [`MAX_WEIGHT`] or if there are more
    /// than `EdgeId::MAX` edges **
    ///
    /// # Example
    /// ```
    /// use graph_engine::graph::*;
    /// let graph = WeightedGraph::from_edges(3, [(0, 1, 4), (1, 2, 1), (1, 2, 3)]);
    /// assert_eq!(graph.number_of_edges(), 3);
    /// assert_eq!(graph.degree_of(1), 3);
    /// assert_eq!(graph.direct_weight(2, 1), Some(1));
    /// ```
    pub fn from_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge>>,
    ) -> Self {
        let edges: Vec<WeightedEdge> = edges.into_iter().map(|e| e.into()).collect();
        assert!(edges.len() <= EdgeId::MAX as usize);

        let mut adj = vec![Neighborhood::new(); n as usize];
        for (id, &WeightedEdge(u, v, weight)) in edges.iter().enumerate() {
            assert!(u < n && v < n, "edge ({u}, {v}) out of range for n = {n}");
            assert!(
                weight <= MAX_WEIGHT,
                "weight {weight} of edge ({u}, {v}) exceeds {MAX_WEIGHT}"
            );
            let edge = id as EdgeId;
            adj[u as usize].push(HalfEdge {
                neighbor: v,
                weight,
                edge,
            });
            adj[v as usize].push(HalfEdge {
                neighbor: u,
                weight,
                edge,
            });
        }

        Self { edges, adj }
    }

    /// Returns the input edge list in input order
    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    /// Sum of all edge weights (parallel edges counted individually)
    pub fn total_weight(&self) -> Weight {
        self.edges.iter().map(|e| e.weight()).sum()
    }

    /// Nodes with at least one incident edge
    pub fn non_isolated_vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(|&u| self.degree_of(u) > 0)
    }
}

impl GraphNodeOrder for WeightedGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.adj.len() as NumNodes
    }
}

impl GraphEdgeOrder for WeightedGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl WeightedAdjacencyList for WeightedGraph {
    fn half_edges_of(&self, u: Node) -> &[HalfEdge] {
        &self.adj[u as usize]
    }

    fn edge(&self, id: EdgeId) -> WeightedEdge {
        self.edges[id as usize]
    }
}
