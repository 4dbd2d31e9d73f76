//! Single-source shortest paths (Dijkstra) over non-negative weights.
//!
//! [`ShortestPathTree`] is computed once per source and can be queried for any number of
//! targets; route inspection uses it as its all-pairs primitive for the odd-degree nodes.

use crate::{errors::*, graph::*, utils::DistanceHeap};
use itertools::Itertools;
use log::trace;

/// A walk `nodes[0] -> nodes[1] -> ...` where consecutive nodes are joined by `edges[i]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    nodes: Vec<Node>,
    edges: Vec<EdgeId>,
    weight: Weight,
}

impl Path {
    /// The trivial path consisting only of `u`
    pub fn single(u: Node) -> Self {
        Self {
            nodes: vec![u],
            edges: Vec::new(),
            weight: 0,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Ids of the traversed edges; one shorter than [`Path::nodes`]
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn source(&self) -> Node {
        self.nodes[0]
    }

    pub fn target(&self) -> Node {
        *self.nodes.last().unwrap()
    }
}

impl<G: WeightedAdjacencyList> InvariantCheck<G, SolverError> for Path {
    fn is_correct(&self, graph: &G) -> Result<(), SolverError> {
        if self.nodes.is_empty() || self.nodes.len() != self.edges.len() + 1 {
            return Err(SolverError::InvalidResult(format!(
                "path with {} nodes and {} edges",
                self.nodes.len(),
                self.edges.len()
            )));
        }

        if let Some(u) = self.nodes.iter().find(|&&u| u >= graph.number_of_nodes()) {
            return Err(SolverError::InvalidResult(format!("node {u} out of range")));
        }

        let mut weight = 0;
        for ((&u, &v), &id) in self.nodes.iter().tuple_windows().zip(&self.edges) {
            if id >= graph.number_of_edges() {
                return Err(SolverError::InvalidResult(format!("edge {id} out of range")));
            }
            let edge = graph.edge(id);
            if edge.endpoints().normalized() != Edge(u, v).normalized() {
                return Err(SolverError::InvalidResult(format!(
                    "edge {id} does not connect {u} and {v}"
                )));
            }
            weight += edge.weight();
        }

        if weight != self.weight {
            return Err(SolverError::InvalidResult(format!(
                "path weight {} differs from edge sum {weight}",
                self.weight
            )));
        }

        Ok(())
    }
}

/// Distances from a fixed source to every node together with the edge through which each
/// node was reached.
#[derive(Clone, Debug)]
pub struct ShortestPathTree {
    source: Node,
    distance: Vec<Option<Weight>>,
    predecessor: Vec<Option<HalfEdge>>,
}

impl ShortestPathTree {
    /// Runs Dijkstra from `source`.
    ///
    /// Among nodes of equal tentative distance the one with smaller index is settled first,
    /// and a predecessor is only replaced on strict improvement. The result is hence
    /// deterministic.
    ///
    /// ** Panics if source >= n **
    pub fn new<G: WeightedAdjacencyList>(graph: &G, source: Node) -> Self {
        let n = graph.len();
        assert!((source as usize) < n);

        let mut distance: Vec<Option<Weight>> = vec![None; n];
        let mut predecessor: Vec<Option<HalfEdge>> = vec![None; n];
        let mut settled = vec![false; n];

        let mut heap = DistanceHeap::new(n, 0);
        distance[source as usize] = Some(0);
        heap.push(0, source);

        while let Some((dist_u, u)) = heap.pop() {
            settled[u as usize] = true;
            trace!("settle {u} at distance {dist_u}");

            for h in graph.half_edges_of(u) {
                let v = h.neighbor as usize;
                if settled[v] {
                    continue;
                }

                // a simple path plus one edge, all of weight <= MAX_WEIGHT; no overflow
                let candidate = dist_u + h.weight;
                if distance[v].is_none_or(|known| candidate < known) {
                    distance[v] = Some(candidate);
                    predecessor[v] = Some(HalfEdge {
                        neighbor: u,
                        weight: h.weight,
                        edge: h.edge,
                    });
                    heap.push_or_decrease(candidate, h.neighbor);
                }
            }
        }

        Self {
            source,
            distance,
            predecessor,
        }
    }

    pub fn source(&self) -> Node {
        self.source
    }

    /// Returns the length of a shortest path to `target`, or `None` if it is unreachable
    pub fn distance_to(&self, target: Node) -> Option<Weight> {
        self.distance[target as usize]
    }

    /// Reconstructs a shortest path from the source to `target` by walking the predecessor
    /// edges backwards; returns `None` if `target` is unreachable
    pub fn path_to(&self, target: Node) -> Option<Path> {
        let weight = self.distance_to(target)?;

        let mut nodes = vec![target];
        let mut edges = Vec::new();
        let mut u = target;
        while u != self.source {
            let h = self.predecessor[u as usize]?;
            edges.push(h.edge);
            nodes.push(h.neighbor);
            u = h.neighbor;
        }

        nodes.reverse();
        edges.reverse();

        Some(Path {
            nodes,
            edges,
            weight,
        })
    }
}

/// Computes a minimum weight path from `source` to `target`; `None` if there is none.
///
/// # Example
/// ```
/// use graph_engine::{graph::*, shortest_path::shortest_path};
/// let graph = WeightedGraph::from_edges(4, [(0, 1, 4), (1, 2, 1), (0, 2, 2), (2, 3, 5)]);
/// let path = shortest_path(&graph, 0, 3).unwrap();
/// assert_eq!(path.nodes(), &[0, 2, 3]);
/// assert_eq!(path.weight(), 7);
/// ```
pub fn shortest_path<G: WeightedAdjacencyList>(
    graph: &G,
    source: Node,
    target: Node,
) -> Option<Path> {
    if source == target {
        return Some(Path::single(source));
    }
    ShortestPathTree::new(graph, source).path_to(target)
}
