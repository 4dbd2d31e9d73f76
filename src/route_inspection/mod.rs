//! Route inspection (Chinese postman): the cheapest closed walk using every edge at least once.
//!
//! The graph is made Eulerian by duplicating the edges of shortest paths between the
//! odd-degree nodes, paired up by a minimum weight perfect matching; an Eulerian circuit of the
//! augmented multigraph is the walk.

pub mod euler;
pub mod matching;

pub use euler::*;
pub use matching::*;

use crate::{errors::*, graph::*, shortest_path::ShortestPathTree};
use fxhash::FxHashMap;
use itertools::Itertools;
use log::debug;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClosedWalk {
    cost: Weight,
    circuit: Circuit,
    duplicated: Vec<EdgeId>,
}

impl ClosedWalk {
    /// Sum of the weights of all traversed edges
    pub fn cost(&self) -> Weight {
        self.cost
    }

    /// Node sequence of the walk; starts and ends at the same node, empty if there are no edges
    pub fn nodes(&self) -> &[Node] {
        &self.circuit.nodes
    }

    /// Input edges in the order they are traversed
    pub fn edges(&self) -> &[EdgeId] {
        &self.circuit.edges
    }

    /// Input edges that are traversed a second time, one entry per extra traversal
    pub fn duplicated_edges(&self) -> &[EdgeId] {
        &self.duplicated
    }
}

impl<G: WeightedAdjacencyList> InvariantCheck<G, SolverError> for ClosedWalk {
    fn is_correct(&self, graph: &G) -> Result<(), SolverError> {
        let invalid = |msg: String| Err(SolverError::InvalidResult(msg));

        if self.nodes().is_empty() {
            if graph.number_of_edges() > 0 || self.cost != 0 {
                return invalid("empty walk for a graph with edges".into());
            }
            return Ok(());
        }

        if self.nodes().len() != self.edges().len() + 1 {
            return invalid(format!(
                "walk with {} nodes and {} edges",
                self.nodes().len(),
                self.edges().len()
            ));
        }

        if self.nodes().first() != self.nodes().last() {
            return invalid("walk is not closed".into());
        }

        let mut traversals: FxHashMap<EdgeId, u32> = FxHashMap::default();
        let mut cost: Weight = 0;
        for ((&u, &v), &id) in self.nodes().iter().tuple_windows().zip(self.edges()) {
            if id >= graph.number_of_edges() {
                return invalid(format!("edge {id} out of range"));
            }
            let edge = graph.edge(id);
            if edge.endpoints().normalized() != Edge(u, v).normalized() {
                return invalid(format!("edge {id} does not connect {u} and {v}"));
            }
            *traversals.entry(id).or_default() += 1;
            let Some(sum) = cost.checked_add(edge.weight()) else {
                return invalid("walk cost overflows".into());
            };
            cost = sum;
        }

        if let Some(id) = (0..graph.number_of_edges()).find(|id| !traversals.contains_key(id)) {
            return invalid(format!("edge {id} is never traversed"));
        }

        if cost != self.cost {
            return invalid(format!(
                "walk cost {} differs from edge sum {cost}",
                self.cost
            ));
        }

        Ok(())
    }
}

/// Nodes with an odd number of incident edge endpoints, in increasing order
pub fn odd_degree_vertices<G: WeightedAdjacencyList>(graph: &G) -> Vec<Node> {
    graph
        .vertices()
        .filter(|&u| graph.degree_of(u) % 2 == 1)
        .collect()
}

/// Solves route inspection on `graph`.
///
/// Fails with [`SolverError::DisconnectedEdges`] if the edges do not form a single connected
/// component (isolated nodes are ignored), as then no closed walk covers every edge. A graph
/// without edges yields the empty walk of cost 0. The walk starts at the smallest node with
/// positive degree.
///
/// # Example
/// ```
/// use graph_engine::{graph::*, route_inspection::route_inspection};
/// // a path 0 - 1 - 2 has to be walked twice
/// let graph = WeightedGraph::from_edges(3, [(0, 1, 2), (1, 2, 3)]);
/// let walk = route_inspection(&graph).unwrap();
/// assert_eq!(walk.cost(), 10);
/// assert_eq!(walk.nodes(), &[0, 1, 2, 1, 0]);
/// ```
pub fn route_inspection(graph: &WeightedGraph) -> Result<ClosedWalk, SolverError> {
    let Some(start) = graph.non_isolated_vertices().next() else {
        return Ok(ClosedWalk::default());
    };

    let components = graph.number_of_edge_components();
    if components > 1 {
        return Err(SolverError::DisconnectedEdges { components });
    }

    let odd = odd_degree_vertices(graph);
    debug!("{} odd degree vertices", odd.len());

    let mut multigraph = EulerianMultigraph::new(graph.number_of_nodes());
    for (id, e) in graph.edges().iter().enumerate() {
        multigraph.add_edge(e.0, e.1, id as EdgeId);
    }

    let trees = odd
        .iter()
        .map(|&u| ShortestPathTree::new(graph, u))
        .collect_vec();

    // odd nodes share the single edge component, so all pairs are reachable
    let matching = min_weight_perfect_matching(odd.len(), |i, j| trees[i].distance_to(odd[j]))?
        .ok_or_else(|| SolverError::InvalidResult("odd degree nodes cannot be paired".into()))?;
    debug!("matching weight {}", matching.weight());

    let mut duplicated = Vec::new();
    for &(i, j) in matching.pairs() {
        let path = trees[i].path_to(odd[j]).ok_or_else(|| {
            let (u, v) = (odd[i], odd[j]);
            SolverError::InvalidResult(format!("odd nodes {u} and {v} are unreachable"))
        })?;
        for &id in path.edges() {
            let e = graph.edge(id);
            multigraph.add_edge(e.0, e.1, id);
            duplicated.push(id);
        }
    }

    let extra = duplicated
        .iter()
        .try_fold(0 as Weight, |sum, &id| sum.checked_add(graph.edge(id).weight()))
        .ok_or(SolverError::WeightOverflow)?;
    debug_assert_eq!(extra, matching.weight());

    let cost = graph
        .total_weight()
        .checked_add(extra)
        .ok_or(SolverError::WeightOverflow)?;

    let circuit = multigraph.eulerian_circuit(start);
    debug_assert_eq!(circuit.edges.len(), multigraph.number_of_edges());

    Ok(ClosedWalk {
        cost,
        circuit,
        duplicated,
    })
}
