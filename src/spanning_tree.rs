//! Kruskal-style extremal spanning forests.
//!
//! Disconnected inputs yield one tree per connected component; the reported weight is the
//! sum over all components.

use crate::{errors::*, graph::*, utils::UnionFind};
use log::debug;
use std::cmp::Reverse;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Extremum {
    Minimum,
    Maximum,
}

/// The edges selected by Kruskal's algorithm in selection order, with their total weight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanningForest {
    total_weight: Weight,
    ids: Vec<EdgeId>,
    edges: Vec<WeightedEdge>,
}

impl SpanningForest {
    pub fn total_weight(&self) -> Weight {
        self.total_weight
    }

    /// Ids of the selected input edges, in the order they were selected
    pub fn edge_ids(&self) -> &[EdgeId] {
        &self.ids
    }

    /// The selected edges exactly as they appear in the input
    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    pub fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl<G: WeightedAdjacencyList> InvariantCheck<G, SolverError> for SpanningForest {
    fn is_correct(&self, graph: &G) -> Result<(), SolverError> {
        let mut uf = UnionFind::new(graph.number_of_nodes());
        let mut weight = 0;

        for (&id, &edge) in self.ids.iter().zip(&self.edges) {
            if id >= graph.number_of_edges() || graph.edge(id) != edge {
                return Err(SolverError::InvalidResult(format!(
                    "selected edge {id} = {edge:?} is not an input edge"
                )));
            }
            if !uf.union(edge.0, edge.1) {
                return Err(SolverError::InvalidResult(format!(
                    "edge {edge:?} closes a cycle"
                )));
            }
            weight += edge.weight();
        }

        // every component has to be spanned: no input edge may join two trees
        for id in 0..graph.number_of_edges() {
            let WeightedEdge(u, v, _) = graph.edge(id);
            if !uf.same_set(u, v) {
                return Err(SolverError::InvalidResult(format!(
                    "nodes {u} and {v} are connected in the graph but not in the forest"
                )));
            }
        }

        if weight != self.total_weight {
            return Err(SolverError::InvalidResult(format!(
                "forest weight {} differs from edge sum {weight}",
                self.total_weight
            )));
        }

        Ok(())
    }
}

/// Computes a minimum or maximum spanning forest.
///
/// Edges are scanned in order of weight (ascending for [`Extremum::Minimum`], descending for
/// [`Extremum::Maximum`]); the sort is stable, so among equal weights the edge appearing first
/// in the input is preferred. Self-loops never enter the forest.
///
/// # Example
/// ```
/// use graph_engine::{graph::*, spanning_tree::*};
/// let graph = WeightedGraph::from_edges(4, [(0, 1, 4), (1, 2, 1), (0, 2, 2), (2, 3, 5)]);
/// let mst = spanning_forest(&graph, Extremum::Minimum);
/// assert_eq!(mst.total_weight(), 8);
/// assert_eq!(mst.edge_ids(), &[1, 2, 3]);
/// ```
pub fn spanning_forest(graph: &WeightedGraph, extremum: Extremum) -> SpanningForest {
    let mut order: Vec<EdgeId> = (0..graph.number_of_edges()).collect();
    match extremum {
        Extremum::Minimum => order.sort_by_key(|&id| graph.edge(id).weight()),
        Extremum::Maximum => order.sort_by_key(|&id| Reverse(graph.edge(id).weight())),
    }

    let target_size = graph.len().saturating_sub(1);
    let mut uf = UnionFind::new(graph.number_of_nodes());
    let mut forest = SpanningForest {
        total_weight: 0,
        ids: Vec::with_capacity(target_size),
        edges: Vec::with_capacity(target_size),
    };

    for id in order {
        if forest.ids.len() == target_size {
            break;
        }

        let edge = graph.edge(id);
        if uf.union(edge.0, edge.1) {
            forest.total_weight += edge.weight();
            forest.ids.push(id);
            forest.edges.push(edge);
        }
    }

    debug!(
        "{extremum:?} spanning forest: {} edges, {} trees, weight {}",
        forest.ids.len(),
        uf.number_of_sets(),
        forest.total_weight
    );

    forest
}
