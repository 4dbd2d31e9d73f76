use std::error::Error;

use thiserror::Error;

use crate::graph::{MAX_WEIGHT, Node, NumNodes, Weight};

/// Trait for checking invariants of a result against the graph it was computed on
pub trait InvariantCheck<G, E: Error> {
    fn is_correct(&self, graph: &G) -> Result<(), E>;
}

/// A request that does not follow the protocol; nothing is computed for it
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("premature end of input when parsing {what}")]
    MissingToken { what: &'static str },

    #[error("cannot parse {what} from {token:?}")]
    InvalidToken { what: &'static str, token: String },

    #[error("unknown mode {0:?}; expected one of dijkstra, mst, maxst, chinese, tsp")]
    UnknownMode(String),

    #[error("{what} {node} is out of range for a graph with {number_of_nodes} nodes")]
    NodeOutOfRange {
        what: &'static str,
        node: Node,
        number_of_nodes: NumNodes,
    },

    #[error("edge weight {weight} is outside of 1..={max}", max = MAX_WEIGHT)]
    WeightOutOfRange { weight: Weight },

    #[error("unexpected trailing input starting with {0:?}")]
    TrailingInput(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("exact table over {nodes} nodes exceeds the addressable limit of {limit} nodes")]
    CapacityExceeded { nodes: usize, limit: usize },

    #[error("edges span {components} components; no closed walk covers all of them")]
    DisconnectedEdges { components: usize },

    #[error("cost exceeds the range of edge weight sums")]
    WeightOverflow,

    #[error("result violates an invariant: {0}")]
    InvalidResult(String),
}
