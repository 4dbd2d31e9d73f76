pub mod connectivity;
pub mod edge;
pub mod gnp;
pub mod weighted_graph;

pub type Node = u32;
pub type NumNodes = Node;
pub type EdgeId = u32;
pub type NumEdges = EdgeId;
pub type Weight = u64;

/// Largest admissible edge weight. Any sum of at most `2^32` weights stays below `Weight::MAX`,
/// which covers edge totals, spanning forests, simple paths and tours.
pub const MAX_WEIGHT: Weight = u32::MAX as Weight;

use std::ops::Range;

pub use connectivity::*;
pub use edge::*;
pub use gnp::*;
pub use weighted_graph::*;

/// Provides getters pertaining to the size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns true if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph; parallel edges are counted individually
    fn number_of_edges(&self) -> NumEdges;
}

#[macro_export]
macro_rules! node_iterator {
    ($iter : ident, $single : ident, $type : ty) => {
        fn $iter(&self) -> impl Iterator<Item = $type> + '_ {
            self.vertices().map(|u| self.$single(u))
        }
    };
}

/// One endpoint's view of an undirected edge: the node at the other end, the edge's weight and
/// the id of the edge in the input edge list.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct HalfEdge {
    pub neighbor: Node,
    pub weight: Weight,
    pub edge: EdgeId,
}

pub trait WeightedAdjacencyList: GraphNodeOrder + GraphEdgeOrder + Sized {
    /// Returns all half edges leaving `u`. A self-loop at `u` appears twice.
    /// ** Panics if the u >= n **
    fn half_edges_of(&self, u: Node) -> &[HalfEdge];

    /// Returns the edge with identifier `id`
    /// ** Panics if the id >= m **
    fn edge(&self, id: EdgeId) -> WeightedEdge;

    /// Returns the number of edge endpoints at [`u`]; self-loops count twice
    fn degree_of(&self, u: Node) -> NumNodes {
        self.half_edges_of(u).len() as NumNodes
    }

    node_iterator!(degrees, degree_of, NumNodes);

    /// Returns the smallest weight among all edges connecting `u` and `v`, if any
    fn direct_weight(&self, u: Node, v: Node) -> Option<Weight> {
        self.half_edges_of(u)
            .iter()
            .filter(|h| h.neighbor == v)
            .map(|h| h.weight)
            .min()
    }
}
