use super::*;

/// The endpoints of an undirected edge without its weight
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Edge(pub Node, pub Node);

impl Edge {
    /// Orders the endpoints so that `(u, v)` and `(v, u)` compare equal
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }
}

/// An undirected edge `(u, v)` of weight `w`; `(u, v, w)` and `(v, u, w)` describe the same edge.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct WeightedEdge(pub Node, pub Node, pub Weight);

impl WeightedEdge {
    pub fn weight(&self) -> Weight {
        self.2
    }

    pub fn endpoints(&self) -> Edge {
        Edge(self.0, self.1)
    }
}

impl From<(Node, Node, Weight)> for WeightedEdge {
    fn from(value: (Node, Node, Weight)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}
