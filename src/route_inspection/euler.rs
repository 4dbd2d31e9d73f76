use crate::graph::*;

/// Undirected multigraph whose edges are copies of input edges; built up edge by edge
/// and then traversed once by [`EulerianMultigraph::eulerian_circuit`].
#[derive(Clone, Debug)]
pub struct EulerianMultigraph {
    edges: Vec<(Node, Node, EdgeId)>,
    incidence: Vec<Vec<usize>>,
}

/// A closed walk as node sequence plus the ids of the input edges it traverses
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Circuit {
    pub nodes: Vec<Node>,
    pub edges: Vec<EdgeId>,
}

impl EulerianMultigraph {
    pub fn new(n: NumNodes) -> Self {
        Self {
            edges: Vec::new(),
            incidence: vec![Vec::new(); n as usize],
        }
    }

    /// Adds a copy of input edge `id` connecting `u` and `v`
    pub fn add_edge(&mut self, u: Node, v: Node, id: EdgeId) {
        let idx = self.edges.len();
        self.edges.push((u, v, id));
        self.incidence[u as usize].push(idx);
        self.incidence[v as usize].push(idx);
    }

    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    /// Number of edge endpoints at `u`; self-loops count twice
    pub fn degree_of(&self, u: Node) -> usize {
        self.incidence[u as usize].len()
    }

    pub fn all_degrees_even(&self) -> bool {
        self.incidence.iter().all(|inc| inc.len() % 2 == 0)
    }

    /// Hierholzer's algorithm with an explicit stack: follow unused edges until stuck, then
    /// back off and emit nodes, which splices detours into the circuit.
    ///
    /// Requires all degrees to be even and all edges to be reachable from `start`; then every
    /// edge is used exactly once and the walk starts and ends at `start`. Edges are taken in
    /// insertion order at each node.
    pub fn eulerian_circuit(&self, start: Node) -> Circuit {
        debug_assert!(self.all_degrees_even());

        let mut used = vec![false; self.edges.len()];
        let mut cursor = vec![0usize; self.incidence.len()];

        let mut stack: Vec<(Node, Option<EdgeId>)> = vec![(start, None)];
        let mut reversed: Vec<(Node, Option<EdgeId>)> = Vec::with_capacity(self.edges.len() + 1);

        while let Some(&(u, _)) = stack.last() {
            let incident = &self.incidence[u as usize];
            let pos = &mut cursor[u as usize];
            while *pos < incident.len() && used[incident[*pos]] {
                *pos += 1;
            }

            if *pos == incident.len() {
                reversed.extend(stack.pop());
                continue;
            }

            let idx = incident[*pos];
            used[idx] = true;
            let (a, b, id) = self.edges[idx];
            let v = if a == u { b } else { a };
            stack.push((v, Some(id)));
        }

        // after reversing, the edge stored with an element joins it to its predecessor
        reversed.reverse();
        Circuit {
            nodes: reversed.iter().map(|&(u, _)| u).collect(),
            edges: reversed.iter().filter_map(|&(_, id)| id).collect(),
        }
    }
}
