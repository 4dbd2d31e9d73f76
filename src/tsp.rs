//! Exact travelling salesman tours via the Held-Karp dynamic program.
//!
//! Only edges present in the input count: two nodes are adjacent in a tour iff an edge joins
//! them directly (the cheapest one if there are parallel edges). No metric closure is taken.
//!
//! # Capacity
//! The table holds `2^n * n` entries of cost and predecessor, i.e. memory grows as
//! `O(2^n * n)` and time as `O(2^n * n^2)`. This is a hard limit of the method; around 20 nodes
//! is the practical ceiling. Sizes whose table cannot even be addressed are rejected with
//! [`SolverError::CapacityExceeded`].

use crate::{errors::*, graph::*};
use itertools::Itertools;
use log::debug;

const UNREACHED: Weight = Weight::MAX;
const NO_PREDECESSOR: Node = Node::MAX;

/// Largest number of nodes for which the subset table can be addressed
pub const MAX_TSP_NODES: usize = usize::BITS as usize - 2;

/// A closed tour `start, ..., start` visiting every node exactly once
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tour {
    cost: Weight,
    nodes: Vec<Node>,
}

impl Tour {
    pub fn cost(&self) -> Weight {
        self.cost
    }

    /// The visiting order; first and last node coincide unless the graph has a single node
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
}

impl<G: WeightedAdjacencyList> InvariantCheck<G, SolverError> for Tour {
    fn is_correct(&self, graph: &G) -> Result<(), SolverError> {
        let invalid = |msg: String| Err(SolverError::InvalidResult(msg));
        let n = graph.len();

        let expected_len = if n == 1 { 1 } else { n + 1 };
        if self.nodes.len() != expected_len {
            return invalid(format!(
                "tour of length {} for {n} nodes",
                self.nodes.len()
            ));
        }

        if self.nodes.first() != self.nodes.last() {
            return invalid("tour is not closed".into());
        }

        let visited = self.nodes[..n].iter().copied().sorted().collect_vec();
        if visited != graph.vertices().collect_vec() {
            return invalid("tour is not a permutation of all nodes".into());
        }

        let mut cost = 0;
        for (&u, &v) in self.nodes.iter().tuple_windows() {
            match graph.direct_weight(u, v) {
                Some(w) if u != v => cost += w,
                _ => return invalid(format!("no edge between {u} and {v}")),
            }
        }

        if cost != self.cost {
            return invalid(format!(
                "tour cost {} differs from edge sum {cost}",
                self.cost
            ));
        }

        Ok(())
    }
}

/// Arena of the DP states `(visited subset, last node)`, indexed by `mask * n + last`.
struct DpTable {
    n: usize,
    cost: Vec<Weight>,
    predecessor: Vec<Node>,
}

impl DpTable {
    fn new(n: usize) -> Result<Self, SolverError> {
        let size = (1usize << n)
            .checked_mul(n)
            .ok_or(SolverError::CapacityExceeded {
                nodes: n,
                limit: MAX_TSP_NODES,
            })?;

        debug!("Held-Karp table with {size} states");

        Ok(Self {
            n,
            cost: vec![UNREACHED; size],
            predecessor: vec![NO_PREDECESSOR; size],
        })
    }

    #[inline]
    fn index(&self, mask: usize, last: usize) -> usize {
        mask * self.n + last
    }
}

/// Computes a minimum cost closed tour through all nodes that starts and ends at `start`.
///
/// Returns `Ok(None)` if no such tour exists using direct edges only. A graph with a single
/// node has the trivial tour `[start]` of cost 0; with two nodes the tour uses their edge
/// twice.
///
/// ** Panics if start >= n **
///
/// # Example
/// ```
/// use graph_engine::{graph::*, tsp::held_karp};
/// let graph = WeightedGraph::from_edges(3, [(0, 1, 1), (1, 2, 1), (0, 2, 1)]);
/// let tour = held_karp(&graph, 0).unwrap().unwrap();
/// assert_eq!(tour.cost(), 3);
/// assert_eq!(tour.nodes(), &[0, 1, 2, 0]);
/// ```
pub fn held_karp<G: WeightedAdjacencyList>(
    graph: &G,
    start: Node,
) -> Result<Option<Tour>, SolverError> {
    let n = graph.len();
    assert!((start as usize) < n);

    if n == 1 {
        return Ok(Some(Tour {
            cost: 0,
            nodes: vec![start],
        }));
    }

    if n > MAX_TSP_NODES {
        return Err(SolverError::CapacityExceeded {
            nodes: n,
            limit: MAX_TSP_NODES,
        });
    }

    if !graph.is_connected() {
        debug!("graph is disconnected; no tour");
        return Ok(None);
    }

    // adjacency matrix of cheapest direct edges; self-loops never help a tour
    let mut weight: Vec<Option<Weight>> = vec![None; n * n];
    for u in graph.vertices() {
        for h in graph.half_edges_of(u) {
            if h.neighbor == u {
                continue;
            }
            let entry = &mut weight[u as usize * n + h.neighbor as usize];
            *entry = Some(entry.map_or(h.weight, |w| w.min(h.weight)));
        }
    }

    let start = start as usize;
    let start_bit = 1usize << start;
    let full = (1usize << n) - 1;

    let mut table = DpTable::new(n)?;
    let idx = table.index(start_bit, start);
    table.cost[idx] = 0;

    for mask in (0..=full).filter(|mask| mask & start_bit != 0) {
        for u in 0..n {
            if mask & (1 << u) == 0 {
                continue;
            }

            let current = table.cost[table.index(mask, u)];
            if current == UNREACHED {
                continue;
            }

            for v in 0..n {
                if mask & (1 << v) != 0 {
                    continue;
                }
                let Some(w) = weight[u * n + v] else {
                    continue;
                };

                let next = table.index(mask | (1 << v), v);
                // at most n edges of weight <= MAX_WEIGHT; no overflow
                let candidate = current + w;
                if candidate < table.cost[next] {
                    table.cost[next] = candidate;
                    table.predecessor[next] = u as Node;
                }
            }
        }
    }

    let mut best: Option<(Weight, usize)> = None;
    for last in (0..n).filter(|&v| v != start) {
        let reached = table.cost[table.index(full, last)];
        let Some(w) = weight[last * n + start] else {
            continue;
        };
        if reached == UNREACHED {
            continue;
        }

        // ties go to the largest closing node
        let total = reached + w;
        if best.is_none_or(|(cost, _)| total <= cost) {
            best = Some((total, last));
        }
    }

    let Some((cost, last)) = best else {
        debug!("no Hamiltonian cycle through the direct edges");
        return Ok(None);
    };

    let mut nodes = Vec::with_capacity(n + 1);
    nodes.push(start as Node);
    let mut mask = full;
    let mut current = last;
    while current != start {
        nodes.push(current as Node);
        let prev = table.predecessor[table.index(mask, current)];
        mask &= !(1 << current);
        current = prev as usize;
    }
    nodes.push(start as Node);
    nodes.reverse();

    Ok(Some(Tour { cost, nodes }))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn triangle() {
        let graph = WeightedGraph::from_edges(3, [(0, 1, 1), (1, 2, 1), (0, 2, 1)]);
        for start in 0..3 {
            let tour = held_karp(&graph, start).unwrap().unwrap();
            assert_eq!(tour.cost(), 3);
            assert_eq!(tour.nodes()[0], start);
            tour.is_correct(&graph).unwrap();
        }
    }

    #[test]
    fn missing_edges() {
        // 3 is a leaf, so no Hamiltonian cycle exists
        let graph = WeightedGraph::from_edges(4, [(0, 1, 4), (1, 2, 1), (0, 2, 2), (2, 3, 5)]);
        assert!(held_karp(&graph, 0).unwrap().is_none());
    }

    #[test]
    fn disconnected() {
        let graph = WeightedGraph::from_edges(4, [(0, 1, 1), (2, 3, 1)]);
        assert!(held_karp(&graph, 2).unwrap().is_none());
    }

    #[test]
    fn trivial_sizes() {
        let graph = WeightedGraph::from_edges(1, [(0, 0, 3)]);
        let tour = held_karp(&graph, 0).unwrap().unwrap();
        assert_eq!(tour.cost(), 0);
        assert_eq!(tour.nodes(), [0]);
        tour.is_correct(&graph).unwrap();

        let graph = WeightedGraph::from_edges(2, [(0, 1, 3), (1, 0, 2)]);
        let tour = held_karp(&graph, 1).unwrap().unwrap();
        assert_eq!(tour.cost(), 4);
        assert_eq!(tour.nodes(), [1, 0, 1]);
        tour.is_correct(&graph).unwrap();

        let graph = WeightedGraph::from_edges(2, Vec::<WeightedEdge>::new());
        assert!(held_karp(&graph, 0).unwrap().is_none());
    }

    #[test]
    fn picks_cheapest_cycle() {
        // square with expensive diagonals
        let graph = WeightedGraph::from_edges(
            4,
            [(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 0, 1), (0, 2, 10), (1, 3, 10)],
        );
        let tour = held_karp(&graph, 0).unwrap().unwrap();
        assert_eq!(tour.cost(), 4);
        assert_eq!(tour.nodes(), [0, 1, 2, 3, 0]);
    }

    #[test]
    fn largest_weights() {
        let graph = WeightedGraph::from_edges(
            4,
            [
                (0, 1, MAX_WEIGHT),
                (1, 2, MAX_WEIGHT),
                (2, 3, MAX_WEIGHT - 1),
                (3, 0, MAX_WEIGHT),
                (0, 2, 1),
            ],
        );
        let tour = held_karp(&graph, 0).unwrap().unwrap();
        assert_eq!(tour.cost(), 4 * MAX_WEIGHT - 1);
        tour.is_correct(&graph).unwrap();
    }

    #[test]
    fn capacity() {
        let n = (MAX_TSP_NODES + 1) as Node;
        let graph = WeightedGraph::from_edges(n, (1..n).map(|v| (0, v, 1)));
        assert!(matches!(
            held_karp(&graph, 0),
            Err(SolverError::CapacityExceeded { .. })
        ));
    }

    #[test]
    fn matches_brute_force() {
        let mut rng = Pcg64::seed_from_u64(0x75b);
        for graph in random_graphs(&mut rng, 1..8).take(300) {
            let start = (graph.number_of_nodes() - 1) / 2;
            let expected = brute_force_tour_cost(&graph, start);
            let tour = held_karp(&graph, start).unwrap();

            assert_eq!(tour.as_ref().map(|t| t.cost()), expected);
            if let Some(tour) = tour {
                tour.is_correct(&graph).unwrap();
                assert_eq!(tour.nodes()[0], start);
            }
        }
    }
}
