use super::*;
use std::collections::VecDeque;

pub trait Connectivity {
    /// Returns for every node whether it is reachable from `start` (BFS)
    fn reachable_from(&self, start: Node) -> Vec<bool>;

    /// Returns true if all nodes lie in one connected component; graphs with at most one node
    /// are connected
    fn is_connected(&self) -> bool;

    /// Returns the number of connected components containing at least one edge
    fn number_of_edge_components(&self) -> usize;

    /// Returns true if all nodes with positive degree lie in one connected component; isolated
    /// nodes are ignored
    fn are_edges_connected(&self) -> bool {
        self.number_of_edge_components() <= 1
    }
}

impl<G> Connectivity for G
where
    G: WeightedAdjacencyList,
{
    fn reachable_from(&self, start: Node) -> Vec<bool> {
        let mut visited = vec![false; self.len()];
        mark_reachable(self, start, &mut visited);
        visited
    }

    fn is_connected(&self) -> bool {
        if self.number_of_nodes() <= 1 {
            return true;
        }
        self.reachable_from(0).into_iter().all(|x| x)
    }

    fn number_of_edge_components(&self) -> usize {
        let mut visited = vec![false; self.len()];
        let mut components = 0;
        for u in self.vertices() {
            if !visited[u as usize] && self.degree_of(u) > 0 {
                mark_reachable(self, u, &mut visited);
                components += 1;
            }
        }
        components
    }
}

/// BFS from `start` marking every node it reaches
fn mark_reachable<G: WeightedAdjacencyList>(graph: &G, start: Node, visited: &mut [bool]) {
    visited[start as usize] = true;

    let mut queue = VecDeque::from(vec![start]);
    while let Some(u) = queue.pop_front() {
        for h in graph.half_edges_of(u) {
            if !visited[h.neighbor as usize] {
                visited[h.neighbor as usize] = true;
                queue.push_back(h.neighbor);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reachability() {
        let graph = WeightedGraph::from_edges(7, [(1, 2, 1), (2, 3, 1), (4, 5, 1)]);

        let visited = graph.reachable_from(1);
        assert_eq!(visited, [false, true, true, true, false, false, false]);

        let visited = graph.reachable_from(0);
        assert_eq!(visited, [true, false, false, false, false, false, false]);

        assert!(!graph.is_connected());
        assert!(!graph.are_edges_connected());
        assert_eq!(graph.number_of_edge_components(), 2);
    }

    #[test]
    fn isolated_nodes_do_not_matter_for_edges() {
        let graph = WeightedGraph::from_edges(5, [(1, 2, 1), (2, 3, 1), (3, 3, 2)]);
        assert!(!graph.is_connected());
        assert!(graph.are_edges_connected());
        assert_eq!(graph.number_of_edge_components(), 1);
    }

    #[test]
    fn trivial_graphs() {
        assert!(WeightedGraph::from_edges(0, Vec::<WeightedEdge>::new()).is_connected());
        assert!(WeightedGraph::from_edges(1, Vec::<WeightedEdge>::new()).is_connected());
        assert!(!WeightedGraph::from_edges(2, Vec::<WeightedEdge>::new()).is_connected());
        let empty = WeightedGraph::from_edges(3, Vec::<WeightedEdge>::new());
        assert!(empty.are_edges_connected());
        assert_eq!(empty.number_of_edge_components(), 0);
    }
}
