//! Random instances and exhaustive reference solvers for small graphs.

use crate::{graph::*, utils::UnionFind};
use itertools::Itertools;
use rand::Rng;
use std::ops::Range;

/// Endless stream of random multigraphs with a node count drawn from `nodes` and weights in
/// `1..=10`. Every third graph receives an extra parallel edge, every fifth a self-loop.
pub fn random_graphs<R: Rng>(
    rng: &mut R,
    nodes: Range<Node>,
) -> impl Iterator<Item = WeightedGraph> + '_ {
    (0u32..).map(move |i| {
        let n = rng.gen_range(nodes.clone());
        let p = rng.gen_range(0.2..0.9);
        let mut edges = WeightedGraph::random_gnp(&mut *rng, n, p, 1..=10)
            .edges()
            .to_vec();

        if i % 3 == 0 {
            if let Some(&WeightedEdge(u, v, _)) = edges.first() {
                edges.push(WeightedEdge(v, u, rng.gen_range(1..=10)));
            }
        }

        if i % 5 == 0 && n > 0 {
            let u = rng.gen_range(0..n);
            edges.push(WeightedEdge(u, u, rng.gen_range(1..=10)));
        }

        WeightedGraph::from_edges(n, edges)
    })
}

/// Minimum weight over all simple paths from `s` to `t`
pub fn brute_force_shortest_distance(graph: &WeightedGraph, s: Node, t: Node) -> Option<Weight> {
    fn dfs(
        graph: &WeightedGraph,
        u: Node,
        t: Node,
        visited: &mut [bool],
        dist: Weight,
        best: &mut Option<Weight>,
    ) {
        if u == t {
            *best = Some(best.map_or(dist, |b| b.min(dist)));
            return;
        }

        for v in graph.vertices() {
            if visited[v as usize] || v == u {
                continue;
            }
            if let Some(w) = graph.direct_weight(u, v) {
                visited[v as usize] = true;
                dfs(graph, v, t, visited, dist + w, best);
                visited[v as usize] = false;
            }
        }
    }

    let mut visited = vec![false; graph.len()];
    visited[s as usize] = true;
    let mut best = None;
    dfs(graph, s, t, &mut visited, 0, &mut best);
    best
}

/// Minimum and maximum weight over all spanning forests, by enumerating all edge subsets of
/// the right size
pub fn brute_force_spanning_forest_weights(graph: &WeightedGraph) -> (Weight, Weight) {
    let mut uf = UnionFind::new(graph.number_of_nodes());
    for e in graph.edges() {
        uf.union(e.0, e.1);
    }
    let forest_size = (graph.number_of_nodes() - uf.number_of_sets()) as usize;

    let weights = graph
        .edges()
        .iter()
        .combinations(forest_size)
        .filter(|subset| {
            let mut uf = UnionFind::new(graph.number_of_nodes());
            subset.iter().all(|e| uf.union(e.0, e.1))
        })
        .map(|subset| subset.iter().map(|e| e.weight()).sum::<Weight>())
        .collect_vec();

    (
        *weights.iter().min().unwrap(),
        *weights.iter().max().unwrap(),
    )
}

/// Route inspection cost as total edge weight plus the cheapest pairing of odd nodes under
/// Floyd-Warshall distances. Assumes the edges form a single component.
pub fn brute_force_postman_cost(graph: &WeightedGraph) -> Weight {
    let n = graph.len();
    let mut dist = vec![vec![None; n]; n];
    for u in 0..n {
        dist[u][u] = Some(0);
    }
    for e in graph.edges() {
        let (u, v) = (e.0 as usize, e.1 as usize);
        let w = dist[u][v].map_or(e.weight(), |d: Weight| d.min(e.weight()));
        dist[u][v] = Some(w);
        dist[v][u] = Some(w);
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(a), Some(b)) = (dist[i][k], dist[k][j]) {
                    if dist[i][j].is_none_or(|d| a + b < d) {
                        dist[i][j] = Some(a + b);
                    }
                }
            }
        }
    }

    fn best_pairing(rest: &[usize], dist: &[Vec<Option<Weight>>]) -> Weight {
        let Some((&first, rest)) = rest.split_first() else {
            return 0;
        };
        (0..rest.len())
            .map(|i| {
                let remaining = rest
                    .iter()
                    .enumerate()
                    .filter_map(|(j, &x)| (j != i).then_some(x))
                    .collect_vec();
                dist[first][rest[i]].unwrap() + best_pairing(&remaining, dist)
            })
            .min()
            .unwrap()
    }

    let odd = graph
        .vertices()
        .filter(|&u| graph.degree_of(u) % 2 == 1)
        .map(|u| u as usize)
        .collect_vec();

    graph.total_weight() + best_pairing(&odd, &dist)
}

/// Minimum cost over all permutations of the nodes that start and end at `start` and only use
/// direct edges
pub fn brute_force_tour_cost(graph: &WeightedGraph, start: Node) -> Option<Weight> {
    if graph.number_of_nodes() == 1 {
        return Some(0);
    }

    let others = graph.vertices().filter(|&u| u != start).collect_vec();
    others
        .iter()
        .copied()
        .permutations(others.len())
        .filter_map(|perm| {
            std::iter::once(start)
                .chain(perm)
                .chain(std::iter::once(start))
                .tuple_windows()
                .map(|(u, v)| graph.direct_weight(u, v))
                .sum::<Option<Weight>>()
        })
        .min()
}
