use crate::graph::{Node, NumNodes};

/// Disjoint-set forest over the nodes `0..n` with path compression and union by rank.
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<Node>,
    rank: Vec<u8>,
    number_of_sets: NumNodes,
}

impl UnionFind {
    /// Creates `n` singleton sets
    ///
    /// # Example
    /// ```
    /// use graph_engine::utils::UnionFind;
    /// let mut uf = UnionFind::new(4);
    /// assert_eq!(uf.number_of_sets(), 4);
    /// assert!(uf.union(0, 1));
    /// assert!(!uf.union(1, 0));
    /// assert!(uf.same_set(0, 1));
    /// assert_eq!(uf.number_of_sets(), 3);
    /// ```
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n as usize],
            number_of_sets: n,
        }
    }

    /// Returns the representative of the set containing `u`
    pub fn find(&mut self, u: Node) -> Node {
        let mut root = u;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        // path compression
        let mut u = u;
        while self.parent[u as usize] != root {
            let next = self.parent[u as usize];
            self.parent[u as usize] = root;
            u = next;
        }

        root
    }

    /// Merges the sets containing `u` and `v`. Returns false if they already were the same set,
    /// i.e. if an edge `(u, v)` would close a cycle.
    pub fn union(&mut self, u: Node, v: Node) -> bool {
        let mut ru = self.find(u);
        let mut rv = self.find(v);
        if ru == rv {
            return false;
        }

        if self.rank[ru as usize] < self.rank[rv as usize] {
            std::mem::swap(&mut ru, &mut rv);
        }
        self.parent[rv as usize] = ru;
        if self.rank[ru as usize] == self.rank[rv as usize] {
            self.rank[ru as usize] += 1;
        }

        self.number_of_sets -= 1;
        true
    }

    pub fn same_set(&mut self, u: Node, v: Node) -> bool {
        self.find(u) == self.find(v)
    }

    pub fn number_of_sets(&self) -> NumNodes {
        self.number_of_sets
    }
}
