//! Disjoint-set union (union-find) with path compression and union by rank
//!
//! Kruskal's algorithm uses this structure to decide whether an edge would
//! close a cycle: two endpoints already in the same set means the candidate
//! edge is rejected. Both optimizations together give O(α(n)) amortized time
//! per operation, where α is the inverse Ackermann function.

use crate::data_structures::graph::NodeId;

/// Union-find over the dense node identifiers `0..n`.
///
/// Callers must only pass identifiers below the capacity given to [`new`];
/// the structure indexes directly and panics otherwise.
///
/// [`new`]: DisjointSet::new
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<usize>,
    sets: usize,
}

impl DisjointSet {
    /// Creates `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            sets: n,
        }
    }

    /// Number of elements the structure was created with.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of the set containing `x`, compressing the path to the
    /// root along the way.
    pub fn find(&mut self, x: NodeId) -> NodeId {
        NodeId(self.find_index(x.index()))
    }

    fn find_index(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find_index(self.parent[x]);
        }
        self.parent[x]
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// Returns `false` when both are already in the same set, which for
    /// Kruskal's means the edge (x, y) would create a cycle.
    pub fn union(&mut self, x: NodeId, y: NodeId) -> bool {
        let root_x = self.find_index(x.index());
        let root_y = self.find_index(y.index());

        if root_x == root_y {
            return false;
        }

        // Union by rank: attach the shallower tree under the deeper one.
        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Less => self.parent[root_x] = root_y,
            std::cmp::Ordering::Greater => self.parent[root_y] = root_x,
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }

        self.sets -= 1;
        true
    }

    /// Whether `x` and `y` are in the same set.
    pub fn connected(&mut self, x: NodeId, y: NodeId) -> bool {
        self.find_index(x.index()) == self.find_index(y.index())
    }

    /// Number of disjoint sets remaining.
    pub fn set_count(&self) -> usize {
        self.sets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_as_singletons() {
        let mut ds = DisjointSet::new(5);
        assert_eq!(ds.len(), 5);
        assert_eq!(ds.set_count(), 5);
        assert!(!ds.connected(NodeId(0), NodeId(1)));
        assert_eq!(ds.find(NodeId(3)), NodeId(3));
    }

    #[test]
    fn union_merges_and_counts_down() {
        let mut ds = DisjointSet::new(5);

        assert!(ds.union(NodeId(0), NodeId(1)));
        assert_eq!(ds.set_count(), 4);
        assert!(ds.connected(NodeId(0), NodeId(1)));

        // Joining the same pair again reports a cycle.
        assert!(!ds.union(NodeId(0), NodeId(1)));
        assert_eq!(ds.set_count(), 4);

        assert!(ds.union(NodeId(2), NodeId(3)));
        assert!(ds.union(NodeId(1), NodeId(2)));
        assert_eq!(ds.set_count(), 2);
        assert!(ds.connected(NodeId(0), NodeId(3)));
        assert!(!ds.connected(NodeId(0), NodeId(4)));
    }

    #[test]
    fn find_returns_one_representative_per_set() {
        let mut ds = DisjointSet::new(4);
        ds.union(NodeId(0), NodeId(1));
        ds.union(NodeId(2), NodeId(1));

        let root = ds.find(NodeId(0));
        assert_eq!(ds.find(NodeId(1)), root);
        assert_eq!(ds.find(NodeId(2)), root);
        assert_ne!(ds.find(NodeId(3)), root);
    }

    #[test]
    fn find_is_idempotent_after_compression() {
        let mut ds = DisjointSet::new(6);
        for i in 0..5 {
            ds.union(NodeId(i), NodeId(i + 1));
        }
        let first = ds.find(NodeId(5));
        assert_eq!(ds.find(NodeId(5)), first);
        assert_eq!(ds.set_count(), 1);
    }
}
