//! Single-source shortest paths
//!
//! Dijkstra's algorithm over non-negative edge weights, driven by the
//! indexed priority queue's decrease-key operation. The main loop keeps two
//! termination conditions in conjunction: the queue still holds frontier
//! nodes AND not every node has been settled. Unreachable nodes simply never
//! enter the queue, so their distance stays `None`.
//!
//! # Invariant
//!
//! Once a node is settled its distance is final; settle order is
//! non-decreasing in distance.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{
    Algorithm, AlgorithmComplexity, AlgorithmError, AlgorithmMetrics,
};
use crate::data_structures::graph::{Graph, NodeId, Weight};
use crate::data_structures::priority_queue::IndexedPriorityQueue;

/// Distances and shortest-path tree produced by one Dijkstra run.
///
/// A distance of `None` means no path from the source exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathResult {
    source: NodeId,
    distances: Vec<Option<Weight>>,
    predecessors: Vec<Option<NodeId>>,
    pub metrics: AlgorithmMetrics,
}

impl ShortestPathResult {
    /// Source node the distances are measured from.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Shortest distance from the source, or `None` when unreachable.
    pub fn distance(&self, node: NodeId) -> Option<Weight> {
        self.distances.get(node.index()).copied().flatten()
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distance(node).is_some()
    }

    /// Predecessor of `node` on its shortest path from the source.
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors.get(node.index()).copied().flatten()
    }

    /// Shortest path from the source to `target`, inclusive on both ends.
    /// `None` when `target` is unreachable.
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        self.distance(target)?;

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            let previous = self.predecessor(current)?;
            path.push(previous);
            current = previous;
        }
        path.reverse();
        Some(path)
    }
}

/// Dijkstra's single-source shortest paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Computes shortest distances from `source` to every node.
    ///
    /// Weights are non-negative by construction ([`Weight`] is unsigned),
    /// which is the precondition for the greedy settle order.
    pub fn run(graph: &Graph, source: NodeId) -> Result<ShortestPathResult, AlgorithmError> {
        if !graph.contains(source) {
            return Err(AlgorithmError::InvalidNode(source));
        }

        let n = graph.node_count();
        let mut distances: Vec<Option<Weight>> = vec![None; n];
        let mut predecessors: Vec<Option<NodeId>> = vec![None; n];
        let mut settled = vec![false; n];
        let mut settled_count = 0;
        let mut queue = IndexedPriorityQueue::new(n);
        let mut metrics = AlgorithmMetrics::default();

        distances[source.index()] = Some(0);
        queue.push(source, 0)?;

        // Both conditions in conjunction: frontier non-empty, nodes unsettled.
        while settled_count < n {
            let Some((node, node_distance)) = queue.pop() else {
                break;
            };
            settled[node.index()] = true;
            settled_count += 1;
            metrics.steps += 1;
            metrics.nodes_visited += 1;

            for neighbor in graph.neighbors(node)? {
                metrics.edges_examined += 1;
                if settled[neighbor.target.index()] {
                    continue;
                }

                let candidate = node_distance + neighbor.weight;
                let improves = match distances[neighbor.target.index()] {
                    None => true,
                    Some(current) => candidate < current,
                };
                if improves {
                    trace!(
                        "relax {} -> {}: distance {}",
                        node,
                        neighbor.target,
                        candidate
                    );
                    distances[neighbor.target.index()] = Some(candidate);
                    predecessors[neighbor.target.index()] = Some(node);
                    queue.push(neighbor.target, candidate)?;
                }
            }
        }

        debug!(
            "dijkstra from {} settled {} of {} nodes ({} relaxations)",
            source, settled_count, n, metrics.edges_examined
        );
        Ok(ShortestPathResult {
            source,
            distances,
            predecessors,
            metrics,
        })
    }
}

impl Algorithm for Dijkstra {
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn category(&self) -> &'static str {
        "shortest-path"
    }

    fn description(&self) -> &'static str {
        "Single-source shortest paths over non-negative edge weights. \
         Settles nodes in non-decreasing distance order using an indexed \
         priority queue with decrease-key, and records the predecessor tree \
         for path reconstruction."
    }

    fn complexity(&self) -> AlgorithmComplexity {
        AlgorithmComplexity::new("O((V + E) log V)", "O(V)")
    }
}
