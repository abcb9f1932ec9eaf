//! Graph traversal algorithms
//!
//! Depth-first search is implemented recursively and visits neighbors in
//! adjacency-list order, so the visit sequence is fully determined by edge
//! insertion order. Breadth-first search shares the same contract with a
//! queue-driven frontier. Both terminate on cyclic input through a visited
//! set and leave the graph untouched.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{
    Algorithm, AlgorithmComplexity, AlgorithmError, AlgorithmMetrics,
};
use crate::data_structures::graph::{Graph, NodeId};

/// Visit order produced by a traversal together with its metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalResult {
    pub order: Vec<NodeId>,
    pub metrics: AlgorithmMetrics,
}

/// Recursive depth-first search.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirstSearch;

impl DepthFirstSearch {
    /// Visits every node reachable from `start` in depth-first order.
    ///
    /// Neighbors are explored in the order presented by the adjacency list.
    /// Nodes unreachable from `start` do not appear in the result.
    pub fn run(graph: &Graph, start: NodeId) -> Result<TraversalResult, AlgorithmError> {
        if !graph.contains(start) {
            return Err(AlgorithmError::InvalidNode(start));
        }

        let mut visited = vec![false; graph.node_count()];
        let mut order = Vec::new();
        let mut metrics = AlgorithmMetrics::default();

        Self::visit(graph, start, &mut visited, &mut order, &mut metrics)?;

        debug!(
            "dfs from {} visited {} of {} nodes",
            start,
            order.len(),
            graph.node_count()
        );
        Ok(TraversalResult { order, metrics })
    }

    fn visit(
        graph: &Graph,
        node: NodeId,
        visited: &mut [bool],
        order: &mut Vec<NodeId>,
        metrics: &mut AlgorithmMetrics,
    ) -> Result<(), AlgorithmError> {
        visited[node.index()] = true;
        order.push(node);
        metrics.steps += 1;
        metrics.nodes_visited += 1;

        for neighbor in graph.neighbors(node)? {
            metrics.edges_examined += 1;
            if !visited[neighbor.target.index()] {
                Self::visit(graph, neighbor.target, visited, order, metrics)?;
            }
        }
        Ok(())
    }
}

impl Algorithm for DepthFirstSearch {
    fn name(&self) -> &'static str {
        "Depth-First Search"
    }

    fn category(&self) -> &'static str {
        "traversal"
    }

    fn description(&self) -> &'static str {
        "Recursive depth-first traversal that explores each branch of the \
         adjacency list to exhaustion before backtracking, producing the \
         visit order of all nodes reachable from the start."
    }

    fn complexity(&self) -> AlgorithmComplexity {
        AlgorithmComplexity::new("O(V + E)", "O(V)")
    }
}

/// Queue-driven breadth-first search.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirstSearch;

impl BreadthFirstSearch {
    /// Visits every node reachable from `start` in breadth-first order.
    pub fn run(graph: &Graph, start: NodeId) -> Result<TraversalResult, AlgorithmError> {
        if !graph.contains(start) {
            return Err(AlgorithmError::InvalidNode(start));
        }

        let mut visited = vec![false; graph.node_count()];
        let mut order = Vec::new();
        let mut metrics = AlgorithmMetrics::default();
        let mut frontier = std::collections::VecDeque::new();

        visited[start.index()] = true;
        frontier.push_back(start);

        while let Some(node) = frontier.pop_front() {
            order.push(node);
            metrics.steps += 1;
            metrics.nodes_visited += 1;

            for neighbor in graph.neighbors(node)? {
                metrics.edges_examined += 1;
                if !visited[neighbor.target.index()] {
                    visited[neighbor.target.index()] = true;
                    frontier.push_back(neighbor.target);
                }
            }
        }

        debug!(
            "bfs from {} visited {} of {} nodes",
            start,
            order.len(),
            graph.node_count()
        );
        Ok(TraversalResult { order, metrics })
    }
}

impl Algorithm for BreadthFirstSearch {
    fn name(&self) -> &'static str {
        "Breadth-First Search"
    }

    fn category(&self) -> &'static str {
        "traversal"
    }

    fn description(&self) -> &'static str {
        "Frontier-by-frontier traversal that visits all nodes at distance k \
         before any node at distance k + 1, producing the visit order of all \
         nodes reachable from the start."
    }

    fn complexity(&self) -> AlgorithmComplexity {
        AlgorithmComplexity::new("O(V + E)", "O(V)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::graph::GraphKind;

    fn diamond() -> (Graph, Vec<NodeId>) {
        // 0 -> 1 -> 3, 0 -> 2 -> 3
        let mut graph = Graph::new(GraphKind::Directed);
        let ids = graph.add_nodes(4);
        graph.add_edge(ids[0], ids[1], 1).unwrap();
        graph.add_edge(ids[0], ids[2], 1).unwrap();
        graph.add_edge(ids[1], ids[3], 1).unwrap();
        graph.add_edge(ids[2], ids[3], 1).unwrap();
        (graph, ids)
    }

    #[test]
    fn dfs_follows_adjacency_order() {
        let (graph, ids) = diamond();
        let result = DepthFirstSearch::run(&graph, ids[0]).unwrap();
        assert_eq!(result.order, vec![ids[0], ids[1], ids[3], ids[2]]);
        assert_eq!(result.metrics.nodes_visited, 4);
    }

    #[test]
    fn bfs_visits_frontier_by_frontier() {
        let (graph, ids) = diamond();
        let result = BreadthFirstSearch::run(&graph, ids[0]).unwrap();
        assert_eq!(result.order, vec![ids[0], ids[1], ids[2], ids[3]]);
    }

    #[test]
    fn traversal_rejects_missing_start() {
        let (graph, _) = diamond();
        assert_eq!(
            DepthFirstSearch::run(&graph, NodeId(99)),
            Err(AlgorithmError::InvalidNode(NodeId(99)))
        );
        assert_eq!(
            BreadthFirstSearch::run(&graph, NodeId(99)),
            Err(AlgorithmError::InvalidNode(NodeId(99)))
        );
    }

    #[test]
    fn dfs_terminates_on_cycles() {
        let mut graph = Graph::new(GraphKind::Directed);
        let ids = graph.add_nodes(3);
        graph.add_edge(ids[0], ids[1], 1).unwrap();
        graph.add_edge(ids[1], ids[2], 1).unwrap();
        graph.add_edge(ids[2], ids[0], 1).unwrap();

        let result = DepthFirstSearch::run(&graph, ids[0]).unwrap();
        assert_eq!(result.order, vec![ids[0], ids[1], ids[2]]);
    }

    #[test]
    fn unreachable_nodes_are_absent() {
        let mut graph = Graph::new(GraphKind::Directed);
        let ids = graph.add_nodes(3);
        graph.add_edge(ids[0], ids[1], 1).unwrap();

        let result = DepthFirstSearch::run(&graph, ids[0]).unwrap();
        assert_eq!(result.order, vec![ids[0], ids[1]]);

        let lonely = DepthFirstSearch::run(&graph, ids[2]).unwrap();
        assert_eq!(lonely.order, vec![ids[2]]);
    }

    #[test]
    fn trait_surface_describes_the_algorithms() {
        assert_eq!(DepthFirstSearch.name(), "Depth-First Search");
        assert_eq!(DepthFirstSearch.category(), "traversal");
        assert_eq!(BreadthFirstSearch.complexity().time, "O(V + E)");
    }
}
