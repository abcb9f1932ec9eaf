//! Minimum spanning tree algorithms
//!
//! Kruskal's algorithm with union-find cycle rejection and Prim's algorithm
//! with an indexed priority queue, behind a single entry point that selects
//! between them. Kruskal's relies on the cycle property (the heaviest edge
//! on a cycle is never in an MST), Prim's on the cut property (the lightest
//! edge crossing a cut always is).
//!
//! Both produce trees over undirected graphs only. A disconnected graph has
//! no spanning tree and is reported as an error, self-loops never enter the
//! tree, and result edges are in canonical orientation (`source <= target`).
//!
//! Copyright (c) 2025 GRAPHOS Project Developers

use std::collections::HashMap;

use log::{debug, trace};
use rayon::slice::ParallelSliceMut;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::algorithm::traits::{
    Algorithm, AlgorithmComplexity, AlgorithmError, AlgorithmMetrics,
};
use crate::data_structures::disjoint_set::DisjointSet;
use crate::data_structures::graph::{Edge, Graph, GraphError, GraphKind, NodeId, Weight};
use crate::data_structures::priority_queue::{IndexedPriorityQueue, PriorityQueueError};

/// Spanning-tree algorithm selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MstAlgorithm {
    /// Kruskal's algorithm with union-find cycle rejection.
    Kruskal,
    /// Prim's algorithm with an indexed priority queue.
    Prim,
    /// Selection by graph density at compute time.
    Auto,
}

impl Default for MstAlgorithm {
    fn default() -> Self {
        MstAlgorithm::Auto
    }
}

/// MST-specific errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MstError {
    #[error("graph is not connected; no spanning tree exists")]
    NotConnected,

    #[error("minimum spanning tree requires an undirected graph")]
    NotUndirected,

    #[error("graph has no nodes")]
    EmptyGraph,

    #[error("invalid spanning tree: {0}")]
    InvalidTree(String),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Queue(#[from] PriorityQueueError),
}

/// Minimum spanning tree of a connected undirected graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MstResult {
    /// Tree edges in canonical orientation, one entry per edge.
    pub edges: Vec<Edge>,
    /// Sum of the tree's edge weights.
    pub total_weight: Weight,
    /// Algorithm that produced the tree.
    pub algorithm_used: MstAlgorithm,
    pub metrics: AlgorithmMetrics,
}

impl MstResult {
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the tree contains the edge between `a` and `b` in either
    /// orientation.
    pub fn contains_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.edges
            .iter()
            .any(|e| (e.source, e.target) == (a, b) || (e.source, e.target) == (b, a))
    }
}

/// Minimum spanning tree computation with selectable algorithm.
///
/// The algorithm is chosen through the string parameter surface:
/// `"kruskal"`, `"prim"`, or `"auto"` (density heuristic).
#[derive(Debug, Clone)]
pub struct MinimumSpanningTree {
    parameters: HashMap<String, String>,
}

impl MinimumSpanningTree {
    pub fn new() -> Self {
        let mut parameters = HashMap::new();
        parameters.insert("algorithm".to_string(), "auto".to_string());
        Self { parameters }
    }

    /// Sets a parameter after validating its value.
    pub fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), AlgorithmError> {
        match name {
            "algorithm" => match value {
                "kruskal" | "prim" | "auto" => {
                    self.parameters.insert(name.to_string(), value.to_string());
                    Ok(())
                }
                _ => Err(AlgorithmError::InvalidParameter {
                    name: name.to_string(),
                    reason: format!(
                        "unknown algorithm {value:?}; valid options: kruskal, prim, auto"
                    ),
                }),
            },
            _ => Err(AlgorithmError::InvalidParameter {
                name: name.to_string(),
                reason: "valid parameters: algorithm".to_string(),
            }),
        }
    }

    pub fn get_parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(String::as_str)
    }

    /// Resolves the configured algorithm, applying the density heuristic for
    /// `auto`: small or dense graphs run Prim's, sparse graphs Kruskal's.
    fn select_algorithm(&self, graph: &Graph) -> MstAlgorithm {
        match self.get_parameter("algorithm") {
            Some("kruskal") => MstAlgorithm::Kruskal,
            Some("prim") => MstAlgorithm::Prim,
            _ => {
                let vertices = graph.node_count();
                // Stored arcs count both directions; halve for logical edges.
                let edges = graph.edge_count() / 2;
                if vertices < 10 || edges > vertices * vertices / 2 {
                    MstAlgorithm::Prim
                } else {
                    MstAlgorithm::Kruskal
                }
            }
        }
    }

    /// Computes the minimum spanning tree of `graph`.
    pub fn compute(&self, graph: &Graph) -> Result<MstResult, MstError> {
        if graph.kind() != GraphKind::Undirected {
            return Err(MstError::NotUndirected);
        }
        if graph.is_empty() {
            return Err(MstError::EmptyGraph);
        }

        let algorithm = self.select_algorithm(graph);
        let result = match algorithm {
            MstAlgorithm::Prim => self.prim(graph),
            _ => self.kruskal(graph),
        }?;

        debug!(
            "mst over {} nodes: {} edges, total weight {} ({:?})",
            graph.node_count(),
            result.edge_count(),
            result.total_weight,
            result.algorithm_used
        );
        Ok(result)
    }

    /// Candidate edges in canonical orientation: reverse arcs collapse into
    /// one entry and self-loops are dropped, since they can never be part of
    /// a spanning tree.
    fn candidate_edges(graph: &Graph) -> Vec<Edge> {
        let mut edges: Vec<Edge> = graph
            .edges()
            .filter(|e| e.source != e.target)
            .map(|e| Edge::canonical(e.source, e.target, e.weight))
            .collect();
        edges.par_sort_unstable();
        edges.dedup();
        edges
    }

    fn kruskal(&self, graph: &Graph) -> Result<MstResult, MstError> {
        let n = graph.node_count();
        let mut metrics = AlgorithmMetrics::default();
        metrics.nodes_visited = n;

        let edges = Self::candidate_edges(graph);
        let mut sets = DisjointSet::new(n);
        let mut tree = Vec::with_capacity(n.saturating_sub(1));
        let mut total_weight: Weight = 0;

        for edge in edges {
            if tree.len() == n - 1 {
                break;
            }
            metrics.steps += 1;
            metrics.edges_examined += 1;

            if sets.union(edge.source, edge.target) {
                trace!("accept {} -- {} ({})", edge.source, edge.target, edge.weight);
                total_weight += edge.weight;
                tree.push(edge);
            } else {
                trace!("reject {} -- {}: cycle", edge.source, edge.target);
            }
        }

        if tree.len() != n - 1 {
            return Err(MstError::NotConnected);
        }
        Ok(MstResult {
            edges: tree,
            total_weight,
            algorithm_used: MstAlgorithm::Kruskal,
            metrics,
        })
    }

    fn prim(&self, graph: &Graph) -> Result<MstResult, MstError> {
        let n = graph.node_count();
        let mut metrics = AlgorithmMetrics::default();

        let mut queue = IndexedPriorityQueue::new(n);
        let mut key: Vec<Option<Weight>> = vec![None; n];
        let mut parent: Vec<Option<NodeId>> = vec![None; n];
        let mut in_tree = vec![false; n];
        let mut tree = Vec::with_capacity(n.saturating_sub(1));
        let mut total_weight: Weight = 0;

        let start = NodeId(0);
        key[start.index()] = Some(0);
        queue.push(start, 0)?;

        while let Some((node, node_key)) = queue.pop() {
            in_tree[node.index()] = true;
            metrics.steps += 1;
            metrics.nodes_visited += 1;

            if let Some(p) = parent[node.index()] {
                trace!("attach {} via {} ({})", node, p, node_key);
                total_weight += node_key;
                tree.push(Edge::canonical(p, node, node_key));
            }

            for neighbor in graph.neighbors(node)? {
                metrics.edges_examined += 1;
                if in_tree[neighbor.target.index()] {
                    continue;
                }

                let improves = match key[neighbor.target.index()] {
                    None => true,
                    Some(current) => neighbor.weight < current,
                };
                if improves {
                    key[neighbor.target.index()] = Some(neighbor.weight);
                    parent[neighbor.target.index()] = Some(node);
                    queue.push(neighbor.target, neighbor.weight)?;
                }
            }
        }

        if tree.len() != n - 1 {
            return Err(MstError::NotConnected);
        }
        Ok(MstResult {
            edges: tree,
            total_weight,
            algorithm_used: MstAlgorithm::Prim,
            metrics,
        })
    }

    /// Verifies that `result` is a spanning tree of `graph`: exactly n - 1
    /// edges, no cycle, and a single connected component.
    pub fn validate(&self, graph: &Graph, result: &MstResult) -> Result<(), MstError> {
        let n = graph.node_count();
        let expected = n.saturating_sub(1);
        if result.edges.len() != expected {
            return Err(MstError::InvalidTree(format!(
                "expected {} edges, found {}",
                expected,
                result.edges.len()
            )));
        }

        let mut sets = DisjointSet::new(n);
        for edge in &result.edges {
            if !sets.union(edge.source, edge.target) {
                return Err(MstError::InvalidTree("contains a cycle".to_string()));
            }
        }
        if n > 0 && sets.set_count() != 1 {
            return Err(MstError::InvalidTree("does not span the graph".to_string()));
        }
        Ok(())
    }
}

impl Default for MinimumSpanningTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Algorithm for MinimumSpanningTree {
    fn name(&self) -> &'static str {
        "Minimum Spanning Tree"
    }

    fn category(&self) -> &'static str {
        "spanning-tree"
    }

    fn description(&self) -> &'static str {
        "Minimum spanning tree of a connected undirected graph via Kruskal's \
         algorithm (edges in ascending weight order, union-find cycle \
         rejection) or Prim's algorithm (cut-crossing edges through an \
         indexed priority queue)."
    }

    fn complexity(&self) -> AlgorithmComplexity {
        AlgorithmComplexity::new("O(E log E)", "O(V)")
    }
}
