//! Adjacency-list graph representation
//!
//! This module implements the graph storage every algorithm in the crate
//! consumes: a dense, insertion-ordered adjacency list. Node identifiers are
//! handed out sequentially, neighbor lists preserve edge-insertion order, and
//! undirected graphs store the reverse arc alongside every inserted edge.
//!
//! # Ordering Guarantee
//!
//! Traversal results depend on the order in which neighbors are visited, so
//! `neighbors` returns arcs in exactly the order their edges were inserted.
//! Tests rely on this guarantee and it is part of the public contract.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Non-negative edge weight.
///
/// Dijkstra's precondition (no negative weights) is carried by the type.
pub type Weight = u64;

/// Node identifier ensuring type safety and preventing mixing with other
/// numeric types.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// thiserror treats the `source`-named field of `GraphError::AsymmetricArc` as
// the error source, which requires `NodeId: std::error::Error`. Provide the
// impl the generated code relies on; it changes no graph logic.
impl std::error::Error for NodeId {}

/// Edge orientation chosen at construction time.
///
/// Undirected graphs store both arcs for every inserted edge, the same way
/// they present themselves to traversal and shortest-path code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraphKind {
    Directed,
    Undirected,
}

/// Outgoing arc entry in an adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbor {
    pub target: NodeId,
    pub weight: Weight,
}

/// Weighted edge value used by edge listing and spanning-tree results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: NodeId, target: NodeId, weight: Weight) -> Self {
        Self { source, target, weight }
    }

    /// Canonical orientation (`source <= target`) for undirected edges.
    pub fn canonical(source: NodeId, target: NodeId, weight: Weight) -> Self {
        if source <= target {
            Self { source, target, weight }
        } else {
            Self { source: target, target: source, weight }
        }
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Weight first; endpoints break ties so edge sorts are deterministic.
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Errors raised by graph construction and lookup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("node {0} does not exist in the graph")]
    NodeNotFound(NodeId),

    #[error("undirected graph stores asymmetric arcs between {source} and {target}")]
    AsymmetricArc { source: NodeId, target: NodeId },
}

/// Weighted graph backed by insertion-ordered adjacency lists.
#[derive(Debug, Clone)]
pub struct Graph {
    kind: GraphKind,
    adjacency: Vec<Vec<Neighbor>>,
    arc_count: usize,
}

impl Graph {
    /// Creates an empty graph of the given orientation.
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            adjacency: Vec::new(),
            arc_count: 0,
        }
    }

    /// Creates an empty graph with room for `nodes` adjacency lists.
    pub fn with_capacity(kind: GraphKind, nodes: usize) -> Self {
        Self {
            kind,
            adjacency: Vec::with_capacity(nodes),
            arc_count: 0,
        }
    }

    #[inline]
    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of stored arcs. An undirected edge contributes two arcs
    /// (one for a self-loop).
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.arc_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.adjacency.len()
    }

    /// Adds a node and returns its dense, sequentially assigned identifier.
    pub fn add_node(&mut self) -> NodeId {
        let id = NodeId(self.adjacency.len());
        self.adjacency.push(Vec::new());
        id
    }

    /// Adds `count` nodes and returns their identifiers in assignment order.
    pub fn add_nodes(&mut self, count: usize) -> Vec<NodeId> {
        (0..count).map(|_| self.add_node()).collect()
    }

    /// Inserts a weighted edge after validating both endpoints.
    ///
    /// Undirected graphs also store the reverse arc, except for self-loops
    /// which are stored once.
    pub fn add_edge(
        &mut self,
        source: NodeId,
        target: NodeId,
        weight: Weight,
    ) -> Result<(), GraphError> {
        if !self.contains(source) {
            return Err(GraphError::NodeNotFound(source));
        }
        if !self.contains(target) {
            return Err(GraphError::NodeNotFound(target));
        }

        self.adjacency[source.index()].push(Neighbor { target, weight });
        self.arc_count += 1;

        if self.kind == GraphKind::Undirected && source != target {
            self.adjacency[target.index()].push(Neighbor { target: source, weight });
            self.arc_count += 1;
        }
        Ok(())
    }

    /// Outgoing arcs of `node` in edge-insertion order.
    pub fn neighbors(&self, node: NodeId) -> Result<&[Neighbor], GraphError> {
        self.adjacency
            .get(node.index())
            .map(Vec::as_slice)
            .ok_or(GraphError::NodeNotFound(node))
    }

    /// All node identifiers in assignment order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.adjacency.len()).map(NodeId)
    }

    /// All stored arcs as edges. For undirected graphs each inserted edge
    /// surfaces once per stored direction.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(source, arcs)| {
            arcs.iter()
                .map(move |n| Edge::new(NodeId(source), n.target, n.weight))
        })
    }

    /// Structural integrity check: every arc target is a known node and,
    /// for undirected graphs, the arc multiset is symmetric.
    pub fn validate(&self) -> Result<(), GraphError> {
        for arcs in &self.adjacency {
            for n in arcs {
                if !self.contains(n.target) {
                    return Err(GraphError::NodeNotFound(n.target));
                }
            }
        }

        if self.kind == GraphKind::Undirected {
            let mut balance: HashMap<(usize, usize, Weight), i64> = HashMap::new();
            for edge in self.edges() {
                if edge.source == edge.target {
                    continue;
                }
                let lo = edge.source.index().min(edge.target.index());
                let hi = edge.source.index().max(edge.target.index());
                let delta = if edge.source.index() == lo { 1 } else { -1 };
                *balance.entry((lo, hi, edge.weight)).or_insert(0) += delta;
            }
            for ((lo, hi, _), count) in balance {
                if count != 0 {
                    return Err(GraphError::AsymmetricArc {
                        source: NodeId(lo),
                        target: NodeId(hi),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nodes_get_dense_sequential_ids() {
        let mut graph = Graph::new(GraphKind::Directed);
        assert_eq!(graph.add_node(), NodeId(0));
        assert_eq!(graph.add_node(), NodeId(1));
        assert_eq!(graph.add_node(), NodeId(2));
        assert_eq!(graph.node_count(), 3);
        assert!(graph.contains(NodeId(2)));
        assert!(!graph.contains(NodeId(3)));
        assert_eq!(
            graph.node_ids().collect::<Vec<NodeId>>(),
            vec![NodeId(0), NodeId(1), NodeId(2)]
        );
    }

    #[test]
    fn neighbors_preserve_insertion_order() {
        let mut graph = Graph::new(GraphKind::Directed);
        let ids = graph.add_nodes(4);
        graph.add_edge(ids[0], ids[2], 7).unwrap();
        graph.add_edge(ids[0], ids[1], 3).unwrap();
        graph.add_edge(ids[0], ids[3], 5).unwrap();

        let targets: Vec<NodeId> = graph
            .neighbors(ids[0])
            .unwrap()
            .iter()
            .map(|n| n.target)
            .collect();
        assert_eq!(targets, vec![ids[2], ids[1], ids[3]]);
    }

    #[test]
    fn undirected_insertion_stores_reverse_arc() {
        let mut graph = Graph::new(GraphKind::Undirected);
        let ids = graph.add_nodes(2);
        graph.add_edge(ids[0], ids[1], 4).unwrap();

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.neighbors(ids[1]).unwrap()[0].target, ids[0]);
        assert_eq!(graph.neighbors(ids[1]).unwrap()[0].weight, 4);
        assert!(graph.validate().is_ok());
    }

    #[test]
    fn undirected_self_loop_stored_once() {
        let mut graph = Graph::new(GraphKind::Undirected);
        let ids = graph.add_nodes(1);
        graph.add_edge(ids[0], ids[0], 9).unwrap();

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.neighbors(ids[0]).unwrap().len(), 1);
        assert!(graph.validate().is_ok());
    }

    #[test]
    fn add_edge_rejects_unknown_endpoints() {
        let mut graph = Graph::new(GraphKind::Directed);
        let ids = graph.add_nodes(1);

        assert_eq!(
            graph.add_edge(ids[0], NodeId(5), 1),
            Err(GraphError::NodeNotFound(NodeId(5)))
        );
        assert_eq!(
            graph.add_edge(NodeId(5), ids[0], 1),
            Err(GraphError::NodeNotFound(NodeId(5)))
        );
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn neighbors_of_missing_node_is_an_error() {
        let graph = Graph::new(GraphKind::Directed);
        assert_eq!(
            graph.neighbors(NodeId(0)),
            Err(GraphError::NodeNotFound(NodeId(0)))
        );
    }

    #[test]
    fn edges_lists_every_stored_arc() {
        let mut graph = Graph::new(GraphKind::Undirected);
        let ids = graph.add_nodes(3);
        graph.add_edge(ids[0], ids[1], 1).unwrap();
        graph.add_edge(ids[1], ids[2], 2).unwrap();

        let mut edges: Vec<Edge> = graph.edges().collect();
        edges.sort();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[0], Edge::new(ids[0], ids[1], 1));
        assert_eq!(edges[1], Edge::new(ids[1], ids[0], 1));
    }

    #[test]
    fn edge_ordering_is_weight_then_endpoints() {
        let light = Edge::new(NodeId(3), NodeId(4), 1);
        let heavy = Edge::new(NodeId(0), NodeId(1), 2);
        let tied = Edge::new(NodeId(2), NodeId(3), 2);

        let mut edges = vec![tied, heavy, light];
        edges.sort();
        assert_eq!(edges, vec![light, heavy, tied]);
    }

    #[test]
    fn canonical_edge_normalizes_orientation() {
        let edge = Edge::canonical(NodeId(7), NodeId(2), 5);
        assert_eq!(edge.source, NodeId(2));
        assert_eq!(edge.target, NodeId(7));
        assert_eq!(edge, Edge::canonical(NodeId(2), NodeId(7), 5));
    }
}
