//! GRAPHOS core engine
//!
//! The Graph Algorithm Observatory: adjacency-list graphs together with the
//! classic algorithms that operate on them. Traversal (depth-first and
//! breadth-first search), single-source shortest paths (Dijkstra), and
//! minimum spanning trees (Kruskal and Prim) are built on a small set of
//! interacting structures: insertion-ordered adjacency lists, an indexed
//! binary heap with decrease-key, and disjoint-set union with path
//! compression.
//!
//! Algorithms borrow the graph immutably. A graph handed to any entry point
//! in this crate is structurally identical when the call returns.
//!
//! Copyright (c) 2025 GRAPHOS Project Developers

pub mod algorithm;
pub mod data_structures;

pub use self::algorithm::traits::{
    Algorithm, AlgorithmComplexity, AlgorithmError, AlgorithmMetrics,
};
pub use self::data_structures::graph::{
    Edge, Graph, GraphError, GraphKind, Neighbor, NodeId, Weight,
};
