//! Core algorithm trait definitions
//!
//! This module establishes the shared surface of the algorithm
//! implementations: a descriptive trait every algorithm exposes, the error
//! type raised on invalid input, and the execution metrics each run reports.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data_structures::graph::{GraphError, NodeId};
use crate::data_structures::priority_queue::PriorityQueueError;

/// Descriptive surface shared by every algorithm in the crate.
pub trait Algorithm {
    /// Human-readable name.
    fn name(&self) -> &'static str;

    /// Category the algorithm belongs to (traversal, shortest-path, ...).
    fn category(&self) -> &'static str;

    /// One-paragraph description of what the algorithm computes.
    fn description(&self) -> &'static str;

    /// Asymptotic complexity in Big-O notation.
    fn complexity(&self) -> AlgorithmComplexity;
}

/// Asymptotic complexity of an algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmComplexity {
    pub time: String,
    pub space: String,
}

impl AlgorithmComplexity {
    pub fn new(time: &str, space: &str) -> Self {
        Self {
            time: time.to_owned(),
            space: space.to_owned(),
        }
    }
}

/// Execution metrics reported by every algorithm run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmMetrics {
    /// Main-loop iterations (visits, settles, or union attempts).
    pub steps: usize,
    /// Nodes the algorithm visited or settled.
    pub nodes_visited: usize,
    /// Arcs the algorithm examined.
    pub edges_examined: usize,
}

/// Errors raised by algorithm entry points on invalid input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlgorithmError {
    #[error("invalid node {0}: not present in the graph")]
    InvalidNode(NodeId),

    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Queue(#[from] PriorityQueueError),
}
