//! GRAPHOS data structures
//! Storage primitives shared by the algorithm modules
//! Copyright (c) 2025 GRAPHOS Project Developers

pub mod disjoint_set;
pub mod graph;
pub mod priority_queue;

pub use self::disjoint_set::DisjointSet;
pub use self::graph::{Edge, Graph, GraphError, GraphKind, Neighbor, NodeId, Weight};
pub use self::priority_queue::{IndexedPriorityQueue, PriorityQueueError, PushOutcome};
