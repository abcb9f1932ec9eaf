//! GRAPHOS algorithm framework
//! Graph algorithms over adjacency-list storage
//! Copyright (c) 2025 GRAPHOS Project Developers

pub mod mst;
pub mod shortest_path;
pub mod traits;
pub mod traversal;

pub use self::mst::{MinimumSpanningTree, MstAlgorithm, MstError, MstResult};
pub use self::shortest_path::{Dijkstra, ShortestPathResult};
pub use self::traits::{Algorithm, AlgorithmComplexity, AlgorithmError, AlgorithmMetrics};
pub use self::traversal::{BreadthFirstSearch, DepthFirstSearch, TraversalResult};
