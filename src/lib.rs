//! Senda: shortest paths on dense weighted digraphs, in pure Rust.
//!
//! Senda is an educational shortest-path engine: it parses a small, dense,
//! weighted directed graph from adjacency-weight matrix text, finds the
//! shortest path between two vertices with either of two all-pairs
//! relaxation algorithms, and reports the path, its total weight, and the
//! number of elementary operations performed — so the two O(n³) variants
//! can be compared step for step.
//!
//! # Quick Start
//!
//! ```
//! use senda::prelude::*;
//!
//! // 0 --1--> 1 --1--> 2
//! let graph = parse_matrix("0 1 0\n0 0 1\n0 0 0", "3").unwrap();
//!
//! let result = find_path(&graph, 0, 2, AlgorithmKind::FloydWarshall).unwrap();
//! assert_eq!(result.distance, 2);
//! assert_eq!(result.path, vec![0, 1, 2]);
//! assert_eq!(result.operations_count, 38); // 9 init + 27 relax + 2 hops
//! ```
//!
//! # Modules
//!
//! - [`graph`]: Matrix parsing, validation, and the [`Graph`] type
//! - [`algorithm`]: The two all-pairs relaxation variants
//! - [`pathfinder`]: Query orchestration and result formatting
//! - [`random`]: Random demo-matrix generation
//! - [`report`]: Plain-text solution reports
//!
//! Graphs hold at most 10 vertices with integer edge weights in
//! `[1, 1000]`; `0` denotes a missing edge. Each query allocates its own
//! distance/successor tables, so a shared [`Graph`] may serve concurrent
//! queries without locking.

pub mod algorithm;
pub mod error;
pub mod graph;
pub mod pathfinder;
pub mod prelude;
pub mod random;
pub mod report;

pub use algorithm::{AlgorithmKind, UNREACHABLE};
pub use error::{Result, SendaError};
pub use graph::Graph;
pub use pathfinder::{find_path, find_path_by_name, PathResult};
