//! Path-finding orchestration and result formatting.
//!
//! [`find_path`] is the single entry point for collaborators: it validates
//! the query, short-circuits the trivial `start == end` case, dispatches to
//! the selected algorithm and packages the raw output into a [`PathResult`]
//! with a human-readable summary. Either a fully valid result or an error
//! is returned, never a partial one.

use serde::{Deserialize, Serialize};

use crate::algorithm::{self, AlgorithmKind, UNREACHABLE};
use crate::error::{Result, SendaError};
use crate::graph::Graph;

/// Fixed summary for unreachable vertex pairs.
pub const NO_PATH_MESSAGE: &str = "No path exists between the given vertices.";

/// Result of one shortest-path query.
///
/// Immutable once produced; rendering and export collaborators read it
/// as-is. If the graph is re-parsed, prior results are stale and must not
/// be reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResult {
    /// Total path weight, or [`UNREACHABLE`].
    pub distance: i32,
    /// 0-based vertices from start to end inclusive; empty if unreachable.
    pub path: Vec<usize>,
    /// Consecutive `(from, to)` pairs of `path`.
    pub edges: Vec<(usize, usize)>,
    /// Initialization + relaxation + hop steps performed.
    pub operations_count: usize,
    /// Human-readable summary derived from the other fields.
    pub message: String,
}

impl PathResult {
    /// `true` if a path was found.
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        self.distance != UNREACHABLE
    }
}

/// Find the shortest path from `start` to `end` in `graph`.
///
/// The trivial `start == end` query is answered directly (distance 0,
/// single-vertex path, one counted operation) without running the
/// relaxation algorithm.
///
/// # Arguments
/// * `graph` - Validated dense digraph
/// * `start`, `end` - 0-based vertex indices
/// * `kind` - Algorithm variant to run
///
/// # Errors
/// * `OutOfRange` - `start` or `end` is not a vertex of `graph`
/// * `ComputationFailed` - internal table inconsistency (never a partial
///   result)
///
/// # Examples
/// ```
/// use senda::algorithm::AlgorithmKind;
/// use senda::graph::parse_matrix;
/// use senda::pathfinder::find_path;
///
/// let g = parse_matrix("0 1 0\n0 0 1\n0 0 0", "3").unwrap();
/// let result = find_path(&g, 0, 2, AlgorithmKind::FloydWarshall).unwrap();
/// assert_eq!(result.distance, 2);
/// assert_eq!(result.path, vec![0, 1, 2]);
/// ```
pub fn find_path(graph: &Graph, start: usize, end: usize, kind: AlgorithmKind) -> Result<PathResult> {
    for (value, subject) in [(start, "start vertex"), (end, "end vertex")] {
        if value >= graph.size() {
            return Err(SendaError::OutOfRange {
                subject: subject.to_string(),
                value: value as i64 + 1,
                min: 1,
                max: graph.size() as i64,
            });
        }
    }

    if start == end {
        return Ok(PathResult {
            distance: 0,
            path: vec![start],
            edges: Vec::new(),
            operations_count: 1,
            message: format!(
                "Minimum distance: 0\nOperations: 1\nPath: {}",
                start + 1
            ),
        });
    }

    let raw = algorithm::run(kind, graph, start, end)?;

    let message = if raw.distance == UNREACHABLE {
        NO_PATH_MESSAGE.to_string()
    } else {
        format!(
            "Minimum distance: {}\nOperations: {}\nPath: {}",
            raw.distance,
            raw.operations,
            format_path(&raw.path, " → ")
        )
    };

    Ok(PathResult {
        distance: raw.distance,
        path: raw.path,
        edges: raw.edges,
        operations_count: raw.operations,
        message,
    })
}

/// [`find_path`] with the algorithm selected by identifier.
///
/// # Errors
/// `UnknownAlgorithm` for an unrecognized identifier, plus the errors of
/// [`find_path`].
pub fn find_path_by_name(
    graph: &Graph,
    start: usize,
    end: usize,
    algorithm_name: &str,
) -> Result<PathResult> {
    let kind = AlgorithmKind::from_name(algorithm_name)?;
    find_path(graph, start, end, kind)
}

/// Join a 0-based vertex sequence for display, 1-based.
pub(crate) fn format_path(path: &[usize], separator: &str) -> String {
    path.iter()
        .map(|v| (v + 1).to_string())
        .collect::<Vec<_>>()
        .join(separator)
}
