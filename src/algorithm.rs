//! All-pairs relaxation algorithms with operation instrumentation.
//!
//! Two variants of the O(n³) all-pairs shortest-path scheme are provided
//! as a closed enum, [`AlgorithmKind`]. They differ only in how the
//! distance/successor tables are initialized (a post-hoc zero-as-absent
//! patch versus a three-way branch) and must produce identical tables;
//! relaxation and path reconstruction are shared.
//!
//! Every elementary step is counted: `size²` for initialization, `size³`
//! for relaxation, plus one per hop of the reconstructed path. The counter
//! is a pedagogical complexity indicator, not a performance metric.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SendaError};
use crate::graph::Graph;

/// Sentinel distance for unreachable vertex pairs.
///
/// Relaxation never adds two distances unless both are below the sentinel,
/// so the sum of at most `size` real edge weights (≤ 10 × 1000) cannot
/// overflow.
pub const UNREACHABLE: i32 = i32::MAX;

/// The two supported all-pairs relaxation algorithms.
///
/// A closed set: callers select a variant by identifier via
/// [`AlgorithmKind::from_name`] and tests iterate [`AlgorithmKind::ALL`]
/// to check cross-variant equivalence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlgorithmKind {
    /// Classic Floyd–Warshall: copy raw weights, then patch zero cells to
    /// the unreachable sentinel.
    FloydWarshall,
    /// Dantzig's variant: three-way initialization branch (self / edge /
    /// no edge).
    Dantzig,
}

impl AlgorithmKind {
    /// Every supported variant.
    pub const ALL: [AlgorithmKind; 2] = [AlgorithmKind::FloydWarshall, AlgorithmKind::Dantzig];

    /// Resolve a stable identifier into a variant.
    ///
    /// Identifiers are matched case-insensitively after trimming.
    ///
    /// # Errors
    /// `UnknownAlgorithm` for anything other than `"floyd-warshall"` or
    /// `"dantzig"`.
    ///
    /// # Examples
    /// ```
    /// use senda::algorithm::AlgorithmKind;
    ///
    /// assert_eq!(
    ///     AlgorithmKind::from_name("Floyd-Warshall").unwrap(),
    ///     AlgorithmKind::FloydWarshall
    /// );
    /// assert!(AlgorithmKind::from_name("dijkstra").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "floyd-warshall" => Ok(AlgorithmKind::FloydWarshall),
            "dantzig" => Ok(AlgorithmKind::Dantzig),
            _ => Err(SendaError::UnknownAlgorithm {
                name: name.to_string(),
            }),
        }
    }

    /// Stable identifier accepted by [`AlgorithmKind::from_name`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            AlgorithmKind::FloydWarshall => "floyd-warshall",
            AlgorithmKind::Dantzig => "dantzig",
        }
    }

    /// Human-readable display name.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            AlgorithmKind::FloydWarshall => "Floyd–Warshall",
            AlgorithmKind::Dantzig => "Dantzig",
        }
    }
}

/// Raw algorithm output before message formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawPath {
    /// Shortest distance, or [`UNREACHABLE`].
    pub distance: i32,
    /// Vertices from start to end inclusive; empty if unreachable.
    pub path: Vec<usize>,
    /// Consecutive `(from, to)` pairs of `path`.
    pub edges: Vec<(usize, usize)>,
    /// Initialization + relaxation + hop steps.
    pub operations: usize,
}

/// Dense per-query state: distance and successor tables, flat row-major.
struct Tables {
    dist: Vec<i32>,
    next: Vec<Option<usize>>,
}

/// Run one algorithm variant over a graph.
///
/// The graph is read-only; each call allocates its own tables, so
/// concurrent queries over a shared graph are safe.
pub(crate) fn run(kind: AlgorithmKind, graph: &Graph, start: usize, end: usize) -> Result<RawPath> {
    let n = graph.size();
    let mut operations = 0usize;

    let mut tables = match kind {
        AlgorithmKind::FloydWarshall => init_patched(graph, &mut operations),
        AlgorithmKind::Dantzig => init_branched(graph, &mut operations),
    };

    relax(&mut tables, n, &mut operations);
    reconstruct(&tables, n, start, end, operations)
}

/// Classic initialization: copy the raw weight, then patch `0` (no edge)
/// to the unreachable sentinel.
fn init_patched(graph: &Graph, operations: &mut usize) -> Tables {
    let n = graph.size();
    let mut dist = vec![0i32; n * n];
    let mut next = vec![None; n * n];

    for i in 0..n {
        for j in 0..n {
            *operations += 1;
            let idx = i * n + j;
            let w = graph.weight(i, j);
            dist[idx] = w;
            if i != j && w > 0 {
                next[idx] = Some(j);
            }
            if i != j && dist[idx] == 0 {
                dist[idx] = UNREACHABLE;
            }
        }
    }

    Tables { dist, next }
}

/// Alternate initialization: one three-way branch per cell (self vertex,
/// existing edge, no edge). Must yield the same tables as [`init_patched`].
fn init_branched(graph: &Graph, operations: &mut usize) -> Tables {
    let n = graph.size();
    let mut dist = vec![0i32; n * n];
    let mut next = vec![None; n * n];

    for i in 0..n {
        for j in 0..n {
            *operations += 1;
            let idx = i * n + j;
            let w = graph.weight(i, j);
            if i == j {
                dist[idx] = 0;
            } else if w > 0 {
                dist[idx] = w;
                next[idx] = Some(j);
            } else {
                dist[idx] = UNREACHABLE;
            }
        }
    }

    Tables { dist, next }
}

/// Shared relaxation over all ordered `(k, i, j)` triples.
///
/// Strict `<` comparison: equal-cost alternatives are never adopted, so
/// the first route discovered (by increasing `k`) wins. Both operands are
/// checked against the sentinel before adding.
fn relax(tables: &mut Tables, n: usize, operations: &mut usize) {
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                *operations += 1;
                let ik = tables.dist[i * n + k];
                let kj = tables.dist[k * n + j];
                if ik != UNREACHABLE && kj != UNREACHABLE {
                    let through = ik + kj;
                    if through < tables.dist[i * n + j] {
                        tables.dist[i * n + j] = through;
                        tables.next[i * n + j] = tables.next[i * n + k];
                    }
                }
            }
        }
    }
}

/// Walk the successor table from `start` to `end`.
///
/// A missing successor or an over-long walk with a finite distance means
/// the tables are inconsistent; that is surfaced as `ComputationFailed`
/// rather than returning a truncated path.
fn reconstruct(
    tables: &Tables,
    n: usize,
    start: usize,
    end: usize,
    mut operations: usize,
) -> Result<RawPath> {
    let target = start * n + end;
    if tables.dist[target] == UNREACHABLE || tables.next[target].is_none() {
        return Ok(RawPath {
            distance: UNREACHABLE,
            path: Vec::new(),
            edges: Vec::new(),
            operations,
        });
    }

    let mut path = vec![start];
    let mut edges = Vec::new();
    let mut current = start;

    while current != end {
        operations += 1;
        let Some(next_vertex) = tables.next[current * n + end] else {
            return Err(SendaError::computation_failed(format!(
                "successor table has no route from vertex {} to {}",
                current + 1,
                end + 1
            )));
        };
        edges.push((current, next_vertex));
        current = next_vertex;
        path.push(current);
        // A simple path visits each vertex at most once.
        if path.len() > n {
            return Err(SendaError::computation_failed(format!(
                "successor table cycles while walking from vertex {} to {}",
                start + 1,
                end + 1
            )));
        }
    }

    Ok(RawPath {
        distance: tables.dist[target],
        path,
        edges,
        operations,
    })
}
