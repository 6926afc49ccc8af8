//! Dense weighted digraph construction from adjacency-weight matrix text.
//!
//! A [`Graph`] is a small, dense, directed graph stored as a flat row-major
//! weight matrix. Graphs are built once from user-supplied text via
//! [`parse_matrix`] and are immutable afterwards; a new parse replaces the
//! graph wholesale.
//!
//! Weight conventions:
//! - `weights[i][i] == 0` always (a zero-cost self-loop by convention)
//! - off-diagonal `0` means "no edge"
//! - off-diagonal nonzero weights must lie in `[1, 1000]`
//!
//! # Examples
//!
//! ```
//! use senda::graph::parse_matrix;
//!
//! let g = parse_matrix("0 1 0\n0 0 1\n0 0 0", "3").unwrap();
//! assert_eq!(g.size(), 3);
//! assert_eq!(g.weight(0, 1), 1);
//! assert_eq!(g.weight(1, 0), 0); // no edge
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, SendaError};

/// Minimum number of vertices.
pub const MIN_GRAPH_SIZE: usize = 1;
/// Maximum number of vertices.
pub const MAX_GRAPH_SIZE: usize = 10;
/// Minimum weight of an existing edge.
pub const MIN_EDGE_WEIGHT: i32 = 1;
/// Maximum weight of an existing edge.
pub const MAX_EDGE_WEIGHT: i32 = 1000;

/// Validated dense weighted digraph.
///
/// Stores the adjacency-weight matrix as a flat row-major vector for
/// cache-friendly access in the relaxation loops. Construction enforces
/// the size and weight invariants; instances are immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    size: usize,
    weights: Vec<i32>,
}

impl Graph {
    /// Build a graph from a flat row-major weight vector.
    ///
    /// # Arguments
    /// * `size` - Number of vertices, in `[1, 10]`
    /// * `weights` - Row-major weights, length `size * size`
    ///
    /// # Errors
    /// Returns `OutOfRange` if `size` is outside `[1, 10]`,
    /// `MalformedInput` if `weights.len() != size * size`, or
    /// `InvalidWeight` for the first cell (row-major order) violating the
    /// weight invariants.
    pub fn from_weights(size: usize, weights: Vec<i32>) -> Result<Self> {
        validate_size(size)?;
        if weights.len() != size * size {
            return Err(SendaError::malformed(format!(
                "weight matrix has {} cells, expected {}",
                weights.len(),
                size * size
            )));
        }
        for i in 0..size {
            for j in 0..size {
                validate_weight(weights[i * size + j], i, j)?;
            }
        }
        Ok(Self { size, weights })
    }

    /// Number of vertices.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Weight of the edge `from -> to`; `0` means no edge.
    ///
    /// # Panics
    /// Panics if `from` or `to` is out of bounds.
    #[must_use]
    pub fn weight(&self, from: usize, to: usize) -> i32 {
        assert!(
            from < self.size && to < self.size,
            "vertex out of bounds: ({from}, {to}) in graph of size {}",
            self.size
        );
        self.weights[from * self.size + to]
    }

    /// Flat row-major view of the weight matrix.
    #[must_use]
    pub fn weights(&self) -> &[i32] {
        &self.weights
    }
}

/// Validate a graph size against the `[1, 10]` bound.
fn validate_size(size: usize) -> Result<()> {
    if !(MIN_GRAPH_SIZE..=MAX_GRAPH_SIZE).contains(&size) {
        return Err(SendaError::OutOfRange {
            subject: "graph size".to_string(),
            value: size as i64,
            min: MIN_GRAPH_SIZE as i64,
            max: MAX_GRAPH_SIZE as i64,
        });
    }
    Ok(())
}

/// Check one cell against the weight invariants. `i`/`j` are 0-based;
/// reported positions are 1-based.
fn validate_weight(weight: i32, i: usize, j: usize) -> Result<()> {
    if i == j && weight != 0 {
        return Err(SendaError::InvalidWeight {
            row: i + 1,
            col: j + 1,
            found: weight,
            constraint: "self-loop weights must be 0".to_string(),
        });
    }
    if i != j && weight != 0 && !(MIN_EDGE_WEIGHT..=MAX_EDGE_WEIGHT).contains(&weight) {
        return Err(SendaError::InvalidWeight {
            row: i + 1,
            col: j + 1,
            found: weight,
            constraint: format!(
                "edge weights must be between {MIN_EDGE_WEIGHT} and {MAX_EDGE_WEIGHT}"
            ),
        });
    }
    Ok(())
}

/// Parse a declared size token into a validated size.
///
/// # Errors
/// `MalformedInput` if the token is not an integer, `OutOfRange` if it
/// falls outside `[1, 10]`.
pub(crate) fn parse_size(size_token: &str) -> Result<usize> {
    let size: i64 = size_token.trim().parse().map_err(|_| {
        SendaError::malformed(format!("size '{}' is not an integer", size_token.trim()))
    })?;
    if !(MIN_GRAPH_SIZE as i64..=MAX_GRAPH_SIZE as i64).contains(&size) {
        return Err(SendaError::OutOfRange {
            subject: "graph size".to_string(),
            value: size,
            min: MIN_GRAPH_SIZE as i64,
            max: MAX_GRAPH_SIZE as i64,
        });
    }
    Ok(size as usize)
}

/// Parse adjacency-weight matrix text into a validated [`Graph`].
///
/// The text must contain exactly `size` non-empty lines of exactly `size`
/// whitespace-separated integer tokens each. Validation order: the size
/// token is checked first, then line and token counts, then per-cell
/// weights in row-major order; the first violation is reported.
///
/// # Arguments
/// * `text` - Matrix text, one row per line
/// * `size_token` - Declared size as entered by the user
///
/// # Errors
/// * `MalformedInput` - non-integer size token, wrong line/token counts,
///   or a non-integer cell (position reported 1-based)
/// * `OutOfRange` - declared size outside `[1, 10]`
/// * `InvalidWeight` - nonzero diagonal, or off-diagonal weight outside
///   `[1, 1000]`
///
/// # Examples
/// ```
/// use senda::graph::parse_matrix;
///
/// let g = parse_matrix("0 2\n0 0", "2").unwrap();
/// assert_eq!(g.weight(0, 1), 2);
/// assert!(parse_matrix("0 2\n0 0", "3").is_err()); // row count mismatch
/// ```
pub fn parse_matrix(text: &str, size_token: &str) -> Result<Graph> {
    let size = parse_size(size_token)?;

    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() != size {
        return Err(SendaError::malformed(format!(
            "matrix has {} rows, expected {size}",
            lines.len()
        )));
    }

    let mut weights = vec![0i32; size * size];
    for (i, line) in lines.iter().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != size {
            return Err(SendaError::malformed(format!(
                "row {} has {} values, expected {size}",
                i + 1,
                tokens.len()
            )));
        }
        for (j, token) in tokens.iter().enumerate() {
            let weight: i32 = token.parse().map_err(|_| {
                SendaError::malformed(format!(
                    "invalid value '{token}' at position [{}, {}]",
                    i + 1,
                    j + 1
                ))
            })?;
            validate_weight(weight, i, j)?;
            weights[i * size + j] = weight;
        }
    }

    Ok(Graph { size, weights })
}

/// Produce an all-zero matrix template for a declared size.
///
/// Rows are space-separated `"0"` tokens joined by newlines, with no
/// trailing newline. The template always parses back via [`parse_matrix`].
///
/// # Errors
/// Same size-token errors as [`parse_matrix`].
///
/// # Examples
/// ```
/// use senda::graph::empty_matrix_template;
///
/// assert_eq!(empty_matrix_template("2").unwrap(), "0 0\n0 0");
/// ```
pub fn empty_matrix_template(size_token: &str) -> Result<String> {
    let size = parse_size(size_token)?;
    let row = vec!["0"; size].join(" ");
    Ok(vec![row; size].join("\n"))
}

/// Parse and validate 1-based start/end vertex tokens into 0-based indices.
///
/// Bounds are checked against the declared size whenever the size token
/// itself resolves to a valid size; a vertex token below `1` is rejected
/// regardless, since the lower bound does not depend on the size. When the
/// size token is unresolvable the upper bound is deferred to
/// [`find_path`](crate::pathfinder::find_path), which re-checks indices
/// against the graph it receives.
///
/// # Errors
/// `MalformedInput` if either token is not an integer, `OutOfRange` if a
/// vertex falls outside `[1, size]`.
pub fn validate_endpoints(
    start_token: &str,
    end_token: &str,
    size_token: &str,
) -> Result<(usize, usize)> {
    let parse_vertex = |token: &str, subject: &str| -> Result<i64> {
        token.trim().parse().map_err(|_| {
            SendaError::malformed(format!(
                "{subject} '{}' is not an integer",
                token.trim()
            ))
        })
    };

    let start = parse_vertex(start_token, "start vertex")?;
    let end = parse_vertex(end_token, "end vertex")?;

    // Upper bound applies only when the declared size is itself valid.
    let max = match parse_size(size_token) {
        Ok(size) => size as i64,
        Err(_) => MAX_GRAPH_SIZE as i64,
    };

    for (value, subject) in [(start, "start vertex"), (end, "end vertex")] {
        if !(1..=max).contains(&value) {
            return Err(SendaError::OutOfRange {
                subject: subject.to_string(),
                value,
                min: 1,
                max,
            });
        }
    }

    Ok((start as usize - 1, end as usize - 1))
}
