//! Plain-text solution reports.
//!
//! One-way export of a finished query: the matrix text the graph was
//! parsed from, the algorithm used, the endpoints, and the outcome. The
//! format is written for humans; no parser for it exists or is planned.

use std::fs;
use std::path::Path;

use crate::algorithm::AlgorithmKind;
use crate::error::Result;
use crate::pathfinder::{format_path, PathResult};

/// Default location for [`save_report`].
pub const DEFAULT_REPORT_PATH: &str = "solution.txt";

/// Render a solution report.
///
/// Vertices are displayed 1-based; the path sequence is joined by `" -> "`.
///
/// # Arguments
/// * `matrix_text` - Original matrix text the graph was parsed from
/// * `result` - Outcome of the query
/// * `kind` - Algorithm that produced the result
/// * `start`, `end` - 0-based query endpoints
#[must_use]
pub fn render_report(
    matrix_text: &str,
    result: &PathResult,
    kind: AlgorithmKind,
    start: usize,
    end: usize,
) -> String {
    let mut out = String::new();
    out.push_str("Weight matrix (directed graph):\n");
    out.push_str(matrix_text.trim_end());
    out.push_str("\n\n");
    out.push_str(&format!("Search method: {}\n", kind.display_name()));
    out.push_str(&format!(
        "Path search from vertex {} to vertex {}.\n\n",
        start + 1,
        end + 1
    ));

    if result.is_reachable() {
        out.push_str(&format!("Minimum distance: {}\n", result.distance));
        out.push_str(&format!("Operations: {}\n", result.operations_count));
        out.push_str(&format!(
            "Path vertex sequence: {}\n",
            format_path(&result.path, " -> ")
        ));
    } else {
        out.push_str("Result: No path exists between the given vertices.\n");
    }

    out
}

/// Render a report and write it to `path`.
///
/// # Errors
/// `Io` if the file cannot be written.
pub fn save_report(
    path: impl AsRef<Path>,
    matrix_text: &str,
    result: &PathResult,
    kind: AlgorithmKind,
    start: usize,
    end: usize,
) -> Result<()> {
    let report = render_report(matrix_text, result, kind, start, end);
    fs::write(path, report)?;
    Ok(())
}
