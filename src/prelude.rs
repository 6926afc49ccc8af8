//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use senda::prelude::*;
//! ```

pub use crate::algorithm::{AlgorithmKind, UNREACHABLE};
pub use crate::error::{Result, SendaError};
pub use crate::graph::{empty_matrix_template, parse_matrix, validate_endpoints, Graph};
pub use crate::pathfinder::{find_path, find_path_by_name, PathResult};
pub use crate::random::random_matrix_text;
pub use crate::report::{render_report, save_report};
