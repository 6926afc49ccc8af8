//! Error types for Senda operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Senda operations.
///
/// Provides detailed context about failures including malformed matrix
/// text, out-of-range sizes or vertices, and invalid edge weights.
/// Positions embedded in messages are 1-based, matching how vertices are
/// displayed to users.
///
/// # Examples
///
/// ```
/// use senda::error::SendaError;
///
/// let err = SendaError::InvalidWeight {
///     row: 1,
///     col: 1,
///     found: 5,
///     constraint: "diagonal weights must be 0".to_string(),
/// };
/// assert!(err.to_string().contains("[1, 1]"));
/// ```
#[derive(Debug)]
pub enum SendaError {
    /// Input text could not be parsed (non-integer tokens, wrong row or
    /// column counts).
    MalformedInput {
        /// Description of what failed to parse
        message: String,
    },

    /// A size or vertex index falls outside its allowed bounds.
    OutOfRange {
        /// What was out of range (e.g. "graph size", "start vertex")
        subject: String,
        /// Value found (1-based where it denotes a vertex)
        value: i64,
        /// Inclusive lower bound
        min: i64,
        /// Inclusive upper bound
        max: i64,
    },

    /// A matrix cell violates the weight invariants.
    InvalidWeight {
        /// 1-based row of the offending cell
        row: usize,
        /// 1-based column of the offending cell
        col: usize,
        /// Weight found
        found: i32,
        /// Constraint that was violated
        constraint: String,
    },

    /// Algorithm identifier not recognized.
    UnknownAlgorithm {
        /// Identifier provided by the caller
        name: String,
    },

    /// Path computation hit an internal inconsistency.
    ComputationFailed {
        /// Description of the inner failure
        message: String,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),
}

impl fmt::Display for SendaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SendaError::MalformedInput { message } => {
                write!(f, "Malformed input: {message}")
            }
            SendaError::OutOfRange {
                subject,
                value,
                min,
                max,
            } => {
                write!(f, "{subject} must be between {min} and {max}, got {value}")
            }
            SendaError::InvalidWeight {
                row,
                col,
                found,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid weight {found} at position [{row}, {col}]: {constraint}"
                )
            }
            SendaError::UnknownAlgorithm { name } => {
                write!(f, "Unknown algorithm: '{name}'")
            }
            SendaError::ComputationFailed { message } => {
                write!(f, "Path computation failed: {message}")
            }
            SendaError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for SendaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SendaError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SendaError {
    fn from(err: std::io::Error) -> Self {
        SendaError::Io(err)
    }
}

impl SendaError {
    /// Create a malformed-input error with a descriptive message.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput {
            message: message.into(),
        }
    }

    /// Create a computation-failure error wrapping an inner cause.
    #[must_use]
    pub fn computation_failed(message: impl Into<String>) -> Self {
        Self::ComputationFailed {
            message: message.into(),
        }
    }
}

/// Convenient result type alias for Senda operations.
pub type Result<T> = std::result::Result<T, SendaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_out_of_range() {
        let err = SendaError::OutOfRange {
            subject: "graph size".to_string(),
            value: 11,
            min: 1,
            max: 10,
        };
        assert_eq!(
            err.to_string(),
            "graph size must be between 1 and 10, got 11"
        );
    }

    #[test]
    fn test_display_invalid_weight_names_position() {
        let err = SendaError::InvalidWeight {
            row: 2,
            col: 3,
            found: 1001,
            constraint: "edge weights must be between 1 and 1000".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("1001"));
        assert!(msg.contains("[2, 3]"));
    }

    #[test]
    fn test_io_error_source_is_preserved() {
        use std::error::Error;

        let inner = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = SendaError::from(inner);
        assert!(err.source().is_some());
    }
}
