//! Error types for ordlist
//!
//! Provides a unified error type for all operations.
//!
//! Absence is deliberately not represented here: a `get` miss, a `delete` of a
//! key that was never inserted, or a `select` past the end are normal outcomes
//! and surface as `Option::None` (or a silent no-op), not as errors.

use thiserror::Error;

/// Result type alias using TableError
pub type Result<T> = std::result::Result<T, TableError>;

/// Unified error type for ordlist operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    // -------------------------------------------------------------------------
    // Contract violations
    // -------------------------------------------------------------------------
    /// A removal was attempted on an empty table. The minimum (or maximum) of
    /// nothing is undefined, so this is a hard failure rather than a no-op.
    /// The table is left unchanged.
    #[error("{op}: symbol table underflow")]
    Underflow {
        /// Name of the operation that underflowed
        op: &'static str,
    },

    /// A required argument was missing or unparsable. The library API cannot
    /// produce this (references are never null); it is raised by command-level
    /// callers that translate untrusted token streams into operations.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underflow_display() {
        let err = TableError::Underflow { op: "delete_min" };
        assert_eq!(err.to_string(), "delete_min: symbol table underflow");
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = TableError::InvalidArgument("missing key".to_string());
        assert_eq!(err.to_string(), "invalid argument: missing key");
    }
}
