//! Unified error handling for the patternbook library
//!
//! One variant per failure kind the tool surface can produce, so the MCP
//! layer has a single translation point into the wire-level error envelope.

use std::io;
use thiserror::Error;

/// The main error type for the patternbook library
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PatternBookError {
    /// Requested pattern id is not a registered key
    #[error("Pattern not found: {0}")]
    PatternNotFound(String),

    /// Tool arguments failed shape or type validation
    #[error("Invalid argument '{field}': {reason}")]
    InvalidArgument {
        /// Name of the offending argument field
        field: String,
        /// What was expected of it
        reason: String,
    },

    /// Requested tool name has no registered handler
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Registry construction failed an integrity check
    #[error("Invalid registry: {0}")]
    InvalidRegistry(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

/// Result type alias for patternbook operations
pub type Result<T> = std::result::Result<T, PatternBookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_the_id() {
        let err = PatternBookError::PatternNotFound("no-such-pattern".to_string());
        assert_eq!(err.to_string(), "Pattern not found: no-such-pattern");
    }

    #[test]
    fn test_invalid_argument_message_names_the_field() {
        let err = PatternBookError::InvalidArgument {
            field: "patternId".to_string(),
            reason: "expected a string".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("patternId"));
        assert!(msg.contains("expected a string"));
    }

    #[test]
    fn test_unknown_tool_message() {
        let err = PatternBookError::UnknownTool("does_not_exist".to_string());
        assert_eq!(err.to_string(), "Unknown tool: does_not_exist");
    }
}
