//! Core error types for class graph processing
//!
//! Every condition here is recoverable: interactive edits surface the error
//! to the caller, bulk loads collect them per record and keep going.

use thiserror::Error;

use crate::model::NodeKey;

/// Errors raised by class graph mutations and record validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Duplicate key: a node with key {key} already exists")]
    DuplicateKey { key: NodeKey },

    #[error("Unknown key: no node with key {key}")]
    UnknownKey { key: NodeKey },

    #[error("Malformed record: {message}")]
    MalformedRecord { message: String },
}

impl GraphError {
    /// Create a new duplicate key error
    pub fn duplicate_key(key: NodeKey) -> Self {
        Self::DuplicateKey { key }
    }

    /// Create a new unknown key error
    pub fn unknown_key(key: NodeKey) -> Self {
        Self::UnknownKey { key }
    }

    /// Create a new malformed record error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            message: message.into(),
        }
    }
}

/// Result alias for class graph operations
pub type GraphResult<T> = Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key() {
        let error = GraphError::duplicate_key(11);
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Duplicate key"));
        assert!(error_msg.contains("11"));
    }

    #[test]
    fn test_unknown_key() {
        let error = GraphError::unknown_key(42);
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Unknown key"));
        assert!(error_msg.contains("42"));
    }

    #[test]
    fn test_malformed_record() {
        let error = GraphError::malformed("property has no name");
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Malformed record"));
        assert!(error_msg.contains("property has no name"));
    }

    #[test]
    fn test_errors_convert_to_anyhow() {
        let err: anyhow::Error = GraphError::unknown_key(3).into();
        assert!(err.downcast_ref::<GraphError>().is_some());
    }
}
