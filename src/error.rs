use std::fmt;

use thiserror::Error;

/// Which end of an edge failed to resolve to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEndpoint {
    Source,
    Target,
}

impl fmt::Display for EdgeEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeEndpoint::Source => f.write_str("source"),
            EdgeEndpoint::Target => f.write_str("target"),
        }
    }
}

/// Main error type for lineage grouping
#[derive(Error, Debug)]
pub enum LineageError {
    /// An edge references a node id that is not in the node list
    #[error("Missing node: edge {from} -> {to} has unknown {endpoint} id")]
    MissingNode {
        endpoint: EdgeEndpoint,
        from: String,
        to: String,
    },

    /// Two nodes share the same id
    #[error("Duplicate node id: {0}")]
    DuplicateNodeId(String),

    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML (de)serialization errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Parse errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Convenient Result type using LineageError
pub type Result<T> = std::result::Result<T, LineageError>;
