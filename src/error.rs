//! Unified error types for elfdeps.
//!
//! The viewer core performs no I/O of its own, so the taxonomy is narrow:
//! graph-contract violations detected at construction time, file/deserialize
//! failures in the CLI shell, and configuration problems.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for elfdeps operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ElfDepsError {
    /// Errors while consuming the supplied dependency graph
    #[error("Invalid dependency graph: {context}")]
    Graph {
        context: String,
        #[source]
        source: GraphErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific graph error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GraphErrorKind {
    /// The supplied graph is expected to be a tree; a node reachable through
    /// two different parents (or through itself) breaks that contract.
    #[error("node '{name}' reached twice while building the tree - expected a tree, not a graph")]
    RevisitedNode { name: String },

    #[error("node id {0} does not belong to this graph")]
    UnknownNode(usize),

    #[error("invalid graph document: {0}")]
    InvalidDocument(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for elfdeps operations
pub type Result<T> = std::result::Result<T, ElfDepsError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl ElfDepsError {
    /// Create a graph error with context
    pub fn graph(context: impl Into<String>, source: GraphErrorKind) -> Self {
        Self::Graph {
            context: context.into(),
            source,
        }
    }

    /// Create a graph error for a node visited twice during tree construction
    pub fn revisited_node(name: impl Into<String>) -> Self {
        Self::graph(
            "dependency data must be resolved to a tree before display",
            GraphErrorKind::RevisitedNode { name: name.into() },
        )
    }

    /// Create a graph error for an id that belongs to a different graph
    pub fn unknown_node(id: usize) -> Self {
        Self::graph("node lookup", GraphErrorKind::UnknownNode(id))
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for ElfDepsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for ElfDepsError {
    fn from(err: serde_json::Error) -> Self {
        Self::graph(
            "JSON deserialization",
            GraphErrorKind::InvalidDocument(err.to_string()),
        )
    }
}

impl From<serde_yaml::Error> for ElfDepsError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Config(err.to_string())
    }
}
