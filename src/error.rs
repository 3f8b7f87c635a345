//! Error types for Marga

use thiserror::Error;

/// Marga error type
#[derive(Error, Debug)]
pub enum MargaError {
    /// An edge referenced a node that was never added to the graph.
    #[error("node '{0}' does not exist")]
    MissingNode(String),

    /// A search was asked to start or finish at a node that was never added.
    #[error("unknown node '{0}'")]
    UnknownNode(String),

    /// A claimed path step has no matching edge in the graph.
    ///
    /// This cannot happen for a path produced by `find_path` on the same
    /// graph; it signals the graph was mutated between search and summary.
    #[error("no edge from '{from}' to '{to}' on the claimed path")]
    BrokenPath {
        /// Source node of the broken step
        from: String,
        /// Destination node of the broken step
        to: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error from the console or config file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for MargaError {
    fn from(e: toml::de::Error) -> Self {
        MargaError::Config(e.to_string())
    }
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, MargaError>;
