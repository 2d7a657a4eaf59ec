//! Error types for modelsql-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in modelsql-core
#[derive(Debug, Error)]
pub enum Error {
    /// A data source identifier could not be resolved from the connection
    /// catalog or the durable query cache. Operator configuration problem,
    /// not retryable.
    #[error("query not found for '{identifier}' in model '{model}': check that the identifier in the formula matches the connection name")]
    QueryNotFound { identifier: String, model: String },

    /// Query cache I/O failure
    #[error("query cache I/O error: {0}")]
    Io(#[from] std::io::Error),
}
