//! Query compiler error types

use thiserror::Error;

/// Result type for query compilation
pub type QueryResult<T> = std::result::Result<T, QueryError>;

/// Errors that can occur while compiling rules into SQL
#[derive(Debug, Error)]
pub enum QueryError {
    /// An aggregation rule references an identifier missing from the registry
    #[error("no data source registered for '{0}'")]
    UnknownSource(String),

    /// A rule's column index has no matching column header
    #[error("no column header at index {0}")]
    MissingHeader(usize),
}
