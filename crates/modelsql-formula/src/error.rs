//! Formula error types
//!
//! Every error fails the whole translation pass: partial SQL built from a
//! half-understood formula row must never reach the database.

use thiserror::Error;

/// Result type for formula parsing
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur while parsing a formula row
#[derive(Debug, Error)]
pub enum FormulaError {
    /// The formula references a known connection but is not a `SUMIFS`
    /// shape the translator understands
    #[error("formula {index} is not supported: \"{formula}\"")]
    Unsupported { index: usize, formula: String },

    /// A `SUMIFS` argument is neither a bracketed reference nor a literal
    #[error("malformed argument \"{argument}\" in formula {index}")]
    MalformedArgument { index: usize, argument: String },

    /// Data source resolution failure (missing query text, cache I/O)
    #[error(transparent)]
    Source(#[from] modelsql_core::Error),
}
