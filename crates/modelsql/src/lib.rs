//! # modelsql
//!
//! Translates one spreadsheet row of constrained `SUMIFS` aggregation
//! formulas into a single SQL statement that reproduces the row's values
//! over a date range.
//!
//! The surrounding glue (workbook I/O, query execution, writing results
//! back into cells) stays outside this library; callers hand in the raw
//! formula strings, the connection catalog extracted from the workbook,
//! and the column headers, and get back one executable SQL string.
//!
//! ## Example
//!
//! ```rust,ignore
//! use modelsql::{translate, ConnectionCatalog, FsQueryCache};
//!
//! let catalog: ConnectionCatalog = connections.into_iter().collect();
//! let cache = FsQueryCache::new("queries");
//! let sql = translate(&formulas, &catalog, "gas_model", &cache, &headers, begin, end)?;
//! ```

use chrono::NaiveDate;
use thiserror::Error;

// Re-export core types
pub use modelsql_core::{
    Argument, Condition, ConnectionCatalog, DataSource, FsQueryCache, Property, SourceRegistry,
    SumIfRule,
};

// Re-export parser and compiler entry points
pub use modelsql_formula::{parse_formulas, FormulaError, FormulaResult, ParseOutput};
pub use modelsql_query::{generate_cross_tab, generate_query, QueryError, QueryResult};

/// Result type alias for whole-pass translation
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by a translation pass. All are pass-fatal: no partial
/// SQL is safe to execute.
#[derive(Debug, Error)]
pub enum Error {
    /// Formula parsing failure
    #[error(transparent)]
    Formula(#[from] FormulaError),

    /// SQL compilation failure
    #[error(transparent)]
    Query(#[from] QueryError),

    /// The requested window ends before it begins
    #[error("end date {end} is before begin date {begin}")]
    InvalidDateRange { begin: NaiveDate, end: NaiveDate },
}

/// Run one full translation pass: parse `formulas`, then compile the
/// resulting rules into a single SQL statement over `begin..=end`.
///
/// The registry of data sources lives and dies inside this call; only the
/// durable query cache carries state across passes.
pub fn translate(
    formulas: &[String],
    catalog: &ConnectionCatalog,
    model_name: &str,
    cache: &FsQueryCache,
    column_names: &[String],
    begin: NaiveDate,
    end: NaiveDate,
) -> Result<String> {
    if end < begin {
        return Err(Error::InvalidDateRange { begin, end });
    }

    let output = parse_formulas(formulas, catalog, model_name, cache)?;
    tracing::info!(
        "parsed {} rules over {} data sources, generating query",
        output.rules.len(),
        output.registry.len()
    );

    let query = generate_query(&output.registry, &output.rules, column_names, begin, end)?;
    tracing::debug!("generated query:\n{query}");
    Ok(query)
}
