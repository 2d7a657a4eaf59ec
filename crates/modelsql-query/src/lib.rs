//! # modelsql-query
//!
//! SQL compiler for parsed aggregation rules.
//!
//! Given the data sources and rules produced by `modelsql-formula`, emits a
//! single statement: a `with` clause holding one CTE per data source
//! (pivoted through `crosstab(...)` when the source tracks several
//! columns), a synthetic one-day-step date spine, and one left join per
//! rule onto that spine. Output is plain SQL text, deterministic down to
//! the byte for identical inputs, so generated queries stay diffable.

pub mod compiler;
pub mod crosstab;
pub mod error;
mod text;

pub use compiler::generate_query;
pub use crosstab::generate_cross_tab;
pub use error::{QueryError, QueryResult};
