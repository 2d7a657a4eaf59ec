//! # modelsql-formula
//!
//! Parser for the constrained `SUMIFS` aggregation dialect.
//!
//! Each formula of the shape
//! `=SUMIFS(T[value], T[hub], "TTF", ...)*multiplier` is tokenized into a
//! sum range, ordered (criteria range, literal) conditions and the trailing
//! multiplier suffix. Parsing registers every referenced data source in a
//! [`modelsql_core::SourceRegistry`] and accumulates per-column statistics
//! as a side effect.
//!
//! ## Example
//!
//! ```rust,ignore
//! use modelsql_formula::parse_formulas;
//!
//! let output = parse_formulas(&formulas, &catalog, "gas_model", &cache)?;
//! assert_eq!(output.rules.len(), 12);
//! ```

pub mod error;
pub mod parser;

pub use error::{FormulaError, FormulaResult};
pub use parser::{parse_formulas, ParseOutput};
