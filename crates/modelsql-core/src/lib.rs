//! # modelsql-core
//!
//! Core data structures for the modelsql translation engine.
//!
//! This crate provides the value types and containers shared by the formula
//! parser and the query compiler:
//! - [`Argument`] and [`Condition`] - references into external tables and
//!   the equality tests built from them
//! - [`Property`] - per-column usage statistics, used to pick pivot axes
//! - [`DataSource`] and [`SourceRegistry`] - the external tables discovered
//!   during one translation pass, in first-seen order
//! - [`SumIfRule`] - one parsed aggregation formula
//! - [`ConnectionCatalog`] and [`FsQueryCache`] - where defining queries
//!   come from and where they are persisted between runs
//!
//! ## Example
//!
//! ```rust
//! use modelsql_core::{DataSource, SourceRegistry};
//!
//! let mut registry = SourceRegistry::new();
//! let source = registry.insert(DataSource::new("Table_Gas", "select * from gas"));
//! source.property_mut("hub").add_value("TTF");
//!
//! assert_eq!(registry.len(), 1);
//! ```

pub mod argument;
pub mod cache;
pub mod catalog;
pub mod error;
pub mod property;
pub mod registry;
pub mod rule;
pub mod source;

// Re-exports for convenience
pub use argument::{Argument, Condition};
pub use cache::FsQueryCache;
pub use catalog::ConnectionCatalog;
pub use error::{Error, Result};
pub use property::Property;
pub use registry::SourceRegistry;
pub use rule::SumIfRule;
pub use source::DataSource;
