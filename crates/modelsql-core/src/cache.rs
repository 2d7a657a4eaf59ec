//! Durable storage for resolved source queries

use std::fs;
use std::path::PathBuf;

use crate::error::Result;

/// Filesystem-backed cache of source queries, keyed by `(model, identifier)`.
///
/// Layout is `<root>/<model>/<identifier>_query`, one plain-text SQL file
/// per key. Entries are written whenever the connection catalog supplies
/// inline query text, so later runs can resolve the same identifier from a
/// workbook whose connection entry has gone empty.
#[derive(Debug, Clone)]
pub struct FsQueryCache {
    root: PathBuf,
}

impl FsQueryCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn entry_path(&self, model: &str, identifier: &str) -> PathBuf {
        self.root.join(model).join(format!("{identifier}_query"))
    }

    /// Persist the query text for `(model, identifier)`, creating the model
    /// directory if needed. Overwrites any previous entry.
    pub fn store(&self, model: &str, identifier: &str, query: &str) -> Result<()> {
        fs::create_dir_all(self.root.join(model))?;
        fs::write(self.entry_path(model, identifier), query)?;
        Ok(())
    }

    /// Read back the query text for `(model, identifier)`, or `Ok(None)`
    /// when no entry exists.
    pub fn load(&self, model: &str, identifier: &str) -> Result<Option<String>> {
        let path = self.entry_path(model, identifier);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_store_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let cache = FsQueryCache::new(dir.path());

        cache.store("gas_model", "Table_Gas", "select * from gas").unwrap();
        let loaded = cache.load("gas_model", "Table_Gas").unwrap();
        assert_eq!(loaded.as_deref(), Some("select * from gas"));
    }

    #[test]
    fn test_load_missing_entry() {
        let dir = tempfile::tempdir().unwrap();
        let cache = FsQueryCache::new(dir.path());
        assert!(cache.load("gas_model", "Table_Gas").unwrap().is_none());
    }

    #[test]
    fn test_store_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let cache = FsQueryCache::new(dir.path());

        cache.store("gas_model", "Table_Gas", "select 1").unwrap();
        cache.store("gas_model", "Table_Gas", "select 2").unwrap();
        assert_eq!(
            cache.load("gas_model", "Table_Gas").unwrap().as_deref(),
            Some("select 2")
        );
    }

    #[test]
    fn test_models_are_isolated() {
        let dir = tempfile::tempdir().unwrap();
        let cache = FsQueryCache::new(dir.path());

        cache.store("gas_model", "Table_Gas", "select 1").unwrap();
        assert!(cache.load("power_model", "Table_Gas").unwrap().is_none());
    }
}
