//! First-seen-ordered registry of data sources for one translation pass

use ahash::AHashMap;

use crate::cache::FsQueryCache;
use crate::catalog::ConnectionCatalog;
use crate::error::{Error, Result};
use crate::source::DataSource;

/// All data sources discovered while parsing one row of formulas.
///
/// Owned by a single pass: the parser mutates it, the compiler reads it.
/// Iteration order is the order identifiers were first referenced; the
/// generated SQL depends on it, so it must never fall back to hash order.
#[derive(Debug, Default)]
pub struct SourceRegistry {
    sources: Vec<DataSource>,
    index: AHashMap<String, usize>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.index.contains_key(identifier)
    }

    pub fn get(&self, identifier: &str) -> Option<&DataSource> {
        self.index.get(identifier).map(|&i| &self.sources[i])
    }

    pub fn get_mut(&mut self, identifier: &str) -> Option<&mut DataSource> {
        self.index.get(identifier).map(|&i| &mut self.sources[i])
    }

    /// Sources in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &DataSource> {
        self.sources.iter()
    }

    /// Register `source` unless its identifier is already present, and
    /// return the registered entry.
    pub fn insert(&mut self, source: DataSource) -> &mut DataSource {
        let index = match self.index.get(source.identifier()) {
            Some(&index) => index,
            None => {
                let index = self.sources.len();
                self.index.insert(source.identifier().to_string(), index);
                self.sources.push(source);
                index
            }
        };
        &mut self.sources[index]
    }

    /// Return the source for `identifier`, resolving its defining query on
    /// first sight: a non-empty catalog entry is persisted to the durable
    /// cache and used directly; otherwise the cache is consulted. Fails
    /// with [`Error::QueryNotFound`] when neither yields text.
    pub fn resolve_or_insert(
        &mut self,
        identifier: &str,
        catalog: &ConnectionCatalog,
        cache: &FsQueryCache,
        model: &str,
    ) -> Result<&mut DataSource> {
        if let Some(&index) = self.index.get(identifier) {
            return Ok(&mut self.sources[index]);
        }

        let source_query = match catalog.get(identifier) {
            Some(query) if !query.is_empty() => {
                tracing::info!("saving external query for {identifier}");
                cache.store(model, identifier, query)?;
                query.to_string()
            }
            _ => {
                tracing::info!("no catalog query for {identifier}, loading from cache");
                cache
                    .load(model, identifier)?
                    .ok_or_else(|| Error::QueryNotFound {
                        identifier: identifier.to_string(),
                        model: model.to_string(),
                    })?
            }
        };

        Ok(self.insert(DataSource::new(identifier, source_query)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog() -> ConnectionCatalog {
        [("Table_Gas", "select * from gas")].into_iter().collect()
    }

    #[test]
    fn test_resolve_from_catalog_persists_to_cache() {
        let dir = tempfile::tempdir().unwrap();
        let cache = FsQueryCache::new(dir.path());
        let mut registry = SourceRegistry::new();

        let source = registry
            .resolve_or_insert("Table_Gas", &catalog(), &cache, "gas_model")
            .unwrap();
        assert_eq!(source.source_query(), "select * from gas");

        // persisted under (model, identifier)
        assert_eq!(
            cache.load("gas_model", "Table_Gas").unwrap().as_deref(),
            Some("select * from gas")
        );
    }

    #[test]
    fn test_resolve_falls_back_to_cache() {
        let dir = tempfile::tempdir().unwrap();
        let cache = FsQueryCache::new(dir.path());
        cache.store("gas_model", "Table_Gas", "select * from gas").unwrap();

        // empty catalog entry means "use the cache"
        let mut empty_catalog = ConnectionCatalog::new();
        empty_catalog.insert("Table_Gas", "");

        let mut registry = SourceRegistry::new();
        let source = registry
            .resolve_or_insert("Table_Gas", &empty_catalog, &cache, "gas_model")
            .unwrap();
        assert_eq!(source.source_query(), "select * from gas");
    }

    #[test]
    fn test_resolve_missing_everywhere_fails() {
        let dir = tempfile::tempdir().unwrap();
        let cache = FsQueryCache::new(dir.path());
        let mut registry = SourceRegistry::new();

        let err = registry
            .resolve_or_insert("Table_Gas", &ConnectionCatalog::new(), &cache, "gas_model")
            .unwrap_err();
        assert!(matches!(err, Error::QueryNotFound { .. }));
        assert!(err.to_string().contains("Table_Gas"));
        assert!(err.to_string().contains("gas_model"));
    }

    #[test]
    fn test_resolve_is_memoized_per_identifier() {
        let dir = tempfile::tempdir().unwrap();
        let cache = FsQueryCache::new(dir.path());
        let mut registry = SourceRegistry::new();

        registry
            .resolve_or_insert("Table_Gas", &catalog(), &cache, "gas_model")
            .unwrap();
        // second resolution must not consult the (now empty) catalog
        registry
            .resolve_or_insert("Table_Gas", &ConnectionCatalog::new(), &cache, "gas_model")
            .unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_iteration_keeps_first_seen_order() {
        let mut registry = SourceRegistry::new();
        for identifier in ["Table_Power", "Table_Gas", "Table_Coal", "Table_Gas"] {
            registry.insert(DataSource::new(identifier, "select 1"));
        }

        let order: Vec<&str> = registry.iter().map(DataSource::identifier).collect();
        assert_eq!(order, ["Table_Power", "Table_Gas", "Table_Coal"]);
    }
}
