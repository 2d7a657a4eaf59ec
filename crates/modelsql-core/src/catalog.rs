//! Connection catalog: identifier → raw source query text

use ahash::AHashMap;

/// Mapping from external-table identifiers to the SQL text of their
/// defining queries, as supplied by the workbook's connection table.
///
/// An empty string value means the identifier is known but carries no
/// inline text; resolution then falls back to the durable query cache.
#[derive(Debug, Clone, Default)]
pub struct ConnectionCatalog {
    entries: AHashMap<String, String>,
}

impl ConnectionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, identifier: impl Into<String>, query: impl Into<String>) {
        self.entries.insert(identifier.into(), query.into());
    }

    pub fn get(&self, identifier: &str) -> Option<&str> {
        self.entries.get(identifier).map(String::as_str)
    }

    /// Whether `text` mentions any known identifier. Distinguishes a blank
    /// or static cell from a formula kind the translator cannot handle.
    pub fn mentions_known_identifier(&self, text: &str) -> bool {
        self.entries.keys().any(|id| text.contains(id.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ConnectionCatalog {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for (identifier, query) in iter {
            catalog.insert(identifier, query);
        }
        catalog
    }
}
