//! External data sources referenced by formulas

use crate::property::Property;

/// An external table referenced by formula arguments: its identifier, the
/// SQL query that defines it, and the columns formulas compare against.
///
/// `source_query` is resolved once per pass and never changes; properties
/// are kept in first-registered order because generated column ordering
/// depends on it.
#[derive(Debug, Clone)]
pub struct DataSource {
    identifier: String,
    source_query: String,
    properties: Vec<Property>,
}

impl DataSource {
    pub fn new(identifier: impl Into<String>, source_query: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            source_query: source_query.into(),
            properties: Vec::new(),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn source_query(&self) -> &str {
        &self.source_query
    }

    /// Tracked columns in first-registered order
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name() == name)
    }

    /// Look up a property by name, registering it on first sight.
    pub fn property_mut(&mut self, name: &str) -> &mut Property {
        let index = match self.properties.iter().position(|p| p.name() == name) {
            Some(index) => index,
            None => {
                self.properties.push(Property::new(name));
                self.properties.len() - 1
            }
        };
        &mut self.properties[index]
    }

    /// The column best suited as the crosstab pivot axis: maximum
    /// [`Property::relevance`], with the first-registered property winning
    /// ties. Returns `None` when no column has been referenced.
    ///
    /// Pure over the property list; the compiler invokes it once per source
    /// and caches the result in its own scope.
    pub fn most_relevant_property(&self) -> Option<&Property> {
        let mut best: Option<&Property> = None;
        for property in &self.properties {
            // strict greater-than keeps the earlier property on a tie
            if best.map_or(true, |b| property.relevance() > b.relevance()) {
                best = Some(property);
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn source_with(properties: &[(&str, &[&str], u32)]) -> DataSource {
        let mut source = DataSource::new("Table_Gas", "select * from gas");
        for (name, values, usages) in properties {
            let property = source.property_mut(name);
            for value in *values {
                property.add_value(value);
            }
            // pad usage count with repeats of the first value
            for _ in values.len() as u32..*usages {
                property.add_value(values[0]);
            }
        }
        source
    }

    #[test]
    fn test_property_mut_registers_once() {
        let mut source = DataSource::new("Table_Gas", "select * from gas");
        source.property_mut("hub").add_value("TTF");
        source.property_mut("hub").add_value("NCG");
        source.property_mut("market").add_value("spot");

        assert_eq!(source.properties().len(), 2);
        assert_eq!(source.property("hub").unwrap().usages(), 2);
    }

    #[test]
    fn test_most_relevant_property_prefers_higher_score() {
        // A: 3 usages x 2 values = 6, B: 4 usages x 2 values = 8
        let source = source_with(&[("a", &["x", "y"], 3), ("b", &["p", "q"], 4)]);
        assert_eq!(source.most_relevant_property().unwrap().name(), "b");
    }

    #[test]
    fn test_most_relevant_property_tie_breaks_first_registered() {
        let source = source_with(&[("a", &["x", "y"], 2), ("b", &["p", "q"], 2)]);
        assert_eq!(source.most_relevant_property().unwrap().name(), "a");
    }

    #[test]
    fn test_most_relevant_property_empty() {
        let source = DataSource::new("Table_Gas", "select * from gas");
        assert!(source.most_relevant_property().is_none());
    }
}
