//! Per-column usage statistics

/// One column of an external table, tracking every literal the formulas
/// compare against it and how often it is referenced.
///
/// Mutated only while parsing; read-only once compilation starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    name: String,
    values: Vec<String>,
    usages: u32,
}

impl Property {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
            usages: 0,
        }
    }

    /// Record one comparison against this column. A repeated literal bumps
    /// the usage count but not the value list, so `usages >= values.len()`
    /// always holds.
    pub fn add_value(&mut self, value: &str) {
        self.usages += 1;
        if !self.values.iter().any(|v| v == value) {
            self.values.push(value.to_string());
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Distinct literals in first-seen order. The order is part of the
    /// output contract: crosstab columns are emitted in it.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn usages(&self) -> u32 {
        self.usages
    }

    /// Pivot-axis score: columns referenced often and with high value
    /// variety make the best crosstab axis.
    pub fn relevance(&self) -> u64 {
        u64::from(self.usages) * self.values.len() as u64
    }
}
