//! Argument and condition value types

/// A reference to one column of one external table,
/// e.g. `Table_External_Data[curve_name]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Argument {
    /// Name of the external table
    pub identifier: String,
    /// Column of that table
    pub property_name: String,
}

impl Argument {
    pub fn new(identifier: impl Into<String>, property_name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            property_name: property_name.into(),
        }
    }

    /// Sentinel meaning "no criteria range bound yet"
    pub fn unbound() -> Self {
        Self::default()
    }

    pub fn is_unbound(&self) -> bool {
        self.identifier.is_empty() && self.property_name.is_empty()
    }
}

/// One equality test from a formula: a criteria range paired with a
/// literal, e.g. `Table_External_Data[curve_name], "exit"`.
///
/// Values are always strings, stored with the surrounding quotes stripped.
/// No other comparison operator exists in the supported formula dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub argument: Argument,
    pub value: String,
}

impl Condition {
    pub fn new(argument: Argument, value: impl Into<String>) -> Self {
        Self {
            argument,
            value: value.into(),
        }
    }
}
