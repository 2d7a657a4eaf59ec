//! Parsed aggregation rules

use crate::argument::{Argument, Condition};

/// One recognized `SUMIFS(sum_range, crit_range1, crit1, ...)*a*b` formula,
/// bound to the data source named by its sum range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SumIfRule {
    /// Identifier of the data source the sum range refers to
    pub source: String,
    /// The sum range itself, as `identifier[property]`
    pub sum_argument: Argument,
    /// Equality filters in formula order
    pub conditions: Vec<Condition>,
    /// Index of the spreadsheet column holding the formula; selects the
    /// output column header at compile time
    pub column_index: usize,
    /// Trailing arithmetic suffix (e.g. `*1000`), appended verbatim to the
    /// compiled expression, never parsed
    pub multipliers: String,
}
