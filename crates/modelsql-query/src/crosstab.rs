//! Tall-to-wide pivot generation
//!
//! A source tracking several columns is materialized through the
//! database's `crosstab(row_query, category_query)` construct: the distinct
//! values of the pivot column fan out into one numeric output column each,
//! filled from the source's `value` column. Row identity is the date plus
//! any tracked columns that are neither the pivot nor `value`.

use modelsql_core::{DataSource, Property};

use crate::text::{indent_with_tabs, quote_literal};

/// Generate the `crosstab(...)` sub-query for `source`, pivoting on `pivot`.
///
/// `pivot` must be one of the source's tracked properties; the compiler
/// picks it once per source via [`DataSource::most_relevant_property`].
pub fn generate_cross_tab(source: &DataSource, pivot: &Property) -> String {
    let pivot_name = pivot.name();

    let extra_properties: Vec<&str> = source
        .properties()
        .iter()
        .map(Property::name)
        .filter(|name| *name != "value" && *name != pivot_name && *name != "date")
        .collect();

    // Row identity: bare date, or date concatenated with the extra columns.
    let mut row_query = if extra_properties.is_empty() {
        String::from("select date as id, ")
    } else {
        format!("select CONCAT(date, {}) as id, ", extra_properties.join(", "))
    };
    row_query.push_str("date, ");
    for property_name in &extra_properties {
        row_query.push_str(property_name);
        row_query.push_str(", ");
    }
    row_query.push_str(&format!(
        "{pivot_name}, value\nfrom (\n{}\n) m order by id",
        indent_with_tabs(source.source_query(), 1)
    ));

    let categories: Vec<String> = pivot
        .values()
        .iter()
        .map(|value| format!("('{value}')"))
        .collect();
    let category_query = format!(
        "select {pivot_name} from (values{}) b({pivot_name})",
        categories.join(",")
    );

    let mut columns = String::from("\"id\" varchar,\n\"date\" timestamp without time zone,\n");
    for property_name in &extra_properties {
        columns.push_str(&format!("\"{property_name}\" varchar,\n"));
    }
    let numeric_columns: Vec<String> = pivot
        .values()
        .iter()
        .map(|value| format!("\"{value}\" numeric"))
        .collect();
    columns.push_str(&numeric_columns.join(",\n"));

    format!(
        "select * from crosstab(\n{},\n{}) \nas ct(\n{}\n)",
        indent_with_tabs(&quote_literal(&row_query), 1),
        indent_with_tabs(&quote_literal(&category_query), 1),
        indent_with_tabs(&columns, 1)
    )
}
