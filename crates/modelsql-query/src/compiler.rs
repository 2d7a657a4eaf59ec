//! Aggregation-rule SQL compiler
//!
//! Assembles the final statement: one CTE per data source in first-seen
//! order, a synthetic one-day-step date spine, and one left join per rule
//! onto that spine. Identical inputs produce byte-identical SQL.

use ahash::AHashMap;
use chrono::NaiveDate;
use modelsql_core::{Property, SourceRegistry, SumIfRule};

use crate::crosstab::generate_cross_tab;
use crate::error::{QueryError, QueryResult};
use crate::text::{escape_single_quotes, indent_with_tabs};

/// Compile parsed rules into one executable SQL statement covering the
/// date window `begin..=end` (inclusive, one row per day).
///
/// Each rule's value expression is aliased to
/// `column_names[rule.column_index]`; the date spine is selected as the
/// `"Date"` column.
pub fn generate_query(
    registry: &SourceRegistry,
    rules: &[SumIfRule],
    column_names: &[String],
    begin: NaiveDate,
    end: NaiveDate,
) -> QueryResult<String> {
    // Pivot choice per source, computed once for the whole compilation.
    let pivots: AHashMap<&str, Option<&Property>> = registry
        .iter()
        .map(|source| (source.identifier(), source.most_relevant_property()))
        .collect();

    let mut query = String::from("with ");
    for source in registry.iter() {
        let pivot = pivots.get(source.identifier()).copied().flatten();
        let source_sql = match pivot {
            // a single tracked column needs no pivoting
            Some(pivot) if source.properties().len() > 1 => {
                tracing::info!("generating crosstab query for {}", source.identifier());
                generate_cross_tab(source, pivot)
            }
            _ => {
                tracing::info!("using unmodified query for {}", source.identifier());
                source.source_query().to_string()
            }
        };
        query.push_str(&format!(
            "\n{} as (\n{}\n),",
            source.identifier(),
            indent_with_tabs(&source_sql, 1)
        ));
    }

    query.push_str(&format!(
        "\ndates as (select * from generate_series('{} 00:00:00'::timestamp, '{} 00:00:00'::timestamp, '1 day'::interval) date)\n",
        begin.format("%Y-%m-%d"),
        end.format("%Y-%m-%d")
    ));

    let mut select = String::from("select \n\tdates.date as \"Date\",\n");
    let mut joins = String::new();

    for (rule_index, rule) in rules.iter().enumerate() {
        let source = registry
            .get(&rule.source)
            .ok_or_else(|| QueryError::UnknownSource(rule.source.clone()))?;
        let header = column_names
            .get(rule.column_index)
            .ok_or(QueryError::MissingHeader(rule.column_index))?;

        let pivot_name = pivots
            .get(source.identifier())
            .copied()
            .flatten()
            .map(Property::name);

        // fresh aliases per rule, so one source can be joined many times
        let inner_alias = format!("t{rule_index}");
        let join_alias = format!("j{rule_index}");

        // A condition on the pivot column names a crosstab-generated
        // column; the rest filter rows. Date conditions are satisfied by
        // the join itself and never become `where` clauses.
        let pivot_condition = rule
            .conditions
            .iter()
            .find(|condition| Some(condition.argument.property_name.as_str()) == pivot_name);
        let other_conditions: Vec<_> = rule
            .conditions
            .iter()
            .filter(|condition| {
                let name = condition.argument.property_name.as_str();
                Some(name) != pivot_name && name != "date"
            })
            .collect();

        let selected_column = match pivot_condition {
            Some(condition) => condition.value.as_str(),
            None => "value",
        };

        joins.push_str(&format!(
            "left join (\n\tselect \"{selected_column}\", date\n\tfrom {} {inner_alias}",
            rule.source
        ));
        if !other_conditions.is_empty() {
            let filters: Vec<String> = other_conditions
                .iter()
                .map(|condition| {
                    format!(
                        "{inner_alias}.{}='{}'",
                        condition.argument.property_name,
                        escape_single_quotes(&condition.value)
                    )
                })
                .collect();
            joins.push_str(&format!("\n\twhere {}", filters.join(" and ")));
        }
        joins.push_str(&format!("\n) {join_alias} on {join_alias}.date=dates.date\n"));

        select.push_str(&format!(
            "\t{join_alias}.\"{selected_column}\"{} as \"{header}\"",
            rule.multipliers
        ));
        if rule_index + 1 != rules.len() {
            select.push_str(",\n");
        }
    }

    Ok(format!("{query}\n{select}\n from dates\n{joins}"))
}
