//! SUMIFS formula parser
//!
//! A single left-to-right walk over each formula's argument list: the first
//! argument is always the sum range, a bracketed `identifier[property]`
//! reference opens a pending criteria range, and a bare literal closes it
//! into a [`Condition`]. Anything else is a parse inconsistency and fails
//! the pass rather than being guessed at.

use lazy_regex::regex;
use modelsql_core::{
    Argument, Condition, ConnectionCatalog, FsQueryCache, SourceRegistry, SumIfRule,
};

use crate::error::{FormulaError, FormulaResult};

/// Result of one parsing pass: the data sources discovered, in first-seen
/// order, and the aggregation rules, in formula order.
#[derive(Debug)]
pub struct ParseOutput {
    pub registry: SourceRegistry,
    pub rules: Vec<SumIfRule>,
}

/// Parse one spreadsheet row of formulas.
///
/// `formulas` holds the raw cell texts in column order; `catalog` maps
/// connection identifiers to their raw query text; `model_name` keys the
/// durable query cache. Cells that are blank, hold static values, or
/// reference no known connection are skipped. A cell that mentions a known
/// connection but is not a recognized `SUMIFS` call fails the whole pass.
pub fn parse_formulas(
    formulas: &[String],
    catalog: &ConnectionCatalog,
    model_name: &str,
    cache: &FsQueryCache,
) -> FormulaResult<ParseOutput> {
    let mut registry = SourceRegistry::new();
    let mut rules = Vec::new();

    for (index, raw) in formulas.iter().enumerate() {
        let formula = normalize(raw);

        let Some(captures) = regex!(r"=SUMIFS\((.*)\)(.*)$").captures(&formula) else {
            if catalog.mentions_known_identifier(&formula) {
                return Err(FormulaError::Unsupported { index, formula });
            }
            continue;
        };

        let body = &captures[1];
        let suffix = &captures[2];
        let multipliers = if suffix.starts_with('*') {
            suffix.to_string()
        } else {
            String::new()
        };

        let arguments = split_top_level(body);
        let (first, rest) = match arguments.split_first() {
            Some(split) => split,
            None => {
                return Err(FormulaError::MalformedArgument {
                    index,
                    argument: body.to_string(),
                })
            }
        };

        // The first argument is the sum range: identifier[property].
        let parts = argument_parts(first);
        let [identifier, property_name] = parts.as_slice() else {
            return Err(FormulaError::MalformedArgument {
                index,
                argument: first.clone(),
            });
        };
        registry.resolve_or_insert(identifier, catalog, cache, model_name)?;
        let source = identifier.clone();
        let sum_argument = Argument::new(identifier.clone(), property_name.clone());

        let mut conditions: Vec<Condition> = Vec::new();
        let mut pending = Argument::unbound();

        for argument in rest {
            let parts = argument_parts(argument);
            match parts.as_slice() {
                // A criteria range: remember it for the literal that follows.
                [identifier, property_name] => {
                    registry.resolve_or_insert(identifier, catalog, cache, model_name)?;
                    pending = Argument::new(identifier.clone(), property_name.clone());
                }
                // A literal: close a condition against the pending range and
                // record the comparison in that source's property statistics.
                [literal] => {
                    if pending.is_unbound() {
                        return Err(FormulaError::MalformedArgument {
                            index,
                            argument: argument.clone(),
                        });
                    }
                    let data_source =
                        registry.resolve_or_insert(&pending.identifier, catalog, cache, model_name)?;
                    data_source
                        .property_mut(&pending.property_name)
                        .add_value(literal);
                    conditions.push(Condition::new(pending.clone(), literal.clone()));
                }
                _ => {
                    return Err(FormulaError::MalformedArgument {
                        index,
                        argument: argument.clone(),
                    })
                }
            }
        }

        rules.push(SumIfRule {
            source,
            sum_argument,
            conditions,
            column_index: index,
            multipliers,
        });
    }

    Ok(ParseOutput { registry, rules })
}

/// Rewrite a raw cell text into the form the tokenizer expects: absolute
/// cell references become the `date` token, and structured-table
/// decorations (`[[#All],`, `[1]`, `!`, doubled brackets) are stripped.
fn normalize(formula: &str) -> String {
    let formula =
        regex!(r"[A-Za-z_][A-Za-z0-9_]*!\$[A-Z]{1,3}\$?[0-9]+").replace_all(formula, "date");
    formula
        .replace("[[#All],", "")
        .replace("]]", "]")
        .replace("[1]", "")
        .replace('!', "")
}

/// Split a SUMIFS argument list on commas outside quotes and brackets.
fn split_top_level(body: &str) -> Vec<String> {
    let mut arguments = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut in_quotes = false;

    for ch in body.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
            '[' | '(' if !in_quotes => {
                depth += 1;
                current.push(ch);
            }
            ']' | ')' if !in_quotes => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            ',' if !in_quotes && depth == 0 => {
                arguments.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    arguments.push(current);
    arguments
}

/// Extract the meaningful tokens of one argument, trimmed and unquoted:
/// `T[hub]` → `["T", "hub"]`, ` "TTF"` → `["TTF"]`.
fn argument_parts(argument: &str) -> Vec<String> {
    regex!(r#"[A-Za-z_"0-9 \-]+"#)
        .find_iter(argument)
        .map(|m| m.as_str().trim().replace('"', ""))
        .filter(|token| !token.is_empty())
        .collect()
}
