//! SQL text-assembly helpers

/// Prefix every line of `text` with `num` tabs.
pub(crate) fn indent_with_tabs(text: &str, num: usize) -> String {
    let indent = "\t".repeat(num);
    format!("{indent}{}", text.replace('\n', &format!("\n{indent}")))
}

/// Escape and wrap `text` as a SQL string literal.
///
/// Together with [`escape_single_quotes`] this is the only place literal
/// text is interpolated into generated SQL; formula literals must never
/// reach the output unescaped.
pub(crate) fn quote_literal(text: &str) -> String {
    format!("'{}'", escape_single_quotes(text))
}

/// Double embedded single quotes for safe nesting inside a quoted literal.
pub(crate) fn escape_single_quotes(text: &str) -> String {
    text.replace('\'', "''")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_indent_with_tabs() {
        assert_eq!(indent_with_tabs("a\nb", 1), "\ta\n\tb");
        assert_eq!(indent_with_tabs("a", 2), "\t\ta");
    }

    #[test]
    fn test_quote_literal_doubles_embedded_quotes() {
        assert_eq!(quote_literal("o'brien"), "'o''brien'");
        assert_eq!(quote_literal("plain"), "'plain'");
    }
}
