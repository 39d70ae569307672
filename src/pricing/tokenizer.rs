//! Splits one line of the plan source into cells.
//!
//! A minimal comma-separated dialect: `"` toggles a quoted span and is
//! dropped from the output, commas inside the span do not split, and there
//! is no `""` escape. The toggle is permissive: a quote opens a span whenever
//! the cell is still empty or no span is open, so a quote after leading text
//! still starts quoting. Unterminated quotes run to the end of the line.

/// Tokenizes `line` into trimmed cells. Never fails.
pub fn tokenize_row(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' if current.is_empty() || !in_quotes => in_quotes = true,
            '"' => in_quotes = false,
            ',' if !in_quotes => {
                cells.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    cells.push(current.trim().to_string());

    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_quoted_comma_does_not_split() {
        assert_eq!(tokenize_row(r#"A,"B, C",D"#), vec!["A", "B, C", "D"]);
    }

    #[test]
    fn test_cells_are_trimmed() {
        assert_eq!(tokenize_row("  a ,b  ,  c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_line_is_one_empty_cell() {
        assert_eq!(tokenize_row(""), vec![""]);
        assert_eq!(tokenize_row(",,"), vec!["", "", ""]);
    }

    #[test]
    fn test_quote_after_leading_text_opens_span() {
        assert_eq!(tokenize_row(r#"ab"c,d"e,f"#), vec!["abc,de", "f"]);
    }

    #[test]
    fn test_unterminated_quote_runs_to_end() {
        assert_eq!(tokenize_row(r#"x,"a,b"#), vec!["x", "a,b"]);
    }

    #[test]
    fn test_empty_quoted_cell_keeps_span_open() {
        // The second quote lands on an empty cell, so it re-opens the span.
        assert_eq!(tokenize_row(r#""",x,y"#), vec![",x,y"]);
    }

    #[test]
    fn test_quoted_plan_cell() {
        let cells = tokenize_row(
            r#"🍎 NUTRICIÓN,"Tu plan base en PDF(Menú básico, sin intercambios)","Tu plan flexible""#,
        );
        assert_eq!(
            cells,
            vec![
                "🍎 NUTRICIÓN",
                "Tu plan base en PDF(Menú básico, sin intercambios)",
                "Tu plan flexible",
            ]
        );
    }
}
