//! LaTeX text helpers: escaping, number formatting and tabular rows.

/// Escape characters that have special meaning in LaTeX text mode.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str(r"\textbackslash{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            '~' => out.push_str(r"\textasciitilde{}"),
            '^' => out.push_str(r"\textasciicircum{}"),
            _ => out.push(c),
        }
    }
    out
}

/// Format a value with a fixed number of decimals.
///
/// Values that round to zero print without a sign, so `-0.001` with two
/// digits becomes `0.00` rather than `-0.00`.
pub fn format_number(value: f64, digits: usize) -> String {
    let formatted = format!("{:.*}", digits, value);
    match formatted.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => formatted,
    }
}

/// Round a value to what [`format_number`] prints for it.
pub fn round_to(value: f64, digits: usize) -> f64 {
    format!("{:.*}", digits, value).parse().unwrap_or(value)
}

/// Format a count (observations, degrees of freedom) as an integer.
pub fn format_count(value: f64) -> String {
    format_number(value.round(), 0)
}

/// Column specification for `model_count` models plus the label column.
pub fn column_spec(model_count: usize) -> String {
    vec!["c"; model_count + 1].join(" ")
}

/// A tabular row: `label & cell & cell \\`.
pub fn row(label: &str, cells: &[String]) -> String {
    let mut line = label.to_string();
    for cell in cells {
        line.push_str(" & ");
        line.push_str(cell);
    }
    line.push_str(r" \\");
    line
}

/// A left-aligned footnote spanning `columns` columns.
pub fn multicolumn_note(columns: usize, text: &str) -> String {
    format!(
        r"\multicolumn{{{}}}{{l}}{{\footnotesize{{{}}}}}",
        columns, text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(escape("log_income"), r"log\_income");
        assert_eq!(escape("R&D %"), r"R\&D \%");
        assert_eq!(escape("a^2"), r"a\textasciicircum{}2");
        assert_eq!(escape(r"C:\x"), r"C:\textbackslash{}x");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.5, 2), "0.50");
        assert_eq!(format_number(1.23456, 3), "1.235");
        assert_eq!(format_number(-2.5, 1), "-2.5");
        assert_eq!(format_number(12.0, 0), "12");
    }

    #[test]
    fn test_format_number_negative_zero() {
        assert_eq!(format_number(-0.001, 2), "0.00");
        assert_eq!(format_number(-0.0, 0), "0");
    }

    #[test]
    fn test_round_to_matches_display() {
        assert_eq!(round_to(0.054, 2), 0.05);
        assert_eq!(round_to(0.056, 2), 0.06);
        assert_eq!(round_to(0.0449, 3), 0.045);
        assert!(round_to(f64::NAN, 2).is_nan());
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(150.0), "150");
        assert_eq!(format_count(97.6), "98");
    }

    #[test]
    fn test_column_spec() {
        assert_eq!(column_spec(1), "c c");
        assert_eq!(column_spec(3), "c c c c");
    }

    #[test]
    fn test_row() {
        let cells = vec!["0.50".to_string(), String::new()];
        assert_eq!(row("x1", &cells), r"x1 & 0.50 &  \\");
    }

    #[test]
    fn test_multicolumn_note() {
        assert_eq!(
            multicolumn_note(3, "Standard errors in parentheses"),
            r"\multicolumn{3}{l}{\footnotesize{Standard errors in parentheses}}"
        );
    }
}
