//! Table-ready data structures for regression output.
//!
//! This module provides `RegressionTable`, a presentation-ready structure
//! holding every cell as a string, and its LaTeX serialization.
//!
//! The data flow is:
//! 1. Raw Data (FittedModel implementations)
//! 2. AlignedModels (union of variables, renamed)
//! 3. RegressionTable (formatted strings for display)
//!
//! RegressionTable is a pure presentation layer - it only formats data, no
//! alignment or validation logic.

use serde::{Deserialize, Serialize};

use crate::data::model::{Estimate, FittedModel};
use crate::query::aligned::AlignedModels;
use crate::query::options::{Parens, TableOptions};

use super::latex;

/// Marker appended to significant parenthetical values.
pub const SIGNIFICANCE_MARKER: &str = "$^*$";

/// A single row in the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Row label (variable name, statistic name, or empty for parentheticals)
    pub label: String,
    /// One formatted cell per model (empty string for blanks)
    pub values: Vec<String>,
}

/// Table-ready regression data.
///
/// Every number is already formatted; serialization only adds LaTeX markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionTable {
    /// Table caption
    pub caption: String,
    /// LaTeX label
    pub label: String,
    /// Wrap the tabular in a center environment
    pub center: bool,
    /// Column specification (e.g. "c c c")
    pub column_spec: String,
    /// Model column titles
    pub headers: Vec<String>,
    /// Coefficient and parenthetical rows, two per variable
    pub rows: Vec<TableRow>,
    /// Summary statistic rows
    pub stat_rows: Vec<TableRow>,
    /// Footer notes
    pub legend: Vec<String>,
    /// Total number of columns, label column included
    pub column_count: usize,
}

impl RegressionTable {
    /// Build a table from aligned estimates.
    ///
    /// `models` supplies column titles and summary statistics and must be the
    /// same slice the alignment was built from.
    pub fn from_aligned<M: FittedModel>(
        aligned: &AlignedModels,
        models: &[M],
        options: &TableOptions,
    ) -> Self {
        let name = |text: &str| {
            if options.escape {
                latex::escape(text)
            } else {
                text.to_string()
            }
        };

        let headers = build_headers(models, options)
            .iter()
            .map(|h| name(h))
            .collect();

        let mut rows = Vec::with_capacity(aligned.rows.len() * 2);
        for aligned_row in &aligned.rows {
            rows.push(TableRow {
                label: name(&aligned_row.label),
                values: aligned_row
                    .cells
                    .iter()
                    .map(|cell| format_coef(cell.as_ref(), options))
                    .collect(),
            });
            rows.push(TableRow {
                label: String::new(),
                values: aligned_row
                    .cells
                    .iter()
                    .map(|cell| format_parens(cell.as_ref(), options))
                    .collect(),
            });
        }

        let stat_rows = options
            .summary_stats
            .iter()
            .map(|stat| TableRow {
                label: stat.label().to_string(),
                values: models
                    .iter()
                    .map(|model| match model.statistic(*stat) {
                        Some(value) if value.is_finite() && stat.is_count() => {
                            latex::format_count(value)
                        }
                        Some(value) if value.is_finite() => {
                            latex::format_number(value, options.digits)
                        }
                        _ => String::new(),
                    })
                    .collect(),
            })
            .collect();

        let column_count = aligned.model_count + 1;
        let mut legend = vec![latex::multicolumn_note(
            column_count,
            options.parens.legend(),
        )];
        if options.stars {
            legend.push(latex::multicolumn_note(
                column_count,
                &format!(
                    r"{} indicates significance at $p \le$ {}",
                    SIGNIFICANCE_MARKER, options.significance
                ),
            ));
        }

        tracing::debug!(
            rows = rows.len(),
            stat_rows = options.summary_stats.len(),
            "built regression table"
        );

        RegressionTable {
            caption: options.caption.clone(),
            label: options.label.clone(),
            center: options.center,
            column_spec: latex::column_spec(aligned.model_count),
            headers,
            rows,
            stat_rows,
            legend,
            column_count,
        }
    }

    /// Opening of the table environment through the model-name row.
    pub fn header(&self) -> String {
        let mut out = String::new();
        out.push_str("\\begin{table}\n");
        out.push_str(&format!("\\caption{{{}}}\n", self.caption));
        out.push_str(&format!("\\label{{{}}}\n", self.label));
        if self.center {
            out.push_str("\\begin{center}\n");
        }
        out.push_str(&format!("\\begin{{tabular}}{{{}}}\n", self.column_spec));
        out.push_str("\\hline\\hline\n");
        out.push_str(&latex::row("", &self.headers));
        out.push('\n');
        out.push_str("\\hline\n");
        out
    }

    /// Coefficient rows, followed by the summary statistics block if any.
    pub fn body(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            out.push_str(&latex::row(&row.label, &row.values));
            out.push('\n');
        }
        if !self.stat_rows.is_empty() {
            out.push_str("\\hline\n");
            for row in &self.stat_rows {
                out.push_str(&latex::row(&row.label, &row.values));
                out.push('\n');
            }
        }
        out
    }

    /// Legend and closing of the table environment.
    pub fn footer(&self) -> String {
        let mut out = String::new();
        out.push_str("\\hline\n");
        out.push_str(&self.legend.join(" \\\\\n"));
        out.push('\n');
        out.push_str("\\end{tabular}\n");
        if self.center {
            out.push_str("\\end{center}\n");
        }
        out.push_str("\\end{table}\n");
        out
    }

    /// The complete document fragment: header, body and footer.
    pub fn to_latex(&self) -> String {
        let mut out = self.header();
        out.push_str(&self.body());
        out.push_str(&self.footer());
        out
    }
}

/// Column titles: explicit names, then names carried by the models, then "Model N".
fn build_headers<M: FittedModel>(models: &[M], options: &TableOptions) -> Vec<String> {
    if let Some(names) = &options.model_names {
        return names.clone();
    }
    models
        .iter()
        .enumerate()
        .map(|(i, model)| {
            model
                .name()
                .map(str::to_string)
                .unwrap_or_else(|| format!("Model {}", i + 1))
        })
        .collect()
}

fn format_coef(cell: Option<&Estimate>, options: &TableOptions) -> String {
    cell.map(|e| latex::format_number(e.coef, options.digits))
        .unwrap_or_default()
}

/// Parenthetical cell with its significance marker.
fn format_parens(cell: Option<&Estimate>, options: &TableOptions) -> String {
    let Some(estimate) = cell else {
        return String::new();
    };

    let tested_p = match options.parens {
        Parens::PValueOneTailed => estimate.p_value.map(|p| p / 2.0),
        _ => estimate.p_value,
    };
    let shown = match options.parens {
        Parens::StdErr => estimate.std_err,
        Parens::PValue | Parens::PValueOneTailed => tested_p,
    };

    let Some(value) = shown.filter(|v| v.is_finite()) else {
        return String::new();
    };

    // Tested at display precision so a printed (0.05) agrees with the legend
    let mut out = format!("({})", latex::format_number(value, options.digits));
    if options.stars
        && tested_p.is_some_and(|p| latex::round_to(p, options.digits) <= options.significance)
    {
        out.push_str(SIGNIFICANCE_MARKER);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::ModelResults;
    use crate::data::stats::SummaryStat;

    fn sample_models() -> Vec<ModelResults> {
        vec![
            ModelResults::new()
                .variable("const", 1.234, 0.1, 0.001)
                .variable("x_1", 0.5, 0.2, 0.08)
                .stat(SummaryStat::Nobs, 100.0)
                .stat(SummaryStat::RSquared, 0.4567),
            ModelResults::new()
                .variable("const", 0.9, 0.15, 0.2)
                .variable("x_2", -0.3, 0.05, 0.0001)
                .stat(SummaryStat::Nobs, 80.0),
        ]
    }

    fn build(options: &TableOptions) -> RegressionTable {
        let models = sample_models();
        let aligned = AlignedModels::from_models(&models).unwrap();
        RegressionTable::from_aligned(&aligned, &models, options)
    }

    #[test]
    fn test_default_headers() {
        let table = build(&TableOptions::default());
        assert_eq!(table.headers, vec!["Model 1", "Model 2"]);
        assert_eq!(table.column_count, 3);
        assert_eq!(table.column_spec, "c c c");
    }

    #[test]
    fn test_model_names_from_models() {
        let models = vec![
            ModelResults::new().named("OLS").coefficient("x", 1.0),
            ModelResults::new().coefficient("x", 2.0),
        ];
        let aligned = AlignedModels::from_models(&models).unwrap();
        let table = RegressionTable::from_aligned(&aligned, &models, &TableOptions::default());
        assert_eq!(table.headers, vec!["OLS", "Model 2"]);
    }

    #[test]
    fn test_two_rows_per_variable() {
        let table = build(&TableOptions::default());
        assert_eq!(table.rows.len(), 6);

        assert_eq!(table.rows[0].label, "const");
        assert_eq!(table.rows[0].values, vec!["1.23", "0.90"]);
        assert_eq!(table.rows[1].label, "");
        assert_eq!(table.rows[1].values, vec!["(0.10)$^*$", "(0.15)"]);
    }

    #[test]
    fn test_blank_cells_for_missing_variables() {
        let table = build(&TableOptions::default());
        // x_1 is only in model 1
        assert_eq!(table.rows[2].values, vec!["0.50", ""]);
        assert_eq!(table.rows[3].values, vec!["(0.20)", ""]);
        // x_2 is only in model 2
        assert_eq!(table.rows[4].values, vec!["", "-0.30"]);
        assert_eq!(table.rows[5].values, vec!["", "(0.05)$^*$"]);
    }

    #[test]
    fn test_names_escaped() {
        let table = build(&TableOptions::default());
        assert_eq!(table.rows[2].label, r"x\_1");

        let raw = build(&TableOptions::default().escape(false));
        assert_eq!(raw.rows[2].label, "x_1");
    }

    #[test]
    fn test_pvalue_parens() {
        let table = build(&TableOptions::default().parens(Parens::PValue));
        assert_eq!(table.rows[1].values, vec!["(0.00)$^*$", "(0.20)"]);
        assert_eq!(table.rows[3].values[0], "(0.08)");
    }

    #[test]
    fn test_one_tailed_halves_pvalue() {
        let table = build(&TableOptions::default().parens(Parens::PValueOneTailed));
        // 0.08 / 2 = 0.04, now significant at 0.05
        assert_eq!(table.rows[3].values[0], "(0.04)$^*$");
        assert_eq!(table.rows[1].values[1], "(0.10)");
    }

    #[test]
    fn test_stars_disabled() {
        let table = build(&TableOptions::default().stars(false));
        assert_eq!(table.rows[1].values[0], "(0.10)");
        assert_eq!(table.legend.len(), 1);
    }

    #[test]
    fn test_custom_significance() {
        let table = build(&TableOptions::default().significance(0.1));
        assert_eq!(table.rows[3].values[0], "(0.20)$^*$");
        assert!(table.legend[1].contains("$p \\le$ 0.1"));
    }

    #[test]
    fn test_digits() {
        let table = build(&TableOptions::default().digits(3));
        assert_eq!(table.rows[0].values[0], "1.234");
        assert_eq!(table.rows[1].values[0], "(0.100)$^*$");
    }

    #[test]
    fn test_missing_std_err_is_blank() {
        let models = vec![ModelResults::new().coefficient("x", 1.0)];
        let aligned = AlignedModels::from_models(&models).unwrap();
        let table = RegressionTable::from_aligned(&aligned, &models, &TableOptions::default());
        assert_eq!(table.rows[0].values, vec!["1.00"]);
        assert_eq!(table.rows[1].values, vec![""]);
    }

    #[test]
    fn test_summary_stat_rows() {
        let stats = vec![SummaryStat::Nobs, SummaryStat::RSquared];
        let table = build(&TableOptions::default().summary_stats(stats));

        assert_eq!(table.stat_rows.len(), 2);
        assert_eq!(table.stat_rows[0].label, "$N$");
        assert_eq!(table.stat_rows[0].values, vec!["100", "80"]);
        assert_eq!(table.stat_rows[1].label, "$R^2$");
        assert_eq!(table.stat_rows[1].values, vec!["0.46", ""]);
    }

    fn single_model_table(model: ModelResults, options: &TableOptions) -> RegressionTable {
        let models = vec![model];
        let aligned = AlignedModels::from_models(&models).unwrap();
        RegressionTable::from_aligned(&aligned, &models, options)
    }

    #[test]
    fn test_marker_uses_printed_pvalue() {
        let model = ModelResults::new().variable("x", 1.0, 0.3, 0.054);
        let table = single_model_table(model, &TableOptions::default().parens(Parens::PValue));
        // 0.054 prints as 0.05, which the legend calls significant
        assert_eq!(table.rows[1].values, vec!["(0.05)$^*$"]);
    }

    #[test]
    fn test_marker_uses_printed_one_tailed_pvalue() {
        let model = ModelResults::new().variable("x", 1.0, 0.3, 0.108);
        let options = TableOptions::default().parens(Parens::PValueOneTailed);
        let table = single_model_table(model, &options);
        assert_eq!(table.rows[1].values, vec!["(0.05)$^*$"]);
    }

    #[test]
    fn test_marker_respects_digits_when_rounding() {
        let model = ModelResults::new().variable("x", 1.0, 0.3, 0.054);
        let options = TableOptions::default().parens(Parens::PValue).digits(3);
        let table = single_model_table(model, &options);
        assert_eq!(table.rows[1].values, vec!["(0.054)"]);
    }

    #[test]
    fn test_non_finite_statistic_is_blank() {
        let model = ModelResults::new()
            .variable("x", 1.0, 0.3, 0.01)
            .stat(SummaryStat::Aic, f64::NAN)
            .stat(SummaryStat::Nobs, f64::INFINITY);
        let options =
            TableOptions::default().summary_stats(vec![SummaryStat::Aic, SummaryStat::Nobs]);
        let table = single_model_table(model, &options);
        assert_eq!(table.stat_rows[0].values, vec![""]);
        assert_eq!(table.stat_rows[1].values, vec![""]);
    }

    #[test]
    fn test_non_finite_std_err_is_blank() {
        let mut model = ModelResults::new().variable("x", 1.0, 0.3, 0.01);
        model.bse.insert("x".to_string(), f64::INFINITY);
        let table = single_model_table(model, &TableOptions::default());
        assert_eq!(table.rows[0].values, vec!["1.00"]);
        assert_eq!(table.rows[1].values, vec![""]);
    }

    #[test]
    fn test_header_centered() {
        let table = build(&TableOptions::default().caption("OLS").label("tab:ols"));
        let header = table.header();
        assert!(header.starts_with("\\begin{table}\n\\caption{OLS}\n\\label{tab:ols}\n"));
        assert!(header.contains("\\begin{center}\n\\begin{tabular}{c c c}\n"));
        assert!(header.contains(" & Model 1 & Model 2 \\\\\n"));
        assert!(header.ends_with("\\hline\n"));
    }

    #[test]
    fn test_not_centered() {
        let table = build(&TableOptions::default().center(false));
        let latex = table.to_latex();
        assert!(!latex.contains("center"));
        assert!(latex.contains("\\begin{tabular}"));
    }

    #[test]
    fn test_body_with_stats_block() {
        let table = build(&TableOptions::default().summary_stats(vec![SummaryStat::Nobs]));
        let body = table.body();
        assert!(body.starts_with("const & 1.23 & 0.90 \\\\\n"));
        assert!(body.contains("\\hline\n$N$ & 100 & 80 \\\\\n"));
    }

    #[test]
    fn test_body_without_stats_has_no_rule() {
        let table = build(&TableOptions::default());
        assert!(!table.body().contains("\\hline"));
    }

    #[test]
    fn test_footer_legend() {
        let table = build(&TableOptions::default().parens(Parens::PValueOneTailed));
        let footer = table.footer();
        assert!(footer.starts_with("\\hline\n"));
        assert!(footer.contains(
            "\\multicolumn{3}{l}{\\footnotesize{One-tailed $p$ values in parentheses}} \\\\\n"
        ));
        assert!(footer.contains("indicates significance at $p \\le$ 0.05"));
        assert!(footer.ends_with("\\end{tabular}\n\\end{center}\n\\end{table}\n"));
    }

    #[test]
    fn test_to_latex_concatenates_sections() {
        let table = build(&TableOptions::default());
        let expected = format!("{}{}{}", table.header(), table.body(), table.footer());
        assert_eq!(table.to_latex(), expected);
    }
}
