//! Table configuration.
//!
//! This module contains all configuration types that control how the
//! aligned data is turned into a table.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::data::stats::SummaryStat;
use crate::error::RegtabError;
use crate::Result;

/// Largest number of decimal digits accepted.
pub const MAX_DIGITS: usize = 10;

/// Which value is printed in parentheses below each coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Parens {
    /// Standard errors
    #[default]
    #[serde(rename = "se")]
    StdErr,
    /// Two-tailed p-values
    #[serde(rename = "pval")]
    PValue,
    /// One-tailed p-values (half the two-tailed value)
    #[serde(rename = "pval_one")]
    PValueOneTailed,
}

impl Parens {
    /// Footer text explaining the parenthetical values.
    pub fn legend(&self) -> &'static str {
        match self {
            Parens::StdErr => "Standard errors in parentheses",
            Parens::PValue => "$p$ values in parentheses",
            Parens::PValueOneTailed => "One-tailed $p$ values in parentheses",
        }
    }
}

impl FromStr for Parens {
    type Err = RegtabError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "se" | "stderr" | "std_err" => Ok(Parens::StdErr),
            "pval" | "p" | "pvalue" => Ok(Parens::PValue),
            "pval_one" | "one_tailed" | "pvalue_one" => Ok(Parens::PValueOneTailed),
            _ => Err(RegtabError::InvalidParens(s.to_string())),
        }
    }
}

/// How variables are renamed in the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableNames {
    /// Replacement names in the sorted order of the aligned variables.
    /// Must cover every variable.
    Ordered(Vec<String>),
    /// Replacement by original name; unlisted variables keep their name.
    Mapped(BTreeMap<String, String>),
}

/// Options for building a regression table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    /// Table caption
    pub caption: String,
    /// LaTeX label (e.g. `tab:ols`)
    pub label: String,
    /// Column titles; defaults to "Model 1", "Model 2", ...
    pub model_names: Option<Vec<String>>,
    /// Wrap the tabular in a center environment
    pub center: bool,
    /// Value shown in parentheses
    pub parens: Parens,
    /// Mark significant estimates
    pub stars: bool,
    /// Significance threshold for the marker
    pub significance: f64,
    /// Decimal digits for estimates and statistics
    pub digits: usize,
    /// Optional variable renaming
    pub var_names: Option<VariableNames>,
    /// Summary statistic rows, in display order
    pub summary_stats: Vec<SummaryStat>,
    /// Escape LaTeX special characters in names
    pub escape: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            caption: String::new(),
            label: String::new(),
            model_names: None,
            center: true,
            parens: Parens::StdErr,
            stars: true,
            significance: 0.05,
            digits: 2,
            var_names: None,
            summary_stats: Vec::new(),
            escape: true,
        }
    }
}

impl TableOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a JSON file. Missing fields take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| RegtabError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| RegtabError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Builder: set caption
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    /// Builder: set label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Builder: set column titles
    pub fn model_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.model_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Builder: set centering
    pub fn center(mut self, center: bool) -> Self {
        self.center = center;
        self
    }

    /// Builder: set the parenthetical value
    pub fn parens(mut self, parens: Parens) -> Self {
        self.parens = parens;
        self
    }

    /// Builder: enable or disable significance markers
    pub fn stars(mut self, stars: bool) -> Self {
        self.stars = stars;
        self
    }

    /// Builder: set significance threshold
    pub fn significance(mut self, threshold: f64) -> Self {
        self.significance = threshold;
        self
    }

    /// Builder: set decimal digits
    pub fn digits(mut self, digits: usize) -> Self {
        self.digits = digits;
        self
    }

    /// Builder: rename variables positionally (sorted order)
    pub fn var_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.var_names = Some(VariableNames::Ordered(
            names.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Builder: rename a single variable by name
    pub fn rename(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        let mut map = match self.var_names.take() {
            Some(VariableNames::Mapped(map)) => map,
            _ => BTreeMap::new(),
        };
        map.insert(from.into(), to.into());
        self.var_names = Some(VariableNames::Mapped(map));
        self
    }

    /// Builder: set summary statistic rows
    pub fn summary_stats(mut self, stats: Vec<SummaryStat>) -> Self {
        self.summary_stats = stats;
        self
    }

    /// Builder: enable or disable escaping of names
    pub fn escape(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }

    /// Check the options against the number of models in the table.
    ///
    /// Rename checks need the aligned variable set and happen during alignment.
    pub fn validate(&self, model_count: usize) -> Result<()> {
        if model_count == 0 {
            return Err(RegtabError::NoModels);
        }
        if let Some(names) = &self.model_names {
            if names.len() != model_count {
                return Err(RegtabError::ModelNameMismatch {
                    expected: model_count,
                    actual: names.len(),
                });
            }
        }
        if !(self.significance > 0.0 && self.significance < 1.0) {
            return Err(RegtabError::InvalidSignificance(self.significance));
        }
        if self.digits > MAX_DIGITS {
            return Err(RegtabError::InvalidDigits {
                digits: self.digits,
                max: MAX_DIGITS,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let opts = TableOptions::default();
        assert!(opts.center);
        assert!(opts.stars);
        assert!(opts.escape);
        assert_eq!(opts.parens, Parens::StdErr);
        assert_eq!(opts.significance, 0.05);
        assert_eq!(opts.digits, 2);
        assert!(opts.summary_stats.is_empty());
    }

    #[test]
    fn test_parens_from_str() {
        assert_eq!(Parens::from_str("se").unwrap(), Parens::StdErr);
        assert_eq!(Parens::from_str("pval").unwrap(), Parens::PValue);
        assert_eq!(
            Parens::from_str("pval_one").unwrap(),
            Parens::PValueOneTailed
        );
        assert!(matches!(
            Parens::from_str("ci"),
            Err(RegtabError::InvalidParens(_))
        ));
    }

    #[test]
    fn test_rename_builder_accumulates() {
        let opts = TableOptions::new().rename("x1", "Income").rename("x2", "Age");
        match opts.var_names {
            Some(VariableNames::Mapped(map)) => {
                assert_eq!(map.len(), 2);
                assert_eq!(map["x1"], "Income");
            }
            other => panic!("expected mapped names, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_ok() {
        let opts = TableOptions::new().model_names(["A", "B"]);
        assert!(opts.validate(2).is_ok());
    }

    #[test]
    fn test_validate_no_models() {
        assert!(matches!(
            TableOptions::new().validate(0),
            Err(RegtabError::NoModels)
        ));
    }

    #[test]
    fn test_validate_model_name_mismatch() {
        let opts = TableOptions::new().model_names(["A"]);
        assert!(matches!(
            opts.validate(2),
            Err(RegtabError::ModelNameMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_validate_significance_range() {
        assert!(TableOptions::new().significance(0.0).validate(1).is_err());
        assert!(TableOptions::new().significance(1.0).validate(1).is_err());
        assert!(TableOptions::new()
            .significance(f64::NAN)
            .validate(1)
            .is_err());
        assert!(TableOptions::new().significance(0.1).validate(1).is_ok());
    }

    #[test]
    fn test_validate_digits() {
        assert!(TableOptions::new().digits(10).validate(1).is_ok());
        assert!(matches!(
            TableOptions::new().digits(11).validate(1),
            Err(RegtabError::InvalidDigits { digits: 11, .. })
        ));
    }

    #[test]
    fn test_from_file_partial() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"caption": "OLS Results", "parens": "pval_one", "summary_stats": ["nobs", "r_squared"]}}"#
        )
        .unwrap();

        let opts = TableOptions::from_file(file.path()).unwrap();
        assert_eq!(opts.caption, "OLS Results");
        assert_eq!(opts.parens, Parens::PValueOneTailed);
        assert_eq!(
            opts.summary_stats,
            vec![SummaryStat::Nobs, SummaryStat::RSquared]
        );
        // Untouched fields keep defaults
        assert_eq!(opts.digits, 2);
        assert!(opts.center);
    }

    #[test]
    fn test_from_file_var_names() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"var_names": {{"mapped": {{"x1": "Income"}}}}}}"#
        )
        .unwrap();

        let opts = TableOptions::from_file(file.path()).unwrap();
        assert!(matches!(opts.var_names, Some(VariableNames::Mapped(_))));
    }
}
