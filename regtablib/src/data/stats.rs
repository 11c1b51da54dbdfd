//! Whole-model summary statistics.
//!
//! These are the optional rows printed below the coefficients: sample size,
//! degrees of freedom, F-statistic, information criteria and R².

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::RegtabError;
use crate::Result;

/// A summary statistic that can be appended to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryStat {
    /// Number of observations
    Nobs,
    /// Model degrees of freedom
    DfModel,
    /// Residual degrees of freedom
    DfResid,
    /// F-statistic
    FValue,
    /// Akaike information criterion
    Aic,
    /// Bayesian information criterion
    Bic,
    /// Coefficient of determination
    RSquared,
    /// Adjusted R²
    RSquaredAdj,
}

impl SummaryStat {
    /// All statistics, in the order they are usually reported.
    pub const ALL: [SummaryStat; 8] = [
        SummaryStat::Nobs,
        SummaryStat::DfModel,
        SummaryStat::DfResid,
        SummaryStat::FValue,
        SummaryStat::Aic,
        SummaryStat::Bic,
        SummaryStat::RSquared,
        SummaryStat::RSquaredAdj,
    ];

    /// Short name accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            SummaryStat::Nobs => "n",
            SummaryStat::DfModel => "df_model",
            SummaryStat::DfResid => "df",
            SummaryStat::FValue => "f",
            SummaryStat::Aic => "aic",
            SummaryStat::Bic => "bic",
            SummaryStat::RSquared => "r2",
            SummaryStat::RSquaredAdj => "adj_r2",
        }
    }

    /// Short names of every statistic, comma-separated.
    pub fn names() -> String {
        SummaryStat::ALL
            .iter()
            .map(SummaryStat::name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Row label used in the LaTeX output.
    pub fn label(&self) -> &'static str {
        match self {
            SummaryStat::Nobs => "$N$",
            SummaryStat::DfModel => "df (model)",
            SummaryStat::DfResid => "df (resid.)",
            SummaryStat::FValue => "$F$",
            SummaryStat::Aic => "AIC",
            SummaryStat::Bic => "BIC",
            SummaryStat::RSquared => "$R^2$",
            SummaryStat::RSquaredAdj => "Adj. $R^2$",
        }
    }

    /// Counts are printed as integers, everything else with the table's digits.
    pub fn is_count(&self) -> bool {
        matches!(
            self,
            SummaryStat::Nobs | SummaryStat::DfModel | SummaryStat::DfResid
        )
    }

    /// Parse a comma-separated list such as `"n, aic, r2"`, keeping its order.
    ///
    /// Empty entries are skipped; duplicates are kept only once.
    pub fn parse_list(list: &str) -> Result<Vec<SummaryStat>> {
        let mut stats = Vec::new();
        for name in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let stat = name.parse::<SummaryStat>()?;
            if !stats.contains(&stat) {
                stats.push(stat);
            }
        }
        Ok(stats)
    }
}

impl FromStr for SummaryStat {
    type Err = RegtabError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "n" | "nobs" | "obs" => Ok(SummaryStat::Nobs),
            "df" | "df_resid" => Ok(SummaryStat::DfResid),
            "df_model" => Ok(SummaryStat::DfModel),
            "f" | "fvalue" | "fstat" | "f_stat" => Ok(SummaryStat::FValue),
            "aic" => Ok(SummaryStat::Aic),
            "bic" => Ok(SummaryStat::Bic),
            "r2" | "rsquared" | "r_squared" => Ok(SummaryStat::RSquared),
            "adj_r2" | "rsquared_adj" | "adj_rsquared" => Ok(SummaryStat::RSquaredAdj),
            _ => Err(RegtabError::UnsupportedStatistic(s.to_string())),
        }
    }
}
