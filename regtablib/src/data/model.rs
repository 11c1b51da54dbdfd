//! Fitted model results.
//!
//! Model fitting happens upstream. This module only defines what regtablib
//! needs to read from a fitted model, via the [`FittedModel`] trait, plus
//! [`ModelResults`], a plain serde type that works for JSON exports.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::stats::SummaryStat;
use crate::error::RegtabError;
use crate::Result;

/// Estimate, standard error and p-value for one variable of one model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// Coefficient estimate
    pub coef: f64,
    /// Standard error, if the model reports one
    pub std_err: Option<f64>,
    /// Two-tailed p-value, if the model reports one
    pub p_value: Option<f64>,
}

impl Estimate {
    /// Create an estimate with no standard error or p-value.
    pub fn new(coef: f64) -> Self {
        Self {
            coef,
            std_err: None,
            p_value: None,
        }
    }

    /// Builder: set standard error
    pub fn with_std_err(mut self, se: f64) -> Self {
        self.std_err = Some(se);
        self
    }

    /// Builder: set p-value
    pub fn with_p_value(mut self, p: f64) -> Self {
        self.p_value = Some(p);
        self
    }
}

/// Read access to a fitted regression model.
///
/// Implement this for the result type of whatever library fit the model.
/// The three series are keyed by variable name; a variable appears in the
/// table if and only if it has a coefficient in [`params`](Self::params).
pub trait FittedModel {
    /// Coefficient estimates by variable name.
    fn params(&self) -> Vec<(String, f64)>;

    /// Standard errors by variable name.
    fn std_errors(&self) -> Vec<(String, f64)>;

    /// Two-tailed p-values by variable name.
    fn p_values(&self) -> Vec<(String, f64)>;

    /// A whole-model statistic, or `None` if the model does not report it.
    fn statistic(&self, stat: SummaryStat) -> Option<f64>;

    /// Column title for this model, if it carries one.
    fn name(&self) -> Option<&str> {
        None
    }

    /// Merge the three series into one [`Estimate`] per variable.
    ///
    /// Standard errors and p-values without a matching coefficient are dropped.
    fn estimates(&self) -> BTreeMap<String, Estimate> {
        let std_errors: BTreeMap<String, f64> = self.std_errors().into_iter().collect();
        let p_values: BTreeMap<String, f64> = self.p_values().into_iter().collect();

        self.params()
            .into_iter()
            .map(|(name, coef)| {
                let estimate = Estimate {
                    coef,
                    std_err: std_errors.get(&name).copied(),
                    p_value: p_values.get(&name).copied(),
                };
                (name, estimate)
            })
            .collect()
    }
}

impl<M: FittedModel + ?Sized> FittedModel for &M {
    fn params(&self) -> Vec<(String, f64)> {
        (**self).params()
    }

    fn std_errors(&self) -> Vec<(String, f64)> {
        (**self).std_errors()
    }

    fn p_values(&self) -> Vec<(String, f64)> {
        (**self).p_values()
    }

    fn statistic(&self, stat: SummaryStat) -> Option<f64> {
        (**self).statistic(stat)
    }

    fn name(&self) -> Option<&str> {
        (**self).name()
    }
}

/// Plain, serializable model results.
///
/// Field names follow the attribute names used by common statistics
/// packages (`params`, `bse`, `pvalues`, `nobs`, `rsquared`, ...), so their
/// results can be dumped to JSON and loaded as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelResults {
    /// Optional column title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Coefficient estimates
    pub params: BTreeMap<String, f64>,
    /// Standard errors
    pub bse: BTreeMap<String, f64>,
    /// Two-tailed p-values
    pub pvalues: BTreeMap<String, f64>,
    /// Number of observations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nobs: Option<f64>,
    /// Model degrees of freedom
    #[serde(skip_serializing_if = "Option::is_none")]
    pub df_model: Option<f64>,
    /// Residual degrees of freedom
    #[serde(skip_serializing_if = "Option::is_none")]
    pub df_resid: Option<f64>,
    /// F-statistic
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fvalue: Option<f64>,
    /// Akaike information criterion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aic: Option<f64>,
    /// Bayesian information criterion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bic: Option<f64>,
    /// R²
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsquared: Option<f64>,
    /// Adjusted R²
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsquared_adj: Option<f64>,
}

impl ModelResults {
    /// Create empty results.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the column title
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder: add a variable with its estimate, standard error and p-value.
    pub fn variable(mut self, name: impl Into<String>, coef: f64, se: f64, p: f64) -> Self {
        let name = name.into();
        self.params.insert(name.clone(), coef);
        self.bse.insert(name.clone(), se);
        self.pvalues.insert(name, p);
        self
    }

    /// Builder: add a variable that only has a coefficient.
    pub fn coefficient(mut self, name: impl Into<String>, coef: f64) -> Self {
        self.params.insert(name.into(), coef);
        self
    }

    /// Builder: set a summary statistic
    pub fn stat(mut self, stat: SummaryStat, value: f64) -> Self {
        *self.stat_slot(stat) = Some(value);
        self
    }

    fn stat_slot(&mut self, stat: SummaryStat) -> &mut Option<f64> {
        match stat {
            SummaryStat::Nobs => &mut self.nobs,
            SummaryStat::DfModel => &mut self.df_model,
            SummaryStat::DfResid => &mut self.df_resid,
            SummaryStat::FValue => &mut self.fvalue,
            SummaryStat::Aic => &mut self.aic,
            SummaryStat::Bic => &mut self.bic,
            SummaryStat::RSquared => &mut self.rsquared,
            SummaryStat::RSquaredAdj => &mut self.rsquared_adj,
        }
    }
}

impl FittedModel for ModelResults {
    fn params(&self) -> Vec<(String, f64)> {
        self.params.iter().map(|(k, v)| (k.clone(), *v)).collect()
    }

    fn std_errors(&self) -> Vec<(String, f64)> {
        self.bse.iter().map(|(k, v)| (k.clone(), *v)).collect()
    }

    fn p_values(&self) -> Vec<(String, f64)> {
        self.pvalues.iter().map(|(k, v)| (k.clone(), *v)).collect()
    }

    fn statistic(&self, stat: SummaryStat) -> Option<f64> {
        match stat {
            SummaryStat::Nobs => self.nobs,
            SummaryStat::DfModel => self.df_model,
            SummaryStat::DfResid => self.df_resid,
            SummaryStat::FValue => self.fvalue,
            SummaryStat::Aic => self.aic,
            SummaryStat::Bic => self.bic,
            SummaryStat::RSquared => self.rsquared,
            SummaryStat::RSquaredAdj => self.rsquared_adj,
        }
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// A JSON file holds either one model or a list of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum ModelFile {
    Many(Vec<ModelResults>),
    One(ModelResults),
}

/// Load model results from a JSON file.
///
/// The file may contain a single model object or an array of models.
pub fn load_models(path: impl AsRef<Path>) -> Result<Vec<ModelResults>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| RegtabError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ModelFile =
        serde_json::from_str(&content).map_err(|source| RegtabError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let models = match parsed {
        ModelFile::Many(models) => models,
        ModelFile::One(model) => vec![model],
    };
    tracing::debug!(path = %path.display(), count = models.len(), "loaded models");
    Ok(models)
}
