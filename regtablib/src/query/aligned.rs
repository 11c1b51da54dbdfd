//! Aligned models: estimates lined up by variable across models.
//!
//! Models rarely share the same regressors. `AlignedModels` takes the union
//! of all variable names and gives every variable one cell per model, left
//! empty where a model does not include the variable.
//!
//! The data pipeline is:
//! 1. Raw Data (FittedModel implementations)
//! 2. AlignedModels (union of variables, renamed)
//! 3. RegressionTable (formatted strings, serialized to LaTeX)

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::data::model::{Estimate, FittedModel};
use crate::error::RegtabError;
use crate::Result;

use super::options::VariableNames;

/// One variable across all models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedRow {
    /// Variable name as reported by the models
    pub variable: String,
    /// Display label (the variable name unless renamed)
    pub label: String,
    /// One cell per model; `None` where the model lacks the variable
    pub cells: Vec<Option<Estimate>>,
}

/// Estimates of several models aligned on a shared variable set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedModels {
    /// Number of models (columns)
    pub model_count: usize,
    /// Rows sorted by original variable name
    pub rows: Vec<AlignedRow>,
}

impl AlignedModels {
    /// Align the estimates of the given models.
    pub fn from_models<M: FittedModel>(models: &[M]) -> Result<Self> {
        if models.is_empty() {
            return Err(RegtabError::NoModels);
        }

        let per_model: Vec<BTreeMap<String, Estimate>> =
            models.iter().map(|m| m.estimates()).collect();

        for (index, estimates) in per_model.iter().enumerate() {
            if estimates.is_empty() {
                tracing::warn!(model = index + 1, "model has no parameters");
            }
            if let Some((name, _)) = estimates.iter().find(|(_, e)| !e.coef.is_finite()) {
                return Err(RegtabError::InvalidValue {
                    model: index + 1,
                    name: name.clone(),
                });
            }
        }

        let variables: BTreeSet<&String> = per_model.iter().flat_map(|m| m.keys()).collect();

        let rows: Vec<AlignedRow> = variables
            .into_iter()
            .map(|variable| AlignedRow {
                variable: variable.clone(),
                label: variable.clone(),
                cells: per_model.iter().map(|m| m.get(variable).copied()).collect(),
            })
            .collect();

        tracing::debug!(
            models = models.len(),
            variables = rows.len(),
            "aligned model estimates"
        );

        Ok(AlignedModels {
            model_count: models.len(),
            rows,
        })
    }

    /// Apply display names to the rows. Row order is unchanged.
    pub fn rename(&mut self, names: &VariableNames) -> Result<()> {
        match names {
            VariableNames::Ordered(list) => {
                if list.len() != self.rows.len() {
                    return Err(RegtabError::RenameMismatch {
                        expected: self.rows.len(),
                        actual: list.len(),
                    });
                }
                for (row, name) in self.rows.iter_mut().zip(list) {
                    row.label = name.clone();
                }
            }
            VariableNames::Mapped(map) => {
                if let Some(unknown) = map
                    .keys()
                    .find(|key| !self.rows.iter().any(|row| &row.variable == *key))
                {
                    return Err(RegtabError::UnknownVariable(unknown.clone()));
                }
                for row in &mut self.rows {
                    if let Some(name) = map.get(&row.variable) {
                        row.label = name.clone();
                    }
                }
            }
        }
        Ok(())
    }

    /// Variable names in row order.
    pub fn variables(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.variable.as_str()).collect()
    }

    /// Number of blank cells across the whole table.
    pub fn blank_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.cells.iter().filter(|c| c.is_none()).count())
            .sum()
    }
}
