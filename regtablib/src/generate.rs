//! High-level API: models and options in, LaTeX out.

use std::fs;
use std::path::Path;

use crate::data::model::FittedModel;
use crate::error::RegtabError;
use crate::output::table::RegressionTable;
use crate::query::aligned::AlignedModels;
use crate::query::options::TableOptions;
use crate::Result;

/// Validate, align and rename, stopping short of serialization.
pub fn build_table<M: FittedModel>(models: &[M], options: &TableOptions) -> Result<RegressionTable> {
    options.validate(models.len())?;

    let mut aligned = AlignedModels::from_models(models)?;
    if let Some(names) = &options.var_names {
        aligned.rename(names)?;
    }

    Ok(RegressionTable::from_aligned(&aligned, models, options))
}

/// Render the models as a LaTeX table fragment.
pub fn generate_table<M: FittedModel>(models: &[M], options: &TableOptions) -> Result<String> {
    Ok(build_table(models, options)?.to_latex())
}

/// Render the models and write the fragment to `path`, replacing any
/// existing file. Returns the written text.
pub fn write_table<M: FittedModel>(
    path: impl AsRef<Path>,
    models: &[M],
    options: &TableOptions,
) -> Result<String> {
    let path = path.as_ref();
    let latex = generate_table(models, options)?;
    fs::write(path, &latex).map_err(|source| RegtabError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = latex.len(), "wrote table");
    Ok(latex)
}
