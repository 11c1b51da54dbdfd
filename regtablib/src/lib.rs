//! # regtablib
//!
//! Render fitted regression models as a LaTeX comparison table.
//!
//! ## Overview
//!
//! Researchers usually fit several specifications of a model and report them
//! side by side. This library takes the fitted results, lines up their
//! variables, and writes the `table`/`tabular` markup ready to `\input` into
//! a paper:
//!
//! - **Estimates**: One coefficient row per variable, with the standard error
//!   or p-value in parentheses underneath
//! - **Alignment**: Variables missing from a model are left blank in its column
//! - **Significance**: Optional `$^*$` marker below a configurable threshold
//! - **Summary statistics**: Optional rows for N, df, F, AIC, BIC and R²
//!
//! Model fitting is out of scope. Any fitted model can be used by
//! implementing [`FittedModel`], or by exporting its results to JSON and
//! loading them as [`ModelResults`].
//!
//! ## Pipeline
//!
//! 1. [`data`]: read estimates and statistics from models
//! 2. [`query`]: configure the table and align variables across models
//! 3. [`output`]: format cells and serialize to LaTeX
//!
//! ## Example
//!
//! ```rust
//! use regtablib::{generate_table, ModelResults, SummaryStat, TableOptions};
//!
//! let short = ModelResults::new()
//!     .variable("const", 1.2, 0.3, 0.001)
//!     .variable("educ", 0.08, 0.02, 0.0002)
//!     .stat(SummaryStat::Nobs, 526.0);
//! let long = ModelResults::new()
//!     .variable("const", 0.6, 0.4, 0.13)
//!     .variable("educ", 0.09, 0.02, 0.0001)
//!     .variable("exper", 0.004, 0.002, 0.04)
//!     .stat(SummaryStat::Nobs, 526.0);
//!
//! let options = TableOptions::new()
//!     .caption("Log wage regressions")
//!     .label("tab:wage")
//!     .summary_stats(vec![SummaryStat::Nobs]);
//!
//! let latex = generate_table(&[short, long], &options).unwrap();
//! assert!(latex.contains("exper &  & 0.00"));
//! assert!(latex.contains("$N$ & 526 & 526"));
//! ```

pub mod data;
pub mod error;
pub mod generate;
pub mod output;
pub mod query;

pub use data::{load_models, Estimate, FittedModel, ModelResults, SummaryStat};
pub use error::RegtabError;
pub use generate::{build_table, generate_table, write_table};
pub use output::{RegressionTable, TableRow};
pub use query::{AlignedModels, Parens, TableOptions, VariableNames};

/// Result type for regtablib operations
pub type Result<T> = std::result::Result<T, RegtabError>;
