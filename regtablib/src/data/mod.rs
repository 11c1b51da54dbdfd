//! Data input: read fitted models.
//!
//! This module handles the first stage of the pipeline - getting estimates
//! out of fitted model objects. It provides:
//!
//! - **Models**: The `FittedModel` trait and the serde-friendly `ModelResults`
//! - **Statistics**: Whole-model summary statistics (`SummaryStat`)
//!
//! ## Example
//!
//! ```rust
//! use regtablib::data::{FittedModel, ModelResults, SummaryStat};
//!
//! let model = ModelResults::new()
//!     .variable("x", 0.8, 0.2, 0.001)
//!     .stat(SummaryStat::Nobs, 100.0);
//! assert_eq!(model.estimates()["x"].coef, 0.8);
//! ```

pub mod model;
pub mod stats;

pub use model::{load_models, Estimate, FittedModel, ModelResults};
pub use stats::SummaryStat;
