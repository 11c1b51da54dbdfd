//! Query processing: configure and align.
//!
//! This module handles the second stage of the pipeline - lining up the
//! estimates of several models. It provides:
//!
//! - **Options**: Table configuration (`TableOptions`, `Parens`, `VariableNames`)
//! - **Alignment**: `AlignedModels`, one row per variable and one cell per model
//!
//! ## Example
//!
//! ```rust
//! use regtablib::data::ModelResults;
//! use regtablib::query::AlignedModels;
//!
//! let a = ModelResults::new().variable("x1", 0.5, 0.1, 0.01);
//! let b = ModelResults::new().variable("x2", 0.2, 0.1, 0.2);
//! let aligned = AlignedModels::from_models(&[a, b]).unwrap();
//! assert_eq!(aligned.variables(), vec!["x1", "x2"]);
//! assert_eq!(aligned.blank_count(), 2);
//! ```

pub mod aligned;
pub mod options;

pub use aligned::{AlignedModels, AlignedRow};
pub use options::{Parens, TableOptions, VariableNames, MAX_DIGITS};
