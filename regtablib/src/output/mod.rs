//! Output formatting: present aligned data as LaTeX.
//!
//! This module handles the final stage of the pipeline - formatting the
//! aligned estimates for a document. It provides:
//!
//! - **RegressionTable**: Table-ready structure with headers, rows, stats and legend
//! - **TableRow**: Individual row with label and formatted values
//! - **latex**: Escaping and number formatting helpers
//!
//! RegressionTable is a pure presentation layer - it only formats data into
//! strings. Alignment and renaming happen in the query stage.
//!
//! ## Example
//!
//! ```rust,ignore
//! use regtablib::output::RegressionTable;
//!
//! let table = RegressionTable::from_aligned(&aligned, &models, &options);
//! // table.headers: ["Model 1", "Model 2"]
//! // table.rows: [TableRow { label: "const", values: ["1.23", "0.90"] }, ...]
//! let fragment = table.to_latex();
//! ```

pub mod latex;
pub mod table;

pub use table::{RegressionTable, TableRow, SIGNIFICANCE_MARKER};
