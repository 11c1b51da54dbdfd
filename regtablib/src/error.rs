//! Error types for regtablib

use std::path::PathBuf;
use thiserror::Error;

use crate::data::stats::SummaryStat;

/// Errors that can occur while building or writing a regression table
#[derive(Error, Debug)]
pub enum RegtabError {
    /// No models were supplied
    #[error("at least one model is required to build a table")]
    NoModels,

    /// Summary statistic name not recognized
    #[error("unsupported statistic '{0}' (expected one of: {})", SummaryStat::names())]
    UnsupportedStatistic(String),

    /// Unknown value for the parenthetical column
    #[error("invalid parens value '{0}' (expected se, pval or pval_one)")]
    InvalidParens(String),

    /// Positional rename list does not cover the aligned variables
    #[error("expected {expected} variable names, got {actual}")]
    RenameMismatch { expected: usize, actual: usize },

    /// Mapped rename refers to a variable no model has
    #[error("cannot rename unknown variable '{0}'")]
    UnknownVariable(String),

    /// Model names do not match the number of models
    #[error("expected {expected} model names, got {actual}")]
    ModelNameMismatch { expected: usize, actual: usize },

    /// Significance threshold outside (0, 1)
    #[error("significance threshold must be between 0 and 1, got {0}")]
    InvalidSignificance(f64),

    /// Too many decimal digits requested
    #[error("digits must be at most {max}, got {digits}")]
    InvalidDigits { digits: usize, max: usize },

    /// A coefficient or statistic that cannot be printed
    #[error("model {model}: non-finite value for '{name}'")]
    InvalidValue { model: usize, name: String },

    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write the output table
    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Malformed model or options JSON
    #[error("invalid JSON in '{path}': {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}
