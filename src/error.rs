//! Error types for the IPL statistics CLI

use std::path::PathBuf;
use thiserror::Error;


pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Cannot read input file {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing column '{column}' in {}", path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("Invalid value '{value}' for column '{column}' at line {line} in {}", path.display())]
    InvalidValue {
        path: PathBuf,
        line: u64,
        column: String,
        value: String,
    },

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Cache error: {message}")]
    Cache { message: String },
}

impl StatsError {
    /// True for the variants describing a structurally bad input file.
    ///
    /// `Csv` counts too: the reader reports ragged rows and bad UTF-8 through it.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            StatsError::MissingColumn { .. } | StatsError::InvalidValue { .. } | StatsError::Csv(_)
        )
    }
}
