//! Data loading error types.

use thiserror::Error;

use crate::error::AnalyticsError;

/// Errors raised while reading or writing return tables.
#[derive(Debug, Error)]
pub enum DataError {
    /// IO error reading or writing a file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Header row has no date column.
    #[error("Missing date column '{0}'")]
    MissingDateColumn(String),

    /// Header row has only the date column.
    #[error("No strategy columns found next to date column '{0}'")]
    NoStrategies(String),

    /// Date cell could not be parsed.
    #[error("Invalid date '{value}' at row {row}")]
    InvalidDate {
        /// 1-based data row.
        row: usize,
        /// Raw cell content.
        value: String,
    },

    /// Return cell is not a finite number.
    #[error("Invalid return '{value}' for strategy '{strategy}' at row {row}")]
    InvalidValue {
        /// 1-based data row.
        row: usize,
        /// Column name.
        strategy: String,
        /// Raw cell content.
        value: String,
    },

    /// File has a header but no data rows.
    #[error("File contains no data rows")]
    EmptyFile,

    /// Parsed data violates a table invariant.
    #[error(transparent)]
    Table(#[from] AnalyticsError),
}
