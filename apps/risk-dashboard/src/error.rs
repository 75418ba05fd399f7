//! Typed error handling for the analytics core.
//!
//! Statistics never silently return NaN or infinity. Every failure is surfaced
//! as an [`AnalyticsError`] carrying one of two codes:
//!
//! | Code | Usage |
//! |------|-------|
//! | `INVALID_INPUT` | Empty series, mismatched lengths, non-finite data, too few observations, unknown strategies |
//! | `DEGENERATE_COMPUTATION` | Zero-variance series, non-positive cumulative return prefix |
//!
//! All operations are pure and deterministic, so a failure recurs on
//! identical input. Callers decide how to display it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes for the analytics core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input violates a precondition (empty, misaligned, non-finite, unknown name).
    InvalidInput,
    /// Input is well-formed but the statistic is undefined for it.
    DegenerateComputation,
}

impl ErrorCode {
    /// Get the error reason string.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::DegenerateComputation => "DEGENERATE_COMPUTATION",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// A typed analytics failure with context.
#[derive(Debug, Clone, PartialEq, Error)]
pub struct AnalyticsError {
    /// Error code.
    code: ErrorCode,
    /// Human-readable message.
    message: String,
    /// Additional context (key-value pairs).
    context: Vec<(String, String)>,
}

impl AnalyticsError {
    /// Create a new analytics error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: Vec::new(),
        }
    }

    /// Add context to the error.
    #[must_use]
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.push((key.into(), value.into()));
        self
    }

    /// Get the error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the context.
    #[must_use]
    pub fn context(&self) -> &[(String, String)] {
        &self.context
    }

    /// Whether this is a precondition violation.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self.code, ErrorCode::InvalidInput)
    }

    /// Whether the statistic is undefined for the given input.
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        matches!(self.code, ErrorCode::DegenerateComputation)
    }

    /// Convert to a serializable report entry.
    #[must_use]
    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code.reason().to_string(),
            message: self.message.clone(),
            details: self.context.iter().cloned().collect(),
        }
    }
}

impl std::fmt::Display for AnalyticsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code.reason(), self.message)
    }
}

/// Serializable error entry embedded in dashboard reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Error code string.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Additional details.
    pub details: HashMap<String, String>,
}

/// Convenience constructors for common errors.
impl AnalyticsError {
    /// Precondition violation.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Undefined statistic.
    #[must_use]
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DegenerateComputation, message)
    }

    /// Series has fewer observations than the statistic needs.
    #[must_use]
    pub fn too_few_observations(operation: &str, required: usize, actual: usize) -> Self {
        Self::invalid_input(format!(
            "{operation} requires at least {required} observation(s), got {actual}"
        ))
        .with_context("operation", operation)
        .with_context("required", required.to_string())
        .with_context("actual", actual.to_string())
    }

    /// Series contains NaN or infinity.
    #[must_use]
    pub fn non_finite(operation: &str, index: usize) -> Self {
        Self::invalid_input(format!("{operation} received a non-finite value at index {index}"))
            .with_context("operation", operation)
            .with_context("index", index.to_string())
    }

    /// Series has zero variance.
    #[must_use]
    pub fn zero_variance(operation: &str) -> Self {
        Self::degenerate(format!("{operation} is undefined for a zero-variance series"))
            .with_context("operation", operation)
    }
}
