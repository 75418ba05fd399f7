//! Pairwise Pearson correlation between strategy columns.
//!
//! Computation lives here; turning a [`CorrelationMatrix`] into a heatmap is
//! the job of [`crate::render`].

mod matrix;

pub use matrix::{CorrelationMatrix, correlation_matrix};
