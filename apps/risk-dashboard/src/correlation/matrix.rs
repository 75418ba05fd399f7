//! Correlation matrix over the columns of a return table.

use serde::{Deserialize, Serialize};

use crate::data::ReturnTable;
use crate::error::AnalyticsError;
use crate::metrics::{ZERO_VARIANCE_TOLERANCE, pearson, population_std_dev};

/// Square, symmetric matrix of pairwise Pearson correlations.
///
/// Rows and columns follow `strategies`. The diagonal is exactly `1.0` and
/// every off-diagonal entry lies in `[-1, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    /// Row and column labels.
    pub strategies: Vec<String>,
    /// Row-major correlation values.
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Number of strategies.
    #[must_use]
    pub fn size(&self) -> usize {
        self.strategies.len()
    }

    /// Correlation between two named strategies.
    #[must_use]
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.strategies.iter().position(|s| s == a)?;
        let j = self.strategies.iter().position(|s| s == b)?;
        Some(self.values[i][j])
    }

    /// Off-diagonal pairs `(a, b, rho)` with `a` before `b`.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str, f64)> + '_ {
        self.strategies.iter().enumerate().flat_map(move |(i, a)| {
            self.strategies
                .iter()
                .enumerate()
                .skip(i + 1)
                .map(move |(j, b)| (a.as_str(), b.as_str(), self.values[i][j]))
        })
    }
}

/// Pearson correlation of every pair of columns over the aligned rows.
///
/// # Errors
///
/// - `InvalidInput` when the table has no columns or fewer than two rows.
/// - `DegenerateComputation` when a column has zero variance; the
///   offending strategy is named in the error context.
pub fn correlation_matrix(table: &ReturnTable) -> Result<CorrelationMatrix, AnalyticsError> {
    const OP: &str = "correlation_matrix";

    if table.width() == 0 {
        return Err(AnalyticsError::invalid_input(format!(
            "{OP} requires at least one strategy column"
        ))
        .with_context("operation", OP));
    }
    if table.len() < 2 {
        return Err(AnalyticsError::too_few_observations(OP, 2, table.len()));
    }

    let columns: Vec<(&str, &[f64])> = table.columns().collect();

    for (name, values) in &columns {
        let flat = population_std_dev(values).is_none_or(|sd| sd <= ZERO_VARIANCE_TOLERANCE);
        if flat {
            return Err(AnalyticsError::zero_variance(OP).with_context("strategy", *name));
        }
    }

    let n = columns.len();
    let mut values = vec![vec![0.0; n]; n];
    for i in 0..n {
        values[i][i] = 1.0;
        for j in (i + 1)..n {
            let rho = pearson(columns[i].1, columns[j].1).ok_or_else(|| {
                AnalyticsError::degenerate(format!(
                    "correlation between '{}' and '{}' is undefined",
                    columns[i].0, columns[j].0
                ))
                .with_context("operation", OP)
            })?;
            values[i][j] = rho;
            values[j][i] = rho;
        }
    }

    Ok(CorrelationMatrix {
        strategies: table.strategies().to_vec(),
        values,
    })
}
