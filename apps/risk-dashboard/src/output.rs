//! Writing dashboard artifacts to disk.
//!
//! | File | Content |
//! |------|---------|
//! | `report.json` | [`DashboardReport`] as pretty JSON |
//! | `correlation.svg` | Correlation heatmap (when the matrix is defined) |
//! | `drawdown_<strategy>.svg` | One drawdown chart per strategy |
//! | `<export_file_name>` | Filtered return table as CSV |

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::OutputConfig;
use crate::dashboard::DashboardReport;
use crate::data::{DataError, ReturnTable, export_returns_csv};
use crate::render::{render_correlation_heatmap, render_drawdown_chart};

/// Report file name.
pub const REPORT_FILE_NAME: &str = "report.json";

/// Correlation heatmap file name.
pub const CORRELATION_FILE_NAME: &str = "correlation.svg";

/// Errors raised while writing artifacts.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to create the directory or write a file.
    #[error("Failed to write '{path}': {source}")]
    Write {
        /// Target path.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Report could not be serialized.
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    /// Filtered CSV export failed.
    #[error("Failed to export filtered data: {0}")]
    Export(#[from] DataError),
}

/// Write every configured artifact and return the paths written.
///
/// # Errors
///
/// Returns an `OutputError` for the first file that cannot be written.
pub fn write_artifacts(
    report: &DashboardReport,
    filtered: &ReturnTable,
    config: &OutputConfig,
) -> Result<Vec<PathBuf>, OutputError> {
    let dir = Path::new(&config.directory);
    fs::create_dir_all(dir).map_err(|source| OutputError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::new();

    let report_path = dir.join(REPORT_FILE_NAME);
    write_file(&report_path, &report.to_json()?)?;
    written.push(report_path);

    if config.write_charts {
        if let Some(matrix) = report.correlation.value() {
            let path = dir.join(CORRELATION_FILE_NAME);
            write_file(&path, &render_correlation_heatmap(matrix))?;
            written.push(path);
        }
        let names = drawdown_file_names(report.drawdowns.iter().map(|s| s.name.as_str()));
        for (series, name) in report.drawdowns.iter().zip(names) {
            let path = dir.join(name);
            write_file(&path, &render_drawdown_chart(series))?;
            written.push(path);
        }
    }

    if config.export_filtered_csv {
        let path = dir.join(&config.export_file_name);
        export_returns_csv(filtered, &path)?;
        written.push(path);
    }

    tracing::info!(
        directory = %dir.display(),
        files = written.len(),
        "Dashboard artifacts written"
    );

    Ok(written)
}

/// One `drawdown_<strategy>.svg` name per strategy, in order, with characters
/// unsafe in file names replaced. Names that collide after sanitising get a
/// `_2`, `_3`, ... suffix.
#[must_use]
pub fn drawdown_file_names<'a>(strategies: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut used = HashSet::new();
    strategies
        .into_iter()
        .map(|strategy| {
            let stem = file_stem(strategy);
            let mut candidate = stem.clone();
            let mut suffix = 2;
            while !used.insert(candidate.clone()) {
                candidate = format!("{stem}_{suffix}");
                suffix += 1;
            }
            format!("drawdown_{candidate}.svg")
        })
        .collect()
}

fn file_stem(strategy: &str) -> String {
    strategy
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn write_file(path: &Path, contents: &str) -> Result<(), OutputError> {
    fs::write(path, contents).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "Wrote artifact");
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::dashboard::Dashboard;

    fn table() -> ReturnTable {
        ReturnTable::new(
            (1..=4)
                .map(|d| NaiveDate::from_ymd_opt(2022, 5, d).unwrap())
                .collect(),
            vec![
                ("Trend Following".to_string(), vec![0.01, -0.02, 0.015, 0.005]),
                ("Carry".to_string(), vec![0.002, 0.004, -0.001, 0.003]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_drawdown_file_names_sanitised() {
        assert_eq!(
            drawdown_file_names(["Momentum", "Mean Reversion/2"]),
            vec!["drawdown_Momentum.svg", "drawdown_Mean_Reversion_2.svg"]
        );
    }

    #[test]
    fn test_drawdown_file_names_are_unique() {
        let names = drawdown_file_names([
            "Trend Following",
            "Trend_Following",
            "Carry",
            "Trend/Following",
        ]);
        assert_eq!(
            names,
            vec![
                "drawdown_Trend_Following.svg",
                "drawdown_Trend_Following_2.svg",
                "drawdown_Carry.svg",
                "drawdown_Trend_Following_3.svg",
            ]
        );
    }

    #[test]
    fn test_colliding_strategy_names_keep_every_chart() {
        let dir = tempfile::tempdir().unwrap();
        let table = ReturnTable::new(
            (1..=4)
                .map(|d| NaiveDate::from_ymd_opt(2022, 5, d).unwrap())
                .collect(),
            vec![
                ("Trend Following".to_string(), vec![0.01, -0.02, 0.015, 0.005]),
                ("Trend_Following".to_string(), vec![0.002, 0.004, -0.001, 0.003]),
            ],
        )
        .unwrap();
        let report = Dashboard::default().analyze(&table).unwrap();
        let config = OutputConfig {
            directory: dir.path().to_string_lossy().into_owned(),
            export_filtered_csv: false,
            ..OutputConfig::default()
        };

        let written = write_artifacts(&report, &table, &config).unwrap();
        let unique: HashSet<_> = written.iter().collect();
        assert_eq!(unique.len(), written.len());

        let charts = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().starts_with("drawdown_"))
            .count();
        assert_eq!(charts, 2);
    }

    #[test]
    fn test_write_all_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let table = table();
        let report = Dashboard::default().analyze(&table).unwrap();
        let config = OutputConfig {
            directory: dir.path().join("out").to_string_lossy().into_owned(),
            ..OutputConfig::default()
        };

        let Ok(written) = write_artifacts(&report, &table, &config) else {
            panic!("artifacts should be written");
        };
        assert_eq!(written.len(), 5);

        let out = dir.path().join("out");
        assert!(out.join(REPORT_FILE_NAME).exists());
        assert!(out.join(CORRELATION_FILE_NAME).exists());
        assert!(out.join("drawdown_Trend_Following.svg").exists());
        assert!(out.join("drawdown_Carry.svg").exists());
        assert!(out.join("filtered_strategy_data.csv").exists());
    }

    #[test]
    fn test_charts_and_export_can_be_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let table = table();
        let report = Dashboard::default().analyze(&table).unwrap();
        let config = OutputConfig {
            directory: dir.path().to_string_lossy().into_owned(),
            write_charts: false,
            export_filtered_csv: false,
            ..OutputConfig::default()
        };

        let written = write_artifacts(&report, &table, &config).unwrap();
        assert_eq!(written, vec![dir.path().join(REPORT_FILE_NAME)]);
    }
}
