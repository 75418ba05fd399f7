//! Output artifacts.

use serde::{Deserialize, Serialize};

const fn default_true() -> bool {
    true
}

/// Which artifacts are written and where.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving the report, charts and export.
    #[serde(default = "default_directory")]
    pub directory: String,
    /// Write `correlation.svg` and one `drawdown_<strategy>.svg` per strategy.
    #[serde(default = "default_true")]
    pub write_charts: bool,
    /// Write the filtered table as CSV.
    #[serde(default = "default_true")]
    pub export_filtered_csv: bool,
    /// File name of the filtered CSV export.
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            write_charts: true,
            export_filtered_csv: true,
            export_file_name: default_export_file_name(),
        }
    }
}

fn default_directory() -> String {
    "output".to_string()
}

fn default_export_file_name() -> String {
    "filtered_strategy_data.csv".to_string()
}
