//! Input data location.

use serde::{Deserialize, Serialize};

/// Where the strategy return CSV lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path to the CSV file.
    #[serde(default = "default_path")]
    pub path: String,
    /// Header of the date column.
    #[serde(default = "default_date_column")]
    pub date_column: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            date_column: default_date_column(),
        }
    }
}

fn default_path() -> String {
    "data/strategies.csv".to_string()
}

fn default_date_column() -> String {
    "Date".to_string()
}
