//! Strategy return data: series, aligned tables, filtering and CSV I/O.

mod error;
mod filter;
mod loader;
mod series;
mod table;

pub use error::DataError;
pub use filter::TableFilter;
pub use loader::{
    EXPORT_DATE_FORMAT, export_returns_csv, load_returns_csv, read_returns_csv, write_returns_csv,
};
pub use series::{DrawdownSeries, ReturnSeries};
pub use table::ReturnTable;
