//! CSV loading and export of strategy return tables.
//!
//! Expected layout: one date column (named by configuration, `Date` by
//! default) followed by one column per strategy holding periodic fractional
//! returns. Rows must be in strictly increasing date order.
//!
//! ```text
//! Date,Momentum,Carry,Value
//! 2024-01-02,0.0123,-0.0040,0.0011
//! 2024-01-03,-0.0051,0.0020,0.0007
//! ```

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};

use super::error::DataError;
use super::table::ReturnTable;

/// Accepted date cell formats, tried in order.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Timestamp format whose date part is kept.
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Date format written on export.
pub const EXPORT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Load a return table from a CSV file.
///
/// # Errors
///
/// See [`read_returns_csv`]; additionally `Io` when the file cannot be opened.
pub fn load_returns_csv(path: impl AsRef<Path>, date_column: &str) -> Result<ReturnTable, DataError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let table = read_returns_csv(file, date_column)?;
    tracing::debug!(
        path = %path.display(),
        rows = table.len(),
        strategies = table.width(),
        "Loaded return table"
    );
    Ok(table)
}

/// Read a return table from any CSV reader.
///
/// # Errors
///
/// - `MissingDateColumn` / `NoStrategies` for a header without the date
///   column or without any strategy column.
/// - `InvalidDate` / `InvalidValue` for unparseable, empty or non-finite cells.
/// - `EmptyFile` when there are no data rows.
/// - `Table` when dates are not strictly increasing or names repeat.
pub fn read_returns_csv<R: Read>(reader: R, date_column: &str) -> Result<ReturnTable, DataError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let date_idx = headers
        .iter()
        .position(|h| h == date_column)
        .ok_or_else(|| DataError::MissingDateColumn(date_column.to_string()))?;

    let strategy_cols: Vec<(usize, String)> = headers
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != date_idx)
        .map(|(i, h)| (i, h.to_string()))
        .collect();
    if strategy_cols.is_empty() {
        return Err(DataError::NoStrategies(date_column.to_string()));
    }

    let mut index = Vec::new();
    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); strategy_cols.len()];

    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        let row = i + 1;

        let raw_date = record.get(date_idx).unwrap_or_default();
        let date = parse_date(raw_date).ok_or_else(|| DataError::InvalidDate {
            row,
            value: raw_date.to_string(),
        })?;
        index.push(date);

        for ((col, name), values) in strategy_cols.iter().zip(columns.iter_mut()) {
            let raw = record.get(*col).unwrap_or_default();
            let value = raw
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| DataError::InvalidValue {
                    row,
                    strategy: name.clone(),
                    value: raw.to_string(),
                })?;
            values.push(value);
        }
    }

    if index.is_empty() {
        return Err(DataError::EmptyFile);
    }

    let named = strategy_cols
        .into_iter()
        .map(|(_, name)| name)
        .zip(columns)
        .collect();
    Ok(ReturnTable::new(index, named)?)
}

/// Write a table as CSV with a leading `Date` column.
///
/// # Errors
///
/// `Csv` or `Io` when writing fails.
pub fn write_returns_csv<W: Write>(table: &ReturnTable, writer: W) -> Result<(), DataError> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = Vec::with_capacity(table.width() + 1);
    header.push("Date");
    header.extend(table.strategies().iter().map(String::as_str));
    wtr.write_record(&header)?;

    for (row, date) in table.index().iter().enumerate() {
        let Some(values) = table.row(row) else {
            continue;
        };
        let mut record = Vec::with_capacity(values.len() + 1);
        record.push(date.format(EXPORT_DATE_FORMAT).to_string());
        record.extend(values.iter().map(f64::to_string));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Export a table to a CSV file, creating or truncating it.
///
/// # Errors
///
/// `Io` when the file cannot be created, `Csv` when writing fails.
pub fn export_returns_csv(table: &ReturnTable, path: impl AsRef<Path>) -> Result<(), DataError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_returns_csv(table, file)?;
    tracing::debug!(path = %path.display(), rows = table.len(), "Exported return table");
    Ok(())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT)
                .ok()
                .map(|dt| dt.date())
        })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    const SAMPLE: &str = "\
Date,Momentum,Carry
2024-01-02,0.01,-0.02
2024-01-03,-0.005,0.01
2024-01-04,0.02,0.0
";

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_read_sample() {
        let Ok(table) = read_returns_csv(SAMPLE.as_bytes(), "Date") else {
            panic!("sample should parse");
        };
        assert_eq!(table.len(), 3);
        assert_eq!(table.strategies(), &["Momentum".to_string(), "Carry".to_string()]);
        assert_eq!(table.index()[0], ymd(2024, 1, 2));
        assert_eq!(table.column("Carry"), Some(&[-0.02, 0.01, 0.0][..]));
    }

    #[test]
    fn test_date_column_anywhere_and_alternate_formats() {
        let csv = "A,when,B\n0.1,01/05/2024,0.2\n0.3,2024-01-06 00:00:00,0.4\n";
        let Ok(table) = read_returns_csv(csv.as_bytes(), "when") else {
            panic!("alternate formats should parse");
        };
        assert_eq!(table.index(), &[ymd(2024, 1, 5), ymd(2024, 1, 6)]);
        assert_eq!(table.strategies(), &["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_missing_date_column() {
        let result = read_returns_csv(SAMPLE.as_bytes(), "Timestamp");
        assert!(matches!(result, Err(DataError::MissingDateColumn(c)) if c == "Timestamp"));
    }

    #[test]
    fn test_no_strategy_columns() {
        let result = read_returns_csv("Date\n2024-01-02\n".as_bytes(), "Date");
        assert!(matches!(result, Err(DataError::NoStrategies(_))));
    }

    #[test]
    fn test_header_only_is_empty() {
        let result = read_returns_csv("Date,A\n".as_bytes(), "Date");
        assert!(matches!(result, Err(DataError::EmptyFile)));
    }

    #[test]
    fn test_invalid_cells() {
        let bad_date = read_returns_csv("Date,A\nyesterday,0.1\n".as_bytes(), "Date");
        assert!(matches!(bad_date, Err(DataError::InvalidDate { row: 1, .. })));

        let empty = read_returns_csv("Date,A\n2024-01-02,0.1\n2024-01-03,\n".as_bytes(), "Date");
        assert!(matches!(
            empty,
            Err(DataError::InvalidValue { row: 2, ref strategy, .. }) if strategy == "A"
        ));

        let nan = read_returns_csv("Date,A\n2024-01-02,NaN\n".as_bytes(), "Date");
        assert!(matches!(nan, Err(DataError::InvalidValue { .. })));
    }

    #[test]
    fn test_unsorted_dates_rejected() {
        let csv = "Date,A\n2024-01-03,0.1\n2024-01-02,0.2\n";
        let Err(DataError::Table(err)) = read_returns_csv(csv.as_bytes(), "Date") else {
            panic!("out-of-order dates must be rejected");
        };
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_write_then_read_preserves_table() {
        let Ok(table) = read_returns_csv(SAMPLE.as_bytes(), "Date") else {
            panic!("sample should parse");
        };
        let mut out = Cursor::new(Vec::new());
        write_returns_csv(&table, &mut out).unwrap();

        let text = String::from_utf8(out.into_inner()).unwrap();
        assert!(text.starts_with("Date,Momentum,Carry\n2024-01-02,"));

        let Ok(reread) = read_returns_csv(text.as_bytes(), "Date") else {
            panic!("exported csv should parse");
        };
        assert_eq!(reread, table);
    }

    #[test]
    fn test_export_then_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("returns.csv");
        std::fs::write(&path, SAMPLE).unwrap();

        let Ok(table) = load_returns_csv(&path, "Date") else {
            panic!("file should load");
        };

        let export = dir.path().join("filtered.csv");
        export_returns_csv(&table, &export).unwrap();
        let Ok(reloaded) = load_returns_csv(&export, "Date") else {
            panic!("exported file should load");
        };
        assert_eq!(reloaded, table);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_returns_csv(dir.path().join("absent.csv"), "Date");
        assert!(matches!(result, Err(DataError::Io(_))));
    }
}
