use std::path::PathBuf;
use thiserror::Error;

/// Failure while reading one of the trace CSV files.
///
/// `origin` names the file (or reader) the row came from; `row` is the
/// 1-based data row, not counting the header.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot read {origin}: {source}")]
    Read {
        origin: String,
        source: std::io::Error,
    },
    #[error("{origin}: {source}")]
    Csv {
        origin: String,
        source: csv::Error,
    },
    #[error("{origin}: missing header row")]
    MissingHeader { origin: String },
    #[error("{origin} row {row}: expected at least {needed} columns, found {found}")]
    ShortRow {
        origin: String,
        row: usize,
        needed: usize,
        found: usize,
    },
    #[error("{origin} row {row}: timestamp {text:?} is not an integer")]
    BadTimestamp {
        origin: String,
        row: usize,
        text: String,
    },
    #[error("{origin} row {row}: timestamp {raw} is too far from the zero offset")]
    TimestampRange {
        origin: String,
        row: usize,
        raw: i64,
    },
    #[error("{origin} row {row} column {column}: value {text:?} is not a number")]
    BadValue {
        origin: String,
        row: usize,
        column: usize,
        text: String,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
