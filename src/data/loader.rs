use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::data::offset::ZeroOffset;
use crate::data::series::Series;
use crate::error::LoadError;

/// Column that always carries the timestamp.
pub const TIMESTAMP_COLUMN: usize = 0;

/// Load one value column from a CSV file with a header row.
pub fn load(path: &Path, value_column: usize, offset: &mut ZeroOffset) -> Result<Series, LoadError> {
    let mut series = load_columns(path, &[value_column], offset)?;
    Ok(series.pop().unwrap_or_default())
}

/// Load several value columns from one CSV file in a single pass.
/// Returns one series per requested column, in the same order.
pub fn load_columns(
    path: &Path,
    value_columns: &[usize],
    offset: &mut ZeroOffset,
) -> Result<Vec<Series>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let series = load_reader(file, &path.display().to_string(), value_columns, offset)?;
    tracing::info!(
        "Loaded {} rows from {:?}",
        series.first().map(Series::len).unwrap_or(0),
        path
    );
    Ok(series)
}

/// Parse CSV data from any reader. `origin` names the source in errors.
///
/// The first physical line is the header and is skipped whatever it holds.
/// Every later line is one data row; a blank line is a short row.
pub fn load_reader<R: Read>(
    reader: R,
    origin: &str,
    value_columns: &[usize],
    offset: &mut ZeroOffset,
) -> Result<Vec<Series>, LoadError> {
    let mut reader = BufReader::new(reader);
    let read_err = |source| LoadError::Read {
        origin: origin.to_string(),
        source,
    };

    let mut header = String::new();
    if reader.read_line(&mut header).map_err(read_err)? == 0 {
        return Err(LoadError::MissingHeader {
            origin: origin.to_string(),
        });
    }

    let mut row_parser = csv::ReaderBuilder::new();
    row_parser
        .delimiter(b',')
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All);

    let needed = value_columns
        .iter()
        .copied()
        .chain(std::iter::once(TIMESTAMP_COLUMN))
        .max()
        .unwrap_or(TIMESTAMP_COLUMN)
        + 1;

    let mut series: Vec<Series> = value_columns
        .iter()
        .map(|c| Series::new(format!("column {c}")))
        .collect();

    offset.begin_source();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(read_err)?;
        let row = idx + 1;

        // The csv reader skips blank input entirely, so empty lines never reach it.
        let record = match line.trim_end_matches('\r') {
            "" => csv::StringRecord::new(),
            text => row_parser
                .from_reader(text.as_bytes())
                .records()
                .next()
                .transpose()
                .map_err(|source| LoadError::Csv {
                    origin: origin.to_string(),
                    source,
                })?
                .unwrap_or_default(),
        };

        if record.len() < needed {
            return Err(LoadError::ShortRow {
                origin: origin.to_string(),
                row,
                needed,
                found: record.len(),
            });
        }

        let ts_text = &record[TIMESTAMP_COLUMN];
        let raw: i64 = ts_text.parse().map_err(|_| LoadError::BadTimestamp {
            origin: origin.to_string(),
            row,
            text: ts_text.to_string(),
        })?;

        // Parse every value before touching the offset so a bad row never anchors it.
        let mut values = Vec::with_capacity(value_columns.len());
        for &column in value_columns {
            let text = &record[column];
            let value: f64 = text.parse().map_err(|_| LoadError::BadValue {
                origin: origin.to_string(),
                row,
                column,
                text: text.to_string(),
            })?;
            values.push(value);
        }

        let t = offset.apply(raw).ok_or_else(|| LoadError::TimestampRange {
            origin: origin.to_string(),
            row,
            raw,
        })?;
        for (s, v) in series.iter_mut().zip(values) {
            s.push(t, v);
        }
    }

    Ok(series)
}
