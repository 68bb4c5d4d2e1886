//! Load a cash-on-hand CSV into a delta series.
//!
//! Expected layout, one header row then integer rows:
//!   Day,Cash On Hand
//!   40,620000
//!   41,635000

use cashtrend_core::{DayDelta, DeltaSeries};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{LoadError, Result};

const COLUMNS: [&str; 2] = ["day", "balance"];

/// One parsed data row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Reading {
    day: i64,
    balance: i64,
}

/// Turn a csv error into a load error. I/O failures while reading a named
/// file mean the source itself is unreadable, not that its content is bad.
fn csv_error(err: csv::Error, source: Option<&Path>, fallback_line: u64) -> LoadError {
    let line = err.position().map_or(fallback_line, |p| p.line());
    let reason = err.to_string();
    match (source, err.into_kind()) {
        (Some(path), csv::ErrorKind::Io(io)) => LoadError::SourceNotFound {
            path: path.to_path_buf(),
            source: io,
        },
        _ => LoadError::malformed(line, reason),
    }
}

fn parse_reading(record: &StringRecord, line: u64) -> Result<Reading> {
    if record.len() != COLUMNS.len() {
        return Err(LoadError::malformed(
            line,
            format!("expected {} columns, found {}", COLUMNS.len(), record.len()),
        ));
    }

    let field = |i: usize| -> Result<i64> {
        let raw = record.get(i).unwrap_or("");
        raw.parse::<i64>().map_err(|_| {
            LoadError::malformed(line, format!("{} {raw:?} is not an integer", COLUMNS[i]))
        })
    };

    Ok(Reading {
        day: field(0)?,
        balance: field(1)?,
    })
}

fn read_from<R: Read>(reader: R, source: Option<&Path>) -> Result<DeltaSeries> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    if rdr.headers().map_err(|e| csv_error(e, source, 1))?.is_empty() {
        return Err(LoadError::malformed(1, "empty input"));
    }

    let mut deltas = Vec::new();
    let mut previous: Option<Reading> = None;
    let mut rows = 0usize;
    // line the next record is expected on, used when csv gives no position
    let mut next_line = 2u64;

    for result in rdr.records() {
        let record = result.map_err(|e| csv_error(e, source, next_line))?;
        let line = record.position().map_or(next_line, |p| p.line());
        let reading = parse_reading(&record, line)?;
        rows += 1;
        next_line = line + 1;

        if let Some(prev) = previous {
            let delta = reading
                .balance
                .checked_sub(prev.balance)
                .ok_or_else(|| LoadError::malformed(line, "balance change overflows"))?;
            deltas.push(DayDelta::new(reading.day, delta));
        }
        previous = Some(reading);
    }

    if rows == 0 {
        return Err(LoadError::malformed(2, "no data rows after header"));
    }

    tracing::debug!(rows, deltas = deltas.len(), "loaded balance series");
    Ok(DeltaSeries::new(deltas))
}

/// Read a day/balance table from any reader.
///
/// The header row is skipped unconditionally. Each data row after the first
/// yields the change from the row before it, so `n` rows give `n - 1` deltas.
pub fn read_series<R: Read>(reader: R) -> Result<DeltaSeries> {
    read_from(reader, None)
}

/// Open `path` and read it like [`read_series`]. Failing to open or read the
/// file is `SourceNotFound`.
pub fn load_series(path: impl AsRef<Path>) -> Result<DeltaSeries> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::SourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "reading cash on hand");
    read_from(file, Some(path))
}
