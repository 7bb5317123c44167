use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::data::table::{FrequencyRow, FrequencyTable};
use crate::error::LoadError;

pub const ENTRY_COLUMN: &str = "entry_name";
pub const COUNT_COLUMN: &str = "total_count";

/// Load a delimited headword export from disk.
///
/// Any unreadable file, missing column, short row or non-integer count aborts
/// the load; there is no partial result.
pub fn load_frequency_table(path: &Path, delimiter: u8) -> Result<FrequencyTable, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let table = read_frequency_table(file, delimiter)?;
    if table.is_empty() {
        tracing::warn!("{:?} has a header but no rows", path);
    }
    tracing::info!("Loaded {} rows from {:?}", table.len(), path);
    Ok(table)
}

/// Parse a headword export from any reader. The first record is the header.
pub fn read_frequency_table<R: Read>(
    source: R,
    delimiter: u8,
) -> Result<FrequencyTable, LoadError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(source);

    let headers = reader.headers().map_err(LoadError::Header)?.clone();
    for column in [ENTRY_COLUMN, COUNT_COLUMN] {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn { column });
        }
    }

    let mut rows = Vec::new();
    // (line, declared row count) of a psql footer seen so far
    let mut footer: Option<(u64, usize)> = None;

    for result in reader.records() {
        let record = result.map_err(LoadError::Read)?;
        let line = line_of(&record);

        // A footer is only a footer if nothing follows it.
        if let Some((footer_line, _)) = footer {
            return Err(LoadError::FieldCount {
                line: footer_line,
                expected: headers.len(),
                found: 1,
            });
        }

        if record.len() != headers.len() {
            if let Some(declared) = single_field(&record).and_then(psql_footer_rows) {
                footer = Some((line, declared));
                continue;
            }
            return Err(LoadError::FieldCount {
                line,
                expected: headers.len(),
                found: record.len(),
            });
        }

        let row: FrequencyRow = record
            .deserialize(Some(&headers))
            .map_err(|source| LoadError::Malformed { line, source })?;
        rows.push(row);
    }

    if let Some((_, declared)) = footer {
        if declared != rows.len() {
            tracing::warn!(
                "psql footer declares {} rows but {} were read",
                declared,
                rows.len()
            );
        }
    }

    Ok(FrequencyTable::from_rows(rows))
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or_default()
}

fn single_field(record: &StringRecord) -> Option<&str> {
    match record.len() {
        1 => record.get(0),
        _ => None,
    }
}

/// Parse the `(N rows)` / `(1 row)` trailer that `psql -A` appends.
pub fn psql_footer_rows(field: &str) -> Option<usize> {
    let inner = field.trim().strip_prefix('(')?.strip_suffix(')')?;
    let (count, noun) = inner.split_once(' ')?;
    match noun {
        "row" | "rows" => count.parse().ok(),
        _ => None,
    }
}
