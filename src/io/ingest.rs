//! CSV ingest.
//!
//! Turns a benchmark CSV into a `BenchmarkTable`:
//! - every required input is checked for existence before any file is parsed
//! - each file is read into memory in one go, then parsed
//! - columns are typed as a whole (numeric when every present cell parses)
//!
//! No column heuristics here; that is `schema`'s job.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{BenchmarkTable, Value};
use crate::error::AppError;

/// Fail with a single `MissingInput` listing every absent path.
pub fn ensure_inputs_exist(paths: &[&Path]) -> Result<(), AppError> {
    let missing: Vec<PathBuf> = paths
        .iter()
        .filter(|p| !p.is_file())
        .map(|p| p.to_path_buf())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::MissingInput { paths: missing })
    }
}

/// Load a CSV file with a header row.
pub fn load_table(path: &Path) -> Result<BenchmarkTable, AppError> {
    if !path.is_file() {
        return Err(AppError::MissingInput {
            paths: vec![path.to_path_buf()],
        });
    }

    let bytes = std::fs::read(path).map_err(|e| AppError::load(path, format!("read failed: {e}")))?;
    let table = parse_table(path, &bytes)?;

    debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.rows.len(),
        "loaded table"
    );
    Ok(table)
}

/// Parse CSV bytes already read from `source`.
pub fn parse_table(source: &Path, bytes: &[u8]) -> Result<BenchmarkTable, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| AppError::load(source, format!("failed to read CSV headers: {e}")))?
        .iter()
        .map(normalize_header_name)
        .collect();

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // records() starts after the header, CSV lines are 1-based.
        let line = idx + 2;
        let record = result.map_err(|e| AppError::load(source, format!("CSV parse error at line {line}: {e}")))?;
        if record.len() > headers.len() {
            return Err(AppError::load(
                source,
                format!(
                    "line {line} has {} fields but the header has {}",
                    record.len(),
                    headers.len()
                ),
            ));
        }
        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        row.resize(headers.len(), String::new());
        raw_rows.push(row);
    }

    let numeric: Vec<bool> = (0..headers.len())
        .map(|col| raw_rows.iter().all(|row| is_missing(&row[col]) || parse_number(&row[col]).is_some()))
        .collect();

    let rows = raw_rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .zip(numeric.iter())
                .map(|(cell, &is_numeric)| to_value(cell, is_numeric))
                .collect()
        })
        .collect();

    Ok(BenchmarkTable {
        source: source.to_path_buf(),
        headers,
        rows,
    })
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports sometimes prefix the first header with a UTF-8 BOM.
    name.trim().trim_start_matches('\u{feff}').trim().to_string()
}

fn is_missing(cell: &str) -> bool {
    cell.is_empty() || cell.eq_ignore_ascii_case("nan")
}

fn parse_number(cell: &str) -> Option<f64> {
    let v = cell.parse::<f64>().ok()?;
    if v.is_nan() { None } else { Some(v) }
}

fn to_value(cell: String, is_numeric: bool) -> Value {
    if is_missing(&cell) {
        return Value::Missing;
    }
    if is_numeric {
        if let Some(v) = parse_number(&cell) {
            return Value::Number(v);
        }
    }
    Value::Text(cell)
}
