//! CSV reading operations.

use std::{fs::File, io::Cursor, path::Path, sync::Arc};

use anyhow::{Context, Result, ensure};
use polars::{frame::DataFrame, io::SerReader, prelude::{CsvReadOptions, CsvReader, DataType, Field, Schema, SchemaRef}};
use tracing::{info, warn};

use crate::data::{DataRow, Segment};

/// Columns every segment table must carry.
pub const ROW_COLUMNS: [&str; 4] = ["state_code", "taxonomy", "segment", "population_pct"];

/// Reads a segment table CSV from `path`.
pub fn read_rows_from_csv(path: &Path) -> Result<Vec<DataRow>> {
    let file = File::open(path)
        .with_context(|| format!("[io::csv::read] Failed to open CSV file: {}", path.display()))?;

    let df = CsvReader::new(file)
        .with_options(row_csv_options())
        .finish()
        .with_context(|| format!("[io::csv::read] Failed to read CSV from {:?}", path))?;

    let rows = rows_from_frame(&df)
        .with_context(|| format!("[io::csv::read] Invalid segment table in {}", path.display()))?;
    info!(path = %path.display(), rows = rows.len(), "loaded segment table");
    Ok(rows)
}

/// Reads a segment table from CSV bytes.
pub fn read_rows_from_csv_bytes(bytes: &[u8]) -> Result<Vec<DataRow>> {
    let df = CsvReader::new(Cursor::new(bytes))
        .with_options(row_csv_options())
        .finish()
        .context("[io::csv::read] Failed to read CSV from bytes")?;
    rows_from_frame(&df)
}

/// Reads a segment table from a CSV string.
pub fn read_rows_from_csv_str(csv: &str) -> Result<Vec<DataRow>> {
    read_rows_from_csv_bytes(csv.as_bytes())
}

/// Every column is read as text: segment codes keep their leading zeros and
/// a stray non-numeric percentage nulls one row instead of failing the file.
fn row_csv_schema() -> SchemaRef {
    Arc::new(Schema::from_iter(
        ROW_COLUMNS.iter().map(|&name| Field::new(name.into(), DataType::String)),
    ))
}

fn row_csv_options() -> CsvReadOptions {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_schema_overwrite(Some(row_csv_schema()))
}

/// Convert a loaded frame into rows. Rows with an empty field or a missing,
/// non-numeric or non-finite percentage are skipped.
pub(crate) fn rows_from_frame(df: &DataFrame) -> Result<Vec<DataRow>> {
    let names = df.get_column_names();
    for column in ROW_COLUMNS {
        ensure!(
            names.iter().any(|name| name.as_str() == column),
            "[io::csv::read] CSV is missing required column '{column}'"
        );
    }

    let states = df.column("state_code")?.cast(&DataType::String)?;
    let taxonomies = df.column("taxonomy")?.cast(&DataType::String)?;
    let segments = df.column("segment")?.cast(&DataType::String)?;
    let percentages = df.column("population_pct")?.cast(&DataType::Float64)?;

    let mut rows = Vec::with_capacity(df.height());
    let mut skipped = 0usize;

    let fields = states.str()?.into_iter()
        .zip(taxonomies.str()?.into_iter())
        .zip(segments.str()?.into_iter())
        .zip(percentages.f64()?.into_iter());

    for (((state, taxonomy), segment), pct) in fields {
        let state = state.map(str::trim).unwrap_or_default();
        let taxonomy = taxonomy.map(str::trim).unwrap_or_default();
        let segment = segment.map(str::trim).unwrap_or_default();

        match pct {
            Some(pct) if pct.is_finite() && !state.is_empty() && !taxonomy.is_empty() && !segment.is_empty() => {
                rows.push(DataRow {
                    state_code: state.to_ascii_uppercase(),
                    taxonomy: taxonomy.to_string(),
                    segment: Segment::parse(segment),
                    population_pct: pct,
                });
            }
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!(skipped, kept = rows.len(), "skipped incomplete segment rows");
    }

    Ok(rows)
}
