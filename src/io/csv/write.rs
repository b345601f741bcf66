//! CSV writing operations.

use std::{fs::File, path::Path};

use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::SerWriter, prelude::{CsvWriter, NamedFrom}, series::Series};

use crate::data::DataRow;
use crate::estimate::EstimationResult;

/// Write a DataFrame to a CSV file.
fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("[io::csv::write] Failed to create CSV file: {}", path.display()))?;
    CsvWriter::new(file)
        .finish(df)
        .with_context(|| format!("[io::csv::write] Failed to write CSV to {:?}", path))
}

/// Write a DataFrame to a CSV string.
fn write_csv_string(df: &mut DataFrame) -> Result<String> {
    let mut buffer = Vec::new();
    CsvWriter::new(&mut buffer)
        .finish(df)
        .context("[io::csv::write] Failed to write CSV to string")?;
    String::from_utf8(buffer)
        .context("[io::csv::write] CSV output is not valid UTF-8")
}

fn rows_frame(rows: &[DataRow]) -> Result<DataFrame> {
    let states = rows.iter().map(|row| row.state_code.as_str()).collect::<Vec<_>>();
    let taxonomies = rows.iter().map(|row| row.taxonomy.as_str()).collect::<Vec<_>>();
    let segments = rows.iter().map(|row| row.segment.to_string()).collect::<Vec<_>>();
    let percentages = rows.iter().map(|row| row.population_pct).collect::<Vec<_>>();

    Ok(DataFrame::new(vec![
        Series::new("state_code".into(), states).into(),
        Series::new("taxonomy".into(), taxonomies).into(),
        Series::new("segment".into(), segments).into(),
        Series::new("population_pct".into(), percentages).into(),
    ])?)
}

fn breakdown_frame(result: &EstimationResult) -> Result<DataFrame> {
    let breakdown = &result.state_breakdown;
    let states = breakdown.iter().map(|entry| entry.state.as_str()).collect::<Vec<_>>();
    let populations = breakdown.iter().map(|entry| entry.population).collect::<Vec<_>>();
    let matching = breakdown.iter().map(|entry| entry.matching_population).collect::<Vec<_>>();
    let percentages = breakdown.iter().map(|entry| entry.percentage).collect::<Vec<_>>();

    Ok(DataFrame::new(vec![
        Series::new("state".into(), states).into(),
        Series::new("population".into(), populations).into(),
        Series::new("matching_population".into(), matching).into(),
        Series::new("percentage".into(), percentages).into(),
    ])?)
}

/// Write segment rows back out in the loader's column layout.
pub fn write_rows_to_csv(rows: &[DataRow], path: &Path) -> Result<()> {
    write_csv(&mut rows_frame(rows)?, path)
}

/// Render the per-state breakdown of an estimate as CSV text.
pub fn breakdown_to_csv_string(result: &EstimationResult) -> Result<String> {
    write_csv_string(&mut breakdown_frame(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::StateBreakdown;
    use crate::io::read_rows_from_csv;

    #[test]
    fn rows_survive_a_file_round_trip() {
        let rows = vec![
            DataRow::new("CA", "2010_state_senate_district", 9, 2.5),
            DataRow::new("CA", "ethnic_description", "Hispanic", 39.0),
        ];
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.csv");

        write_rows_to_csv(&rows, &path).unwrap();
        let loaded = read_rows_from_csv(&path).unwrap();
        assert_eq!(loaded, rows);
    }

    #[test]
    fn breakdown_csv_has_header_and_rows() {
        let result = EstimationResult {
            total_population: 100,
            matching_population: 40.0,
            percentage: 40.0,
            state_breakdown: vec![StateBreakdown {
                state: "CA".into(),
                population: 100,
                matching_population: 40.0,
                percentage: 40.0,
            }],
        };
        let csv = breakdown_to_csv_string(&result).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("state,population,matching_population,percentage"));
        assert!(lines.next().is_some_and(|line| line.starts_with("CA,100,")));
    }
}
