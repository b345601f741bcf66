pub mod catalog;
pub mod diagnose;
pub mod estimate;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result, bail};
use popscope::{DataTable, FilterCatalog, StatePopulations};

pub(crate) fn load_table(path: &Path) -> Result<DataTable> {
    let rows = popscope::read_rows_from_csv(path)?;
    if rows.is_empty() {
        bail!("[load] no usable rows in {}", path.display());
    }
    Ok(DataTable::new(rows))
}

pub(crate) fn load_catalog(path: Option<&Path>) -> Result<FilterCatalog> {
    match path {
        Some(path) => FilterCatalog::read_from_json(path),
        None => Ok(FilterCatalog::builtin()),
    }
}

/// `sample`, `census2020`, or a path to a JSON population table.
pub(crate) fn load_populations(source: &str) -> Result<StatePopulations> {
    match source {
        "sample" => Ok(StatePopulations::sample()),
        "census2020" | "census-2020" => Ok(StatePopulations::census_2020()),
        path => StatePopulations::read_from_json(Path::new(path))
            .with_context(|| format!("[load] unknown population preset or file '{path}'")),
    }
}

pub(crate) fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value).context("[output] Failed to serialize JSON")?);
    Ok(())
}
