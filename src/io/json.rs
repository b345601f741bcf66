//! JSON helpers shared by the catalog and population loaders.

use std::{fs::{self, File}, io::BufWriter, path::Path};

use anyhow::{Context, Result};
use serde::Serialize;

/// Read a whole JSON document from `path` into a string.
pub fn read_json_string(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("[io::json] Failed to read JSON file: {}", path.display()))
}

/// Serialize `value` as pretty-printed JSON to `path`.
pub fn write_json_file<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("[io::json] Failed to create JSON file: {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), value)
        .with_context(|| format!("[io::json] Failed to write JSON to {:?}", path))
}
