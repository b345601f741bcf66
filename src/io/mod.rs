//! IO module for format-specific reading and writing operations.
//!
//! - `csv` - the segment table (`state_code, taxonomy, segment, population_pct`)
//!   and per-state estimate breakdowns
//! - `json` - catalog and population tables

mod csv;
mod json;

pub use csv::*;
pub use json::*;
