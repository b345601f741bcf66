use serde::{Deserialize, Serialize};

use super::Segment;

/// Percentage of one state's population falling into one segment of one taxonomy.
///
/// For a fixed `(state_code, taxonomy)` the percentages across all segments are
/// expected to sum to about 100. The estimation math relies on it without
/// checking; see `validate::check_percentage_sums`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataRow {
    pub state_code: String,
    pub taxonomy: String,
    pub segment: Segment,
    pub population_pct: f64,
}

impl DataRow {
    pub fn new(
        state_code: impl Into<String>,
        taxonomy: impl Into<String>,
        segment: impl Into<Segment>,
        population_pct: f64,
    ) -> Self {
        Self {
            state_code: state_code.into(),
            taxonomy: taxonomy.into(),
            segment: segment.into(),
            population_pct,
        }
    }
}
