use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::catalog::FilterCatalog;
use crate::data::DataTable;

/// What the data holds for one taxonomy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaxonomySummary {
    pub taxonomy: String,
    pub record_count: usize,
    pub states: BTreeSet<String>,
    /// Distinct segment text and the number of rows carrying it.
    pub segments: BTreeMap<String, usize>,
}

/// Per-taxonomy record counts, states and segments, ordered by taxonomy.
pub fn summarize_taxonomies(table: &DataTable) -> Vec<TaxonomySummary> {
    let mut summaries: BTreeMap<&str, TaxonomySummary> = BTreeMap::new();
    for row in table.rows() {
        let summary = summaries.entry(row.taxonomy.as_str()).or_insert_with(|| TaxonomySummary {
            taxonomy: row.taxonomy.clone(),
            record_count: 0,
            states: BTreeSet::new(),
            segments: BTreeMap::new(),
        });
        summary.record_count += 1;
        summary.states.insert(row.state_code.clone());
        *summary.segments.entry(row.segment.to_string()).or_default() += 1;
    }
    summaries.into_values().collect()
}

/// Catalog taxonomies with no rows in the data.
pub fn missing_taxonomies<'c>(catalog: &'c FilterCatalog, table: &DataTable) -> Vec<&'c str> {
    let present = table.taxonomies();
    catalog.taxonomies().into_iter()
        .filter(|taxonomy| !present.contains(taxonomy))
        .collect()
}
