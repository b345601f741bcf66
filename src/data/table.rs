use std::collections::{BTreeMap, BTreeSet};

use ahash::AHashMap;

use super::DataRow;

/// Immutable, state-indexed table of [`DataRow`]s.
/// Loaded once and shared read-only by every estimation call.
#[derive(Debug, Clone, Default)]
pub struct DataTable {
    rows: Vec<DataRow>,
    by_state: AHashMap<String, Vec<usize>>, // state_code -> row indices, in load order
}

impl DataTable {
    pub fn new(rows: Vec<DataRow>) -> Self {
        let mut by_state: AHashMap<String, Vec<usize>> = AHashMap::new();
        for (i, row) in rows.iter().enumerate() {
            by_state.entry(row.state_code.clone()).or_default().push(i);
        }
        Self { rows, by_state }
    }

    #[inline] pub fn rows(&self) -> &[DataRow] { &self.rows }

    #[inline] pub fn len(&self) -> usize { self.rows.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Rows for a single state, in load order. Empty for unknown states.
    pub fn state_rows<'a>(&'a self, state: &str) -> impl Iterator<Item = &'a DataRow> + 'a {
        self.by_state.get(state)
            .map(|indices| indices.as_slice())
            .unwrap_or_default()
            .iter()
            .map(move |&i| &self.rows[i])
    }

    /// Distinct state codes present in the table, sorted.
    pub fn states(&self) -> Vec<&str> {
        let mut states = self.by_state.keys().map(String::as_str).collect::<Vec<_>>();
        states.sort_unstable();
        states
    }

    /// Distinct taxonomies present in the table, sorted.
    pub fn taxonomies(&self) -> BTreeSet<&str> {
        self.rows.iter().map(|row| row.taxonomy.as_str()).collect()
    }

    pub fn has_taxonomy(&self, taxonomy: &str) -> bool {
        self.rows.iter().any(|row| row.taxonomy == taxonomy)
    }

    /// Build the per-taxonomy index of observed segment labels.
    pub fn segment_index(&self) -> SegmentIndex {
        SegmentIndex::from_rows(&self.rows)
    }
}

impl From<Vec<DataRow>> for DataTable {
    fn from(rows: Vec<DataRow>) -> Self { Self::new(rows) }
}

impl FromIterator<DataRow> for DataTable {
    fn from_iter<I: IntoIterator<Item = DataRow>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Distinct segment labels observed per taxonomy (across all states).
/// Lets resolution rules match against the labels the data actually uses.
#[derive(Debug, Clone, Default)]
pub struct SegmentIndex {
    labels: BTreeMap<String, BTreeSet<String>>,
}

impl SegmentIndex {
    pub fn from_rows(rows: &[DataRow]) -> Self {
        let mut labels: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for row in rows {
            labels.entry(row.taxonomy.clone()).or_default().insert(row.segment.to_string());
        }
        Self { labels }
    }

    /// Observed labels for `taxonomy`, sorted. Empty if the taxonomy is unknown.
    pub fn labels<'a>(&'a self, taxonomy: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.labels.get(taxonomy).into_iter().flatten().map(String::as_str)
    }

    #[inline]
    pub fn contains_taxonomy(&self, taxonomy: &str) -> bool { self.labels.contains_key(taxonomy) }
}
