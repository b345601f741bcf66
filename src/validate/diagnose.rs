use std::{collections::BTreeSet, fmt};

use serde::Serialize;

use crate::data::{DataTable, SegmentIndex};
use crate::estimate::Estimator;
use crate::filter::{FilterCombination, TaxonomyFamily};

const SAMPLE_SEGMENTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterStatus {
    /// A `state-XX` selection.
    Geographic,
    /// At least one row matches.
    Matched,
    /// The taxonomy is present but no row matches.
    NoMatches,
    /// The taxonomy has no rows at all.
    NoData,
}

impl FilterStatus {
    #[inline]
    pub fn is_working(self) -> bool { matches!(self, FilterStatus::Geographic | FilterStatus::Matched) }
}

impl fmt::Display for FilterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FilterStatus::Geographic => "geographic",
            FilterStatus::Matched => "matched",
            FilterStatus::NoMatches => "no matches",
            FilterStatus::NoData => "no data",
        })
    }
}

/// How one filter id resolves against a data table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterDiagnostic {
    pub filter_id: String,
    /// Target state for geographic filters, taxonomy otherwise.
    pub taxonomy: String,
    /// Rendered predicate; empty for geographic filters.
    pub predicate: String,
    pub status: FilterStatus,
    pub matching_rows: usize,
    pub sample_segments: Vec<String>,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticReport {
    pub diagnostics: Vec<FilterDiagnostic>,
    pub working: usize,
    pub broken: usize,
}

impl DiagnosticReport {
    fn new(diagnostics: Vec<FilterDiagnostic>) -> Self {
        let working = diagnostics.iter().filter(|d| d.status.is_working()).count();
        let broken = diagnostics.len() - working;
        Self { diagnostics, working, broken }
    }

    pub fn broken_filters(&self) -> impl Iterator<Item = &FilterDiagnostic> + '_ {
        self.diagnostics.iter().filter(|d| !d.status.is_working())
    }
}

/// Resolve `filter_id` and report how many rows it matches.
pub fn diagnose_filter(estimator: &Estimator, table: &DataTable, filter_id: &str) -> FilterDiagnostic {
    diagnose_with(estimator, table, &table.segment_index(), filter_id)
}

/// Diagnose each id in order.
pub fn diagnose_filters<'f, I>(estimator: &Estimator, table: &DataTable, filter_ids: I) -> DiagnosticReport
where I: IntoIterator<Item = &'f str> {
    let segments = table.segment_index();
    let diagnostics = filter_ids.into_iter()
        .map(|id| diagnose_with(estimator, table, &segments, id))
        .collect();
    DiagnosticReport::new(diagnostics)
}

/// Diagnose every filter in the estimator's catalog.
pub fn diagnose_all(estimator: &Estimator, table: &DataTable) -> DiagnosticReport {
    diagnose_filters(estimator, table, estimator.catalog().items().map(|item| item.id.as_str()))
}

fn diagnose_with(estimator: &Estimator, table: &DataTable, segments: &SegmentIndex, filter_id: &str) -> FilterDiagnostic {
    let combination = estimator.parse_filter(filter_id, segments);
    let mut issues = Vec::new();

    let (taxonomy, predicate) = match &combination {
        FilterCombination::Geographic { state } => {
            if table.state_rows(state).next().is_none() {
                issues.push(format!("no rows for state {state}"));
            }
            if !estimator.populations().contains(state) {
                issues.push(format!("state {state} has no configured population"));
            }
            return FilterDiagnostic {
                filter_id: filter_id.to_string(),
                taxonomy: state.clone(),
                predicate: String::new(),
                status: FilterStatus::Geographic,
                matching_rows: 0,
                sample_segments: Vec::new(),
                issues,
            };
        }
        FilterCombination::Data { taxonomy, predicate } => (taxonomy, predicate),
    };

    if predicate.is_wildcard() {
        issues.push("filter id not recognised, matches every segment".to_string());
    }
    if estimator.catalog().find(filter_id).is_none() {
        issues.push("not listed in the filter catalog".to_string());
    }

    let matching = table.rows().iter()
        .filter(|row| combination.matches(row))
        .collect::<Vec<_>>();

    if TaxonomyFamily::of(taxonomy).is_scored() {
        let text_rows = table.rows().iter()
            .filter(|row| row.taxonomy == *taxonomy && row.segment.as_number().is_none())
            .count();
        if text_rows > 0 {
            issues.push(format!("{text_rows} non-numeric segments under scored taxonomy '{taxonomy}' never match"));
        }
    }

    let status = if !segments.contains_taxonomy(taxonomy) {
        issues.push(format!("taxonomy '{taxonomy}' not present in data"));
        FilterStatus::NoData
    } else if matching.is_empty() {
        issues.push(format!("no segment of '{taxonomy}' satisfies {predicate}"));
        FilterStatus::NoMatches
    } else {
        FilterStatus::Matched
    };

    let sample_segments = matching.iter()
        .map(|row| row.segment.to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .take(SAMPLE_SEGMENTS)
        .collect();

    FilterDiagnostic {
        filter_id: filter_id.to_string(),
        taxonomy: taxonomy.clone(),
        predicate: predicate.to_string(),
        status,
        matching_rows: matching.len(),
        sample_segments,
        issues,
    }
}
