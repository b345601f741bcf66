//! Load-time checks on the segment table and diagnostics for filter ids.
mod coverage;
mod diagnose;
mod sums;
mod summary;

pub use coverage::{RuleCoverage, rule_coverage};
pub use diagnose::{DiagnosticReport, FilterDiagnostic, FilterStatus, diagnose_all, diagnose_filter, diagnose_filters};
pub use sums::{DEFAULT_SUM_TOLERANCE, PercentageSumIssue, check_percentage_sums};
pub use summary::{TaxonomySummary, missing_taxonomies, summarize_taxonomies};
