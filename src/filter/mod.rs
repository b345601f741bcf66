mod buckets;
mod classify;
mod combination;
mod predicate;
mod resolve;
mod rules;
pub mod taxonomy;

pub use classify::{CombineMode, TaxonomyClassifier, UNION_TAXONOMIES, is_union_taxonomy};
pub use combination::FilterCombination;
pub use predicate::{SegmentPredicate, Threshold};
pub use resolve::SegmentResolver;
pub use rules::{DEFAULT_OPINION_THRESHOLD, EstimationRule, RuleKind, RuleTable};
pub use taxonomy::{TaxonomyFamily, geographic_target, taxonomy_for_filter};
