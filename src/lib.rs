#![doc = "Population estimates for combinations of demographic and attitudinal filters"]
pub mod catalog;
pub mod census;
pub mod data;
pub mod estimate;
pub mod filter;
pub mod io;
pub mod validate;

#[doc(inline)]
pub use catalog::{FilterCatalog, FilterCategory, FilterItem, FilterSection};

#[doc(inline)]
pub use census::StatePopulations;

#[doc(inline)]
pub use data::{DataRow, DataTable, Segment};

#[doc(inline)]
pub use estimate::{EstimationResult, Estimator, StateBreakdown, estimate};

#[doc(inline)]
pub use filter::{CombineMode, FilterCombination, RuleTable, SegmentPredicate, TaxonomyClassifier};

#[doc(inline)]
pub use io::{read_rows_from_csv, read_rows_from_csv_bytes};
