mod aggregate;
mod compose;
mod geographic;
mod result;

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::catalog::FilterCatalog;
use crate::census::StatePopulations;
use crate::data::{DataTable, SegmentIndex};
use crate::filter::{
    FilterCombination, RuleTable, SegmentResolver, TaxonomyClassifier,
    geographic_target, taxonomy_for_filter,
};

pub use aggregate::StateAggregator;
pub use compose::compose;
pub use result::{EstimationResult, StateBreakdown};

/// Everything an estimate depends on besides the data and the selection:
/// the filter catalog, the population table used for scaling, the
/// union/intersection policy and the matching rules.
#[derive(Debug, Clone, Default)]
pub struct Estimator {
    catalog: FilterCatalog,
    populations: StatePopulations,
    classifier: TaxonomyClassifier,
    rules: RuleTable,
}

impl Estimator {
    pub fn new() -> Self { Self::default() }

    pub fn builder() -> EstimatorBuilder { EstimatorBuilder::default() }

    #[inline] pub fn catalog(&self) -> &FilterCatalog { &self.catalog }
    #[inline] pub fn populations(&self) -> &StatePopulations { &self.populations }
    #[inline] pub fn classifier(&self) -> &TaxonomyClassifier { &self.classifier }
    #[inline] pub fn rules(&self) -> &RuleTable { &self.rules }

    /// Taxonomy a data filter id constrains.
    pub fn taxonomy_for(&self, filter_id: &str) -> String {
        taxonomy_for_filter(filter_id, &self.catalog)
    }

    /// Resolve one filter id. `state-XX` ids become geographic combinations;
    /// everything else goes through taxonomy lookup and the segment resolver.
    pub fn parse_filter(&self, filter_id: &str, segments: &SegmentIndex) -> FilterCombination {
        if let Some(state) = geographic_target(filter_id) {
            return FilterCombination::geographic(state);
        }
        let taxonomy = self.taxonomy_for(filter_id);
        let predicate = SegmentResolver::new(&self.rules, segments).resolve(filter_id, &taxonomy);
        debug!(filter_id, %taxonomy, %predicate, "resolved filter");
        FilterCombination::data(taxonomy, predicate)
    }

    /// Resolve a selection against the labels observed in `table`.
    pub fn parse_filters<'f, I>(&self, table: &DataTable, filters: I) -> Vec<FilterCombination>
    where I: IntoIterator<Item = &'f str> {
        let segments = table.segment_index();
        filters.into_iter().map(|id| self.parse_filter(id, &segments)).collect()
    }

    /// Match percentage for every configured state, keyed by state code.
    pub fn state_percentages(&self, table: &DataTable, combinations: &[FilterCombination]) -> BTreeMap<String, f64> {
        let aggregator = StateAggregator::new(&self.classifier);
        self.populations.states()
            .map(|state| {
                let pct = aggregator.aggregate(state, table.state_rows(state), combinations);
                debug!(state, pct, "state match");
                (state.to_string(), pct)
            })
            .collect()
    }

    /// Estimate the population matching every selected filter.
    ///
    /// Ids are trimmed and de-duplicated; blank ids are ignored. An empty
    /// selection returns [`EstimationResult::empty`] without touching the data.
    pub fn estimate<I, S>(&self, table: &DataTable, filters: I) -> EstimationResult
    where I: IntoIterator<Item = S>, S: AsRef<str> {
        let selection = normalize_selection(filters);
        if selection.is_empty() {
            return EstimationResult::empty();
        }

        let combinations = self.parse_filters(table, selection.iter().map(String::as_str));
        let per_state = self.state_percentages(table, &combinations);
        let result = compose(&per_state, &self.populations);
        debug!(
            filters = selection.len(),
            matching = result.matching_population,
            percentage = result.percentage,
            "estimate complete"
        );
        result
    }
}

fn normalize_selection<I, S>(filters: I) -> BTreeSet<String>
where I: IntoIterator<Item = S>, S: AsRef<str> {
    filters.into_iter()
        .map(|id| id.as_ref().trim().to_string())
        .filter(|id| !id.is_empty())
        .collect()
}

/// [`Estimator::estimate`] with the built-in catalog, rules and sample populations.
pub fn estimate(table: &DataTable, selected_filters: &BTreeSet<String>) -> EstimationResult {
    Estimator::default().estimate(table, selected_filters)
}

#[derive(Debug, Clone, Default)]
pub struct EstimatorBuilder {
    catalog: Option<FilterCatalog>,
    populations: Option<StatePopulations>,
    classifier: Option<TaxonomyClassifier>,
    rules: Option<RuleTable>,
    opinion_threshold: Option<f64>,
}

impl EstimatorBuilder {
    pub fn catalog(mut self, catalog: FilterCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn populations(mut self, populations: StatePopulations) -> Self {
        self.populations = Some(populations);
        self
    }

    pub fn classifier(mut self, classifier: TaxonomyClassifier) -> Self {
        self.classifier = Some(classifier);
        self
    }

    pub fn rules(mut self, rules: RuleTable) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Supporter/opposer cut for scaled scores; applied on top of `rules`.
    pub fn opinion_threshold(mut self, threshold: f64) -> Self {
        self.opinion_threshold = Some(threshold);
        self
    }

    pub fn build(self) -> Estimator {
        let mut rules = self.rules.unwrap_or_default();
        if let Some(threshold) = self.opinion_threshold {
            rules = rules.with_opinion_threshold(threshold);
        }
        Estimator {
            catalog: self.catalog.unwrap_or_default(),
            populations: self.populations.unwrap_or_default(),
            classifier: self.classifier.unwrap_or_default(),
            rules,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataRow;
    use crate::filter::SegmentPredicate;

    fn table() -> DataTable {
        DataTable::new(vec![
            DataRow::new("CA", "voters_gender", "F", 50.0),
            DataRow::new("CA", "voters_gender", "M", 50.0),
            DataRow::new("NY", "voters_gender", "F", 52.0),
            DataRow::new("NY", "voters_gender", "M", 48.0),
        ])
    }

    #[test]
    fn parse_geographic_and_data_ids() {
        let estimator = Estimator::default();
        let segments = SegmentIndex::default();
        assert_eq!(estimator.parse_filter("state-ny", &segments), FilterCombination::geographic("NY"));
        assert_eq!(
            estimator.parse_filter("voters_gender_female", &segments),
            FilterCombination::data("voters_gender", SegmentPredicate::exact("F")),
        );
    }

    #[test]
    fn selection_is_trimmed_and_deduplicated() {
        let estimator = Estimator::default();
        let once = estimator.estimate(&table(), ["voters_gender_female"]);
        let noisy = estimator.estimate(&table(), [" voters_gender_female", "voters_gender_female ", ""]);
        assert_eq!(once, noisy);
        assert_eq!(estimator.estimate(&table(), ["  ", ""]), EstimationResult::empty());
    }

    #[test]
    fn builder_overrides() {
        let estimator = Estimator::builder()
            .populations(StatePopulations::from_iter([("CA", 1000)]))
            .catalog(FilterCatalog::empty())
            .opinion_threshold(50.0)
            .build();
        assert_eq!(estimator.rules().opinion_threshold(), 50.0);
        assert!(estimator.catalog().is_empty());

        let result = estimator.estimate(&table(), ["voters_gender_female"]);
        assert_eq!(result.total_population, 1000);
        assert_eq!(result.matching_population, 500.0);
    }

    #[test]
    fn per_state_percentages_cover_configured_states() {
        let estimator = Estimator::default();
        let combinations = estimator.parse_filters(&table(), ["voters_gender_female"]);
        let per_state = estimator.state_percentages(&table(), &combinations);
        assert_eq!(per_state.keys().map(String::as_str).collect::<Vec<_>>(), ["CA", "NY", "WY"]);
        assert_eq!(per_state["CA"], 50.0);
        assert_eq!(per_state["NY"], 52.0);
        assert_eq!(per_state["WY"], 0.0);
    }
}
