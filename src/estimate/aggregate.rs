use std::collections::BTreeMap;

use smallvec::SmallVec;
use tracing::debug;

use crate::data::DataRow;
use crate::filter::{CombineMode, FilterCombination, TaxonomyClassifier};

use super::geographic::StateScope;

/// Data combinations selected on one taxonomy.
#[derive(Debug, Default)]
struct TaxonomyGroup<'c> {
    combinations: SmallVec<[&'c FilterCombination; 4]>,
}

impl<'c> TaxonomyGroup<'c> {
    #[inline]
    fn is_wildcard(combination: &FilterCombination) -> bool {
        combination.predicate().is_some_and(|p| p.is_wildcard())
    }

    /// Members that actually restrict the match; wildcards are left out.
    fn restricting(&self) -> impl Iterator<Item = &'c FilterCombination> + '_ {
        self.combinations.iter().copied().filter(|combination| !Self::is_wildcard(combination))
    }

    /// Every member is a wildcard.
    #[inline]
    fn is_unrestricted(&self) -> bool { self.restricting().next().is_none() }

    /// Sum of `population_pct` over rows matched by any combination. A
    /// wildcard member matches everything.
    fn union_pct(&self, rows: &[&DataRow]) -> f64 {
        if self.combinations.iter().any(|combination| Self::is_wildcard(combination)) {
            return 100.0;
        }
        rows.iter()
            .filter(|row| self.combinations.iter().any(|combination| combination.matches(row)))
            .map(|row| row.population_pct)
            .sum()
    }

    /// `100 * Π(p_i / 100)` over the restricting members.
    fn intersection_pct(&self, rows: &[&DataRow]) -> f64 {
        let product = self.restricting()
            .map(|combination| {
                rows.iter()
                    .filter(|row| combination.matches(row))
                    .map(|row| row.population_pct)
                    .sum::<f64>() / 100.0
            })
            .product::<f64>();
        100.0 * product
    }
}

/// Computes the share (0-100) of one state's population matching a set of
/// resolved filter combinations.
#[derive(Debug, Clone, Copy)]
pub struct StateAggregator<'a> {
    classifier: &'a TaxonomyClassifier,
}

impl<'a> StateAggregator<'a> {
    pub fn new(classifier: &'a TaxonomyClassifier) -> Self { Self { classifier } }

    /// Match percentage for `state`, given its rows.
    ///
    /// Geographic combinations restrict the state set; data combinations are
    /// grouped by taxonomy, each group is combined by union or intersection,
    /// and the group percentages multiply across taxonomies. A selection
    /// with neither kind of combination matches nobody.
    pub fn aggregate<'r, I>(&self, state: &str, rows: I, combinations: &[FilterCombination]) -> f64
    where I: IntoIterator<Item = &'r DataRow> {
        let scope = StateScope::from_combinations(combinations);
        let groups = group_by_taxonomy(combinations);

        if let Some(pct) = scope.override_percentage(state, !groups.is_empty()) {
            debug!(state, pct, "geographic override");
            return pct;
        }
        if groups.is_empty() { return 0.0 }

        let mut rows_by_taxonomy: BTreeMap<&str, Vec<&DataRow>> = BTreeMap::new();
        for row in rows {
            if groups.contains_key(row.taxonomy.as_str()) {
                rows_by_taxonomy.entry(row.taxonomy.as_str()).or_default().push(row);
            }
        }

        let product = groups.iter()
            .map(|(&taxonomy, group)| {
                let rows = rows_by_taxonomy.get(taxonomy).map(Vec::as_slice).unwrap_or_default();
                let mode = self.classifier.mode(taxonomy);
                let pct = if group.is_unrestricted() {
                    100.0
                } else {
                    match mode {
                        CombineMode::Union => group.union_pct(rows),
                        CombineMode::Intersection => group.intersection_pct(rows),
                    }
                };
                debug!(state, taxonomy, ?mode, filters = group.combinations.len(), pct, "taxonomy group");
                pct / 100.0
            })
            .product::<f64>();

        100.0 * product
    }
}

/// Data combinations keyed by taxonomy, in taxonomy order so that the
/// cross-group product is evaluated in a fixed order.
fn group_by_taxonomy(combinations: &[FilterCombination]) -> BTreeMap<&str, TaxonomyGroup<'_>> {
    let mut groups: BTreeMap<&str, TaxonomyGroup<'_>> = BTreeMap::new();
    for combination in combinations {
        if let Some(taxonomy) = combination.taxonomy() {
            groups.entry(taxonomy).or_default().combinations.push(combination);
        }
    }
    groups
}
