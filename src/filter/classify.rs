use std::collections::BTreeMap;

use serde::Serialize;

use super::taxonomy::{AGE, AUTO_MAKE_PRIMARY, AUTO_MAKE_SECONDARY, ETHNICITY, GENDER, INCOME, MIGRATION};

/// How several selected filters on the same taxonomy combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CombineMode {
    /// Sum over mutually exclusive segments (OR).
    Union,
    /// Product of independent match rates (AND).
    Intersection,
}

/// Taxonomies whose segments partition the population, so that multiple
/// selections widen the match instead of narrowing it.
pub const UNION_TAXONOMIES: [&str; 7] = [
    GENDER, AGE, ETHNICITY, INCOME, AUTO_MAKE_PRIMARY, AUTO_MAKE_SECONDARY, MIGRATION,
];

/// Static union-vs-intersection policy for the default classifier.
pub fn is_union_taxonomy(taxonomy: &str) -> bool {
    UNION_TAXONOMIES.contains(&taxonomy)
}

/// Lookup table from taxonomy to [`CombineMode`]; unlisted taxonomies
/// (principally the `hs_*` scores) intersect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonomyClassifier {
    modes: BTreeMap<String, CombineMode>,
}

impl TaxonomyClassifier {
    /// A classifier where every taxonomy intersects.
    pub fn intersect_all() -> Self { Self { modes: BTreeMap::new() } }

    /// Override the mode for one taxonomy.
    pub fn with_mode(mut self, taxonomy: impl Into<String>, mode: CombineMode) -> Self {
        self.modes.insert(taxonomy.into(), mode);
        self
    }

    #[inline]
    pub fn mode(&self, taxonomy: &str) -> CombineMode {
        self.modes.get(taxonomy).copied().unwrap_or(CombineMode::Intersection)
    }

    #[inline]
    pub fn is_union_taxonomy(&self, taxonomy: &str) -> bool {
        self.mode(taxonomy) == CombineMode::Union
    }

    /// Taxonomies explicitly classified as unions, sorted.
    pub fn union_taxonomies(&self) -> impl Iterator<Item = &str> + '_ {
        self.modes.iter()
            .filter(|(_, mode)| **mode == CombineMode::Union)
            .map(|(taxonomy, _)| taxonomy.as_str())
    }
}

impl Default for TaxonomyClassifier {
    fn default() -> Self {
        UNION_TAXONOMIES.iter()
            .fold(Self::intersect_all(), |classifier, &taxonomy| classifier.with_mode(taxonomy, CombineMode::Union))
    }
}
