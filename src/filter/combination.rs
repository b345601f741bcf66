use serde::Serialize;

use crate::data::DataRow;

use super::SegmentPredicate;

/// A selected filter after resolution: either an explicit state selection,
/// or a predicate over the segments of one taxonomy.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterCombination {
    Geographic { state: String },
    Data { taxonomy: String, predicate: SegmentPredicate },
}

impl FilterCombination {
    pub fn geographic(state: impl Into<String>) -> Self {
        FilterCombination::Geographic { state: state.into() }
    }

    pub fn data(taxonomy: impl Into<String>, predicate: SegmentPredicate) -> Self {
        FilterCombination::Data { taxonomy: taxonomy.into(), predicate }
    }

    #[inline]
    pub fn is_geographic(&self) -> bool { matches!(self, FilterCombination::Geographic { .. }) }

    /// State selected by a geographic combination.
    pub fn target_state(&self) -> Option<&str> {
        match self {
            FilterCombination::Geographic { state } => Some(state),
            FilterCombination::Data { .. } => None,
        }
    }

    pub fn taxonomy(&self) -> Option<&str> {
        match self {
            FilterCombination::Data { taxonomy, .. } => Some(taxonomy),
            FilterCombination::Geographic { .. } => None,
        }
    }

    pub fn predicate(&self) -> Option<&SegmentPredicate> {
        match self {
            FilterCombination::Data { predicate, .. } => Some(predicate),
            FilterCombination::Geographic { .. } => None,
        }
    }

    /// Whether `row` counts toward this combination. Data combinations only
    /// consider rows of their own taxonomy.
    pub fn matches(&self, row: &DataRow) -> bool {
        match self {
            FilterCombination::Geographic { state } => row.state_code == *state,
            FilterCombination::Data { taxonomy, predicate } => {
                row.taxonomy == *taxonomy && predicate.matches(&row.segment)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_combination_requires_matching_taxonomy() {
        let combo = FilterCombination::data("hs_gun_control_support", SegmentPredicate::above(65.0));
        assert!(combo.matches(&DataRow::new("CA", "hs_gun_control_support", 70, 30.0)));
        assert!(!combo.matches(&DataRow::new("CA", "hs_gun_control_support", 40, 70.0)));
        assert!(!combo.matches(&DataRow::new("CA", "hs_unions_beneficial", 70, 30.0)));
    }

    #[test]
    fn district_rows_match_with_or_without_leading_zero() {
        let combo = FilterCombination::data("2010_state_senate_district", SegmentPredicate::range(1.0, 40.0));
        assert!(combo.matches(&DataRow::new("CA", "2010_state_senate_district", 9, 2.0)));
        assert!(combo.matches(&DataRow::new("CA", "2010_state_senate_district", "09", 2.0)));
    }

    #[test]
    fn geographic_accessors() {
        let combo = FilterCombination::geographic("CA");
        assert!(combo.is_geographic());
        assert_eq!(combo.target_state(), Some("CA"));
        assert_eq!(combo.taxonomy(), None);
        assert!(combo.matches(&DataRow::new("CA", "voters_gender", "M", 49.0)));
        assert!(!combo.matches(&DataRow::new("NY", "voters_gender", "M", 49.0)));
    }
}
