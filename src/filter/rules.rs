use std::{collections::BTreeMap, fmt};

use serde::Serialize;

use super::taxonomy::{self, OPINION_PREFIX};

/// Scaled opinion scores above this are supporters, at or below opposers.
pub const DEFAULT_OPINION_THRESHOLD: f64 = 65.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// One label or code per filter.
    SegmentExact,
    /// Integer code range (districts).
    SegmentRange,
    /// Cut on a scaled score.
    SegmentThreshold,
    /// Several labels summed into one bracket or category.
    SegmentAggregate,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RuleKind::SegmentExact => "segment_exact",
            RuleKind::SegmentRange => "segment_range",
            RuleKind::SegmentThreshold => "segment_threshold",
            RuleKind::SegmentAggregate => "segment_aggregate",
        })
    }
}

/// Per-taxonomy matching rule with a human-readable note.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimationRule {
    pub taxonomy: String,
    pub kind: RuleKind,
    pub description: String,
}

impl EstimationRule {
    fn new(taxonomy: &str, kind: RuleKind, description: &str) -> Self {
        Self { taxonomy: taxonomy.to_string(), kind, description: description.to_string() }
    }
}

/// Valid district numbers for one district taxonomy, by state.
#[derive(Debug, Clone, PartialEq, Serialize)]
struct DistrictRanges {
    default: (u32, u32),
    by_state: BTreeMap<String, (u32, u32)>,
}

/// Catalog of matching rules: one rule per special taxonomy, the shared
/// `hs_*` threshold rule, and per-state district ranges.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleTable {
    rules: Vec<EstimationRule>,
    opinion_rule: EstimationRule,
    opinion_threshold: f64,
    districts: BTreeMap<String, DistrictRanges>,
}

impl RuleTable {
    /// Replace the supporter/opposer cut (default 65).
    pub fn with_opinion_threshold(mut self, threshold: f64) -> Self {
        self.opinion_threshold = threshold;
        self
    }

    /// Set the valid district range for `state` under a district taxonomy.
    pub fn with_district_range(mut self, taxonomy: &str, state: &str, min: u32, max: u32) -> Self {
        self.districts.entry(taxonomy.to_string())
            .or_insert_with(|| DistrictRanges { default: (min, max), by_state: BTreeMap::new() })
            .by_state
            .insert(state.to_ascii_uppercase(), (min, max));
        self
    }

    #[inline] pub fn opinion_threshold(&self) -> f64 { self.opinion_threshold }

    /// The dedicated rules (excluding the shared `hs_*` rule).
    pub fn rules(&self) -> &[EstimationRule] { &self.rules }

    /// Rule for `taxonomy`: its dedicated rule, else the `hs_*` rule for
    /// opinion scores, else `None`.
    pub fn rule_for(&self, taxonomy: &str) -> Option<&EstimationRule> {
        self.rules.iter().find(|rule| rule.taxonomy == taxonomy)
            .or_else(|| taxonomy.starts_with(OPINION_PREFIX).then_some(&self.opinion_rule))
    }

    /// Rule kind for `taxonomy`; taxonomies without a rule match exactly.
    pub fn kind_for(&self, taxonomy: &str) -> RuleKind {
        self.rule_for(taxonomy).map(|rule| rule.kind).unwrap_or(RuleKind::SegmentExact)
    }

    #[inline]
    pub fn covers(&self, taxonomy: &str) -> bool { self.rule_for(taxonomy).is_some() }

    /// Inclusive district range for `state` under a district taxonomy,
    /// falling back to the taxonomy default when the state is not listed.
    pub fn district_range(&self, taxonomy: &str, state: Option<&str>) -> Option<(u32, u32)> {
        let ranges = self.districts.get(taxonomy)?;
        let by_state = state.and_then(|state| ranges.by_state.get(&state.to_ascii_uppercase()));
        Some(by_state.copied().unwrap_or(ranges.default))
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        use RuleKind::*;

        let rules = vec![
            EstimationRule::new(taxonomy::GENDER, SegmentExact,
                "Gender segments: M = Male, F = Female"),
            EstimationRule::new(taxonomy::AGE, SegmentAggregate,
                "Single-year ages 18-100, summed into buckets (18-34, 35-54, 55-74, 75+)"),
            EstimationRule::new(taxonomy::ETHNICITY, SegmentAggregate,
                "Detailed ethnicity labels summed into African American, Hispanic, White, Asian, Other"),
            EstimationRule::new(taxonomy::STATE_SENATE_DISTRICT, SegmentRange,
                "WY: 01-30, CA: 01-40. Leading zeros normalized. Always the 2010 version"),
            EstimationRule::new(taxonomy::CONGRESSIONAL_DISTRICT, SegmentRange,
                "CA: 01-53, NY: 01-29. Leading zeros normalized"),
            EstimationRule::new(taxonomy::ZIP_CODE, SegmentExact,
                "Standard 5-digit ZIP codes"),
            EstimationRule::new(taxonomy::HOUSEHOLD_COMPOSITION, SegmentAggregate,
                "Household types. Every variant with children is included"),
            EstimationRule::new(taxonomy::INCOME, SegmentAggregate,
                "Brackets <25k, 25-50k, 50-75k, 75-100k, >100k. All brackets above 100,000 aggregate"),
            EstimationRule::new(taxonomy::AUTO_MAKE_PRIMARY, SegmentExact,
                "Primary vehicle make (Ford, Toyota, Kia, Hyundai, ...)"),
            EstimationRule::new(taxonomy::AUTO_MAKE_SECONDARY, SegmentExact,
                "Secondary vehicle make for multi-car households"),
            EstimationRule::new(taxonomy::MILITARY_FAMILY_YES, SegmentThreshold,
                "Segment >65 = Yes (military family present)"),
            EstimationRule::new(taxonomy::MILITARY_FAMILY_NO, SegmentThreshold,
                "Segment <=65 = No (no military family)"),
            EstimationRule::new(taxonomy::MIGRATION, SegmentExact,
                "Origin state code (NJ, OH, VA, ...)"),
        ];

        let opinion_rule = EstimationRule::new("hs_*", SegmentThreshold,
            "Scaled opinion scores: >65 = Supporter/Positive, <=65 = Opposer/Negative");

        Self {
            rules,
            opinion_rule,
            opinion_threshold: DEFAULT_OPINION_THRESHOLD,
            districts: BTreeMap::new(),
        }
        .with_district_range(taxonomy::STATE_SENATE_DISTRICT, "CA", 1, 40)
        .with_district_range(taxonomy::STATE_SENATE_DISTRICT, "WY", 1, 30)
        .with_district_range(taxonomy::CONGRESSIONAL_DISTRICT, "CA", 1, 53)
        .with_district_range(taxonomy::CONGRESSIONAL_DISTRICT, "NY", 1, 29)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedicated_and_opinion_rules() {
        let rules = RuleTable::default();
        assert_eq!(rules.kind_for("voters_gender"), RuleKind::SegmentExact);
        assert_eq!(rules.kind_for("2010_state_senate_district"), RuleKind::SegmentRange);
        assert_eq!(rules.kind_for("commercialdata_estimatedhhincome"), RuleKind::SegmentAggregate);
        assert_eq!(rules.kind_for("hs_gun_control_support"), RuleKind::SegmentThreshold);
        assert_eq!(rules.rule_for("hs_gun_control_support").map(|r| r.taxonomy.as_str()), Some("hs_*"));
        assert_eq!(rules.kind_for("city"), RuleKind::SegmentExact);
        assert!(!rules.covers("city"));
        assert!(rules.covers("hs_anything"));
    }

    #[test]
    fn district_ranges_by_state() {
        let rules = RuleTable::default();
        assert_eq!(rules.district_range("2010_state_senate_district", Some("wy")), Some((1, 30)));
        assert_eq!(rules.district_range("2010_state_senate_district", Some("CA")), Some((1, 40)));
        // first state registered sets the default
        assert_eq!(rules.district_range("2010_state_senate_district", Some("TX")), Some((1, 40)));
        assert_eq!(rules.district_range("2001_us_congressional_district", Some("NY")), Some((1, 29)));
        assert_eq!(rules.district_range("2001_us_congressional_district", None), Some((1, 53)));
        assert_eq!(rules.district_range("voters_age", None), None);
    }

    #[test]
    fn threshold_override() {
        let rules = RuleTable::default().with_opinion_threshold(50.0);
        assert_eq!(rules.opinion_threshold(), 50.0);
    }
}
