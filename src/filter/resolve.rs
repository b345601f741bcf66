use tracing::{debug, warn};

use crate::data::SegmentIndex;

use super::{
    buckets,
    rules::RuleTable,
    taxonomy::{self, TaxonomyFamily},
    SegmentPredicate,
};

/// Translates a filter id plus its taxonomy into the [`SegmentPredicate`]
/// that qualifies a row. Unrecognised ids resolve to the wildcard.
#[derive(Debug, Clone, Copy)]
pub struct SegmentResolver<'a> {
    rules: &'a RuleTable,
    segments: &'a SegmentIndex,
}

impl<'a> SegmentResolver<'a> {
    pub fn new(rules: &'a RuleTable, segments: &'a SegmentIndex) -> Self {
        Self { rules, segments }
    }

    pub fn resolve(&self, filter_id: &str, taxonomy: &str) -> SegmentPredicate {
        let marker = marker(filter_id, taxonomy);
        let family = TaxonomyFamily::of(taxonomy);

        let predicate = match family {
            TaxonomyFamily::Gender => resolve_gender(marker),
            TaxonomyFamily::Age => Some(resolve_age(marker)),
            TaxonomyFamily::Ethnicity => resolve_labelled(marker, &buckets::ETHNICITY_GROUPS),
            TaxonomyFamily::Income => resolve_labelled(marker, &buckets::INCOME_BRACKETS),
            TaxonomyFamily::StateSenateDistrict | TaxonomyFamily::CongressionalDistrict =>
                Some(self.resolve_district(marker, taxonomy)),
            TaxonomyFamily::ZipCode => resolve_zip(marker),
            TaxonomyFamily::AutoMake => resolve_auto_make(marker),
            TaxonomyFamily::HouseholdComposition => self.resolve_household(marker),
            TaxonomyFamily::MilitaryFamily | TaxonomyFamily::Opinion =>
                Some(self.resolve_threshold(filter_id)),
            TaxonomyFamily::Migration => resolve_migration(marker),
            TaxonomyFamily::Other => {
                debug!("[filter::resolve] no rule for taxonomy '{taxonomy}', '{filter_id}' is unrestricted");
                return SegmentPredicate::All;
            }
        };

        predicate.unwrap_or_else(|| {
            warn!("[filter::resolve] unrecognised {} filter '{filter_id}', treating as wildcard", family.to_str());
            SegmentPredicate::All
        })
    }

    /// `… > t` for supporters and `_yes`, `… <= t` for opposers and `_no`.
    /// Ids without a marker lean supporter.
    fn resolve_threshold(&self, filter_id: &str) -> SegmentPredicate {
        let threshold = self.rules.opinion_threshold();
        if filter_id.contains("supporter") || filter_id.ends_with("_yes") {
            SegmentPredicate::above(threshold)
        } else if filter_id.contains("opposer") || filter_id.ends_with("_no") {
            SegmentPredicate::at_most(threshold)
        } else {
            SegmentPredicate::above(threshold)
        }
    }

    /// A state token selects the state's district range; a trailing
    /// district number narrows it to that district.
    fn resolve_district(&self, marker: &str, taxonomy: &str) -> SegmentPredicate {
        let tokens = marker.split('_').collect::<Vec<_>>();
        let state = tokens.iter()
            .find(|token| token.len() == 2 && token.bytes().all(|b| b.is_ascii_alphabetic()))
            .map(|token| token.to_ascii_uppercase());

        let district = tokens.last()
            .filter(|token| !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|token| token.trim_start_matches('0').parse::<u32>().ok());
        if let Some(district) = district {
            return SegmentPredicate::range(district as f64, district as f64);
        }

        match self.rules.district_range(taxonomy, state.as_deref()) {
            Some((min, max)) => SegmentPredicate::range(min as f64, max as f64),
            None => SegmentPredicate::All,
        }
    }

    /// Every observed label that does (or, for `no_children`, does not)
    /// describe a household with children.
    fn resolve_household(&self, marker: &str) -> Option<SegmentPredicate> {
        let wants_children = if marker.contains("no_children") {
            false
        } else if marker.contains("children") {
            true
        } else {
            return None;
        };

        let labels = self.segments.labels(taxonomy::HOUSEHOLD_COMPOSITION)
            .filter(|label| is_children_label(label) == wants_children);
        Some(SegmentPredicate::set(labels))
    }
}

/// The part of `filter_id` after its taxonomy prefix, or the whole id when
/// the taxonomy is not a prefix or nothing follows it.
fn marker<'s>(filter_id: &'s str, taxonomy: &str) -> &'s str {
    filter_id.strip_prefix(taxonomy)
        .and_then(|rest| rest.strip_prefix('_'))
        .filter(|rest| !rest.is_empty())
        .unwrap_or(filter_id)
}

/// Whole-token match so that `female` never reads as `male`.
fn resolve_gender(marker: &str) -> Option<SegmentPredicate> {
    marker.split('_').find_map(|token| match token {
        "female" => Some(SegmentPredicate::exact("F")),
        "male" => Some(SegmentPredicate::exact("M")),
        _ => None,
    })
}

/// `<lo>_<hi>` or `<lo>_plus`, expanded to the explicit ages. Anything
/// else selects the full adult range.
fn resolve_age(marker: &str) -> SegmentPredicate {
    let (lo, hi) = parse_age_bounds(marker).unwrap_or((buckets::AGE_MIN, buckets::AGE_MAX));
    SegmentPredicate::set((lo..=hi).map(|age| age.to_string()))
}

fn parse_age_bounds(marker: &str) -> Option<(u32, u32)> {
    let (lo, hi) = marker.split_once('_')?;
    let lo = lo.parse::<u32>().ok()?;
    let hi = match hi {
        "plus" => buckets::AGE_MAX,
        hi => hi.parse::<u32>().ok()?,
    };
    let lo = lo.max(buckets::AGE_MIN);
    let hi = hi.min(buckets::AGE_MAX);
    (lo <= hi).then_some((lo, hi))
}

/// Exact bucket key first, then the first key the marker contains.
fn resolve_labelled(marker: &str, groups: &[(&str, &[&str])]) -> Option<SegmentPredicate> {
    groups.iter()
        .find(|(key, _)| *key == marker)
        .or_else(|| groups.iter().find(|(key, _)| marker.contains(key)))
        .map(|(_, labels)| SegmentPredicate::set(labels.iter().copied()))
}

fn resolve_zip(marker: &str) -> Option<SegmentPredicate> {
    let zip = marker.rsplit('_').next()
        .filter(|token| token.len() == 5 && token.bytes().all(|b| b.is_ascii_digit()))?;
    let value = zip.trim_start_matches('0').parse::<u32>().unwrap_or(0) as f64;
    Some(SegmentPredicate::range(value, value))
}

fn resolve_auto_make(marker: &str) -> Option<SegmentPredicate> {
    marker.split('_').find_map(|token| {
        buckets::AUTO_MAKES.iter()
            .find(|(key, _)| *key == token)
            .map(|(_, make)| SegmentPredicate::exact(*make))
    })
}

fn resolve_migration(marker: &str) -> Option<SegmentPredicate> {
    marker.rsplit('_').next()
        .filter(|token| token.len() == 2 && token.bytes().all(|b| b.is_ascii_alphabetic()))
        .map(|token| SegmentPredicate::exact(token.to_ascii_uppercase()))
}

fn is_children_label(label: &str) -> bool {
    let label = label.to_ascii_lowercase();
    label.contains("children")
        && !label.starts_with("no ")
        && !label.contains("no children")
        && !label.contains("without children")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DataRow, Segment, SegmentIndex};

    fn resolve(filter_id: &str, taxonomy: &str) -> SegmentPredicate {
        let rules = RuleTable::default();
        let segments = SegmentIndex::default();
        SegmentResolver::new(&rules, &segments).resolve(filter_id, taxonomy)
    }

    #[test]
    fn gender_tokens_are_exclusive() {
        assert_eq!(resolve("voters_gender_female", "voters_gender"), SegmentPredicate::exact("F"));
        assert_eq!(resolve("voters_gender_male", "voters_gender"), SegmentPredicate::exact("M"));
        assert_eq!(resolve("voters_gender_unknown", "voters_gender"), SegmentPredicate::All);
    }

    #[test]
    fn age_buckets_expand_to_explicit_ages() {
        let young = resolve("voters_age_18_34", "voters_age");
        assert_eq!(young, SegmentPredicate::set((18..=34).map(|a| a.to_string())));
        assert!(young.matches(&Segment::Number(34.0)));
        assert!(!young.matches(&Segment::Number(35.0)));

        let old = resolve("voters_age_75_plus", "voters_age");
        assert!(old.matches(&Segment::Number(100.0)));
        assert!(!old.matches(&Segment::Number(74.0)));

        let fallback = resolve("voters_age_seniors", "voters_age");
        assert_eq!(fallback, SegmentPredicate::set((18..=100).map(|a| a.to_string())));
    }

    #[test]
    fn ethnicity_groups() {
        let hispanic = resolve("ethnic_description_hispanic", "ethnic_description");
        assert_eq!(hispanic, SegmentPredicate::set(["Hispanic"]));

        let white = resolve("ethnic_description_white", "ethnic_description");
        assert!(white.matches(&Segment::from("Dutch (Netherlands)")));
        assert!(!white.matches(&Segment::from("Chinese")));

        let other = resolve("ethnic_description_other", "ethnic_description");
        assert!(other.matches(&Segment::from("Portuguese")));

        assert_eq!(resolve("ethnic_description_martian", "ethnic_description"), SegmentPredicate::All);
    }

    #[test]
    fn income_over_100k_aggregates_upper_brackets() {
        let rich = resolve("commercialdata_estimatedhhincome_over_100k", "commercialdata_estimatedhhincome");
        for bracket in ["$100001-125000", "$200001-225000", "$250000+"] {
            assert!(rich.matches(&Segment::from(bracket)), "{bracket}");
        }
        assert!(!rich.matches(&Segment::from("$75001-100000")));

        let lower = resolve("commercialdata_estimatedhhincome_25k_50k", "commercialdata_estimatedhhincome");
        assert_eq!(lower, SegmentPredicate::set(["$25001-50000"]));
    }

    #[test]
    fn district_ranges_follow_state_token() {
        let senate = "2010_state_senate_district";
        assert_eq!(resolve("2010_state_senate_district_wy", senate), SegmentPredicate::range(1.0, 30.0));
        assert_eq!(resolve("2010_state_senate_district_ca", senate), SegmentPredicate::range(1.0, 40.0));
        assert_eq!(resolve("2010_state_senate_district_ca_09", senate), SegmentPredicate::range(9.0, 9.0));

        let house = "2001_us_congressional_district";
        assert_eq!(resolve("2001_us_congressional_district_ny", house), SegmentPredicate::range(1.0, 29.0));
        assert_eq!(resolve("2001_us_congressional_district", house), SegmentPredicate::range(1.0, 53.0));
    }

    #[test]
    fn zip_codes_keep_leading_zeros_equivalent() {
        let zip = resolve("2001_us_zipcode_02134", "2001_us_zipcode");
        assert!(zip.matches(&Segment::parse("02134")));
        assert!(zip.matches(&Segment::from("02134")));
        assert!(!zip.matches(&Segment::from("02135")));
        assert_eq!(resolve("2001_us_zipcode", "2001_us_zipcode"), SegmentPredicate::All);
    }

    #[test]
    fn auto_makes() {
        assert_eq!(resolve("consumerdata_auto_make_ford", "consumerdata_auto_make_1"), SegmentPredicate::exact("Ford"));
        assert_eq!(resolve("consumerdata_auto_make_2_toyota", "consumerdata_auto_make_2"), SegmentPredicate::exact("Toyota"));
        assert_eq!(resolve("consumerdata_auto_make_1_tesla", "consumerdata_auto_make_1"), SegmentPredicate::All);
    }

    #[test]
    fn opinion_and_military_thresholds() {
        let hs = "hs_gun_control_support";
        assert_eq!(resolve("hs_gun_control_support_supporter", hs), SegmentPredicate::above(65.0));
        assert_eq!(resolve("hs_gun_control_support_opposer", hs), SegmentPredicate::at_most(65.0));
        assert_eq!(resolve("hs_gun_control_support", hs), SegmentPredicate::above(65.0));

        let yes = "hs_military_family_relationship_yes";
        let no = "hs_military_family_relationship_no";
        assert_eq!(resolve(yes, yes), SegmentPredicate::above(65.0));
        assert_eq!(resolve(no, no), SegmentPredicate::at_most(65.0));
    }

    #[test]
    fn custom_threshold_flows_through() {
        let rules = RuleTable::default().with_opinion_threshold(50.0);
        let segments = SegmentIndex::default();
        let resolver = SegmentResolver::new(&rules, &segments);
        assert_eq!(resolver.resolve("hs_x_opposer", "hs_x"), SegmentPredicate::at_most(50.0));
    }

    #[test]
    fn migration_origin() {
        assert_eq!(resolve("voters_movedfrom_state_nj", "voters_movedfrom_state"), SegmentPredicate::exact("NJ"));
        assert_eq!(resolve("voters_movedfrom_state_abroad", "voters_movedfrom_state"), SegmentPredicate::All);
    }

    #[test]
    fn household_composition_uses_observed_labels() {
        let rows = [
            "Married with children",
            "Single parent with children",
            "No children",
            "Couple without children",
            "Single",
        ]
        .map(|label| DataRow::new("CA", "commercialdata_hhcomposition", label, 20.0));
        let segments = SegmentIndex::from_rows(&rows);
        let rules = RuleTable::default();
        let resolver = SegmentResolver::new(&rules, &segments);

        let with = resolver.resolve("commercialdata_hhcomposition_children", "commercialdata_hhcomposition");
        assert_eq!(with, SegmentPredicate::set(["Married with children", "Single parent with children"]));

        let without = resolver.resolve("commercialdata_hhcomposition_no_children", "commercialdata_hhcomposition");
        assert_eq!(without, SegmentPredicate::set(["Couple without children", "No children", "Single"]));
    }

    #[test]
    fn unknown_taxonomies_are_unrestricted() {
        assert_eq!(resolve("city_springfield", "city"), SegmentPredicate::All);
    }
}
