use serde::Serialize;

use crate::catalog::FilterCatalog;

/// Prefix of explicit state-selection filter ids (`state-CA`).
pub const GEOGRAPHIC_PREFIX: &str = "state-";

pub const GENDER: &str = "voters_gender";
pub const AGE: &str = "voters_age";
pub const ETHNICITY: &str = "ethnic_description";
pub const INCOME: &str = "commercialdata_estimatedhhincome";
pub const HOUSEHOLD_COMPOSITION: &str = "commercialdata_hhcomposition";
pub const STATE_SENATE_DISTRICT: &str = "2010_state_senate_district";
pub const CONGRESSIONAL_DISTRICT: &str = "2001_us_congressional_district";
pub const ZIP_CODE: &str = "2001_us_zipcode";
pub const AUTO_MAKE_PRIMARY: &str = "consumerdata_auto_make_1";
pub const AUTO_MAKE_SECONDARY: &str = "consumerdata_auto_make_2";
pub const MILITARY_FAMILY_YES: &str = "hs_military_family_relationship_yes";
pub const MILITARY_FAMILY_NO: &str = "hs_military_family_relationship_no";
pub const MIGRATION: &str = "voters_movedfrom_state";

/// Prefix shared by every scaled-opinion-score taxonomy.
pub const OPINION_PREFIX: &str = "hs_";

/// Taxonomies with a dedicated matching rule.
pub const KNOWN_TAXONOMIES: [&str; 13] = [
    GENDER, AGE, ETHNICITY, INCOME, HOUSEHOLD_COMPOSITION,
    STATE_SENATE_DISTRICT, CONGRESSIONAL_DISTRICT, ZIP_CODE,
    AUTO_MAKE_PRIMARY, AUTO_MAKE_SECONDARY,
    MILITARY_FAMILY_YES, MILITARY_FAMILY_NO, MIGRATION,
];

/// The matching behaviour a taxonomy belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxonomyFamily {
    Gender,
    Age,
    Ethnicity,
    Income,
    HouseholdComposition,
    StateSenateDistrict,
    CongressionalDistrict,
    ZipCode,
    AutoMake,
    MilitaryFamily,
    Migration,
    Opinion,    // any other hs_* taxonomy
    Other,
}

impl TaxonomyFamily {
    pub fn of(taxonomy: &str) -> Self {
        match taxonomy {
            GENDER => TaxonomyFamily::Gender,
            AGE => TaxonomyFamily::Age,
            ETHNICITY => TaxonomyFamily::Ethnicity,
            INCOME => TaxonomyFamily::Income,
            HOUSEHOLD_COMPOSITION => TaxonomyFamily::HouseholdComposition,
            STATE_SENATE_DISTRICT => TaxonomyFamily::StateSenateDistrict,
            CONGRESSIONAL_DISTRICT => TaxonomyFamily::CongressionalDistrict,
            ZIP_CODE => TaxonomyFamily::ZipCode,
            AUTO_MAKE_PRIMARY | AUTO_MAKE_SECONDARY => TaxonomyFamily::AutoMake,
            MILITARY_FAMILY_YES | MILITARY_FAMILY_NO => TaxonomyFamily::MilitaryFamily,
            MIGRATION => TaxonomyFamily::Migration,
            _ if taxonomy.starts_with(OPINION_PREFIX) => TaxonomyFamily::Opinion,
            _ => TaxonomyFamily::Other,
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            TaxonomyFamily::Gender => "gender",
            TaxonomyFamily::Age => "age",
            TaxonomyFamily::Ethnicity => "ethnicity",
            TaxonomyFamily::Income => "income",
            TaxonomyFamily::HouseholdComposition => "household_composition",
            TaxonomyFamily::StateSenateDistrict => "state_senate_district",
            TaxonomyFamily::CongressionalDistrict => "congressional_district",
            TaxonomyFamily::ZipCode => "zip_code",
            TaxonomyFamily::AutoMake => "auto_make",
            TaxonomyFamily::MilitaryFamily => "military_family",
            TaxonomyFamily::Migration => "migration",
            TaxonomyFamily::Opinion => "opinion",
            TaxonomyFamily::Other => "other",
        }
    }

    /// Families whose filters resolve to a cut on a scaled score.
    #[inline]
    pub fn is_scored(&self) -> bool {
        matches!(self, TaxonomyFamily::MilitaryFamily | TaxonomyFamily::Opinion)
    }
}

/// State code of a geographic filter id (`state-ca` -> `CA`), if it is one.
pub fn geographic_target(filter_id: &str) -> Option<String> {
    filter_id.strip_prefix(GEOGRAPHIC_PREFIX)
        .map(|code| code.trim().to_ascii_uppercase())
        .filter(|code| !code.is_empty())
}

/// Work out which taxonomy a (non-geographic) filter id constrains.
///
/// The catalog wins; after that the longest known taxonomy the id starts
/// with, then the naming conventions for auto makes and opinion scores, and
/// finally the id minus its last `_token`.
pub fn taxonomy_for_filter(filter_id: &str, catalog: &FilterCatalog) -> String {
    if let Some(taxonomy) = catalog.taxonomy_of(filter_id) {
        return taxonomy.to_string();
    }

    let known = KNOWN_TAXONOMIES.iter()
        .filter(|&&taxonomy| {
            filter_id == taxonomy
                || filter_id.strip_prefix(taxonomy).is_some_and(|rest| rest.starts_with('_'))
        })
        .max_by_key(|taxonomy| taxonomy.len());
    if let Some(taxonomy) = known {
        return taxonomy.to_string();
    }

    if filter_id.starts_with("consumerdata_auto_make_") {
        return AUTO_MAKE_PRIMARY.to_string();
    }

    if filter_id.starts_with(OPINION_PREFIX) {
        let stripped = ["_supporter", "_opposer"].iter()
            .find_map(|suffix| filter_id.strip_suffix(suffix));
        return stripped.unwrap_or(filter_id).to_string();
    }

    match filter_id.rsplit_once('_') {
        Some((taxonomy, _)) if !taxonomy.is_empty() => taxonomy.to_string(),
        _ => filter_id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive(filter_id: &str) -> String {
        taxonomy_for_filter(filter_id, &FilterCatalog::empty())
    }

    #[test]
    fn family_lookup() {
        assert_eq!(TaxonomyFamily::of("voters_gender"), TaxonomyFamily::Gender);
        assert_eq!(TaxonomyFamily::of("consumerdata_auto_make_2"), TaxonomyFamily::AutoMake);
        assert_eq!(TaxonomyFamily::of("hs_military_family_relationship_no"), TaxonomyFamily::MilitaryFamily);
        assert_eq!(TaxonomyFamily::of("hs_gun_control_support"), TaxonomyFamily::Opinion);
        assert_eq!(TaxonomyFamily::of("city"), TaxonomyFamily::Other);
        assert!(TaxonomyFamily::Opinion.is_scored());
        assert!(!TaxonomyFamily::Age.is_scored());
    }

    #[test]
    fn geographic_ids() {
        assert_eq!(geographic_target("state-CA").as_deref(), Some("CA"));
        assert_eq!(geographic_target("state-wy").as_deref(), Some("WY"));
        assert_eq!(geographic_target("state-"), None);
        assert_eq!(geographic_target("voters_gender_male"), None);
    }

    #[test]
    fn known_prefixes_win_over_token_stripping() {
        assert_eq!(derive("voters_age_18_34"), AGE);
        assert_eq!(derive("voters_age_75_plus"), AGE);
        assert_eq!(derive("commercialdata_estimatedhhincome_over_100k"), INCOME);
        assert_eq!(derive("commercialdata_hhcomposition_no_children"), HOUSEHOLD_COMPOSITION);
        assert_eq!(derive("2010_state_senate_district_ca"), STATE_SENATE_DISTRICT);
        assert_eq!(derive("consumerdata_auto_make_2_toyota"), AUTO_MAKE_SECONDARY);
        assert_eq!(derive("hs_military_family_relationship_yes"), MILITARY_FAMILY_YES);
        assert_eq!(derive("voters_movedfrom_state_nj"), MIGRATION);
    }

    #[test]
    fn naming_conventions() {
        assert_eq!(derive("consumerdata_auto_make_ford"), AUTO_MAKE_PRIMARY);
        assert_eq!(derive("hs_gun_control_support_supporter"), "hs_gun_control_support");
        assert_eq!(derive("hs_gun_control_support_opposer"), "hs_gun_control_support");
        assert_eq!(derive("hs_unions_beneficial"), "hs_unions_beneficial");
        assert_eq!(derive("city_springfield"), "city");
        assert_eq!(derive("village"), "village");
    }

    #[test]
    fn catalog_overrides_heuristics() {
        let catalog = FilterCatalog::builtin();
        assert_eq!(taxonomy_for_filter("consumerdata_auto_make_honda", &catalog), AUTO_MAKE_PRIMARY);
        assert_eq!(taxonomy_for_filter("voters_gender_female", &catalog), GENDER);
    }
}
