use super::{FilterCatalog, FilterCategory, FilterItem, FilterSection, GEOGRAPHIC_TAXONOMY};

pub(super) const BUILTIN_VERSION: &str = "2025.1";

/// `(id, label, description)` triples sharing one taxonomy.
type Items = &'static [(&'static str, &'static str, &'static str)];

const STATES: Items = &[
    ("state-CA", "California (CA)", "California state"),
    ("state-NY", "New York (NY)", "New York state"),
    ("state-WY", "Wyoming (WY)", "Wyoming state"),
];

const GENDER: Items = &[
    ("voters_gender_male", "Male Voters", "Registered male voters"),
    ("voters_gender_female", "Female Voters", "Registered female voters"),
];

const AGE: Items = &[
    ("voters_age_18_34", "Ages 18-34", "Young adults"),
    ("voters_age_35_54", "Ages 35-54", "Middle-aged adults"),
    ("voters_age_55_74", "Ages 55-74", "Older adults"),
    ("voters_age_75_plus", "Ages 75+", "Seniors"),
];

const ETHNICITY: Items = &[
    ("ethnic_description_african_american", "African American", "Self-reported or modeled African American"),
    ("ethnic_description_hispanic", "Hispanic", "Hispanic or Latino"),
    ("ethnic_description_white", "White", "European-origin ethnicities"),
    ("ethnic_description_asian", "Asian", "Asian-origin ethnicities"),
    ("ethnic_description_other", "Other", "All remaining ethnicities"),
];

const INCOME: Items = &[
    ("commercialdata_estimatedhhincome_under_25k", "Under $25,000", "Household income under $25,000"),
    ("commercialdata_estimatedhhincome_25k_50k", "$25,000 - $50,000", "Household income $25,000 to $50,000"),
    ("commercialdata_estimatedhhincome_50k_75k", "$50,000 - $75,000", "Household income $50,000 to $75,000"),
    ("commercialdata_estimatedhhincome_75k_100k", "$75,000 - $100,000", "Household income $75,000 to $100,000"),
    ("commercialdata_estimatedhhincome_over_100k", "Over $100,000", "Household income above $100,000"),
];

const HOUSEHOLD: Items = &[
    ("commercialdata_hhcomposition_children", "Households with Children", "Any household type with children present"),
    ("commercialdata_hhcomposition_no_children", "Households without Children", "Households with no children present"),
];

const SENATE: Items = &[
    ("2010_state_senate_district_ca", "California Senate Districts", "State senate districts 01-40"),
    ("2010_state_senate_district_wy", "Wyoming Senate Districts", "State senate districts 01-30"),
];

const CONGRESS: Items = &[
    ("2001_us_congressional_district_ca", "California Congressional Districts", "Congressional districts 01-53"),
    ("2001_us_congressional_district_ny", "New York Congressional Districts", "Congressional districts 01-29"),
];

const AUTO_PRIMARY: Items = &[
    ("consumerdata_auto_make_ford", "Ford Owners", "Primary vehicle is a Ford"),
    ("consumerdata_auto_make_toyota", "Toyota Owners", "Primary vehicle is a Toyota"),
    ("consumerdata_auto_make_honda", "Honda Owners", "Primary vehicle is a Honda"),
    ("consumerdata_auto_make_chevrolet", "Chevrolet Owners", "Primary vehicle is a Chevrolet"),
    ("consumerdata_auto_make_nissan", "Nissan Owners", "Primary vehicle is a Nissan"),
    ("consumerdata_auto_make_1_kia", "Kia Owners", "Primary vehicle is a Kia"),
    ("consumerdata_auto_make_1_hyundai", "Hyundai Owners", "Primary vehicle is a Hyundai"),
];

const AUTO_SECONDARY: Items = &[
    ("consumerdata_auto_make_2_ford", "Secondary Ford", "Second household vehicle is a Ford"),
    ("consumerdata_auto_make_2_toyota", "Secondary Toyota", "Second household vehicle is a Toyota"),
];

const MIGRATION: Items = &[
    ("voters_movedfrom_state_ca", "Moved from California", "Voters who moved from California"),
    ("voters_movedfrom_state_ny", "Moved from New York", "Voters who moved from New York"),
    ("voters_movedfrom_state_tx", "Moved from Texas", "Voters who moved from Texas"),
    ("voters_movedfrom_state_fl", "Moved from Florida", "Voters who moved from Florida"),
    ("voters_movedfrom_state_nj", "Moved from New Jersey", "Voters who moved from New Jersey"),
    ("voters_movedfrom_state_oh", "Moved from Ohio", "Voters who moved from Ohio"),
    ("voters_movedfrom_state_va", "Moved from Virginia", "Voters who moved from Virginia"),
];

/// `(taxonomy, label)` for attitudinal scores offered as supporter/opposer pairs.
type Opinions = &'static [(&'static str, &'static str)];

const ELECTIONS: Opinions = &[
    ("hs_trump_vs_harris_favor_harris", "Harris vs Trump (Favor Harris)"),
    ("hs_biden_approval", "Biden Approval"),
    ("hs_trump_approval", "Trump Approval"),
    ("hs_harris_approval", "Harris Approval"),
    ("hs_newsom_approval", "Newsom Approval"),
];

const PARTY: Opinions = &[
    ("hs_tribalism_team_dem", "Team Democrat"),
    ("hs_tribalism_team_gop", "Team GOP"),
];

const SOCIAL: Opinions = &[
    ("hs_gun_control_support", "Gun Control Support"),
    ("hs_same_sex_marriage_support", "Same-Sex Marriage Support"),
];

const ECONOMIC: Opinions = &[
    ("hs_ideology_fiscal_conserv", "Fiscal Conservative"),
    ("hs_medicare_for_all_support", "Medicare for All"),
    ("hs_min_wage_15_increase_support", "$15 Minimum Wage"),
    ("hs_tax_cuts_support", "Tax Cuts"),
];

const ENVIRONMENT: Opinions = &[
    ("hs_climate_change_believer", "Climate Change Believer"),
    ("hs_green_new_deal_support", "Green New Deal"),
];

const IMMIGRATION: Opinions = &[
    ("hs_immigration_undesirable", "Immigration Undesirable"),
    ("hs_mexican_wall_support", "Mexican Wall"),
];

const MEDIA: Opinions = &[
    ("hs_tv_most_trusted_news_fox", "Fox News Trusted"),
    ("hs_tv_most_trusted_news_cnn", "CNN Trusted"),
    ("hs_trust_science_always", "Always Trusts Science"),
];

fn section(title: &str, description: &str, taxonomy: &str, items: Items) -> FilterSection {
    FilterSection {
        title: title.into(),
        description: description.into(),
        items: items.iter()
            .map(|&(id, label, description)| FilterItem::new(id, label, description, taxonomy))
            .collect(),
    }
}

fn opinion_section(title: &str, opinions: Opinions) -> FilterSection {
    let items = opinions.iter()
        .flat_map(|&(taxonomy, label)| {
            [("supporter", "Supporter"), ("opposer", "Opposer")].map(|(suffix, side)| FilterItem::new(
                &format!("{taxonomy}_{suffix}"),
                &format!("{label} ({side})"),
                &format!("Scaled score {}", if suffix == "supporter" { "above 65" } else { "at or below 65" }),
                taxonomy,
            ))
        })
        .collect();
    FilterSection { title: title.into(), description: String::new(), items }
}

fn military_section() -> FilterSection {
    let yes = "hs_military_family_relationship_yes";
    let no = "hs_military_family_relationship_no";
    FilterSection {
        title: "Military Family".into(),
        description: "Military family relationship".into(),
        items: vec![
            FilterItem::new(yes, "Military Family", "Military family member present", yes),
            FilterItem::new(no, "Non-Military Family", "No military family member", no),
        ],
    }
}

fn category(id: &str, title: &str, description: &str, sections: Vec<FilterSection>) -> FilterCategory {
    FilterCategory { id: id.into(), title: title.into(), description: description.into(), sections }
}

pub(super) fn builtin_catalog() -> FilterCatalog {
    use crate::filter::taxonomy as tx;

    FilterCatalog {
        version: BUILTIN_VERSION.to_string(),
        categories: vec![
            category("area-selection", "Area Selection", "Geographic area selection", vec![
                section("States", "Select states to analyze", GEOGRAPHIC_TAXONOMY, STATES),
            ]),
            category("core-demographics", "Core Demographics", "Gender, age and ethnicity", vec![
                section("Gender", "Voter gender", tx::GENDER, GENDER),
                section("Age Groups", "Voter age buckets", tx::AGE, AGE),
                section("Ethnicity", "Ethnic background", tx::ETHNICITY, ETHNICITY),
            ]),
            category("household-income", "Household & Income", "Household composition and income", vec![
                section("Income Brackets", "Estimated household income", tx::INCOME, INCOME),
                section("Household Composition", "Presence of children", tx::HOUSEHOLD_COMPOSITION, HOUSEHOLD),
            ]),
            category("districts", "Political Districts", "Legislative districts", vec![
                section("State Senate", "2010 state senate districts", tx::STATE_SENATE_DISTRICT, SENATE),
                section("Congress", "US congressional districts", tx::CONGRESSIONAL_DISTRICT, CONGRESS),
            ]),
            category("consumer-data", "Consumer Data", "Vehicle ownership", vec![
                section("Automotive", "Primary vehicle make", tx::AUTO_MAKE_PRIMARY, AUTO_PRIMARY),
                section("Secondary Vehicle", "Secondary vehicle make", tx::AUTO_MAKE_SECONDARY, AUTO_SECONDARY),
            ]),
            category("military-family", "Military Family", "Military family relationship", vec![
                military_section(),
            ]),
            category("political-views", "Political Views & Attitudes", "Scaled opinion scores", vec![
                opinion_section("Elections & Candidates", ELECTIONS),
                opinion_section("Party Affiliation", PARTY),
                opinion_section("Social Issues", SOCIAL),
                opinion_section("Economic Policy", ECONOMIC),
                opinion_section("Environment & Climate", ENVIRONMENT),
                opinion_section("Immigration & Border", IMMIGRATION),
                opinion_section("Media & Trust", MEDIA),
            ]),
            category("migration", "Migration", "Where voters moved from", vec![
                section("Migration Origins", "Previous state of residence", tx::MIGRATION, MIGRATION),
            ]),
        ],
    }
}
