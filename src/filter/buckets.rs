//! Literal segment labels used by the bracket and category rules.
//! These must match the labels in the segment table byte for byte.

pub(crate) const AGE_MIN: u32 = 18;
pub(crate) const AGE_MAX: u32 = 100;

pub(crate) const AFRICAN_AMERICAN: [&str; 2] = [
    "African or Af-Am Self Reported",
    "Likely Af-Am (Modeled)",
];

pub(crate) const HISPANIC: [&str; 1] = ["Hispanic"];

pub(crate) const WHITE: [&str; 16] = [
    "English/Welsh", "German", "Irish", "Italian", "French", "Dutch (Netherlands)",
    "Norwegian", "Swedish", "Danish", "Finnish", "Polish", "Czech", "Hungarian",
    "Austrian", "Swiss", "Scots",
];

pub(crate) const ASIAN: [&str; 19] = [
    "Chinese", "Japanese", "Korean", "Vietnamese", "Filipino", "Indian/Hindu",
    "Pakistani", "Bangladeshi", "Sri Lankan", "Thai", "Indonesian", "Malay",
    "Myanmar (Burmese)", "Laotian", "Khmer", "Tibetan", "Bhutanese", "Tonga",
    "Unknown Asian",
];

pub(crate) const OTHER_ETHNICITY: [&str; 29] = [
    "Native American", "Hawaiian", "Arab", "Armenian", "Persian", "Turkish",
    "Albanian", "Bulgarian", "Croatian", "Serbian", "Slovenian", "Slovakian",
    "Romanian", "Russian (omitting former Soviet States)", "Ukrainian", "Byelorussian",
    "Estonian", "Latvian", "Lithuanian", "Georgian", "Azerb", "Kazak", "Uzbek",
    "Turkmenistan", "Mongolian", "Afghan", "Belgian", "Greek", "Portuguese",
];

/// Ethnicity groups keyed by their filter-id token, checked in order.
pub(crate) const ETHNICITY_GROUPS: [(&str, &[&str]); 5] = [
    ("african_american", &AFRICAN_AMERICAN),
    ("hispanic", &HISPANIC),
    ("white", &WHITE),
    ("asian", &ASIAN),
    ("other", &OTHER_ETHNICITY),
];

/// Household income brackets keyed by their filter-id token.
pub(crate) const INCOME_BRACKETS: [(&str, &[&str]); 5] = [
    ("under_25k", &["$1-25000"]),
    ("25k_50k", &["$25001-50000"]),
    ("50k_75k", &["$50001-75000"]),
    ("75k_100k", &["$75001-100000"]),
    ("over_100k", &[
        "$100001-125000", "$125001-150000", "$150001-175000", "$175001-200000",
        "$200001-225000", "$225001-250000", "$250000+",
    ]),
];

/// Vehicle makes keyed by their lower-case filter-id token.
pub(crate) const AUTO_MAKES: [(&str, &str); 7] = [
    ("ford", "Ford"),
    ("toyota", "Toyota"),
    ("kia", "Kia"),
    ("hyundai", "Hyundai"),
    ("honda", "Honda"),
    ("chevrolet", "Chevrolet"),
    ("nissan", "Nissan"),
];
