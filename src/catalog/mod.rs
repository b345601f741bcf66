//! The filter catalog: every selectable filter id with its taxonomy and a
//! human label, grouped into categories and sections for display.
//!
//! The estimation core tolerates ids that are not listed here. The catalog
//! only feeds taxonomy lookup, diagnostics and front ends.
mod builtin;

use std::{collections::BTreeSet, path::Path};

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

/// Taxonomy recorded for `state-XX` geographic items.
pub const GEOGRAPHIC_TAXONOMY: &str = "state";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterItem {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    pub taxonomy: String,
}

impl FilterItem {
    pub fn new(id: &str, label: &str, description: &str, taxonomy: &str) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: description.into(),
            taxonomy: taxonomy.into(),
        }
    }

    #[inline]
    pub fn is_geographic(&self) -> bool { self.taxonomy == GEOGRAPHIC_TAXONOMY }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSection {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub items: Vec<FilterItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCategory {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub sections: Vec<FilterSection>,
}

/// Single versioned registry of selectable filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCatalog {
    pub version: String,
    pub categories: Vec<FilterCategory>,
}

impl FilterCatalog {
    /// A catalog with no entries; taxonomy lookup falls back to naming rules.
    pub fn empty() -> Self {
        Self { version: String::new(), categories: Vec::new() }
    }

    /// The catalog bundled with the crate.
    pub fn builtin() -> Self { builtin::builtin_catalog() }

    /// All items in display order.
    pub fn items(&self) -> impl Iterator<Item = &FilterItem> + '_ {
        self.categories.iter()
            .flat_map(|category| &category.sections)
            .flat_map(|section| &section.items)
    }

    #[inline] pub fn len(&self) -> usize { self.items().count() }

    #[inline] pub fn is_empty(&self) -> bool { self.items().next().is_none() }

    /// First item with the given id.
    pub fn find(&self, id: &str) -> Option<&FilterItem> {
        self.items().find(|item| item.id == id)
    }

    pub fn taxonomy_of(&self, id: &str) -> Option<&str> {
        self.find(id).map(|item| item.taxonomy.as_str())
    }

    /// Distinct data taxonomies referenced by the catalog (geographic items excluded).
    pub fn taxonomies(&self) -> BTreeSet<&str> {
        self.items()
            .filter(|item| !item.is_geographic())
            .map(|item| item.taxonomy.as_str())
            .collect()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)
            .context("[catalog] Failed to parse filter catalog JSON")?;
        for item in catalog.items() {
            ensure!(!item.id.trim().is_empty(), "[catalog] Filter item with empty id");
            ensure!(!item.taxonomy.trim().is_empty(), "[catalog] Filter '{}' has no taxonomy", item.id);
        }
        Ok(catalog)
    }

    pub fn read_from_json(path: &Path) -> Result<Self> {
        let json = crate::io::read_json_string(path)?;
        Self::from_json_str(&json)
            .with_context(|| format!("[catalog] Invalid filter catalog in {}", path.display()))
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("[catalog] Failed to serialize filter catalog")
    }
}

impl Default for FilterCatalog {
    fn default() -> Self { Self::builtin() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lookup() {
        let catalog = FilterCatalog::builtin();
        assert_eq!(catalog.version, builtin::BUILTIN_VERSION);
        assert_eq!(catalog.taxonomy_of("voters_gender_female"), Some("voters_gender"));
        assert_eq!(catalog.taxonomy_of("consumerdata_auto_make_honda"), Some("consumerdata_auto_make_1"));
        assert_eq!(catalog.taxonomy_of("hs_gun_control_support_opposer"), Some("hs_gun_control_support"));
        assert_eq!(catalog.taxonomy_of("state-CA"), Some(GEOGRAPHIC_TAXONOMY));
        assert_eq!(catalog.find("hs_nothing"), None);

        let item = catalog.find("voters_age_75_plus").unwrap();
        assert_eq!(item.label, "Ages 75+");
    }

    #[test]
    fn taxonomies_skip_geography() {
        let catalog = FilterCatalog::builtin();
        let taxonomies = catalog.taxonomies();
        assert!(!taxonomies.contains(GEOGRAPHIC_TAXONOMY));
        assert!(taxonomies.contains("voters_movedfrom_state"));
        assert!(taxonomies.contains("hs_military_family_relationship_no"));
    }

    #[test]
    fn ids_are_unique() {
        let catalog = FilterCatalog::builtin();
        let ids = catalog.items().map(|item| item.id.as_str()).collect::<BTreeSet<_>>();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn json_round_trip() {
        let catalog = FilterCatalog::builtin();
        let json = catalog.to_json_string().unwrap();
        assert_eq!(FilterCatalog::from_json_str(&json).unwrap(), catalog);
    }

    #[test]
    fn json_validation() {
        let json = r#"{"version": "x", "categories": [{"id": "c", "title": "C", "sections": [
            {"title": "S", "items": [{"id": "a_b", "label": "A", "taxonomy": ""}]}
        ]}]}"#;
        assert!(FilterCatalog::from_json_str(json).is_err());
        assert!(FilterCatalog::from_json_str("[]").is_err());

        let ok = json.replace(r#""taxonomy": """#, r#""taxonomy": "a""#);
        let catalog = FilterCatalog::from_json_str(&ok).unwrap();
        assert_eq!(catalog.taxonomy_of("a_b"), Some("a"));
        assert_eq!(catalog.find("a_b").map(|item| item.description.as_str()), Some(""));
    }

    #[test]
    fn empty_catalog() {
        let catalog = FilterCatalog::empty();
        assert!(catalog.is_empty());
        assert_eq!(catalog.taxonomy_of("voters_gender_male"), None);
    }
}
