mod tables;

use std::{collections::BTreeMap, path::Path};

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

/// Static mapping from 2-letter state code to population, used to scale
/// per-state match percentages. The keys are the configured state set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatePopulations {
    populations: BTreeMap<String, u64>,
}

impl StatePopulations {
    /// The three states covered by the bundled segment data (CA, NY, WY).
    pub fn sample() -> Self {
        tables::SAMPLE_POPULATIONS.iter().copied().collect()
    }

    /// 2020 census populations for the 50 states and DC.
    pub fn census_2020() -> Self {
        tables::CENSUS_2020_POPULATIONS.iter().copied().collect()
    }

    /// Population for `state`, or 0 if the state is not configured.
    #[inline]
    pub fn get(&self, state: &str) -> u64 {
        self.populations.get(state).copied().unwrap_or(0)
    }

    #[inline]
    pub fn contains(&self, state: &str) -> bool { self.populations.contains_key(state) }

    /// Configured states, sorted by code.
    pub fn states(&self) -> impl Iterator<Item = &str> + '_ {
        self.populations.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.populations.iter().map(|(state, &pop)| (state.as_str(), pop))
    }

    #[inline] pub fn len(&self) -> usize { self.populations.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.populations.is_empty() }

    /// Sum of all configured state populations.
    pub fn total(&self) -> u64 { self.populations.values().sum() }

    /// Insert or replace one state's population (codes are upper-cased).
    pub fn insert(&mut self, state: &str, population: u64) {
        self.populations.insert(state.trim().to_ascii_uppercase(), population);
    }

    /// Parse a JSON object of the form `{"CA": 39538223, "NY": 20201249}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, u64> = serde_json::from_str(json)
            .context("[census] Failed to parse state populations JSON")?;
        ensure!(!raw.is_empty(), "[census] State populations JSON is empty");

        let mut populations = Self { populations: BTreeMap::new() };
        for (state, pop) in raw {
            ensure!(
                state.trim().len() == 2 && state.trim().bytes().all(|b| b.is_ascii_alphabetic()),
                "[census] Invalid state code '{state}'"
            );
            populations.insert(&state, pop);
        }
        Ok(populations)
    }

    /// Read a JSON population table from `path`.
    pub fn read_from_json(path: &Path) -> Result<Self> {
        let json = crate::io::read_json_string(path)?;
        Self::from_json_str(&json)
            .with_context(|| format!("[census] Invalid population table in {}", path.display()))
    }
}

impl Default for StatePopulations {
    fn default() -> Self { Self::sample() }
}

impl<'a> FromIterator<(&'a str, u64)> for StatePopulations {
    fn from_iter<I: IntoIterator<Item = (&'a str, u64)>>(iter: I) -> Self {
        let mut populations = Self { populations: BTreeMap::new() };
        for (state, pop) in iter { populations.insert(state, pop); }
        populations
    }
}
