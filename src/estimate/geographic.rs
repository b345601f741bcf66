use std::collections::BTreeSet;

use crate::filter::FilterCombination;

/// The states an estimate is restricted to by explicit `state-XX` filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StateScope {
    /// No geographic filter: every configured state is evaluated.
    All,
    Selected(BTreeSet<String>),
}

impl StateScope {
    pub(crate) fn from_combinations(combinations: &[FilterCombination]) -> Self {
        let selected = combinations.iter()
            .filter_map(FilterCombination::target_state)
            .map(str::to_string)
            .collect::<BTreeSet<_>>();
        if selected.is_empty() { StateScope::All } else { StateScope::Selected(selected) }
    }

    #[inline]
    pub(crate) fn includes(&self, state: &str) -> bool {
        match self {
            StateScope::All => true,
            StateScope::Selected(states) => states.contains(state),
        }
    }

    #[inline]
    pub(crate) fn is_restricted(&self) -> bool { matches!(self, StateScope::Selected(_)) }

    /// Percentage decided by geography alone, before any data filter runs:
    /// 0 outside the selection, 100 inside it when there is nothing else to
    /// apply. `None` means the data filters decide.
    pub(crate) fn override_percentage(&self, state: &str, has_data_filters: bool) -> Option<f64> {
        if !self.includes(state) {
            Some(0.0)
        } else if self.is_restricted() && !has_data_filters {
            Some(100.0)
        } else {
            None
        }
    }
}
