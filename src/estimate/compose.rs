use std::{cmp::Ordering, collections::BTreeMap};

use crate::census::StatePopulations;

use super::{EstimationResult, StateBreakdown};

/// Scale per-state match percentages by population.
///
/// Every state in `per_state` counts toward the total, matched or not.
/// States without a configured population contribute zero.
pub fn compose(per_state: &BTreeMap<String, f64>, populations: &StatePopulations) -> EstimationResult {
    let mut total_population = 0_u64;
    let mut matching_population = 0.0;
    let mut state_breakdown = Vec::new();

    for (state, &percentage) in per_state {
        let population = populations.get(state);
        let matching = percentage / 100.0 * population as f64;
        total_population += population;
        matching_population += matching;
        if matching > 0.0 {
            state_breakdown.push(StateBreakdown {
                state: state.clone(),
                population,
                matching_population: matching,
                percentage,
            });
        }
    }

    state_breakdown.sort_by(|a, b| {
        b.matching_population.partial_cmp(&a.matching_population)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.state.cmp(&b.state))
    });

    let percentage = if total_population > 0 {
        matching_population / total_population as f64 * 100.0
    } else {
        0.0
    };

    EstimationResult { total_population, matching_population, percentage, state_breakdown }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn per_state(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
        entries.iter().map(|&(state, pct)| (state.to_string(), pct)).collect()
    }

    #[test]
    fn scales_and_sorts() {
        let pops = StatePopulations::from_iter([("CA", 1000), ("NY", 500), ("WY", 100)]);
        let result = compose(&per_state(&[("CA", 10.0), ("NY", 50.0), ("WY", 0.0)]), &pops);

        assert_eq!(result.total_population, 1600);
        assert_eq!(result.matching_population, 350.0);
        assert!((result.percentage - 350.0 / 1600.0 * 100.0).abs() < 1e-9);

        let states = result.state_breakdown.iter().map(|entry| entry.state.as_str()).collect::<Vec<_>>();
        assert_eq!(states, ["NY", "CA"]);
        assert_eq!(result.state_breakdown[0].matching_population, 250.0);
        assert_eq!(result.state_breakdown[0].percentage, 50.0);
    }

    #[test]
    fn ties_break_by_state_code() {
        let pops = StatePopulations::from_iter([("NY", 100), ("CA", 100)]);
        let result = compose(&per_state(&[("NY", 20.0), ("CA", 20.0)]), &pops);
        let states = result.state_breakdown.iter().map(|entry| entry.state.as_str()).collect::<Vec<_>>();
        assert_eq!(states, ["CA", "NY"]);
    }

    #[test]
    fn zero_population_is_zero_percent() {
        let pops = StatePopulations::from_iter([("CA", 0)]);
        let result = compose(&per_state(&[("CA", 100.0), ("TX", 100.0)]), &pops);
        assert_eq!(result.total_population, 0);
        assert_eq!(result.percentage, 0.0);
        assert!(result.state_breakdown.is_empty());
    }
}
