use serde::Serialize;

/// One state's share of an estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateBreakdown {
    pub state: String,
    pub population: u64,
    pub matching_population: f64,
    /// Match percentage within the state (0-100).
    pub percentage: f64,
}

/// Outcome of one estimation call. `state_breakdown` only lists states with
/// a positive matching population, largest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimationResult {
    pub total_population: u64,
    pub matching_population: f64,
    pub percentage: f64,
    pub state_breakdown: Vec<StateBreakdown>,
}

impl EstimationResult {
    /// The result for an empty selection.
    pub fn empty() -> Self {
        Self {
            total_population: 0,
            matching_population: 0.0,
            percentage: 0.0,
            state_breakdown: Vec::new(),
        }
    }

    /// Breakdown entry for `state`, if it matched anyone.
    pub fn state(&self, state: &str) -> Option<&StateBreakdown> {
        self.state_breakdown.iter().find(|entry| entry.state == state)
    }
}

impl Default for EstimationResult {
    fn default() -> Self { Self::empty() }
}
