use std::collections::BTreeMap;

use serde::Serialize;
use tracing::warn;

use crate::data::DataTable;

/// Default allowed deviation of a `(state, taxonomy)` sum from 100.
pub const DEFAULT_SUM_TOLERANCE: f64 = 1.0;

/// A `(state, taxonomy)` group whose percentages do not add up to about 100.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PercentageSumIssue {
    pub state: String,
    pub taxonomy: String,
    pub sum: f64,
}

impl PercentageSumIssue {
    #[inline]
    pub fn deviation(&self) -> f64 { self.sum - 100.0 }
}

/// Every `(state, taxonomy)` group whose percentages sum to more than
/// `tolerance` away from 100, ordered by state then taxonomy.
pub fn check_percentage_sums(table: &DataTable, tolerance: f64) -> Vec<PercentageSumIssue> {
    let mut sums: BTreeMap<(&str, &str), f64> = BTreeMap::new();
    for row in table.rows() {
        *sums.entry((row.state_code.as_str(), row.taxonomy.as_str())).or_default() += row.population_pct;
    }

    sums.into_iter()
        .filter(|(_, sum)| (sum - 100.0).abs() > tolerance)
        .map(|((state, taxonomy), sum)| {
            warn!(state, taxonomy, sum, "segment percentages do not sum to 100");
            PercentageSumIssue { state: state.to_string(), taxonomy: taxonomy.to_string(), sum }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataRow;

    #[test]
    fn flags_groups_outside_tolerance() {
        let table = DataTable::new(vec![
            DataRow::new("CA", "voters_gender", "M", 49.5),
            DataRow::new("CA", "voters_gender", "F", 50.0),
            DataRow::new("NY", "voters_gender", "M", 40.0),
            DataRow::new("NY", "voters_gender", "F", 40.0),
            DataRow::new("NY", "hs_a", 70, 100.0),
        ]);

        let issues = check_percentage_sums(&table, DEFAULT_SUM_TOLERANCE);
        assert_eq!(issues, [PercentageSumIssue { state: "NY".into(), taxonomy: "voters_gender".into(), sum: 80.0 }]);
        assert_eq!(issues[0].deviation(), -20.0);

        assert_eq!(check_percentage_sums(&table, 0.1).len(), 2);
        assert!(check_percentage_sums(&table, 25.0).is_empty());
    }
}
