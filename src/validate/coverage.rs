use serde::Serialize;

use crate::data::DataTable;
use crate::filter::RuleTable;

/// Which taxonomies in the data have a dedicated matching rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleCoverage {
    pub covered: Vec<String>,
    pub uncovered: Vec<String>,
    pub coverage_pct: f64,
}

pub fn rule_coverage(rules: &RuleTable, table: &DataTable) -> RuleCoverage {
    let (covered, uncovered): (Vec<_>, Vec<_>) = table.taxonomies().into_iter()
        .map(str::to_string)
        .partition(|taxonomy| rules.covers(taxonomy));

    let total = covered.len() + uncovered.len();
    let coverage_pct = if total > 0 { covered.len() as f64 / total as f64 * 100.0 } else { 0.0 };
    RuleCoverage { covered, uncovered, coverage_pct }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataRow;

    #[test]
    fn counts_rule_backed_taxonomies() {
        let table = DataTable::new(vec![
            DataRow::new("CA", "voters_gender", "M", 100.0),
            DataRow::new("CA", "hs_gun_control_support", 70, 100.0),
            DataRow::new("CA", "city", "Fresno", 100.0),
            DataRow::new("CA", "county", "Kern", 100.0),
        ]);
        let coverage = rule_coverage(&RuleTable::default(), &table);
        assert_eq!(coverage.covered, ["hs_gun_control_support", "voters_gender"]);
        assert_eq!(coverage.uncovered, ["city", "county"]);
        assert_eq!(coverage.coverage_pct, 50.0);
    }

    #[test]
    fn empty_table_has_zero_coverage() {
        let coverage = rule_coverage(&RuleTable::default(), &DataTable::default());
        assert_eq!(coverage.coverage_pct, 0.0);
    }
}
