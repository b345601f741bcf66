use anyhow::Result;
use popscope::{RuleTable, validate};

use crate::cli::{Cli, ValidateArgs};

use super::{load_catalog, load_table};

pub fn run(_cli: &Cli, args: &ValidateArgs) -> Result<()> {
    let table = load_table(&args.data)?;
    let catalog = load_catalog(args.catalog.as_deref())?;

    println!("[validate] {} rows, {} states", table.len(), table.states().len());

    let issues = validate::check_percentage_sums(&table, args.tolerance);
    if issues.is_empty() {
        println!("[validate] all percentage sums within {} of 100", args.tolerance);
    } else {
        println!("[validate] {} groups outside tolerance {}:", issues.len(), args.tolerance);
        for issue in &issues {
            println!("  {:<4} {:<48} sum={:.2} ({:+.2})", issue.state, issue.taxonomy, issue.sum, issue.deviation());
        }
    }

    println!("[validate] taxonomies:");
    for summary in validate::summarize_taxonomies(&table) {
        println!(
            "  {:<48} rows={:<6} segments={:<5} states={}",
            summary.taxonomy,
            summary.record_count,
            summary.segments.len(),
            summary.states.iter().map(String::as_str).collect::<Vec<_>>().join(","),
        );
    }

    let missing = validate::missing_taxonomies(&catalog, &table);
    if !missing.is_empty() {
        println!("[validate] catalog taxonomies without data: {}", missing.join(", "));
    }

    let coverage = validate::rule_coverage(&RuleTable::default(), &table);
    println!(
        "[validate] rule coverage {:.1}% ({} covered, {} default)",
        coverage.coverage_pct, coverage.covered.len(), coverage.uncovered.len()
    );
    Ok(())
}
