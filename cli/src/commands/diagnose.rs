use anyhow::Result;
use popscope::{Estimator, validate};

use crate::cli::{Cli, DiagnoseArgs, ReportFormat};

use super::{load_catalog, load_table, print_json};

pub fn run(_cli: &Cli, args: &DiagnoseArgs) -> Result<()> {
    let table = load_table(&args.data)?;
    let estimator = Estimator::builder()
        .catalog(load_catalog(args.catalog.as_deref())?)
        .build();

    let report = if args.filters.is_empty() {
        validate::diagnose_all(&estimator, &table)
    } else {
        validate::diagnose_filters(&estimator, &table, args.filters.iter().map(String::as_str))
    };

    let shown = report.diagnostics.iter()
        .filter(|d| !args.broken || !d.status.is_working())
        .collect::<Vec<_>>();

    match args.format {
        ReportFormat::Json => print_json(&shown)?,
        ReportFormat::Table => {
            for diagnostic in shown {
                println!(
                    "{:<52} {:<11} {:<36} rows={:<5} [{}]",
                    diagnostic.filter_id,
                    diagnostic.status.to_string(),
                    diagnostic.taxonomy,
                    diagnostic.matching_rows,
                    diagnostic.sample_segments.join(", "),
                );
                for issue in &diagnostic.issues {
                    println!("    - {issue}");
                }
            }
            println!("[diagnose] {} working, {} broken", report.working, report.broken);
        }
    }
    Ok(())
}
