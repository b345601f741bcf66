use anyhow::Result;
use popscope::{Estimator, io::breakdown_to_csv_string};
use tracing::info;

use crate::cli::{Cli, EstimateArgs, OutputFormat};

use super::{load_catalog, load_populations, load_table, print_json};

pub fn run(_cli: &Cli, args: &EstimateArgs) -> Result<()> {
    let table = load_table(&args.data)?;

    let mut builder = Estimator::builder()
        .catalog(load_catalog(args.catalog.as_deref())?)
        .populations(load_populations(&args.populations)?);
    if let Some(threshold) = args.threshold {
        builder = builder.opinion_threshold(threshold);
    }
    let estimator = builder.build();

    info!(filters = args.filters.len(), states = estimator.populations().len(), "estimating");
    let result = estimator.estimate(&table, &args.filters);

    match args.format {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Csv => print!("{}", breakdown_to_csv_string(&result)?),
        OutputFormat::Table => {
            println!("total population:    {:>14}", result.total_population);
            println!("matching population: {:>14.0}", result.matching_population);
            println!("percentage:          {:>13.2}%", result.percentage);
            if !result.state_breakdown.is_empty() {
                println!();
                println!("{:<6} {:>14} {:>14} {:>8}", "state", "population", "matching", "pct");
                for entry in &result.state_breakdown {
                    println!(
                        "{:<6} {:>14} {:>14.0} {:>7.2}%",
                        entry.state, entry.population, entry.matching_population, entry.percentage
                    );
                }
            }
        }
    }
    Ok(())
}
