use anyhow::Result;

use crate::cli::{CatalogArgs, Cli, ReportFormat};

use super::load_catalog;

pub fn run(_cli: &Cli, args: &CatalogArgs) -> Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    match args.format {
        ReportFormat::Json => println!("{}", catalog.to_json_string()?),
        ReportFormat::Table => {
            println!("filter catalog {} ({} filters)", catalog.version, catalog.len());
            for category in &catalog.categories {
                println!("\n{}", category.title);
                for section in &category.sections {
                    println!("  {}", section.title);
                    for item in &section.items {
                        println!("    {:<52} {:<40} {}", item.id, item.label, item.taxonomy);
                    }
                }
            }
        }
    }
    Ok(())
}
