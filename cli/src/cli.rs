use std::path::PathBuf;

/// Population estimation CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "popscope", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Estimate the population matching a set of filters
    Estimate(EstimateArgs),

    /// Check segment percentage sums and summarize the data
    Validate(ValidateArgs),

    /// Report how each filter id resolves against the data
    Diagnose(DiagnoseArgs),

    /// Print the filter catalog
    Catalog(CatalogArgs),
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// Formats for the report-style commands (diagnose, catalog).
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Table,
    Json,
}

#[derive(clap::Args, Debug)]
pub struct EstimateArgs {
    /// Segment table CSV (state_code, taxonomy, segment, population_pct)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub data: PathBuf,

    /// Filter ids, e.g. voters_gender_female state-CA
    #[arg(required = true)]
    pub filters: Vec<String>,

    /// Filter catalog JSON, defaults to the built-in catalog
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub catalog: Option<PathBuf>,

    /// Population table: "sample", "census2020" or a JSON file
    #[arg(short, long, default_value = "sample")]
    pub populations: String,

    /// Scaled score cut between supporters and opposers
    #[arg(long)]
    pub threshold: Option<f64>,

    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub data: PathBuf,

    /// Allowed deviation of a (state, taxonomy) sum from 100
    #[arg(short, long, default_value_t = popscope::validate::DEFAULT_SUM_TOLERANCE)]
    pub tolerance: f64,

    /// Filter catalog JSON, defaults to the built-in catalog
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub catalog: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct DiagnoseArgs {
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub data: PathBuf,

    /// Filter ids to check, defaults to every catalog filter
    pub filters: Vec<String>,

    /// Filter catalog JSON, defaults to the built-in catalog
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub catalog: Option<PathBuf>,

    /// Only list filters that are not working
    #[arg(long)]
    pub broken: bool,

    #[arg(short, long, value_enum, default_value_t)]
    pub format: ReportFormat,
}

#[derive(clap::Args, Debug)]
pub struct CatalogArgs {
    /// Filter catalog JSON, defaults to the built-in catalog
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub catalog: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t)]
    pub format: ReportFormat,
}
