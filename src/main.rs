//! CLI entry point for the launch value analysis.
//!
//! Provides subcommands for finding the cheapest eligible country per launch
//! class and for inspecting the per-country spend that drives eligibility.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use launch_value::{
    config::PipelineConfig,
    loader::{InputPaths, load_tables},
    output::{append_history, print_pretty, render_spend, render_table, to_json, write_csv},
    pipeline,
};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "launch_value")]
#[command(about = "Find the cheapest countries to launch payloads to orbit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick the cheapest eligible country for each launch class
    Analyze {
        #[command(flatten)]
        inputs: InputArgs,

        #[command(flatten)]
        policy: PolicyArgs,

        /// Output format for the result table
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Optional: CSV file to append this run's results to
        #[arg(long, value_name = "CSV")]
        history: Option<PathBuf>,
    },
    /// Show each country's total launch spend and whether it is eligible
    Spend {
        #[command(flatten)]
        inputs: InputArgs,

        #[command(flatten)]
        policy: PolicyArgs,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Single-owner launch data
    #[arg(long, value_name = "CSV", default_value = "datasets/SO-space.csv")]
    single_owner: PathBuf,

    /// Joint-venture launch data
    #[arg(long, value_name = "CSV", default_value = "datasets/JV-space.csv")]
    joint_venture: PathBuf,

    /// Company information
    #[arg(long, value_name = "CSV", default_value = "datasets/company_info.csv")]
    companies: PathBuf,
}

impl From<InputArgs> for InputPaths {
    fn from(args: InputArgs) -> Self {
        InputPaths {
            single_owner: args.single_owner,
            joint_venture: args.joint_venture,
            companies: args.companies,
        }
    }
}

#[derive(Args)]
struct PolicyArgs {
    /// JSON file with selection policy; flags below override it
    #[arg(short, long, value_name = "JSON")]
    config: Option<PathBuf>,

    /// Orbit altitude launches must target
    #[arg(long)]
    orbit: Option<String>,

    /// Launches need a QA rating strictly above this
    #[arg(long)]
    min_qa: Option<f64>,

    /// Minimum total launch spend for a country to be eligible
    #[arg(long)]
    spend_threshold: Option<f64>,

    /// Country assigned to launches with no known company country
    #[arg(long)]
    default_country: Option<String>,
}

impl PolicyArgs {
    fn resolve(self) -> Result<PipelineConfig> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::load(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => PipelineConfig::default(),
        };

        if let Some(orbit) = self.orbit {
            config.target_orbit = orbit;
        }
        if let Some(min_qa) = self.min_qa {
            config.min_qa = min_qa;
        }
        if let Some(threshold) = self.spend_threshold {
            config.spend_threshold = threshold;
        }
        if let Some(country) = self.default_country {
            config.default_country = country;
        }

        Ok(config)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/launch_value.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("launch_value.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            inputs,
            policy,
            format,
            history,
        } => {
            let config = policy.resolve()?;
            let paths: InputPaths = inputs.into();
            let tables = load_tables(&paths).context("loading launch data")?;
            let report = pipeline::run(&tables, &config)?;
            print_pretty(&report);

            match format {
                OutputFormat::Table => print!("{}", render_table(&report)),
                OutputFormat::Csv => write_csv(std::io::stdout().lock(), &report)?,
                OutputFormat::Json => println!("{}", to_json(&report)?),
            }

            if let Some(path) = history {
                append_history(&path, &report)
                    .with_context(|| format!("appending history to {}", path.display()))?;
                info!(path = %path.display(), "Report appended to history");
            }
        }
        Commands::Spend { inputs, policy } => {
            let config = policy.resolve()?;
            let paths: InputPaths = inputs.into();
            let tables = load_tables(&paths).context("loading launch data")?;
            let spend = pipeline::spend_report(&tables, &config);

            info!(
                countries = spend.len(),
                threshold = config.spend_threshold,
                "Country spend computed"
            );
            print!("{}", render_spend(&spend));
        }
    }

    Ok(())
}
