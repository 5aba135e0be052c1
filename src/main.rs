//! CLI entry point for the bikeshare statistics tool.
//!
//! With no subcommand, runs the interactive session on stdin/stdout.
//! `report` computes the statistics for one selection without prompting.

use anyhow::Result;
use bikeshare_stats::{
    config::{City, DataConfig},
    filter::TripFilter,
    prompt::Console,
    selection::{parse_day, parse_month},
    session::{run_interactive, run_report},
};
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare_stats")]
#[command(about = "Explore US bikeshare trip data", long_about = None)]
struct Cli {
    /// Directory holding chicago.csv, new_york_city.csv and washington.csv
    /// (falls back to $BIKESHARE_DATA_DIR, then the current directory)
    #[arg(short, long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the statistics for one city without prompting
    Report {
        /// chicago, "new york city" or washington
        #[arg(short, long)]
        city: String,

        /// all, or a month from january to june
        #[arg(short, long, default_value = "all")]
        month: String,

        /// all, or a day of the week
        #[arg(short = 'D', long, default_value = "all")]
        day: String,

        /// Emit the statistics as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: quiet stderr (stdout carries the prompts) + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/bikeshare_stats.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_stats.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new("warn")));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(non_blocking_file)
        .with_filter(
            EnvFilter::try_from_env("RUST_LOG_JSON").unwrap_or_else(|_| EnvFilter::new("debug")),
        );

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let config = DataConfig::resolve(cli.data_dir);
    info!(data_dir = %config.data_dir().display(), "Using trip data directory");

    let result = match cli.command {
        None => {
            let mut console = Console::new(std::io::stdin().lock(), std::io::stdout().lock());
            run_interactive(&config, &mut console)
        }
        Some(Commands::Report {
            city,
            month,
            day,
            json,
        }) => {
            let city: City = city.parse()?;
            let filter = TripFilter::new(parse_month(&month)?, parse_day(&day)?);
            run_report(&config, city, &filter, json, &mut std::io::stdout().lock())
        }
    };

    if let Err(e) = &result {
        error!(error = %format!("{e:#}"), "Run failed");
    }
    result
}
