//! Drift CLI - Command line interface
//!
//! Dumps the token stream of a changelog. Settings come from the command
//! line, falling back to an optional `drift.json` project file.

use clap::Parser;
use std::path::PathBuf;
use std::process;

mod config;
mod logging;
mod platform;

use crate::config::{Overrides, DEFAULT_PROJECT_FILE};
use crate::logging::LogFormat;
use crate::platform::{print_error, print_tokens, OutputFormat};
use drift_api::{init_config, scan_path, DriftError, LogLevel, RunConfig, SeekStrategy};
use drift_log::info;
use drift_vfs::NativeFileSystem;

#[derive(Parser)]
#[command(
    name = "drift",
    about = "Drift - SQL migration changelog scanner",
    version = "0.1.0"
)]
struct Cli {
    /// Changelog file to scan (default: `changelog` from the project file)
    #[arg(value_name = "CHANGELOG")]
    changelog: Option<PathBuf>,

    /// Project file path (default: ./drift.json, optional)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Include whitespace and comment tokens
    #[arg(long)]
    all: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Line recovery strategy for seek: replay or index
    #[arg(long, value_parser = parse_seek)]
    seek: Option<SeekStrategy>,

    /// Log level: silent, error, warn, info, debug, trace
    #[arg(long, value_parser = parse_log_level)]
    log_level: Option<LogLevel>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,
}

fn parse_seek(s: &str) -> Result<SeekStrategy, String> {
    SeekStrategy::parse(s).ok_or_else(|| format!("unknown seek strategy '{}'", s))
}

fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    LogLevel::parse(s).ok_or_else(|| format!("unknown log level '{}'", s))
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        print_error(&e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), DriftError> {
    let fs = NativeFileSystem::new();

    // Read drift.json (optional unless given explicitly)
    let explicit = cli.config.is_some();
    let project_path = cli
        .config
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PROJECT_FILE));
    let project = config::read_project_file(&project_path, &fs, explicit)?;

    let settings = config::resolve(
        &project_path,
        project,
        Overrides {
            changelog: cli.changelog,
            include_trivia: cli.all,
            seek: cli.seek,
            log_level: cli.log_level,
        },
    )?;

    let logger = logging::init(settings.log_level, cli.log_format);
    info!(logger, "Scanning {}", settings.changelog.display());

    // Initialize API config (global singleton for convenience)
    let run_config = RunConfig {
        scanner: settings.scanner,
        include_trivia: settings.include_trivia,
        logger,
    };
    init_config(run_config)
        .map_err(|_| DriftError::Config("global config already initialized".to_string()))?;

    let output = scan_path(&settings.changelog, &fs)?;
    print_tokens(&output, cli.format)
}
