// Rust guideline compliant 2026-02-06

//! Pascalia CLI Application
//!
//! Command-line interface for the Pascalia Orthodox calendar engine.

use anyhow::Result;
use clap::Parser;
use pascalia_cli::{commands, create_formatter, logging, should_use_color, OutputFormatter};
use pascalia_core::{CalendarEngine, Config, Tradition, TraditionPolicy};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pasc",
    version,
    about = "Pascalia: Orthodox liturgical calendar and fasting rules",
    long_about = "Pascalia computes Orthodox Pascha and generates the liturgical calendar of a year, with feasts, importance levels and fasting rules for each day.",
    after_help = "Examples:\n  pasc day 2024-03-25\n  pasc month 2024 12\n  pasc year 2024 --fasts-only\n  pasc pascha 2024 --to 2030\n  pasc --tradition RU --strict day\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Tradition code (RO, RU, GR, SRB, USA)
    #[arg(long, global = true)]
    tradition: Option<String>,

    /// Reject traditions without their own rule set instead of falling back
    #[arg(long, global = true)]
    strict: bool,

    /// Log level for diagnostics on stderr
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Write a default pascalia.toml
    Init,

    /// Show one day (today by default)
    Day {
        /// Date as YYYY-MM-DD
        date: Option<String>,
    },

    /// Show one month
    Month {
        /// Civil year
        year: i32,

        /// Month number (1-12)
        month: u32,
    },

    /// Show a whole year
    Year {
        /// Civil year
        year: i32,

        /// Show only fast days
        #[arg(long)]
        fasts_only: bool,
    },

    /// Show the date of Pascha
    Pascha {
        /// First year
        year: i32,

        /// Last year of a range
        #[arg(long)]
        to: Option<i32>,
    },
}

fn main() {
    let cli = Cli::parse();

    let use_color = !cli.no_color && should_use_color();
    let format = match cli.format.as_ref() {
        Some(OutputFormat::Json) => "json",
        Some(OutputFormat::Table) => "table",
        Some(OutputFormat::Plain) => "plain",
        None if cli.json => "json",
        None => "",
    };

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(pascalia_core::config::CONFIG_FILE_NAME));

    // Config errors are reported before a formatter can be chosen from it
    let config = match Config::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            let formatter = create_formatter(format, use_color);
            eprintln!("{}", formatter.format_error(&e.to_string()));
            std::process::exit(1);
        }
    };

    let format = if format.is_empty() {
        config.output_format.as_str()
    } else {
        format
    };
    let formatter = create_formatter(format, use_color);

    if let Err(e) = run(cli, config, config_path, formatter.as_ref()) {
        eprintln!("{}", formatter.format_error(&format!("{:#}", e)));
        std::process::exit(1);
    }
}

fn run(cli: Cli, mut config: Config, config_path: PathBuf, formatter: &dyn OutputFormatter) -> Result<()> {
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if cli.strict {
        config.tradition_policy = TraditionPolicy::Strict;
    }
    let tradition = match cli.tradition.as_deref() {
        Some(code) => code.parse::<Tradition>()?,
        None => config.default_tradition,
    };

    logging::init_tracing(&config.log_level, cli.json)?;
    tracing::debug!(path = %config_path.display(), %tradition, "configuration loaded");

    let engine = CalendarEngine::from_config(&config);

    match cli.command {
        Commands::Init => commands::init::execute(&config_path),
        Commands::Day { date } => commands::day::execute(&engine, date, tradition, formatter),
        Commands::Month { year, month } => {
            commands::month::execute(&engine, year, month, tradition, formatter)
        }
        Commands::Year { year, fasts_only } => {
            commands::year::execute(&engine, year, fasts_only, tradition, formatter)
        }
        Commands::Pascha { year, to } => commands::pascha::execute(year, to, formatter),
    }
}
