mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use plan2ics_core::{PlanConfig, UidStrategy};

#[derive(Parser)]
#[command(name = "plan2ics")]
#[command(about = "Turn a plain-text yearly reading plan into an iCalendar file")]
struct Cli {
    /// Config file (defaults to ~/.config/plan2ics/config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a plan file into an .ics calendar
    Convert {
        /// Plan file to read
        plan: PathBuf,

        /// Where to write the calendar (stdout if omitted)
        output: Option<PathBuf>,

        /// Date of day 1 (YYYY-MM-DD)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Calendar name shown by calendar apps
        #[arg(long)]
        name: Option<String>,

        /// Translation code for the lookup link (e.g. "NIV")
        #[arg(long)]
        translation: Option<String>,

        /// Fail on tokens before the first book on a day line
        #[arg(long)]
        strict: bool,

        /// Give every event a fresh UID instead of a stable one
        #[arg(long)]
        random_uids: bool,
    },
    /// Parse a plan file and show its readings without writing anything
    Check {
        /// Plan file to read
        plan: PathBuf,

        /// Fail on tokens before the first book on a day line
        #[arg(long)]
        strict: bool,

        /// Print the parsed plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the config file location and effective settings
    Config {
        /// Write a commented default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Convert {
            plan,
            output,
            start,
            name,
            translation,
            strict,
            random_uids,
        } => {
            let mut config = PlanConfig::load(config_path)?;
            if let Some(start) = start {
                config.start_date = start;
            }
            if let Some(name) = name {
                config.calendar_name = name;
            }
            if let Some(translation) = translation {
                config.translation = translation;
            }
            if strict {
                config.strict = true;
            }
            if random_uids {
                config.uid_strategy = UidStrategy::Random;
            }
            commands::convert::run(&plan, output.as_deref(), &config)
        }
        Commands::Check { plan, strict, json } => {
            let mut config = PlanConfig::load(config_path)?;
            if strict {
                config.strict = true;
            }
            commands::check::run(&plan, &config, json)
        }
        // Works even when the config file is missing or broken
        Commands::Config { init } => commands::config::run(config_path, init),
    }
}

/// Log to stderr so calendar output on stdout stays clean.
fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .init();
}
