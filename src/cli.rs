//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use perfgate::config::DEFAULT_CONFIG_FILE;
use perfgate::output::OutputMode;

/// perfgate - performance threshold gate
#[derive(Parser, Debug)]
#[command(
    name = "perfgate",
    version,
    about = "Evaluate web performance metrics against threshold rules",
    long_about = "Evaluate web performance metrics against threshold rules.\n\n\
                  Rules declare which metric values count as violations.\n\
                  Hard violations fail the gate and fire notification actions."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a starter configuration file
    Init {
        /// Overwrite an existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Evaluate a metric snapshot against the configured rules
    Check {
        /// Path to the metrics JSON file (an object of metric -> value)
        #[arg(short, long)]
        metrics: PathBuf,

        /// Path to the configuration file
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,

        /// Evaluate a JSON rule list instead of the configured rules
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Fire the configured notification actions on violations
        #[arg(long)]
        dispatch: bool,

        /// Run in CI mode (report failure through the exit error, not exit(1))
        #[arg(long)]
        ci: bool,
    },

    /// List the configured rules
    Rules {
        /// Path to the configuration file
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Init { force }) => commands::init(force, output_mode),
        Some(Command::Check {
            metrics,
            config,
            rules,
            dispatch,
            ci,
        }) => commands::check(&metrics, &config, rules.as_deref(), dispatch, ci, output_mode),
        Some(Command::Rules { config }) => commands::rules(&config, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("perfgate v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("perfgate v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'perfgate --help' for usage");
                println!("Run 'perfgate init' to get started");
            }
            Ok(())
        },
    }
}
