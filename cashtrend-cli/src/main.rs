use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;
mod state;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("CASHTREND_BUILD_SHA"), ")");

#[derive(Parser, Debug)]
#[command(name = "cashtrend", version = VERSION, about = "Cash on hand trend and deficit report")]
struct Cli {
    /// Config file (default: ~/.cashtrend/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a cash on hand CSV and print the finding
    Report {
        /// Cash on hand CSV (overrides [input] csv)
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Also write the finding to this report file (overrides [report] path)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Truncate the report file instead of appending
        #[arg(long)]
        overwrite: bool,

        /// Print the finding as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print only the trend scenario
    Classify {
        /// Cash on hand CSV (overrides [input] csv)
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Config file commands
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config file if none exists
    Init,
    /// Print the resolved config
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG > --verbose > warn. Logs go to stderr, findings to stdout.
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr).compact())
        .init();

    // HOME may be unset (cron, systemd); that only means no default config file
    let cfg_path = config::config_path(cli.config.as_deref(), state::cashtrend_home());

    let text = match cli.command {
        Command::Report {
            csv,
            output,
            overwrite,
            json,
        } => {
            let cfg = config::load_config(cfg_path.as_deref())?;
            commands::report(&cfg, csv, output, overwrite, json)?
        }

        Command::Classify { csv } => {
            let cfg = config::load_config(cfg_path.as_deref())?;
            commands::classify_only(&cfg, csv)?
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => {
                let path = cfg_path.context("HOME is not set: pass --config <path>")?;
                config::init_config(&path)?
            }
            ConfigCommand::Show => {
                let cfg = config::load_config(cfg_path.as_deref())?;
                commands::show_config(cfg_path.as_deref(), &cfg)?
            }
        },
    };

    println!("{text}");
    Ok(())
}
