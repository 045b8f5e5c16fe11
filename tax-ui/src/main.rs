use std::{net::SocketAddr, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, warn};

use tax_ui::{UiConfig, app, logging, web};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Compares German income tax for a married couple under tax classes 3/5,
/// 4/4 and single filing (simplified 2024 rules).
#[derive(Debug, Parser)]
#[command(name = "marriage-tax", version, about)]
struct Cli {
    /// TOML file with bind address and form defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `tax_core=trace`. `RUST_LOG` takes precedence.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Also append log records to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the web form (default).
    Serve {
        /// Listen address, overrides the config file.
        #[arg(long)]
        bind: Option<SocketAddr>,
    },

    /// Print the comparison for two incomes.
    Compare {
        /// Yearly income of person 1; defaults to the configured value.
        #[arg(long)]
        income_1: Option<String>,

        /// Yearly income of person 2; defaults to the configured value.
        #[arg(long)]
        income_2: Option<String>,
    },

    /// Print the tax for one income and class.
    Tax {
        #[arg(long)]
        income: String,

        /// Tax class (1, 3, 4 or 5; others use multiplier 1.0).
        #[arg(long, default_value_t = 1)]
        class: u8,

        /// Tax as single, ignoring the class multiplier.
        #[arg(long)]
        single: bool,
    },

    /// Print a comparison for every couple in a CSV file.
    Batch {
        #[arg(long)]
        file: PathBuf,
    },
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level.as_deref());
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }

    let config = UiConfig::load(cli.config.as_deref())?;
    debug!(?config, "resolved configuration");

    match cli.command.unwrap_or(Command::Serve { bind: None }) {
        Command::Serve { bind } => web::run_server(config.with_bind(bind)).await?,
        Command::Compare { income_1, income_2 } => {
            let income_1 = income_1.unwrap_or_else(|| config.default_income_1.to_string());
            let income_2 = income_2.unwrap_or_else(|| config.default_income_2.to_string());

            let report = app::compare_report(&income_1, &income_2).map_err(|errors| {
                for error in &errors {
                    warn!(%error, "invalid income");
                }
                app::invalid_input_error(&errors)
            })?;
            println!("{report}");
        }
        Command::Tax {
            income,
            class,
            single,
        } => {
            println!("{}", app::single_tax_line(&income, class, single)?);
        }
        Command::Batch { file } => {
            let reports = app::batch_reports(&file)
                .with_context(|| format!("batch run over {} failed", file.display()))?;
            for (record, report) in reports {
                println!("=== {} ===", record.display_label());
                println!("{report}");
                println!();
            }
        }
    }

    Ok(())
}
