//! `folio-review` -- offline review of portfolio data.
//!
//! `scan` turns an AI-extracted intake payload into a missing-field report
//! and writes the review artifact. `team` merges a roster of member
//! portfolios and prints the ordered team view.
//!
//! # Environment variables
//!
//! | Variable               | Default   | Description                          |
//! |------------------------|-----------|--------------------------------------|
//! | `FOLIO_PORTFOLIO_TYPE` | `artist`  | `artist` or `team` intake sections   |
//! | `FOLIO_SORT_MODE`      | `curated` | `curated` or `chronological`         |
//! | `FOLIO_OUTPUT_DIR`     | `.`       | Directory for review artifacts       |
//! | `RUST_LOG`             | `folio_review=info,folio_core=info` | Log filter |

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_core::{PortfolioType, SortMode};
use folio_review::commands;
use folio_review::config::ReviewConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for folio-review
#[derive(Parser, Debug)]
#[command(name = "folio-review")]
#[command(about = "Review intake payloads and team portfolios")]
#[command(version)]
struct Args {
    /// Intake sections to scan
    #[arg(long, global = true, default_value = "artist", env = "FOLIO_PORTFOLIO_TYPE")]
    portfolio_type: PortfolioType,

    /// Ordering applied to the team view
    #[arg(long, global = true, default_value = "curated", env = "FOLIO_SORT_MODE")]
    sort_mode: SortMode,

    /// Directory for review artifacts
    #[arg(long, global = true, default_value = ".", env = "FOLIO_OUTPUT_DIR")]
    output_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scan an extracted intake payload for fields that need review
    Scan { input: PathBuf },
    /// Merge a team roster and print the ordered team portfolio
    Team { roster: PathBuf },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_review=info,folio_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let config = ReviewConfig {
        portfolio_type: args.portfolio_type,
        sort_mode: args.sort_mode,
        output_dir: args.output_dir,
    };

    match args.command {
        Command::Scan { input } => {
            let outcome = commands::run_scan(&config, &input)?;
            let body = serde_json::to_string_pretty(&outcome.review.missing_fields)
                .context("Failed to serialize missing-field report")?;
            println!("{body}");
        }
        Command::Team { roster } => {
            let ordered = commands::run_team(&config, &roster)?;
            let body = serde_json::to_string_pretty(&ordered)
                .context("Failed to serialize team portfolio")?;
            println!("{body}");
        }
    }

    Ok(())
}
