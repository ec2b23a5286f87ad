//! Subcommand implementations. Each one reads its input file, runs the
//! engines from `folio_core`, and returns the result for `main` to print.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use folio_core::intake::IntakeReview;
use folio_core::merge::merge;
use folio_core::ordering::{order_portfolio, OrderedPortfolio, SectionModes};
use folio_core::MemberContribution;
use serde_json::Value;

use crate::config::ReviewConfig;

/// Suffix of the artifact written next to the accepted portfolio.
pub const REVIEW_SUFFIX: &str = "review.json";

/// Result of `scan`: the review plus where it was written.
#[derive(Debug)]
pub struct ScanOutcome {
    pub review: IntakeReview,
    pub artifact_path: PathBuf,
}

/// Scan an extracted intake payload and write its review artifact.
pub fn run_scan(config: &ReviewConfig, input: &Path) -> Result<ScanOutcome> {
    let raw = fs::read_to_string(input)
        .with_context(|| format!("Failed to read intake payload {}", input.display()))?;
    let payload: Value = serde_json::from_str(&raw)
        .with_context(|| format!("Intake payload {} is not valid JSON", input.display()))?;

    let review = IntakeReview::build(&payload, config.portfolio_type);

    tracing::info!(
        portfolio_type = %config.portfolio_type,
        total = review.summary.total,
        "Scanned intake payload"
    );
    for count in &review.summary.by_section {
        tracing::debug!(section = %count.section, count = count.count, "Fields to review");
    }

    let artifact_path = artifact_path(&config.output_dir, input);
    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            config.output_dir.display()
        )
    })?;
    let body = serde_json::to_string_pretty(&review).context("Failed to serialize review")?;
    fs::write(&artifact_path, body)
        .with_context(|| format!("Failed to write {}", artifact_path.display()))?;

    tracing::info!(path = %artifact_path.display(), "Review artifact written");

    Ok(ScanOutcome {
        review,
        artifact_path,
    })
}

/// Merge a team roster and present it in the configured mode.
pub fn run_team(config: &ReviewConfig, roster: &Path) -> Result<OrderedPortfolio> {
    let raw = fs::read_to_string(roster)
        .with_context(|| format!("Failed to read roster {}", roster.display()))?;
    let members: Vec<MemberContribution> = serde_json::from_str(&raw)
        .with_context(|| format!("Roster {} does not match the member schema", roster.display()))?;

    let merged = merge(&members);
    tracing::info!(
        members = members.len(),
        records = merged.len(),
        sort_mode = %config.sort_mode,
        "Merged team portfolio"
    );

    Ok(order_portfolio(&merged, SectionModes::uniform(config.sort_mode)))
}

/// `<output_dir>/<input stem>.review.json`
fn artifact_path(output_dir: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "intake".to_string());
    output_dir.join(format!("{stem}.{REVIEW_SUFFIX}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_uses_input_stem() {
        let path = artifact_path(Path::new("/tmp/out"), Path::new("data/kim.json"));
        assert_eq!(path, PathBuf::from("/tmp/out/kim.review.json"));
    }

    #[test]
    fn artifact_falls_back_without_stem() {
        let path = artifact_path(Path::new("out"), Path::new(""));
        assert_eq!(path, PathBuf::from("out/intake.review.json"));
    }
}
