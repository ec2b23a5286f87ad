use std::path::PathBuf;

use folio_core::{PortfolioType, SortMode};

/// Review tool configuration.
///
/// This type does not read the environment itself. `main.rs` fills it from
/// the clap arguments, and clap falls back to these variables when a flag
/// is not given. [`Default`] matches the defaults below.
///
/// | Env Var                | Default   |
/// |------------------------|-----------|
/// | `FOLIO_PORTFOLIO_TYPE` | `artist`  |
/// | `FOLIO_SORT_MODE`      | `curated` |
/// | `FOLIO_OUTPUT_DIR`     | `.`       |
#[derive(Debug, Clone)]
pub struct ReviewConfig {
    /// Which intake sections the scanner reads.
    pub portfolio_type: PortfolioType,
    /// Mode applied to every section of the team view.
    pub sort_mode: SortMode,
    /// Where review artifacts are written.
    pub output_dir: PathBuf,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            portfolio_type: PortfolioType::Artist,
            sort_mode: SortMode::Curated,
            output_dir: PathBuf::from("."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_documented_values() {
        let config = ReviewConfig::default();
        assert_eq!(config.portfolio_type, PortfolioType::Artist);
        assert_eq!(config.sort_mode, SortMode::Curated);
        assert_eq!(config.output_dir, PathBuf::from("."));
    }
}
