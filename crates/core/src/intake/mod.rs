//! AI-assisted intake review.
//!
//! The extraction service returns portfolio JSON whose record objects may
//! carry a `_validation` map of `"valid"` / `"invalid"` tags. This module
//! turns those tags into a review punch-list and prepares the accepted
//! payload for saving. Pure logic, no network access.

pub mod review;
pub mod scanner;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub use review::{strip_validation, IntakeReview, ReviewSummary, SectionCount};
pub use scanner::{humanize_field, scan, MissingFieldEntry, ReasonCode};

/// Key of the sibling annotation map on intake records.
pub const VALIDATION_KEY: &str = "_validation";

/// Tag value that marks a field for review.
pub const TAG_INVALID: &str = "invalid";

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// One top-level array of the intake payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntakeSection {
    /// JSON key of the array, e.g. `team_media`.
    pub key: &'static str,
    /// Label used in report entries, e.g. `Media`.
    pub label: &'static str,
}

const fn section(key: &'static str, label: &'static str) -> IntakeSection {
    IntakeSection { key, label }
}

const ARTIST_SECTIONS: &[IntakeSection] = &[
    section("choreography", "Choreography"),
    section("media", "Media"),
    section("performance", "Performance"),
    section("directing", "Directing"),
    section("workshop", "Workshop"),
    section("awards", "Award"),
];

const TEAM_SECTIONS: &[IntakeSection] = &[
    section("team_choreography", "Choreography"),
    section("team_media", "Media"),
    section("team_performance", "Performance"),
    section("team_directing", "Directing"),
    section("team_workshop", "Workshop"),
    section("team_awards", "Award"),
];

// ---------------------------------------------------------------------------
// Portfolio type
// ---------------------------------------------------------------------------

pub const TYPE_ARTIST: &str = "artist";
pub const TYPE_TEAM: &str = "team";
pub const VALID_TYPES: &[&str] = &[TYPE_ARTIST, TYPE_TEAM];

/// Whether an intake payload describes an individual artist or a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortfolioType {
    #[default]
    Artist,
    Team,
}

impl PortfolioType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Artist => TYPE_ARTIST,
            Self::Team => TYPE_TEAM,
        }
    }

    /// The record arrays scanned for this portfolio type, in report order.
    pub fn sections(self) -> &'static [IntakeSection] {
        match self {
            Self::Artist => ARTIST_SECTIONS,
            Self::Team => TEAM_SECTIONS,
        }
    }
}

impl fmt::Display for PortfolioType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PortfolioType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            TYPE_ARTIST => Ok(Self::Artist),
            TYPE_TEAM => Ok(Self::Team),
            other => Err(CoreError::Validation(format!(
                "Invalid portfolio type '{other}'. Must be one of: {}",
                VALID_TYPES.join(", ")
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn team_sections_are_prefixed() {
        assert!(PortfolioType::Team
            .sections()
            .iter()
            .all(|s| s.key.starts_with("team_")));
        assert!(PortfolioType::Artist
            .sections()
            .iter()
            .all(|s| !s.key.starts_with("team_")));
    }

    #[test]
    fn both_types_share_labels() {
        let artist: Vec<_> = PortfolioType::Artist.sections().iter().map(|s| s.label).collect();
        let team: Vec<_> = PortfolioType::Team.sections().iter().map(|s| s.label).collect();
        assert_eq!(artist, team);
        assert_eq!(artist.len(), 6);
    }

    #[test]
    fn portfolio_type_parses() {
        assert_eq!("TEAM".parse::<PortfolioType>().unwrap(), PortfolioType::Team);
        assert_eq!(PortfolioType::Artist.to_string(), "artist");
        assert_matches!("band".parse::<PortfolioType>(), Err(CoreError::Validation(_)));
    }
}
