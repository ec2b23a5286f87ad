//! Ordering engine: curated and chronological presentation of record lists.
//!
//! Stateless. Every call re-derives the order from the records and the mode;
//! stored `display_order` values are never touched.

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dates;
use crate::error::CoreError;
use crate::highlights;
use crate::records::{Portfolio, Sortable};

// ---------------------------------------------------------------------------
// Sort mode
// ---------------------------------------------------------------------------

pub const MODE_CURATED: &str = "curated";
pub const MODE_CHRONOLOGICAL: &str = "chronological";
pub const VALID_MODES: &[&str] = &[MODE_CURATED, MODE_CHRONOLOGICAL];

/// How a section is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Ascending `display_order`, unordered records last.
    #[default]
    Curated,
    /// Most recent first, undated records last.
    Chronological,
}

impl SortMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Curated => MODE_CURATED,
            Self::Chronological => MODE_CHRONOLOGICAL,
        }
    }

    /// The other mode; sections flip between the two.
    pub fn toggle(self) -> Self {
        match self {
            Self::Curated => Self::Chronological,
            Self::Chronological => Self::Curated,
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            MODE_CURATED => Ok(Self::Curated),
            MODE_CHRONOLOGICAL => Ok(Self::Chronological),
            other => Err(CoreError::Validation(format!(
                "Invalid sort mode '{other}'. Must be one of: {}",
                VALID_MODES.join(", ")
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

/// Return `records` in the order `mode` prescribes.
///
/// Both modes use a stable sort, so records with equal keys keep their
/// relative input order. Curated mode treats a missing `display_order` as
/// +infinity; chronological mode treats a missing or unparseable date as
/// epoch zero.
pub fn order<T: Sortable + Clone>(records: &[T], mode: SortMode) -> Vec<T> {
    let mut ordered = records.to_vec();
    match mode {
        SortMode::Curated => ordered.sort_by_key(|r| curated_key(r.display_order())),
        SortMode::Chronological => {
            ordered.sort_by_key(|r| Reverse(dates::sort_timestamp(r.sort_date())))
        }
    }
    ordered
}

fn curated_key(display_order: Option<i64>) -> (bool, i64) {
    (display_order.is_none(), display_order.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Per-section modes
// ---------------------------------------------------------------------------

/// Caller-held mode for each section. Sections toggle independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SectionModes {
    pub highlights: SortMode,
    pub choreography: SortMode,
    pub media: SortMode,
    pub performances: SortMode,
    pub directing: SortMode,
    pub workshops: SortMode,
    pub awards: SortMode,
}

impl SectionModes {
    /// Every section in the same mode.
    pub fn uniform(mode: SortMode) -> Self {
        Self {
            highlights: mode,
            choreography: mode,
            media: mode,
            performances: mode,
            directing: mode,
            workshops: mode,
            awards: mode,
        }
    }
}

/// A portfolio ready for display: every section ordered by its mode plus the
/// derived highlight view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderedPortfolio {
    pub modes: SectionModes,
    pub highlights: Vec<highlights::HighlightItem>,
    #[serde(flatten)]
    pub sections: Portfolio,
}

/// Order each section of `portfolio` by its own mode.
pub fn order_portfolio(portfolio: &Portfolio, modes: SectionModes) -> OrderedPortfolio {
    OrderedPortfolio {
        modes,
        highlights: highlights::ordered_highlights(
            &portfolio.choreography,
            &portfolio.media,
            modes.highlights,
        ),
        sections: Portfolio {
            choreography: order(&portfolio.choreography, modes.choreography),
            media: order(&portfolio.media, modes.media),
            performances: order(&portfolio.performances, modes.performances),
            directing: order(&portfolio.directing, modes.directing),
            workshops: order(&portfolio.workshops, modes.workshops),
            awards: order(&portfolio.awards, modes.awards),
        },
    }
}
