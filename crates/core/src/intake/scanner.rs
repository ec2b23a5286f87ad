//! Missing-field scanner over validation-tagged intake payloads.
//!
//! Only fields the extractor tagged `"invalid"` are reported. Items without
//! a `_validation` map are never flagged, whatever their values look like.

use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{IntakeSection, PortfolioType, TAG_INVALID, VALIDATION_KEY};
use crate::dates::{PLACEHOLDER_DATE, YEAR_MONTH_RE, YEAR_ONLY_RE};

static WORD_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w").expect("valid regex"));

// ---------------------------------------------------------------------------
// Report entry
// ---------------------------------------------------------------------------

/// One field a reviewer should look at before saving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingFieldEntry {
    /// Section label with 1-based item number, e.g. `Media #3`.
    pub section: String,
    /// Humanized field name with an optional reason, e.g. `Title (empty)`.
    pub field: String,
    /// Machine locator, e.g. `media[2].title`.
    pub path: String,
}

impl MissingFieldEntry {
    fn new(section: &IntakeSection, index: usize, field_key: &str, value: Option<&Value>) -> Self {
        let mut field = humanize_field(field_key);
        if let Some(reason) = ReasonCode::classify(value) {
            field.push_str(&format!(" ({reason})"));
        }
        Self {
            section: format!("{} #{}", section.label, index + 1),
            field,
            path: format!("{}[{index}].{field_key}", section.key),
        }
    }
}

// ---------------------------------------------------------------------------
// Reason codes
// ---------------------------------------------------------------------------

/// Why a flagged field is incomplete, judged from its current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCode {
    Empty,
    PlaceholderDate,
    MissingMonthAndDay,
    MissingDay,
    Incomplete,
}

impl ReasonCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::PlaceholderDate => "placeholder date",
            Self::MissingMonthAndDay => "missing month and day",
            Self::MissingDay => "missing day",
            Self::Incomplete => "incomplete",
        }
    }

    /// Classify a field value. Non-string values that are present get no
    /// reason.
    pub fn classify(value: Option<&Value>) -> Option<Self> {
        match value {
            None | Some(Value::Null) => Some(Self::Empty),
            Some(Value::String(s)) if s.is_empty() => Some(Self::Empty),
            Some(Value::String(s)) if s == PLACEHOLDER_DATE => Some(Self::PlaceholderDate),
            Some(Value::String(s)) if YEAR_ONLY_RE.is_match(s) => Some(Self::MissingMonthAndDay),
            Some(Value::String(s)) if YEAR_MONTH_RE.is_match(s) => Some(Self::MissingDay),
            Some(Value::String(_)) => Some(Self::Incomplete),
            Some(_) => None,
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Scan
// ---------------------------------------------------------------------------

/// `video_date` -> `Video Date`.
pub fn humanize_field(key: &str) -> String {
    let spaced = key.replace('_', " ");
    WORD_START_RE
        .replace_all(&spaced, |caps: &Captures| caps[0].to_uppercase())
        .into_owned()
}

/// Collect every `"invalid"`-tagged field across the sections of
/// `portfolio_type`, in section, item, then field order.
///
/// Absent or wrong-shaped sections and items contribute nothing.
pub fn scan(data: &Value, portfolio_type: PortfolioType) -> Vec<MissingFieldEntry> {
    let mut entries = Vec::new();

    for section in portfolio_type.sections() {
        let Some(items) = data.get(section.key).and_then(Value::as_array) else {
            continue;
        };
        for (index, item) in items.iter().enumerate() {
            let Some(record) = item.as_object() else {
                continue;
            };
            let Some(tags) = record.get(VALIDATION_KEY).and_then(Value::as_object) else {
                continue;
            };
            for (field_key, tag) in tags {
                if tag.as_str() == Some(TAG_INVALID) {
                    entries.push(MissingFieldEntry::new(
                        section,
                        index,
                        field_key,
                        record.get(field_key),
                    ));
                }
            }
        }
    }

    entries
}
