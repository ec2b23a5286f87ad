//! Review artifact: the accepted portfolio plus its missing-field report.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::scanner::{scan, MissingFieldEntry};
use super::{PortfolioType, VALIDATION_KEY};

/// Copy of `data` with every `_validation` map removed, at any depth.
pub fn strip_validation(data: &Value) -> Value {
    match data {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(key, _)| key.as_str() != VALIDATION_KEY)
                .map(|(key, value)| (key.clone(), strip_validation(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(strip_validation).collect()),
        other => other.clone(),
    }
}

/// Entry count for one section label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionCount {
    pub section: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSummary {
    pub total: usize,
    /// Sections with at least one entry, in scan order.
    pub by_section: Vec<SectionCount>,
}

/// Downloadable result of reviewing one intake payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeReview {
    pub portfolio_type: PortfolioType,
    /// The payload with validation annotations removed.
    pub portfolio: Value,
    pub missing_fields: Vec<MissingFieldEntry>,
    pub summary: ReviewSummary,
}

impl IntakeReview {
    pub fn build(data: &Value, portfolio_type: PortfolioType) -> Self {
        let missing_fields = scan(data, portfolio_type);

        let by_section = portfolio_type
            .sections()
            .iter()
            .filter_map(|section| {
                let prefix = format!("{}[", section.key);
                let count = missing_fields
                    .iter()
                    .filter(|entry| entry.path.starts_with(&prefix))
                    .count();
                (count > 0).then(|| SectionCount {
                    section: section.label.to_string(),
                    count,
                })
            })
            .collect();

        Self {
            portfolio_type,
            portfolio: strip_validation(data),
            summary: ReviewSummary {
                total: missing_fields.len(),
                by_section,
            },
            missing_fields,
        }
    }

    /// Nothing left to review.
    pub fn is_complete(&self) -> bool {
        self.missing_fields.is_empty()
    }
}
