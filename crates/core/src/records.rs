//! Portfolio record kinds and the containers that group them.
//!
//! Every kind is an explicit struct; [`Record`] is the tagged union the
//! ordering engine dispatches on. All fields are optional on input because
//! stored and AI-extracted records are frequently partial. Fields this crate
//! does not interpret are kept in `extra` so records pass through unchanged.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Record kind discriminant
// ---------------------------------------------------------------------------

/// Discriminant for the six stored record kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Choreography,
    Media,
    Performance,
    Directing,
    Workshop,
    Award,
}

impl RecordKind {
    pub const ALL: [RecordKind; 6] = [
        Self::Choreography,
        Self::Media,
        Self::Performance,
        Self::Directing,
        Self::Workshop,
        Self::Award,
    ];

    /// Human-readable label, used in section headings and report entries.
    pub fn label(self) -> &'static str {
        match self {
            Self::Choreography => "Choreography",
            Self::Media => "Media",
            Self::Performance => "Performance",
            Self::Directing => "Directing",
            Self::Workshop => "Workshop",
            Self::Award => "Award",
        }
    }
}

// ---------------------------------------------------------------------------
// Shared capabilities
// ---------------------------------------------------------------------------

/// Accessors the ordering engine needs from any presentable record.
pub trait Sortable {
    /// Manual curation position, if one has been assigned.
    fn display_order(&self) -> Option<i64>;

    /// Raw value of the kind's date field.
    fn sort_date(&self) -> Option<&str>;
}

/// Records whose curation position can be rewritten.
pub trait Curatable: Sortable {
    fn set_display_order(&mut self, order: i64);
}

/// Records that can be surfaced in the highlight view.
pub trait Highlightable {
    fn is_highlight(&self) -> bool;
    fn set_highlight(&mut self, flag: bool);
}

// ---------------------------------------------------------------------------
// Deserialization helpers
// ---------------------------------------------------------------------------

/// Accept ids stored as JSON strings or numbers. Anything else is absent.
fn optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Read a field, treating `null` or a value of the wrong shape as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default())
}

/// Read a record list, keeping only the elements that fit the record shape.
/// A non-array value reads as an empty list.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Some(Value::Array(items)) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

/// Normalize an optional identifier: empty strings do not identify anything.
pub(crate) fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

// ---------------------------------------------------------------------------
// Choreography
// ---------------------------------------------------------------------------

/// The song a choreography credit refers to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Song {
    #[serde(default, deserialize_with = "optional_id")]
    pub song_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub youtube_link: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Choreography {
    #[serde(default, deserialize_with = "lenient")]
    pub song: Option<Song>,
    #[serde(default, deserialize_with = "lenient")]
    pub role: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub is_highlight: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub display_order: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ---------------------------------------------------------------------------
// Media
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Media {
    #[serde(default, deserialize_with = "optional_id")]
    pub media_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub youtube_link: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub video_date: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub role: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub is_highlight: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub display_order: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ---------------------------------------------------------------------------
// Performance / Directing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceInfo {
    #[serde(default, deserialize_with = "optional_id")]
    pub performance_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub date: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Performance {
    #[serde(default, deserialize_with = "lenient")]
    pub performance: Option<PerformanceInfo>,
    #[serde(default, deserialize_with = "lenient")]
    pub display_order: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectingInfo {
    #[serde(default, deserialize_with = "optional_id")]
    pub directing_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub date: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Directing {
    #[serde(default, deserialize_with = "lenient")]
    pub directing: Option<DirectingInfo>,
    #[serde(default, deserialize_with = "lenient")]
    pub display_order: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ---------------------------------------------------------------------------
// Workshop / Award
// ---------------------------------------------------------------------------

/// A class taught or attended. Source data carries no stable id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workshop {
    #[serde(default, deserialize_with = "lenient")]
    pub class_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub class_date: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub display_order: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An award received. Source data carries no stable id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Award {
    #[serde(default, deserialize_with = "lenient")]
    pub issuing_org: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub award_title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub received_date: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub display_order: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ---------------------------------------------------------------------------
// Sortable / Curatable / Highlightable impls
// ---------------------------------------------------------------------------

impl Sortable for Choreography {
    fn display_order(&self) -> Option<i64> {
        self.display_order
    }

    fn sort_date(&self) -> Option<&str> {
        self.song.as_ref().and_then(|s| s.date.as_deref())
    }
}

impl Sortable for Media {
    fn display_order(&self) -> Option<i64> {
        self.display_order
    }

    fn sort_date(&self) -> Option<&str> {
        self.video_date.as_deref()
    }
}

impl Sortable for Performance {
    fn display_order(&self) -> Option<i64> {
        self.display_order
    }

    fn sort_date(&self) -> Option<&str> {
        self.performance.as_ref().and_then(|p| p.date.as_deref())
    }
}

impl Sortable for Directing {
    fn display_order(&self) -> Option<i64> {
        self.display_order
    }

    fn sort_date(&self) -> Option<&str> {
        self.directing.as_ref().and_then(|d| d.date.as_deref())
    }
}

impl Sortable for Workshop {
    fn display_order(&self) -> Option<i64> {
        self.display_order
    }

    fn sort_date(&self) -> Option<&str> {
        self.class_date.as_deref()
    }
}

impl Sortable for Award {
    fn display_order(&self) -> Option<i64> {
        self.display_order
    }

    fn sort_date(&self) -> Option<&str> {
        self.received_date.as_deref()
    }
}

macro_rules! impl_curatable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Curatable for $ty {
                fn set_display_order(&mut self, order: i64) {
                    self.display_order = Some(order);
                }
            }
        )*
    };
}

impl_curatable!(Choreography, Media, Performance, Directing, Workshop, Award);

impl Highlightable for Choreography {
    fn is_highlight(&self) -> bool {
        self.is_highlight
    }

    fn set_highlight(&mut self, flag: bool) {
        self.is_highlight = flag;
    }
}

impl Highlightable for Media {
    fn is_highlight(&self) -> bool {
        self.is_highlight
    }

    fn set_highlight(&mut self, flag: bool) {
        self.is_highlight = flag;
    }
}

// ---------------------------------------------------------------------------
// Tagged union
// ---------------------------------------------------------------------------

/// Any stored record, tagged with its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    Choreography(Choreography),
    Media(Media),
    Performance(Performance),
    Directing(Directing),
    Workshop(Workshop),
    Award(Award),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Choreography(_) => RecordKind::Choreography,
            Self::Media(_) => RecordKind::Media,
            Self::Performance(_) => RecordKind::Performance,
            Self::Directing(_) => RecordKind::Directing,
            Self::Workshop(_) => RecordKind::Workshop,
            Self::Award(_) => RecordKind::Award,
        }
    }
}

impl Sortable for Record {
    fn display_order(&self) -> Option<i64> {
        match self {
            Self::Choreography(r) => r.display_order(),
            Self::Media(r) => r.display_order(),
            Self::Performance(r) => r.display_order(),
            Self::Directing(r) => r.display_order(),
            Self::Workshop(r) => r.display_order(),
            Self::Award(r) => r.display_order(),
        }
    }

    fn sort_date(&self) -> Option<&str> {
        match self {
            Self::Choreography(r) => r.sort_date(),
            Self::Media(r) => r.sort_date(),
            Self::Performance(r) => r.sort_date(),
            Self::Directing(r) => r.sort_date(),
            Self::Workshop(r) => r.sort_date(),
            Self::Award(r) => r.sort_date(),
        }
    }
}

impl Curatable for Record {
    fn set_display_order(&mut self, order: i64) {
        match self {
            Self::Choreography(r) => r.set_display_order(order),
            Self::Media(r) => r.set_display_order(order),
            Self::Performance(r) => r.set_display_order(order),
            Self::Directing(r) => r.set_display_order(order),
            Self::Workshop(r) => r.set_display_order(order),
            Self::Award(r) => r.set_display_order(order),
        }
    }
}

// ---------------------------------------------------------------------------
// Containers
// ---------------------------------------------------------------------------

/// One owner's records, one collection per kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    #[serde(default, deserialize_with = "lenient_list")]
    pub choreography: Vec<Choreography>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub media: Vec<Media>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub performances: Vec<Performance>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub directing: Vec<Directing>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub workshops: Vec<Workshop>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub awards: Vec<Award>,
}

/// Deduplicated team-level record set produced by [`crate::merge::merge`].
pub type TeamAggregate = Portfolio;

impl Portfolio {
    /// Number of records of the given kind.
    pub fn count(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::Choreography => self.choreography.len(),
            RecordKind::Media => self.media.len(),
            RecordKind::Performance => self.performances.len(),
            RecordKind::Directing => self.directing.len(),
            RecordKind::Workshop => self.workshops.len(),
            RecordKind::Award => self.awards.len(),
        }
    }

    pub fn len(&self) -> usize {
        RecordKind::ALL.iter().map(|k| self.count(*k)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every record as a tagged [`Record`], grouped by kind in
    /// [`RecordKind::ALL`] order.
    pub fn records(&self) -> Vec<Record> {
        let mut records = Vec::with_capacity(self.len());
        records.extend(self.choreography.iter().cloned().map(Record::Choreography));
        records.extend(self.media.iter().cloned().map(Record::Media));
        records.extend(self.performances.iter().cloned().map(Record::Performance));
        records.extend(self.directing.iter().cloned().map(Record::Directing));
        records.extend(self.workshops.iter().cloned().map(Record::Workshop));
        records.extend(self.awards.iter().cloned().map(Record::Award));
        records
    }
}

/// One team member's slice of the team portfolio.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberContribution {
    #[serde(default, deserialize_with = "optional_id")]
    pub artist_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub is_leader: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub portfolio: Portfolio,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_ids_deserialize_as_strings() {
        let record: Choreography = serde_json::from_value(json!({
            "song": { "song_id": 42, "title": "Hype Boy", "date": "2022-08-01" },
        }))
        .unwrap();
        assert_eq!(record.song.unwrap().song_id.as_deref(), Some("42"));
    }

    #[test]
    fn null_collections_become_empty() {
        let member: MemberContribution = serde_json::from_value(json!({
            "artist_id": "a1",
            "is_leader": null,
            "portfolio": { "choreography": null, "media": [] },
        }))
        .unwrap();
        assert!(!member.is_leader);
        assert!(member.portfolio.is_empty());
    }

    #[test]
    fn wrong_typed_fields_read_as_absent() {
        let record: Choreography = serde_json::from_value(json!({
            "song": "oops",
            "role": "Main",
            "is_highlight": "yes",
            "display_order": 1.5,
        }))
        .unwrap();
        assert_eq!(record.song, None);
        assert!(record.role.is_empty());
        assert!(!record.is_highlight);
        assert_eq!(record.display_order, None);

        let performance: Performance =
            serde_json::from_value(json!({ "performance": [1, 2], "display_order": 3 })).unwrap();
        assert_eq!(performance.performance, None);
        assert_eq!(performance.display_order, Some(3));
    }

    #[test]
    fn malformed_list_elements_are_skipped() {
        let portfolio: Portfolio = serde_json::from_value(json!({
            "choreography": [ { "song": { "song_id": "s1" } }, "oops" ],
            "media": [ { "media_id": "m1" }, 5, { "media_id": "m2", "role": "Main" } ],
            "awards": { "award_title": "Not a list" },
        }))
        .unwrap();
        assert_eq!(portfolio.choreography.len(), 1);
        let ids: Vec<_> = portfolio.media.iter().filter_map(|m| m.media_id.as_deref()).collect();
        assert_eq!(ids, vec!["m1", "m2"]);
        assert!(portfolio.media[1].role.is_empty());
        assert!(portfolio.awards.is_empty());
    }

    #[test]
    fn missing_portfolio_is_empty() {
        let member: MemberContribution = serde_json::from_value(json!({ "artist_id": 7 })).unwrap();
        assert_eq!(member.artist_id.as_deref(), Some("7"));
        assert!(member.portfolio.is_empty());
    }

    #[test]
    fn unknown_fields_are_preserved() {
        let input = json!({
            "media_id": "m1",
            "title": "Stage cam",
            "thumbnail": "https://img.example/m1.jpg",
        });
        let media: Media = serde_json::from_value(input).unwrap();
        assert_eq!(media.extra["thumbnail"], "https://img.example/m1.jpg");

        let output = serde_json::to_value(&media).unwrap();
        assert_eq!(output["thumbnail"], "https://img.example/m1.jpg");
    }

    #[test]
    fn record_dispatches_date_by_kind() {
        let chor = Record::Choreography(Choreography {
            song: Some(Song {
                date: Some("2021-01-01".into()),
                ..Default::default()
            }),
            ..Default::default()
        });
        let award = Record::Award(Award {
            received_date: Some("2019-12-24".into()),
            ..Default::default()
        });
        assert_eq!(chor.sort_date(), Some("2021-01-01"));
        assert_eq!(award.sort_date(), Some("2019-12-24"));
        assert_eq!(award.kind(), RecordKind::Award);
    }

    #[test]
    fn record_serializes_with_kind_tag() {
        let record = Record::Workshop(Workshop {
            class_name: Some("Popping 101".into()),
            ..Default::default()
        });
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["kind"], "workshop");
        assert_eq!(value["class_name"], "Popping 101");

        let back: Record = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn portfolio_records_follow_kind_order() {
        let portfolio = Portfolio {
            awards: vec![Award::default()],
            choreography: vec![Choreography::default()],
            ..Default::default()
        };
        let kinds: Vec<RecordKind> = portfolio.records().iter().map(Record::kind).collect();
        assert_eq!(kinds, vec![RecordKind::Choreography, RecordKind::Award]);
    }
}
