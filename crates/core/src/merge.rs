//! Merge/dedup engine: combine team members' portfolios into one team record
//! set.
//!
//! Members are visited in input order and the first record seen for an
//! identity key wins; later copies are dropped whole, never field-merged.
//! Records without an identity key cannot be deduplicated and are left out.
//! No database access, no errors. Output order is first-seen order.

use std::collections::HashSet;
use std::hash::Hash;

use crate::records::{
    non_empty, Award, Choreography, Directing, Media, MemberContribution, Performance,
    RecordKind, TeamAggregate, Workshop,
};

// ---------------------------------------------------------------------------
// Identity keys
// ---------------------------------------------------------------------------

/// Natural key used to recognize two records as the same.
pub trait Identity {
    type Key: Eq + Hash;

    const KIND: RecordKind;

    /// `None` when the record carries no stable identity.
    fn identity_key(&self) -> Option<Self::Key>;
}

impl Identity for Choreography {
    type Key = String;
    const KIND: RecordKind = RecordKind::Choreography;

    fn identity_key(&self) -> Option<String> {
        let song = self.song.as_ref()?;
        non_empty(song.song_id.as_ref()).map(str::to_owned)
    }
}

impl Identity for Media {
    type Key = String;
    const KIND: RecordKind = RecordKind::Media;

    /// `media_id`, falling back to `youtube_link` for unsaved media.
    fn identity_key(&self) -> Option<String> {
        non_empty(self.media_id.as_ref())
            .or_else(|| non_empty(self.youtube_link.as_ref()))
            .map(str::to_owned)
    }
}

impl Identity for Performance {
    type Key = String;
    const KIND: RecordKind = RecordKind::Performance;

    fn identity_key(&self) -> Option<String> {
        let performance = self.performance.as_ref()?;
        non_empty(performance.performance_id.as_ref()).map(str::to_owned)
    }
}

impl Identity for Directing {
    type Key = String;
    const KIND: RecordKind = RecordKind::Directing;

    fn identity_key(&self) -> Option<String> {
        let directing = self.directing.as_ref()?;
        non_empty(directing.directing_id.as_ref()).map(str::to_owned)
    }
}

impl Identity for Workshop {
    type Key = (String, String);
    const KIND: RecordKind = RecordKind::Workshop;

    /// `(class_name, class_date)`; missing halves compare as empty.
    fn identity_key(&self) -> Option<(String, String)> {
        Some((
            self.class_name.clone().unwrap_or_default(),
            self.class_date.clone().unwrap_or_default(),
        ))
    }
}

impl Identity for Award {
    type Key = (String, String);
    const KIND: RecordKind = RecordKind::Award;

    /// `(issuing_org, award_title)`; missing halves compare as empty.
    fn identity_key(&self) -> Option<(String, String)> {
        Some((
            self.issuing_org.clone().unwrap_or_default(),
            self.award_title.clone().unwrap_or_default(),
        ))
    }
}

// ---------------------------------------------------------------------------
// First-seen collector
// ---------------------------------------------------------------------------

struct FirstSeen<T: Identity> {
    seen: HashSet<T::Key>,
    records: Vec<T>,
}

impl<T: Identity + Clone> FirstSeen<T> {
    fn new() -> Self {
        Self {
            seen: HashSet::new(),
            records: Vec::new(),
        }
    }

    fn offer_all(&mut self, records: &[T], artist_id: Option<&str>) {
        for (index, record) in records.iter().enumerate() {
            let Some(key) = record.identity_key() else {
                tracing::debug!(
                    kind = T::KIND.label(),
                    artist_id = artist_id.unwrap_or("-"),
                    index,
                    "Dropping record without identity key"
                );
                continue;
            };
            if self.seen.insert(key) {
                self.records.push(record.clone());
            } else {
                tracing::debug!(
                    kind = T::KIND.label(),
                    artist_id = artist_id.unwrap_or("-"),
                    index,
                    "Dropping duplicate record"
                );
            }
        }
    }

    fn into_records(self) -> Vec<T> {
        self.records
    }
}

/// Deduplicate one kind's records by identity key, first-seen wins.
pub fn dedup<T: Identity + Clone>(records: &[T]) -> Vec<T> {
    let mut collector = FirstSeen::new();
    collector.offer_all(records, None);
    collector.into_records()
}

// ---------------------------------------------------------------------------
// Merge
// ---------------------------------------------------------------------------

/// Merge members' portfolios into one deduplicated team aggregate.
///
/// Inputs are not modified; every collection in the result is new.
pub fn merge(members: &[MemberContribution]) -> TeamAggregate {
    let mut choreography = FirstSeen::new();
    let mut media = FirstSeen::new();
    let mut performances = FirstSeen::new();
    let mut directing = FirstSeen::new();
    let mut workshops = FirstSeen::new();
    let mut awards = FirstSeen::new();

    for member in members {
        let artist_id = member.artist_id.as_deref();
        let portfolio = &member.portfolio;
        choreography.offer_all(&portfolio.choreography, artist_id);
        media.offer_all(&portfolio.media, artist_id);
        performances.offer_all(&portfolio.performances, artist_id);
        directing.offer_all(&portfolio.directing, artist_id);
        workshops.offer_all(&portfolio.workshops, artist_id);
        awards.offer_all(&portfolio.awards, artist_id);
    }

    let merged = TeamAggregate {
        choreography: choreography.into_records(),
        media: media.into_records(),
        performances: performances.into_records(),
        directing: directing.into_records(),
        workshops: workshops.into_records(),
        awards: awards.into_records(),
    };

    tracing::debug!(
        members = members.len(),
        records = merged.len(),
        "Merged team portfolio"
    );

    merged
}
