//! Highlight view: a read-only projection of highlighted choreography and
//! media records into one shape.
//!
//! Never stored. Recomputed from the two source kinds on every read so the
//! view cannot drift from them.

use serde::{Deserialize, Serialize};

use crate::ordering::{self, SortMode};
use crate::records::{Choreography, Media, Sortable};

/// Unified shape shared by highlighted choreography and media.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HighlightItem {
    pub youtube_link: Option<String>,
    pub role: Vec<String>,
    pub title: Option<String>,
    pub video_date: Option<String>,
    pub display_order: Option<i64>,
}

impl From<&Choreography> for HighlightItem {
    fn from(record: &Choreography) -> Self {
        let song = record.song.as_ref();
        Self {
            youtube_link: song.and_then(|s| s.youtube_link.clone()),
            role: record.role.clone(),
            title: song.and_then(|s| s.title.clone()),
            video_date: song.and_then(|s| s.date.clone()),
            display_order: record.display_order,
        }
    }
}

impl From<&Media> for HighlightItem {
    fn from(record: &Media) -> Self {
        Self {
            youtube_link: record.youtube_link.clone(),
            role: record.role.clone(),
            title: record.title.clone(),
            video_date: record.video_date.clone(),
            display_order: record.display_order,
        }
    }
}

impl Sortable for HighlightItem {
    fn display_order(&self) -> Option<i64> {
        self.display_order
    }

    fn sort_date(&self) -> Option<&str> {
        self.video_date.as_deref()
    }
}

/// Highlighted choreography followed by highlighted media, in input order.
pub fn derive_highlights(choreography: &[Choreography], media: &[Media]) -> Vec<HighlightItem> {
    choreography
        .iter()
        .filter(|c| c.is_highlight)
        .map(HighlightItem::from)
        .chain(media.iter().filter(|m| m.is_highlight).map(HighlightItem::from))
        .collect()
}

/// Derive the highlight view and present it in `mode`.
pub fn ordered_highlights(
    choreography: &[Choreography],
    media: &[Media],
    mode: SortMode,
) -> Vec<HighlightItem> {
    ordering::order(&derive_highlights(choreography, media), mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Song;

    fn choreography(title: &str, highlight: bool, order: i64, date: &str) -> Choreography {
        Choreography {
            song: Some(Song {
                song_id: Some(format!("song-{title}")),
                title: Some(title.into()),
                date: Some(date.into()),
                youtube_link: Some(format!("https://youtu.be/{title}")),
                ..Default::default()
            }),
            role: vec!["Main choreographer".into()],
            is_highlight: highlight,
            display_order: Some(order),
            ..Default::default()
        }
    }

    fn media(title: &str, highlight: bool, order: i64, date: &str) -> Media {
        Media {
            media_id: Some(format!("media-{title}")),
            youtube_link: Some(format!("https://youtu.be/{title}")),
            title: Some(title.into()),
            video_date: Some(date.into()),
            is_highlight: highlight,
            display_order: Some(order),
            ..Default::default()
        }
    }

    fn titles(items: &[HighlightItem]) -> Vec<&str> {
        items.iter().filter_map(|h| h.title.as_deref()).collect()
    }

    #[test]
    fn only_flagged_records_are_included() {
        let chor = vec![
            choreography("A", true, 0, "2020-01-01"),
            choreography("B", false, 1, "2021-01-01"),
        ];
        let med = vec![media("C", false, 0, "2022-01-01"), media("D", true, 1, "2023-01-01")];
        assert_eq!(titles(&derive_highlights(&chor, &med)), vec!["A", "D"]);
    }

    #[test]
    fn choreography_comes_before_media() {
        let chor = vec![choreography("A", true, 5, "2020-01-01")];
        let med = vec![media("B", true, 0, "2023-01-01")];
        assert_eq!(titles(&derive_highlights(&chor, &med)), vec!["A", "B"]);
    }

    #[test]
    fn choreography_maps_song_fields() {
        let chor = vec![choreography("Hype", true, 2, "2022-08-01")];
        let item = &derive_highlights(&chor, &[])[0];
        assert_eq!(item.youtube_link.as_deref(), Some("https://youtu.be/Hype"));
        assert_eq!(item.video_date.as_deref(), Some("2022-08-01"));
        assert_eq!(item.role, vec!["Main choreographer".to_string()]);
        assert_eq!(item.display_order, Some(2));
    }

    #[test]
    fn choreography_without_song_still_projects() {
        let chor = vec![Choreography {
            is_highlight: true,
            ..Default::default()
        }];
        let items = derive_highlights(&chor, &[]);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, None);
    }

    #[test]
    fn ordering_applies_across_both_kinds() {
        let chor = vec![choreography("A", true, 1, "2020-01-01")];
        let med = vec![media("B", true, 0, "2023-01-01"), media("C", true, 2, "2021-06-01")];

        let curated = ordered_highlights(&chor, &med, SortMode::Curated);
        assert_eq!(titles(&curated), vec!["B", "A", "C"]);

        let chronological = ordered_highlights(&chor, &med, SortMode::Chronological);
        assert_eq!(titles(&chronological), vec!["B", "C", "A"]);
    }

    #[test]
    fn unordered_highlights_trail_in_curated_mode() {
        let mut unordered = media("Z", true, 0, "2024-01-01");
        unordered.display_order = None;
        let chor = vec![choreography("A", true, 3, "2020-01-01")];

        let curated = ordered_highlights(&chor, &[unordered], SortMode::Curated);
        assert_eq!(titles(&curated), vec!["A", "Z"]);
    }

    #[test]
    fn derivation_is_idempotent() {
        let chor = vec![
            choreography("A", true, 0, "2020-01-01"),
            choreography("B", true, 1, "2021-01-01"),
        ];
        let med = vec![media("C", true, 0, "2022-01-01")];
        let first = serde_json::to_string(&derive_highlights(&chor, &med)).unwrap();
        let second = serde_json::to_string(&derive_highlights(&chor, &med)).unwrap();
        assert_eq!(first, second);
    }
}
