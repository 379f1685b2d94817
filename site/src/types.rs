//! Data model for the conference programme.
//!
//! These types mirror the GraphQL schema of the conference API. They're
//! designed to be:
//!
//! - **Serializable** - the wire format is gqlgen-style camelCase JSON
//! - **Clone-friendly** - components can share data without borrowing issues
//! - **Default-able** - build fixtures with `..Default::default()`
//!
//! Every user-facing text field comes in an English/Japanese pair; the
//! `localized_*` accessors pick one side per the page locale. Nothing here
//! falls back across locales: the conference data supplies both variants.
//!
//! # Example
//!
//! ```rust
//! use mtc2018_site::types::{Session, Speaker};
//!
//! let session = Session {
//!     session_id: 2,
//!     title: "Customer Support Tools".into(),
//!     title_ja: "カスタマーサポートツール".into(),
//!     speakers: vec![Speaker {
//!         speaker_id: "yamada_taro".into(),
//!         name: "Taro Yamada".into(),
//!         name_ja: "山田太郎".into(),
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! };
//!
//! assert_eq!(session.localized_title(true), "カスタマーサポートツール");
//! assert_eq!(
//!     session.speakers[0].photo_path(),
//!     "/static/images/speakers/yamada_taro.png"
//! );
//! ```

use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// A conference talk with scheduling and speaker metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Session {
    /// Opaque relay-style node id
    pub id: String,
    /// Human-assigned session number, also the `#session-N` anchor
    pub session_id: u32,
    /// Programme slot kind: "keynote", "session", "break", ...
    #[serde(rename = "type")]
    pub session_type: String,
    /// Talk title (English)
    pub title: String,
    /// Talk title (Japanese)
    pub title_ja: String,
    /// Slot start, RFC 3339 with JST offset (`2018-10-04T11:00:00+09:00`)
    pub start_time: String,
    /// Slot end, same format as `start_time`
    pub end_time: String,
    /// Abstract (English)
    pub outline: String,
    /// Abstract (Japanese)
    pub outline_ja: String,
    /// Topic tags shown on the content card
    pub tags: Vec<String>,
    /// Presenters, in billing order
    pub speakers: Vec<Speaker>,
}

impl Session {
    /// Title in the page locale.
    pub fn localized_title(&self, is_ja: bool) -> &str {
        if is_ja { &self.title_ja } else { &self.title }
    }

    /// Abstract in the page locale.
    pub fn localized_outline(&self, is_ja: bool) -> &str {
        if is_ja { &self.outline_ja } else { &self.outline }
    }

    /// `HH:MM - HH:MM` label for the slot.
    pub fn time_range(&self) -> String {
        format!(
            "{} - {}",
            clock_time(&self.start_time),
            clock_time(&self.end_time)
        )
    }
}

/// A presenter record, localized like [`Session`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Speaker {
    /// Opaque relay-style node id
    pub id: String,
    /// Stable handle, also the photo asset key
    pub speaker_id: String,
    /// Name (English)
    pub name: String,
    /// Name (Japanese)
    pub name_ja: String,
    /// Employer shown on the card
    pub company: String,
    /// Job title (English)
    pub position: String,
    /// Job title (Japanese)
    pub position_ja: String,
    /// Bio paragraph (English)
    pub profile: String,
    /// Bio paragraph (Japanese)
    pub profile_ja: String,
    /// Avatar URL from the registration system (unused by the cards,
    /// which render the curated conference photos instead)
    pub icon_url: String,
    /// Twitter handle without the `@`, empty when not public
    pub twitter_id: String,
    /// GitHub login, empty when not public
    pub github_id: String,
}

impl Speaker {
    /// Name in the page locale.
    pub fn localized_name(&self, is_ja: bool) -> &str {
        if is_ja { &self.name_ja } else { &self.name }
    }

    /// Job title in the page locale.
    pub fn localized_position(&self, is_ja: bool) -> &str {
        if is_ja { &self.position_ja } else { &self.position }
    }

    /// Bio in the page locale.
    pub fn localized_profile(&self, is_ja: bool) -> &str {
        if is_ja { &self.profile_ja } else { &self.profile }
    }

    /// Path of the curated speaker photo, keyed by `speaker_id`.
    pub fn photo_path(&self) -> String {
        format!("/static/images/speakers/{}.png", self.speaker_id)
    }
}

/// Clock portion (`HH:MM`) of an RFC 3339 timestamp.
///
/// Timestamps arrive with the venue's own offset and formatting keeps it,
/// so the printed digits are venue wall time. Anything that doesn't parse
/// as RFC 3339 is returned as-is.
pub fn clock_time(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(parsed) => parsed.format("%H:%M").to_string(),
        Err(_) => timestamp.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn speaker() -> Speaker {
        Speaker {
            speaker_id: "yamada_taro".into(),
            name: "Taro Yamada".into(),
            name_ja: "山田太郎".into(),
            position: "Software Engineer".into(),
            position_ja: "ソフトウェアエンジニア".into(),
            profile: "Works on listing infrastructure.".into(),
            profile_ja: "出品基盤を担当。".into(),
            ..Default::default()
        }
    }

    #[test]
    fn locale_selects_each_field_independently() {
        let speaker = speaker();

        assert_eq!(speaker.localized_name(true), "山田太郎");
        assert_eq!(speaker.localized_position(true), "ソフトウェアエンジニア");
        assert_eq!(speaker.localized_profile(true), "出品基盤を担当。");

        assert_eq!(speaker.localized_name(false), "Taro Yamada");
        assert_eq!(speaker.localized_position(false), "Software Engineer");
        assert_eq!(speaker.localized_profile(false), "Works on listing infrastructure.");
    }

    #[test]
    fn photo_path_follows_speaker_id_convention() {
        assert_eq!(
            speaker().photo_path(),
            "/static/images/speakers/yamada_taro.png"
        );
    }

    #[test]
    fn clock_time_extracts_wall_clock() {
        assert_eq!(clock_time("2018-10-04T11:00:00+09:00"), "11:00");
        assert_eq!(clock_time("2018-10-04T09:30:00+09:00"), "09:30");
    }

    #[test]
    fn clock_time_passes_through_non_timestamps() {
        assert_eq!(clock_time(""), "");
        assert_eq!(clock_time("11:00"), "11:00");
    }

    #[test]
    fn clock_time_returns_unparseable_input_whole() {
        // RFC 3339 requires a two-digit hour; an unpadded one comes back
        // whole, never as a fragment like "9:00:".
        assert_eq!(
            clock_time("2018-10-04T9:00:00+09:00"),
            "2018-10-04T9:00:00+09:00"
        );
    }

    #[test]
    fn session_time_range_label() {
        let session = Session {
            start_time: "2018-10-04T13:00:00+09:00".into(),
            end_time: "2018-10-04T13:40:00+09:00".into(),
            ..Default::default()
        };
        assert_eq!(session.time_range(), "13:00 - 13:40");
    }

    #[test]
    fn session_decodes_from_camel_case_json() {
        let json = r#"{
            "id": "U2Vzc2lvbjox",
            "sessionId": 1,
            "type": "keynote",
            "title": "Evolution of Mercari",
            "titleJa": "メルカリの進化",
            "startTime": "2018-10-04T10:00:00+09:00",
            "endTime": "2018-10-04T10:30:00+09:00",
            "outline": "Where the marketplace goes next.",
            "outlineJa": "マーケットプレイスの次の一手。",
            "tags": ["go", "microservices"],
            "speakers": [{"speakerId": "yamada_taro", "name": "Taro Yamada"}]
        }"#;

        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.session_id, 1);
        assert_eq!(session.session_type, "keynote");
        assert_eq!(session.title_ja, "メルカリの進化");
        assert_eq!(session.tags, vec!["go".to_string(), "microservices".into()]);
        assert_eq!(session.speakers[0].speaker_id, "yamada_taro");
        // Fields the query didn't select fall back to empty
        assert_eq!(session.speakers[0].github_id, "");
    }
}
