//! Timetable projection of the session list.
//!
//! The timetable and the content cards render the same query result.
//! Keeping this projection order-preserving is what keeps the two
//! sections in sync: one row per session, server order, no filtering.

use crate::types::{clock_time, Session};

/// One printable timetable row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimetableRow {
    /// Wall-clock slot start, `11:00`
    pub start: String,
    /// Wall-clock slot end
    pub end: String,
    /// Localized talk title
    pub title: String,
    /// Presenter names joined with ` / `, empty for speakerless slots
    pub speakers: String,
}

/// Project sessions into timetable rows.
pub fn rows(sessions: &[Session], is_ja: bool) -> Vec<TimetableRow> {
    sessions
        .iter()
        .map(|session| TimetableRow {
            start: clock_time(&session.start_time),
            end: clock_time(&session.end_time),
            title: session.localized_title(is_ja).to_owned(),
            speakers: session
                .speakers
                .iter()
                .map(|speaker| speaker.localized_name(is_ja))
                .collect::<Vec<_>>()
                .join(" / "),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Speaker;
    use pretty_assertions::assert_eq;

    fn session(session_id: u32, title: &str, start: &str, end: &str) -> Session {
        Session {
            session_id,
            title: title.into(),
            title_ja: format!("{title} (ja)"),
            start_time: format!("2018-10-04T{start}:00+09:00"),
            end_time: format!("2018-10-04T{end}:00+09:00"),
            ..Default::default()
        }
    }

    #[test]
    fn one_row_per_session_in_input_order() {
        // Deliberately not sorted by time: server order is display order.
        let sessions = vec![
            session(3, "Afternoon Talk", "15:00", "15:40"),
            session(1, "Opening Keynote", "10:00", "10:30"),
            session(2, "Midday Talk", "13:00", "13:40"),
        ];

        let rows = rows(&sessions, false);

        assert_eq!(rows.len(), sessions.len());
        assert_eq!(
            rows.iter().map(|row| row.title.as_str()).collect::<Vec<_>>(),
            vec!["Afternoon Talk", "Opening Keynote", "Midday Talk"]
        );
        assert_eq!(rows[1].start, "10:00");
        assert_eq!(rows[1].end, "10:30");
    }

    #[test]
    fn speakers_join_in_billing_order() {
        let mut session = session(1, "Panel", "17:00", "18:00");
        session.speakers = vec![
            Speaker {
                name: "Taro Yamada".into(),
                name_ja: "山田太郎".into(),
                ..Default::default()
            },
            Speaker {
                name: "Hanako Sato".into(),
                name_ja: "佐藤花子".into(),
                ..Default::default()
            },
        ];

        let en = rows(std::slice::from_ref(&session), false);
        assert_eq!(en[0].speakers, "Taro Yamada / Hanako Sato");

        let ja = rows(&[session], true);
        assert_eq!(ja[0].speakers, "山田太郎 / 佐藤花子");
    }

    #[test]
    fn speakerless_slot_renders_empty_cell() {
        let rows = rows(&[session(5, "Break", "12:00", "13:00")], false);
        assert_eq!(rows[0].speakers, "");
    }

    #[test]
    fn empty_input_produces_no_rows() {
        assert!(rows(&[], false).is_empty());
    }
}
