//! # mtc2018-site
//!
//! Leptos components and static-site renderer for the
//! [Mercari Tech Conf 2018](https://techconf.mercari.com/2018/) website.
//!
//! This crate holds everything about the page that doesn't need a
//! browser: the data model for the conference programme, the pure logic
//! behind the two stateful behaviors (header backdrop on scroll, session
//! query lifecycle), and all presentational components. The companion
//! `web` crate mounts the same components client-side and supplies the
//! impure parts (DOM events, fetch).
//!
//! ## Features
//!
//! - **Two render paths, one component tree** - SSR for static HTML,
//!   CSR through the web crate
//! - **Pure logic, testable natively** - scroll reducer, query decoding
//!   and render gating run in plain `cargo test`
//! - **Localized end to end** - every text field carries an en/ja pair
//!
//! ## Quick Start
//!
//! ```rust
//! use mtc2018_site::{render_page, query::SessionQuery, types::Session};
//!
//! // Programme data, normally decoded from the GraphQL API
//! let sessions = vec![Session {
//!     session_id: 1,
//!     title: "Opening Keynote".into(),
//!     ..Default::default()
//! }];
//!
//! // Render the complete page to a static HTML string
//! let html = render_page(&SessionQuery::Succeeded(sessions), false);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//!
//! - [`types`] - programme records (sessions, speakers)
//! - [`scroll`] - header backdrop reducer
//! - [`query`] - session-list query lifecycle and GraphQL decoding
//! - [`timetable`] - schedule-table projection
//! - [`content`] - fixed conference content
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! ## Leptos 0.8 SSR
//!
//! Static rendering uses Leptos 0.8's `RenderHtml` trait:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <PageDocument query=query /> };
//! let html: String = view.to_html();
//! ```
//!
//! No reactive runtime or hydration is needed - pure static HTML
//! generation. The `csr` feature swaps Leptos over to client rendering
//! for the web crate; nothing in this crate changes besides the feature
//! passed through.

#![doc(html_root_url = "https://docs.rs/mtc2018-site/0.1.0")]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
// The speaker-card views nest tachys types past rustc's default depth.
#![recursion_limit = "256"]

pub mod components;
pub mod content;
pub mod query;
pub mod scroll;
pub mod styles;
pub mod timetable;
pub mod types;

/// Render the complete conference page to a static HTML string.
///
/// This is the main entry point for static generation. The session
/// sections follow the query lifecycle: present for
/// [`SessionQuery::Succeeded`], absent for `Loading` and `Failed`.
///
/// # Arguments
///
/// * `query` - Session-list query state to render
/// * `is_ja` - Render the Japanese text variants
///
/// # Returns
///
/// A complete HTML document as a `String`, including `<!DOCTYPE html>`.
///
/// # Example
///
/// ```rust
/// use mtc2018_site::{render_page, query::SessionQuery};
///
/// let html = render_page(&SessionQuery::Loading, true);
/// assert!(html.contains("lang=\"ja\""));
/// ```
#[cfg(feature = "ssr")]
pub fn render_page(query: &query::SessionQuery, is_ja: bool) -> String {
    use crate::components::PageDocument;
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;

    let query = query.clone();
    let doc = view! {
        <PageDocument query=query is_ja=is_ja />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{FetchError, SessionQuery};
    use crate::types::{Session, Speaker};

    fn fixture_sessions() -> Vec<Session> {
        vec![
            Session {
                session_id: 1,
                session_type: "keynote".into(),
                title: "Evolution of Mercari".into(),
                title_ja: "メルカリの進化".into(),
                start_time: "2018-10-04T10:00:00+09:00".into(),
                end_time: "2018-10-04T10:30:00+09:00".into(),
                outline: "Where the marketplace goes next.".into(),
                outline_ja: "マーケットプレイスの次の一手。".into(),
                tags: vec!["go".into(), "microservices".into()],
                speakers: vec![Speaker {
                    speaker_id: "yamada_taro".into(),
                    name: "Taro Yamada".into(),
                    name_ja: "山田太郎".into(),
                    position: "Software Engineer".into(),
                    position_ja: "ソフトウェアエンジニア".into(),
                    profile: "Works on listing infrastructure.".into(),
                    profile_ja: "出品基盤を担当。".into(),
                    twitter_id: "yamada_taro".into(),
                    ..Default::default()
                }],
                ..Default::default()
            },
            Session {
                session_id: 2,
                session_type: "session".into(),
                title: "Microservices Platform".into(),
                title_ja: "マイクロサービス基盤".into(),
                start_time: "2018-10-04T11:00:00+09:00".into(),
                end_time: "2018-10-04T11:40:00+09:00".into(),
                ..Default::default()
            },
            Session {
                session_id: 3,
                session_type: "session".into(),
                title: "Customer Support Tools".into(),
                title_ja: "カスタマーサポートツール".into(),
                start_time: "2018-10-04T13:00:00+09:00".into(),
                end_time: "2018-10-04T13:40:00+09:00".into(),
                ..Default::default()
            },
        ]
    }

    fn card_count(html: &str) -> usize {
        html.matches("<article class=\"content-card\"").count()
    }

    fn row_count(html: &str) -> usize {
        html.matches("<tr class=\"timetable-row\">").count()
    }

    #[test]
    fn renders_page_skeleton() {
        let html = render_page(&SessionQuery::Loading, false);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"en\""));
        assert!(html.contains("Mercari Tech Conf 2018"));
        assert!(html.contains("© Mercari, Inc."));
    }

    #[test]
    fn static_sections_render_in_every_query_state() {
        for query in [
            SessionQuery::Loading,
            SessionQuery::Failed(FetchError::new("offline")),
            SessionQuery::Succeeded(fixture_sessions()),
        ] {
            let html = render_page(&query, false);
            assert!(html.contains("id=\"news\""));
            assert!(html.contains("id=\"about\""));
            assert!(html.contains("id=\"access\""));
        }
    }

    #[test]
    fn loading_renders_no_session_sections() {
        let html = render_page(&SessionQuery::Loading, false);

        assert!(!html.contains("id=\"contents\""));
        assert!(!html.contains("id=\"timetable\""));
        assert_eq!(card_count(&html), 0);
        assert_eq!(row_count(&html), 0);
    }

    #[test]
    fn failure_renders_no_session_sections_and_no_error_text() {
        let err = FetchError::new("http status 503");
        let html = render_page(&SessionQuery::Failed(err), false);

        assert!(!html.contains("id=\"contents\""));
        assert!(!html.contains("id=\"timetable\""));
        assert_eq!(card_count(&html), 0);
        // Fail silent: the cause never reaches the markup
        assert!(!html.contains("503"));
        assert!(!html.contains("fetch failed"));
    }

    #[test]
    fn success_renders_cards_and_rows_in_sync() {
        let sessions = fixture_sessions();
        let expected = sessions.len();
        let html = render_page(&SessionQuery::Succeeded(sessions), false);

        assert_eq!(card_count(&html), expected);
        assert_eq!(row_count(&html), expected);
        assert!(html.contains("id=\"session-1\""));
        assert!(html.contains("Evolution of Mercari"));
        assert!(html.contains("Microservices Platform"));
        assert!(html.contains("Customer Support Tools"));
        assert!(html.contains("10:00 - 10:30"));
    }

    #[test]
    fn empty_session_list_still_renders_both_sections() {
        let html = render_page(&SessionQuery::Succeeded(vec![]), false);

        assert!(html.contains("id=\"contents\""));
        assert!(html.contains("id=\"timetable\""));
        assert_eq!(card_count(&html), 0);
        assert_eq!(row_count(&html), 0);
    }

    #[test]
    fn japanese_locale_selects_ja_fields() {
        let html = render_page(&SessionQuery::Succeeded(fixture_sessions()), true);

        assert!(html.contains("<html lang=\"ja\""));
        assert!(html.contains("メルカリの進化"));
        assert!(html.contains("山田太郎"));
        assert!(html.contains("ソフトウェアエンジニア"));
        assert!(html.contains("出品基盤を担当。"));
        assert!(!html.contains("Where the marketplace goes next."));
        assert!(!html.contains("Works on listing infrastructure."));
    }

    #[test]
    fn english_locale_selects_base_fields() {
        let html = render_page(&SessionQuery::Succeeded(fixture_sessions()), false);

        assert!(html.contains("Taro Yamada"));
        assert!(html.contains("Software Engineer"));
        assert!(html.contains("Works on listing infrastructure."));
        assert!(!html.contains("山田太郎"));
        assert!(!html.contains("出品基盤を担当。"));
    }

    #[test]
    fn speaker_photo_and_sns_links_render() {
        let html = render_page(&SessionQuery::Succeeded(fixture_sessions()), false);

        assert!(html.contains("/static/images/speakers/yamada_taro.png"));
        assert!(html.contains("https://twitter.com/yamada_taro"));
    }

    #[test]
    fn share_links_are_fixed_urls_in_new_contexts() {
        let html = render_page(&SessionQuery::Loading, false);

        assert!(html.contains(crate::content::FACEBOOK_SHARE_URL));
        assert!(html.contains("hashtags=mtc18"));
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("rel=\"noopener\""));
    }
}
