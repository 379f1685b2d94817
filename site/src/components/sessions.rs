//! Render gate for the two session-backed sections.

use super::{ContentSection, TimetableSection};
use crate::query::SessionQuery;
use leptos::prelude::*;

/// Content cards and timetable, gated on the query lifecycle.
///
/// Both sections render from the one resolved session list, so they can
/// never disagree about count or order. While the query is loading, and
/// after a failure, neither section exists in the tree: no spinner, no
/// error banner.
#[component]
pub fn SessionSections(
    query: SessionQuery,
    /// Render the Japanese text variants
    #[prop(default = false)]
    is_ja: bool,
) -> impl IntoView {
    match query {
        SessionQuery::Succeeded(sessions) => view! {
            <ContentSection sessions=sessions.clone() is_ja=is_ja />
            <TimetableSection sessions=sessions is_ja=is_ja />
        }
        .into_any(),
        SessionQuery::Loading | SessionQuery::Failed(_) => view! { "" }.into_any(),
    }
}
