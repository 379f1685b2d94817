//! Timetable section: the session list as a schedule table.

use crate::timetable;
use crate::types::Session;
use leptos::prelude::*;

/// The TIMETABLE section. Hidden on narrow screens by the stylesheet;
/// rows come from [`timetable::rows`], so the table always shows the
/// same sessions in the same order as the content cards.
#[component]
pub fn TimetableSection(
    sessions: Vec<Session>,
    /// Render the Japanese text variants
    #[prop(default = false)]
    is_ja: bool,
) -> impl IntoView {
    let rows = timetable::rows(&sessions, is_ja);

    view! {
        <section class="section section--timetable" id="timetable">
            <h2 class="section-title">"TIMETABLE"</h2>
            <table class="timetable">
                <thead>
                    <tr>
                        <th>"TIME"</th>
                        <th>"SESSION"</th>
                        <th>"SPEAKERS"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows.into_iter().map(|row| {
                        view! {
                            <tr class="timetable-row">
                                <td class="timetable-time">
                                    {format!("{} - {}", row.start, row.end)}
                                </td>
                                <td class="timetable-title">{row.title}</td>
                                <td class="timetable-speakers">{row.speakers}</td>
                            </tr>
                        }
                    }).collect::<Vec<_>>()}
                </tbody>
            </table>
        </section>
    }
}
