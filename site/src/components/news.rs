//! News section rendered from the fixed announcement list.

use crate::content::NEWS;
use leptos::prelude::*;

/// Dated announcements, newest first. Entries with a link render as
/// anchors, the rest as plain text.
#[component]
pub fn NewsSection(
    /// Render the Japanese message variants
    #[prop(default = false)]
    is_ja: bool,
) -> impl IntoView {
    view! {
        <section class="section" id="news">
            <h2 class="section-title">"NEWS"</h2>
            <ul class="news-list">
                {NEWS.iter().map(|item| {
                    let message = if is_ja { item.message_ja } else { item.message };
                    view! {
                        <li class="news-item">
                            <span class="news-date">{item.date}</span>
                            {match item.link {
                                Some(link) => view! {
                                    <a class="news-message" href=link target="_blank" rel="noopener">
                                        {message}
                                    </a>
                                }.into_any(),
                                None => view! {
                                    <span class="news-message">{message}</span>
                                }.into_any(),
                            }}
                        </li>
                    }
                }).collect::<Vec<_>>()}
            </ul>
        </section>
    }
}
