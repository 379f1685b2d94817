//! About section: conference description and key facts.

use crate::content::{
    ABOUT_TEXT, ABOUT_TEXT_JA, CONF_DATE_LABEL, CONF_VENUE, CONF_VENUE_JA,
};
use leptos::prelude::*;

/// Conference description plus the date/venue fact list.
#[component]
pub fn AboutSection(
    /// Render the Japanese text variants
    #[prop(default = false)]
    is_ja: bool,
) -> impl IntoView {
    let lead = if is_ja { ABOUT_TEXT_JA } else { ABOUT_TEXT };
    let venue = if is_ja { CONF_VENUE_JA } else { CONF_VENUE };

    view! {
        <section class="section" id="about">
            <h2 class="section-title">"ABOUT"</h2>
            <p class="about-lead">{lead}</p>
            <ul class="about-facts">
                <li class="about-fact">
                    <span class="about-fact-label">"DATE"</span>
                    <span>{CONF_DATE_LABEL}</span>
                </li>
                <li class="about-fact">
                    <span class="about-fact-label">"PLACE"</span>
                    <span>{venue}</span>
                </li>
            </ul>
        </section>
    }
}
