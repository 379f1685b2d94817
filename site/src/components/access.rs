//! Access section: venue, address, map link.

use super::{Icon, ICON_MAP_PIN};
use crate::content::{
    CONF_VENUE, CONF_VENUE_ADDRESS, CONF_VENUE_ADDRESS_JA, CONF_VENUE_JA, VENUE_MAP_URL,
};
use leptos::prelude::*;

/// Venue details with an external map link.
#[component]
pub fn AccessSection(
    /// Render the Japanese text variants
    #[prop(default = false)]
    is_ja: bool,
) -> impl IntoView {
    let venue = if is_ja { CONF_VENUE_JA } else { CONF_VENUE };
    let address = if is_ja {
        CONF_VENUE_ADDRESS_JA
    } else {
        CONF_VENUE_ADDRESS
    };

    view! {
        <section class="section" id="access">
            <h2 class="section-title">"ACCESS"</h2>
            <p class="access-venue">{venue}</p>
            <p class="access-address">{address}</p>
            <a class="access-map-link" href=VENUE_MAP_URL target="_blank" rel="noopener">
                <Icon path=ICON_MAP_PIN class="icon-sm" />
                "Google Maps"
            </a>
        </section>
    }
}
