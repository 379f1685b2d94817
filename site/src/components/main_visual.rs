//! Hero visual: conference name, date, venue.

use super::{Icon, ICON_CALENDAR_BLANK};
use crate::content::{CONF_DATE_LABEL, CONF_TITLE, CONF_VENUE};
use leptos::prelude::*;

/// Full-height hero section under the transparent header.
#[component]
pub fn MainVisual() -> impl IntoView {
    view! {
        <section class="main-visual" id="top">
            <div class="main-visual-inner">
                <h1 class="main-visual-title">{CONF_TITLE}</h1>
                <p class="main-visual-date">
                    <Icon path=ICON_CALENDAR_BLANK class="icon-sm" />
                    {CONF_DATE_LABEL}
                </p>
                <p class="main-visual-venue">{CONF_VENUE}</p>
            </div>
        </section>
    }
}
