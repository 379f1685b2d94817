//! Fixed page header: logo, section anchors, share links.

use super::{Icon, ICON_FACEBOOK_LOGO, ICON_TWITTER_LOGO};
use crate::content::{CONF_TITLE, FACEBOOK_SHARE_URL, NAV_LINKS, TWITTER_SHARE_URL};
use leptos::prelude::*;

/// The fixed header bar.
///
/// Transparent while the hero visual is in view; `show_bg` switches in
/// the filled backdrop once the page scrolls past the fold. The flag is
/// plain data so the bar renders identically on the server and in the
/// browser; the browser shell re-renders it when its scroll state flips.
#[component]
pub fn Header(
    /// Filled backdrop (page scrolled past the hero fold)
    #[prop(default = false)]
    show_bg: bool,
) -> impl IntoView {
    let class = if show_bg {
        "header header--filled"
    } else {
        "header"
    };

    view! {
        <header class=class>
            <a class="header-logo" href="/2018/">
                <img src="/static/images/header_logo.svg" alt=CONF_TITLE />
            </a>
            <div class="header-space"></div>
            <nav class="header-nav">
                {NAV_LINKS.iter().map(|(label, anchor)| {
                    view! {
                        <a class="header-link" href={*anchor}>{*label}</a>
                    }
                }).collect::<Vec<_>>()}
                <div class="header-sns">
                    <a
                        class="header-sns-icon"
                        href=TWITTER_SHARE_URL
                        target="_blank"
                        rel="noopener"
                        aria-label="Share on Twitter"
                    >
                        <Icon path=ICON_TWITTER_LOGO />
                    </a>
                    <a
                        class="header-sns-icon"
                        href=FACEBOOK_SHARE_URL
                        target="_blank"
                        rel="noopener"
                        aria-label="Share on Facebook"
                    >
                        <Icon path=ICON_FACEBOOK_LOGO />
                    </a>
                </div>
            </nav>
        </header>
    }
}
