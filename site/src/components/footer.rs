//! Page footer: share links and copyright.

use super::{Icon, ICON_FACEBOOK_LOGO, ICON_TWITTER_LOGO};
use crate::content::{FACEBOOK_SHARE_URL, TWITTER_SHARE_URL};
use leptos::prelude::*;

/// Navy footer band closing the page.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-inner">
                <div class="footer-sns">
                    <a
                        href=TWITTER_SHARE_URL
                        target="_blank"
                        rel="noopener"
                        aria-label="Share on Twitter"
                    >
                        <Icon path=ICON_TWITTER_LOGO />
                    </a>
                    <a
                        href=FACEBOOK_SHARE_URL
                        target="_blank"
                        rel="noopener"
                        aria-label="Share on Facebook"
                    >
                        <Icon path=ICON_FACEBOOK_LOGO />
                    </a>
                </div>
                <div class="footer-copyright">"© Mercari, Inc."</div>
            </div>
        </footer>
    }
}
