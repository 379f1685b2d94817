//! Root document component - the complete HTML page.

use super::{
    AboutSection, AccessSection, Footer, Header, MainVisual, NewsSection, SessionSections,
};
use crate::content::CONF_TITLE;
use crate::query::SessionQuery;
use crate::styles::SITE_CSS;
use leptos::prelude::*;

/// The complete HTML document for the conference page.
///
/// The static renderer wraps this straight into a file. The header
/// renders with the backdrop off, matching a page at scroll offset 0;
/// scroll behavior only exists in the browser shell.
#[component]
pub fn PageDocument(
    query: SessionQuery,
    /// Render the Japanese text variants
    #[prop(default = false)]
    is_ja: bool,
) -> impl IntoView {
    let lang = if is_ja { "ja" } else { "en" };

    view! {
        <html lang=lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{CONF_TITLE}</title>
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <Header show_bg=false />
                <MainVisual />
                <div class="body">
                    <NewsSection is_ja=is_ja />
                    <AboutSection is_ja=is_ja />
                    <SessionSections query=query is_ja=is_ja />
                    <AccessSection is_ja=is_ja />
                </div>
                <Footer />
            </body>
        </html>
    }
}
