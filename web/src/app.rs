//! Page controller: scroll-driven header state and the session query.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use mtc2018_site::components::{
    AboutSection, AccessSection, Footer, Header, MainVisual, NewsSection, SessionSections,
};
use mtc2018_site::query::SessionQuery;
use mtc2018_site::scroll::HeaderScrollState;
use mtc2018_site::styles::SITE_CSS;
use wasm_bindgen::prelude::*;

use crate::fetch;
use crate::listen::ScrollListener;

/// Current vertical scroll offset; 0 when the window can't report one.
fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Locale pick, decided once per page load from the browser language.
fn prefers_japanese() -> bool {
    web_sys::window()
        .and_then(|window| window.navigator().language())
        .map(|language| language.starts_with("ja"))
        .unwrap_or(false)
}

/// The conference page.
///
/// Renders the shared component tree and owns the only two pieces of
/// client state: the header backdrop flag and the session query.
#[component]
pub fn App() -> impl IntoView {
    let is_ja = prefers_japanese();

    let (show_bg, set_show_bg) = signal(false);
    let (query, set_query) = signal(SessionQuery::Loading);

    // Header backdrop: compute once at mount, then follow scroll events.
    // The reducer detaches and the listener deregisters on cleanup, so
    // no scroll update can land after the page is gone.
    Effect::new(move || {
        let state = Rc::new(RefCell::new(HeaderScrollState::new(scroll_offset())));
        set_show_bg.set(state.borrow().shows_backdrop());

        let listener_state = Rc::clone(&state);
        let listener = ScrollListener::attach(move || {
            if let Some(shown) = listener_state.borrow_mut().on_scroll(scroll_offset()) {
                let _ = set_show_bg.try_set(shown);
            }
        });

        on_cleanup(move || {
            state.borrow_mut().detach();
            drop(listener);
        });
    });

    // The one session-list fetch this page load performs.
    Effect::new(move || {
        wasm_bindgen_futures::spawn_local(async move {
            let next = match fetch::fetch_session_list().await {
                Ok(sessions) => SessionQuery::Succeeded(sessions),
                Err(error) => {
                    web_sys::console::error_1(&JsValue::from_str(&error.to_string()));
                    SessionQuery::Failed(error)
                }
            };
            // The page may be gone by the time the response lands;
            // a disposed signal just swallows the result.
            let _ = set_query.try_set(next);
        });
    });

    view! {
        <style>{SITE_CSS}</style>
        {move || view! { <Header show_bg=show_bg.get() /> }}
        <MainVisual />
        <div class="body">
            <NewsSection is_ja=is_ja />
            <AboutSection is_ja=is_ja />
            {move || view! { <SessionSections query=query.get() is_ja=is_ja /> }}
            <AccessSection is_ja=is_ja />
        </div>
        <Footer />
    }
}
