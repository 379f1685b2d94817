// Mercari Tech Conf 2018 — Leptos 0.8 Edition

mod app;
mod fetch;
mod listen;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}
