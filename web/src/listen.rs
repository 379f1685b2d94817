//! Window scroll listener with deregistration on drop.

use wasm_bindgen::prelude::*;

/// Handle for a `scroll` listener on `window`.
///
/// The callback stays registered for the lifetime of the handle.
/// Dropping it removes the listener, so tying the handle to component
/// cleanup guarantees no callback outlives the page.
pub struct ScrollListener {
    closure: Closure<dyn FnMut()>,
}

impl ScrollListener {
    /// Register `callback` for every `scroll` event on `window`.
    pub fn attach(callback: impl FnMut() + 'static) -> Self {
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        }

        Self { closure }
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("scroll", self.closure.as_ref().unchecked_ref());
        }
    }
}
