//! GraphQL fetch for the session list.

use mtc2018_site::query::{self, FetchError};
use mtc2018_site::types::Session;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// POST the session-list query and decode the response.
///
/// One call per page load. Every failure mode (no window, network fault,
/// non-2xx status, GraphQL errors, malformed body) collapses into
/// [`FetchError`]; the caller decides what, if anything, to show.
pub async fn fetch_session_list() -> Result<Vec<Session>, FetchError> {
    let window = web_sys::window().ok_or_else(|| FetchError::new("no window"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&query::request_body()));

    let request = Request::new_with_str_and_init(query::GRAPHQL_ENDPOINT, &opts)
        .map_err(|err| FetchError::new(format!("bad request: {err:?}")))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|err| FetchError::new(format!("bad header: {err:?}")))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| FetchError::new(format!("network error: {err:?}")))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| FetchError::new("fetch returned a non-Response value"))?;

    if !resp.ok() {
        return Err(FetchError::new(format!("http status {}", resp.status())));
    }

    let text_promise = resp
        .text()
        .map_err(|err| FetchError::new(format!("body read failed: {err:?}")))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|err| FetchError::new(format!("body read failed: {err:?}")))?;

    let body = text.as_string().unwrap_or_default();
    query::parse_session_list(&body)
}
