//! Session-list query: lifecycle states and GraphQL response decoding.
//!
//! The page performs exactly one query per load. The transport lives in
//! the web crate; everything here is pure, so the whole decode path and
//! the render gate are testable without a browser.
//!
//! A page load walks `Loading -> Succeeded | Failed` and stops. No retry,
//! no polling, no cache. On `Failed` the dependent sections stay hidden
//! and the cause goes to the console only.

use crate::types::Session;
use serde::Deserialize;
use thiserror::Error;

/// Path the page posts its GraphQL queries to.
pub const GRAPHQL_ENDPOINT: &str = "/2018/api/query";

/// GraphQL document fetching every session with the fields the content
/// cards and the timetable render.
pub const SESSIONS_QUERY: &str = r#"query AllSessions {
  sessionList {
    nodes {
      id
      sessionId
      type
      title
      titleJa
      startTime
      endTime
      outline
      outlineJa
      tags
      speakers {
        id
        speakerId
        name
        nameJa
        company
        position
        positionJa
        profile
        profileJa
        twitterId
        githubId
      }
    }
  }
}"#;

/// Session-list fetch failure.
///
/// One undifferentiated kind: timeouts, HTTP status errors, GraphQL
/// errors and decode failures all end up here, and the page reacts to
/// all of them the same way.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("session list fetch failed: {message}")]
pub struct FetchError {
    /// Cause description, console-only.
    pub message: String,
}

impl FetchError {
    /// Wrap a cause description.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Lifecycle of the one session-list query a page load performs.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionQuery {
    /// Query still in flight; dependent sections stay absent.
    #[default]
    Loading,
    /// Query failed; dependent sections stay absent, cause logged.
    Failed(FetchError),
    /// Query resolved; sessions render in server order.
    Succeeded(Vec<Session>),
}

impl SessionQuery {
    /// The session list, when the query has succeeded.
    pub fn sessions(&self) -> Option<&[Session]> {
        match self {
            SessionQuery::Succeeded(sessions) => Some(sessions),
            SessionQuery::Loading | SessionQuery::Failed(_) => None,
        }
    }
}

/// Request body for [`SESSIONS_QUERY`], as the endpoint expects it.
pub fn request_body() -> String {
    serde_json::json!({ "query": SESSIONS_QUERY }).to_string()
}

#[derive(Deserialize)]
struct GraphQlResponse {
    data: Option<ResponseData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseData {
    session_list: SessionConnection,
}

#[derive(Deserialize)]
struct SessionConnection {
    #[serde(default)]
    nodes: Vec<Session>,
}

/// Decode a GraphQL response body into the ordered session list.
///
/// A transport-level success can still be a query failure: a non-empty
/// `errors` array or a missing `data` field collapses into [`FetchError`]
/// exactly like a network fault would.
pub fn parse_session_list(body: &str) -> Result<Vec<Session>, FetchError> {
    let response: GraphQlResponse = serde_json::from_str(body)
        .map_err(|err| FetchError::new(format!("malformed response: {err}")))?;

    if let Some(error) = response.errors.first() {
        return Err(FetchError::new(error.message.clone()));
    }

    let data = response
        .data
        .ok_or_else(|| FetchError::new("response carried no data"))?;

    Ok(data.session_list.nodes)
}
