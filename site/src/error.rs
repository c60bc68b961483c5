#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use wasm_bindgen::JsValue;

/// Errors from the page enhancements. None of these are fatal: callers log
/// them and leave the page as it was.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// The request never produced a response (network, CORS, aborted).
    #[error("request failed: {0}")]
    Fetch(#[from] gloo_net::Error),
    /// The server answered with a non-success status.
    #[error("bad status {0}")]
    Status(u16),
    /// The response body was not the JSON we expected.
    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),
    /// A browser API threw.
    #[error("browser error: {0}")]
    Js(String),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Whether an HTTP status is in the 2xx range.
#[must_use]
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}
