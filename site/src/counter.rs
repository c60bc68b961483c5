//! Page-view counter backed by counterapi.dev.
//!
//! A page opts in with `<body data-counter-key="...">` and an element with id
//! `toolUsageCount`. Each load bumps the counter and shows the new value, or
//! `?` when the service can't be reached or answers with something unusable.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use gloo_net::http::Request;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Deserialize;
use serde_json::{Number, Value};
use web_sys::Document;

use crate::consts::{COUNTER_API_BASE, COUNTER_ELEMENT_ID, COUNTER_KEY_ATTR, COUNTER_NAMESPACE, UNKNOWN_COUNT};
use crate::error::{SiteError, is_success};

/// Characters `encodeURIComponent` leaves alone besides ASCII alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// The service has reported the count under each of these names.
#[derive(Debug, Default, Deserialize)]
struct CounterResponse {
    count: Option<Value>,
    value: Option<Value>,
    counter: Option<Value>,
}

/// URL that increments and returns the counter for `key`.
#[must_use]
pub fn counter_url(key: &str) -> String {
    format!(
        "{COUNTER_API_BASE}/{COUNTER_NAMESPACE}/{}/up",
        utf8_percent_encode(key, URI_COMPONENT)
    )
}

/// Pull the displayable count out of a response body.
///
/// Returns `Ok(None)` when the body is valid JSON but not an object, or an
/// object whose count fields are all missing or null.
///
/// # Errors
///
/// Returns [`SiteError::Json`] if the body is not JSON at all.
pub fn parse_count(body: &str) -> Result<Option<String>, SiteError> {
    // A derived struct also accepts sequences by position, so only objects
    // are mapped onto it.
    let object @ Value::Object(_) = serde_json::from_str::<Value>(body)? else {
        return Ok(None);
    };
    let resp: CounterResponse = serde_json::from_value(object)?;
    Ok(resp.count.or(resp.value).or(resp.counter).map(|v| display(&v)))
}

/// Render a count the way `String(value)` would in the page.
fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => display_number(n),
        other => other.to_string(),
    }
}

/// Integers print exactly. Other numbers go through `f64`, whose `Display`
/// drops a zero fraction (`1.0` prints as `1`).
fn display_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    n.as_f64().map_or_else(|| n.to_string(), |f| f.to_string())
}

async fn fetch_count(key: &str) -> Result<Option<String>, SiteError> {
    let resp = Request::get(&counter_url(key)).send().await?;
    if !is_success(resp.status()) {
        return Err(SiteError::Status(resp.status()));
    }
    let body = resp.text().await?;
    parse_count(&body)
}

/// Bump and display the page's counter, if the page asks for one.
pub async fn init_tool_counter(document: &Document) {
    let Some(body) = document.body() else {
        return;
    };
    let Some(key) = body.get_attribute(COUNTER_KEY_ATTR).filter(|k| !k.is_empty()) else {
        return;
    };
    let Some(span) = document.get_element_by_id(COUNTER_ELEMENT_ID) else {
        return;
    };

    let text = match fetch_count(&key).await {
        Ok(Some(count)) => count,
        Ok(None) => UNKNOWN_COUNT.to_owned(),
        Err(err) => {
            log::warn!("tool counter could not be loaded: {err}");
            UNKNOWN_COUNT.to_owned()
        }
    };
    span.set_text_content(Some(&text));
}
