//! Shared header/footer partials.
//!
//! Each element with `data-include="/partials/footer.html"` has its contents
//! replaced by the fetched HTML. Elements are filled one at a time in
//! document order; a missing or failing partial leaves its element as is.

use gloo_net::http::Request;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::consts::{INCLUDE_ATTR, INCLUDE_SELECTOR};
use crate::error::{SiteError, is_success};

/// Fetch a partial. `Ok(None)` for a non-success status.
async fn fetch_partial(url: &str) -> Result<Option<String>, SiteError> {
    let resp = Request::get(url).send().await?;
    if !is_success(resp.status()) {
        log::debug!("partial {url} answered {}", resp.status());
        return Ok(None);
    }
    Ok(Some(resp.text().await?))
}

pub async fn inject_partials(document: &Document) {
    let nodes = match document.query_selector_all(INCLUDE_SELECTOR) {
        Ok(list) => list,
        Err(err) => {
            log::warn!("could not query partial placeholders: {err:?}");
            return;
        }
    };
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_ref::<Element>().cloned()) else {
            continue;
        };
        let Some(url) = el.get_attribute(INCLUDE_ATTR).filter(|u| !u.is_empty()) else {
            continue;
        };
        match fetch_partial(&url).await {
            Ok(Some(html)) => el.set_inner_html(&html),
            Ok(None) => {}
            Err(err) => log::warn!("could not load partial {url}: {err}"),
        }
    }
}
