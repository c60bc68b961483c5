//! Collapsible sections.
//!
//! A toggle names its body with `data-collapsible-target` (a selector). The
//! body is open while it carries the `open` class; the toggle's label gets a
//! `+ ` or `- ` prefix to match.

#[cfg(test)]
#[path = "collapsible_test.rs"]
mod collapsible_test;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element};

use crate::consts::{LABEL_BASE_ATTR, OPEN_CLASS, TOGGLE_SELECTOR, TOGGLE_TARGET_ATTR};
use crate::error::SiteError;

/// Label text for a toggle in the given state.
#[must_use]
pub fn toggle_label(open: bool, base: &str) -> String {
    let prefix = if open { "- " } else { "+ " };
    format!("{prefix}{base}")
}

/// Base label: `data-label-base` if set, else the toggle's own text.
#[must_use]
pub fn base_label(attr: Option<String>, text: Option<String>) -> String {
    attr.filter(|s| !s.is_empty()).or(text).unwrap_or_default()
}

/// Wire every collapsible toggle on the page.
pub fn init_collapsibles(document: &Document) {
    let toggles = match document.query_selector_all(TOGGLE_SELECTOR) {
        Ok(list) => list,
        Err(err) => {
            log::warn!("could not query collapsible toggles: {err:?}");
            return;
        }
    };
    for i in 0..toggles.length() {
        let Some(toggle) = toggles.item(i).and_then(|n| n.dyn_ref::<Element>().cloned()) else {
            continue;
        };
        if let Err(err) = wire_toggle(document, toggle) {
            log::warn!("could not wire collapsible toggle: {err}");
        }
    }
}

fn wire_toggle(document: &Document, toggle: Element) -> Result<(), SiteError> {
    let Some(target) = toggle.get_attribute(TOGGLE_TARGET_ATTR).filter(|t| !t.is_empty()) else {
        return Ok(());
    };
    let Some(body) = document.query_selector(&target)? else {
        return Ok(());
    };

    let base = base_label(toggle.get_attribute(LABEL_BASE_ATTR), toggle.text_content());
    toggle.set_text_content(Some(&toggle_label(body.class_list().contains(OPEN_CLASS), &base)));

    let label_el = toggle.clone();
    let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        let open = !body.class_list().contains(OPEN_CLASS);
        if let Err(err) = body.class_list().toggle_with_force(OPEN_CLASS, open) {
            log::warn!("could not toggle collapsible: {err:?}");
            return;
        }
        label_el.set_text_content(Some(&toggle_label(open, &base)));
    }));
    toggle.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
    onclick.forget();
    Ok(())
}
