//! # site
//!
//! WebAssembly page enhancements for the static site. On load this fills
//! shared header/footer partials, wires collapsible sections, and bumps the
//! page's usage counter. Per-page scripts reach the reusable helpers through
//! `window.imthebusCore`.
//!
//! Every enhancement degrades to "do nothing" when its markup is missing, so
//! the plain HTML page stays usable.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

pub mod collapsible;
pub mod consts;
pub mod counter;
pub mod error;
pub mod notes;
pub mod partials;

use js_sys::{Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::consts::GLOBAL_NAME;
use crate::error::SiteError;

/// Log level for a page URL query string: `debug=1` turns on debug output.
#[must_use]
pub fn log_level(search: &str) -> log::Level {
    let debug = search
        .trim_start_matches('?')
        .split('&')
        .any(|pair| matches!(pair, "debug=1" | "debug=true"));
    if debug { log::Level::Debug } else { log::Level::Info }
}

fn init_logging(window: &Window) {
    let search = window.location().search().unwrap_or_default();
    if console_log::init_with_level(log_level(&search)).is_err() {
        web_sys::console::warn_1(&JsValue::from_str("console logger already installed"));
    }
}

/// Wire collapsible sections on the current document.
#[wasm_bindgen(js_name = initCollapsibles)]
pub fn init_collapsibles() {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        collapsible::init_collapsibles(&document);
    }
}

/// Publish `window.imthebusCore` for per-page scripts.
fn expose_helpers(window: &Window) -> Result<(), SiteError> {
    let api = Object::new();

    let collapsibles = Closure::<dyn Fn()>::new(init_collapsibles);
    Reflect::set(&api, &JsValue::from_str("initCollapsibles"), collapsibles.as_ref())?;
    collapsibles.forget();

    let notes = Closure::<dyn Fn(JsValue)>::new(notes::init_draggable_notes);
    Reflect::set(&api, &JsValue::from_str("initDraggableNotes"), notes.as_ref())?;
    notes.forget();

    Reflect::set(window, &JsValue::from_str(GLOBAL_NAME), &api)?;
    Ok(())
}

/// Partials first, since collapsibles and the counter may live inside them.
async fn enhance_page() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    partials::inject_partials(&document).await;
    collapsible::init_collapsibles(&document);
    counter::init_tool_counter(&document).await;
}

fn document_loading(document: &Document) -> bool {
    match Reflect::get(document, &JsValue::from_str("readyState")) {
        Ok(state) => state.as_string().is_some_and(|s| s == "loading"),
        Err(_) => false,
    }
}

/// Run `enhance_page` once the DOM is parsed.
fn on_ready(document: &Document) -> Result<(), SiteError> {
    if !document_loading(document) {
        wasm_bindgen_futures::spawn_local(enhance_page());
        return Ok(());
    }
    let handler = Closure::once_into_js(|| wasm_bindgen_futures::spawn_local(enhance_page()));
    document.add_event_listener_with_callback("DOMContentLoaded", handler.unchecked_ref())?;
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let Some(window) = web_sys::window() else {
        return;
    };
    init_logging(&window);

    if let Err(err) = expose_helpers(&window) {
        log::warn!("could not publish {GLOBAL_NAME}: {err}");
    }
    let Some(document) = window.document() else {
        return;
    };
    if let Err(err) = on_ready(&document) {
        log::warn!("could not schedule page enhancements: {err}");
    }
}
