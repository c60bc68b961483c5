//! `initDraggableNotes` for per-page scripts.
//!
//! ```js
//! imthebusCore.initDraggableNotes({
//!   boardEl: document.getElementById("board"),
//!   noteSelector: ".note",
//!   onDrop(note, xNorm, yNorm) { /* ... */ },
//! });
//! ```

use js_sys::{Function, Reflect};
use noteboard::{DragOptions, DropHandler};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};

/// Read `key` off a JS options object, treating `null` like `undefined`.
fn field(options: &JsValue, key: &str) -> Option<JsValue> {
    if !options.is_object() {
        return None;
    }
    match Reflect::get(options, &JsValue::from_str(key)) {
        Ok(v) if !v.is_undefined() && !v.is_null() => Some(v),
        _ => None,
    }
}

/// Wrap a JS `onDrop(note, xNorm, yNorm)` callback. Exceptions it throws are
/// logged and do not reach the drag engine.
fn js_drop_handler(callback: Function) -> DropHandler {
    Box::new(move |note: &HtmlElement, x_norm: f64, y_norm: f64| {
        let result = callback.call3(
            &JsValue::NULL,
            note.as_ref(),
            &JsValue::from_f64(x_norm),
            &JsValue::from_f64(y_norm),
        );
        if let Err(err) = result {
            log::warn!("onDrop handler threw: {err:?}");
        }
    })
}

/// Make notes on a board draggable.
///
/// A missing `boardEl` does nothing. A non-function `onDrop` is ignored, and
/// a blank `noteSelector` means `.note`.
#[wasm_bindgen(js_name = initDraggableNotes)]
pub fn init_draggable_notes(options: JsValue) {
    let board = field(&options, "boardEl").and_then(|v| v.dyn_ref::<Element>().cloned());
    let selector = field(&options, "noteSelector").and_then(|v| v.as_string());
    let mut drag = DragOptions::with_selector(selector.as_deref());
    drag.on_drop = field(&options, "onDrop")
        .and_then(|v| v.dyn_ref::<Function>().cloned())
        .map(js_drop_handler);
    noteboard::attach(board, drag);
}
