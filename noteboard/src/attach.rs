//! Wiring an engine to a board element.
//!
//! One `mousedown` listener is scoped to the board. One `mousemove` /
//! `mouseup` pair is scoped to the document so a drag keeps following the
//! pointer after it leaves the board. The document pair stays registered for
//! the life of the page and defers to the engine's state: while idle, both
//! are no-ops.

#[cfg(test)]
#[path = "attach_test.rs"]
mod attach_test;

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, EventTarget, HtmlElement, MouseEvent};

use crate::consts::DEFAULT_NOTE_SELECTOR;
use crate::dom::DomBoard;
use crate::engine::Engine;

/// Receives the note and its normalized center when a drag completes.
pub type DropHandler = Box<dyn FnMut(&HtmlElement, f64, f64)>;

/// Host-supplied options for [`attach`].
pub struct DragOptions {
    /// Selector identifying draggable notes inside the board.
    pub note_selector: String,
    /// Called once per completed drag.
    pub on_drop: Option<DropHandler>,
}

impl Default for DragOptions {
    fn default() -> Self {
        Self {
            note_selector: DEFAULT_NOTE_SELECTOR.to_owned(),
            on_drop: None,
        }
    }
}

impl DragOptions {
    /// Options with `selector`, falling back to the default when it is blank.
    #[must_use]
    pub fn with_selector(selector: Option<&str>) -> Self {
        let note_selector = match selector.map(str::trim) {
            Some(s) if !s.is_empty() => s.to_owned(),
            _ => DEFAULT_NOTE_SELECTOR.to_owned(),
        };
        Self { note_selector, on_drop: None }
    }
}

/// Make the notes inside `board` draggable.
///
/// A missing board is a silent no-op, so a page without the expected markup
/// keeps working. Attaching twice to the same board stacks listeners.
pub fn attach(board: Option<Element>, options: DragOptions) {
    let Some(board) = board else {
        log::debug!("no board element; draggable notes not attached");
        return;
    };
    if let Err(err) = try_attach(board, options) {
        log::warn!("could not attach draggable notes: {err:?}");
    }
}

fn try_attach(board: Element, options: DragOptions) -> Result<(), JsValue> {
    let document = board
        .owner_document()
        .ok_or_else(|| JsValue::from_str("board element has no owner document"))?;
    let engine = Rc::new(Engine::new(
        DomBoard::new(board.clone(), options.note_selector),
        options.on_drop,
    ));

    let eng = Rc::clone(&engine);
    let mousedown = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
        eng.handle_pointer_down(&e);
    }));
    listen(&board, "mousedown", mousedown)?;

    let eng = Rc::clone(&engine);
    let mousemove = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
        if eng.is_dragging() {
            eng.handle_pointer_move(&e);
        }
    }));
    listen(&document, "mousemove", mousemove)?;

    let eng = engine;
    let mouseup = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |_e: MouseEvent| {
        if eng.is_dragging() {
            eng.handle_pointer_up();
        }
    }));
    listen(&document, "mouseup", mouseup)?;

    log::debug!("draggable notes attached");
    Ok(())
}

/// Register `handler` for `event` and leak it for the life of the page.
fn listen(target: &EventTarget, event: &str, handler: Closure<dyn FnMut(MouseEvent)>) -> Result<(), JsValue> {
    target.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}
