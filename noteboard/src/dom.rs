//! `Board` over a live DOM element, and writing engine actions back to notes.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{DomRect, Element, HtmlElement};

use crate::board::Board;
use crate::consts::{DRAGGING_CLASS, REMOVING_CLASS};
use crate::engine::Action;
use crate::geom::{Rect, Size};

/// A board element plus the selector that identifies its notes.
pub struct DomBoard {
    element: Element,
    note_selector: String,
}

impl DomBoard {
    #[must_use]
    pub fn new(element: Element, note_selector: String) -> Self {
        Self { element, note_selector }
    }
}

fn to_rect(r: &DomRect) -> Rect {
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

impl Board for DomBoard {
    type Target = Element;
    type Note = HtmlElement;

    fn rect(&self) -> Rect {
        to_rect(&self.element.get_bounding_client_rect())
    }

    fn closest_note(&self, target: &Element) -> Option<HtmlElement> {
        let found = match target.closest(&self.note_selector) {
            Ok(found) => found?,
            Err(err) => {
                log::warn!("invalid note selector {:?}: {err:?}", self.note_selector);
                return None;
            }
        };
        // A match above the board belongs to some other surface.
        if !self.element.contains(Some(found.as_ref())) {
            return None;
        }
        found.dyn_ref::<HtmlElement>().cloned()
    }

    fn note_rect(&self, note: &HtmlElement) -> Rect {
        to_rect(&note.get_bounding_client_rect())
    }

    fn note_size(&self, note: &HtmlElement) -> Size {
        Size::new(f64::from(note.offset_width()), f64::from(note.offset_height()))
    }

    fn is_removing(&self, note: &HtmlElement) -> bool {
        note.class_list().contains(REMOVING_CLASS)
    }
}

/// CSS pixel length for an inline `left`/`top`. Negative zero prints as `0px`.
fn px(value: f64) -> String {
    format!("{}px", value + 0.0)
}

fn warn_on_err(what: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::warn!("failed to {what}: {err:?}");
    }
}

/// Apply one non-drop action to its note's inline style or class list.
pub fn apply(action: &Action<HtmlElement>) {
    match action {
        Action::Raise { note, z_index } => {
            warn_on_err("raise note", note.style().set_property("z-index", &z_index.to_string()));
        }
        Action::SetDragging { note, dragging: true } => {
            warn_on_err("mark note dragging", note.class_list().add_1(DRAGGING_CLASS));
        }
        Action::SetDragging { note, dragging: false } => {
            warn_on_err("clear note dragging", note.class_list().remove_1(DRAGGING_CLASS));
        }
        Action::Move { note, left, top } => {
            let style = note.style();
            warn_on_err("position note", style.set_property("left", &px(*left)));
            warn_on_err("position note", style.set_property("top", &px(*top)));
        }
        Action::Dropped { .. } => {}
    }
}
