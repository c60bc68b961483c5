use std::cell::RefCell;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};

use crate::attach::DropHandler;
use crate::board::Board;
use crate::consts::{BASE_Z_INDEX, FALLBACK_NOTE_SIZE};
use crate::dom::{self, DomBoard};
use crate::geom::{Point, Size, clamp_position, normalized_center};
use crate::input::{Button, DragSession, DragState};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum Action<N> {
    /// Put the note above everything raised before it.
    Raise { note: N, z_index: i64 },
    /// Add or remove the dragging indicator.
    SetDragging { note: N, dragging: bool },
    /// Write a clamped board-relative position, in pixels.
    Move { note: N, left: f64, top: f64 },
    /// The drag completed. Emitted at most once per session.
    Dropped { note: N, x_norm: f64, y_norm: f64 },
}

/// Core engine state — everything that doesn't touch the DOM directly.
///
/// Separated from `Engine` so it can be tested against an in-memory board.
pub struct EngineCore<B: Board> {
    board: B,
    state: DragState<B::Note>,
    top_z: i64,
    fallback_size: Size,
}

impl<B: Board> EngineCore<B> {
    #[must_use]
    pub fn new(board: B) -> Self {
        Self {
            board,
            state: DragState::Idle,
            top_z: BASE_Z_INDEX,
            fallback_size: FALLBACK_NOTE_SIZE,
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }

    #[must_use]
    pub fn state(&self) -> &DragState<B::Note> {
        &self.state
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Current rendered size of `note`, with the fallback for unrendered notes.
    fn rendered_size(&self, note: &B::Note) -> Size {
        self.board.note_size(note).or_fallback(self.fallback_size)
    }

    // --- Input events ---

    /// Start a drag if `target` resolves to a note that can be picked up.
    ///
    /// Non-primary buttons, targets outside any note, notes that are being
    /// removed, and a pointer-down while already dragging are all ignored.
    pub fn on_pointer_down(&mut self, target: &B::Target, pointer: Point, button: Button) -> Vec<Action<B::Note>> {
        if button != Button::Primary || self.state.is_dragging() {
            return Vec::new();
        }
        let Some(note) = self.board.closest_note(target) else {
            return Vec::new();
        };
        if self.board.is_removing(&note) {
            log::debug!("ignoring pointer-down on a note being removed");
            return Vec::new();
        }

        let board = self.board.rect();
        let note_rect = self.board.note_rect(&note);
        let size = self.rendered_size(&note);
        let position = clamp_position(board.relative(note_rect.origin()), board.size(), size);
        let grab_offset = note_rect.relative(pointer);
        let normalized = normalized_center(position, size, board);

        self.top_z += 1;
        let actions = vec![
            Action::Raise { note: note.clone(), z_index: self.top_z },
            Action::SetDragging { note: note.clone(), dragging: true },
        ];
        log::debug!("drag start at ({:.1}, {:.1}), z {}", position.x, position.y, self.top_z);
        self.state = DragState::Dragging(DragSession { note, board, grab_offset, position, normalized });
        actions
    }

    /// Follow the pointer with the dragged note, clamped to the board.
    pub fn on_pointer_move(&mut self, pointer: Point) -> Vec<Action<B::Note>> {
        let DragState::Dragging(session) = &self.state else {
            return Vec::new();
        };
        let size = self.rendered_size(&session.note);
        let board = session.board;
        let relative = board.relative(pointer);
        let candidate = Point::new(relative.x - session.grab_offset.x, relative.y - session.grab_offset.y);
        let position = clamp_position(candidate, board.size(), size);
        let normalized = normalized_center(position, size, board);

        let DragState::Dragging(session) = &mut self.state else {
            return Vec::new();
        };
        session.position = position;
        if normalized.is_some() {
            session.normalized = normalized;
        }
        vec![Action::Move { note: session.note.clone(), left: position.x, top: position.y }]
    }

    /// End the drag. Always returns to idle; reports the drop only if a
    /// normalized location was established during the session.
    pub fn on_pointer_up(&mut self) -> Vec<Action<B::Note>> {
        let DragState::Dragging(session) = std::mem::take(&mut self.state) else {
            return Vec::new();
        };
        let mut actions = vec![Action::SetDragging { note: session.note.clone(), dragging: false }];
        let at = session.position;
        match session.normalized {
            Some(n) => {
                log::debug!("drag end at ({:.1}, {:.1}), drop at ({:.4}, {:.4})", at.x, at.y, n.x, n.y);
                actions.push(Action::Dropped { note: session.note, x_norm: n.x, y_norm: n.y });
            }
            None => log::debug!("drag end at ({:.1}, {:.1}) without a drop location", at.x, at.y),
        }
        actions
    }
}

/// The DOM-backed engine: an `EngineCore` over a board element plus the
/// host's drop handler.
pub struct Engine {
    core: RefCell<EngineCore<DomBoard>>,
    on_drop: RefCell<Option<DropHandler>>,
}

impl Engine {
    #[must_use]
    pub fn new(board: DomBoard, on_drop: Option<DropHandler>) -> Self {
        Self {
            core: RefCell::new(EngineCore::new(board)),
            on_drop: RefCell::new(on_drop),
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.core.borrow().is_dragging()
    }

    pub fn handle_pointer_down(&self, event: &MouseEvent) {
        let Some(target) = event.target().and_then(|t| t.dyn_ref::<Element>().cloned()) else {
            return;
        };
        let actions = self
            .core
            .borrow_mut()
            .on_pointer_down(&target, client_point(event), Button::from_dom(event.button()));
        self.apply(actions);
    }

    pub fn handle_pointer_move(&self, event: &MouseEvent) {
        let actions = self.core.borrow_mut().on_pointer_move(client_point(event));
        self.apply(actions);
    }

    pub fn handle_pointer_up(&self) {
        let actions = self.core.borrow_mut().on_pointer_up();
        self.apply(actions);
    }

    /// Apply actions to the page. The core is not borrowed here, so a drop
    /// handler may safely re-enter the page script.
    fn apply(&self, actions: Vec<Action<HtmlElement>>) {
        for action in actions {
            if let Action::Dropped { note, x_norm, y_norm } = &action {
                call_detached(&self.on_drop, |handler| handler(note, *x_norm, *y_norm));
            } else {
                dom::apply(&action);
            }
        }
    }
}

/// Run the handler held in `slot` with the slot emptied for the duration.
/// A handler that re-enters the engine sees no handler rather than a live
/// borrow. The handler goes back afterwards unless it was replaced meanwhile.
fn call_detached<H>(slot: &RefCell<Option<H>>, call: impl FnOnce(&mut H)) {
    let taken = slot.borrow_mut().take();
    let Some(mut handler) = taken else {
        return;
    };
    call(&mut handler);
    let mut slot = slot.borrow_mut();
    if slot.is_none() {
        *slot = Some(handler);
    }
}

fn client_point(event: &MouseEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}
