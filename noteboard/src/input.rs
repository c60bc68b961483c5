//! Input model: mouse buttons and the drag state machine.
//!
//! `DragState` is the gesture tracked between pointer-down and pointer-up.
//! A `Dragging` state carries everything needed to position the note on each
//! move and to report the drop location on release.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::{Point, Rect};

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button.
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button.
    Secondary,
    /// Back, forward, or any other extra button.
    Other(i16),
}

impl Button {
    /// Map a DOM `MouseEvent.button` value.
    #[must_use]
    pub fn from_dom(button: i16) -> Self {
        match button {
            0 => Self::Primary,
            1 => Self::Middle,
            2 => Self::Secondary,
            other => Self::Other(other),
        }
    }
}

/// Transient state for one note being dragged.
#[derive(Debug, Clone)]
pub struct DragSession<N> {
    /// The note being moved.
    pub note: N,
    /// Board rectangle sampled at pick-up. Not re-sampled during the drag.
    pub board: Rect,
    /// Pointer offset from the note's top-left corner at pick-up.
    pub grab_offset: Point,
    /// Last clamped board-relative position of the note.
    pub position: Point,
    /// Last normalized center, once one could be computed.
    pub normalized: Option<Point>,
}

/// State of the drag engine for one board.
#[derive(Debug, Clone)]
pub enum DragState<N> {
    /// No drag in progress; waiting for a qualifying pointer-down.
    Idle,
    /// A note is following the pointer.
    Dragging(DragSession<N>),
}

impl<N> Default for DragState<N> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<N> DragState<N> {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// The active session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession<N>> {
        match self {
            Self::Idle => None,
            Self::Dragging(session) => Some(session),
        }
    }
}
