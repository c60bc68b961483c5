//! The collaborator interface the drag engine needs from its host.

use crate::geom::{Rect, Size};

/// A rectangular surface holding draggable notes.
///
/// Notes may live anywhere in the board's subtree. The engine only reads
/// through this trait; all writes come back to the host as
/// [`Action`](crate::engine::Action)s.
pub trait Board {
    /// Whatever a pointer event reports as its target (an element, a node id).
    type Target;
    /// Handle to a note. Cloned into each action that concerns it.
    type Note: Clone;

    /// Current bounding rectangle of the board in viewport coordinates.
    fn rect(&self) -> Rect;

    /// The nearest note at or above `target`, stopping at the board.
    ///
    /// Text and icons nested in a note resolve to that note.
    fn closest_note(&self, target: &Self::Target) -> Option<Self::Note>;

    /// Current bounding rectangle of `note` in viewport coordinates.
    fn note_rect(&self, note: &Self::Note) -> Rect;

    /// Rendered size of `note` right now. Zero means "not laid out".
    fn note_size(&self, note: &Self::Note) -> Size;

    /// Whether `note` is in a transitional removing state.
    fn is_removing(&self, note: &Self::Note) -> bool;
}
