//! Shared constants for the note board engine.

use crate::geom::Size;

// ── Selectors and classes ───────────────────────────────────────

/// Selector used to find draggable notes when the host supplies none.
pub const DEFAULT_NOTE_SELECTOR: &str = ".note";

/// Class present on a note for the duration of a drag.
pub const DRAGGING_CLASS: &str = "dragging";

/// Class marking a note that is mid-removal; such notes cannot be picked up.
pub const REMOVING_CLASS: &str = "removing";

// ── Stacking ────────────────────────────────────────────────────

/// Stacking order below the first raised note. Each pick-up increments it.
pub const BASE_Z_INDEX: i64 = 10;

// ── Sizing ──────────────────────────────────────────────────────

/// Size assumed for a note whose rendered size reads as zero (not laid out yet).
pub const FALLBACK_NOTE_SIZE: Size = Size { width: 140.0, height: 60.0 };
