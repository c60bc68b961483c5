//! Board-space geometry: points, sizes, rectangles, and the clamping rules
//! that keep a note inside its board.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

/// A point in viewport (client) or board-relative space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rendered width and height of an element, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Replace a zero (unrendered) dimension with the matching fallback.
    #[must_use]
    pub fn or_fallback(self, fallback: Size) -> Self {
        Self {
            width: if self.width > 0.0 { self.width } else { fallback.width },
            height: if self.height > 0.0 { self.height } else { fallback.height },
        }
    }
}

/// An axis-aligned rectangle in viewport coordinates, as reported by
/// `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Whether the rectangle has room to normalize against.
    #[must_use]
    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Express a viewport point relative to this rectangle's top-left corner.
    #[must_use]
    pub fn relative(&self, p: Point) -> Point {
        Point::new(p.x - self.left, p.y - self.top)
    }
}

/// Clamp one axis: `max(0, min(candidate, board - note))`.
///
/// When the note is larger than the board the upper bound is negative and
/// the result pins to zero.
#[must_use]
pub fn clamp_axis(candidate: f64, board: f64, note: f64) -> f64 {
    candidate.min(board - note).max(0.0)
}

/// Clamp a candidate top-left position so the note's box stays inside the board.
#[must_use]
pub fn clamp_position(candidate: Point, board: Size, note: Size) -> Point {
    Point::new(
        clamp_axis(candidate.x, board.width, note.width),
        clamp_axis(candidate.y, board.height, note.height),
    )
}

/// Normalize a note's board-relative center against the board size.
///
/// Returns `None` when the board has no area. The result is clamped into
/// `[0, 1]` so an oversized note still reports an in-range location.
#[must_use]
pub fn normalized_center(position: Point, note: Size, board: Rect) -> Option<Point> {
    if !board.has_area() {
        return None;
    }
    let cx = position.x + note.width / 2.0;
    let cy = position.y + note.height / 2.0;
    Some(Point::new(
        (cx / board.width).clamp(0.0, 1.0),
        (cy / board.height).clamp(0.0, 1.0),
    ))
}
