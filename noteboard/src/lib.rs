//! Draggable note board engine.
//!
//! Turns raw pointer input on a board element into clamped, board-relative
//! note positions and a normalized drop location. The engine knows nothing
//! about what a note means; the host page supplies the board, a selector that
//! identifies notes, and a drop handler.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Host-independent [`engine::EngineCore`] and the DOM-backed [`engine::Engine`] |
//! | [`input`] | Mouse buttons and the idle/dragging state machine |
//! | [`board`] | The [`board::Board`] trait the engine queries |
//! | [`geom`] | Points, sizes, rectangles, clamping and normalization |
//! | [`dom`] | `Board` over a DOM element, and applying actions to note styles |
//! | [`attach`] | Listener registration for a board element |
//! | [`consts`] | Default selector, class names, stacking and size fallbacks |

pub mod attach;
pub mod board;
pub mod consts;
pub mod dom;
pub mod engine;
pub mod geom;
pub mod input;

pub use attach::{DragOptions, DropHandler, attach};
