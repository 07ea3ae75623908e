//! Core geometry types for the desktop shell
//!
//! Screen-space positions and sizes exchanged with the renderer, used by
//! the search-to-window expand transition.

mod rect;
mod size;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use vec2::Vec2;
