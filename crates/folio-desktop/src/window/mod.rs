//! Window management module
//!
//! Provides the open/close/focus/toggle state machine and the catalog of
//! windows the shell knows about.

mod kind;
mod manager;

pub use kind::WindowKind;
pub use manager::{FocusPolicy, ToggleOutcome, WindowManager};

// Re-export WindowId from crate types module for convenience
pub use crate::types::WindowId;
