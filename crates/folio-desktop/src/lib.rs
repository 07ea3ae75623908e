//! Desktop Shell Core for Folio
//!
//! This crate provides the state behind the desktop-styled portfolio shell:
//! - Window management (open, close, focus, toggle, stacking order)
//! - The catalog of known windows (about, projects, skills, ...)
//! - Window chrome (minimize, fullscreen) and menu bar dropdowns
//! - The search bar that opens the chat window
//! - The search-to-window expand transition
//! - A serializable snapshot for the renderer
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`window`]: Window manager state machine and window catalog
//! - [`math`]: Geometry types (`Vec2`, `Rect`, `Size`)
//! - [`transition`]: Easing and the expand transition strategy
//! - [`search`]: Search bar activation and placement
//! - [`shell`]: [`ShellSession`], the per-session owner of all UI state
//! - [`snapshot`]: Read model handed to the renderer
//!
//! ## Example
//!
//! ```rust
//! use folio_desktop::{ShellConfig, ShellSession, WindowKind};
//!
//! let mut shell = ShellSession::new(ShellConfig::default());
//! shell.open_window(WindowKind::About);
//! shell.open_window(WindowKind::Projects);
//! shell.close_window("projects");
//!
//! assert_eq!(shell.focused().map(|id| id.as_str()), Some("about"));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without a browser
//! 2. **Time Abstraction**: Animations take the current time as a parameter
//! 3. **Total Operations**: Window operations never fail; unknown ids are no-ops

pub mod config;
pub mod error;
pub mod math;
pub mod search;
pub mod shell;
pub mod snapshot;
pub mod transition;
pub mod types;
pub mod window;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use config::ShellConfig;
pub use error::{DesktopError, DesktopResult};
pub use math::{Rect, Size, Vec2};
pub use search::{SearchBar, SearchPlacement};
pub use shell::{ShellAction, ShellSession};
pub use snapshot::{ShellSnapshot, WindowView};
pub use transition::{ExpandAnimation, ExpandFrame, ExpandFrames, ExpandStrategy, NoExpand, SearchBarZoom};
pub use types::WindowId;
pub use window::{FocusPolicy, ToggleOutcome, WindowKind, WindowManager};

/// Duration of the search-to-window expand transition in milliseconds
pub use transition::EXPAND_DURATION_MS;
