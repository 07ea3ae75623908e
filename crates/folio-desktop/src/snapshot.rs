//! Read model handed to the renderer
//!
//! A snapshot is a plain, serializable copy of everything the renderer
//! needs to draw one frame of the shell. It is never written to storage.

use serde::{Deserialize, Serialize};

use crate::error::DesktopResult;
use crate::search::SearchPlacement;
use crate::types::WindowId;

/// One open window as the renderer should mount it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowView {
    pub id: WindowId,
    /// Title bar text (the id itself for windows outside the catalog)
    pub title: String,
    pub focused: bool,
    /// Stacking index, 0 = bottom
    pub z_index: usize,
    /// Search query the content panel starts from
    pub initial_query: String,
    /// True while the window is expanding out of the search bar
    pub expanding: bool,
    /// Hidden by its minimize control but still open
    pub minimized: bool,
    pub fullscreen: bool,
}

/// Full shell state for one frame
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellSnapshot {
    pub open_windows: Vec<WindowId>,
    pub focused: Option<WindowId>,
    pub notifications_open: bool,
    /// Menu bar dropdown that is showing
    pub active_menu: Option<String>,
    pub search_placement: SearchPlacement,
    pub search_query: String,
    pub search_animating: bool,
    pub windows: Vec<WindowView>,
}

impl ShellSnapshot {
    /// Serialize for the JavaScript side
    pub fn to_json(&self) -> DesktopResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
