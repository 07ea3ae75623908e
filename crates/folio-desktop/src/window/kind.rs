//! Catalog of the windows the portfolio shell ships with
//!
//! The window manager itself is id-agnostic; this catalog maps the known
//! ids to titles and dock order for the renderer.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DesktopError;
use crate::types::WindowId;

/// Windows the portfolio shell knows how to render
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowKind {
    About,
    Projects,
    Skills,
    Contact,
    Resume,
    /// Chat assistant, opened from the search bar or the dock chat button
    Chat,
}

impl WindowKind {
    /// Get all window kinds
    pub fn all() -> &'static [WindowKind] {
        &[
            WindowKind::About,
            WindowKind::Projects,
            WindowKind::Skills,
            WindowKind::Contact,
            WindowKind::Resume,
            WindowKind::Chat,
        ]
    }

    /// Kinds launched from the dock, in dock order
    ///
    /// Chat has its own toggle button and is not listed here.
    pub fn dock_items() -> &'static [WindowKind] {
        &[
            WindowKind::About,
            WindowKind::Projects,
            WindowKind::Skills,
            WindowKind::Contact,
            WindowKind::Resume,
        ]
    }

    /// Get the string ID for this window
    pub fn id(&self) -> &'static str {
        match self {
            WindowKind::About => "about",
            WindowKind::Projects => "projects",
            WindowKind::Skills => "skills",
            WindowKind::Contact => "contact",
            WindowKind::Resume => "resume",
            WindowKind::Chat => "chat",
        }
    }

    /// Title shown in the window's title bar
    pub fn title(&self) -> &'static str {
        match self {
            WindowKind::About => "About Me",
            WindowKind::Projects => "Projects",
            WindowKind::Skills => "Skills & Technologies",
            WindowKind::Contact => "Contact",
            WindowKind::Resume => "Resume",
            WindowKind::Chat => "AI Assistant",
        }
    }

    /// Parse from string ID (case-insensitive)
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.id().eq_ignore_ascii_case(id))
    }

    /// Identifier to hand to the window manager
    pub fn window_id(&self) -> WindowId {
        WindowId::from(self.id())
    }
}

impl FromStr for WindowKind {
    type Err = DesktopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| DesktopError::UnknownWindow(s.to_string()))
    }
}

impl From<WindowKind> for WindowId {
    fn from(kind: WindowKind) -> Self {
        kind.window_id()
    }
}
