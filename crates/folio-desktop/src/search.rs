//! Search bar affordance
//!
//! The desktop shows a search bar that opens the chat window. Clicking it
//! (or submitting a query) starts a short activation delay during which
//! the bar plays its own press effect; the chat window opens once the
//! delay has elapsed. The typed query is handed to content panels as
//! their initial query.

use serde::{Deserialize, Serialize};

use crate::math::Rect;
use crate::types::WindowId;
use crate::window::WindowKind;

/// Where the renderer should draw the search bar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchPlacement {
    /// Large bar in the middle of an empty desktop
    Centered,
    /// Small bar pinned to the top while other windows are open
    Compact,
    /// Not drawn because the chat window is already open
    Hidden,
}

impl SearchPlacement {
    /// Placement for the given open window sequence
    pub fn for_windows(open: &[WindowId]) -> Self {
        if open.is_empty() {
            SearchPlacement::Centered
        } else if open.iter().any(|w| w == WindowKind::Chat.id()) {
            SearchPlacement::Hidden
        } else {
            SearchPlacement::Compact
        }
    }
}

/// Pending activation of the search bar
#[derive(Clone, Copy, Debug, PartialEq)]
struct PendingActivation {
    started_at: f64,
    trigger: Rect,
}

/// Search bar state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchBar {
    query: String,
    pending: Option<PendingActivation>,
}

impl SearchBar {
    /// Create an empty search bar
    pub fn new() -> Self {
        Self::default()
    }

    /// Current query text
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the query text
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// True while an activation is waiting to open the chat window
    pub fn is_animating(&self) -> bool {
        self.pending.is_some()
    }

    /// Start an activation unless one is already pending
    ///
    /// Returns whether a new activation was started.
    pub fn activate(&mut self, now: f64, trigger: Rect) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(PendingActivation {
            started_at: now,
            trigger,
        });
        true
    }

    /// Activate only when the query has non-whitespace content
    pub fn submit(&mut self, now: f64, trigger: Rect) -> bool {
        if self.query.trim().is_empty() {
            return false;
        }
        self.activate(now, trigger)
    }

    /// Finish a pending activation once `delay_ms` has elapsed
    ///
    /// Returns the trigger rect when the chat window should open now.
    pub fn poll(&mut self, now: f64, delay_ms: f64) -> Option<Rect> {
        let pending = self.pending?;
        if now - pending.started_at < delay_ms {
            return None;
        }
        self.pending = None;
        Some(pending.trigger)
    }
}
