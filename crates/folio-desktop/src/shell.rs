//! Shell session
//!
//! [`ShellSession`] is the single owner of the shell's UI state for one
//! page session. It is created when the shell starts, handed by reference
//! to the renderer and input handlers, and dropped when the session ends.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 ShellSession                 │
//! │  ┌───────────────┐  ┌─────────────────────┐  │
//! │  │ WindowManager │  │ SearchBar           │  │
//! │  │ (open, focus) │  │ (query, activation) │  │
//! │  └───────────────┘  └─────────────────────┘  │
//! │  ┌───────────────┐  ┌─────────────────────┐  │
//! │  │ ExpandStrategy│  │ notification center │  │
//! │  │ + animation   │  │ (open flag)         │  │
//! │  └───────────────┘  └─────────────────────┘  │
//! │  ┌───────────────┐  ┌─────────────────────┐  │
//! │  │ window chrome │  │ menu bar            │  │
//! │  │ (min, full)   │  │ (active dropdown)   │  │
//! │  └───────────────┘  └─────────────────────┘  │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! All operations are synchronous and run on the UI thread. Time is passed
//! in explicitly so animations can be tested without a clock.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::ShellConfig;
use crate::math::{Rect, Size};
use crate::search::{SearchBar, SearchPlacement};
use crate::snapshot::{ShellSnapshot, WindowView};
use crate::transition::{ExpandAnimation, ExpandFrame, ExpandStrategy, SearchBarZoom};
use crate::types::WindowId;
use crate::window::{ToggleOutcome, WindowKind, WindowManager};

/// Commands issued by the dock, menu bar, search bar and window controls
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ShellAction {
    /// Open (or refocus) a window
    Open { id: WindowId },
    /// Close a window from its close control
    Close { id: WindowId },
    /// Focus a window that was clicked
    Focus { id: WindowId },
    /// Open a closed window or close an open one
    Toggle { id: WindowId },
    /// Yellow title-bar button
    Minimize { id: WindowId },
    /// Green title-bar button
    ToggleFullscreen { id: WindowId },
    /// Dock chat button
    ToggleChat,
    /// Menu bar bell
    ToggleNotifications,
    /// Notification center close button
    CloseNotifications,
    /// Menu bar title clicked
    ToggleMenu { menu: String },
    /// Menu item chosen or click outside the open menu
    CloseMenu,
    /// Search input changed
    SetSearchQuery { query: String },
    /// Search bar clicked; `trigger` is its on-screen rect
    ActivateSearch { trigger: Rect },
    /// Search form submitted
    SubmitSearch { trigger: Rect },
    /// Renderer viewport changed
    Resize { viewport: Size },
}

/// UI state of one shell session
pub struct ShellSession {
    config: ShellConfig,
    windows: WindowManager,
    search: SearchBar,
    strategy: Box<dyn ExpandStrategy>,
    expand: Option<ExpandAnimation>,
    minimized: HashSet<WindowId>,
    fullscreen: HashSet<WindowId>,
    notifications_open: bool,
    active_menu: Option<String>,
    viewport: Size,
}

impl Default for ShellSession {
    fn default() -> Self {
        Self::new(ShellConfig::default())
    }
}

impl ShellSession {
    /// Start a session using the search-bar zoom transition
    pub fn new(config: ShellConfig) -> Self {
        let strategy = SearchBarZoom {
            duration_ms: config.expand_duration_ms,
        };
        Self::with_strategy(config, strategy)
    }

    /// Start a session with a custom expand transition
    pub fn with_strategy(config: ShellConfig, strategy: impl ExpandStrategy + 'static) -> Self {
        tracing::debug!(policy = ?config.focus_policy, "starting shell session");
        Self {
            windows: WindowManager::with_policy(config.focus_policy),
            search: SearchBar::new(),
            strategy: Box::new(strategy),
            expand: None,
            minimized: HashSet::new(),
            fullscreen: HashSet::new(),
            notifications_open: false,
            active_menu: None,
            viewport: config.viewport,
            config,
        }
    }

    // =========================================================================
    // Windows
    // =========================================================================

    /// Window manager (read-only; mutate through the session)
    pub fn windows(&self) -> &WindowManager {
        &self.windows
    }

    /// Open windows, oldest first
    pub fn open_windows(&self) -> &[WindowId] {
        self.windows.open_windows()
    }

    /// Focused window, if any
    pub fn focused(&self) -> Option<&WindowId> {
        self.windows.focused()
    }

    /// Open a window or bring focus to it
    ///
    /// Opening a minimized window restores it.
    pub fn open_window(&mut self, id: impl Into<WindowId>) {
        let id = id.into();
        if self.minimized.remove(id.as_str()) {
            tracing::debug!(window = %id, "restored minimized window");
        }
        self.windows.open(id);
    }

    /// Close a window
    pub fn close_window(&mut self, id: &str) {
        self.windows.close(id);
        self.forget_window(id);
    }

    /// Focus a window; see [`WindowManager::focus`]
    pub fn focus_window(&mut self, id: impl Into<WindowId>) -> bool {
        self.windows.focus(id)
    }

    /// Toggle a window open or closed
    pub fn toggle_window(&mut self, id: impl Into<WindowId>) -> ToggleOutcome {
        let id = id.into();
        let outcome = self.windows.toggle(id.clone());
        if outcome == ToggleOutcome::Closed {
            self.forget_window(id.as_str());
        }
        outcome
    }

    /// Drop per-window state of a window that is no longer open
    fn forget_window(&mut self, id: &str) {
        if id == WindowKind::Chat.id() && self.expand.take().is_some() {
            tracing::trace!("chat closed mid-expand, dropping animation");
        }
        self.minimized.remove(id);
        self.fullscreen.remove(id);
    }

    /// Dock chat button
    pub fn toggle_chat(&mut self) -> ToggleOutcome {
        self.toggle_window(WindowKind::Chat)
    }

    /// Check if the chat window is open
    pub fn is_chat_open(&self) -> bool {
        self.windows.is_open(WindowKind::Chat.id())
    }

    // =========================================================================
    // Window chrome
    // =========================================================================

    /// Hide an open window without closing it
    ///
    /// The window keeps its place in the open sequence and focus is left
    /// alone. Returns false when the window is not open.
    pub fn minimize_window(&mut self, id: &str) -> bool {
        if !self.windows.is_open(id) {
            return false;
        }
        if self.minimized.insert(WindowId::from(id)) {
            tracing::debug!(window = id, "minimized window");
        }
        true
    }

    /// Check if an open window is minimized
    pub fn is_minimized(&self, id: &str) -> bool {
        self.minimized.contains(id)
    }

    /// Switch an open window between its normal frame and fullscreen
    ///
    /// Returns whether the window is fullscreen afterwards.
    pub fn toggle_fullscreen(&mut self, id: &str) -> bool {
        if !self.windows.is_open(id) {
            return false;
        }
        let fullscreen = if self.fullscreen.remove(id) {
            false
        } else {
            self.fullscreen.insert(WindowId::from(id));
            true
        };
        tracing::debug!(window = id, fullscreen, "toggled fullscreen");
        fullscreen
    }

    /// Check if an open window is fullscreen
    pub fn is_fullscreen(&self, id: &str) -> bool {
        self.fullscreen.contains(id)
    }

    // =========================================================================
    // Menu bar
    // =========================================================================

    /// Menu whose dropdown is showing, if any
    pub fn active_menu(&self) -> Option<&str> {
        self.active_menu.as_deref()
    }

    /// Open a menu's dropdown, or close it if it is already showing
    ///
    /// Opening one menu closes any other. Returns whether `menu` is showing.
    pub fn toggle_menu(&mut self, menu: impl Into<String>) -> bool {
        let menu = menu.into();
        if self.active_menu.as_deref() == Some(menu.as_str()) {
            self.active_menu = None;
            false
        } else {
            tracing::debug!(%menu, "opened menu");
            self.active_menu = Some(menu);
            true
        }
    }

    /// Close the open dropdown
    pub fn close_menu(&mut self) {
        self.active_menu = None;
    }

    // =========================================================================
    // Notification center
    // =========================================================================

    /// Check if the notification center is showing
    pub fn notifications_open(&self) -> bool {
        self.notifications_open
    }

    /// Show or hide the notification center
    pub fn toggle_notifications(&mut self) -> bool {
        self.notifications_open = !self.notifications_open;
        tracing::debug!(open = self.notifications_open, "toggled notification center");
        self.notifications_open
    }

    /// Hide the notification center
    pub fn close_notifications(&mut self) {
        self.notifications_open = false;
    }

    // =========================================================================
    // Search bar
    // =========================================================================

    /// Search bar state
    pub fn search(&self) -> &SearchBar {
        &self.search
    }

    /// Where the search bar should be drawn
    pub fn search_placement(&self) -> SearchPlacement {
        SearchPlacement::for_windows(self.windows.open_windows())
    }

    /// Replace the search query
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search.set_query(query);
    }

    /// Search bar clicked
    ///
    /// Does nothing when the chat window is already open. Otherwise the
    /// chat window opens on the first [`tick`](Self::tick) after the
    /// configured delay. Returns whether an activation started.
    pub fn activate_search(&mut self, now: f64, trigger: Rect) -> bool {
        if self.is_chat_open() {
            return false;
        }
        let started = self.search.activate(now, trigger);
        if started {
            tracing::debug!(now, "search activated");
        }
        started
    }

    /// Search form submitted; ignored when the query is blank
    pub fn submit_search(&mut self, now: f64, trigger: Rect) -> bool {
        if self.is_chat_open() {
            return false;
        }
        self.search.submit(now, trigger)
    }

    // =========================================================================
    // Frame updates
    // =========================================================================

    /// Advance time-driven state
    ///
    /// Opens the chat window once a search activation has waited out its
    /// delay and retires finished expand animations. Returns whether
    /// anything changed.
    pub fn tick(&mut self, now: f64) -> bool {
        let mut changed = false;

        if let Some(trigger) = self.search.poll(now, self.config.search_open_delay_ms) {
            let newly_opened = !self.is_chat_open();
            self.windows.open(WindowKind::Chat);
            if newly_opened {
                self.expand = self
                    .strategy
                    .frames(trigger, self.viewport)
                    .map(|frames| ExpandAnimation::new(frames, now));
            }
            tracing::debug!(expanding = self.expand.is_some(), "search opened chat");
            changed = true;
        }

        if self.expand.as_ref().is_some_and(|a| a.is_complete(now)) {
            self.expand = None;
            tracing::trace!("expand animation finished");
            changed = true;
        }

        changed
    }

    /// Current transform of the expanding chat window, if any
    pub fn expand_frame(&self, now: f64) -> Option<ExpandFrame> {
        self.expand.as_ref().map(|a| a.current(now))
    }

    /// Viewport size used for transitions
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Update the viewport size; non-positive sizes are ignored
    pub fn set_viewport(&mut self, size: Size) {
        if size.is_positive() {
            self.viewport = size;
        } else {
            tracing::debug!(?size, "ignoring degenerate viewport");
        }
    }

    /// Session configuration
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    // =========================================================================
    // Dispatch and rendering
    // =========================================================================

    /// Apply a command from one of the shell's controls
    pub fn dispatch(&mut self, action: ShellAction, now: f64) {
        tracing::trace!(?action, "dispatch");
        match action {
            ShellAction::Open { id } => self.open_window(id),
            ShellAction::Close { id } => self.close_window(id.as_str()),
            ShellAction::Focus { id } => {
                self.focus_window(id);
            }
            ShellAction::Toggle { id } => {
                self.toggle_window(id);
            }
            ShellAction::Minimize { id } => {
                self.minimize_window(id.as_str());
            }
            ShellAction::ToggleFullscreen { id } => {
                self.toggle_fullscreen(id.as_str());
            }
            ShellAction::ToggleChat => {
                self.toggle_chat();
            }
            ShellAction::ToggleNotifications => {
                self.toggle_notifications();
            }
            ShellAction::CloseNotifications => self.close_notifications(),
            ShellAction::ToggleMenu { menu } => {
                self.toggle_menu(menu);
            }
            ShellAction::CloseMenu => self.close_menu(),
            ShellAction::SetSearchQuery { query } => self.set_search_query(query),
            ShellAction::ActivateSearch { trigger } => {
                self.activate_search(now, trigger);
            }
            ShellAction::SubmitSearch { trigger } => {
                self.submit_search(now, trigger);
            }
            ShellAction::Resize { viewport } => self.set_viewport(viewport),
        }
    }

    /// One view per open window, in open order
    pub fn window_views(&self) -> Vec<WindowView> {
        self.windows
            .open_windows()
            .iter()
            .enumerate()
            .map(|(index, id)| WindowView {
                id: id.clone(),
                title: WindowKind::from_id(id.as_str())
                    .map(|kind| kind.title().to_string())
                    .unwrap_or_else(|| id.to_string()),
                focused: self.windows.is_focused(id.as_str()),
                z_index: self.windows.z_index(id.as_str()).unwrap_or(index),
                initial_query: self.search.query().to_string(),
                expanding: id == WindowKind::Chat.id() && self.expand.is_some(),
                minimized: self.minimized.contains(id),
                fullscreen: self.fullscreen.contains(id),
            })
            .collect()
    }

    /// Copy of the state the renderer needs
    pub fn snapshot(&self) -> ShellSnapshot {
        ShellSnapshot {
            open_windows: self.windows.open_windows().to_vec(),
            focused: self.windows.focused().cloned(),
            notifications_open: self.notifications_open,
            active_menu: self.active_menu.clone(),
            search_placement: self.search_placement(),
            search_query: self.search.query().to_string(),
            search_animating: self.search.is_animating(),
            windows: self.window_views(),
        }
    }
}
