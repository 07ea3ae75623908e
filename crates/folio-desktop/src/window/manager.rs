//! Window manager: open set, focus and stacking order

use serde::{Deserialize, Serialize};

use crate::types::WindowId;

/// How [`WindowManager::focus`] treats ids that are not open
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusPolicy {
    /// Focus is set unconditionally, even for windows that are not open
    #[default]
    Permissive,
    /// Focusing a window that is not open is a no-op
    Strict,
}

/// Result of [`WindowManager::toggle`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The window was closed and has been opened
    Opened,
    /// The window was open and has been closed
    Closed,
}

/// Window manager for a single shell session
///
/// Holds the ordered, duplicate-free sequence of open windows (oldest
/// first, most recently opened last) and the focused window.
#[derive(Clone, Debug, Default)]
pub struct WindowManager {
    /// Open windows in open order
    open: Vec<WindowId>,
    /// Focused window
    focused: Option<WindowId>,
    /// Focus validation policy
    policy: FocusPolicy,
}

impl WindowManager {
    /// Create an empty window manager with the permissive focus policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty window manager with the given focus policy
    pub fn with_policy(policy: FocusPolicy) -> Self {
        Self {
            open: Vec::new(),
            focused: None,
            policy,
        }
    }

    /// Focus policy in effect
    pub fn policy(&self) -> FocusPolicy {
        self.policy
    }

    /// Open a window, or focus it if it is already open
    ///
    /// A window that is already open keeps its place in the sequence.
    pub fn open(&mut self, id: impl Into<WindowId>) {
        let id = id.into();
        if !self.is_open(id.as_str()) {
            tracing::debug!(window = %id, "opening window");
            self.open.push(id.clone());
        }
        self.focused = Some(id);
    }

    /// Close a window
    ///
    /// If `id` had focus, focus moves to the most recently opened window
    /// still open (by sequence order), or to none. This also applies to a
    /// focused id that was never opened.
    pub fn close(&mut self, id: &str) {
        if let Some(index) = self.position(id) {
            self.open.remove(index);
            tracing::debug!(window = id, remaining = self.open.len(), "closed window");
        }

        if self.is_focused(id) {
            self.focused = self.open.last().cloned();
            tracing::debug!(focused = ?self.focused, "focus moved after close");
        }
    }

    /// Focus a window
    ///
    /// Under [`FocusPolicy::Permissive`] focus is set even if the window is
    /// not open. Under [`FocusPolicy::Strict`] such calls are ignored.
    /// Returns whether `id` is focused afterwards.
    pub fn focus(&mut self, id: impl Into<WindowId>) -> bool {
        let id = id.into();
        if self.policy == FocusPolicy::Strict && !self.is_open(id.as_str()) {
            tracing::debug!(window = %id, "ignoring focus of window that is not open");
            return false;
        }
        self.focused = Some(id);
        true
    }

    /// Close the window if it is open, otherwise open it
    pub fn toggle(&mut self, id: impl Into<WindowId>) -> ToggleOutcome {
        let id = id.into();
        if self.is_open(id.as_str()) {
            self.close(id.as_str());
            ToggleOutcome::Closed
        } else {
            self.open(id);
            ToggleOutcome::Opened
        }
    }

    /// Open windows, oldest first
    pub fn open_windows(&self) -> &[WindowId] {
        &self.open
    }

    /// Focused window, if any
    pub fn focused(&self) -> Option<&WindowId> {
        self.focused.as_ref()
    }

    /// Check if a window is open
    pub fn is_open(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Check if a window has focus
    pub fn is_focused(&self, id: &str) -> bool {
        self.focused.as_ref().is_some_and(|f| f == id)
    }

    /// Number of open windows
    pub fn len(&self) -> usize {
        self.open.len()
    }

    /// True when no window is open
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Open windows in stacking order, bottom first
    ///
    /// Sequence order, except the focused window is drawn last.
    pub fn windows_by_z(&self) -> Vec<&WindowId> {
        let mut stack: Vec<&WindowId> = self
            .open
            .iter()
            .filter(|id| Some(*id) != self.focused.as_ref())
            .collect();
        if let Some(focused) = self.focused.as_ref().filter(|f| self.is_open(f.as_str())) {
            stack.push(focused);
        }
        stack
    }

    /// Stacking index of an open window (0 = bottom)
    pub fn z_index(&self, id: &str) -> Option<usize> {
        self.windows_by_z().iter().position(|w| *w == id)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.open.iter().position(|w| w == id)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Clone, Debug)]
    enum Op {
        Open(&'static str),
        Close(&'static str),
        Focus(&'static str),
        Toggle(&'static str),
    }

    const IDS: &[&str] = &["about", "projects", "skills", "contact", "resume", "chat"];

    fn op_strategy() -> impl Strategy<Value = Op> {
        let id = prop::sample::select(IDS);
        prop_oneof![
            id.clone().prop_map(Op::Open),
            id.clone().prop_map(Op::Close),
            id.clone().prop_map(Op::Focus),
            id.prop_map(Op::Toggle),
        ]
    }

    fn apply(wm: &mut WindowManager, op: &Op) {
        match op {
            Op::Open(id) => wm.open(*id),
            Op::Close(id) => wm.close(id),
            Op::Focus(id) => {
                wm.focus(*id);
            }
            Op::Toggle(id) => {
                wm.toggle(*id);
            }
        }
    }

    fn state(wm: &WindowManager) -> (Vec<WindowId>, Option<WindowId>) {
        (wm.open_windows().to_vec(), wm.focused().cloned())
    }

    proptest! {
        /// The open sequence never holds the same window twice
        #[test]
        fn open_windows_are_unique(ops in prop::collection::vec(op_strategy(), 0..64)) {
            let mut wm = WindowManager::new();
            for op in &ops {
                apply(&mut wm, op);
                let mut seen = wm.open_windows().to_vec();
                seen.sort();
                seen.dedup();
                prop_assert_eq!(seen.len(), wm.len());
            }
        }

        /// Under the strict policy focus always names an open window
        #[test]
        fn strict_focus_is_always_open(ops in prop::collection::vec(op_strategy(), 0..64)) {
            let mut wm = WindowManager::with_policy(FocusPolicy::Strict);
            for op in &ops {
                apply(&mut wm, op);
                if let Some(focused) = wm.focused() {
                    prop_assert!(wm.is_open(focused.as_str()));
                }
                prop_assert_eq!(wm.focused().is_none(), wm.is_empty());
            }
        }

        /// After closing a window it is neither open nor focused
        #[test]
        fn closed_window_is_not_focused(
            ops in prop::collection::vec(op_strategy(), 0..32),
            id in prop::sample::select(IDS),
        ) {
            let mut wm = WindowManager::new();
            for op in &ops {
                apply(&mut wm, op);
            }
            wm.close(id);
            prop_assert!(!wm.is_open(id));
            prop_assert!(!wm.is_focused(id));
        }

        /// Closing twice leaves the same state as closing once
        #[test]
        fn close_is_idempotent(
            ops in prop::collection::vec(op_strategy(), 0..32),
            id in prop::sample::select(IDS),
        ) {
            let mut wm = WindowManager::new();
            for op in &ops {
                apply(&mut wm, op);
            }
            wm.close(id);
            let once = state(&wm);
            wm.close(id);
            prop_assert_eq!(state(&wm), once);
        }

        /// Toggle dispatches to open or close depending on membership
        #[test]
        fn toggle_matches_open_or_close(
            ops in prop::collection::vec(op_strategy(), 0..32),
            id in prop::sample::select(IDS),
        ) {
            let mut wm = WindowManager::new();
            for op in &ops {
                apply(&mut wm, op);
            }
            let mut expected = wm.clone();
            if expected.is_open(id) {
                expected.close(id);
            } else {
                expected.open(id);
            }
            wm.toggle(id);
            prop_assert_eq!(state(&wm), state(&expected));
        }

        /// Opening an open window only moves focus
        #[test]
        fn reopen_only_changes_focus(
            ops in prop::collection::vec(op_strategy(), 0..32),
            id in prop::sample::select(IDS),
        ) {
            let mut wm = WindowManager::new();
            for op in &ops {
                apply(&mut wm, op);
            }
            wm.open(id);
            let before = wm.open_windows().to_vec();
            wm.open(id);
            prop_assert_eq!(wm.open_windows(), before.as_slice());
            prop_assert!(wm.is_focused(id));
        }
    }
}
