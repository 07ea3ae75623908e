//! Search-to-window expand transition
//!
//! When the chat window is opened from the search bar it appears to grow
//! out of the bar: it starts shrunk and transparent over the bar's center
//! and settles at its normal place. This is purely decorative and never
//! feeds back into window-manager state.

use serde::{Deserialize, Serialize};

use super::easing::{ease_out_back, ease_out_cubic};
use crate::math::{Rect, Size, Vec2};

/// Duration of the expand transition in milliseconds
pub const EXPAND_DURATION_MS: f32 = 500.0;

/// Scale the window starts at when expanding from the search bar
pub const EXPAND_START_SCALE: f32 = 0.1;

/// Transform applied to a window container
///
/// `translate` is relative to the container's resting position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExpandFrame {
    pub translate: Vec2,
    pub scale: f32,
    pub opacity: f32,
}

impl ExpandFrame {
    /// Resting state: no offset, full size, fully opaque
    pub const IDENTITY: ExpandFrame = ExpandFrame {
        translate: Vec2::ZERO,
        scale: 1.0,
        opacity: 1.0,
    };
}

/// Start and end frames of an expand transition
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandFrames {
    pub initial: ExpandFrame,
    pub target: ExpandFrame,
    pub duration_ms: f32,
}

/// Presentation strategy for windows that open from a trigger element
///
/// Hosts without live element geometry can plug in [`NoExpand`].
pub trait ExpandStrategy {
    /// Compute the transition from `trigger` (screen rect of the element
    /// that opened the window) to a window centered in `viewport`.
    ///
    /// Returns `None` when no transition should play.
    fn frames(&self, trigger: Rect, viewport: Size) -> Option<ExpandFrames>;
}

/// Zoom out of the search bar into the centered window
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchBarZoom {
    pub duration_ms: f32,
}

impl Default for SearchBarZoom {
    fn default() -> Self {
        Self {
            duration_ms: EXPAND_DURATION_MS,
        }
    }
}

impl ExpandStrategy for SearchBarZoom {
    fn frames(&self, trigger: Rect, viewport: Size) -> Option<ExpandFrames> {
        if !trigger.size().is_positive() || !viewport.is_positive() {
            return None;
        }

        let offset = trigger.center() - viewport.center();
        Some(ExpandFrames {
            initial: ExpandFrame {
                translate: offset,
                scale: EXPAND_START_SCALE,
                opacity: 0.0,
            },
            target: ExpandFrame::IDENTITY,
            duration_ms: self.duration_ms,
        })
    }
}

/// Never animate; the renderer uses its default open effect
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoExpand;

impl ExpandStrategy for NoExpand {
    fn frames(&self, _trigger: Rect, _viewport: Size) -> Option<ExpandFrames> {
        None
    }
}

/// A running expand transition
#[derive(Clone, Debug, PartialEq)]
pub struct ExpandAnimation {
    /// Frames being interpolated
    pub frames: ExpandFrames,
    /// Start time (ms)
    pub start_time: f64,
}

impl ExpandAnimation {
    /// Start an animation at `now`
    pub fn new(frames: ExpandFrames, now: f64) -> Self {
        Self {
            frames,
            start_time: now,
        }
    }

    /// Get progress (0.0 to 1.0)
    pub fn progress(&self, now: f64) -> f32 {
        if self.frames.duration_ms <= 0.0 {
            return 1.0;
        }
        let elapsed = (now - self.start_time) as f32;
        (elapsed / self.frames.duration_ms).clamp(0.0, 1.0)
    }

    /// Check if animation is complete
    pub fn is_complete(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }

    /// Get the interpolated frame at the current time
    pub fn current(&self, now: f64) -> ExpandFrame {
        let raw_t = self.progress(now);
        let from = self.frames.initial;
        let to = self.frames.target;

        let t = ease_out_back(raw_t);
        let fade = ease_out_cubic(raw_t);
        ExpandFrame {
            translate: from.translate.lerp(to.translate, t),
            scale: from.scale + (to.scale - from.scale) * t,
            opacity: (from.opacity + (to.opacity - from.opacity) * fade).clamp(0.0, 1.0),
        }
    }
}
