//! Shell configuration
//!
//! Loaded from JSON supplied by the host page. Every field is optional;
//! missing fields take the defaults below.

use serde::{Deserialize, Serialize};

use crate::error::{DesktopError, DesktopResult};
use crate::math::Size;
use crate::transition::EXPAND_DURATION_MS;
use crate::window::FocusPolicy;

/// Delay between clicking the search bar and the chat window opening (ms)
pub const DEFAULT_SEARCH_OPEN_DELAY_MS: f64 = 200.0;

/// Viewport assumed until the renderer reports its real size
pub const DEFAULT_VIEWPORT: Size = Size::new(1920.0, 1080.0);

/// Configuration for a shell session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellConfig {
    /// How focus requests for windows that are not open are handled
    #[serde(default)]
    pub focus_policy: FocusPolicy,
    /// Delay before a search activation opens the chat window (default: 200)
    #[serde(default = "default_search_open_delay_ms")]
    pub search_open_delay_ms: f64,
    /// Duration of the search-to-window expand transition (default: 500)
    #[serde(default = "default_expand_duration_ms")]
    pub expand_duration_ms: f32,
    /// Initial viewport size
    #[serde(default = "default_viewport")]
    pub viewport: Size,
}

fn default_search_open_delay_ms() -> f64 {
    DEFAULT_SEARCH_OPEN_DELAY_MS
}
fn default_expand_duration_ms() -> f32 {
    EXPAND_DURATION_MS
}
fn default_viewport() -> Size {
    DEFAULT_VIEWPORT
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            focus_policy: FocusPolicy::default(),
            search_open_delay_ms: DEFAULT_SEARCH_OPEN_DELAY_MS,
            expand_duration_ms: EXPAND_DURATION_MS,
            viewport: DEFAULT_VIEWPORT,
        }
    }
}

impl ShellConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        let config: ShellConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that all values are usable
    pub fn validate(&self) -> DesktopResult<()> {
        if !self.viewport.is_positive() {
            return Err(DesktopError::InvalidConfig {
                field: "viewport",
                reason: "width and height must be positive",
            });
        }
        if !self.search_open_delay_ms.is_finite() || self.search_open_delay_ms < 0.0 {
            return Err(DesktopError::InvalidConfig {
                field: "searchOpenDelayMs",
                reason: "must be a non-negative number",
            });
        }
        if !self.expand_duration_ms.is_finite() || self.expand_duration_ms < 0.0 {
            return Err(DesktopError::InvalidConfig {
                field: "expandDurationMs",
                reason: "must be a non-negative number",
            });
        }
        Ok(())
    }
}
