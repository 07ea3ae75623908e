//! WASM bindings for the browser renderer
//!
//! The JavaScript side owns one [`FolioShell`] per page, forwards user
//! input to it and re-renders from [`FolioShell::snapshot`]. Time comes
//! from `Date.now()`.

use wasm_bindgen::prelude::*;

use crate::config::ShellConfig;
use crate::error::DesktopError;
use crate::math::{Rect, Size};
use crate::shell::{ShellAction, ShellSession};
use crate::window::ToggleOutcome;

fn to_js(err: DesktopError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn now() -> f64 {
    js_sys::Date::now()
}

/// Shell session exported to JavaScript
#[wasm_bindgen]
pub struct FolioShell {
    session: ShellSession,
}

#[wasm_bindgen]
impl FolioShell {
    /// Start a session with default configuration
    #[wasm_bindgen(constructor)]
    pub fn new() -> FolioShell {
        FolioShell {
            session: ShellSession::default(),
        }
    }

    /// Start a session from a JSON configuration
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: &str) -> Result<FolioShell, JsValue> {
        let config = ShellConfig::from_json(json).map_err(to_js)?;
        Ok(FolioShell {
            session: ShellSession::new(config),
        })
    }

    pub fn open(&mut self, id: &str) {
        self.session.open_window(id);
    }

    pub fn close(&mut self, id: &str) {
        self.session.close_window(id);
    }

    pub fn focus(&mut self, id: &str) -> bool {
        self.session.focus_window(id)
    }

    /// Returns true when the window was opened
    pub fn toggle(&mut self, id: &str) -> bool {
        self.session.toggle_window(id) == ToggleOutcome::Opened
    }

    /// Returns false when the window is not open
    pub fn minimize(&mut self, id: &str) -> bool {
        self.session.minimize_window(id)
    }

    /// Returns true when the window is now fullscreen
    #[wasm_bindgen(js_name = toggleFullscreen)]
    pub fn toggle_fullscreen(&mut self, id: &str) -> bool {
        self.session.toggle_fullscreen(id)
    }

    #[wasm_bindgen(js_name = toggleChat)]
    pub fn toggle_chat(&mut self) -> bool {
        self.session.toggle_chat() == ToggleOutcome::Opened
    }

    #[wasm_bindgen(js_name = toggleNotifications)]
    pub fn toggle_notifications(&mut self) -> bool {
        self.session.toggle_notifications()
    }

    #[wasm_bindgen(js_name = closeNotifications)]
    pub fn close_notifications(&mut self) {
        self.session.close_notifications();
    }

    /// Menu bar title clicked; returns true when its dropdown is showing
    #[wasm_bindgen(js_name = toggleMenu)]
    pub fn toggle_menu(&mut self, menu: String) -> bool {
        self.session.toggle_menu(menu)
    }

    #[wasm_bindgen(js_name = closeMenu)]
    pub fn close_menu(&mut self) {
        self.session.close_menu();
    }

    #[wasm_bindgen(js_name = setSearchQuery)]
    pub fn set_search_query(&mut self, query: String) {
        self.session.set_search_query(query);
    }

    /// Search bar clicked; arguments are its bounding client rect
    #[wasm_bindgen(js_name = activateSearch)]
    pub fn activate_search(&mut self, x: f32, y: f32, width: f32, height: f32) -> bool {
        self.session
            .activate_search(now(), Rect::new(x, y, width, height))
    }

    #[wasm_bindgen(js_name = submitSearch)]
    pub fn submit_search(&mut self, x: f32, y: f32, width: f32, height: f32) -> bool {
        self.session
            .submit_search(now(), Rect::new(x, y, width, height))
    }

    /// Call once per animation frame; returns true when a re-render is needed
    pub fn tick(&mut self) -> bool {
        self.session.tick(now())
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.session.set_viewport(Size::new(width, height));
    }

    /// Apply a JSON-encoded [`ShellAction`]
    pub fn dispatch(&mut self, action_json: &str) -> Result<(), JsValue> {
        let action: ShellAction = serde_json::from_str(action_json)
            .map_err(|e| to_js(DesktopError::from(e)))?;
        self.session.dispatch(action, now());
        Ok(())
    }

    /// JSON snapshot of the shell state
    pub fn snapshot(&self) -> Result<String, JsValue> {
        self.session.snapshot().to_json().map_err(to_js)
    }

    /// JSON transform of the expanding chat window, or `undefined` when
    /// nothing is expanding
    #[wasm_bindgen(js_name = expandFrame)]
    pub fn expand_frame(&self) -> Result<Option<String>, JsValue> {
        match self.session.expand_frame(now()) {
            Some(frame) => serde_json::to_string(&frame)
                .map(Some)
                .map_err(|e| to_js(DesktopError::from(e))),
            None => Ok(None),
        }
    }
}

impl Default for FolioShell {
    fn default() -> Self {
        Self::new()
    }
}
