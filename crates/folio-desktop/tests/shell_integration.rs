//! Shell Integration Tests
//!
//! Drives a whole session through the public API the way the dock, menu
//! bar, search bar and window controls do.

use folio_desktop::{
    FocusPolicy, Rect, SearchPlacement, ShellAction, ShellConfig, ShellSession, WindowId,
    WindowKind, WindowManager,
};

fn open_ids(shell: &ShellSession) -> Vec<&str> {
    shell.open_windows().iter().map(|w| w.as_str()).collect()
}

fn focused(shell: &ShellSession) -> Option<&str> {
    shell.focused().map(|w| w.as_str())
}

/// Closing a window that is not focused leaves focus alone.
#[test]
fn test_close_middle_window_keeps_focus() {
    let mut wm = WindowManager::new();
    wm.open("a");
    wm.open("b");
    wm.open("c");
    wm.close("b");

    assert_eq!(wm.open_windows(), &[WindowId::from("a"), WindowId::from("c")]);
    assert_eq!(wm.focused(), Some(&WindowId::from("c")));
}

/// Closing the focused window hands focus to the newest remaining one.
#[test]
fn test_close_focused_window_refocuses_last() {
    let mut wm = WindowManager::new();
    wm.open("a");
    wm.open("b");
    wm.close("b");

    assert_eq!(wm.open_windows(), &[WindowId::from("a")]);
    assert_eq!(wm.focused(), Some(&WindowId::from("a")));

    wm.close("a");
    assert!(wm.open_windows().is_empty());
    assert_eq!(wm.focused(), None);
}

/// Dock chat button pressed twice from an empty desktop.
#[test]
fn test_chat_toggle_round_trip() {
    let mut shell = ShellSession::default();

    shell.dispatch(ShellAction::ToggleChat, 0.0);
    assert_eq!(open_ids(&shell), vec!["chat"]);
    assert_eq!(focused(&shell), Some("chat"));

    shell.dispatch(ShellAction::Toggle { id: "chat".into() }, 0.0);
    assert!(open_ids(&shell).is_empty());
    assert_eq!(focused(&shell), None);
}

/// A visitor browses the dock, then asks the assistant a question.
#[test]
fn test_browsing_session() {
    let mut shell = ShellSession::default();
    assert_eq!(shell.search_placement(), SearchPlacement::Centered);

    for kind in WindowKind::dock_items() {
        shell.open_window(*kind);
    }
    assert_eq!(
        open_ids(&shell),
        vec!["about", "projects", "skills", "contact", "resume"]
    );
    assert_eq!(focused(&shell), Some("resume"));
    assert_eq!(shell.search_placement(), SearchPlacement::Compact);

    // Reopening from the dock only refocuses
    shell.open_window(WindowKind::Projects);
    assert_eq!(open_ids(&shell).len(), 5);
    assert_eq!(focused(&shell), Some("projects"));

    // Clicking a background window
    shell.dispatch(ShellAction::Focus { id: "skills".into() }, 0.0);
    shell.dispatch(ShellAction::Close { id: "skills".into() }, 0.0);
    assert_eq!(focused(&shell), Some("resume"));

    // Ask the assistant from the compact search bar
    let bar = Rect::new(800.0, 32.0, 320.0, 40.0);
    shell.dispatch(
        ShellAction::SetSearchQuery {
            query: "Which projects use Rust?".to_string(),
        },
        1_000.0,
    );
    shell.dispatch(ShellAction::SubmitSearch { trigger: bar }, 1_000.0);
    assert!(shell.snapshot().search_animating);

    shell.tick(1_100.0);
    assert!(!shell.is_chat_open());
    shell.tick(1_200.0);
    assert!(shell.is_chat_open());
    assert_eq!(focused(&shell), Some("chat"));
    assert_eq!(shell.search_placement(), SearchPlacement::Hidden);

    let snapshot = shell.snapshot();
    let chat = snapshot
        .windows
        .iter()
        .find(|w| w.id == "chat")
        .expect("chat view");
    assert!(chat.focused);
    assert!(chat.expanding);
    assert_eq!(chat.z_index, snapshot.windows.len() - 1);
    assert_eq!(chat.initial_query, "Which projects use Rust?");

    // Let the expand transition finish
    shell.tick(2_000.0);
    assert!(shell.expand_frame(2_000.0).is_none());

    let json = snapshot.to_json().unwrap();
    assert!(json.contains("\"focused\":\"chat\""));
}

/// Hosts that want the closed-focus invariant can opt into it.
#[test]
fn test_strict_focus_from_json_config() {
    let config = ShellConfig::from_json(r#"{ "focusPolicy": "strict" }"#).unwrap();
    let mut shell = ShellSession::new(config);
    assert_eq!(shell.windows().policy(), FocusPolicy::Strict);

    shell.dispatch(ShellAction::Focus { id: "contact".into() }, 0.0);
    assert_eq!(focused(&shell), None);

    shell.open_window("contact");
    shell.open_window("about");
    shell.dispatch(ShellAction::Focus { id: "contact".into() }, 0.0);
    assert_eq!(focused(&shell), Some("contact"));
}

/// Actions arrive from JavaScript as JSON.
#[test]
fn test_dispatch_from_json() {
    let mut shell = ShellSession::default();
    let actions = [
        r#"{ "type": "open", "id": "about" }"#,
        r#"{ "type": "toggleNotifications" }"#,
        r#"{ "type": "resize", "viewport": { "width": 1440, "height": 900 } }"#,
        r#"{ "type": "activateSearch", "trigger": { "x": 520, "y": 40, "width": 400, "height": 44 } }"#,
    ];
    for json in actions {
        let action: ShellAction = serde_json::from_str(json).unwrap();
        shell.dispatch(action, 0.0);
    }

    assert_eq!(open_ids(&shell), vec!["about"]);
    assert!(shell.notifications_open());
    assert!(shell.search().is_animating());

    assert!(shell.tick(200.0));
    assert_eq!(open_ids(&shell), vec!["about", "chat"]);

    // Search bar center (720, 62) against viewport center (720, 450)
    let frame = shell.expand_frame(200.0).unwrap();
    assert!(frame.translate.x.abs() < 0.01);
    assert!((frame.translate.y + 388.0).abs() < 0.01);
}

/// Closing a focused id that was never opened still hands focus back.
#[test]
fn test_close_focused_unopened_window() {
    let mut shell = ShellSession::default();
    shell.open_window(WindowKind::About);
    shell.dispatch(ShellAction::Focus { id: "resume".into() }, 0.0);
    assert_eq!(focused(&shell), Some("resume"));

    shell.dispatch(ShellAction::Close { id: "resume".into() }, 0.0);
    assert_eq!(open_ids(&shell), vec!["about"]);
    assert_eq!(focused(&shell), Some("about"));
}

/// Title-bar controls and menu bar dropdowns.
#[test]
fn test_window_chrome_and_menus() {
    let mut shell = ShellSession::default();
    shell.open_window(WindowKind::Projects);
    shell.open_window(WindowKind::Contact);

    shell.dispatch(ShellAction::ToggleFullscreen { id: "projects".into() }, 0.0);
    shell.dispatch(ShellAction::Minimize { id: "contact".into() }, 0.0);
    shell.dispatch(ShellAction::ToggleMenu { menu: "Window".into() }, 0.0);

    let snapshot = shell.snapshot();
    assert_eq!(snapshot.active_menu.as_deref(), Some("Window"));
    let projects = &snapshot.windows[0];
    let contact = &snapshot.windows[1];
    assert!(projects.fullscreen && !projects.minimized);
    assert!(contact.minimized && !contact.fullscreen);
    assert_eq!(open_ids(&shell), vec!["projects", "contact"]);

    // Choosing "Contact" from the Window menu
    shell.dispatch(ShellAction::CloseMenu, 0.0);
    shell.dispatch(ShellAction::Open { id: "contact".into() }, 0.0);
    assert!(!shell.is_minimized("contact"));
    assert_eq!(shell.active_menu(), None);

    shell.dispatch(ShellAction::Close { id: "projects".into() }, 0.0);
    shell.open_window(WindowKind::Projects);
    assert!(!shell.is_fullscreen("projects"));
}
