//! Drives the app through key and mouse events the way a terminal would.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use dashview::core::{Route, Session};
use dashview::domain::UserName;
use dashview::ui::render_lines;
use dashview::{App, AppSettings};
use ratatui::layout::Rect;

fn app() -> App {
    let mut app = App::new(AppSettings {
        animations: false,
        ..AppSettings::default()
    });
    app.resize(Rect::new(0, 0, 120, 40));
    app.sync_context(Instant::now());
    app
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn click(app: &mut App, column: u16, row: u16) {
    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    });
}

fn screen(app: &App) -> String {
    render_lines(app, 120, 40).expect("render").join("\n")
}

#[test]
fn test_keyboard_logout_notifies_once_and_routes_to_login() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    assert!(screen(&app).contains("My Account"));

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.current_route(), Route::Login);
    assert_eq!(app.toasts.len(), 1);

    let text = screen(&app);
    assert!(text.contains("/login"));
    assert!(text.contains("Logged out"));
    assert!(text.contains("You have been successfully logged out."));
}

#[test]
fn test_mouse_logout_through_menu() {
    let mut app = app();
    click(&mut app, 115, 1);
    assert!(app.dashboard.menu().is_open());

    // the dropdown is right-aligned under the trigger, so column 110 is inside it
    let lines = render_lines(&app, 120, 40).expect("render");
    let row = lines
        .iter()
        .position(|line| line.contains("Logout"))
        .expect("logout entry rendered") as u16;
    click(&mut app, 110, row);

    assert_eq!(app.current_route(), Route::Login);
    assert_eq!(app.toasts.len(), 1);
}

#[test]
fn test_profile_and_settings_entries_stay_on_dashboard() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.current_route(), Route::Dashboard);
    assert!(!app.dashboard.menu().is_open());

    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.current_route(), Route::Dashboard);
    assert!(app.toasts.is_empty());
}

#[test]
fn test_typing_in_search_changes_nothing_else() {
    let mut app = app();
    let before = app.current_route();
    press(&mut app, KeyCode::Char('/'));
    for ch in "quit?a".chars() {
        press(&mut app, KeyCode::Char(ch));
    }

    assert_eq!(app.dashboard.search_text(), "quit?a");
    assert_eq!(app.current_route(), before);
    assert!(!app.should_quit);
    assert!(!app.help_open);
    assert!(!app.dashboard.menu().is_open());
    assert!(app.toasts.is_empty());
    assert!(screen(&app).contains("quit?a"));
}

#[test]
fn test_q_quits_from_dashboard_and_login() {
    let mut dashboard = app();
    press(&mut dashboard, KeyCode::Char('q'));
    assert!(dashboard.should_quit);

    let mut login = app();
    login.apply_action(dashview::core::Action::logout());
    press(&mut login, KeyCode::Char('q'));
    assert!(login.should_quit);
}

#[test]
fn test_session_keeps_user_after_logout() {
    let mut app = app();
    app.apply_action(dashview::core::Action::logout());
    assert_eq!(app.session.current_user(), &UserName::default());
}
