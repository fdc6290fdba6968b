//! Mouse, headless dump and short-screen behaviour seen from outside the crate.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use dashview::domain::{UserName, FEATURES, STATS};
use dashview::modules::dashboard::{account_trigger_width, DashboardFocus};
use dashview::ui::layout::{self, Breakpoint, UiAreas};
use dashview::{dump, App, AppSettings};
use ratatui::layout::Rect;

fn app(width: u16, height: u16) -> App {
    let mut app = App::new(AppSettings {
        animations: false,
        ..AppSettings::default()
    });
    app.resize(Rect::new(0, 0, width, height));
    app.sync_context(Instant::now());
    app
}

fn areas_of(app: &App) -> UiAreas {
    let size = app.size();
    let account = account_trigger_width(&app.ctx, Breakpoint::for_width(size.width));
    layout::areas(size, account, STATS.len(), FEATURES.len())
}

fn mouse(app: &mut App, kind: MouseEventKind, column: u16, row: u16) {
    app.handle_mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    });
}

fn emphasized(app: &App) -> Vec<usize> {
    (0..FEATURES.len())
        .filter(|index| app.dashboard.is_emphasized(*index))
        .collect()
}

#[test]
fn test_hovering_a_card_lifts_only_that_card() {
    let mut app = app(120, 40);
    assert!(emphasized(&app).is_empty());

    let activity = areas_of(&app).features[3];
    mouse(&mut app, MouseEventKind::Moved, activity.x + 2, activity.y + 2);
    assert_eq!(emphasized(&app), vec![3]);

    let profile = areas_of(&app).features[0];
    mouse(&mut app, MouseEventKind::Moved, profile.x + 2, profile.y + 2);
    assert_eq!(emphasized(&app), vec![0]);
}

#[test]
fn test_clicking_search_focuses_it() {
    let mut app = app(120, 40);
    let search = areas_of(&app).search.expect("search on wide screens");
    mouse(
        &mut app,
        MouseEventKind::Down(MouseButton::Left),
        search.x + 4,
        search.y,
    );
    assert_eq!(app.dashboard.focus(), DashboardFocus::Search);

    app.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
    assert_eq!(app.dashboard.search_text(), "q");
    assert!(!app.should_quit);
}

#[test]
fn test_text_dump_is_settled_and_unlifted() {
    let out = dump::text(AppSettings::default(), 100, 40).expect("dump");
    assert_eq!(out.lines().count(), 40);
    assert!(out.contains("Welcome back, John!"));
    for card in &FEATURES {
        assert!(out.contains(card.title), "{} missing", card.title);
    }
    // no card is drawn with the lifted thick border
    assert!(!out.contains('┏'));
    assert_eq!(out, dump::text(AppSettings::default(), 100, 40).expect("dump"));
}

#[test]
fn test_json_dump_uses_configured_name() {
    let out = dump::json(&UserName::new("Ada Lovelace")).expect("dump");
    let value: serde_json::Value = serde_json::from_str(&out).expect("valid json");
    assert_eq!(value["display_name"], "Ada Lovelace");
    assert_eq!(value["greeting"], "Welcome back, Ada! 👋");
    assert_eq!(value["stats"].as_array().map(Vec::len), Some(3));
}

#[test]
fn test_compact_default_height_keeps_top_of_page() {
    let out = dump::text(AppSettings::default(), 70, 40).expect("dump");
    assert_eq!(out.lines().count(), 40);
    assert!(out.contains("Welcome back, John!"));
    assert!(out.contains("(JD)"));
    assert!(!out.contains("John Doe"));
    assert!(!out.contains("Search..."));
    for stat in &STATS {
        assert!(out.contains(stat.label), "{} missing", stat.label);
        assert!(out.contains(stat.value), "{} missing", stat.value);
    }
    assert!(out.contains("Profile"));
    assert!(out.contains("Analytics"));
}
