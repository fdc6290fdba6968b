//! Renders the dashboard off-screen and checks what a user would read.

use std::time::{Duration, Instant};

use dashview::domain::{FEATURES, STATS};
use dashview::ui::render_lines;
use dashview::{App, AppSettings};
use ratatui::layout::Rect;

fn still_app(width: u16, height: u16) -> App {
    let mut app = App::new(AppSettings {
        animations: false,
        ..AppSettings::default()
    });
    app.resize(Rect::new(0, 0, width, height));
    app.sync_context(Instant::now());
    app
}

fn screen(app: &App) -> String {
    let size = app.size();
    render_lines(app, size.width, size.height)
        .expect("render")
        .join("\n")
}

fn assert_in_order(text: &str, needles: &[&str]) {
    let mut last = 0;
    for needle in needles {
        let pos = text[last..]
            .find(needle)
            .unwrap_or_else(|| panic!("{needle:?} missing or out of order"));
        last += pos + needle.len();
    }
}

#[test]
fn test_wide_dashboard_shows_greeting_and_account() {
    let text = screen(&still_app(120, 40));
    assert!(text.contains("Welcome back, John!"));
    assert!(text.contains("(JD)"));
    assert!(text.contains("John Doe"));
    assert!(text.contains("Search..."));
    assert!(text.contains("Dashboard"));
}

#[test]
fn test_stats_render_in_order() {
    let text = screen(&still_app(120, 40));
    let labels: Vec<&str> = STATS.iter().map(|s| s.label).collect();
    let values: Vec<&str> = STATS.iter().map(|s| s.value).collect();
    assert_in_order(&text, &labels);
    assert_in_order(&text, &values);
    for stat in &STATS {
        assert!(text.contains(stat.change), "{} missing", stat.change);
    }
}

#[test]
fn test_features_render_in_order_with_descriptions() {
    let text = screen(&still_app(120, 40));
    let titles: Vec<&str> = FEATURES.iter().map(|f| f.title).collect();
    assert_in_order(&text, &titles);
    for card in &FEATURES {
        let lead: String = card
            .description
            .split_whitespace()
            .take(3)
            .collect::<Vec<_>>()
            .join(" ");
        assert!(text.contains(&lead), "{lead:?} missing");
    }
}

#[test]
fn test_rendering_is_idempotent() {
    let app = still_app(120, 40);
    assert_eq!(screen(&app), screen(&app));
}

#[test]
fn test_custom_user_name() {
    let mut app = App::new(AppSettings {
        user: dashview::domain::UserName::new("Ada Lovelace"),
        animations: false,
        ..AppSettings::default()
    });
    app.resize(Rect::new(0, 0, 120, 40));
    let text = screen(&app);
    assert!(text.contains("Welcome back, Ada!"));
    assert!(text.contains("(AL)"));
}

#[test]
fn test_compact_width_hides_search_and_name() {
    let text = screen(&still_app(70, 60));
    assert!(!text.contains("Search..."));
    assert!(!text.contains("John Doe"));
    assert!(text.contains("(JD)"));
    assert!(text.contains("Welcome back, John!"));
}

#[test]
fn test_cards_hidden_before_their_delay() {
    let mut app = App::new(AppSettings::default());
    app.resize(Rect::new(0, 0, 120, 40));
    let start = Instant::now();
    app.mount(start);
    app.sync_context(start);
    let early = screen(&app);
    assert!(!early.contains("Growth"));
    assert!(!early.contains("Activity"));

    app.sync_context(start + Duration::from_secs(2));
    let settled = screen(&app);
    assert!(settled.contains("Growth"));
    assert!(settled.contains("Activity"));
    assert_eq!(settled, screen(&still_app(120, 40)));
}
