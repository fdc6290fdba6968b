//! Headless output behind `--dump`

use std::time::Instant;

use ratatui::layout::Rect;

use crate::app::{App, AppSettings};
use crate::domain::{DashboardModel, UserName};
use crate::error::Result;
use crate::ui;

/// The settled dashboard as plain text, one line per terminal row.
///
/// Animations are forced off so the output does not depend on timing.
pub fn text(settings: AppSettings, width: u16, height: u16) -> Result<String> {
    let mut app = App::new(AppSettings {
        animations: false,
        ..settings
    });
    app.resize(Rect::new(0, 0, width, height));
    app.sync_context(Instant::now());
    Ok(ui::render_lines(&app, width, height)?.join("\n"))
}

pub fn json(user: &UserName) -> Result<String> {
    Ok(serde_json::to_string_pretty(&DashboardModel::build(user))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_has_exact_dimensions() {
        let out = text(AppSettings::default(), 100, 40).unwrap();
        assert_eq!(out.lines().count(), 40);
        assert!(out.lines().all(|line| line.chars().count() <= 100));
    }

    #[test]
    fn test_json_is_pretty_printed() {
        let out = json(&UserName::default()).unwrap();
        assert!(out.starts_with("{\n"));
        assert!(out.contains("\"display_name\": \"John Doe\""));
    }
}
