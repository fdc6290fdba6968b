use ratatui::backend::TestBackend;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use ratatui::{Frame, Terminal};

pub mod animation;
pub mod layout;
pub mod theme;
pub mod toast;
pub mod widgets;

use crate::app::App;
use crate::core::{Module, Route};
use crate::error::Result;

pub fn draw(f: &mut Frame, app: &App) {
    let size = f.size();

    match app.current_route() {
        Route::Dashboard => app.dashboard.render(f, size, &app.ctx),
        Route::Login => app.login.render(f, size, &app.ctx),
    }

    toast::draw_toasts(f, Rect { height: size.height.saturating_sub(1), ..size }, &app.toasts);

    if app.help_open {
        draw_help_popup(f, size, app);
    }
}

fn draw_help_popup(f: &mut Frame, area: Rect, app: &App) {
    let popup_area = layout::centered_rect(60, 70, area);
    f.render_widget(Clear, popup_area);

    let key = |k: &'static str, what: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {k:<12}"), Style::default().fg(theme::HINT)),
            Span::raw(what),
        ])
    };
    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default().add_modifier(Modifier::BOLD),
        ))
    };

    let lines = vec![
        heading("Navigation"),
        key("Tab / S-Tab", "Cycle focus"),
        key("h j k l", "Move between feature cards"),
        key("Enter", "Open / activate"),
        key("Esc", "Back / close"),
        key("Mouse", "Click menu, hover cards"),
        Line::from(""),
        heading("Actions"),
        key("/", "Search"),
        key("a", "Account menu"),
        key("?", "Toggle help"),
        key("q", "Quit"),
        Line::from(""),
        Line::from(format!("Route: {}", app.current_route().path())),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title("Help")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, popup_area);
}

/// Draws one frame off-screen and returns its rows as plain text.
pub fn render_lines(app: &App, width: u16, height: u16) -> Result<Vec<String>> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|f| draw(f, app))?;

    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    let lines = (area.y..area.bottom())
        .map(|y| {
            let row: String = (area.x..area.right())
                .map(|x| buffer.get(x, y).symbol())
                .collect();
            row.trim_end().to_string()
        })
        .collect();
    Ok(lines)
}
