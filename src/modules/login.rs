//! Placeholder for the `/login` route
//!
//! Signing in is out of scope; this screen only confirms the user left the
//! dashboard and offers a way back.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

use crate::core::{Action, Context, Module, Route};
use crate::ui::layout::centered_rect;
use crate::ui::theme;

#[derive(Debug, Clone, Default)]
pub struct LoginScreen;

impl LoginScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Module for LoginScreen {
    fn id(&self) -> &'static str {
        "login"
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &Context) -> Action {
        match key.code {
            KeyCode::Enter => Action::Back,
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, _ctx: &Context) {
        let popup = centered_rect(50, 40, area);
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Signed out",
                Style::default()
                    .fg(theme::FOREGROUND)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Sign-in is handled by your identity provider.",
                Style::default().fg(theme::MUTED),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Enter", Style::default().fg(theme::HINT)),
                Span::raw(" back to dashboard   "),
                Span::styled("q", Style::default().fg(theme::HINT)),
                Span::raw(" quit"),
            ]),
        ];
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(theme::BORDER))
                    .title(Route::Login.path()),
            ),
            popup,
        );
    }
}
