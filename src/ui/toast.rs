//! Toast overlay, stacked in the bottom-right corner above the footer

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::core::{NotifyLevel, ToastQueue};

use super::theme;

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 4;

pub fn draw_toasts(f: &mut Frame, area: Rect, toasts: &ToastQueue) {
    let width = TOAST_WIDTH.min(area.width.saturating_sub(2));
    if width == 0 {
        return;
    }
    // newest toast sits closest to the bottom edge
    let mut bottom = area.bottom().saturating_sub(1);
    for toast in toasts.iter().rev() {
        if bottom < area.y + TOAST_HEIGHT {
            break;
        }
        let rect = Rect {
            x: area.right().saturating_sub(width + 1),
            y: bottom - TOAST_HEIGHT,
            width,
            height: TOAST_HEIGHT,
        };
        bottom = rect.y;

        let accent = match toast.notice.level {
            NotifyLevel::Info => theme::PRIMARY,
            NotifyLevel::Warn => theme::HINT,
            NotifyLevel::Error => theme::DESTRUCTIVE,
        };
        let lines = vec![
            Line::from(Span::styled(
                toast.notice.title.as_str(),
                Style::default()
                    .fg(theme::FOREGROUND)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                toast.notice.description.as_str(),
                Style::default().fg(theme::MUTED),
            )),
        ];
        f.render_widget(Clear, rect);
        f.render_widget(
            Paragraph::new(lines)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(accent)),
                )
                .wrap(Wrap { trim: true }),
            rect,
        );
    }
}
