//! Stat and feature card widgets

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::domain::{FeatureCard, StatItem};
use crate::ui::animation::Pose;
use crate::ui::theme;

/// Summary number with an icon badge and a change indicator.
pub struct StatCard<'a> {
    item: &'a StatItem,
    glyph: &'a str,
    pose: Pose,
}

impl<'a> StatCard<'a> {
    pub fn new(item: &'a StatItem, glyph: &'a str) -> Self {
        Self {
            item,
            glyph,
            pose: Pose::REST,
        }
    }

    pub fn pose(mut self, pose: Pose) -> Self {
        self.pose = pose;
        self
    }
}

impl<'a> Widget for StatCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let fade = |style: Style| self.pose.fade(style);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(fade(Style::default().fg(theme::BORDER)));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        let badge = Span::styled(
            format!(" {} ", self.glyph),
            fade(Style::default().fg(theme::PRIMARY).bg(theme::PRIMARY_SOFT)),
        );
        Paragraph::new(Line::from(badge)).render(rows[0], buf);
        // the indicator is supplied text; it is always drawn as an increase
        Paragraph::new(Line::from(Span::styled(
            self.item.change,
            fade(
                Style::default()
                    .fg(theme::POSITIVE)
                    .add_modifier(Modifier::BOLD),
            ),
        )))
        .alignment(Alignment::Right)
        .render(rows[0], buf);

        Paragraph::new(Line::from(Span::styled(
            self.item.label,
            fade(Style::default().fg(theme::MUTED)),
        )))
        .render(rows[1], buf);

        Paragraph::new(Line::from(Span::styled(
            self.item.value,
            fade(
                Style::default()
                    .fg(theme::FOREGROUND)
                    .add_modifier(Modifier::BOLD),
            ),
        )))
        .render(rows[2], buf);
    }
}

/// Clickable-looking navigation card. Emphasis is the hover state.
pub struct FeatureTile<'a> {
    card: &'a FeatureCard,
    glyph: &'a str,
    pose: Pose,
    emphasized: bool,
}

impl<'a> FeatureTile<'a> {
    pub fn new(card: &'a FeatureCard, glyph: &'a str) -> Self {
        Self {
            card,
            glyph,
            pose: Pose::REST,
            emphasized: false,
        }
    }

    pub fn pose(mut self, pose: Pose) -> Self {
        self.pose = pose;
        self
    }

    pub fn emphasized(mut self, emphasized: bool) -> Self {
        self.emphasized = emphasized;
        self
    }
}

impl<'a> Widget for FeatureTile<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let fade = |style: Style| self.pose.fade(style);
        let (border, title) = if self.emphasized {
            (
                Style::default().fg(theme::PRIMARY),
                Style::default()
                    .fg(theme::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                Style::default().fg(theme::BORDER),
                Style::default()
                    .fg(theme::FOREGROUND)
                    .add_modifier(Modifier::BOLD),
            )
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if self.emphasized {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(fade(border));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(6), Constraint::Min(0)])
            .split(inner);

        let (from, to) = self.card.gradient.stops();
        let badge_bg = if self.emphasized { to } else { from };
        let badge_style = fade(Style::default().fg(Color::White).bg(badge_bg));
        let badge = vec![
            Line::from(Span::styled("     ", badge_style)),
            Line::from(Span::styled(format!("  {:<3}", self.glyph), badge_style)),
            Line::from(Span::styled("     ", badge_style)),
        ];
        Paragraph::new(badge).render(columns[0], buf);

        let text = vec![
            Line::from(Span::styled(self.card.title, fade(title))),
            Line::from(Span::styled(
                self.card.description,
                fade(Style::default().fg(theme::MUTED)),
            )),
        ];
        Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .render(columns[1], buf);
    }
}
