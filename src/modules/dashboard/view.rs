use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::core::Context;
use crate::domain::{DashboardModel, Icon, FEATURES, STATS};
use crate::ui::animation::{Entrance, Pose};
use crate::ui::layout::{self, Breakpoint, UiAreas};
use crate::ui::theme;
use crate::ui::widgets::{FeatureTile, StatCard};

use super::menu::{MenuItem, MENU_LABEL, SEPARATOR_ROWS};
use super::{Dashboard, DashboardFocus};

const SEARCH_PLACEHOLDER: &str = "Search...";

pub fn account_trigger_width(ctx: &Context, breakpoint: Breakpoint) -> u16 {
    let model = DashboardModel::build(&ctx.user);
    account_line(&model, breakpoint, false).width() as u16
}

pub(super) fn areas(area: Rect, ctx: &Context) -> UiAreas {
    let breakpoint = Breakpoint::for_width(area.width);
    layout::areas(
        area,
        account_trigger_width(ctx, breakpoint),
        STATS.len(),
        FEATURES.len(),
    )
}

pub(super) fn render(dash: &Dashboard, f: &mut Frame, area: Rect, ctx: &Context) {
    let model = DashboardModel::build(&ctx.user);
    let areas = areas(area, ctx);

    draw_nav(f, &areas, area, dash, &model, ctx);
    draw_welcome(f, &areas, &model, ctx);
    draw_stats(f, &areas, &model, ctx);
    draw_features(f, &areas, &model, dash, ctx);
    draw_footer(f, areas.footer, dash);

    if dash.menu().is_open() {
        draw_menu(f, layout::account_menu_area(areas.account, area), dash, ctx);
    }
}

fn account_line(model: &DashboardModel, breakpoint: Breakpoint, highlighted: bool) -> Line<'static> {
    let base = if highlighted {
        Style::default().bg(theme::INPUT_BG)
    } else {
        Style::default()
    };
    let mut spans = vec![
        Span::styled(" ", base),
        Span::styled(
            format!("({})", model.initials),
            base.fg(Color::Black)
                .bg(theme::PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if breakpoint == Breakpoint::Wide {
        spans.push(Span::styled(
            format!(" {}", model.display_name),
            base.fg(theme::FOREGROUND),
        ));
    }
    spans.push(Span::styled(" ▾ ", base.fg(theme::MUTED)));
    Line::from(spans)
}

fn draw_nav(
    f: &mut Frame,
    areas: &UiAreas,
    bounds: Rect,
    dash: &Dashboard,
    model: &DashboardModel,
    ctx: &Context,
) {
    let pose = Entrance::nav().pose(ctx);
    let Some(nav) = pose.place(areas.nav, bounds) else {
        return;
    };
    f.render_widget(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(pose.fade(Style::default().fg(theme::BORDER))),
        nav,
    );

    if let Some(brand) = pose.place(areas.brand, bounds) {
        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", ctx.glyph(Icon::Menu)),
                pose.fade(Style::default().fg(Color::Black).bg(theme::PRIMARY)),
            ),
            Span::raw(" "),
            Span::styled(
                "Dashboard",
                pose.fade(
                    Style::default()
                        .fg(theme::FOREGROUND)
                        .add_modifier(Modifier::BOLD),
                ),
            ),
        ]);
        f.render_widget(Paragraph::new(line), brand);
    }

    if let Some(search) = areas.search.and_then(|rect| pose.place(rect, bounds)) {
        draw_search(f, search, dash, ctx, pose);
    }

    if let Some(bell) = pose.place(areas.bell, bounds) {
        let base = if dash.focus() == DashboardFocus::Notifications {
            Style::default().bg(theme::INPUT_BG)
        } else {
            Style::default()
        };
        let line = Line::from(vec![
            Span::styled(" ", base),
            Span::styled(ctx.glyph(Icon::Bell), pose.fade(base.fg(theme::FOREGROUND))),
            Span::styled(
                ctx.glyphs.unread_dot(),
                pose.fade(base.fg(theme::DESTRUCTIVE)),
            ),
            Span::styled(" ", base),
        ]);
        f.render_widget(Paragraph::new(line), bell);
    }

    if let Some(account) = pose.place(areas.account, bounds) {
        let highlighted = dash.focus() == DashboardFocus::Account || dash.menu().is_open();
        let line = account_line(model, areas.breakpoint, highlighted);
        f.render_widget(Paragraph::new(line).style(pose.fade(Style::default())), account);
    }
}

fn draw_search(f: &mut Frame, area: Rect, dash: &Dashboard, ctx: &Context, pose: Pose) {
    let focused = dash.focus() == DashboardFocus::Search;
    let base = pose.fade(Style::default().bg(theme::INPUT_BG));
    let icon = Span::styled(
        format!(" {} ", ctx.glyph(Icon::Search)),
        base.fg(theme::MUTED),
    );
    let text = if dash.search_text().is_empty() && !focused {
        Span::styled(SEARCH_PLACEHOLDER, base.fg(theme::MUTED))
    } else {
        Span::styled(dash.search_text().to_string(), base.fg(theme::FOREGROUND))
    };
    let prefix_width = icon.width() as u16;
    let text_width = text.width() as u16;
    let border = if focused {
        base.fg(theme::PRIMARY)
    } else {
        base
    };
    f.render_widget(
        Paragraph::new(Line::from(vec![icon, text])).style(border),
        area,
    );
    if focused && pose.visible() {
        let x = (area.x + prefix_width + text_width).min(area.right().saturating_sub(1));
        f.set_cursor(x, area.y);
    }
}

fn draw_welcome(f: &mut Frame, areas: &UiAreas, model: &DashboardModel, ctx: &Context) {
    let pose = Entrance::welcome().pose(ctx);
    let Some(rect) = pose.place(areas.welcome, areas.main) else {
        return;
    };
    let text = Text::from(vec![
        Line::from(Span::styled(
            model.greeting.as_str(),
            pose.fade(
                Style::default()
                    .fg(theme::FOREGROUND)
                    .add_modifier(Modifier::BOLD),
            ),
        )),
        Line::from(Span::styled(
            model.subtext,
            pose.fade(Style::default().fg(theme::MUTED)),
        )),
    ]);
    f.render_widget(Paragraph::new(text), rect);
}

fn draw_stats(f: &mut Frame, areas: &UiAreas, model: &DashboardModel, ctx: &Context) {
    for (index, (stat, rect)) in model.stats.iter().zip(&areas.stats).enumerate() {
        let pose = Entrance::stat(index).pose(ctx);
        if let Some(rect) = pose.place(*rect, areas.main) {
            f.render_widget(StatCard::new(stat, ctx.glyph(stat.icon)).pose(pose), rect);
        }
    }
}

fn draw_features(
    f: &mut Frame,
    areas: &UiAreas,
    model: &DashboardModel,
    dash: &Dashboard,
    ctx: &Context,
) {
    for (index, (card, rect)) in model.features.iter().zip(&areas.features).enumerate() {
        let pose = Entrance::feature(card).pose(ctx);
        let emphasized = dash.is_emphasized(index);
        let mut rect = *rect;
        if emphasized {
            rect.y = rect.y.saturating_sub(1);
        }
        if let Some(rect) = pose.place(rect, areas.main) {
            f.render_widget(
                FeatureTile::new(card, ctx.glyph(card.icon))
                    .pose(pose)
                    .emphasized(emphasized),
                rect,
            );
        }
    }
}

fn draw_footer(f: &mut Frame, area: Rect, dash: &Dashboard) {
    let hints: &[(&str, &str)] = if dash.menu().is_open() {
        &[("j/k", "move"), ("Enter", "select"), ("Esc", "close")]
    } else if dash.focus() == DashboardFocus::Search {
        &[("type", "search"), ("Enter/Esc", "done"), ("Tab", "next")]
    } else {
        &[
            ("Tab", "focus"),
            ("/", "search"),
            ("a", "account"),
            ("?", "help"),
            ("q", "quit"),
        ]
    };
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (key, label) in hints {
        spans.push(Span::styled(format!(" {key}"), Style::default().fg(theme::HINT)));
        spans.push(Span::styled(
            format!(" {label} "),
            Style::default().fg(theme::MUTED),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_menu(f: &mut Frame, area: Rect, dash: &Dashboard, ctx: &Context) {
    if area.height < 3 || area.width < 4 {
        return;
    }
    f.render_widget(Clear, area);
    let inner_width = area.width.saturating_sub(2) as usize;

    let rows = SEPARATOR_ROWS
        .iter()
        .copied()
        .chain(MenuItem::ALL.iter().map(MenuItem::row))
        .max()
        .unwrap_or(0);
    let mut lines: Vec<Line> = Vec::with_capacity(rows as usize + 1);
    for row in 0..=rows {
        if row == 0 {
            lines.push(Line::from(Span::styled(
                format!(" {MENU_LABEL}"),
                Style::default()
                    .fg(theme::FOREGROUND)
                    .add_modifier(Modifier::BOLD),
            )));
        } else if SEPARATOR_ROWS.contains(&row) {
            lines.push(Line::from(Span::styled(
                "─".repeat(inner_width),
                Style::default().fg(theme::BORDER),
            )));
        } else if let Some(item) = MenuItem::at_row(row) {
            let mut style = if item.destructive() {
                Style::default().fg(theme::DESTRUCTIVE)
            } else {
                Style::default().fg(theme::FOREGROUND)
            };
            if dash.menu().selected() == item {
                style = style.bg(theme::INPUT_BG).add_modifier(Modifier::BOLD);
            }
            let label = format!(" {} {}", ctx.glyph(item.icon()), item.label());
            lines.push(Line::from(Span::styled(
                format!("{label:<inner_width$}"),
                style,
            )));
        } else {
            lines.push(Line::from(""));
        }
    }

    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme::BORDER)),
        ),
        area,
    );
}
