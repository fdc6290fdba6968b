use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const CONTENT_MAX_WIDTH: u16 = 120;
pub const COMPACT_WIDTH: u16 = 80;
pub const NAV_HEIGHT: u16 = 3;
pub const WELCOME_HEIGHT: u16 = 3;
pub const STAT_HEIGHT: u16 = 5;
pub const FEATURE_HEIGHT: u16 = 5;
pub const BRAND_WIDTH: u16 = 14;
pub const BELL_WIDTH: u16 = 5;
pub const SEARCH_MAX_WIDTH: u16 = 48;
pub const MENU_WIDTH: u16 = 26;
pub const MENU_HEIGHT: u16 = 8;

/// Below `COMPACT_WIDTH` the search box and the display name are hidden and
/// card grids collapse to a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Compact,
    Wide,
}

impl Breakpoint {
    pub fn for_width(width: u16) -> Self {
        if width < COMPACT_WIDTH {
            Breakpoint::Compact
        } else {
            Breakpoint::Wide
        }
    }

    pub fn stat_columns(&self) -> usize {
        match self {
            Breakpoint::Compact => 1,
            Breakpoint::Wide => 3,
        }
    }

    pub fn feature_columns(&self) -> usize {
        match self {
            Breakpoint::Compact => 1,
            Breakpoint::Wide => 2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UiAreas {
    pub size: Rect,
    pub breakpoint: Breakpoint,
    pub nav: Rect,
    pub brand: Rect,
    pub search: Option<Rect>,
    pub bell: Rect,
    pub account: Rect,
    pub main: Rect,
    pub welcome: Rect,
    pub stats: Vec<Rect>,
    pub features: Vec<Rect>,
    pub footer: Rect,
}

/// Splits the screen for the dashboard. `account_width` is the width of the
/// account trigger, which depends on the user's name.
pub fn areas(size: Rect, account_width: u16, stat_count: usize, feature_count: usize) -> UiAreas {
    let breakpoint = Breakpoint::for_width(size.width);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAV_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(size);
    let nav = vertical[0];
    let footer = vertical[2];

    let nav_row = content_column(Rect {
        x: nav.x,
        y: nav.y.saturating_add(1).min(nav.bottom().saturating_sub(1)),
        width: nav.width,
        height: nav.height.min(1),
    });
    let nav_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(BRAND_WIDTH),
            Constraint::Min(0),
            Constraint::Length(BELL_WIDTH),
            Constraint::Length(account_width),
        ])
        .split(nav_row);

    let search = match breakpoint {
        Breakpoint::Compact => None,
        Breakpoint::Wide => {
            let region = nav_chunks[1];
            let width = region.width.saturating_sub(4).min(SEARCH_MAX_WIDTH);
            (width > 0).then(|| Rect {
                x: region.x + (region.width - width) / 2,
                y: region.y,
                width,
                height: region.height,
            })
        }
    };

    let main = content_column(vertical[1]);
    let stat_rows = stat_count.div_ceil(breakpoint.stat_columns()) as u16;
    let feature_rows = feature_count.div_ceil(breakpoint.feature_columns()) as u16;
    // Sections stack at fixed heights and may run past `main` on short
    // screens; the renderer clips whatever does not fit.
    let welcome = Rect {
        y: main.y.saturating_add(1),
        height: WELCOME_HEIGHT,
        ..main
    };
    let stat_area = Rect {
        y: welcome.y.saturating_add(WELCOME_HEIGHT),
        height: stat_rows * STAT_HEIGHT,
        ..main
    };
    // one spare row per grid row so a lifted card never overlaps
    let feature_area = Rect {
        y: stat_area.y.saturating_add(stat_area.height + 1),
        height: feature_rows * (FEATURE_HEIGHT + 1),
        ..main
    };

    UiAreas {
        size,
        breakpoint,
        nav,
        brand: nav_chunks[0],
        search,
        bell: nav_chunks[2],
        account: nav_chunks[3],
        main,
        welcome,
        stats: grid(stat_area, stat_count, breakpoint.stat_columns(), STAT_HEIGHT, 0),
        features: grid(
            feature_area,
            feature_count,
            breakpoint.feature_columns(),
            FEATURE_HEIGHT,
            1,
        ),
        footer,
    }
}

/// Dropdown under the account trigger, right-aligned with it.
pub fn account_menu_area(account: Rect, bounds: Rect) -> Rect {
    let width = MENU_WIDTH.min(bounds.width);
    let right = account.right().min(bounds.right());
    let x = right.saturating_sub(width).max(bounds.x);
    let y = account.bottom().saturating_add(1);
    let height = MENU_HEIGHT.min(bounds.bottom().saturating_sub(y));
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn content_column(area: Rect) -> Rect {
    let padded = area.width.saturating_sub(4);
    let width = padded.min(CONTENT_MAX_WIDTH);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

/// Row-major cells of `count` items, `columns` wide. Cells are placed even if
/// they fall outside `area`; callers clip them.
fn grid(area: Rect, count: usize, columns: usize, height: u16, row_gap: u16) -> Vec<Rect> {
    let columns = columns.max(1);
    let gap = 2u16;
    let cols = columns as u16;
    let cell_width = area.width.saturating_sub(gap * (cols - 1)) / cols;
    (0..count)
        .map(|index| {
            let col = (index % columns) as u16;
            let row = (index / columns) as u16;
            Rect {
                x: area.x + col * (cell_width + gap),
                y: area.y.saturating_add(row * (height + row_gap) + row_gap),
                width: cell_width,
                height,
            }
        })
        .collect()
}

pub fn rect_contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_layout() {
        let areas = areas(Rect::new(0, 0, 120, 40), 16, 3, 4);
        assert_eq!(areas.breakpoint, Breakpoint::Wide);
        assert!(areas.search.is_some());
        assert_eq!(areas.stats.len(), 3);
        assert_eq!(areas.stats[0].y, areas.stats[2].y);
        assert!(areas.stats[0].x < areas.stats[1].x);
        assert_eq!(areas.features.len(), 4);
        assert_eq!(areas.features[0].y, areas.features[1].y);
        assert!(areas.features[2].y > areas.features[0].y);
        assert_eq!(areas.account.right(), areas.main.right());
    }

    #[test]
    fn test_compact_layout() {
        let areas = areas(Rect::new(0, 0, 60, 60), 8, 3, 4);
        assert_eq!(areas.breakpoint, Breakpoint::Compact);
        assert!(areas.search.is_none());
        assert!(areas.stats.windows(2).all(|w| w[0].y < w[1].y));
        assert!(areas.features.windows(2).all(|w| w[0].x == w[1].x));
    }

    #[test]
    fn test_short_compact_screen_keeps_section_heights() {
        let areas = areas(Rect::new(0, 0, 70, 40), 8, 3, 4);
        assert!(areas.stats.iter().all(|rect| rect.height == STAT_HEIGHT));
        assert!(areas.features[3].bottom() > areas.main.bottom());
        assert_eq!(areas.stats[0].y, areas.welcome.bottom());
    }

    #[test]
    fn test_menu_stays_on_screen() {
        let bounds = Rect::new(0, 0, 30, 12);
        let menu = account_menu_area(Rect::new(20, 1, 10, 1), bounds);
        assert!(menu.right() <= bounds.right());
        assert!(menu.bottom() <= bounds.bottom());
        assert_eq!(menu.width, MENU_WIDTH);
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(2, 2, 3, 3);
        assert!(rect_contains(rect, 2, 2));
        assert!(rect_contains(rect, 4, 4));
        assert!(!rect_contains(rect, 5, 4));
    }
}
