//! Dashboard module - the default route
//!
//! Holds only interaction state (focus, search text, menu, hover). Everything
//! that is shown comes from [`DashboardModel`](crate::domain::DashboardModel).

pub mod menu;
mod view;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::Frame;

use crate::core::{Action, Context, Module};
use crate::domain::FEATURES;
use crate::ui::layout::{self, rect_contains};

pub use menu::{AccountMenu, MenuItem};
pub use view::account_trigger_width;

/// Which part of the dashboard receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardFocus {
    Features,
    Search,
    Notifications,
    Account,
}

impl DashboardFocus {
    pub const ALL: [DashboardFocus; 4] = [
        DashboardFocus::Features,
        DashboardFocus::Search,
        DashboardFocus::Notifications,
        DashboardFocus::Account,
    ];

    pub fn next(&self) -> Self {
        let index = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let index = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    focus: DashboardFocus,
    search: String,
    menu: AccountMenu,
    selected_feature: usize,
    hovered_feature: Option<usize>,
    /// Set once the keyboard or a click has picked a card
    show_selection: bool,
    columns: usize,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            focus: DashboardFocus::Features,
            search: String::new(),
            menu: AccountMenu::default(),
            selected_feature: 0,
            hovered_feature: None,
            show_selection: false,
            columns: 2,
        }
    }

    pub fn focus(&self) -> DashboardFocus {
        self.focus
    }

    pub fn search_text(&self) -> &str {
        &self.search
    }

    pub fn menu(&self) -> &AccountMenu {
        &self.menu
    }

    pub fn selected_feature(&self) -> usize {
        self.selected_feature
    }

    /// Feature grid width, used for up/down movement.
    pub fn set_columns(&mut self, columns: usize) {
        self.columns = columns.max(1);
    }

    /// A hovered card replaces the keyboard selection.
    pub fn is_emphasized(&self, index: usize) -> bool {
        if let Some(hovered) = self.hovered_feature {
            return hovered == index;
        }
        self.show_selection
            && self.focus == DashboardFocus::Features
            && !self.menu.is_open()
            && self.selected_feature == index
    }

    fn set_focus(&mut self, focus: DashboardFocus) {
        self.focus = focus;
        self.show_selection = true;
    }

    pub fn activate(&mut self, item: MenuItem) -> Action {
        self.menu.close();
        match item {
            MenuItem::Profile | MenuItem::Settings => {
                tracing::debug!(item = item.label(), "menu entry has no destination");
                Action::None
            }
            MenuItem::Logout => Action::logout(),
        }
    }

    fn move_feature(&mut self, delta: isize) {
        let len = FEATURES.len() as isize;
        let next = self.selected_feature as isize + delta;
        if (0..len).contains(&next) {
            self.selected_feature = next as usize;
        }
        self.hovered_feature = None;
        self.show_selection = true;
    }

    fn handle_menu_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('a') => {
                self.menu.close();
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
                self.menu.prev();
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                self.menu.next();
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let item = self.menu.selected();
                self.activate(item)
            }
            _ => Action::None,
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.focus = DashboardFocus::Features,
            KeyCode::Tab => self.set_focus(self.focus.next()),
            KeyCode::BackTab => self.set_focus(self.focus.prev()),
            KeyCode::Backspace => {
                self.search.pop();
            }
            KeyCode::Char(ch) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    if ch == 'u' {
                        self.search.clear();
                    }
                    return Action::None;
                }
                self.search.push(ch);
            }
            _ => {}
        }
        Action::None
    }

    fn handle_enter(&mut self) -> Action {
        match self.focus {
            DashboardFocus::Account => {
                self.menu.toggle();
                Action::None
            }
            DashboardFocus::Search => Action::None,
            DashboardFocus::Notifications => Action::None,
            DashboardFocus::Features => {
                if let Some(card) = FEATURES.get(self.selected_feature) {
                    tracing::debug!(card = card.title, "feature card has no destination");
                }
                Action::None
            }
        }
    }
}

impl Module for Dashboard {
    fn id(&self) -> &'static str {
        "dashboard"
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &Context) -> Action {
        if self.menu.is_open() {
            return self.handle_menu_key(key);
        }
        if self.focus == DashboardFocus::Search {
            return self.handle_search_key(key);
        }

        let columns = self.columns as isize;
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Tab => {
                self.set_focus(self.focus.next());
                Action::None
            }
            KeyCode::BackTab => {
                self.set_focus(self.focus.prev());
                Action::None
            }
            KeyCode::Char('/') => {
                self.focus = DashboardFocus::Search;
                Action::None
            }
            KeyCode::Char('a') => {
                self.focus = DashboardFocus::Account;
                self.menu.open();
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.handle_enter(),
            KeyCode::Esc => {
                self.focus = DashboardFocus::Features;
                Action::None
            }
            KeyCode::Left | KeyCode::Char('h') if self.focus == DashboardFocus::Features => {
                self.move_feature(-1);
                Action::None
            }
            KeyCode::Right | KeyCode::Char('l') if self.focus == DashboardFocus::Features => {
                self.move_feature(1);
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') if self.focus == DashboardFocus::Features => {
                self.move_feature(-columns);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') if self.focus == DashboardFocus::Features => {
                self.move_feature(columns);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect, ctx: &Context) -> Action {
        let areas = view::areas(area, ctx);
        self.set_columns(areas.breakpoint.feature_columns());
        let (col, row) = (mouse.column, mouse.row);
        let feature_at = areas
            .features
            .iter()
            .position(|rect| rect_contains(*rect, col, row));

        match mouse.kind {
            MouseEventKind::Moved => {
                self.hovered_feature = feature_at;
                Action::None
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if self.menu.is_open() {
                    let menu_area = layout::account_menu_area(areas.account, area);
                    if rect_contains(menu_area, col, row) {
                        let inner_row = row.saturating_sub(menu_area.y + 1);
                        return match MenuItem::at_row(inner_row) {
                            Some(item) => self.activate(item),
                            None => Action::None,
                        };
                    }
                    self.menu.close();
                    if rect_contains(areas.account, col, row) {
                        return Action::None;
                    }
                }

                if rect_contains(areas.account, col, row) {
                    self.focus = DashboardFocus::Account;
                    self.menu.toggle();
                } else if areas
                    .search
                    .is_some_and(|search| rect_contains(search, col, row))
                {
                    self.focus = DashboardFocus::Search;
                } else if rect_contains(areas.bell, col, row) {
                    self.focus = DashboardFocus::Notifications;
                } else if let Some(index) = feature_at {
                    self.set_focus(DashboardFocus::Features);
                    self.selected_feature = index;
                    return self.handle_enter();
                }
                Action::None
            }
            _ => Action::None,
        }
    }

    fn captures_text(&self) -> bool {
        self.focus == DashboardFocus::Search && !self.menu.is_open()
    }

    fn remount(&mut self) {
        let columns = self.columns;
        *self = Self::new();
        self.columns = columns;
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        view::render(self, frame, area, ctx);
    }
}
