//! Account dropdown state

use crate::domain::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Profile,
    Settings,
    Logout,
}

impl MenuItem {
    pub const ALL: [MenuItem; 3] = [MenuItem::Profile, MenuItem::Settings, MenuItem::Logout];

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Profile => "Profile",
            MenuItem::Settings => "Settings",
            MenuItem::Logout => "Logout",
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            MenuItem::Profile => Icon::User,
            MenuItem::Settings => Icon::Settings,
            MenuItem::Logout => Icon::LogOut,
        }
    }

    pub fn destructive(&self) -> bool {
        matches!(self, MenuItem::Logout)
    }

    /// Row inside the menu border: label, separator, Profile, Settings,
    /// separator, Logout.
    pub fn row(&self) -> u16 {
        match self {
            MenuItem::Profile => 2,
            MenuItem::Settings => 3,
            MenuItem::Logout => 5,
        }
    }

    pub fn at_row(row: u16) -> Option<MenuItem> {
        MenuItem::ALL.into_iter().find(|item| item.row() == row)
    }
}

pub const MENU_LABEL: &str = "My Account";
pub const SEPARATOR_ROWS: [u16; 2] = [1, 4];

#[derive(Debug, Clone, Default)]
pub struct AccountMenu {
    open: bool,
    selected: usize,
}

impl AccountMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
        self.selected = 0;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn selected(&self) -> MenuItem {
        MenuItem::ALL[self.selected.min(MenuItem::ALL.len() - 1)]
    }

    pub fn select(&mut self, item: MenuItem) {
        if let Some(index) = MenuItem::ALL.iter().position(|i| *i == item) {
            self.selected = index;
        }
    }

    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % MenuItem::ALL.len();
    }

    pub fn prev(&mut self) {
        self.selected = (self.selected + MenuItem::ALL.len() - 1) % MenuItem::ALL.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_wraps() {
        let mut menu = AccountMenu::default();
        menu.open();
        assert_eq!(menu.selected(), MenuItem::Profile);
        menu.prev();
        assert_eq!(menu.selected(), MenuItem::Logout);
        menu.next();
        assert_eq!(menu.selected(), MenuItem::Profile);
    }

    #[test]
    fn test_reopen_resets_selection() {
        let mut menu = AccountMenu::default();
        menu.toggle();
        menu.select(MenuItem::Logout);
        menu.toggle();
        assert!(!menu.is_open());
        menu.toggle();
        assert_eq!(menu.selected(), MenuItem::Profile);
    }

    #[test]
    fn test_rows_skip_label_and_separators() {
        assert_eq!(MenuItem::at_row(0), None);
        assert_eq!(MenuItem::at_row(1), None);
        assert_eq!(MenuItem::at_row(2), Some(MenuItem::Profile));
        assert_eq!(MenuItem::at_row(4), None);
        assert_eq!(MenuItem::at_row(5), Some(MenuItem::Logout));
    }
}
