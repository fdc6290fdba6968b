//! Module trait for routed screens

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use ratatui::Frame;

use super::{Action, Context};

/// Trait for UI modules that can handle input and draw themselves
pub trait Module {
    /// Name used in log lines
    fn id(&self) -> &'static str;

    /// Handle keyboard input
    /// Returns an Action describing what should happen
    fn handle_key(&mut self, key: KeyEvent, ctx: &Context) -> Action;

    /// Handle mouse input; `area` is the region the module was last drawn in
    fn handle_mouse(&mut self, _mouse: MouseEvent, _area: Rect, _ctx: &Context) -> Action {
        Action::None
    }

    /// True while the module is consuming raw text input
    fn captures_text(&self) -> bool {
        false
    }

    /// Called when the module's route is shown again
    fn remount(&mut self) {}

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context);
}
