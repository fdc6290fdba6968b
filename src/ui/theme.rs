use ratatui::style::Color;

pub const FOREGROUND: Color = Color::White;
pub const MUTED: Color = Color::Gray;
pub const BORDER: Color = Color::DarkGray;
pub const PRIMARY: Color = Color::LightCyan;
pub const PRIMARY_SOFT: Color = Color::Rgb(22, 48, 64);
pub const POSITIVE: Color = Color::LightGreen;
pub const DESTRUCTIVE: Color = Color::LightRed;
pub const INPUT_BG: Color = Color::Rgb(38, 38, 46);
pub const HINT: Color = Color::Yellow;
