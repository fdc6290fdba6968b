//! Symbolic icon and gradient references
//!
//! Cards and menu entries only name an [`Icon`] or a [`Gradient`]; the host
//! resolves them to glyphs and colours when drawing.

use ratatui::style::Color;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Menu,
    Search,
    Bell,
    User,
    Settings,
    BarChart,
    LogOut,
    TrendingUp,
    Users,
    DollarSign,
    Activity,
}

/// Which glyph table the host draws icons with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphSet {
    #[default]
    Unicode,
    Ascii,
}

impl GlyphSet {
    pub fn glyph(&self, icon: Icon) -> &'static str {
        match self {
            GlyphSet::Unicode => match icon {
                Icon::Menu => "☰",
                Icon::Search => "⌕",
                Icon::Bell => "🔔",
                Icon::User => "👤",
                Icon::Settings => "⚙",
                Icon::BarChart => "📊",
                Icon::LogOut => "⏻",
                Icon::TrendingUp => "📈",
                Icon::Users => "👥",
                Icon::DollarSign => "$",
                Icon::Activity => "∿",
            },
            GlyphSet::Ascii => match icon {
                Icon::Menu => "=",
                Icon::Search => "/",
                Icon::Bell => "!",
                Icon::User => "@",
                Icon::Settings => "*",
                Icon::BarChart => "#",
                Icon::LogOut => "x",
                Icon::TrendingUp => "^",
                Icon::Users => "&",
                Icon::DollarSign => "$",
                Icon::Activity => "~",
            },
        }
    }

    /// Marker drawn next to the bell while notifications are unread.
    pub fn unread_dot(&self) -> &'static str {
        match self {
            GlyphSet::Unicode => "●",
            GlyphSet::Ascii => "*",
        }
    }
}

/// Two-stop colour ramp for feature card badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gradient {
    Blue,
    Purple,
    Green,
    Orange,
}

impl Gradient {
    pub fn stops(&self) -> (Color, Color) {
        match self {
            Gradient::Blue => (Color::Rgb(59, 130, 246), Color::Rgb(37, 99, 235)),
            Gradient::Purple => (Color::Rgb(168, 85, 247), Color::Rgb(147, 51, 234)),
            Gradient::Green => (Color::Rgb(34, 197, 94), Color::Rgb(22, 163, 74)),
            Gradient::Orange => (Color::Rgb(249, 115, 22), Color::Rgb(234, 88, 12)),
        }
    }
}
