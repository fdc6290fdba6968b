//! Shared context passed to modules

use std::time::Duration;

use crate::domain::{GlyphSet, UserName};

/// Shared context available to all modules
#[derive(Debug, Clone)]
pub struct Context {
    /// Current user, copied from the session each frame
    pub user: UserName,

    /// Glyph table used for icons
    pub glyphs: GlyphSet,

    /// Time since the current route was mounted
    pub since_mount: Duration,

    /// When false everything renders at rest
    pub animations: bool,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            user: UserName::default(),
            glyphs: GlyphSet::default(),
            since_mount: Duration::ZERO,
            animations: true,
        }
    }
}

impl Context {
    pub fn new(user: UserName, glyphs: GlyphSet, animations: bool) -> Self {
        Self {
            user,
            glyphs,
            since_mount: Duration::ZERO,
            animations,
        }
    }

    pub fn glyph(&self, icon: crate::domain::Icon) -> &'static str {
        self.glyphs.glyph(icon)
    }
}
