//! Entry motion for the dashboard
//!
//! Every element slides a couple of rows and fades in once after mount. The
//! pose is a pure function of the time since mount, so redraws never need to
//! remember anything beyond the mount instant.

use std::time::Duration;

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::core::Context;
use crate::domain::FeatureCard;

pub const ENTRANCE_DURATION: Duration = Duration::from_millis(400);
pub const ENTRANCE_ROWS: i16 = 2;
const STAT_STAGGER: Duration = Duration::from_millis(100);
const WELCOME_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Above,
    Below,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entrance {
    pub delay: Duration,
    pub origin: Origin,
}

impl Entrance {
    pub fn nav() -> Self {
        Self {
            delay: Duration::ZERO,
            origin: Origin::Above,
        }
    }

    pub fn welcome() -> Self {
        Self {
            delay: WELCOME_DELAY,
            origin: Origin::Below,
        }
    }

    pub fn stat(index: usize) -> Self {
        Self {
            delay: WELCOME_DELAY + STAT_STAGGER * index as u32,
            origin: Origin::Below,
        }
    }

    pub fn feature(card: &FeatureCard) -> Self {
        Self {
            delay: card.animation_delay(),
            origin: Origin::Below,
        }
    }

    /// Eased progress in `0.0..=1.0`.
    pub fn progress(&self, since_mount: Duration) -> f32 {
        let Some(elapsed) = since_mount.checked_sub(self.delay) else {
            return 0.0;
        };
        let t = (elapsed.as_secs_f32() / ENTRANCE_DURATION.as_secs_f32()).clamp(0.0, 1.0);
        ease_out_cubic(t)
    }

    pub fn pose(&self, ctx: &Context) -> Pose {
        if !ctx.animations {
            return Pose::REST;
        }
        let progress = self.progress(ctx.since_mount);
        let travel = (f32::from(ENTRANCE_ROWS) * (1.0 - progress)).round() as i16;
        let offset = match self.origin {
            Origin::Above => -travel,
            Origin::Below => travel,
        };
        Pose {
            offset,
            opacity: progress,
        }
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Rows away from the resting position; negative is up.
    pub offset: i16,
    pub opacity: f32,
}

impl Pose {
    pub const REST: Pose = Pose {
        offset: 0,
        opacity: 1.0,
    };

    pub fn visible(&self) -> bool {
        self.opacity >= 0.2
    }

    pub fn fade(&self, style: Style) -> Style {
        if self.opacity < 0.6 {
            style.add_modifier(Modifier::DIM)
        } else {
            style
        }
    }

    /// Shifts `area` by the offset, clipped to `bounds`.
    pub fn place(&self, area: Rect, bounds: Rect) -> Option<Rect> {
        if !self.visible() {
            return None;
        }
        let top = i32::from(area.y) + i32::from(self.offset);
        let bottom = top + i32::from(area.height);
        let top = top.max(i32::from(bounds.y));
        let bottom = bottom.min(i32::from(bounds.y) + i32::from(bounds.height));
        if bottom <= top {
            return None;
        }
        Some(Rect {
            x: area.x,
            y: top as u16,
            width: area.width,
            height: (bottom - top) as u16,
        })
    }
}
