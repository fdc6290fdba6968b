//! Fixed stat and feature card lists

use std::time::Duration;

use serde::Serialize;

use super::icon::{Gradient, Icon};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatItem {
    pub label: &'static str,
    /// Pre-formatted, shown verbatim.
    pub value: &'static str,
    /// Pre-formatted, shown verbatim and always styled as positive.
    pub change: &'static str,
    pub icon: Icon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub gradient: Gradient,
    pub animation_delay_ms: u64,
}

impl FeatureCard {
    pub fn animation_delay(&self) -> Duration {
        Duration::from_millis(self.animation_delay_ms)
    }
}

pub const STATS: [StatItem; 3] = [
    StatItem {
        label: "Total Users",
        value: "2,543",
        change: "+12.5%",
        icon: Icon::Users,
    },
    StatItem {
        label: "Revenue",
        value: "$45,231",
        change: "+23.1%",
        icon: Icon::DollarSign,
    },
    StatItem {
        label: "Growth",
        value: "89.2%",
        change: "+5.2%",
        icon: Icon::TrendingUp,
    },
];

pub const FEATURES: [FeatureCard; 4] = [
    FeatureCard {
        title: "Profile",
        description: "Manage your personal information and preferences",
        icon: Icon::User,
        gradient: Gradient::Blue,
        animation_delay_ms: 100,
    },
    FeatureCard {
        title: "Analytics",
        description: "View detailed insights and performance metrics",
        icon: Icon::BarChart,
        gradient: Gradient::Purple,
        animation_delay_ms: 200,
    },
    FeatureCard {
        title: "Settings",
        description: "Configure your account and application settings",
        icon: Icon::Settings,
        gradient: Gradient::Green,
        animation_delay_ms: 300,
    },
    FeatureCard {
        title: "Activity",
        description: "Track your recent activities and engagement",
        icon: Icon::Activity,
        gradient: Gradient::Orange,
        animation_delay_ms: 400,
    },
];
