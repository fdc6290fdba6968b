pub mod cards;
pub mod icon;
pub mod user;

pub use cards::{FeatureCard, StatItem, FEATURES, STATS};
pub use icon::{GlyphSet, Gradient, Icon};
pub use user::UserName;

use serde::Serialize;

pub const WELCOME_SUBTEXT: &str = "Here's what's happening with your account today.";

/// Everything the dashboard shows, derived from the user name alone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardModel {
    pub display_name: String,
    pub initials: String,
    pub greeting: String,
    pub subtext: &'static str,
    pub stats: &'static [StatItem],
    pub features: &'static [FeatureCard],
}

impl DashboardModel {
    pub fn build(user: &UserName) -> Self {
        Self {
            display_name: user.as_str().to_string(),
            initials: user.initials(),
            greeting: user.greeting(),
            subtext: WELCOME_SUBTEXT,
            stats: &STATS,
            features: &FEATURES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_is_pure() {
        let user = UserName::new("John Doe");
        assert_eq!(DashboardModel::build(&user), DashboardModel::build(&user));
    }

    #[test]
    fn test_model_json_shape() {
        let model = DashboardModel::build(&UserName::new("John Doe"));
        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["initials"], "JD");
        assert_eq!(json["stats"][1]["label"], "Revenue");
        assert_eq!(json["stats"][2]["icon"], "trending-up");
        assert_eq!(json["features"][3]["gradient"], "orange");
    }
}
