pub mod card;

pub use card::{FeatureTile, StatCard};
