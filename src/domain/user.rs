//! Display name of the signed-in user and the text derived from it

use serde::Serialize;

/// Display name for the current session.
///
/// Only ever split on whitespace; nothing here validates or normalizes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UserName(String);

impl UserName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First character of every whitespace-separated token.
    pub fn initials(&self) -> String {
        self.0
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }

    /// First token, or an empty string for a blank name.
    pub fn first_name(&self) -> &str {
        self.0.split_whitespace().next().unwrap_or("")
    }

    pub fn greeting(&self) -> String {
        format!("Welcome back, {}! 👋", self.first_name())
    }
}

impl Default for UserName {
    fn default() -> Self {
        Self::new(DEFAULT_USER_NAME)
    }
}

impl std::fmt::Display for UserName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

pub const DEFAULT_USER_NAME: &str = "John Doe";
