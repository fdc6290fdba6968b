use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::domain::user::DEFAULT_USER_NAME;
use crate::domain::GlyphSet;
use crate::error::{DashError, Result};

const CONFIG_ENV: &str = "DASHVIEW_CONFIG";
const MAX_TICK_RATE_MS: u64 = 1_000;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Display name shown in the account menu and greeting
    pub user_name: String,

    /// Event poll timeout; also the animation frame interval
    pub tick_rate_ms: u64,

    /// How long a toast stays on screen
    pub toast_ttl_ms: u64,

    pub animations: bool,

    pub ascii_icons: bool,

    /// Used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_name: DEFAULT_USER_NAME.to_string(),
            tick_rate_ms: 50,
            toast_ttl_ms: 3_000,
            animations: true,
            ascii_icons: false,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.tick_rate_ms == 0 || self.tick_rate_ms > MAX_TICK_RATE_MS {
            return Err(DashError::InvalidSetting {
                key: "tick_rate_ms",
                message: format!("must be between 1 and {MAX_TICK_RATE_MS}"),
            });
        }
        if self.toast_ttl_ms == 0 {
            return Err(DashError::InvalidSetting {
                key: "toast_ttl_ms",
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn toast_ttl(&self) -> Duration {
        Duration::from_millis(self.toast_ttl_ms)
    }

    pub fn glyphs(&self) -> GlyphSet {
        if self.ascii_icons {
            GlyphSet::Ascii
        } else {
            GlyphSet::Unicode
        }
    }
}

/// Loads the config at `explicit`, or at [`config_path`] when `None`.
///
/// A missing file yields the defaults; an unreadable or malformed one is an
/// error.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    let Some(path) = explicit.map(Path::to_path_buf).or_else(config_path) else {
        return Ok(Config::default());
    };
    if explicit.is_none() && !path.exists() {
        return Ok(Config::default());
    }
    load_from(&path)
}

pub fn load_from(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|source| DashError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content, path)
}

fn parse(content: &str, path: &Path) -> Result<Config> {
    let config = toml::from_str::<Config>(content).map_err(|source| DashError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;
    Ok(config)
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV).map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("dashview").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("dashview").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "dashview", "dashview")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("dashview"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("dashview"));
    }
    directories::ProjectDirs::from("io", "dashview", "dashview")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(content: &str) -> Result<Config> {
        parse(content, Path::new("test.toml"))
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(parse_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_override() {
        let config = parse_str("user_name = \"Ada Lovelace\"\nascii_icons = true\n").unwrap();
        assert_eq!(config.user_name, "Ada Lovelace");
        assert_eq!(config.glyphs(), GlyphSet::Ascii);
        assert_eq!(config.toast_ttl(), Duration::from_secs(3));
    }

    #[test]
    fn test_rejects_zero_tick_rate() {
        let err = parse_str("tick_rate_ms = 0").unwrap_err();
        assert!(matches!(
            err,
            DashError::InvalidSetting {
                key: "tick_rate_ms",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_unknown_keys() {
        assert!(matches!(
            parse_str("colour = \"red\""),
            Err(DashError::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let err = load(Some(Path::new("/definitely/not/here/dashview.toml"))).unwrap_err();
        assert!(matches!(err, DashError::ConfigRead { .. }));
    }
}
