//! Error type for the host side of the dashboard (config, terminal, logging, dumps)

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashError {
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid setting `{key}`: {message}")]
    InvalidSetting { key: &'static str, message: String },

    #[error("failed to set up logging: {message}")]
    Logging { message: String },

    #[error("failed to encode dashboard: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DashError>;
