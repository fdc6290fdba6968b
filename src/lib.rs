//! Terminal dashboard: navigation bar, welcome header, stat cards and
//! feature cards with entry motion, plus the host pieces (routing, toasts,
//! session placeholder) it runs against.

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod dump;
pub mod error;
pub mod logging;
pub mod modules;
pub mod ui;

pub use app::{App, AppSettings};
pub use error::{DashError, Result};
