//! Routed screens
//!
//! Each module implements the Module trait and handles its own:
//! - Key and mouse input
//! - Rendering
//!
//! Modules:
//! - dashboard: navigation bar, welcome header, stat and feature cards
//! - login: placeholder shown after logout

pub mod dashboard;
pub mod login;
