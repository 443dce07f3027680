//! # dashboard-rs-core
//!
//! Core error types, settings, and logging for the dashboard-rs form layer.
//! This crate has no framework dependencies and provides the foundation for the
//! other crates.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`settings`] - Form settings with sensible defaults
//! - [`settings_loader`] - Loading settings from TOML, JSON, and the environment
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;

// Re-export the most commonly used types at the crate root.
pub use error::{FormError, FormResult};
pub use settings::FormSettings;
