//! Settings for the dashboard-rs form layer.
//!
//! This module provides the [`FormSettings`] struct, which holds the knobs a
//! form session reads: how server error paths are split, whether unknown field
//! edits are reported, and how logging is configured.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The complete set of form settings.
///
/// # Examples
///
/// ```
/// use dashboard_rs_core::settings::FormSettings;
///
/// let settings = FormSettings::default();
/// assert!(settings.debug);
/// assert_eq!(settings.error_path_separator, ':');
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSettings {
    // ── Core ─────────────────────────────────────────────────────────

    /// Whether debug mode is enabled.
    pub debug: bool,

    // ── Form state ───────────────────────────────────────────────────

    /// Separator between the top-level field name and the sub-path in
    /// server error field keys (e.g. `price:amount`).
    pub error_path_separator: char,
    /// Whether a change naming an unknown field is reported at `error` level.
    pub log_unknown_fields: bool,

    // ── Logging ──────────────────────────────────────────────────────

    /// The log level (e.g. "info", "debug", "warn").
    pub log_level: String,

    // ── Escape hatch ─────────────────────────────────────────────────

    /// Custom settings that don't fit into the above categories.
    pub extra: HashMap<String, serde_json::Value>,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            debug: true,
            error_path_separator: ':',
            log_unknown_fields: true,
            log_level: "info".to_string(),
            extra: HashMap::new(),
        }
    }
}
