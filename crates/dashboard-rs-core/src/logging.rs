//! Logging integration for dashboard-rs.
//!
//! Provides helpers for configuring [`tracing`]-based logging from
//! [`FormSettings`](crate::settings::FormSettings) and for creating per-form spans.

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use crate::settings::FormSettings;

/// Target of the form-state crate's diagnostics.
const FORMS_TARGET: &str = "dashboard_rs_forms";

/// Builds the event filter for `settings`.
///
/// `log_level` accepts any `EnvFilter` directive string and falls back to
/// "info" when it does not parse. With `log_unknown_fields` on, the form
/// layer always keeps its `error` level so unknown-field reports survive a
/// quieter global level. Debug mode also raises the form layer to `debug`,
/// which shows snapshot adoption during re-renders.
pub fn env_filter(settings: &FormSettings) -> EnvFilter {
    let filter =
        EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let forms_level = if settings.debug {
        Some("debug")
    } else if settings.log_unknown_fields {
        Some("error")
    } else {
        None
    };
    match forms_level.map(|level| format!("{FORMS_TARGET}={level}").parse::<Directive>()) {
        Some(Ok(directive)) => filter.add_directive(directive),
        _ => filter,
    }
}

/// Sets up the global tracing subscriber based on the given settings.
///
/// Debug mode logs in a compact human-readable format with source locations;
/// otherwise events are emitted as JSON. Installing a second subscriber is a
/// no-op.
pub fn setup_logging(settings: &FormSettings) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_target(true);

    let installed = if settings.debug {
        builder
            .compact()
            .with_file(true)
            .with_line_number(true)
            .try_init()
    } else {
        builder.json().try_init()
    };
    if installed.is_err() {
        tracing::debug!("A global subscriber is already installed; keeping it");
    }
}

/// Creates a tracing span for one form session.
///
/// Enter this span while handling a form's events so that every diagnostic
/// emitted by the form state carries the form's name.
///
/// # Examples
///
/// ```
/// use dashboard_rs_core::logging::form_span;
///
/// let span = form_span("sale-create");
/// let _guard = span.enter();
/// tracing::info!("form mounted");
/// ```
pub fn form_span(form_name: &str) -> tracing::Span {
    tracing::info_span!("form", name = form_name)
}
