//! Logging setup.
//!
//! Parsers emit `tracing` events only. This module installs a subscriber for
//! them, controlled by environment variables.
//!
//! # Environment Variables
//!
//! - `DBURL_DEBUG=true` - Enable debug logging (`1` and `yes` also work)
//! - `DBURL_LOG_LEVEL=debug|info|warn|error|trace` - Set specific log level
//! - `DBURL_LOG_FORMAT=json|pretty|compact` - Set output format (default: json)
//!
//! # Usage
//!
//! ```rust,no_run
//! use dburl_parser::logging;
//!
//! // Initialize logging (call once at startup)
//! logging::init();
//!
//! // Or with an explicit level
//! logging::init_with_level("trace");
//! ```

use std::env;
use std::sync::Once;

static INIT: Once = Once::new();

const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Check if debug logging is enabled via `DBURL_DEBUG`.
#[inline]
pub fn is_debug_enabled() -> bool {
    env::var("DBURL_DEBUG").is_ok_and(|v| is_truthy(&v))
}

/// Get the configured log level from `DBURL_LOG_LEVEL`.
///
/// Defaults to "debug" if `DBURL_DEBUG` is enabled, otherwise "warn".
pub fn get_log_level() -> &'static str {
    resolve_level(env::var("DBURL_LOG_LEVEL").ok().as_deref(), is_debug_enabled())
}

/// Get the configured log format from `DBURL_LOG_FORMAT`.
pub fn get_log_format() -> &'static str {
    resolve_format(env::var("DBURL_LOG_FORMAT").ok().as_deref())
}

/// Initialize logging from the environment.
///
/// Does nothing unless `DBURL_DEBUG` or `DBURL_LOG_LEVEL` is set. Subsequent
/// calls are no-ops.
pub fn init() {
    if !is_debug_enabled() && env::var("DBURL_LOG_LEVEL").is_err() {
        return;
    }
    install(get_log_level(), get_log_format());
}

/// Initialize logging with a specific level, ignoring `DBURL_LOG_LEVEL`.
///
/// Unknown levels fall back to "warn". Subsequent calls are no-ops.
pub fn init_with_level(level: &str) {
    install(resolve_level(Some(level), false), get_log_format());
}

#[cfg_attr(not(feature = "tracing-subscriber"), allow(unused_variables))]
fn install(level: &'static str, format: &'static str) {
    INIT.call_once(|| {
        #[cfg(feature = "tracing-subscriber")]
        {
            use tracing_subscriber::{EnvFilter, fmt, prelude::*};

            let filter = EnvFilter::try_new(format!(
                "dburl={level},dburl_parser={level},dburl_cli={level}"
            ))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

            let registry = tracing_subscriber::registry().with(filter);
            let installed = match format {
                "json" => registry.with(fmt::layer().json().with_writer(std::io::stderr)).try_init(),
                "compact" => registry
                    .with(fmt::layer().compact().with_writer(std::io::stderr))
                    .try_init(),
                _ => registry
                    .with(fmt::layer().pretty().with_writer(std::io::stderr))
                    .try_init(),
            };

            if installed.is_ok() {
                tracing::info!(level, format, "dburl logging initialized");
            }
        }
    });
}

fn is_truthy(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1" | "yes")
}

fn resolve_level(requested: Option<&str>, debug: bool) -> &'static str {
    let fallback = if debug { "debug" } else { "warn" };
    requested
        .map(str::to_lowercase)
        .and_then(|level| LEVELS.into_iter().find(|l| *l == level))
        .unwrap_or(fallback)
}

fn resolve_format(requested: Option<&str>) -> &'static str {
    match requested.map(str::to_lowercase).as_deref() {
        Some("pretty") => "pretty",
        Some("compact") => "compact",
        _ => "json",
    }
}
