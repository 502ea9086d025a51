//! Observability for the chocolate house backend
//!
//! Two layers:
//! - `Logger`: synchronous structured JSON lines for lifecycle and failure events
//! - `tracing` spans emitted per request by the HTTP layer (see `init_tracing`)
//!
//! # Usage
//!
//! ```ignore
//! use chocolate_house::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::SeedApplied, &[("rows", "7")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

use tracing_subscriber::{fmt, EnvFilter};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}

/// Install the global `tracing` subscriber used for request spans.
///
/// Filtering follows `RUST_LOG`; by default request spans from `tower_http`
/// are shown at debug level. Safe to call more than once.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("chocolate_house=info,tower_http=debug"));

    let _ = fmt().with_env_filter(filter).try_init();
}
