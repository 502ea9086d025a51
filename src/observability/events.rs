//! Observable events
//!
//! Every lifecycle step and failure the backend reports is a variant here,
//! so log lines stay greppable by a fixed event name.

use std::fmt;

use super::logger::Severity;

/// Observable events in the chocolate house backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Process startup begins
    BootStart,
    /// Startup complete, ready to serve
    BootComplete,
    /// Shutdown signal received
    ShutdownStart,
    /// Server loop exited
    ShutdownComplete,

    // Configuration
    /// Configuration loaded
    ConfigLoaded,

    // Store
    /// Tables exist (created or already present)
    SchemaReady,
    /// Sample rows inserted into empty tables
    SeedApplied,
    /// Every table already held rows, nothing seeded
    SeedSkipped,

    // Requests
    /// Request rejected with a client error (4xx)
    RequestRejected,
    /// Request failed with a server error (5xx)
    RequestFailed,

    // Server
    /// Listener bound, serving requests
    Serving,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "CHOCO_STARTUP_BEGIN",
            Event::BootComplete => "CHOCO_STARTUP_COMPLETE",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",

            Event::ConfigLoaded => "CONFIG_LOADED",

            Event::SchemaReady => "SCHEMA_READY",
            Event::SeedApplied => "SEED_APPLIED",
            Event::SeedSkipped => "SEED_SKIPPED",

            Event::RequestRejected => "REQUEST_REJECTED",
            Event::RequestFailed => "REQUEST_FAILED",

            Event::Serving => "CHOCO_SERVING",
        }
    }

    /// Severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::RequestRejected => Severity::Warn,
            Event::RequestFailed => Severity::Error,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
