//! Port for structured logging of backend exchanges.
//!
//! Records every search query, completion prompt, raw completion text and
//! backend error in a machine-readable transcript. This is separate from
//! `tracing` diagnostics: failed model output is kept here in full so a
//! normalization failure can be investigated without leaking the text into
//! user-facing error messages.

use serde_json::Value;
use skillpath_domain::Stage;

/// A structured exchange event for logging.
pub struct ExchangeEvent {
    /// Event type identifier (e.g., "completion_request", "search_error").
    pub event_type: &'static str,
    /// Pipeline stage that produced the event.
    pub stage: Stage,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ExchangeEvent {
    pub fn new(event_type: &'static str, stage: Stage, payload: Value) -> Self {
        Self {
            event_type,
            stage,
            payload,
        }
    }
}

/// Port for logging exchange events.
///
/// `log` is synchronous and infallible; logging failures never disturb the
/// pipeline.
pub trait ExchangeLogger: Send + Sync {
    fn log(&self, event: ExchangeEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoExchangeLogger;

impl ExchangeLogger for NoExchangeLogger {
    fn log(&self, _event: ExchangeEvent) {}
}
