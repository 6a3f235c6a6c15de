//! Structured JSON logging.
//!
//! One line per event with top-level `timestamp`, `level` and `message`,
//! followed by the event's own fields (`event`, `request_id`, ...).

use tracing::subscriber::SetGlobalDefaultError;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, EnvFilter};

use clinic_records_core::config::DEFAULT_LOG_FILTER;

/// Parse a filter directive, falling back to the default on error.
pub fn env_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Build the service subscriber writing to `writer`.
pub fn subscriber<W>(directive: &str, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    fmt::fmt()
        .with_env_filter(env_filter(directive))
        .json()
        .flatten_event(true)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_target(false)
        .with_current_span(false)
        .with_span_list(false)
        .with_writer(writer)
        .finish()
}

/// Install the subscriber for the whole process, writing to stdout.
pub fn init(directive: &str) -> Result<(), SetGlobalDefaultError> {
    tracing::subscriber::set_global_default(subscriber(directive, std::io::stdout))
}
