use tracing_subscriber::{
    EnvFilter, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
};

use crate::shared::infrastructure::logging::log_sink_layer::LogSinkLayer;

/// Installs the global subscriber: formatted output filtered by
/// `log_filter`, plus the log sink when one is given.
pub fn init_tracing(
    log_filter: &str,
    log_sink_layer: Option<LogSinkLayer>,
) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_new(log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(log_sink_layer)
        .try_init()
}
