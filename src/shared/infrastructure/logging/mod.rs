pub mod log_record;
pub mod log_sink;
pub mod log_sink_layer;
pub mod redis_log_sink;
pub mod tracing_setup;
