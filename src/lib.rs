pub mod config;
pub mod error_shaping;
pub mod notifications;
pub mod query_params;
pub mod remote_calls;
pub mod shared;
