use async_trait::async_trait;
use thiserror::Error;

use crate::shared::infrastructure::logging::log_record::LogRecord;

#[derive(Debug, Error)]
pub enum LogSinkError {
    #[error("log sink unavailable: {0}")]
    Unavailable(String),

    #[error("log sink write failed: {0}")]
    WriteFailed(String),
}

/// Destination that keeps a copy of every forwarded log record.
#[async_trait]
pub trait LogSink: Send + Sync {
    async fn store(&self, record: &LogRecord) -> Result<(), LogSinkError>;
}
