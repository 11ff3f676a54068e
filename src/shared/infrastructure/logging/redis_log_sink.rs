use std::time::Duration;

use async_trait::async_trait;
use redis::{AsyncCommands, aio::MultiplexedConnection};

use crate::shared::infrastructure::logging::{
    log_record::LogRecord,
    log_sink::{LogSink, LogSinkError},
};

pub const LOG_EXPIRATION: Duration = Duration::from_secs(12 * 60 * 60);

#[derive(Clone)]
pub struct RedisLogSink {
    connection: MultiplexedConnection,
    expiration: Duration,
}

impl RedisLogSink {
    /// Opens a connection and checks it with `PING`.
    pub async fn connect(url: &str) -> Result<Self, LogSinkError> {
        let client = redis::Client::open(url)
            .map_err(|e| LogSinkError::Unavailable(format!("failed to open Redis client: {e}")))?;

        let mut connection = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| LogSinkError::Unavailable(format!("failed to get connection: {e}")))?;

        let _: String = redis::cmd("PING")
            .query_async(&mut connection)
            .await
            .map_err(|e| LogSinkError::Unavailable(format!("PING failed: {e}")))?;

        Ok(Self {
            connection,
            expiration: LOG_EXPIRATION,
        })
    }

    pub fn with_expiration(mut self, expiration: Duration) -> Self {
        self.expiration = expiration;
        self
    }
}

#[async_trait]
impl LogSink for RedisLogSink {
    async fn store(&self, record: &LogRecord) -> Result<(), LogSinkError> {
        let mut connection = self.connection.clone();

        let _: () = connection
            .set_ex(
                record.storage_key(),
                &record.message,
                self.expiration.as_secs().max(1),
            )
            .await
            .map_err(|e| LogSinkError::WriteFailed(format!("SET failed: {e}")))?;

        Ok(())
    }
}
