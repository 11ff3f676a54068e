use std::sync::Mutex;

use async_trait::async_trait;
use microservice_toolkit::shared::infrastructure::logging::{
    log_record::LogRecord,
    log_sink::{LogSink, LogSinkError},
};

#[derive(Default)]
pub struct FakeLogSink {
    pub records: Mutex<Vec<LogRecord>>,
    pub fail: bool,
}

impl FakeLogSink {
    pub fn failing() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().expect("mutex poisoned").clone()
    }
}

#[async_trait]
impl LogSink for FakeLogSink {
    async fn store(&self, record: &LogRecord) -> Result<(), LogSinkError> {
        if self.fail {
            return Err(LogSinkError::WriteFailed("disk full".to_string()));
        }
        self.records
            .lock()
            .expect("mutex poisoned")
            .push(record.clone());
        Ok(())
    }
}
