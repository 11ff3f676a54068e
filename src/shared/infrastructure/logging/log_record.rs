use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::Level;

#[derive(Clone, Debug, PartialEq)]
pub struct LogRecord {
    pub time: DateTime<Utc>,
    pub level: Level,
    pub message: String,
    pub fields: BTreeMap<String, String>,
}

impl LogRecord {
    /// Key under which the record is stored:
    /// `{time:<rfc3339>}{level:<level>}{fields:{k:v}{k:v}}`.
    pub fn storage_key(&self) -> String {
        let fields: String = self
            .fields
            .iter()
            .map(|(key, value)| format!("{{{}:{}}}", key, value))
            .collect();

        format!(
            "{{time:{}}}{{level:{}}}{{fields:{}}}",
            self.time.to_rfc3339_opts(SecondsFormat::Micros, true),
            self.level.as_str().to_lowercase(),
            fields
        )
    }
}
