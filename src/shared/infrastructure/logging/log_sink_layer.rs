use std::{collections::BTreeMap, fmt, sync::Arc};

use chrono::Utc;
use tokio::{sync::mpsc, task::JoinHandle};
use tracing::{
    Event, Level, Subscriber,
    field::{Field, Visit},
};
use tracing_subscriber::{Layer, layer::Context};

use crate::shared::infrastructure::logging::{log_record::LogRecord, log_sink::LogSink};

// Events under this target are never forwarded, so sink failures can be
// logged without feeding back into the sink.
const FORWARDER_TARGET: &str = "log_sink_forwarder";

/// Tracing layer that hands every event from DEBUG up to a log sink.
///
/// Events are captured synchronously and shipped over a channel; the sink
/// writes happen on the task started by `spawn_log_forwarder`.
#[derive(Clone)]
pub struct LogSinkLayer {
    sender: mpsc::UnboundedSender<LogRecord>,
}

impl LogSinkLayer {
    pub fn new(sender: mpsc::UnboundedSender<LogRecord>) -> Self {
        Self { sender }
    }
}

impl<S> Layer<S> for LogSinkLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if *metadata.level() == Level::TRACE || metadata.target() == FORWARDER_TARGET {
            return;
        }

        let mut visitor = RecordVisitor::default();
        event.record(&mut visitor);

        // A closed channel only means the forwarder has stopped.
        let _ = self.sender.send(LogRecord {
            time: Utc::now(),
            level: *metadata.level(),
            message: visitor.message,
            fields: visitor.fields,
        });
    }
}

#[derive(Default)]
struct RecordVisitor {
    message: String,
    fields: BTreeMap<String, String>,
}

impl RecordVisitor {
    fn insert(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            self.message = value;
        } else {
            self.fields.insert(field.name().to_string(), value);
        }
    }
}

impl Visit for RecordVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.insert(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.insert(field, format!("{:?}", value));
    }
}

/// Starts the task that drains captured records into `sink` and returns
/// the layer feeding it.
pub fn spawn_log_forwarder(sink: Arc<dyn LogSink>) -> (LogSinkLayer, JoinHandle<()>) {
    let (sender, mut receiver) = mpsc::unbounded_channel::<LogRecord>();

    let handle = tokio::spawn(async move {
        while let Some(record) = receiver.recv().await {
            if let Err(error) = sink.store(&record).await {
                tracing::warn!(target: FORWARDER_TARGET, error = %error, "could not store log record");
            }
        }
    });

    (LogSinkLayer::new(sender), handle)
}
