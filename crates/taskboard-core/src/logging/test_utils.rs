//! Log capture for tests.
//!
//! [`capture_logs`] installs a thread-local subscriber for the lifetime of the
//! returned guard. `#[tokio::test]` runs on the current thread by default, so
//! events from awaited store and controller calls land in the same buffer.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::field::{Field, Visit};
use tracing::level_filters::LevelFilter;
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

/// One recorded event.
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    /// Severity.
    pub level: Level,
    /// Emitting module path.
    pub target: String,
    /// The event's message.
    pub message: String,
    /// Structured fields other than the message, rendered as text.
    pub fields: BTreeMap<String, String>,
}

impl CapturedEvent {
    /// Text of field `name`, if recorded.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// Handle onto the recorded events. Clones share the buffer.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<CapturedEvent>>>);

impl CapturedLogs {
    /// Snapshot of every event so far, oldest first.
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.0.lock().clone()
    }

    /// Whether an event at `level` has a message containing `needle`.
    pub fn has_event(&self, level: Level, needle: &str) -> bool {
        self.0
            .lock()
            .iter()
            .any(|e| e.level == level && e.message.contains(needle))
    }

    /// How many events were recorded at `level`.
    pub fn count_at_level(&self, level: Level) -> usize {
        self.0.lock().iter().filter(|e| e.level == level).count()
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.0.lock().clear();
    }

    fn push(&self, event: CapturedEvent) {
        self.0.lock().push(event);
    }
}

#[derive(Default)]
struct Fields {
    message: String,
    rest: BTreeMap<String, String>,
}

impl Fields {
    fn put(&mut self, field: &Field, text: String) {
        if field.name() == "message" {
            self.message = text;
        } else {
            let _ = self.rest.insert(field.name().to_string(), text);
        }
    }
}

impl Visit for Fields {
    // `%value` and `?value` both arrive here.
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.put(field, format!("{value:?}"));
    }

    // Plain string literals, without the quotes Debug would add.
    fn record_str(&mut self, field: &Field, value: &str) {
        self.put(field, value.to_string());
    }
}

struct Recorder(CapturedLogs);

impl<S: Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = Fields::default();
        event.record(&mut fields);
        let meta = event.metadata();
        self.0.push(CapturedEvent {
            level: *meta.level(),
            target: meta.target().to_string(),
            message: fields.message,
            fields: fields.rest,
        });
    }
}

/// Record every event on this thread until the guard is dropped.
pub fn capture_logs() -> (CapturedLogs, DefaultGuard) {
    let logs = CapturedLogs::default();
    let guard = tracing_subscriber::registry()
        .with(Recorder(logs.clone()))
        .with(LevelFilter::TRACE)
        .set_default();
    (logs, guard)
}
