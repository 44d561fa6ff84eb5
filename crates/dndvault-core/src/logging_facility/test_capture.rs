//! In-memory event capture for logging assertions in tests.
//!
//! [`init_test_capture`] installs a recording layer as the process-wide
//! subscriber. Tests in one binary share it, so queries should narrow by a
//! unique op name or a correlation field such as `request_id`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::field::{Field, Visit};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// One recorded event; every field value is kept in its text form.
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn op(&self) -> Option<&str> {
        self.field("op")
    }

    /// Lifecycle marker (`start`, `end`, `end_error`), if any
    pub fn event(&self) -> Option<&str> {
        self.field("event")
    }
}

struct TextFields(HashMap<String, String>);

impl Visit for TextFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    // integers and bools arrive here too; their Debug form is the plain value
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{:?}", value));
    }
}

struct CaptureLayer {
    sink: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = TextFields(HashMap::new());
        event.record(&mut fields);
        let captured = CapturedEvent {
            level: *event.metadata().level(),
            fields: fields.0,
        };
        if let Ok(mut sink) = self.sink.lock() {
            sink.push(captured);
        }
    }
}

/// Read handle onto the shared event log.
#[derive(Clone)]
pub struct TestCapture {
    sink: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCapture {
    /// Every event recorded so far, oldest first
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.sink.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Events of `op` at one lifecycle marker
    pub fn lifecycle(&self, op: &str, event: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.op() == Some(op) && e.event() == Some(event))
            .collect()
    }

    /// Events of `op` whose `field` equals `value`, in emission order
    pub fn correlated(&self, op: &str, field: &str, value: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.op() == Some(op) && e.field(field) == Some(value))
            .collect()
    }

    /// Events at exactly `level` emitted for `op`
    pub fn at_level(&self, op: &str, level: Level) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.level == level && e.op() == Some(op))
            .collect()
    }
}

static CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture layer on first call and return the shared handle.
///
/// ```
/// use dndvault_core::log_op_start;
/// use dndvault_core::logging_facility::test_capture::init_test_capture;
///
/// let capture = init_test_capture();
/// log_op_start!("doc_capture_op");
/// assert_eq!(capture.lifecycle("doc_capture_op", "start").len(), 1);
/// ```
pub fn init_test_capture() -> TestCapture {
    CAPTURE
        .get_or_init(|| {
            let sink = Arc::new(Mutex::new(Vec::new()));
            tracing_subscriber::registry()
                .with(CaptureLayer { sink: sink.clone() })
                .init();
            TestCapture { sink }
        })
        .clone()
}
