use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::{Event, Subscriber, field::Visit};
use tracing_subscriber::layer::{Context, Layer};

/// Entries kept in the shared buffer and in the window's log view.
pub const MAX_LOG_ENTRIES: usize = 1000;

#[derive(Clone, Debug)]
pub struct LogEntry {
    pub level: tracing::Level,
    pub timestamp: String,
    pub message: String,
    pub target: String,
}

impl LogEntry {
    pub fn new(level: tracing::Level, message: String, target: String) -> Self {
        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        Self {
            level,
            timestamp,
            message,
            target,
        }
    }
}

static LOG_BUFFER: once_cell::sync::Lazy<Arc<Mutex<Vec<LogEntry>>>> =
    once_cell::sync::Lazy::new(|| Arc::new(Mutex::new(Vec::new())));

/// Move everything captured since the last call into `logs`, keeping at most
/// [`MAX_LOG_ENTRIES`]. Returns whether anything arrived.
pub fn drain_into(logs: &mut Vec<LogEntry>) -> bool {
    let Ok(mut buf) = LOG_BUFFER.lock() else {
        return false;
    };
    if buf.is_empty() {
        return false;
    }
    logs.extend(buf.drain(..));
    let len = logs.len();
    if len > MAX_LOG_ENTRIES {
        logs.drain(0..(len - MAX_LOG_ENTRIES));
    }
    true
}

/// Tracing layer that copies events into the window's log buffer.
#[derive(Default)]
pub struct GuiLogLayer;

impl GuiLogLayer {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: Vec<String>,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }
}

impl<S> Layer<S> for GuiLogLayer
where
    S: Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let mut message = if visitor.message.is_empty() {
            metadata.target().to_string()
        } else {
            visitor.message
        };
        if !visitor.fields.is_empty() {
            message.push(' ');
            message.push_str(&visitor.fields.join(" "));
        }

        let entry = LogEntry::new(*metadata.level(), message, metadata.target().to_string());

        if let Ok(mut buf) = LOG_BUFFER.lock() {
            buf.push(entry);
            if buf.len() > MAX_LOG_ENTRIES {
                buf.remove(0);
            }
        }
    }
}
