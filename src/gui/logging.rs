use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::{Event, Subscriber, field::Visit};
use tracing_subscriber::layer::{Context, Layer};

/// Upper bound on buffered entries; older entries fall off the front.
pub const LOG_CAPACITY: usize = 1000;

#[derive(Clone)]
pub struct LogEntry {
    pub level: tracing::Level,
    pub timestamp: String,
    pub message: String,
    pub target: String,
}

impl LogEntry {
    pub fn new(level: tracing::Level, message: String, target: String) -> Self {
        Self {
            level,
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
            message,
            target,
        }
    }

    /// A visual separator line for the log panel.
    pub fn separator(message: &str) -> Self {
        Self::new(
            tracing::Level::INFO,
            format!("--- {message} ---"),
            "gui".to_string(),
        )
    }
}

static LOG_BUFFER: once_cell::sync::Lazy<Arc<Mutex<VecDeque<LogEntry>>>> =
    once_cell::sync::Lazy::new(|| Arc::new(Mutex::new(VecDeque::with_capacity(LOG_CAPACITY))));

pub fn get_log_buffer() -> Arc<Mutex<VecDeque<LogEntry>>> {
    LOG_BUFFER.clone()
}

/// A `tracing` layer that mirrors every event into the GUI log buffer.
pub struct GuiLogLayer;

impl GuiLogLayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GuiLogLayer {
    fn default() -> Self {
        Self::new()
    }
}

struct MessageVisitor {
    message: String,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }
}

impl<S> Layer<S> for GuiLogLayer
where
    S: Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut visitor = MessageVisitor {
            message: String::new(),
        };
        event.record(&mut visitor);

        let message = if visitor.message.is_empty() {
            metadata.target().to_string()
        } else {
            visitor.message
        };
        let entry = LogEntry::new(*metadata.level(), message, metadata.target().to_string());

        if let Ok(mut buf) = LOG_BUFFER.lock() {
            if buf.len() == LOG_CAPACITY {
                buf.pop_front();
            }
            buf.push_back(entry);
        }
    }
}
