// Logging - in-memory log capture for the TUI
//
// Writing log lines to stdout while ratatui owns the alternate screen
// garbles the display, so a custom tracing layer captures events into a
// bounded ring buffer instead. The status bar surfaces the most recent
// warning or error from that buffer; optional file logging (JSON lines,
// daily rotation) is wired up separately in main.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

/// How many entries the ring buffer keeps before dropping the oldest
const CAPTURE_CAPACITY: usize = 256;

/// One captured log event
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub message: String,
}

/// Bounded, shared buffer of captured log entries
#[derive(Clone, Default)]
pub struct LogBuffer {
    entries: Arc<Mutex<VecDeque<LogEntry>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, entry: LogEntry) {
        let mut entries = self.entries.lock().unwrap();
        if entries.len() >= CAPTURE_CAPACITY {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// The most recent entry at warn level or above, for the status bar
    pub fn latest_problem(&self) -> Option<LogEntry> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|e| e.level <= Level::WARN)
            .cloned()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

/// Tracing layer that feeds the ring buffer
pub struct TuiLayer {
    buffer: LogBuffer,
}

impl TuiLayer {
    pub fn new(buffer: LogBuffer) -> Self {
        Self { buffer }
    }
}

impl<S> Layer<S> for TuiLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut message = String::new();
        event.record(&mut MessageVisitor(&mut message));

        self.buffer.push(LogEntry {
            timestamp: Utc::now(),
            level: *event.metadata().level(),
            message,
        });
    }
}

/// Extracts the `message` field from a tracing event
struct MessageVisitor<'a>(&'a mut String);

impl tracing::field::Visit for MessageVisitor<'_> {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            *self.0 = format!("{:?}", value);
            // Strip the surrounding quotes Debug adds to plain strings
            if self.0.starts_with('"') && self.0.ends_with('"') && self.0.len() >= 2 {
                *self.0 = self.0[1..self.0.len() - 1].to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(level: Level, message: &str) -> LogEntry {
        LogEntry {
            timestamp: Utc::now(),
            level,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_buffer_is_bounded() {
        let buffer = LogBuffer::new();
        for i in 0..CAPTURE_CAPACITY + 10 {
            buffer.push(entry(Level::INFO, &format!("line {}", i)));
        }
        assert_eq!(buffer.len(), CAPTURE_CAPACITY);
    }

    #[test]
    fn test_latest_problem_skips_info() {
        let buffer = LogBuffer::new();
        buffer.push(entry(Level::WARN, "older warning"));
        buffer.push(entry(Level::INFO, "just info"));
        let problem = buffer.latest_problem().unwrap();
        assert_eq!(problem.message, "older warning");
    }

    #[test]
    fn test_latest_problem_empty_buffer() {
        assert!(LogBuffer::new().latest_problem().is_none());
    }
}
