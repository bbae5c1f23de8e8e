pub mod console_sink;
pub mod file_sink;
pub mod memory_sink;
pub mod types;

pub use self::console_sink::ConsoleLogSink;
pub use self::file_sink::FileLogSink;
pub use self::memory_sink::MemoryLogSink;
pub use self::types::{QueryLogEntry, QueryLogSink};

use crate::config::LoggingConfig;
use std::sync::mpsc::{self, SyncSender};
use std::sync::Arc;
use std::thread;
use tracing::error;

/// Fans completed-query records out to the configured sinks. Each sink
/// consumes from a bounded channel on its own thread; the handler side is
/// fire-and-forget and never blocks the request path, dropping entries if a
/// sink falls behind.
pub struct QueryLogger {
    sinks: Vec<SyncSender<QueryLogEntry>>,
}

impl QueryLogger {
    pub fn new(config: &LoggingConfig, extra_sinks: Vec<Box<dyn QueryLogSink>>) -> Arc<Self> {
        let mut sinks = Vec::new();

        for sink_type in &config.query_log_sinks {
            match sink_type.as_str() {
                "console" => sinks.push(Self::spawn_sink(Box::new(ConsoleLogSink))),
                "file" => match &config.file_path {
                    Some(path) => match FileLogSink::new(path) {
                        Ok(sink) => sinks.push(Self::spawn_sink(Box::new(sink))),
                        Err(e) => error!("Failed to open query log file {}: {}", path, e),
                    },
                    None => error!("File sink selected but logging.file_path is not set"),
                },
                other => error!("Unknown log sink type: {}", other),
            }
        }

        for sink in extra_sinks {
            sinks.push(Self::spawn_sink(sink));
        }

        Arc::new(Self { sinks })
    }

    fn spawn_sink(sink: Box<dyn QueryLogSink>) -> SyncSender<QueryLogEntry> {
        let (tx, rx) = mpsc::sync_channel(1000);
        thread::spawn(move || {
            while let Ok(entry) = rx.recv() {
                sink.log(&entry);
            }
        });
        tx
    }

    pub fn log(&self, entry: QueryLogEntry) {
        let len = self.sinks.len();
        for (i, sink) in self.sinks.iter().enumerate() {
            // Fire and forget, don't block caller if buffer full
            if i == len - 1 {
                let _ = sink.try_send(entry);
                break;
            }
            let _ = sink.try_send(entry.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn entry(query: &str) -> QueryLogEntry {
        QueryLogEntry {
            query: query.to_string(),
            client_addr: "127.0.0.1:40000".parse().unwrap(),
            elapsed: Duration::from_micros(42),
        }
    }

    #[test]
    fn test_memory_sink_ring_buffer() {
        let sink = MemoryLogSink::new(2);
        sink.log(&entry("a"));
        sink.log(&entry("b"));
        sink.log(&entry("c"));

        let recent = sink.get_recent();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].query, "b");
        assert_eq!(recent[1].query, "c");
    }

    #[test]
    fn test_logger_delivers_to_extra_sinks() {
        let sink = MemoryLogSink::new(10);
        let buffer = sink.clone_buffer();
        let logger = QueryLogger::new(&LoggingConfig::default(), vec![Box::new(sink)]);

        logger.log(entry("delivered"));

        // Delivery happens on the sink's own thread.
        for _ in 0..50 {
            if !buffer.read().unwrap().is_empty() {
                break;
            }
            thread::sleep(Duration::from_millis(10));
        }
        let buffer = buffer.read().unwrap();
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer[0].query, "delivered");
    }
}
