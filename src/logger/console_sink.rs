use crate::logger::types::{QueryLogEntry, QueryLogSink};
use tracing::info;

/// Emits one tracing line per completed query; the subscriber supplies
/// timestamp and severity.
pub struct ConsoleLogSink;

impl QueryLogSink for ConsoleLogSink {
    fn log(&self, entry: &QueryLogEntry) {
        info!(
            "Query: {}, IP: {}, Execution time: {:.6}s",
            entry.query,
            entry.client_addr,
            entry.elapsed.as_secs_f64()
        );
    }
}
