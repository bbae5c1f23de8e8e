use crate::logger::types::{QueryLogEntry, QueryLogSink};
use std::fs::{File, OpenOptions};
use std::io::{LineWriter, Write};
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;

/// Append-only file sink. The `LineWriter` flushes on every newline, so each
/// entry lands as one atomic-enough line, and the mutex serializes appends
/// should the sink ever be shared directly.
pub struct FileLogSink {
    writer: Mutex<LineWriter<File>>,
}

impl FileLogSink {
    pub fn new(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Mutex::new(LineWriter::new(file)),
        })
    }
}

impl QueryLogSink for FileLogSink {
    fn log(&self, entry: &QueryLogEntry) {
        let mut writer = self.writer.lock().unwrap();
        // A failed append is dropped; query logging never disturbs serving.
        let _ = writeln!(
            writer,
            "{} INFO Query: {}, IP: {}, Execution time: {:.6}s",
            humantime::format_rfc3339_millis(SystemTime::now()),
            entry.query,
            entry.client_addr,
            entry.elapsed.as_secs_f64()
        );
    }
}
