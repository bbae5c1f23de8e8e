use std::net::SocketAddr;
use std::time::Duration;

/// One completed query, as recorded by the connection handler.
/// Write-only: appended to sinks, never read back by the core.
#[derive(Debug, Clone)]
pub struct QueryLogEntry {
    pub query: String,
    pub client_addr: SocketAddr,
    pub elapsed: Duration,
}

pub trait QueryLogSink: Send + Sync {
    fn log(&self, entry: &QueryLogEntry);
}
