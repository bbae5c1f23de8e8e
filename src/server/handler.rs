use crate::dataset::DatasetStore;
use crate::error::ServeError;
use crate::logger::{QueryLogEntry, QueryLogger};
use crate::matcher::LineMatcher;
use std::io::{self, Read, Write};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tracing::error;

/// Upper bound on a single receive; anything larger is out of scope for the
/// protocol.
pub const MAX_QUERY_BYTES: usize = 1024;

pub const VERDICT_EXISTS: &str = "STRING EXISTS";
pub const VERDICT_NOT_FOUND: &str = "STRING NOT FOUND";
pub const VERDICT_SERVER_ERROR: &str = "SERVER ERROR";

/// Per-connection protocol: receive one query, match it against the dataset
/// view dictated by the reload policy, send exactly one verdict line, log
/// the query with its wall-clock latency, close.
pub struct QueryHandler {
    store: Arc<DatasetStore>,
    matcher: Arc<dyn LineMatcher>,
    logger: Arc<QueryLogger>,
}

impl QueryHandler {
    pub fn new(
        store: Arc<DatasetStore>,
        matcher: Arc<dyn LineMatcher>,
        logger: Arc<QueryLogger>,
    ) -> Arc<Self> {
        Arc::new(Self {
            store,
            matcher,
            logger,
        })
    }

    /// Runs one connection to completion. The stream is dropped on every
    /// exit path, so the socket is always released.
    pub fn handle(&self, mut stream: impl Read + Write, peer: SocketAddr) {
        if let Err(e) = self.serve_query(&mut stream, peer) {
            error!("Error handling client {}: {}", peer, e);
        }
    }

    fn serve_query(
        &self,
        stream: &mut (impl Read + Write),
        peer: SocketAddr,
    ) -> Result<(), ServeError> {
        let start = Instant::now();

        let query = self.receive_query(stream)?;

        // Exactly one dataset view per query: the shared snapshot in static
        // mode, a fresh load in reread mode. A failed load still answers the
        // client; the listener keeps serving.
        let verdict = match self.store.snapshot() {
            Ok(dataset) => {
                if self.matcher.exists(&dataset, &query) {
                    VERDICT_EXISTS
                } else {
                    VERDICT_NOT_FOUND
                }
            }
            Err(e) => {
                error!("Query from {} failed: {}", peer, e);
                VERDICT_SERVER_ERROR
            }
        };

        stream.write_all(verdict.as_bytes())?;
        stream.write_all(b"\n")?;

        self.logger.log(QueryLogEntry {
            query,
            client_addr: peer,
            elapsed: start.elapsed(),
        });

        Ok(())
    }

    /// One blocking receive of at most `MAX_QUERY_BYTES`, decoded as UTF-8
    /// with trailing whitespace/newline stripped. Non-text bytes are a
    /// transport error.
    fn receive_query(&self, stream: &mut impl Read) -> Result<String, ServeError> {
        let mut buf = [0u8; MAX_QUERY_BYTES];
        let n = stream.read(&mut buf)?;
        let query = std::str::from_utf8(&buf[..n])
            .map_err(|e| ServeError::Transport(io::Error::new(io::ErrorKind::InvalidData, e)))?;
        Ok(query.trim_end().to_string())
    }
}
