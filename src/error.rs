use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure taxonomy for the query server.
///
/// Only `Config` is fatal; everything else is terminal for the single
/// connection it occurred on, and the accept loop keeps running.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("dataset unavailable: {path}: {source}")]
    DatasetUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("transport error: {0}")]
    Transport(#[from] io::Error),

    #[error("TLS handshake failed: {0}")]
    TlsHandshake(String),
}

impl ServeError {
    /// True when the error should be answered with a failure verdict
    /// rather than silently dropping the connection.
    pub fn is_dataset_unavailable(&self) -> bool {
        matches!(self, ServeError::DatasetUnavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_error_display_includes_path() {
        let err = ServeError::DatasetUnavailable {
            path: PathBuf::from("/data/200k.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/data/200k.txt"));
        assert!(err.is_dataset_unavailable());
    }

    #[test]
    fn test_transport_error_from_io() {
        let err: ServeError = io::Error::new(io::ErrorKind::ConnectionReset, "peer gone").into();
        assert!(matches!(err, ServeError::Transport(_)));
        assert!(!err.is_dataset_unavailable());
    }
}
