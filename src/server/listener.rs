use crate::config::Config;
use crate::error::ServeError;
use crate::server::dispatch::ConnectionDispatcher;
use crate::server::handler::QueryHandler;
use crate::server::tls::TlsAcceptor;
use anyhow::{Context, Result};
use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;
use tracing::{error, info};

/// Accept loop: binds one server socket, optionally wraps accepted
/// connections in TLS, and hands every connection to the dispatcher without
/// ever waiting on a handler. Runs until the process is terminated; there is
/// no graceful shutdown.
pub struct Listener {
    listener: TcpListener,
    handler: Arc<QueryHandler>,
    dispatcher: Box<dyn ConnectionDispatcher>,
    tls: Option<TlsAcceptor>,
}

impl Listener {
    pub fn bind(
        config: &Config,
        handler: Arc<QueryHandler>,
        dispatcher: Box<dyn ConnectionDispatcher>,
    ) -> Result<Self> {
        let tls = if config.tls.enabled {
            // validate() guarantees both paths are present when enabled
            let cert = config.tls.cert_path.as_deref().ok_or_else(|| {
                ServeError::Config("tls.cert_path missing".into())
            })?;
            let key = config.tls.key_path.as_deref().ok_or_else(|| {
                ServeError::Config("tls.key_path missing".into())
            })?;
            Some(TlsAcceptor::new(cert, key)?)
        } else {
            None
        };

        let listener = TcpListener::bind(config.bind_addr())
            .with_context(|| format!("Failed to bind {}", config.bind_addr()))?;

        Ok(Self {
            listener,
            handler,
            dispatcher,
            tls,
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    pub fn run(self) {
        info!(
            "Server listening on {} (TLS {})",
            self.listener
                .local_addr()
                .map(|a| a.to_string())
                .unwrap_or_else(|_| "<unknown>".into()),
            if self.tls.is_some() {
                "enabled"
            } else {
                "disabled"
            }
        );

        loop {
            let (stream, peer) = match self.listener.accept() {
                Ok(accepted) => accepted,
                Err(e) => {
                    error!("Accept failed: {}", e);
                    continue;
                }
            };

            let handler = self.handler.clone();
            let tls = self.tls.clone();

            // The TLS handshake runs on the connection's own execution unit,
            // so a stalled client cannot hold up the accept loop.
            self.dispatcher.dispatch(Box::new(move || match tls {
                Some(acceptor) => match acceptor.accept(stream) {
                    Ok(tls_stream) => handler.handle(tls_stream, peer),
                    Err(e) => error!("TLS handshake with {} failed: {}", peer, e),
                },
                None => handler.handle(stream, peer),
            }));
        }
    }
}
