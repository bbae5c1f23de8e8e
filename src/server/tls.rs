use crate::error::ServeError;
use rustls::pki_types::{CertificateDer, PrivateKeyDer};
use rustls::{ServerConnection, StreamOwned};
use std::fs::File;
use std::io::BufReader;
use std::net::TcpStream;
use std::path::Path;
use std::sync::Arc;

/// Server-side TLS context built from PEM certificate and key files.
///
/// Server-only authentication: any client that completes the handshake is
/// accepted, there is no client certificate verification. rustls negotiates
/// TLS 1.2/1.3 only, so the legacy protocol versions are never offered.
#[derive(Clone, Debug)]
pub struct TlsAcceptor {
    config: Arc<rustls::ServerConfig>,
}

impl TlsAcceptor {
    /// Loads the certificate chain and private key. Unusable material is a
    /// startup-time configuration failure, not a per-connection one.
    pub fn new(cert_path: &Path, key_path: &Path) -> Result<Self, ServeError> {
        let certs = load_certs(cert_path)?;
        let key = load_key(key_path)?;

        let config = rustls::ServerConfig::builder()
            .with_no_client_auth()
            .with_single_cert(certs, key)
            .map_err(|e| ServeError::Config(format!("invalid TLS material: {e}")))?;

        Ok(Self {
            config: Arc::new(config),
        })
    }

    /// Drives the handshake to completion on the caller's thread, so a slow
    /// or failing handshake never stalls the accept loop.
    pub fn accept(
        &self,
        stream: TcpStream,
    ) -> Result<StreamOwned<ServerConnection, TcpStream>, ServeError> {
        let conn = ServerConnection::new(self.config.clone())
            .map_err(|e| ServeError::TlsHandshake(e.to_string()))?;
        let mut tls = StreamOwned::new(conn, stream);

        while tls.conn.is_handshaking() {
            tls.conn
                .complete_io(&mut tls.sock)
                .map_err(|e| ServeError::TlsHandshake(e.to_string()))?;
        }

        Ok(tls)
    }
}

fn load_certs(path: &Path) -> Result<Vec<CertificateDer<'static>>, ServeError> {
    let file = File::open(path).map_err(|e| {
        ServeError::Config(format!("cannot open certificate {}: {e}", path.display()))
    })?;
    let certs: Vec<_> = rustls_pemfile::certs(&mut BufReader::new(file))
        .collect::<Result<_, _>>()
        .map_err(|e| {
            ServeError::Config(format!("cannot parse certificate {}: {e}", path.display()))
        })?;
    if certs.is_empty() {
        return Err(ServeError::Config(format!(
            "no certificates found in {}",
            path.display()
        )));
    }
    Ok(certs)
}

fn load_key(path: &Path) -> Result<PrivateKeyDer<'static>, ServeError> {
    let file = File::open(path)
        .map_err(|e| ServeError::Config(format!("cannot open key {}: {e}", path.display())))?;
    rustls_pemfile::private_key(&mut BufReader::new(file))
        .map_err(|e| ServeError::Config(format!("cannot parse key {}: {e}", path.display())))?
        .ok_or_else(|| ServeError::Config(format!("no private key found in {}", path.display())))
}
