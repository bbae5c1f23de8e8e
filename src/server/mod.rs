pub mod dispatch;
pub mod handler;
pub mod listener;
pub mod tls;

pub use self::dispatch::{ConnectionDispatcher, InlineDispatcher, ThreadPerConnection};
pub use self::handler::{
    QueryHandler, MAX_QUERY_BYTES, VERDICT_EXISTS, VERDICT_NOT_FOUND, VERDICT_SERVER_ERROR,
};
pub use self::listener::Listener;
pub use self::tls::TlsAcceptor;
