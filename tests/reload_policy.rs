use lineseek::config::{Config, DatasetConfig, LoggingConfig, MatcherConfig, TlsConfig};
use lineseek::dataset::DatasetStore;
use lineseek::logger::QueryLogger;
use lineseek::matcher::create_matcher;
use lineseek::server::{Listener, QueryHandler, ThreadPerConnection};
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::path::Path;
use std::sync::Arc;
use std::thread;

fn start_server(dataset_path: &Path, reread: bool) -> SocketAddr {
    let config = Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        dataset: DatasetConfig {
            path: dataset_path.to_path_buf(),
            reread_on_query: reread,
        },
        tls: TlsConfig::default(),
        matcher: MatcherConfig::default(),
        logging: LoggingConfig::default(),
    };
    let store = Arc::new(DatasetStore::new(dataset_path, reread, false).unwrap());
    let handler = QueryHandler::new(
        store,
        create_matcher("linear"),
        QueryLogger::new(&LoggingConfig::default(), vec![]),
    );
    let listener = Listener::bind(&config, handler, Box::new(ThreadPerConnection)).unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || listener.run());
    addr
}

fn send_query(addr: SocketAddr, query: &str) -> String {
    let mut stream = TcpStream::connect(addr).unwrap();
    stream.write_all(query.as_bytes()).unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).unwrap();
    response
}

#[test]
fn test_reread_on_query_observes_external_rewrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.txt");
    std::fs::write(&path, "first\n").unwrap();

    let addr = start_server(&path, true);

    assert_eq!(send_query(addr, "first"), "STRING EXISTS\n");
    assert_eq!(send_query(addr, "second"), "STRING NOT FOUND\n");

    std::fs::write(&path, "second\n").unwrap();

    assert_eq!(send_query(addr, "first"), "STRING NOT FOUND\n");
    assert_eq!(send_query(addr, "second"), "STRING EXISTS\n");
}

#[test]
fn test_static_mode_keeps_startup_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.txt");
    std::fs::write(&path, "first\n").unwrap();

    let addr = start_server(&path, false);

    assert_eq!(send_query(addr, "first"), "STRING EXISTS\n");

    std::fs::write(&path, "second\n").unwrap();

    // Still answering from the snapshot taken at startup.
    assert_eq!(send_query(addr, "first"), "STRING EXISTS\n");
    assert_eq!(send_query(addr, "second"), "STRING NOT FOUND\n");
}
