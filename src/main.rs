use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use lineseek::config::Config;
use lineseek::dataset::DatasetStore;
use lineseek::init::setup_logging;
use lineseek::logger::QueryLogger;
use lineseek::matcher::create_matcher;
use lineseek::server::{Listener, QueryHandler, ThreadPerConnection};

fn main() -> Result<()> {
    // 1. Load Config
    let config_path = std::env::args().nth(1).unwrap_or("config.toml".to_string());
    let config = if config_path.ends_with(".toml") {
        Config::load(&config_path)?
    } else {
        // The original flat key=value format (linuxpath / REREAD_ON_QUERY /
        // ssl_enabled) is still accepted for drop-in deployments.
        Config::from_legacy(&config_path)?
    };

    // 2. Setup Logging
    setup_logging(&config);
    info!("Starting lineseek...");

    // 3. Build Dataset Store
    // Static mode loads before the listener binds, so a missing dataset is a
    // startup failure. When binary serves live traffic from a static
    // snapshot, sort once here instead of on every query.
    let presort =
        !config.dataset.reread_on_query && config.matcher.strategy == "binary";
    let store = Arc::new(DatasetStore::new(
        &config.dataset.path,
        config.dataset.reread_on_query,
        presort,
    )?);
    info!(
        "Dataset: {} (reread_on_query: {})",
        config.dataset.path.display(),
        config.dataset.reread_on_query
    );

    // 4. Build Matcher & Query Logger
    let matcher = create_matcher(&config.matcher.strategy);
    info!("Matcher strategy: {}", matcher.name());
    let logger = QueryLogger::new(&config.logging, vec![]);

    // 5. Start Server
    let handler = QueryHandler::new(store, matcher, logger);
    let listener = Listener::bind(&config, handler, Box::new(ThreadPerConnection))?;
    listener.run();

    Ok(())
}
