pub mod benchmark;
pub mod config;
pub mod dataset;
pub mod error;
pub mod init;
pub mod logger;
pub mod matcher;
pub mod server;
