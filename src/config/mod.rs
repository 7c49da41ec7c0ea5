//! Configuration

mod config;

pub use config::{Config, HistoryConfig, CONFIG_DIR_ENV, DEFAULT_LIST_LIMIT};
