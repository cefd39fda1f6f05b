pub mod config;

pub use self::config::{load_config, load_config_from, AppConfig, ScraperConfig};
