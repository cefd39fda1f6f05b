pub mod config;
pub mod scraping;
pub mod utilities;

pub use crate::config::{load_config, AppConfig, ScraperConfig};
pub use crate::scraping::scrape_title::{
    scrape_title, scrape_title_configured, scrape_title_outcome, scrape_title_with,
};
pub use crate::scraping::title_outcome::{TitleOutcome, ERROR_PREFIX, NO_TITLE_FOUND};
