use colored::Colorize;

use title_scraper::{load_config, scrape_title_configured, AppConfig, TitleOutcome};

const TARGET_URL: &str = "https://example.com";

#[tokio::main]
async fn main() {
    // Load configuration settings
    let settings = match load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!(
                "{}",
                format!("Failed to load configuration, using defaults: {}", e).yellow()
            );
            AppConfig::default()
        }
    };

    println!("Scraping title from: {}", TARGET_URL);

    let outcome = scrape_title_configured(&settings.scraper, TARGET_URL).await;

    match &outcome {
        TitleOutcome::Found(_) => eprintln!("{}", "Title extracted successfully".green()),
        TitleOutcome::NotFound => eprintln!("{}", "No title tag in the page".yellow()),
        TitleOutcome::Failed(reason) => {
            eprintln!("{}", format!("Failed to scrape {}: {}", TARGET_URL, reason).red())
        }
    }

    println!("Title: {}", outcome);
}
