use reqwest::Client;

use crate::config::ScraperConfig;
use crate::scraping::extract_title::extract_title;
use crate::scraping::title_outcome::TitleOutcome;
use crate::utilities::decode_body::decode_body;
use crate::utilities::fetch_page::{build_client, fetch_page};

/// Fetches `url` and returns the text of its first `<title>` tag.
///
/// Never fails: a missing tag renders as `"No title found."` and any
/// network or protocol failure as `"An error occurred: <details>"`.
pub async fn scrape_title(url: &str) -> String {
    scrape_title_configured(&ScraperConfig::default(), url)
        .await
        .to_string()
}

/// Same as [`scrape_title`], reusing an existing client.
pub async fn scrape_title_with(client: &Client, url: &str) -> String {
    scrape_title_outcome(client, url).await.to_string()
}

pub async fn scrape_title_configured(config: &ScraperConfig, url: &str) -> TitleOutcome {
    match build_client(config) {
        Ok(client) => scrape_title_outcome(&client, url).await,
        Err(e) => TitleOutcome::from_error(&e),
    }
}

pub async fn scrape_title_outcome(client: &Client, url: &str) -> TitleOutcome {
    let body = match fetch_page(client, url).await {
        Ok(body) => body,
        Err(e) => return TitleOutcome::from_error(&e),
    };

    let html = decode_body(&body);
    TitleOutcome::from_title(extract_title(&html))
}
