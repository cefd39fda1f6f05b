use std::time::Duration;

use anyhow::{Context, Result};
use bytes::Bytes;
use reqwest::Client;

use crate::config::ScraperConfig;

pub fn build_client(config: &ScraperConfig) -> Result<Client> {
    let mut builder = Client::builder();

    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent.as_str());
    }
    if let Some(timeout_secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(timeout_secs));
    }

    builder.build().context("Failed to build HTTP client")
}

// 4xx and 5xx statuses are errors. The response is dropped on every path.
pub async fn fetch_page(client: &Client, url: &str) -> Result<Bytes> {
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to send request to {}", url))?
        .error_for_status()
        .context("Server returned an error status")?;

    response
        .bytes()
        .await
        .context("Failed to read response body")
}
