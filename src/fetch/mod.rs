use anyhow::{Context, Result};
use reqwest::Client;
use tracing::info;

/// Download the circle CSV as UTF-8 text.
///
/// One read-to-completion GET, no retry or timeout beyond the client's own.
/// Callers decide what a failure means; the listing pipeline substitutes an
/// empty record set so the page still renders.
pub async fn fetch_circle_csv(client: &Client, url: &str) -> Result<String> {
    let resp = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("requesting {url}"))?
        .error_for_status()
        .with_context(|| format!("fetching {url}"))?;

    let text = resp.text().await.context("reading csv body")?;
    info!(url, bytes = text.len(), "fetched circle csv");
    Ok(text)
}
