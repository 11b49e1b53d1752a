use crate::domain::model::JokePayload;
use crate::domain::ports::Console;
use crate::utils::error::{DemoError, Result};
use futures_util::TryFutureExt;
use reqwest::Client;

pub const FETCH_FAILURE_MESSAGE: &str = "Something wrong happened";

/// Issues one GET against `url` and decodes the body as JSON.
///
/// The status code is not inspected; only transport and decode failures are errors.
pub async fn fetch_and_decode(client: &Client, url: &str) -> Result<JokePayload> {
    tracing::debug!("Making API request to: {}", url);
    let response = client.get(url).send().await?;
    tracing::debug!("API response status: {}", response.status());

    let body = response.bytes().await?;
    let data = serde_json::from_slice(&body)?;
    Ok(data)
}

fn report_payload(console: &dyn Console, data: &JokePayload) {
    console.log(&data.to_string());
}

fn report_failure(console: &dyn Console, error: &DemoError) {
    tracing::warn!("Fetch failed: {}", error);
    console.log(FETCH_FAILURE_MESSAGE);
}

/// Suspends on the fetch and handles the outcome in one match.
pub async fn fetch_with_await(client: &Client, console: &dyn Console, url: &str) {
    match fetch_and_decode(client, url).await {
        Ok(data) => report_payload(console, &data),
        Err(e) => report_failure(console, &e),
    }
}

/// Same contract as [`fetch_with_await`], written as a combinator chain.
pub async fn fetch_with_continuations(client: &Client, console: &dyn Console, url: &str) {
    fetch_and_decode(client, url)
        .map_ok(|data| report_payload(console, &data))
        .unwrap_or_else(|e| report_failure(console, &e))
        .await
}
