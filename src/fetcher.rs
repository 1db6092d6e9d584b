use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::redirect;

const USER_AGENT: &str = "Mozilla/5.0";
const TIMEOUT: Duration = Duration::from_secs(10);
const MAX_REDIRECTS: usize = 30;

/// Single blocking GET. Non-2xx responses are errors.
pub fn fetch_html(url: &str) -> Result<String> {
    let redirect_policy = redirect::Policy::custom(|attempt| {
        if attempt.previous().len() >= MAX_REDIRECTS {
            attempt.error(format!("Too many redirects (>{MAX_REDIRECTS})"))
        } else {
            attempt.follow()
        }
    });

    let client = reqwest::blocking::Client::builder()
        .redirect(redirect_policy)
        .timeout(TIMEOUT)
        .build()?;

    tracing::debug!(url, "Sending request");
    let response = client
        .get(url)
        .header("User-Agent", USER_AGENT)
        .send()
        .context("Failed to fetch page")?;

    let status = response.status();
    tracing::debug!(%status, "Received response");
    anyhow::ensure!(status.is_success(), "HTTP {status} for {url}");

    response.text().context("Failed to read response body")
}
