use crate::errors::YfinError;
use chrono::{Duration, Utc};
use reqwest::Client;
/// Helper functions for making HTTP requests against the Yahoo endpoints
use url::Url;

// Yahoo rejects requests without a browser-looking User-Agent.
const USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";


/// Make a GET request (all Yahoo data endpoints used here are public)
pub(crate) async fn get(
    http_client: &Client,
    base_url: &str,
    path: &str,
) -> Result<String, YfinError> {
    let base = base_url.trim_end_matches('/');
    let url = format!("{}{}", base, path);
    let parsed = Url::parse(&url).map_err(|e| YfinError::Other(e.to_string()))?;
    let resp = http_client
        .get(parsed.as_str())
        .header("User-Agent", USER_AGENT)
        .send()
        .await?;
    let status = resp.status();
    let body: String = resp.text().await?;
    if !status.is_success() {
        return Err(YfinError::Other(format!("HTTP {}: {}", status, body)));
    }
    Ok(body)
}


/// Unix-second bounds for an annual reporting window ending today.
pub(crate) fn annual_window(years_back: i64) -> (i64, i64) {
    let now = Utc::now();
    let start = now - Duration::days(365 * years_back);
    (start.timestamp(), now.timestamp())
}
