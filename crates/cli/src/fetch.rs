use anyhow::{Context as AnyhowContext, Result};
use directory_model::UserRecord;
use reqwest::Client;
use std::path::Path;
use std::time::Duration;

/// Reference endpoint of the user list service.
pub const DEFAULT_USERS_URL: &str = "http://localhost:3000/users";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Resolve the users endpoint: explicit flag, then `DIRECTORY_USERS_URL`,
/// then the default.
pub fn resolve_users_url(flag: Option<&str>) -> String {
    if let Some(url) = flag {
        return url.to_string();
    }
    if let Ok(url) = std::env::var("DIRECTORY_USERS_URL") {
        return url;
    }
    DEFAULT_USERS_URL.to_string()
}

/// Fetch the user list from the HTTP endpoint.
///
/// Non-2xx status and malformed bodies are hard errors: nothing downstream
/// ever runs on an absent or partial result.
pub async fn fetch_users(url: &str) -> Result<Vec<UserRecord>> {
    let client = Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")?;

    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Request failed: GET {url}"))?;

    let status = response.status();
    if !status.is_success() {
        anyhow::bail!("GET {url} returned HTTP {status}");
    }

    let body = response
        .text()
        .await
        .with_context(|| format!("Failed while reading HTTP body from {url}"))?;

    let users = decode_users(&body).with_context(|| format!("Invalid user list from {url}"))?;
    log::debug!("GET {url}: {} user records", users.len());
    Ok(users)
}

/// Read the user list from a local JSON file (same shape as the endpoint).
pub fn load_users_file(path: &Path) -> Result<Vec<UserRecord>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    decode_users(&raw).with_context(|| format!("Invalid {}", path.display()))
}

fn decode_users(raw: &str) -> Result<Vec<UserRecord>> {
    let users: Vec<UserRecord> = serde_json::from_str(raw)?;
    Ok(users)
}
