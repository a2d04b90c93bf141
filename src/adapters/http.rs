use crate::utils::error::{MilanError, Result};
use reqwest::{Client, Response};
use std::time::Duration;

pub fn build_client(timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(concat!("kundli-milan/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// Joins a base URL and an absolute path without doubling the slash.
pub fn join_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Turns a non-success response into a `RemoteError`, pulling the message out
/// of `{"error": ...}` (auth API) or `{"detail": ...}` (content API) bodies.
pub async fn remote_error(service: &str, response: Response) -> MilanError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| {
            ["error", "detail", "message"]
                .iter()
                .find_map(|key| v.get(key).and_then(|m| m.as_str()).map(str::to_string))
        })
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("no response body")
                    .to_string()
            } else {
                body.trim().to_string()
            }
        });

    MilanError::RemoteError {
        service: service.to_string(),
        status: status.as_u16(),
        message,
    }
}
