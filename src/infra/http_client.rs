use std::time::Duration;

use crate::constants::USER_AGENT;
use crate::error::Result;

/// One client shared by every provider adapter. The timeout applies to each
/// request as a whole, connect included.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Reduce a reqwest failure to a short reason for logs and results.
pub fn describe_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        format!("request timed out: {}", e)
    } else if e.is_connect() {
        format!("connection failed: {}", e)
    } else if e.is_decode() {
        format!("malformed response: {}", e)
    } else if let Some(status) = e.status() {
        format!("HTTP {}", status)
    } else {
        e.to_string()
    }
}

/// Provider error object, as returned with HTTP 200 by the apilayer services.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ProviderError {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub info: Option<String>,
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "provider error {}: {}",
            self.code.map(|c| c.to_string()).unwrap_or_else(|| "?".to_string()),
            self.info.as_deref().or(self.kind.as_deref()).unwrap_or("unknown")
        )
    }
}
