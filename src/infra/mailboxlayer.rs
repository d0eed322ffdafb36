use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::app::ports::EmailVerifierPort;
use crate::infra::http_client::{describe_error, ProviderError};
use crate::types::VerificationResult;

/// Email existence check against the MailboxLayer `check` endpoint.
pub struct MailboxLayerVerifier {
    client: reqwest::Client,
    base_url: String,
    access_key: String,
}

#[derive(Debug, Deserialize)]
struct CheckResponse {
    #[serde(default)]
    format_valid: Option<bool>,
    #[serde(default)]
    smtp_check: Option<bool>,
    #[serde(default)]
    error: Option<ProviderError>,
}

impl MailboxLayerVerifier {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>, access_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_key: access_key.into(),
        }
    }

    fn interpret(body: CheckResponse) -> VerificationResult {
        if let Some(error) = body.error {
            return VerificationResult::ServiceUnavailable(error.to_string());
        }
        match (body.format_valid, body.smtp_check) {
            (None, None) => VerificationResult::ServiceUnavailable(
                "response carried neither format_valid nor smtp_check".to_string(),
            ),
            (Some(true), Some(true)) => VerificationResult::Verified,
            (format_valid, smtp_check) => VerificationResult::Rejected(format!(
                "format_valid={}, smtp_check={}",
                format_valid.unwrap_or(false),
                smtp_check.unwrap_or(false)
            )),
        }
    }
}

#[async_trait]
impl EmailVerifierPort for MailboxLayerVerifier {
    #[instrument(skip(self, email))]
    async fn verify_email(&self, email: &str) -> VerificationResult {
        let url = format!("{}/api/check", self.base_url);
        debug!("HTTP GET request to: {}", url);

        let resp = match self
            .client
            .get(&url)
            .query(&[("access_key", self.access_key.as_str()), ("email", email)])
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => return VerificationResult::ServiceUnavailable(describe_error(&e)),
        };

        let status = resp.status();
        if !status.is_success() {
            return VerificationResult::ServiceUnavailable(format!("HTTP {}", status));
        }

        match resp.json::<CheckResponse>().await {
            Ok(body) => Self::interpret(body),
            Err(e) => VerificationResult::ServiceUnavailable(describe_error(&e)),
        }
    }
}
