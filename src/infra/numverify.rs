use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::app::ports::PhoneVerifierPort;
use crate::infra::http_client::{describe_error, ProviderError};
use crate::types::VerificationResult;

/// Phone number validation against the Numverify `validate` endpoint.
pub struct NumverifyVerifier {
    client: reqwest::Client,
    base_url: String,
    access_key: String,
    country_code: String,
}

#[derive(Debug, Deserialize)]
struct ValidateResponse {
    #[serde(default)]
    valid: Option<bool>,
    #[serde(default)]
    error: Option<ProviderError>,
}

impl NumverifyVerifier {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        access_key: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_key: access_key.into(),
            country_code: country_code.into(),
        }
    }

    fn interpret(body: ValidateResponse) -> VerificationResult {
        if let Some(error) = body.error {
            return VerificationResult::ServiceUnavailable(error.to_string());
        }
        match body.valid {
            Some(true) => VerificationResult::Verified,
            Some(false) => VerificationResult::Rejected("valid=false".to_string()),
            None => VerificationResult::ServiceUnavailable("response carried no valid flag".to_string()),
        }
    }
}

#[async_trait]
impl PhoneVerifierPort for NumverifyVerifier {
    #[instrument(skip(self, phone))]
    async fn verify_phone(&self, phone: &str) -> VerificationResult {
        let url = format!("{}/api/validate", self.base_url);
        debug!("HTTP GET request to: {}", url);

        let resp = match self
            .client
            .get(&url)
            .query(&[
                ("access_key", self.access_key.as_str()),
                ("number", phone),
                ("country_code", self.country_code.as_str()),
                ("format", "1"),
            ])
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

        match resp.json::<ValidateResponse>().await {
            Ok(body) => Self::interpret(body),
            Err(e) => VerificationResult::ServiceUnavailable(describe_error(&e)),
        }
    }
}
