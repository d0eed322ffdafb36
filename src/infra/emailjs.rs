use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::app::ports::NotificationSenderPort;
use crate::infra::http_client::describe_error;

/// Transactional email delivery through the EmailJS REST API.
pub struct EmailJsSender {
    client: reqwest::Client,
    base_url: String,
    service_id: String,
    public_key: String,
    private_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: serde_json::Value,
}

impl EmailJsSender {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        service_id: impl Into<String>,
        public_key: impl Into<String>,
        private_key: Option<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            service_id: service_id.into(),
            public_key: public_key.into(),
            private_key,
        }
    }
}

#[async_trait]
impl NotificationSenderPort for EmailJsSender {
    #[instrument(skip(self, params))]
    async fn send(&self, template_id: &str, params: serde_json::Value) -> Result<(), String> {
        let url = format!("{}/api/v1.0/email/send", self.base_url);
        let request = SendRequest {
            service_id: &self.service_id,
            template_id,
            user_id: &self.public_key,
            access_token: self.private_key.as_deref(),
            template_params: params,
        };

        debug!("HTTP POST request to: {}", url);
        let resp = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| describe_error(&e))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }

        let body = resp.text().await.unwrap_or_default();
        let body = body.trim();
        if body.is_empty() {
            Err(format!("HTTP {}", status))
        } else {
            Err(format!("HTTP {}: {}", status, body))
        }
    }
}
