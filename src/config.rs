use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::constants;
use crate::error::{EstateError, Result};

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub email_verification: EmailVerificationConfig,
    #[serde(default)]
    pub phone_verification: PhoneVerificationConfig,
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailVerificationConfig {
    #[serde(default = "default_mailboxlayer_url")]
    pub base_url: String,
}

impl Default for EmailVerificationConfig {
    fn default() -> Self {
        Self { base_url: default_mailboxlayer_url() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhoneVerificationConfig {
    #[serde(default = "default_numverify_url")]
    pub base_url: String,
    #[serde(default = "default_country_code")]
    pub country_code: String,
}

impl Default for PhoneVerificationConfig {
    fn default() -> Self {
        Self {
            base_url: default_numverify_url(),
            country_code: default_country_code(),
        }
    }
}

/// Delivery provider identifiers. These are not secrets, so they live in the
/// config file rather than the environment.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_emailjs_url")]
    pub base_url: String,
    pub service_id: String,
    pub admin_template_id: String,
    pub user_template_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    #[serde(default = "default_success_reset_ms")]
    pub success_reset_ms: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            success_reset_ms: default_success_reset_ms(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl PipelineConfig {
    pub fn success_reset(&self) -> Duration {
        Duration::from_millis(self.success_reset_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn default_mailboxlayer_url() -> String {
    constants::MAILBOXLAYER_BASE_URL.to_string()
}

fn default_numverify_url() -> String {
    constants::NUMVERIFY_BASE_URL.to_string()
}

fn default_emailjs_url() -> String {
    constants::EMAILJS_BASE_URL.to_string()
}

fn default_country_code() -> String {
    constants::DEFAULT_COUNTRY_CODE.to_string()
}

fn default_success_reset_ms() -> u64 {
    constants::DEFAULT_SUCCESS_RESET_MS
}

fn default_request_timeout_secs() -> u64 {
    constants::DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    pub fn load_from(config_path: impl AsRef<Path>) -> Result<Self> {
        let config_path = config_path.as_ref();
        let config_content = fs::read_to_string(config_path).map_err(|e| {
            EstateError::Config(format!(
                "Failed to read config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;

        Self::from_toml(&config_content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        if config.pipeline.request_timeout_secs == 0 {
            return Err(EstateError::Config(
                "pipeline.request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(config)
    }
}

/// Provider access keys, read from the environment (a `.env` file is honoured).
#[derive(Clone)]
pub struct Credentials {
    pub mailboxlayer_access_key: String,
    pub numverify_access_key: String,
    pub emailjs_public_key: String,
    pub emailjs_private_key: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("mailboxlayer_access_key", &"<redacted>")
            .field("numverify_access_key", &"<redacted>")
            .field("emailjs_public_key", &"<redacted>")
            .field("emailjs_private_key", &self.emailjs_private_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Credentials {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Ok(Self {
            mailboxlayer_access_key: required_env(constants::ENV_MAILBOXLAYER_KEY)?,
            numverify_access_key: required_env(constants::ENV_NUMVERIFY_KEY)?,
            emailjs_public_key: required_env(constants::ENV_EMAILJS_PUBLIC_KEY)?,
            emailjs_private_key: std::env::var(constants::ENV_EMAILJS_PRIVATE_KEY)
                .ok()
                .filter(|v| !v.trim().is_empty()),
        })
    }
}

fn required_env(name: &str) -> Result<String> {
    let value = std::env::var(name)
        .map_err(|e| EstateError::Config(format!("{} is not set: {}", name, e)))?;
    if value.trim().is_empty() {
        return Err(EstateError::Config(format!("{} is empty", name)));
    }
    Ok(value)
}
