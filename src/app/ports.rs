use async_trait::async_trait;

use crate::types::VerificationResult;

// Verification-side ports
#[async_trait]
pub trait EmailVerifierPort: Send + Sync {
    async fn verify_email(&self, email: &str) -> VerificationResult;
}

#[async_trait]
pub trait PhoneVerifierPort: Send + Sync {
    async fn verify_phone(&self, phone: &str) -> VerificationResult;
}

// Delivery-side port
#[async_trait]
pub trait NotificationSenderPort: Send + Sync {
    async fn send(&self, template_id: &str, params: serde_json::Value) -> Result<(), String>;
}

/// The contact form as the pipeline sees it. Calls are synchronous UI updates.
pub trait FormView: Send + Sync {
    fn show_success(&self, message: &str);
    fn hide_success(&self);
    fn show_error(&self, message: &str);
    fn hide_error(&self);
    fn set_busy(&self, visible: bool);
    fn set_submit_enabled(&self, enabled: bool);
    fn clear_fields(&self);
}
