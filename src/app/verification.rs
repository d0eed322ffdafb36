use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::app::ports::{EmailVerifierPort, PhoneVerifierPort};
use crate::observability::metrics;
use crate::types::{Check, VerificationResult};

/// Runs the external email and phone checks, each bounded by `timeout`.
pub struct VerificationGateway {
    email_verifier: Arc<dyn EmailVerifierPort>,
    phone_verifier: Arc<dyn PhoneVerifierPort>,
    timeout: Duration,
}

impl VerificationGateway {
    pub fn new(
        email_verifier: Arc<dyn EmailVerifierPort>,
        phone_verifier: Arc<dyn PhoneVerifierPort>,
        timeout: Duration,
    ) -> Self {
        Self {
            email_verifier,
            phone_verifier,
            timeout,
        }
    }

    #[instrument(skip(self, email))]
    pub async fn verify_email(&self, email: &str) -> VerificationResult {
        let result = bounded(self.timeout, self.email_verifier.verify_email(email)).await;
        record(Check::Email, &result);
        result
    }

    /// A missing phone is optional input, so there is nothing to check.
    #[instrument(skip(self, phone))]
    pub async fn verify_phone(&self, phone: Option<&str>) -> VerificationResult {
        let Some(phone) = phone else {
            debug!("No phone supplied, skipping phone verification");
            return VerificationResult::Verified;
        };
        let result = bounded(self.timeout, self.phone_verifier.verify_phone(phone)).await;
        record(Check::Phone, &result);
        result
    }
}

async fn bounded<F>(timeout: Duration, check: F) -> VerificationResult
where
    F: std::future::Future<Output = VerificationResult>,
{
    match tokio::time::timeout(timeout, check).await {
        Ok(result) => result,
        Err(_) => VerificationResult::ServiceUnavailable(format!(
            "verification timed out after {}ms",
            timeout.as_millis()
        )),
    }
}

fn record(check: Check, result: &VerificationResult) {
    metrics::verification::record_result(check, result);
    match result {
        VerificationResult::Verified => debug!(check = %check, "Verification passed"),
        VerificationResult::Rejected(reason) => {
            debug!(check = %check, reason = %reason, "Verification rejected input")
        }
        VerificationResult::ServiceUnavailable(reason) => {
            warn!(check = %check, reason = %reason, "Verification service unavailable")
        }
    }
}
