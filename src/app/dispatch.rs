use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, instrument};

use crate::app::ports::NotificationSenderPort;
use crate::observability::metrics;
use crate::types::{DispatchResult, ValidatedSubmission};

/// Template identifiers for the two notification legs.
#[derive(Debug, Clone)]
pub struct NotificationTemplates {
    pub admin_template_id: String,
    pub user_template_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Leg {
    Admin,
    User,
}

impl Leg {
    fn as_str(&self) -> &'static str {
        match self {
            Leg::Admin => "admin",
            Leg::User => "user",
        }
    }
}

/// Sends the admin notification, then the user confirmation.
///
/// The admin leg always goes first: the business must receive the lead even
/// if the confirmation later fails, and a failed admin send stops before the
/// user is told anything. A delivered admin notification is never retracted.
pub struct NotificationDispatcher {
    sender: Arc<dyn NotificationSenderPort>,
    templates: NotificationTemplates,
    timeout: Duration,
}

impl NotificationDispatcher {
    pub fn new(
        sender: Arc<dyn NotificationSenderPort>,
        templates: NotificationTemplates,
        timeout: Duration,
    ) -> Self {
        Self {
            sender,
            templates,
            timeout,
        }
    }

    #[instrument(skip(self, submission))]
    pub async fn dispatch(&self, submission: &ValidatedSubmission) -> DispatchResult {
        let admin = match serde_json::to_value(submission.admin_notification()) {
            Ok(params) => params,
            Err(e) => return DispatchResult::Failure(format!("could not encode admin notification: {}", e)),
        };
        let user = match serde_json::to_value(submission.user_confirmation()) {
            Ok(params) => params,
            Err(e) => return DispatchResult::Failure(format!("could not encode user confirmation: {}", e)),
        };

        if let Err(reason) = self.send_leg(Leg::Admin, &self.templates.admin_template_id, admin).await {
            return DispatchResult::Failure(reason);
        }
        if let Err(reason) = self.send_leg(Leg::User, &self.templates.user_template_id, user).await {
            return DispatchResult::Failure(reason);
        }

        DispatchResult::Success
    }

    async fn send_leg(&self, leg: Leg, template_id: &str, params: serde_json::Value) -> Result<(), String> {
        let outcome = match tokio::time::timeout(self.timeout, self.sender.send(template_id, params)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(format!("{} notification timed out after {}ms", leg.as_str(), self.timeout.as_millis())),
        };

        match &outcome {
            Ok(()) => {
                metrics::dispatch::record_sent(leg.as_str());
                info!(leg = leg.as_str(), template_id, "Notification sent");
            }
            Err(reason) => {
                metrics::dispatch::record_failed(leg.as_str());
                error!(leg = leg.as_str(), template_id, reason = %reason, "Notification send failed");
            }
        }
        outcome.map_err(|reason| format!("{} notification: {}", leg.as_str(), reason))
    }
}
