pub mod emailjs;
pub mod form_view;
pub mod http_client;
pub mod mailboxlayer;
pub mod numverify;

use std::sync::Arc;

use crate::app::dispatch::{NotificationDispatcher, NotificationTemplates};
use crate::app::ports::FormView;
use crate::app::submission_use_case::SubmissionUseCase;
use crate::app::verification::VerificationGateway;
use crate::config::{Config, Credentials};
use crate::error::Result;

/// Wire the production adapters into a submission use case.
pub fn build_submission_use_case(
    config: &Config,
    credentials: &Credentials,
    view: Arc<dyn FormView>,
) -> Result<SubmissionUseCase> {
    let timeout = config.pipeline.request_timeout();
    let client = http_client::build_client(timeout)?;

    let email_verifier = mailboxlayer::MailboxLayerVerifier::new(
        client.clone(),
        config.email_verification.base_url.clone(),
        credentials.mailboxlayer_access_key.clone(),
    );
    let phone_verifier = numverify::NumverifyVerifier::new(
        client.clone(),
        config.phone_verification.base_url.clone(),
        credentials.numverify_access_key.clone(),
        config.phone_verification.country_code.clone(),
    );
    let sender = emailjs::EmailJsSender::new(
        client,
        config.notifications.base_url.clone(),
        config.notifications.service_id.clone(),
        credentials.emailjs_public_key.clone(),
        credentials.emailjs_private_key.clone(),
    );

    let verification = VerificationGateway::new(Arc::new(email_verifier), Arc::new(phone_verifier), timeout);
    let dispatcher = NotificationDispatcher::new(
        Arc::new(sender),
        NotificationTemplates {
            admin_template_id: config.notifications.admin_template_id.clone(),
            user_template_id: config.notifications.user_template_id.clone(),
        },
        timeout,
    );

    Ok(SubmissionUseCase::new(
        verification,
        dispatcher,
        view,
        config.pipeline.success_reset(),
    ))
}
