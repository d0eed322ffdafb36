use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tracing::{debug, error, info, warn, Instrument};
use uuid::Uuid;

use crate::app::dispatch::NotificationDispatcher;
use crate::app::ports::FormView;
use crate::app::verification::VerificationGateway;
use crate::constants::MSG_SUCCESS;
use crate::error::SubmissionFailure;
use crate::observability::metrics;
use crate::types::{Check, DispatchResult, SubmissionInput, UiState, ValidationResult, VerificationResult};
use crate::validation::validate;

fn lock_state(state: &Mutex<UiState>) -> MutexGuard<'_, UiState> {
    state.lock().unwrap_or_else(|e| e.into_inner())
}

/// One submission between leaving `Submitting` and settling.
///
/// The final state is written before the form controls come back, so an
/// enabled submit control always means a new submit is accepted. If the
/// submission future is dropped before it settles, the state falls back to
/// `Idle` and the controls are restored anyway.
struct InFlight {
    view: Arc<dyn FormView>,
    state: Arc<Mutex<UiState>>,
    busy: bool,
    settled: bool,
}

impl InFlight {
    fn new(view: Arc<dyn FormView>, state: Arc<Mutex<UiState>>) -> Self {
        Self {
            view,
            state,
            busy: false,
            settled: false,
        }
    }

    /// Disable the submit control and show the busy indicator.
    fn enter_busy(&mut self) {
        self.view.set_submit_enabled(false);
        self.view.set_busy(true);
        self.busy = true;
    }

    fn settle(mut self, final_state: UiState) {
        *lock_state(&self.state) = final_state;
        self.settled = true;
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if !self.settled {
            let mut state = lock_state(&self.state);
            if *state == UiState::Submitting {
                warn!("Submission abandoned before it settled");
                *state = UiState::Idle;
            }
        }
        if self.busy {
            self.view.set_busy(false);
            self.view.set_submit_enabled(true);
        }
    }
}

/// Drives one contact form through validate → verify → dispatch and owns its
/// `UiState`. One submission runs at a time.
pub struct SubmissionUseCase {
    verification: VerificationGateway,
    dispatcher: NotificationDispatcher,
    view: Arc<dyn FormView>,
    state: Arc<Mutex<UiState>>,
    generation: Arc<AtomicU64>,
    success_reset: Duration,
}

impl SubmissionUseCase {
    pub fn new(
        verification: VerificationGateway,
        dispatcher: NotificationDispatcher,
        view: Arc<dyn FormView>,
        success_reset: Duration,
    ) -> Self {
        Self {
            verification,
            dispatcher,
            view,
            state: Arc::new(Mutex::new(UiState::Idle)),
            generation: Arc::new(AtomicU64::new(0)),
            success_reset,
        }
    }

    pub fn state(&self) -> UiState {
        lock_state(&self.state).clone()
    }

    /// Handle one submit event and return the state it settled in.
    ///
    /// A submit that arrives while another is in flight is ignored and
    /// reports `Submitting`.
    pub async fn submit(&self, input: SubmissionInput) -> UiState {
        let generation = {
            let mut state = lock_state(&self.state);
            if *state == UiState::Submitting {
                warn!("Submit ignored: a submission is already in progress");
                return UiState::Submitting;
            }
            *state = UiState::Submitting;
            self.generation.fetch_add(1, Ordering::SeqCst) + 1
        };
        let mut in_flight = InFlight::new(Arc::clone(&self.view), Arc::clone(&self.state));

        let submission_id = Uuid::new_v4();
        let span = tracing::info_span!("submission", id = %submission_id);

        self.view.hide_success();
        self.view.hide_error();

        let outcome = self.run(&input, &mut in_flight).instrument(span.clone()).await;

        let final_state = span.in_scope(|| match outcome {
            Ok(()) => {
                metrics::submission::record_outcome("success");
                info!("Submission delivered");
                self.view.show_success(MSG_SUCCESS);
                self.view.clear_fields();
                self.schedule_reset(generation);
                UiState::Success
            }
            Err(failure) => {
                metrics::submission::record_outcome(failure.kind());
                match &failure {
                    SubmissionFailure::ServiceUnavailable { .. } | SubmissionFailure::DeliveryFailure(_) => {
                        error!(kind = failure.kind(), "Submission failed: {}", failure);
                    }
                    _ => debug!(kind = failure.kind(), "Submission refused: {}", failure),
                }
                let message = failure.user_message();
                self.view.show_error(message);
                UiState::Error(message.to_string())
            }
        });

        in_flight.settle(final_state.clone());
        final_state
    }

    async fn run(&self, input: &SubmissionInput, in_flight: &mut InFlight) -> Result<(), SubmissionFailure> {
        let submission = match validate(input) {
            ValidationResult::Valid(submission) => submission,
            ValidationResult::Invalid(reason) => {
                // Controls were never disabled; make sure they read as usable.
                self.view.set_submit_enabled(true);
                return Err(SubmissionFailure::InputInvalid(reason));
            }
        };

        in_flight.enter_busy();

        require_verified(Check::Email, self.verification.verify_email(submission.email()).await)?;
        require_verified(Check::Phone, self.verification.verify_phone(submission.phone()).await)?;

        match self.dispatcher.dispatch(&submission).await {
            DispatchResult::Success => Ok(()),
            DispatchResult::Failure(reason) => Err(SubmissionFailure::DeliveryFailure(reason)),
        }
    }

    fn schedule_reset(&self, generation: u64) {
        let state = Arc::clone(&self.state);
        let current = Arc::clone(&self.generation);
        let view = Arc::clone(&self.view);
        let delay = self.success_reset;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if current.load(Ordering::SeqCst) != generation {
                return;
            }
            let mut state = lock_state(&state);
            if *state == UiState::Success {
                view.hide_success();
                *state = UiState::Idle;
                debug!("Success indicator reset");
            }
        });
    }
}

fn require_verified(check: Check, result: VerificationResult) -> Result<(), SubmissionFailure> {
    match result {
        VerificationResult::Verified => Ok(()),
        VerificationResult::Rejected(reason) => Err(SubmissionFailure::Rejected { check, reason }),
        VerificationResult::ServiceUnavailable(reason) => {
            Err(SubmissionFailure::ServiceUnavailable { check, reason })
        }
    }
}
