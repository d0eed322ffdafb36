//! Metrics for the contact submission pipeline
//!
//! Recording functions are grouped by phase. Without an installed recorder
//! (library use, tests) every call is a no-op.

use once_cell::sync::OnceCell;
use std::fmt;
use tracing::info;

use crate::types::{Check, VerificationResult};

/// All metric names used by the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    SubmissionsTotal,
    VerificationsTotal,
    NotificationsSent,
    NotificationsFailed,
}

impl MetricName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::SubmissionsTotal => "estate_contact_submissions_total",
            MetricName::VerificationsTotal => "estate_contact_verifications_total",
            MetricName::NotificationsSent => "estate_contact_notifications_sent_total",
            MetricName::NotificationsFailed => "estate_contact_notifications_failed_total",
        }
    }

    pub fn all() -> &'static [MetricName] {
        &[
            MetricName::SubmissionsTotal,
            MetricName::VerificationsTotal,
            MetricName::NotificationsSent,
            MetricName::NotificationsFailed,
        ]
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static PROMETHEUS_HANDLE: OnceCell<metrics_exporter_prometheus::PrometheusHandle> = OnceCell::new();

/// Install the Prometheus recorder. Safe to call more than once; only the
/// first call installs.
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    if PROMETHEUS_HANDLE.get().is_some() {
        return Ok(());
    }
    let handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| format!("Failed to install Prometheus recorder: {}", e))?;
    PROMETHEUS_HANDLE.set(handle).ok();

    for name in MetricName::all() {
        ::metrics::describe_counter!(name.as_str(), describe(*name));
    }
    info!("Metrics recorder installed");
    Ok(())
}

/// Prometheus text exposition of everything recorded so far.
pub fn render() -> Option<String> {
    PROMETHEUS_HANDLE.get().map(|handle| handle.render())
}

fn describe(name: MetricName) -> &'static str {
    match name {
        MetricName::SubmissionsTotal => "Contact form submissions by outcome",
        MetricName::VerificationsTotal => "External verification results by check",
        MetricName::NotificationsSent => "Notification sends acknowledged by the provider",
        MetricName::NotificationsFailed => "Notification sends that failed",
    }
}

pub mod submission {
    use super::MetricName;

    pub fn record_outcome(outcome: &'static str) {
        ::metrics::counter!(MetricName::SubmissionsTotal.as_str(), "outcome" => outcome).increment(1);
    }
}

pub mod verification {
    use super::{Check, MetricName, VerificationResult};

    pub fn record_result(check: Check, result: &VerificationResult) {
        ::metrics::counter!(
            MetricName::VerificationsTotal.as_str(),
            "check" => check.as_str(),
            "result" => result.label()
        )
        .increment(1);
    }
}

pub mod dispatch {
    use super::MetricName;

    pub fn record_sent(leg: &'static str) {
        ::metrics::counter!(MetricName::NotificationsSent.as_str(), "leg" => leg).increment(1);
    }

    pub fn record_failed(leg: &'static str) {
        ::metrics::counter!(MetricName::NotificationsFailed.as_str(), "leg" => leg).increment(1);
    }
}
