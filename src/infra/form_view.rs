use std::sync::Mutex;
use tracing::debug;

use crate::app::ports::FormView;

/// Indicator and control state of the contact form at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub success_visible: bool,
    pub success_text: String,
    pub error_visible: bool,
    pub error_text: String,
    pub busy_visible: bool,
    pub busy_shown_count: usize,
    pub submit_enabled: bool,
    pub fields_cleared: usize,
}

impl Default for FormSnapshot {
    fn default() -> Self {
        Self {
            success_visible: false,
            success_text: String::new(),
            error_visible: false,
            error_text: String::new(),
            busy_visible: false,
            busy_shown_count: 0,
            submit_enabled: true,
            fields_cleared: 0,
        }
    }
}

/// Headless form used by the CLI and by tests. Every update is logged at
/// debug level and kept for inspection.
#[derive(Debug, Default)]
pub struct InMemoryFormView {
    inner: Mutex<FormSnapshot>,
}

impl InMemoryFormView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> FormSnapshot {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn update(&self, f: impl FnOnce(&mut FormSnapshot)) {
        let mut snapshot = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut snapshot);
    }
}

impl FormView for InMemoryFormView {
    fn show_success(&self, message: &str) {
        debug!(message, "form: show success");
        self.update(|s| {
            s.success_visible = true;
            s.success_text = message.to_string();
        });
    }

    fn hide_success(&self) {
        self.update(|s| s.success_visible = false);
    }

    fn show_error(&self, message: &str) {
        debug!(message, "form: show error");
        self.update(|s| {
            s.error_visible = true;
            s.error_text = message.to_string();
        });
    }

    fn hide_error(&self) {
        self.update(|s| s.error_visible = false);
    }

    fn set_busy(&self, visible: bool) {
        debug!(visible, "form: busy indicator");
        self.update(|s| {
            s.busy_visible = visible;
            if visible {
                s.busy_shown_count += 1;
            }
        });
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.update(|s| s.submit_enabled = enabled);
    }

    fn clear_fields(&self) {
        debug!("form: fields cleared");
        self.update(|s| s.fields_cleared += 1);
    }
}
