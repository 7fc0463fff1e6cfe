use crate::fields::SignupFields;
use serde::{Deserialize, Serialize};

/// Everything the signup screen renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupFormState {
    pub fields: SignupFields,
    /// Set by the most recent failed attempt.
    pub error_message: Option<String>,
    /// True only after a fully validated submission completed.
    pub is_success: bool,
    /// True only while the submission is in flight.
    pub is_submitting: bool,
    /// Shows both password inputs as plain text. Display-only.
    pub password_visible: bool,
}

/// Where the current (or last) submission attempt stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormPhase {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SignupFormState {
    pub fn phase(&self) -> FormPhase {
        if self.is_submitting {
            FormPhase::Submitting
        } else if self.error_message.is_some() {
            FormPhase::Failed
        } else if self.is_success {
            FormPhase::Succeeded
        } else {
            FormPhase::Idle
        }
    }

    /// Clear the outcome of the previous attempt.
    pub(crate) fn begin_attempt(&mut self) {
        self.error_message = None;
        self.is_success = false;
    }

    pub(crate) fn mark_submitting(&mut self) {
        self.is_submitting = true;
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.error_message = Some(message);
        self.is_success = false;
        self.is_submitting = false;
    }

    pub(crate) fn succeed(&mut self) {
        self.fields = SignupFields::default();
        self.error_message = None;
        self.is_success = true;
        self.is_submitting = false;
    }
}
