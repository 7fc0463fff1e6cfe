//! Render model for the signup screen.

use crate::state::SignupFormState;
use serde::Serialize;

pub const SUCCESS_MESSAGE: &str = "Signup successful!";
pub const SUBMIT_LABEL: &str = "Sign Up";
pub const SUBMITTING_LABEL: &str = "Signing Up...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Password,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupView {
    /// Inline error region; absent when there is nothing to show.
    pub error: Option<String>,
    pub success: Option<&'static str>,
    pub submit_label: &'static str,
    pub submit_enabled: bool,
    /// Applies to both the password and the confirmation input.
    pub password_input: InputKind,
}

impl SignupView {
    pub fn from_state(state: &SignupFormState) -> Self {
        Self {
            error: state
                .error_message
                .as_ref()
                .filter(|message| !message.is_empty())
                .cloned(),
            success: state.is_success.then_some(SUCCESS_MESSAGE),
            submit_label: if state.is_submitting {
                SUBMITTING_LABEL
            } else {
                SUBMIT_LABEL
            },
            submit_enabled: !state.is_submitting,
            password_input: if state.password_visible {
                InputKind::Text
            } else {
                InputKind::Password
            },
        }
    }
}
