use thiserror::Error;

/// Why a signup attempt did not complete.
///
/// The `Display` text is the literal message shown in the form's error region.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("Invalid email address.")]
    InvalidEmail,
    #[error("Password must be at least {min} characters long.")]
    PasswordTooShort { min: usize },
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("You must accept the terms and conditions.")]
    TermsNotAccepted,
    #[error("{0}")]
    Backend(#[from] BackendError),
}

impl SignupError {
    /// True for the four client-side checks, false for submission failures.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SignupError::InvalidEmail
                | SignupError::PasswordTooShort { .. }
                | SignupError::PasswordMismatch
                | SignupError::TermsNotAccepted
        )
    }
}

/// Failure reported by a signup backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct BackendError(pub String);

impl BackendError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
