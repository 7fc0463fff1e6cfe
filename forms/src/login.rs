//! Login screen.
//!
//! Submission passes the credentials straight to the [`Session`]; the only
//! checks are the ones the rendered inputs enforce (both fields required,
//! email-shaped email).

use crate::checks::is_valid_email;
use crate::session::{Credentials, Session};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Email is required.")]
    MissingEmail,
    #[error("Password is required.")]
    MissingPassword,
    #[error("Invalid email address.")]
    InvalidEmail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    credentials: Credentials,
    password_visible: bool,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, field: LoginField, value: impl Into<String>) {
        let value = value.into();
        match field {
            LoginField::Email => self.credentials.email = value,
            LoginField::Password => self.credentials.password = value,
        }
    }

    pub fn email(&self) -> &str {
        &self.credentials.email
    }

    pub fn password(&self) -> &str {
        &self.credentials.password
    }

    pub fn toggle_password_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    /// Check the inputs and, if they hold, sign the session in.
    ///
    /// The form keeps its values either way.
    pub fn submit(&self, session: &mut Session) -> Result<Credentials, LoginError> {
        let credentials = &self.credentials;
        if credentials.email.is_empty() {
            return Err(LoginError::MissingEmail);
        }
        if !is_valid_email(&credentials.email) {
            return Err(LoginError::InvalidEmail);
        }
        if credentials.password.is_empty() {
            return Err(LoginError::MissingPassword);
        }

        session.login(credentials);
        Ok(credentials.clone())
    }
}
