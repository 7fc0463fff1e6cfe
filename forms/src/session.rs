//! In-memory session context.
//!
//! There is no token model: signing in records who signed in, signing out
//! forgets it. The session is passed explicitly to whatever needs it.

use std::fmt;

use crate::fields::Redacted;

/// What the login screen submits.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &Redacted(&self.password))
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credentials are accepted as-is; only the email is kept.
    pub fn login(&mut self, credentials: &Credentials) {
        tracing::info!(email = %credentials.email, "Login attempt");
        self.user = Some(credentials.email.clone());
    }

    pub fn logout(&mut self) {
        if let Some(email) = self.user.take() {
            tracing::info!(%email, "Logged out");
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user_email(&self) -> Option<&str> {
        self.user.as_deref()
    }
}
