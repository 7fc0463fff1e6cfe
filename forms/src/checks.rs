//! Client-side signup checks.
//!
//! Each check is a pass-through transition: it returns its input untouched or
//! faults with the matching [`SignupError`]. Chained in an Axon, the first
//! fault wins.

use crate::error::SignupError;
use crate::fields::SignupFields;
use crate::submission::SignupResources;
use async_trait::async_trait;
use regex::Regex;
use std::sync::LazyLock;
use vertex_core::prelude::*;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// `local@domain.tld` shape: no whitespace, exactly one `@`, a dot after it.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[derive(Debug, Clone, Copy)]
pub struct CheckEmail;

#[async_trait]
impl Transition<SignupFields, SignupFields> for CheckEmail {
    type Error = SignupError;
    type Resources = SignupResources;

    async fn run(
        &self,
        fields: SignupFields,
        _resources: &Self::Resources,
        _bus: &mut Bus,
    ) -> Outcome<SignupFields, Self::Error> {
        if is_valid_email(&fields.email) {
            Outcome::next(fields)
        } else {
            Outcome::fault(SignupError::InvalidEmail)
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CheckPasswordLength;

#[async_trait]
impl Transition<SignupFields, SignupFields> for CheckPasswordLength {
    type Error = SignupError;
    type Resources = SignupResources;

    async fn run(
        &self,
        fields: SignupFields,
        resources: &Self::Resources,
        _bus: &mut Bus,
    ) -> Outcome<SignupFields, Self::Error> {
        let min = resources.config.min_password_len;
        // Measured in UTF-16 code units, as the browser counts `value.length`.
        if fields.password.encode_utf16().count() >= min {
            Outcome::next(fields)
        } else {
            Outcome::fault(SignupError::PasswordTooShort { min })
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CheckPasswordMatch;

#[async_trait]
impl Transition<SignupFields, SignupFields> for CheckPasswordMatch {
    type Error = SignupError;
    type Resources = SignupResources;

    async fn run(
        &self,
        fields: SignupFields,
        _resources: &Self::Resources,
        _bus: &mut Bus,
    ) -> Outcome<SignupFields, Self::Error> {
        if fields.password == fields.confirm_password {
            Outcome::next(fields)
        } else {
            Outcome::fault(SignupError::PasswordMismatch)
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CheckTermsAccepted;

#[async_trait]
impl Transition<SignupFields, SignupFields> for CheckTermsAccepted {
    type Error = SignupError;
    type Resources = SignupResources;

    async fn run(
        &self,
        fields: SignupFields,
        _resources: &Self::Resources,
        _bus: &mut Bus,
    ) -> Outcome<SignupFields, Self::Error> {
        if fields.terms_accepted {
            Outcome::next(fields)
        } else {
            Outcome::fault(SignupError::TermsNotAccepted)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormsConfig;

    #[test]
    fn test_email_shape() {
        for ok in ["john@example.com", "a@b.c", "first.last@mail.example.org", "x+y@d.io"] {
            assert!(is_valid_email(ok), "{ok} should be accepted");
        }
        for bad in [
            "",
            "invalid-email",
            "john@example",
            "@example.com",
            "john@.com",
            "john@example.",
            "jo hn@example.com",
            "john@exa mple.com",
            "john@@example.com",
            "john@example@com.org",
            " john@example.com",
            "john@example.com\n",
        ] {
            assert!(!is_valid_email(bad), "{bad:?} should be rejected");
        }
    }

    #[tokio::test]
    async fn test_password_length_counts_utf16_units() {
        let resources = SignupResources::simulated(FormsConfig::default());
        let check = |password: &str| SignupFields {
            password: password.into(),
            ..Default::default()
        };

        // 8 units, 16 bytes
        let outcome = CheckPasswordLength
            .run(check("ääääääää"), &resources, &mut Bus::new())
            .await;
        assert!(outcome.is_next());

        // 4 code points outside the BMP are 8 units
        let outcome = CheckPasswordLength
            .run(check("😀😀😀😀"), &resources, &mut Bus::new())
            .await;
        assert!(outcome.is_next());

        // 7 units
        let outcome = CheckPasswordLength
            .run(check("😀😀😀a"), &resources, &mut Bus::new())
            .await;
        assert_eq!(outcome, Outcome::Fault(SignupError::PasswordTooShort { min: 8 }));
    }

    #[tokio::test]
    async fn test_password_length_uses_configured_minimum() {
        let config = FormsConfig {
            min_password_len: 12,
            ..Default::default()
        };
        let resources = SignupResources::simulated(config);
        let fields = SignupFields {
            password: "password123".into(),
            ..Default::default()
        };

        let outcome = CheckPasswordLength
            .run(fields, &resources, &mut Bus::new())
            .await;
        assert_eq!(outcome, Outcome::Fault(SignupError::PasswordTooShort { min: 12 }));
    }

    #[tokio::test]
    async fn test_password_match_is_case_sensitive() {
        let resources = SignupResources::simulated(FormsConfig::default());
        let fields = SignupFields {
            password: "Password123".into(),
            confirm_password: "password123".into(),
            ..Default::default()
        };

        let outcome = CheckPasswordMatch
            .run(fields, &resources, &mut Bus::new())
            .await;
        assert_eq!(outcome, Outcome::Fault(SignupError::PasswordMismatch));
    }
}
