//! Signup input record and the commands that edit it.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The seven user-editable attributes of the signup form.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupFields {
    pub name: String,
    pub phone: String,
    pub date_of_birth: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub terms_accepted: bool,
}

// Passwords never reach the logs.
impl fmt::Debug for SignupFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupFields")
            .field("name", &self.name)
            .field("phone", &self.phone)
            .field("date_of_birth", &self.date_of_birth)
            .field("email", &self.email)
            .field("password", &Redacted(&self.password))
            .field("confirm_password", &Redacted(&self.confirm_password))
            .field("terms_accepted", &self.terms_accepted)
            .finish()
    }
}

pub(crate) struct Redacted<'a>(pub(crate) &'a str);

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} chars>", self.0.chars().count())
    }
}

/// A single-field edit coming from the input surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Name(String),
    Phone(String),
    DateOfBirth(String),
    Email(String),
    Password(String),
    ConfirmPassword(String),
    TermsAccepted(bool),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("unknown signup field `{0}`")]
    UnknownField(String),
    #[error("`{value}` is not a valid flag for {field}")]
    InvalidFlag { field: &'static str, value: String },
}

impl FieldUpdate {
    /// Build an update from a field name as it appears on the rendered form.
    ///
    /// Both the markup names (`dob`, `terms`) and the record names
    /// (`dateOfBirth`, `termsAccepted`) are accepted.
    pub fn parse(field: &str, raw: impl Into<String>) -> Result<Self, FieldError> {
        let raw = raw.into();
        let update = match field {
            "name" => FieldUpdate::Name(raw),
            "phone" => FieldUpdate::Phone(raw),
            "dob" | "dateOfBirth" | "date_of_birth" => FieldUpdate::DateOfBirth(raw),
            "email" => FieldUpdate::Email(raw),
            "password" => FieldUpdate::Password(raw),
            "confirmPassword" | "confirm_password" => FieldUpdate::ConfirmPassword(raw),
            "terms" | "termsAccepted" | "terms_accepted" => {
                FieldUpdate::TermsAccepted(parse_flag(&raw)?)
            }
            other => return Err(FieldError::UnknownField(other.to_string())),
        };
        Ok(update)
    }

    /// Overwrite exactly the addressed field.
    pub fn apply(self, fields: &mut SignupFields) {
        match self {
            FieldUpdate::Name(v) => fields.name = v,
            FieldUpdate::Phone(v) => fields.phone = v,
            FieldUpdate::DateOfBirth(v) => fields.date_of_birth = v,
            FieldUpdate::Email(v) => fields.email = v,
            FieldUpdate::Password(v) => fields.password = v,
            FieldUpdate::ConfirmPassword(v) => fields.confirm_password = v,
            FieldUpdate::TermsAccepted(v) => fields.terms_accepted = v,
        }
    }

    pub fn field_name(&self) -> &'static str {
        match self {
            FieldUpdate::Name(_) => "name",
            FieldUpdate::Phone(_) => "phone",
            FieldUpdate::DateOfBirth(_) => "dateOfBirth",
            FieldUpdate::Email(_) => "email",
            FieldUpdate::Password(_) => "password",
            FieldUpdate::ConfirmPassword(_) => "confirmPassword",
            FieldUpdate::TermsAccepted(_) => "termsAccepted",
        }
    }
}

fn parse_flag(raw: &str) -> Result<bool, FieldError> {
    match raw.trim() {
        "true" | "on" | "1" => Ok(true),
        "false" | "off" | "0" | "" => Ok(false),
        other => Err(FieldError::InvalidFlag {
            field: "termsAccepted",
            value: other.to_string(),
        }),
    }
}
