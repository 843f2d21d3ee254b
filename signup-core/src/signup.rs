//! Sign-up request body and its collaborator-free checks.

use serde::{Deserialize, Serialize};

use crate::account::AccountInput;
use crate::error::ControllerError;

/// Wire name of the `name` field.
pub const NAME: &str = "name";
/// Wire name of the `email` field.
pub const EMAIL: &str = "email";
/// Wire name of the `password` field.
pub const PASSWORD: &str = "password";
/// Wire name of the `passwordConfirmation` field.
pub const PASSWORD_CONFIRMATION: &str = "passwordConfirmation";

/// Required fields, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 4] = [NAME, EMAIL, PASSWORD, PASSWORD_CONFIRMATION];

/// Body of a sign-up request. Any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_confirmation: Option<String>,
}

impl SignUpBody {
    /// Creates a body with every field present.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        password_confirmation: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            password: Some(password.into()),
            password_confirmation: Some(password_confirmation.into()),
        }
    }

    /// Looks up a field by its wire name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            NAME => self.name.as_deref(),
            EMAIL => self.email.as_deref(),
            PASSWORD => self.password.as_deref(),
            PASSWORD_CONFIRMATION => self.password_confirmation.as_deref(),
            _ => None,
        }
    }

    /// Runs the checks that need no collaborator: required fields, then
    /// password confirmation.
    ///
    /// Empty strings count as missing. Whitespace is kept as-is.
    ///
    /// # Errors
    /// Returns [`ControllerError::MissingParam`] for the first absent or empty
    /// field in [`REQUIRED_FIELDS`] order, or
    /// [`ControllerError::InvalidParam`] for `passwordConfirmation` when it
    /// differs from `password`.
    pub fn validate(&self) -> Result<ValidatedSignUp, ControllerError> {
        let name = required(self.name.as_deref(), NAME)?;
        let email = required(self.email.as_deref(), EMAIL)?;
        let password = required(self.password.as_deref(), PASSWORD)?;
        let confirmation = required(self.password_confirmation.as_deref(), PASSWORD_CONFIRMATION)?;

        if password != confirmation {
            return Err(ControllerError::invalid_param(PASSWORD_CONFIRMATION));
        }

        Ok(ValidatedSignUp {
            name: name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        })
    }
}

fn required<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, ControllerError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ControllerError::missing_param(field)),
    }
}

/// A sign-up whose fields are present and whose passwords match.
///
/// Only obtainable through [`SignUpBody::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSignUp {
    name: String,
    email: String,
    password: String,
}

impl ValidatedSignUp {
    /// The email still to be checked by an email validator.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Projects to the data an account creator receives.
    #[must_use]
    pub fn into_account_input(self) -> AccountInput {
        AccountInput::new(self.name, self.email, self.password)
    }
}
