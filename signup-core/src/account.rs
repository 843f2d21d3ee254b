use serde::{Deserialize, Serialize};

use crate::id::AccountId;

/// Data handed to an account creator once a sign-up request has validated.
///
/// The password confirmation is a validation-only field and is not part of
/// this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct AccountInput {
    /// Display name chosen by the user.
    pub name: String,
    /// Email address, already accepted by the email validator.
    pub email: String,
    /// Password as submitted.
    pub password: String,
}

impl AccountInput {
    /// Creates an `AccountInput` from its three fields.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// An account as returned by the account creator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Account {
    /// Identifier assigned by the creator.
    pub id: AccountId,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Stored password. Never serialized into a response.
    #[serde(skip_serializing, default)]
    pub password: String,
}

impl Account {
    /// Creates an account from the creator-assigned `id` and the input it was
    /// created from.
    #[must_use]
    pub fn new(id: AccountId, input: AccountInput) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            password: input.password,
        }
    }
}
