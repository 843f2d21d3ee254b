//! Capabilities the sign-up controller depends on.
//!
//! Each trait exposes exactly the operation the controller needs. Any type
//! implementing it can be injected, including plain test doubles.

use std::sync::Arc;

use async_trait::async_trait;
use signup_core::{Account, AccountInput};

use crate::CollaboratorError;

/// Syntactic email check.
///
/// Implementations must be `Send + Sync` so a controller can be shared across
/// concurrent requests.
pub trait EmailValidator: Send + Sync {
    /// Return whether `email` is acceptable.
    ///
    /// Must not have side effects the controller relies on.
    ///
    /// # Errors
    /// Returns a [`CollaboratorError`] only for unexpected failures. An
    /// unacceptable address is `Ok(false)`.
    fn is_valid(&self, email: &str) -> Result<bool, CollaboratorError>;
}

/// Creates and persists a new account.
///
/// # Cancel Safety
/// The controller awaits [`AccountCreator::add`] once and holds no state
/// across the await. Whether a dropped future leaves a partially created
/// account is up to the implementation.
#[async_trait]
pub trait AccountCreator: Send + Sync {
    /// Create an account from validated input.
    ///
    /// # Errors
    /// Returns a [`CollaboratorError`] if the account cannot be created.
    async fn add(&self, input: AccountInput) -> Result<Account, CollaboratorError>;
}

impl<T: EmailValidator + ?Sized> EmailValidator for Arc<T> {
    fn is_valid(&self, email: &str) -> Result<bool, CollaboratorError> {
        (**self).is_valid(email)
    }
}

#[async_trait]
impl<T: AccountCreator + ?Sized> AccountCreator for Arc<T> {
    async fn add(&self, input: AccountInput) -> Result<Account, CollaboratorError> {
        (**self).add(input).await
    }
}
