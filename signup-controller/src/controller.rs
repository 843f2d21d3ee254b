//! The controller protocol and the sign-up controller.

use std::fmt;

use async_trait::async_trait;
use signup_core::signup::EMAIL;
use signup_core::{
    bad_request, ok, server_error, Account, ControllerError, HttpRequest, HttpResponse,
    SignUpBody,
};
use tracing::Instrument;

use crate::{AccountCreator, CollaboratorError, EmailValidator};

/// Maps one inbound request to one outbound response.
///
/// `handle` never fails: every outcome, including collaborator failures, is
/// expressed as an [`HttpResponse`].
#[async_trait]
pub trait Controller: Send + Sync {
    /// Request body type.
    type Body: Send;
    /// Success payload type.
    type Output: Send;

    /// Handle a single request.
    async fn handle(&self, request: HttpRequest<Self::Body>) -> HttpResponse<Self::Output>;
}

/// Last stage a sign-up completed before it responded. Recorded on every
/// log event the controller emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SignUpStage {
    Start,
    FieldsChecked,
    PasswordsMatched,
    EmailValidated,
    AccountCreated,
}

impl fmt::Display for SignUpStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Start => "start",
            Self::FieldsChecked => "fields_checked",
            Self::PasswordsMatched => "passwords_matched",
            Self::EmailValidated => "email_validated",
            Self::AccountCreated => "account_created",
        };
        f.write_str(s)
    }
}

/// Validates sign-up requests and delegates account creation.
///
/// Checks run in a fixed order and stop at the first failure:
/// 1. required fields `name`, `email`, `password`, `passwordConfirmation`
/// 2. `password` equals `passwordConfirmation`
/// 3. the [`EmailValidator`] accepts the email
/// 4. the [`AccountCreator`] creates the account
///
/// Holds no per-request state, so one instance can serve concurrent requests.
pub struct SignUpController<V: EmailValidator, A: AccountCreator> {
    email_validator: V,
    account_creator: A,
}

impl<V: EmailValidator, A: AccountCreator> SignUpController<V, A> {
    /// Create a controller with the given collaborators.
    #[must_use]
    pub fn new(email_validator: V, account_creator: A) -> Self {
        Self {
            email_validator,
            account_creator,
        }
    }

    /// Handle a sign-up request.
    ///
    /// Returns `400` with the failing check's error, `500` with
    /// [`ControllerError::ServerError`] if a collaborator fails, or `200` with
    /// the created [`Account`].
    ///
    /// # Panics
    /// Collaborator failures are only recognised through their `Err` arm. A
    /// collaborator that panics is not caught, and the panic unwinds out of
    /// this call.
    pub async fn sign_up(&self, request: HttpRequest<SignUpBody>) -> HttpResponse<Account> {
        let span = tracing::info_span!(
            "signup",
            email = request.body.email.as_deref().unwrap_or_default()
        );
        self.run(&request.body).instrument(span).await
    }

    async fn run(&self, body: &SignUpBody) -> HttpResponse<Account> {
        let validated = match body.validate() {
            Ok(v) => v,
            Err(e @ ControllerError::MissingParam { .. }) => {
                return reject(SignUpStage::Start, e);
            }
            Err(e) => return reject(SignUpStage::FieldsChecked, e),
        };

        match self.email_validator.is_valid(validated.email()) {
            Ok(true) => {}
            Ok(false) => {
                return reject(
                    SignUpStage::PasswordsMatched,
                    ControllerError::invalid_param(EMAIL),
                );
            }
            Err(e) => return collaborator_failed(SignUpStage::PasswordsMatched, &e),
        }

        match self.account_creator.add(validated.into_account_input()).await {
            Ok(account) => {
                tracing::info!(
                    stage = %SignUpStage::AccountCreated,
                    account_id = %account.id,
                    "account created"
                );
                ok(account)
            }
            Err(e) => collaborator_failed(SignUpStage::EmailValidated, &e),
        }
    }
}

#[async_trait]
impl<V: EmailValidator, A: AccountCreator> Controller for SignUpController<V, A> {
    type Body = SignUpBody;
    type Output = Account;

    async fn handle(&self, request: HttpRequest<SignUpBody>) -> HttpResponse<Account> {
        self.sign_up(request).await
    }
}

fn reject(stage: SignUpStage, error: ControllerError) -> HttpResponse<Account> {
    tracing::debug!(%stage, reason = %error, "sign-up rejected");
    bad_request(error)
}

fn collaborator_failed(stage: SignUpStage, error: &CollaboratorError) -> HttpResponse<Account> {
    tracing::error!(%stage, error = %error, "collaborator failed during sign-up");
    server_error()
}
