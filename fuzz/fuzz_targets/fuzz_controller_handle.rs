//! Fuzz target: `SignUpController::handle` on arbitrary JSON bodies.
//!
//! The first input byte selects collaborator behaviour; the rest is parsed
//! as the request body. Every parsed body must produce a response whose
//! status agrees with its body.

#![no_main]

use async_trait::async_trait;
use libfuzzer_sys::fuzz_target;
use signup_controller::{
    AccountCreator, CollaboratorError, Controller, EmailValidator, SignUpController,
};
use signup_core::{Account, AccountId, AccountInput, ControllerError, HttpRequest, SignUpBody};

struct FixedValidator(u8);

impl EmailValidator for FixedValidator {
    fn is_valid(&self, _email: &str) -> Result<bool, CollaboratorError> {
        match self.0 % 3 {
            0 => Ok(true),
            1 => Ok(false),
            _ => Err(CollaboratorError::Unavailable("fuzz".to_owned())),
        }
    }
}

struct FixedCreator(bool);

#[async_trait]
impl AccountCreator for FixedCreator {
    async fn add(&self, input: AccountInput) -> Result<Account, CollaboratorError> {
        if self.0 {
            Ok(Account::new(AccountId::new(), input))
        } else {
            Err(CollaboratorError::Unavailable("fuzz".to_owned()))
        }
    }
}

fuzz_target!(|data: &[u8]| {
    let Some((&mode, json)) = data.split_first() else {
        return;
    };
    let Ok(body) = serde_json::from_slice::<SignUpBody>(json) else {
        return;
    };

    let controller = SignUpController::new(FixedValidator(mode), FixedCreator(mode & 0x80 == 0));
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("failed to build runtime");
    let resp = runtime.block_on(controller.handle(HttpRequest::new(body)));

    match resp.status_code() {
        200 => assert!(resp.data().is_some(), "200 must carry data"),
        400 => assert!(
            matches!(
                resp.error(),
                Some(ControllerError::MissingParam { .. } | ControllerError::InvalidParam { .. })
            ),
            "400 must carry a validation error"
        ),
        500 => assert_eq!(resp.error(), Some(&ControllerError::ServerError)),
        other => panic!("unexpected status {other}"),
    }
});
