//! Property tests: `handle` answers every request shape with a response and
//! reports the first failing check.

mod common;

use common::{AccountCreatorSpy, EmailValidatorSpy};
use proptest::prelude::*;
use signup_controller::{Controller, SignUpController};
use signup_core::{
    AccountId, ControllerError, HttpRequest, HttpResponse, SignUpBody, REQUIRED_FIELDS,
};

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    let runtime = match tokio::runtime::Builder::new_current_thread().build() {
        Ok(rt) => rt,
        Err(e) => panic!("failed to build runtime: {e}"),
    };
    runtime.block_on(future)
}

fn field_value() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        Just(Some(" ".to_owned())),
        "[a-z@.]{1,12}".prop_map(Some),
    ]
}

fn body_strategy() -> impl Strategy<Value = SignUpBody> {
    (field_value(), field_value(), field_value(), field_value()).prop_map(
        |(name, email, password, password_confirmation)| SignUpBody {
            name,
            email,
            password,
            password_confirmation,
        },
    )
}

fn first_missing(body: &SignUpBody) -> Option<&'static str> {
    REQUIRED_FIELDS
        .into_iter()
        .find(|field| body.field(field).map_or(true, str::is_empty))
}

proptest! {
    #[test]
    fn proptest_handle_always_responds_with_known_status(
        body in body_strategy(),
        email_ok in any::<bool>(),
    ) {
        let validator = if email_ok {
            EmailValidatorSpy::accepting()
        } else {
            EmailValidatorSpy::rejecting()
        };
        let sut =
            SignUpController::new(validator, AccountCreatorSpy::succeeding(AccountId::new()));
        let resp: HttpResponse<_> = block_on(sut.handle(HttpRequest::new(body)));
        prop_assert!(matches!(resp.status_code(), 200 | 400));
    }

    #[test]
    fn proptest_first_missing_field_is_reported(body in body_strategy()) {
        let expected = first_missing(&body);
        let sut = SignUpController::new(
            EmailValidatorSpy::accepting(),
            AccountCreatorSpy::succeeding(AccountId::new()),
        );
        let resp = block_on(sut.handle(HttpRequest::new(body.clone())));

        match expected {
            Some(field) => {
                prop_assert_eq!(resp.status_code(), 400);
                prop_assert_eq!(resp.error(), Some(&ControllerError::missing_param(field)));
            }
            None if body.password != body.password_confirmation => {
                prop_assert_eq!(
                    resp.error(),
                    Some(&ControllerError::invalid_param("passwordConfirmation"))
                );
            }
            None => {
                prop_assert_eq!(resp.status_code(), 200);
            }
        }
    }

    #[test]
    fn proptest_rejected_email_never_creates_account(
        name in "[a-z]{1,8}",
        email in "[a-z@.]{1,12}",
        password in "[a-z0-9]{1,8}",
    ) {
        let validator = std::sync::Arc::new(EmailValidatorSpy::rejecting());
        let creator = std::sync::Arc::new(AccountCreatorSpy::succeeding(AccountId::new()));
        let sut = SignUpController::new(validator.clone(), creator.clone());
        let body = SignUpBody::new(name, email.clone(), password.clone(), password);

        let resp = block_on(sut.handle(HttpRequest::new(body)));

        prop_assert_eq!(resp.error(), Some(&ControllerError::invalid_param("email")));
        prop_assert_eq!(validator.calls(), vec![email]);
        prop_assert!(creator.calls().is_empty());
    }
}
