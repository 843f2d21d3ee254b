//! Capability doubles shared by the integration tests.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use signup_controller::{AccountCreator, CollaboratorError, EmailValidator};
use signup_core::{Account, AccountId, AccountInput};

/// Email validator returning a fixed answer and recording every call.
pub struct EmailValidatorSpy {
    answer: bool,
    fail: bool,
    calls: Mutex<Vec<String>>,
}

impl EmailValidatorSpy {
    pub fn accepting() -> Self {
        Self {
            answer: true,
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting() -> Self {
        Self {
            answer: false,
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            answer: false,
            fail: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        match self.calls.lock() {
            Ok(calls) => calls.clone(),
            Err(e) => panic!("validator spy lock poisoned: {e}"),
        }
    }
}

impl EmailValidator for EmailValidatorSpy {
    fn is_valid(&self, email: &str) -> Result<bool, CollaboratorError> {
        match self.calls.lock() {
            Ok(mut calls) => calls.push(email.to_owned()),
            Err(e) => panic!("validator spy lock poisoned: {e}"),
        }
        if self.fail {
            return Err(CollaboratorError::Unavailable("validator offline".to_owned()));
        }
        Ok(self.answer)
    }
}

/// Account creator assigning a fixed id and recording every input.
pub struct AccountCreatorSpy {
    id: AccountId,
    fail: bool,
    calls: Mutex<Vec<AccountInput>>,
}

impl AccountCreatorSpy {
    pub fn succeeding(id: AccountId) -> Self {
        Self {
            id,
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            id: AccountId::new(),
            fail: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<AccountInput> {
        match self.calls.lock() {
            Ok(calls) => calls.clone(),
            Err(e) => panic!("creator spy lock poisoned: {e}"),
        }
    }
}

#[async_trait]
impl AccountCreator for AccountCreatorSpy {
    async fn add(&self, input: AccountInput) -> Result<Account, CollaboratorError> {
        match self.calls.lock() {
            Ok(mut calls) => calls.push(input.clone()),
            Err(e) => panic!("creator spy lock poisoned: {e}"),
        }
        if self.fail {
            let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "db down");
            return Err(CollaboratorError::Io(io));
        }
        Ok(Account::new(self.id, input))
    }
}
