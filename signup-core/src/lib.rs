//! Value types for the sign-up controller.
//!
//! Defines the request and response envelopes, the error values carried in
//! error responses, the sign-up body with its collaborator-free checks, and
//! the account types exchanged with an account creator.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod account;
pub mod error;
pub mod http;
pub mod id;
pub mod signup;

pub use account::{Account, AccountInput};
pub use error::ControllerError;
pub use http::{bad_request, ok, server_error, HttpRequest, HttpResponse, ResponseBody};
pub use id::AccountId;
pub use signup::{SignUpBody, ValidatedSignUp, REQUIRED_FIELDS};
