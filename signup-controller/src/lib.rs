//! Sign-up request handling.
//!
//! [`SignUpController`] validates a sign-up request, checks the email through
//! an injected [`EmailValidator`], and creates the account through an
//! injected [`AccountCreator`]. Every outcome is returned as an
//! [`HttpResponse`](signup_core::HttpResponse); collaborator failures become
//! `500` responses and never reach the caller.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod capability;
pub mod controller;
pub mod error;

pub use capability::{AccountCreator, EmailValidator};
pub use controller::{Controller, SignUpController, SignUpStage};
pub use error::CollaboratorError;
