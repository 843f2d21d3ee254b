//! Request/response envelopes and the helpers that build responses.
//!
//! A response can only be built through [`ok`], [`bad_request`] or
//! [`server_error`], so its status code always agrees with its body:
//!
//! | status | body |
//! |--------|------|
//! | 200 | [`ResponseBody::Data`] |
//! | 400 | [`ResponseBody::Error`] holding a validation error |
//! | 500 | [`ResponseBody::Error`] holding [`ControllerError::ServerError`] |

use serde::{Deserialize, Serialize};

use crate::error::ControllerError;

/// Status code of a successful response.
pub const STATUS_OK: u16 = 200;
/// Status code of a response rejecting the request.
pub const STATUS_BAD_REQUEST: u16 = 400;
/// Status code of a response reporting a collaborator failure.
pub const STATUS_INTERNAL_SERVER_ERROR: u16 = 500;

// ── Request ───────────────────────────────────────────────────────────────────

/// An inbound request as seen by a controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpRequest<B> {
    pub body: B,
}

impl<B> HttpRequest<B> {
    /// Wraps `body` in a request envelope.
    #[must_use]
    pub fn new(body: B) -> Self {
        Self { body }
    }
}

// ── Response ──────────────────────────────────────────────────────────────────

/// Payload of an [`HttpResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody<T> {
    /// The request failed; carries the error value.
    Error(ControllerError),
    /// The request succeeded; carries its result.
    Data(T),
}

/// An outbound response: a status code and a body whose category matches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HttpResponse<T> {
    status_code: u16,
    body: ResponseBody<T>,
}

impl<T> HttpResponse<T> {
    /// HTTP status code of the response.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Borrows the response body.
    #[must_use]
    pub fn body(&self) -> &ResponseBody<T> {
        &self.body
    }

    /// Consumes the response and returns its body.
    #[must_use]
    pub fn into_body(self) -> ResponseBody<T> {
        self.body
    }

    /// Returns the error value, if this is an error response.
    #[must_use]
    pub fn error(&self) -> Option<&ControllerError> {
        match &self.body {
            ResponseBody::Error(e) => Some(e),
            ResponseBody::Data(_) => None,
        }
    }

    /// Returns the success payload, if this is a success response.
    #[must_use]
    pub fn data(&self) -> Option<&T> {
        match &self.body {
            ResponseBody::Data(d) => Some(d),
            ResponseBody::Error(_) => None,
        }
    }

    /// `true` for a 2xx status code.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

// ── Builders ──────────────────────────────────────────────────────────────────

/// Builds a `200` response carrying `data`.
#[must_use]
pub fn ok<T>(data: T) -> HttpResponse<T> {
    HttpResponse {
        status_code: STATUS_OK,
        body: ResponseBody::Data(data),
    }
}

/// Builds a `400` response wrapping `error`.
#[must_use]
pub fn bad_request<T>(error: ControllerError) -> HttpResponse<T> {
    HttpResponse {
        status_code: STATUS_BAD_REQUEST,
        body: ResponseBody::Error(error),
    }
}

/// Builds a `500` response wrapping a fresh [`ControllerError::ServerError`].
#[must_use]
pub fn server_error<T>() -> HttpResponse<T> {
    HttpResponse {
        status_code: STATUS_INTERNAL_SERVER_ERROR,
        body: ResponseBody::Error(ControllerError::ServerError),
    }
}
