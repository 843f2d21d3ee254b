//! Error type for collaborator failures.

/// An unexpected failure raised by an email validator or account creator.
///
/// This is not a validation outcome. The controller turns any of these into
/// a `500` response and keeps the detail out of the response body.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CollaboratorError {
    /// The collaborator or one of its backing services cannot serve requests.
    #[error("collaborator unavailable: {0}")]
    Unavailable(String),

    /// Underlying I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Any other failure reported by a collaborator implementation.
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}
