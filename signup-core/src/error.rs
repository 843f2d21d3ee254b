use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Error value carried in the body of a non-success [`HttpResponse`].
///
/// These are returned, never propagated: a missing or invalid parameter is an
/// expected outcome of handling a request, not a fault.
///
/// [`HttpResponse`]: crate::HttpResponse
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum ControllerError {
    /// A required field was absent or empty.
    #[error("Missing param: {field}")]
    MissingParam { field: String },

    /// A field was present but failed validation.
    #[error("Invalid param: {field}")]
    InvalidParam { field: String },

    /// A collaborator failed unexpectedly. The underlying failure is not
    /// exposed.
    #[error("Internal server error")]
    ServerError,
}

impl ControllerError {
    /// Creates a [`ControllerError::MissingParam`] for `field`.
    pub fn missing_param(field: impl Into<String>) -> Self {
        Self::MissingParam {
            field: field.into(),
        }
    }

    /// Creates a [`ControllerError::InvalidParam`] for `field`.
    pub fn invalid_param(field: impl Into<String>) -> Self {
        Self::InvalidParam {
            field: field.into(),
        }
    }

    /// Stable name of the error kind, as exposed to API consumers.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::MissingParam { .. } => "MissingParamsError",
            Self::InvalidParam { .. } => "InvalidParamsError",
            Self::ServerError => "ServerError",
        }
    }

    /// The offending field, if the error refers to one.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingParam { field } | Self::InvalidParam { field } => Some(field.as_str()),
            Self::ServerError => None,
        }
    }
}

impl Serialize for ControllerError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ControllerError", 2)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}
