use thiserror::Error;

/// Errors that are safe to expose to other crates.
///
/// Both a missing person and an email that is already taken surface as
/// `NotFound`; the message tells them apart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PersonsError {
    #[error("{message}")]
    NotFound { message: String },

    #[error("Internal error")]
    Internal,
}

impl PersonsError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal() -> Self {
        Self::Internal
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<crate::domain::error::DomainError> for PersonsError {
    fn from(domain_error: crate::domain::error::DomainError) -> Self {
        use crate::domain::error::DomainError::*;
        match domain_error {
            e @ (PersonNotFound { .. } | EmailAlreadyExists { .. }) => Self::not_found(e.to_string()),
            Database { .. } => Self::internal(),
        }
    }
}
