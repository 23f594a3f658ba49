use thiserror::Error;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("No records found for id {id}")]
    PersonNotFound { id: i64 },

    #[error("Person already exists with email '{email}'")]
    EmailAlreadyExists { email: String },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn person_not_found(id: i64) -> Self {
        Self::PersonNotFound { id }
    }

    pub fn email_already_exists(email: impl Into<String>) -> Self {
        Self::EmailAlreadyExists {
            email: email.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }

    /// True for every error reported to callers with the not-found kind.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::PersonNotFound { .. } | Self::EmailAlreadyExists { .. }
        )
    }
}

impl From<anyhow::Error> for DomainError {
    fn from(e: anyhow::Error) -> Self {
        // keep the whole context chain, the top frame alone is rarely useful
        Self::database(format!("{e:#}"))
    }
}
