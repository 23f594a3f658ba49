use modkit_errors::ProblemResponse;

use crate::domain::error::DomainError;
use crate::errors::ErrorCode;

/// Map a domain error to an RFC 9457 ProblemResponse.
///
/// Missing records and taken emails both answer 404 with their own codes.
pub fn map_domain_error(
    e: &DomainError,
    instance: &str,
    request_id: Option<&str>,
) -> ProblemResponse {
    match e {
        DomainError::PersonNotFound { .. } => {
            ErrorCode::PersonNotFound.to_response(e.to_string(), instance, request_id)
        }
        DomainError::EmailAlreadyExists { .. } => {
            ErrorCode::EmailTaken.to_response(e.to_string(), instance, request_id)
        }
        DomainError::Database { .. } => {
            // Log the internal error details but don't expose them to the client
            tracing::error!(error = ?e, "Database error occurred");
            ErrorCode::InternalDatabase.to_response(
                "An internal database error occurred",
                instance,
                request_id,
            )
        }
    }
}
