//! Error catalog for the persons module.
//!
//! Each entry pins the HTTP status, title, and stable code a failure is
//! reported with. An email conflict shares the 404 status with a missing
//! person; clients distinguish them through `code` and `detail`.

use axum::http::StatusCode;
use modkit_errors::{ErrDef, Problem, ProblemResponse};

const TYPE_BASE: &str = "https://errors.example.com/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    PersonNotFound,
    EmailTaken,
    InternalDatabase,
}

const PERSON_NOT_FOUND: ErrDef = ErrDef {
    status: 404,
    title: "Person Not Found",
    code: "persons.person.not_found.v1",
    type_url: "https://errors.example.com/persons.person.not_found.v1",
};

const EMAIL_TAKEN: ErrDef = ErrDef {
    status: 404,
    title: "Email Already Exists",
    code: "persons.person.email_taken.v1",
    type_url: "https://errors.example.com/persons.person.email_taken.v1",
};

const INTERNAL_DATABASE: ErrDef = ErrDef {
    status: 500,
    title: "Internal Error",
    code: "persons.internal.database.v1",
    type_url: "https://errors.example.com/persons.internal.database.v1",
};

impl ErrorCode {
    pub const ALL: [ErrorCode; 3] = [
        ErrorCode::PersonNotFound,
        ErrorCode::EmailTaken,
        ErrorCode::InternalDatabase,
    ];

    #[inline]
    pub const fn def(&self) -> &'static ErrDef {
        match self {
            ErrorCode::PersonNotFound => &PERSON_NOT_FOUND,
            ErrorCode::EmailTaken => &EMAIL_TAKEN,
            ErrorCode::InternalDatabase => &INTERNAL_DATABASE,
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.def().status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn code(&self) -> &'static str {
        self.def().code
    }

    pub fn to_problem(&self, detail: impl Into<String>) -> Problem {
        self.def().to_problem(detail)
    }

    pub fn to_response(
        &self,
        detail: impl Into<String>,
        instance: &str,
        request_id: Option<&str>,
    ) -> ProblemResponse {
        self.def().to_response(detail, instance, request_id)
    }

    /// Look up a catalog entry by its stable code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    pub fn type_base() -> &'static str {
        TYPE_BASE
    }
}
