use axum::http::StatusCode;

use super::problem::Problem;
use crate::domain::error::DomainError;

pub type ApiResult<T> = Result<T, Problem>;

/// Map domain error to RFC 9457 Problem
pub fn domain_error_to_problem(e: &DomainError, instance: &str) -> Problem {
    let trace_id = tracing::Span::current()
        .id()
        .map(|id| id.into_u64().to_string());

    let problem = match e {
        DomainError::NotFound { uid } => Problem::new(
            StatusCode::NOT_FOUND,
            "Address not found",
            format!("Address with uid {uid} was not found"),
        )
        .with_code("address_book.not_found"),
        DomainError::Validation { .. } => {
            Problem::new(StatusCode::BAD_REQUEST, "Validation failed", e.to_string())
                .with_code("address_book.validation")
        }
        DomainError::Database { .. } => {
            // Log the internal error details but don't expose them to the client
            tracing::error!(error = ?e, "Database error occurred");
            Problem::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                "An internal database error occurred",
            )
            .with_code("address_book.internal")
        }
    };

    let problem = problem.with_instance(instance);
    match trace_id {
        Some(id) => problem.with_trace_id(id),
        None => problem,
    }
}

impl From<DomainError> for Problem {
    fn from(e: DomainError) -> Self {
        domain_error_to_problem(&e, "/")
    }
}
