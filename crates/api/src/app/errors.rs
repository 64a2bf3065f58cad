use axum::{Json, http::StatusCode, response::IntoResponse};

use tally_core::DomainError;

use crate::app::dto::ErrorsBody;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(violations) => {
            errors_response(StatusCode::BAD_REQUEST, ErrorsBody::fields(violations))
        }
        DomainError::NotFound(_) => not_found(err.to_string()),
        DomainError::LimitExceeded(_) | DomainError::Overflow(_) | DomainError::InvalidId(_) => {
            bad_request(err.to_string())
        }
        DomainError::StorePoisoned => {
            tracing::error!("{err}");
            errors_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorsBody::message("internal error"),
            )
        }
    }
}

pub fn bad_request(message: impl Into<String>) -> axum::response::Response {
    errors_response(StatusCode::BAD_REQUEST, ErrorsBody::message(message))
}

pub fn not_found(message: impl Into<String>) -> axum::response::Response {
    errors_response(StatusCode::NOT_FOUND, ErrorsBody::message(message))
}

pub fn errors_response(status: StatusCode, body: ErrorsBody) -> axum::response::Response {
    (status, Json(body)).into_response()
}
