use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use tally_accounts::TransferRequest;
use tally_core::error::not_found_message;
use tally_core::{AccountId, DomainError};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_accounts).post(create_account))
        .route("/transfer", post(transfer))
        .route("/:id", get(get_account))
}

pub async fn list_accounts(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.accounts_list() {
        Ok(accounts) => (StatusCode::OK, Json(accounts)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn create_account(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::CreateAccountRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::bad_request(rejection.body_text()),
    };

    match services.account_create(body.into()) {
        Ok(account) => (StatusCode::OK, Json(account)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_account(
    Extension(services): Extension<Arc<AppServices>>,
    Path(raw_id): Path<String>,
) -> axum::response::Response {
    let id = match raw_id.parse::<AccountId>() {
        Ok(id) => id,
        Err(_) => return errors::not_found(not_found_message(&raw_id)),
    };

    match services.account_get(id) {
        Ok(account) => (StatusCode::OK, Json(account)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn transfer(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<TransferRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(request) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::bad_request(rejection.body_text()),
    };

    match services.transfer(&request) {
        Ok(sender) => (StatusCode::OK, Json(sender)).into_response(),
        // An unknown account in the body is bad input, not a missing resource.
        Err(e @ DomainError::NotFound(_)) => errors::bad_request(e.to_string()),
        Err(e) => errors::domain_error_to_response(e),
    }
}
