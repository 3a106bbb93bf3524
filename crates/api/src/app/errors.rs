use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use merchstock_core::DomainError;

use crate::app::services::ServiceError;

/// Message returned when a movement is rejected for an unknown product or
/// insufficient stock. Clients match on this text.
pub const MOVEMENT_REJECTED: &str = "No hay suficiente stock o el producto no existe";

pub const MOVEMENT_REGISTERED: &str = "Movimiento registrado exitosamente";

/// Map a failed `POST /movimientos` to a response. Every failure is a 400,
/// including a poisoned lock.
pub fn movement_error_to_response(err: ServiceError) -> axum::response::Response {
    match err {
        ServiceError::Domain(DomainError::ProductNotFound(_)) => {
            json_error(StatusCode::BAD_REQUEST, "product_not_found", MOVEMENT_REJECTED)
        }
        ServiceError::Domain(DomainError::InsufficientStock { .. }) => {
            json_error(StatusCode::BAD_REQUEST, "insufficient_stock", MOVEMENT_REJECTED)
        }
        ServiceError::Domain(e) => domain_error_to_response(e),
        ServiceError::LockPoisoned => unavailable(StatusCode::BAD_REQUEST),
    }
}

/// Map a failed read to a response.
pub fn service_error_to_response(err: ServiceError) -> axum::response::Response {
    match err {
        ServiceError::Domain(e) => domain_error_to_response(e),
        ServiceError::LockPoisoned => unavailable(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(_) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", err.to_string())
        }
        DomainError::InvalidId(_) => json_error(StatusCode::BAD_REQUEST, "invalid_id", err.to_string()),
        DomainError::ProductNotFound(_) => {
            json_error(StatusCode::NOT_FOUND, "not_found", err.to_string())
        }
        DomainError::InsufficientStock { .. } => {
            json_error(StatusCode::BAD_REQUEST, "insufficient_stock", err.to_string())
        }
    }
}

fn unavailable(status: StatusCode) -> axum::response::Response {
    json_error(status, "internal_error", ServiceError::LockPoisoned.to_string())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
