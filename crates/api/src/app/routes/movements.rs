use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// `POST /movimientos`: register an inbound or outbound movement.
///
/// Body problems (bad JSON, missing fields, wrong types) are reported as 400
/// with the parser's message.
pub async fn register_movement(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::RegisterMovementRequest>, JsonRejection>,
) -> axum::response::Response {
    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "malformed movement request");
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "malformed_body",
                rejection.body_text(),
            );
        }
    };

    let cmd = body.into_command();
    match services.register_movement(cmd) {
        Ok(movement) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "message": errors::MOVEMENT_REGISTERED,
                "id": movement.id_typed().get(),
            })),
        )
            .into_response(),
        Err(e) => errors::movement_error_to_response(e),
    }
}

/// `GET /movimientos/:ubicacion`: ledger entries for one location, oldest first.
pub async fn movements_for_location(
    Extension(services): Extension<Arc<AppServices>>,
    Path(ubicacion): Path<String>,
) -> axum::response::Response {
    let location = dto::location_from_path(&ubicacion);
    match services.movements_for_location(location) {
        Ok(movements) => (StatusCode::OK, Json(dto::movements_to_json(&movements))).into_response(),
        Err(e) => errors::json_error(StatusCode::BAD_REQUEST, "internal_error", e.to_string()),
    }
}
