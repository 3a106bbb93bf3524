use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use merchstock_core::ProductId;
use merchstock_inventory::Category;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/:id", get(get_product))
        .route("/:id/movimientos", get(get_product_movements))
}

fn parse_product_id(id: &str) -> Result<ProductId, axum::response::Response> {
    id.parse()
        .map_err(|_| errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id"))
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ListProductsQuery>,
) -> axum::response::Response {
    let category = match query.categoria.as_deref().map(str::parse::<Category>) {
        None => None,
        Some(Ok(c)) => Some(c),
        Some(Err(e)) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_category", e.to_string());
        }
    };

    match services.products(category) {
        Ok(products) => {
            let body: Vec<dto::ProductResponse> =
                products.iter().map(dto::ProductResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_product_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.product(id) {
        Ok(p) => (StatusCode::OK, Json(dto::ProductResponse::from(&p))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn get_product_movements(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_product_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.movements_for_product(id) {
        Ok(movements) => (StatusCode::OK, Json(dto::movements_to_json(&movements))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
