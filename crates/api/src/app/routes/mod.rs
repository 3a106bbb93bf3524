use axum::{
    Router,
    routing::{get, post},
};

pub mod movements;
pub mod products;
pub mod system;

/// Router for the inventory endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/movimientos", post(movements::register_movement))
        .route("/movimientos/:ubicacion", get(movements::movements_for_location))
        .nest("/productos", products::router())
}
