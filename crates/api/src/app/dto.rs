use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use merchstock_core::ProductId;
use merchstock_inventory::{Location, Movement, MovementKind, Product, RegisterMovement};

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /movimientos`. Every field is required.
#[derive(Debug, Deserialize)]
pub struct RegisterMovementRequest {
    pub producto_id: u64,
    pub tipo: String,
    pub ubicacion: String,
    pub cantidad: i64,
    pub descripcion: String,
}

impl RegisterMovementRequest {
    pub fn into_command(self) -> RegisterMovement {
        RegisterMovement {
            product_id: ProductId::new(self.producto_id),
            kind: movement_kind_from_tag(&self.tipo),
            location: location_from_tag(&self.ubicacion),
            quantity: self.cantidad,
            description: self.descripcion,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListProductsQuery {
    pub categoria: Option<String>,
}

// -------------------------
// Wire tags
// -------------------------

/// `"entrada"` is inbound; any other tag is outbound.
pub fn movement_kind_from_tag(tag: &str) -> MovementKind {
    if tag == "entrada" {
        MovementKind::Inbound
    } else {
        MovementKind::Outbound
    }
}

/// `"medellin"` is Medellín; any other tag falls back to Bogotá.
pub fn location_from_tag(tag: &str) -> Location {
    if tag == "medellin" {
        Location::Medellin
    } else {
        Location::Bogota
    }
}

/// Path-segment variant of [`location_from_tag`], matched case-insensitively.
pub fn location_from_path(segment: &str) -> Location {
    location_from_tag(&segment.to_lowercase())
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementResponse {
    pub id: u64,
    pub producto_id: u64,
    pub tipo: String,
    pub ubicacion: String,
    pub cantidad: i64,
    pub fecha: DateTime<Utc>,
    pub descripcion: String,
}

impl From<&Movement> for MovementResponse {
    fn from(m: &Movement) -> Self {
        Self {
            id: m.id_typed().get(),
            producto_id: m.product_id().get(),
            tipo: m.kind().label().to_string(),
            ubicacion: m.location().label().to_string(),
            cantidad: m.quantity(),
            fecha: m.occurred_at(),
            descripcion: m.description().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductResponse {
    pub id: u64,
    pub nombre: String,
    pub descripcion: String,
    pub cantidad: i64,
    pub categoria: &'static str,
    pub categoria_slug: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genero: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub talla: Option<&'static str>,
    pub fecha_creacion: DateTime<Utc>,
    pub fecha_actualizacion: DateTime<Utc>,
}

impl From<&Product> for ProductResponse {
    fn from(p: &Product) -> Self {
        let apparel = p.apparel();
        Self {
            id: p.id_typed().get(),
            nombre: p.name().to_string(),
            descripcion: p.description().to_string(),
            cantidad: p.quantity(),
            categoria: p.category().label(),
            categoria_slug: p.category().slug(),
            color: apparel.map(|a| a.color.label()),
            genero: apparel.and_then(|a| a.gender).map(|g| g.label()),
            talla: apparel.and_then(|a| a.size).map(|s| s.label()),
            fecha_creacion: p.created_at(),
            fecha_actualizacion: p.updated_at(),
        }
    }
}

pub fn movements_to_json(movements: &[Movement]) -> Vec<MovementResponse> {
    movements.iter().map(MovementResponse::from).collect()
}
