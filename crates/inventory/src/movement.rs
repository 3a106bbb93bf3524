use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use merchstock_core::{MovementId, ProductId};

/// Direction of a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementKind {
    Inbound,
    Outbound,
}

impl MovementKind {
    pub fn label(self) -> &'static str {
        match self {
            MovementKind::Inbound => "Entrada",
            MovementKind::Outbound => "Salida",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Entrada" => Some(MovementKind::Inbound),
            "Salida" => Some(MovementKind::Outbound),
            _ => None,
        }
    }
}

/// Site a movement is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Medellin,
    Bogota,
}

impl Location {
    pub fn label(self) -> &'static str {
        match self {
            Location::Medellin => "Medellín",
            Location::Bogota => "Bogotá",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Medellín" => Some(Location::Medellin),
            "Bogotá" => Some(Location::Bogota),
            _ => None,
        }
    }
}

/// Command: register a stock movement against a catalog product.
///
/// The manager stamps the movement when it is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterMovement {
    pub product_id: ProductId,
    pub kind: MovementKind,
    pub location: Location,
    pub quantity: i64,
    pub description: String,
}

/// Ledger entry. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movement {
    id: MovementId,
    product_id: ProductId,
    kind: MovementKind,
    location: Location,
    quantity: i64,
    occurred_at: DateTime<Utc>,
    description: String,
}

impl Movement {
    pub(crate) fn record(id: MovementId, cmd: RegisterMovement, at: DateTime<Utc>) -> Self {
        Self {
            id,
            product_id: cmd.product_id,
            kind: cmd.kind,
            location: cmd.location,
            quantity: cmd.quantity,
            occurred_at: at,
            description: cmd.description,
        }
    }

    pub fn id_typed(&self) -> MovementId {
        self.id
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn kind(&self) -> MovementKind {
        self.kind
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Signed effect of this movement on the product's stock.
    pub fn delta(&self) -> i64 {
        match self.kind {
            MovementKind::Inbound => self.quantity,
            MovementKind::Outbound => -self.quantity,
        }
    }
}
