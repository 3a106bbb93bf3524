use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use merchstock_core::{DomainError, ProductId};

use crate::catalog::Apparel;

/// Product category.
///
/// Each variant has a machine slug (used for filtering and serde) and a
/// human-readable label (used on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "papeleria")]
    Stationery,
    #[serde(rename = "morrales")]
    Bags,
    #[serde(rename = "escritura")]
    Writing,
    #[serde(rename = "accesorios")]
    Accessories,
    #[serde(rename = "contenedores")]
    Containers,
    #[serde(rename = "ropa")]
    Clothing,
    #[serde(rename = "tecnologia")]
    Technology,
    #[serde(rename = "proteccion")]
    Protection,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Stationery,
        Category::Bags,
        Category::Writing,
        Category::Accessories,
        Category::Containers,
        Category::Clothing,
        Category::Technology,
        Category::Protection,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Stationery => "Papelería",
            Category::Bags => "Morrales",
            Category::Writing => "Escritura",
            Category::Accessories => "Accesorios",
            Category::Containers => "Contenedores",
            Category::Clothing => "Ropa",
            Category::Technology => "Tecnología",
            Category::Protection => "Protección",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Category::Stationery => "papeleria",
            Category::Bags => "morrales",
            Category::Writing => "escritura",
            Category::Accessories => "accesorios",
            Category::Containers => "contenedores",
            Category::Clothing => "ropa",
            Category::Technology => "tecnologia",
            Category::Protection => "proteccion",
        }
    }
}

impl core::str::FromStr for Category {
    type Err = DomainError;

    /// Parse a slug, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.slug() == wanted)
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "category must be one of: {}",
                    Category::ALL.map(Category::slug).join(", ")
                ))
            })
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// A catalog product with its current stock.
///
/// Only `quantity` and `updated_at` change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    quantity: i64,
    category: Category,
    apparel: Option<Apparel>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        quantity: i64,
        category: Category,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            quantity,
            category,
            apparel: None,
            created_at,
            updated_at: created_at,
        }
    }

    pub fn with_apparel(mut self, apparel: Option<Apparel>) -> Self {
        self.apparel = apparel;
        self
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Color/cut details for clothing variants.
    pub fn apparel(&self) -> Option<&Apparel> {
        self.apparel.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub(crate) fn set_quantity(&mut self, quantity: i64, at: DateTime<Utc>) {
        self.quantity = quantity;
        self.updated_at = at;
    }
}
