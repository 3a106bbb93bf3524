//! Inventory domain module.
//!
//! Holds the seeded merchandise catalog and the append-only movement ledger,
//! implemented purely as deterministic, synchronous domain logic (no IO, no HTTP).

pub mod catalog;
pub mod manager;
pub mod movement;
pub mod product;

pub use catalog::{Apparel, Color, Gender, SeedProduct, Size, seed_catalog};
pub use manager::InventoryManager;
pub use movement::{Location, Movement, MovementKind, RegisterMovement};
pub use product::{Category, Product};
