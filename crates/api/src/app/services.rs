//! Shared inventory handle used by the HTTP handlers.
//!
//! Mutations take the write lock for their whole duration, so a movement's
//! ledger entry and stock update are never observed separately.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;

use merchstock_core::{DomainError, ProductId};
use merchstock_inventory::{
    Category, InventoryManager, Location, Movement, Product, RegisterMovement,
};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A handler panicked while holding the inventory lock.
    #[error("inventory state is unavailable")]
    LockPoisoned,
}

#[derive(Debug)]
pub struct AppServices {
    inventory: RwLock<InventoryManager>,
}

impl AppServices {
    pub fn new(manager: InventoryManager) -> Self {
        Self {
            inventory: RwLock::new(manager),
        }
    }

    /// Services over a freshly seeded catalog.
    pub fn seeded() -> Self {
        Self::new(InventoryManager::new())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, InventoryManager>, ServiceError> {
        self.inventory.read().map_err(|_| {
            tracing::error!("inventory lock poisoned");
            ServiceError::LockPoisoned
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, InventoryManager>, ServiceError> {
        self.inventory.write().map_err(|_| {
            tracing::error!("inventory lock poisoned");
            ServiceError::LockPoisoned
        })
    }

    pub fn register_movement(&self, cmd: RegisterMovement) -> Result<Movement, ServiceError> {
        Ok(self.write()?.register_movement(cmd)?)
    }

    pub fn movements_for_location(&self, location: Location) -> Result<Vec<Movement>, ServiceError> {
        Ok(self.read()?.movements_for_location(location))
    }

    /// Movements of one product; unknown ids are an error rather than an empty list.
    pub fn movements_for_product(&self, id: ProductId) -> Result<Vec<Movement>, ServiceError> {
        let inventory = self.read()?;
        if inventory.find_product(id).is_none() {
            return Err(DomainError::product_not_found(id).into());
        }
        Ok(inventory.movements_for_product(id))
    }

    pub fn products(&self, category: Option<Category>) -> Result<Vec<Product>, ServiceError> {
        let inventory = self.read()?;
        Ok(match category {
            Some(c) => inventory.products_by_category(c),
            None => inventory.products().to_vec(),
        })
    }

    pub fn product(&self, id: ProductId) -> Result<Product, ServiceError> {
        self.read()?
            .find_product(id)
            .cloned()
            .ok_or_else(|| DomainError::product_not_found(id).into())
    }
}
