//! Inventory manager: owns the catalog and the movement ledger.
//!
//! All state lives in memory. Callers that share a manager across threads must
//! wrap it in a lock; every mutation here takes `&mut self`, so a single write
//! guard around `register_movement` keeps the ledger append and the stock update
//! together.

use chrono::{DateTime, Utc};

use merchstock_core::{DomainError, DomainResult, MovementId, ProductId};

use crate::catalog::seed_catalog;
use crate::movement::{Location, Movement, MovementKind, RegisterMovement};
use crate::product::{Category, Product};

#[derive(Debug, Clone)]
pub struct InventoryManager {
    products: Vec<Product>,
    movements: Vec<Movement>,
    last_movement_id: MovementId,
}

impl Default for InventoryManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryManager {
    /// Build a manager over the seed catalog, timestamped now.
    pub fn new() -> Self {
        Self::seeded_at(Utc::now())
    }

    /// Build a manager over the seed catalog with an explicit construction time.
    pub fn seeded_at(now: DateTime<Utc>) -> Self {
        let products: Vec<Product> = seed_catalog()
            .into_iter()
            .map(|seed| {
                Product::new(seed.id, seed.name, "", seed.quantity, seed.category, now)
                    .with_apparel(seed.apparel)
            })
            .collect();

        tracing::debug!(products = products.len(), "inventory catalog seeded");

        Self {
            products,
            movements: Vec::new(),
            last_movement_id: MovementId::new(0),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn movements(&self) -> &[Movement] {
        &self.movements
    }

    pub fn products_by_category(&self, category: Category) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.category() == category)
            .cloned()
            .collect()
    }

    pub fn find_product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id_typed() == id)
    }

    fn position_of(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id_typed() == id)
    }

    /// Overwrite a product's stock level.
    pub fn update_quantity(&mut self, id: ProductId, new_quantity: i64) -> DomainResult<()> {
        let idx = self
            .position_of(id)
            .ok_or(DomainError::product_not_found(id))?;
        self.apply_quantity(idx, new_quantity, Utc::now());
        Ok(())
    }

    /// Shared write path for stock levels; `at` becomes the product's `updated_at`.
    fn apply_quantity(&mut self, idx: usize, new_quantity: i64, at: DateTime<Utc>) {
        self.products[idx].set_quantity(new_quantity, at);
    }

    /// Register an inbound or outbound movement and apply it to the product's stock.
    ///
    /// Either both the ledger entry and the stock update happen, or neither: all
    /// checks run before anything is mutated.
    pub fn register_movement(&mut self, cmd: RegisterMovement) -> DomainResult<Movement> {
        if cmd.quantity <= 0 {
            return Err(DomainError::validation("quantity must be greater than zero"));
        }

        let Some(idx) = self.position_of(cmd.product_id) else {
            tracing::warn!(product_id = %cmd.product_id, "movement rejected: unknown product");
            return Err(DomainError::product_not_found(cmd.product_id));
        };

        let current = self.products[idx].quantity();
        let new_quantity = match cmd.kind {
            MovementKind::Inbound => current
                .checked_add(cmd.quantity)
                .ok_or_else(|| DomainError::validation("quantity overflows stock counter"))?,
            MovementKind::Outbound => {
                if cmd.quantity > current {
                    tracing::warn!(
                        product_id = %cmd.product_id,
                        requested = cmd.quantity,
                        available = current,
                        "movement rejected: insufficient stock"
                    );
                    return Err(DomainError::InsufficientStock {
                        product_id: cmd.product_id,
                        requested: cmd.quantity,
                        available: current,
                    });
                }
                current - cmd.quantity
            }
        };

        // One timestamp for the ledger entry and the product's updated_at.
        let now = Utc::now();
        self.last_movement_id = self.last_movement_id.next();
        let movement = Movement::record(self.last_movement_id, cmd, now);
        self.apply_quantity(idx, new_quantity, now);
        self.movements.push(movement.clone());

        tracing::info!(
            movement_id = %movement.id_typed(),
            product_id = %movement.product_id(),
            kind = movement.kind().label(),
            location = movement.location().label(),
            quantity = movement.quantity(),
            stock = new_quantity,
            "movement registered"
        );

        Ok(movement)
    }

    pub fn movements_for_product(&self, product_id: ProductId) -> Vec<Movement> {
        self.movements
            .iter()
            .filter(|m| m.product_id() == product_id)
            .cloned()
            .collect()
    }

    pub fn movements_for_location(&self, location: Location) -> Vec<Movement> {
        self.movements
            .iter()
            .filter(|m| m.location() == location)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd(product_id: u64, kind: MovementKind, location: Location, quantity: i64) -> RegisterMovement {
        RegisterMovement {
            product_id: ProductId::new(product_id),
            kind,
            location,
            quantity,
            description: String::new(),
        }
    }

    fn stock(mgr: &InventoryManager, id: u64) -> i64 {
        mgr.find_product(ProductId::new(id)).unwrap().quantity()
    }

    #[test]
    fn initializes_from_seed_with_empty_descriptions() {
        let now = Utc::now();
        let mgr = InventoryManager::seeded_at(now);
        assert_eq!(mgr.products().len(), 71);
        assert!(mgr.movements().is_empty());
        assert!(mgr.products().iter().all(|p| p.description().is_empty()));
        assert!(mgr.products().iter().all(|p| p.created_at() == now && p.updated_at() == now));
        assert_eq!(mgr.find_product(ProductId::new(1)).unwrap().name(), "Cuaderno Sofka");
    }

    #[test]
    fn products_by_category_preserves_catalog_order() {
        let mgr = InventoryManager::new();
        let stationery = mgr.products_by_category(Category::Stationery);
        let ids: Vec<u64> = stationery.iter().map(|p| p.id_typed().get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);

        let clothing = mgr.products_by_category(Category::Clothing);
        assert_eq!(clothing.len(), 46);
        assert!(clothing.windows(2).all(|w| w[0].id_typed() < w[1].id_typed()));
    }

    #[test]
    fn find_product_returns_none_for_unknown_id() {
        let mgr = InventoryManager::new();
        assert!(mgr.find_product(ProductId::new(0)).is_none());
        assert!(mgr.find_product(ProductId::new(72)).is_none());
    }

    #[test]
    fn update_quantity_sets_value_and_touches_timestamp() {
        let seeded = Utc::now() - chrono::Duration::hours(1);
        let mut mgr = InventoryManager::seeded_at(seeded);
        mgr.update_quantity(ProductId::new(5), 0).unwrap();

        let p = mgr.find_product(ProductId::new(5)).unwrap();
        assert_eq!(p.quantity(), 0);
        assert!(p.updated_at() > seeded);
        assert_eq!(p.created_at(), seeded);
    }

    #[test]
    fn update_quantity_fails_for_unknown_product() {
        let mut mgr = InventoryManager::new();
        let err = mgr.update_quantity(ProductId::new(999), 1).unwrap_err();
        assert_eq!(err, DomainError::ProductNotFound(ProductId::new(999)));
    }

    #[test]
    fn inbound_increases_stock_and_appends_movement() {
        let mut mgr = InventoryManager::new();
        let m = mgr
            .register_movement(cmd(1, MovementKind::Inbound, Location::Medellin, 10))
            .unwrap();

        assert_eq!(m.id_typed(), MovementId::new(1));
        assert_eq!(stock(&mgr, 1), 136);
        assert_eq!(mgr.movements().len(), 1);
        assert_eq!(mgr.movements()[0], m);
    }

    #[test]
    fn movement_and_product_share_the_registration_timestamp() {
        let seeded = Utc::now() - chrono::Duration::hours(1);
        let mut mgr = InventoryManager::seeded_at(seeded);
        let m = mgr
            .register_movement(cmd(7, MovementKind::Outbound, Location::Bogota, 3))
            .unwrap();

        let p = mgr.find_product(ProductId::new(7)).unwrap();
        assert_eq!(p.updated_at(), m.occurred_at());
        assert!(p.updated_at() > seeded);
        assert_eq!(p.created_at(), seeded);
    }

    #[test]
    fn outbound_within_stock_decreases_quantity() {
        let mut mgr = InventoryManager::new();
        mgr.register_movement(cmd(13, MovementKind::Outbound, Location::Bogota, 102))
            .unwrap();
        assert_eq!(stock(&mgr, 13), 0);
        assert_eq!(mgr.movements().len(), 1);
    }

    #[test]
    fn outbound_over_stock_is_rejected_without_mutation() {
        let mut mgr = InventoryManager::new();
        let before = mgr.clone();

        let err = mgr
            .register_movement(cmd(12, MovementKind::Outbound, Location::Bogota, 5))
            .unwrap_err();

        assert_eq!(
            err,
            DomainError::InsufficientStock {
                product_id: ProductId::new(12),
                requested: 5,
                available: 0,
            }
        );
        assert_eq!(mgr.products(), before.products());
        assert!(mgr.movements().is_empty());
    }

    #[test]
    fn outbound_against_negative_legacy_stock_is_rejected() {
        let mut mgr = InventoryManager::new();
        let err = mgr
            .register_movement(cmd(5, MovementKind::Outbound, Location::Medellin, 1))
            .unwrap_err();
        assert!(matches!(err, DomainError::InsufficientStock { available: -113, .. }));
    }

    #[test]
    fn unknown_product_is_rejected() {
        let mut mgr = InventoryManager::new();
        let err = mgr
            .register_movement(cmd(500, MovementKind::Inbound, Location::Medellin, 1))
            .unwrap_err();
        assert_eq!(err, DomainError::ProductNotFound(ProductId::new(500)));
        assert!(mgr.movements().is_empty());
    }

    #[test]
    fn non_positive_quantity_is_a_validation_error() {
        let mut mgr = InventoryManager::new();
        for q in [0, -3] {
            let err = mgr
                .register_movement(cmd(1, MovementKind::Inbound, Location::Medellin, q))
                .unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
        }
        assert_eq!(stock(&mgr, 1), 126);
    }

    #[test]
    fn failed_registration_does_not_consume_a_movement_id() {
        let mut mgr = InventoryManager::new();
        mgr.register_movement(cmd(1, MovementKind::Inbound, Location::Medellin, 1))
            .unwrap();
        let _ = mgr.register_movement(cmd(12, MovementKind::Outbound, Location::Medellin, 1));
        let m = mgr
            .register_movement(cmd(1, MovementKind::Inbound, Location::Medellin, 1))
            .unwrap();
        assert_eq!(m.id_typed(), MovementId::new(2));
    }

    #[test]
    fn movement_queries_filter_in_insertion_order() {
        let mut mgr = InventoryManager::new();
        mgr.register_movement(cmd(1, MovementKind::Inbound, Location::Medellin, 1)).unwrap();
        mgr.register_movement(cmd(2, MovementKind::Inbound, Location::Bogota, 2)).unwrap();
        mgr.register_movement(cmd(1, MovementKind::Outbound, Location::Bogota, 3)).unwrap();
        mgr.register_movement(cmd(3, MovementKind::Inbound, Location::Medellin, 4)).unwrap();

        let medellin: Vec<i64> = mgr
            .movements_for_location(Location::Medellin)
            .iter()
            .map(Movement::quantity)
            .collect();
        assert_eq!(medellin, vec![1, 4]);

        let bogota: Vec<u64> = mgr
            .movements_for_location(Location::Bogota)
            .iter()
            .map(|m| m.id_typed().get())
            .collect();
        assert_eq!(bogota, vec![2, 3]);

        let product_one = mgr.movements_for_product(ProductId::new(1));
        assert_eq!(product_one.len(), 2);
        assert_eq!(product_one[1].kind(), MovementKind::Outbound);
        assert_eq!(stock(&mgr, 1), 124);
    }

    #[test]
    fn location_without_movements_is_empty() {
        let mut mgr = InventoryManager::new();
        assert!(mgr.movements_for_location(Location::Bogota).is_empty());
        mgr.register_movement(cmd(1, MovementKind::Inbound, Location::Medellin, 1)).unwrap();
        assert!(mgr.movements_for_location(Location::Bogota).is_empty());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn kind_strategy() -> impl Strategy<Value = MovementKind> {
            prop_oneof![Just(MovementKind::Inbound), Just(MovementKind::Outbound)]
        }

        fn location_strategy() -> impl Strategy<Value = Location> {
            prop_oneof![Just(Location::Medellin), Just(Location::Bogota)]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: stock always equals the seed plus the signed sum of accepted movements.
            #[test]
            fn stock_matches_seed_plus_ledger(
                ops in prop::collection::vec(
                    (1u64..=71, kind_strategy(), location_strategy(), 1i64..200),
                    0..60,
                )
            ) {
                let mut mgr = InventoryManager::new();
                let seeded = InventoryManager::new();

                for (pid, kind, location, quantity) in ops {
                    let before_len = mgr.movements().len();
                    let before_qty = stock(&mgr, pid);
                    match mgr.register_movement(cmd(pid, kind, location, quantity)) {
                        Ok(m) => {
                            prop_assert_eq!(mgr.movements().len(), before_len + 1);
                            prop_assert_eq!(stock(&mgr, pid), before_qty + m.delta());
                        }
                        Err(DomainError::InsufficientStock { .. }) => {
                            prop_assert_eq!(kind, MovementKind::Outbound);
                            prop_assert!(quantity > before_qty);
                            prop_assert_eq!(mgr.movements().len(), before_len);
                            prop_assert_eq!(stock(&mgr, pid), before_qty);
                        }
                        Err(e) => prop_assert!(false, "unexpected error: {e:?}"),
                    }
                }

                for p in mgr.products() {
                    let seed = seeded.find_product(p.id_typed()).unwrap().quantity();
                    let net: i64 = mgr
                        .movements_for_product(p.id_typed())
                        .iter()
                        .map(Movement::delta)
                        .sum();
                    prop_assert_eq!(p.quantity(), seed + net);
                }
            }

            /// Property: movement ids are strictly increasing in ledger order.
            #[test]
            fn movement_ids_strictly_increase(
                ops in prop::collection::vec((1u64..=71, kind_strategy(), 1i64..50), 1..40)
            ) {
                let mut mgr = InventoryManager::new();
                for (pid, kind, quantity) in ops {
                    let _ = mgr.register_movement(cmd(pid, kind, Location::Medellin, quantity));
                }
                prop_assert!(mgr.movements().windows(2).all(|w| w[0].id_typed() < w[1].id_typed()));
            }
        }
    }
}
