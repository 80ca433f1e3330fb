// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use async_trait::async_trait;
use pantry_card_api::{
    CardSnapshot, EntityState, InventoryIdResolver, InventoryService, ServiceError,
    ServiceResponse,
};
use pantry_domain::{InventoryItem, SanitizedItemData};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info, warn};

use crate::error::PersistenceError;

type Inventories = BTreeMap<String, Vec<InventoryItem>>;

/// Item names are unique per inventory, ignoring case.
fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Inventories held in memory, served through `InventoryService`.
///
/// Mirrors the integration's rules: names are unique within an inventory
/// (case-insensitively), updates address items by their current name, and
/// attributes the card does not manage survive an update.
#[derive(Debug, Default)]
pub struct InventoryStore {
    inventories: Mutex<Inventories>,
}

impl InventoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an inventory, replacing any existing one with the same id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store's lock is poisoned.
    pub fn insert_inventory(
        &self,
        inventory_id: &str,
        items: Vec<InventoryItem>,
    ) -> Result<(), PersistenceError> {
        let mut inventories: MutexGuard<'_, Inventories> = self.lock()?;
        debug!(inventory_id, item_count = items.len(), "Registered inventory");
        inventories.insert(inventory_id.to_string(), items);
        Ok(())
    }

    /// Seeds a store from the configured entity in a snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is missing, has no item list, or its
    /// id cannot be resolved.
    pub fn from_snapshot(
        snapshot: &CardSnapshot,
        resolver: &dyn InventoryIdResolver,
    ) -> Result<Self, PersistenceError> {
        let inventory_id: String = resolver.resolve(&snapshot.config.entity)?;
        let items: Vec<InventoryItem> = snapshot.items()?.to_vec();

        let store: Self = Self::new();
        store.insert_inventory(&inventory_id, items)?;
        Ok(store)
    }

    /// Returns a copy of an inventory's items, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the inventory is unknown or the lock is poisoned.
    pub fn items(&self, inventory_id: &str) -> Result<Vec<InventoryItem>, PersistenceError> {
        self.lock()?
            .get(inventory_id)
            .cloned()
            .ok_or_else(|| PersistenceError::InventoryNotFound(inventory_id.to_string()))
    }

    /// Writes the configured entity's inventory back into a snapshot.
    ///
    /// The entity's state becomes the item count, as the integration
    /// reports it.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity id cannot be resolved or the store
    /// does not hold that inventory.
    pub fn write_to_snapshot(
        &self,
        snapshot: &mut CardSnapshot,
        resolver: &dyn InventoryIdResolver,
    ) -> Result<(), PersistenceError> {
        let inventory_id: String = resolver.resolve(&snapshot.config.entity)?;
        let items: Vec<InventoryItem> = self.items(&inventory_id)?;

        let entity: &mut EntityState = snapshot
            .hass
            .states
            .entry(snapshot.config.entity.clone())
            .or_default();
        entity.state = items.len().to_string();
        entity.attributes.items = Some(items);
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inventories>, PersistenceError> {
        self.inventories
            .lock()
            .map_err(|_| PersistenceError::LockPoisoned)
    }

    fn lock_for_service(&self) -> Result<MutexGuard<'_, Inventories>, ServiceError> {
        self.lock().map_err(|e| ServiceError::CallFailed {
            reason: e.to_string(),
        })
    }

    fn add(
        &self,
        inventory_id: &str,
        item: &SanitizedItemData,
    ) -> Result<ServiceResponse, ServiceError> {
        let mut inventories: MutexGuard<'_, Inventories> = self.lock_for_service()?;
        let Some(items) = inventories.get_mut(inventory_id) else {
            warn!(inventory_id, "Add for unknown inventory");
            return Ok(ServiceResponse::failure(&format!(
                "Inventory '{inventory_id}' not found"
            )));
        };

        if items.iter().any(|existing| same_name(&existing.name, item.name())) {
            return Ok(ServiceResponse::failure(&format!(
                "Item '{}' already exists",
                item.name()
            )));
        }

        items.push(InventoryItem::from_sanitized(item));
        info!(inventory_id, item = item.name(), "Added item");
        Ok(ServiceResponse::ok())
    }

    fn update(
        &self,
        inventory_id: &str,
        original_name: &str,
        item: &SanitizedItemData,
    ) -> Result<ServiceResponse, ServiceError> {
        let mut inventories: MutexGuard<'_, Inventories> = self.lock_for_service()?;
        let Some(items) = inventories.get_mut(inventory_id) else {
            warn!(inventory_id, "Update for unknown inventory");
            return Ok(ServiceResponse::failure(&format!(
                "Inventory '{inventory_id}' not found"
            )));
        };

        let Some(index) = items.iter().position(|existing| existing.name == original_name) else {
            return Ok(ServiceResponse::failure(&format!(
                "Item '{original_name}' not found"
            )));
        };

        let collides: bool = items.iter().enumerate().any(|(i, existing)| {
            i != index && same_name(&existing.name, item.name())
        });
        if collides {
            return Ok(ServiceResponse::failure(&format!(
                "Item '{}' already exists",
                item.name()
            )));
        }

        items[index].apply_sanitized(item);
        info!(
            inventory_id,
            original_name,
            item = item.name(),
            "Updated item"
        );
        Ok(ServiceResponse::ok())
    }
}

#[async_trait]
impl InventoryService for InventoryStore {
    async fn add_item(
        &self,
        inventory_id: &str,
        item: &SanitizedItemData,
    ) -> Result<ServiceResponse, ServiceError> {
        self.add(inventory_id, item)
    }

    async fn update_item(
        &self,
        inventory_id: &str,
        original_name: &str,
        item: &SanitizedItemData,
    ) -> Result<ServiceResponse, ServiceError> {
        self.update(inventory_id, original_name, item)
    }
}
