// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only views of platform state and card configuration.

use crate::error::ApiError;
use pantry_domain::{FormDefaults, InventoryItem};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Card configuration as written in the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardConfig {
    /// The inventory entity this card manages, e.g. `sensor.kitchen`.
    pub entity: String,
    /// Values the item forms reset to.
    #[serde(default)]
    pub form_defaults: FormDefaults,
}

impl CardConfig {
    #[must_use]
    pub fn new(entity: &str) -> Self {
        Self {
            entity: entity.to_string(),
            form_defaults: FormDefaults::default(),
        }
    }
}

/// Attributes of an inventory entity.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EntityAttributes {
    /// The stored items; absent while the integration is still loading.
    #[serde(default)]
    pub items: Option<Vec<InventoryItem>>,
    /// Attributes the card does not interpret.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// One entity in platform state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EntityState {
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub attributes: EntityAttributes,
}

/// The platform connection as seen by the card.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HassState {
    #[serde(default)]
    pub states: HashMap<String, EntityState>,
}

/// Everything needed to look items up: platform state plus the card's config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSnapshot {
    pub hass: HassState,
    pub config: CardConfig,
}

impl CardSnapshot {
    /// Returns the configured entity's item list.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is missing or has no item list.
    pub fn items(&self) -> Result<&[InventoryItem], ApiError> {
        let entity_id: &str = &self.config.entity;
        let entity: &EntityState =
            self.hass
                .states
                .get(entity_id)
                .ok_or_else(|| ApiError::EntityNotFound {
                    entity_id: entity_id.to_string(),
                })?;

        entity
            .attributes
            .items
            .as_deref()
            .ok_or_else(|| ApiError::ItemsUnavailable {
                entity_id: entity_id.to_string(),
            })
    }

    /// Finds an item by exact name.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity or its item list is missing, or if no
    /// item has exactly this name.
    pub fn find_item(&self, name: &str) -> Result<&InventoryItem, ApiError> {
        self.items()?
            .iter()
            .find(|item| item.name == name)
            .ok_or_else(|| ApiError::ItemNotFound {
                entity_id: self.config.entity.clone(),
                name: name.to_string(),
            })
    }
}
