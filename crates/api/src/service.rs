// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Contracts for the platform services the card calls.

use crate::error::{ApiError, ServiceError};
use async_trait::async_trait;
use pantry_domain::SanitizedItemData;
use serde::{Deserialize, Serialize};

/// The platform's answer to a create or update call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServiceResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ServiceResponse {
    #[must_use]
    pub const fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    #[must_use]
    pub fn failure(reason: &str) -> Self {
        Self {
            success: false,
            error: Some(reason.to_string()),
        }
    }
}

/// Creates and updates stored items.
#[async_trait]
pub trait InventoryService: Send + Sync {
    /// Stores a new item in the given inventory.
    async fn add_item(
        &self,
        inventory_id: &str,
        item: &SanitizedItemData,
    ) -> Result<ServiceResponse, ServiceError>;

    /// Replaces the item currently named `original_name`.
    async fn update_item(
        &self,
        inventory_id: &str,
        original_name: &str,
        item: &SanitizedItemData,
    ) -> Result<ServiceResponse, ServiceError>;
}

/// Maps the configured entity id to the id the services expect.
pub trait InventoryIdResolver {
    /// # Errors
    ///
    /// Returns an error if no inventory id can be derived.
    fn resolve(&self, entity_id: &str) -> Result<String, ApiError>;
}

/// Uses the object id part of the entity id (`sensor.kitchen` -> `kitchen`).
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectIdResolver;

impl InventoryIdResolver for ObjectIdResolver {
    fn resolve(&self, entity_id: &str) -> Result<String, ApiError> {
        match entity_id.split_once('.') {
            Some((domain, object_id)) if !domain.is_empty() && !object_id.is_empty() => {
                Ok(object_id.to_string())
            }
            _ => Err(ApiError::InvalidEntityId {
                entity_id: entity_id.to_string(),
            }),
        }
    }
}
