// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use thiserror::Error;

/// Failures of the platform's create/update item service.
///
/// A service that answers with `success: false` is not an error; these are
/// calls that produced no answer at all.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The call could not be delivered or its reply could not be read.
    #[error("Service call failed: {reason}")]
    CallFailed { reason: String },

    /// The backend is in a state where it cannot serve requests.
    #[error("Service unavailable: {reason}")]
    Unavailable { reason: String },
}

/// API-level errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The configured entity is not present in platform state.
    #[error("Entity '{entity_id}' not found")]
    EntityNotFound { entity_id: String },

    /// The entity exists but does not expose an item list.
    #[error("Entity '{entity_id}' has no item list")]
    ItemsUnavailable { entity_id: String },

    /// No item in the list has the requested name.
    #[error("Item '{name}' not found in '{entity_id}'")]
    ItemNotFound { entity_id: String, name: String },

    /// An inventory id cannot be derived from the entity id.
    #[error("Cannot resolve an inventory id from entity '{entity_id}'")]
    InvalidEntityId { entity_id: String },

    /// The create/update service failed.
    #[error(transparent)]
    Service(#[from] ServiceError),
}
