// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use pantry_card_api::ApiError;

/// Errors that can occur while loading, storing or saving inventories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// Reading or writing a snapshot file failed.
    IoError(String),
    /// Serialization/deserialization error.
    SerializationError(String),
    /// The requested inventory is not held by the store.
    InventoryNotFound(String),
    /// The store's lock was poisoned by a panicking writer.
    LockPoisoned,
    /// The snapshot does not describe a usable inventory.
    InvalidSnapshot(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoError(msg) => write!(f, "I/O error: {msg}"),
            Self::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            Self::InventoryNotFound(id) => write!(f, "Inventory '{id}' not found"),
            Self::LockPoisoned => write!(f, "Inventory store lock poisoned"),
            Self::InvalidSnapshot(msg) => write!(f, "Invalid snapshot: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<std::io::Error> for PersistenceError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<ApiError> for PersistenceError {
    fn from(err: ApiError) -> Self {
        Self::InvalidSnapshot(err.to_string())
    }
}
