// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Card snapshots stored as JSON documents.

use pantry_card_api::CardSnapshot;
use std::path::Path;
use tracing::debug;

use crate::error::PersistenceError;

/// Reads a snapshot from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid snapshot.
pub fn load_snapshot(path: &Path) -> Result<CardSnapshot, PersistenceError> {
    let contents: String = std::fs::read_to_string(path)?;
    let snapshot: CardSnapshot = serde_json::from_str(&contents)?;
    debug!(
        path = %path.display(),
        entity = %snapshot.config.entity,
        "Loaded snapshot"
    );
    Ok(snapshot)
}

/// Writes a snapshot as pretty-printed JSON, replacing the file.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn save_snapshot(path: &Path, snapshot: &CardSnapshot) -> Result<(), PersistenceError> {
    let contents: String = serde_json::to_string_pretty(snapshot)?;
    std::fs::write(path, contents + "\n")?;
    debug!(path = %path.display(), "Saved snapshot");
    Ok(())
}
