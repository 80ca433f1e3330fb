// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use pantry_card_api::{CardConfig, CardSnapshot, EntityAttributes, EntityState, HassState};
use pantry_domain::{InventoryItem, ItemData, SanitizedItemData, sanitize_item_data};

pub const TEST_ENTITY: &str = "sensor.kitchen_inventory";
pub const TEST_INVENTORY_ID: &str = "kitchen_inventory";

/// Counter for unique scratch file names within one test run.
static FILE_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn scratch_path(label: &str) -> PathBuf {
    let n: u64 = FILE_COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!(
        "pantry-card-{label}-{}-{n}.json",
        std::process::id()
    ))
}

pub fn create_item_data(name: &str) -> SanitizedItemData {
    sanitize_item_data(&ItemData {
        name: name.to_string(),
        quantity: 3.0,
        unit: String::from("kg"),
        category: String::from("Baking"),
        ..ItemData::default()
    })
}

pub fn create_stored_item(name: &str) -> InventoryItem {
    let mut item: InventoryItem = InventoryItem::from_sanitized(&create_item_data(name));
    item.metadata.insert(
        String::from("id"),
        serde_json::Value::String(format!("id-{}", name.to_lowercase())),
    );
    item
}

pub fn create_test_snapshot(items: Vec<InventoryItem>) -> CardSnapshot {
    let mut states: HashMap<String, EntityState> = HashMap::new();
    states.insert(
        TEST_ENTITY.to_string(),
        EntityState {
            state: items.len().to_string(),
            attributes: EntityAttributes {
                items: Some(items),
                ..EntityAttributes::default()
            },
        },
    );
    CardSnapshot {
        hass: HassState { states },
        config: CardConfig::new(TEST_ENTITY),
    }
}
