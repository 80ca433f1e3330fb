// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use pantry_domain::InventoryItem;

pub fn create_test_item() -> InventoryItem {
    InventoryItem {
        name: String::from("Milk"),
        quantity: Some(2.0),
        unit: Some(String::from("L")),
        category: Some(String::from("Dairy")),
        location: Some(String::from("Fridge")),
        expiry_date: Some(String::from("2026-10-25")),
        expiry_alert_days: Some(3.0),
        auto_add_enabled: Some(true),
        auto_add_to_list_quantity: Some(1.0),
        todo_list: Some(String::from("todo.shopping")),
        ..InventoryItem::default()
    }
}

/// An item as the platform may report it: a name and nothing else.
pub fn create_sparse_item() -> InventoryItem {
    InventoryItem {
        name: String::from("Mystery jar"),
        ..InventoryItem::default()
    }
}
