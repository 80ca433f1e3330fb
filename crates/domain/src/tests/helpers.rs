// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ItemData, RawFormData};

/// A submission that passes every validation rule.
pub fn create_valid_raw_form() -> RawFormData {
    RawFormData {
        name: String::from("Milk"),
        quantity: String::from("2"),
        unit: String::from("L"),
        category: String::from("Dairy"),
        location: String::from("Fridge"),
        expiry_date: String::from("2026-11-01"),
        expiry_alert_days: String::from("3"),
        auto_add_enabled: false,
        auto_add_to_list_quantity: String::new(),
        todo_list: String::new(),
    }
}

pub fn create_test_item_data() -> ItemData {
    ItemData {
        name: String::from("Eggs"),
        quantity: 12.0,
        unit: String::from("pcs"),
        category: String::from("Dairy"),
        location: String::from("Fridge"),
        expiry_date: String::from("2026-10-30"),
        expiry_alert_days: 2.0,
        auto_add_enabled: true,
        auto_add_to_list_quantity: 6.0,
        todo_list: String::from("todo.shopping"),
    }
}
