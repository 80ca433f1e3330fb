// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::number::{non_negative, parse_finite};
use crate::types::{ItemData, RawFormData};

/// Quantity used when the input is empty or not a number.
pub const DEFAULT_QUANTITY: f64 = 1.0;
/// Expiry alert threshold used when the input is empty or not a number.
pub const DEFAULT_EXPIRY_ALERT_DAYS: f64 = 1.0;
/// Auto-add quantity used when the input is empty or not a number.
pub const DEFAULT_AUTO_ADD_QUANTITY: f64 = 0.0;

fn number_or(raw: &str, default: f64) -> f64 {
    parse_finite(raw).map_or(default, non_negative)
}

/// Converts a raw form submission into typed item data.
///
/// The input is expected to have passed `validate_raw_form_data`, but any
/// input is accepted: unusable numbers fall back to their field default and
/// negative numbers are raised to zero.
#[must_use]
pub fn convert_raw_form_data_to_item_data(raw: &RawFormData) -> ItemData {
    ItemData {
        name: raw.name.trim().to_string(),
        quantity: number_or(&raw.quantity, DEFAULT_QUANTITY),
        unit: raw.unit.trim().to_string(),
        category: raw.category.trim().to_string(),
        location: raw.location.trim().to_string(),
        expiry_date: raw.expiry_date.trim().to_string(),
        expiry_alert_days: number_or(&raw.expiry_alert_days, DEFAULT_EXPIRY_ALERT_DAYS),
        auto_add_enabled: raw.auto_add_enabled,
        auto_add_to_list_quantity: number_or(
            &raw.auto_add_to_list_quantity,
            DEFAULT_AUTO_ADD_QUANTITY,
        ),
        todo_list: raw.todo_list.trim().to_string(),
    }
}
