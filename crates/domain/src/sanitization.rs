// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::number::non_negative;
use crate::types::{ItemData, SanitizedItemData};

/// Maximum item name length, in characters.
pub const MAX_NAME_LENGTH: usize = 100;
/// Maximum category length, in characters.
pub const MAX_CATEGORY_LENGTH: usize = 50;
/// Maximum unit length, in characters.
pub const MAX_UNIT_LENGTH: usize = 20;
/// Maximum location length, in characters.
pub const MAX_LOCATION_LENGTH: usize = 50;
/// Maximum todo list entity id length, in characters.
pub const MAX_TODO_LIST_LENGTH: usize = 100;
/// Maximum expiry date length; the width of `YYYY-MM-DD`.
pub const MAX_EXPIRY_DATE_LENGTH: usize = 10;
/// Upper bound for every numeric field.
pub const MAX_QUANTITY: f64 = 999_999.0;

/// Trims, truncates to `max_chars`, then trims again.
///
/// The second trim drops whitespace exposed by the cut.
fn cap_string(value: &str, max_chars: usize) -> String {
    let truncated: String = value.trim().chars().take(max_chars).collect();
    truncated.trim().to_string()
}

/// Bounds a number to `[0, MAX_QUANTITY]`.
///
/// `NaN` becomes zero and positive infinity becomes the upper bound.
const fn cap_number(value: f64) -> f64 {
    non_negative(value).min(MAX_QUANTITY)
}

/// Applies persistence limits to item data.
///
/// Safe on any input, including data that never went through conversion.
/// Applying it to its own output changes nothing.
#[must_use]
pub fn sanitize_item_data(item: &ItemData) -> SanitizedItemData {
    SanitizedItemData {
        name: cap_string(&item.name, MAX_NAME_LENGTH),
        quantity: cap_number(item.quantity),
        unit: cap_string(&item.unit, MAX_UNIT_LENGTH),
        category: cap_string(&item.category, MAX_CATEGORY_LENGTH),
        location: cap_string(&item.location, MAX_LOCATION_LENGTH),
        expiry_date: cap_string(&item.expiry_date, MAX_EXPIRY_DATE_LENGTH),
        expiry_alert_days: cap_number(item.expiry_alert_days),
        auto_add_enabled: item.auto_add_enabled,
        auto_add_to_list_quantity: cap_number(item.auto_add_to_list_quantity),
        todo_list: cap_string(&item.todo_list, MAX_TODO_LIST_LENGTH),
    }
}
