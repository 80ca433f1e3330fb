// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::str::FromStr;

use crate::{
    DomainError, FormDefaults, FormField, InventoryItem, SanitizedItemData, format_number,
    parse_checkbox, sanitize_item_data,
};

use super::helpers::create_test_item_data;

#[test]
fn test_form_field_keys_round_trip_through_from_str() {
    for field in FormField::ALL {
        assert_eq!(FormField::from_str(field.key()), Ok(field));
    }
}

#[test]
fn test_form_field_rejects_unknown_key() {
    let result: Result<FormField, DomainError> = FormField::from_str("barcode");
    assert_eq!(result, Err(DomainError::UnknownField(String::from("barcode"))));
}

#[test]
fn test_only_auto_add_enabled_is_a_checkbox() {
    let checkboxes: Vec<FormField> = FormField::ALL
        .into_iter()
        .filter(FormField::is_checkbox)
        .collect();
    assert_eq!(checkboxes, vec![FormField::AutoAddEnabled]);
}

#[test]
fn test_parse_checkbox_spellings() {
    for raw in ["true", "TRUE", "1", "yes", "On"] {
        assert_eq!(parse_checkbox(raw), Ok(true), "{raw}");
    }
    for raw in ["", "false", "0", "no", "OFF", " false "] {
        assert_eq!(parse_checkbox(raw), Ok(false), "{raw}");
    }
    assert_eq!(
        parse_checkbox("maybe"),
        Err(DomainError::InvalidCheckboxValue(String::from("maybe")))
    );
}

#[test]
fn test_form_defaults() {
    let defaults: FormDefaults = FormDefaults::default();
    assert!((defaults.quantity - 1.0).abs() < f64::EPSILON);
    assert!((defaults.expiry_alert_days - 1.0).abs() < f64::EPSILON);
    assert!(defaults.auto_add_to_list_quantity.abs() < f64::EPSILON);
    assert!(!defaults.auto_add_enabled);
    assert_eq!(defaults.unit, "");
}

#[test]
fn test_form_defaults_partial_json_keeps_remaining_defaults() {
    let defaults: FormDefaults =
        serde_json::from_str(r#"{"unit": "pcs", "expiry_alert_days": 3}"#).unwrap();
    assert_eq!(defaults.unit, "pcs");
    assert!((defaults.expiry_alert_days - 3.0).abs() < f64::EPSILON);
    assert!((defaults.quantity - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_format_number() {
    assert_eq!(format_number(3.0), "3");
    assert_eq!(format_number(0.0), "0");
    assert_eq!(format_number(2.5), "2.5");
}

#[test]
fn test_inventory_item_tolerates_nulls_and_keeps_metadata() {
    let item: InventoryItem = serde_json::from_str(
        r#"{"name": "Flour", "quantity": null, "unit": "kg", "last_updated": "2026-10-01"}"#,
    )
    .unwrap();

    assert_eq!(item.name, "Flour");
    assert_eq!(item.quantity, None);
    assert_eq!(item.unit.as_deref(), Some("kg"));
    assert_eq!(item.category, None);
    assert_eq!(
        item.metadata.get("last_updated"),
        Some(&serde_json::Value::from("2026-10-01"))
    );
}

#[test]
fn test_inventory_item_apply_sanitized_preserves_metadata() {
    let mut item: InventoryItem = serde_json::from_str(
        r#"{"name": "Old", "quantity": 1, "id": "abc123"}"#,
    )
    .unwrap();
    let data: SanitizedItemData = sanitize_item_data(&create_test_item_data());

    item.apply_sanitized(&data);

    assert_eq!(item.name, "Eggs");
    assert_eq!(item.quantity, Some(12.0));
    assert_eq!(item.todo_list.as_deref(), Some("todo.shopping"));
    assert_eq!(item.auto_add_enabled, Some(true));
    assert_eq!(item.metadata.get("id"), Some(&serde_json::Value::from("abc123")));
}

#[test]
fn test_inventory_item_from_sanitized_has_no_metadata() {
    let data: SanitizedItemData = sanitize_item_data(&create_test_item_data());
    let item: InventoryItem = InventoryItem::from_sanitized(&data);
    assert!(item.metadata.is_empty());
    assert_eq!(item.location.as_deref(), Some("Fridge"));
}
