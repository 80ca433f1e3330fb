// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reading and writing the item forms.
//!
//! The add and edit modals share one field set; element ids are built as
//! `<prefix>-<field key>`. Every operation skips fields that are not present.

use crate::surface::{FormFieldStore, ModalKind};
use pantry_domain::{FormDefaults, FormField, InventoryItem, RawFormData, format_number};

fn read_text<S>(store: &S, modal: ModalKind, field: FormField) -> String
where
    S: FormFieldStore + ?Sized,
{
    store
        .get_value(&modal.field_id(field))
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

/// Reads the given modal's inputs into a raw form snapshot.
///
/// Text values are trimmed; missing inputs read as empty or unchecked.
#[must_use]
pub fn read_raw_form_data<S>(store: &S, modal: ModalKind) -> RawFormData
where
    S: FormFieldStore + ?Sized,
{
    RawFormData {
        name: read_text(store, modal, FormField::Name),
        quantity: read_text(store, modal, FormField::Quantity),
        unit: read_text(store, modal, FormField::Unit),
        category: read_text(store, modal, FormField::Category),
        location: read_text(store, modal, FormField::Location),
        expiry_date: read_text(store, modal, FormField::ExpiryDate),
        expiry_alert_days: read_text(store, modal, FormField::ExpiryAlertDays),
        auto_add_enabled: store
            .get_checked(&modal.field_id(FormField::AutoAddEnabled))
            .unwrap_or(false),
        auto_add_to_list_quantity: read_text(store, modal, FormField::AutoAddToListQuantity),
        todo_list: read_text(store, modal, FormField::TodoList),
    }
}

#[must_use]
pub fn get_raw_add_modal_data<S: FormFieldStore + ?Sized>(store: &S) -> RawFormData {
    read_raw_form_data(store, ModalKind::Add)
}

#[must_use]
pub fn get_raw_edit_modal_data<S: FormFieldStore + ?Sized>(store: &S) -> RawFormData {
    read_raw_form_data(store, ModalKind::Edit)
}

/// Values as they are written into a form, one entry per text input plus
/// the checkbox state.
struct FormValues {
    texts: [(FormField, String); 9],
    auto_add_enabled: bool,
}

impl FormValues {
    fn from_defaults(defaults: &FormDefaults) -> Self {
        Self {
            texts: [
                (FormField::Name, String::new()),
                (FormField::Quantity, format_number(defaults.quantity)),
                (FormField::Unit, defaults.unit.clone()),
                (FormField::Category, defaults.category.clone()),
                (FormField::Location, defaults.location.clone()),
                (FormField::ExpiryDate, defaults.expiry_date.clone()),
                (
                    FormField::ExpiryAlertDays,
                    format_number(defaults.expiry_alert_days),
                ),
                (
                    FormField::AutoAddToListQuantity,
                    format_number(defaults.auto_add_to_list_quantity),
                ),
                (FormField::TodoList, defaults.todo_list.clone()),
            ],
            auto_add_enabled: defaults.auto_add_enabled,
        }
    }

    fn from_item(item: &InventoryItem, defaults: &FormDefaults) -> Self {
        let text = |value: &Option<String>, default: &String| {
            value.clone().unwrap_or_else(|| default.clone())
        };
        let number = |value: Option<f64>, default: f64| format_number(value.unwrap_or(default));

        Self {
            texts: [
                (FormField::Name, item.name.clone()),
                (FormField::Quantity, number(item.quantity, defaults.quantity)),
                (FormField::Unit, text(&item.unit, &defaults.unit)),
                (FormField::Category, text(&item.category, &defaults.category)),
                (FormField::Location, text(&item.location, &defaults.location)),
                (
                    FormField::ExpiryDate,
                    text(&item.expiry_date, &defaults.expiry_date),
                ),
                (
                    FormField::ExpiryAlertDays,
                    number(item.expiry_alert_days, defaults.expiry_alert_days),
                ),
                (
                    FormField::AutoAddToListQuantity,
                    number(
                        item.auto_add_to_list_quantity,
                        defaults.auto_add_to_list_quantity,
                    ),
                ),
                (FormField::TodoList, text(&item.todo_list, &defaults.todo_list)),
            ],
            auto_add_enabled: item.auto_add_enabled.unwrap_or(defaults.auto_add_enabled),
        }
    }

    fn write<S: FormFieldStore + ?Sized>(&self, store: &mut S, modal: ModalKind) {
        for (field, value) in &self.texts {
            store.set_value(&modal.field_id(*field), value);
        }
        store.set_checked(
            &modal.field_id(FormField::AutoAddEnabled),
            self.auto_add_enabled,
        );
    }
}

/// Writes a stored item into the edit modal.
///
/// Fields the item lacks are filled from `defaults`.
pub fn populate_edit_modal<S: FormFieldStore + ?Sized>(
    store: &mut S,
    item: &InventoryItem,
    defaults: &FormDefaults,
) {
    FormValues::from_item(item, defaults).write(store, ModalKind::Edit);
}

/// Resets the add modal to the configured defaults for a fresh entry.
pub fn clear_add_modal_form<S>(store: &mut S, defaults: &FormDefaults)
where
    S: FormFieldStore + ?Sized,
{
    FormValues::from_defaults(defaults).write(store, ModalKind::Add);
}
