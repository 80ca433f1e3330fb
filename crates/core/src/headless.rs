// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! A map-backed surface for running the card without a browser.

use crate::surface::{FormFieldStore, ModalKind, ModalSurface};
use pantry_domain::{FormField, parse_checkbox};
use std::collections::HashMap;

/// The state of one input element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub checked: bool,
    pub invalid: bool,
    pub enabled: bool,
}

impl Default for FieldState {
    fn default() -> Self {
        Self {
            value: String::new(),
            checked: false,
            invalid: false,
            enabled: true,
        }
    }
}

/// The state of one modal element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModalState {
    pub open: bool,
    pub error: Option<String>,
}

/// Inputs and modals held in plain maps.
#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    fields: HashMap<String, FieldState>,
    modals: HashMap<ModalKind, ModalState>,
    focused: Option<(String, bool)>,
}

impl HeadlessSurface {
    /// Creates a surface with no modals and no inputs.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a surface with both modals and every form input rendered.
    #[must_use]
    pub fn with_item_modals() -> Self {
        let mut surface: Self = Self::default();
        for modal in ModalKind::ALL {
            surface.add_modal(modal);
            for field in FormField::ALL {
                surface.add_field(&modal.field_id(field));
            }
        }
        surface
    }

    pub fn add_modal(&mut self, modal: ModalKind) {
        self.modals.entry(modal).or_default();
    }

    pub fn add_field(&mut self, field_id: &str) {
        self.fields.entry(field_id.to_string()).or_default();
    }

    pub fn remove_field(&mut self, field_id: &str) {
        self.fields.remove(field_id);
    }

    #[must_use]
    pub fn field(&self, field_id: &str) -> Option<&FieldState> {
        self.fields.get(field_id)
    }

    #[must_use]
    pub fn modal(&self, modal: ModalKind) -> Option<&ModalState> {
        self.modals.get(&modal)
    }

    /// Returns the focused field id and whether its text was selected.
    #[must_use]
    pub fn focused(&self) -> Option<(&str, bool)> {
        self.focused
            .as_ref()
            .map(|(id, select)| (id.as_str(), *select))
    }

    /// Returns the ids of every field currently marked invalid, sorted.
    #[must_use]
    pub fn invalid_fields(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .fields
            .iter()
            .filter(|(_, state)| state.invalid)
            .map(|(id, _)| id.clone())
            .collect();
        ids.sort();
        ids
    }

    /// Types into a field the way a user would, for drivers and tests.
    ///
    /// Checkboxes take the spellings `parse_checkbox` accepts; anything else
    /// leaves them unchecked.
    pub fn fill(&mut self, modal: ModalKind, field: FormField, value: &str) {
        if field.is_checkbox() {
            self.set_checked(&modal.field_id(field), parse_checkbox(value).unwrap_or(false));
        } else {
            self.set_value(&modal.field_id(field), value);
        }
    }
}

impl FormFieldStore for HeadlessSurface {
    fn get_value(&self, field_id: &str) -> Option<String> {
        self.fields.get(field_id).map(|state| state.value.clone())
    }

    fn get_checked(&self, field_id: &str) -> Option<bool> {
        self.fields.get(field_id).map(|state| state.checked)
    }

    fn set_value(&mut self, field_id: &str, value: &str) {
        if let Some(state) = self.fields.get_mut(field_id) {
            state.value = value.to_string();
        }
    }

    fn set_checked(&mut self, field_id: &str, checked: bool) {
        if let Some(state) = self.fields.get_mut(field_id) {
            state.checked = checked;
        }
    }
}

impl ModalSurface for HeadlessSurface {
    fn has_modal(&self, modal: ModalKind) -> bool {
        self.modals.contains_key(&modal)
    }

    fn is_modal_open(&self, modal: ModalKind) -> bool {
        self.modals.get(&modal).is_some_and(|state| state.open)
    }

    fn set_modal_open(&mut self, modal: ModalKind, open: bool) {
        if let Some(state) = self.modals.get_mut(&modal) {
            state.open = open;
        }
    }

    fn show_error(&mut self, modal: ModalKind, message: &str) {
        if let Some(state) = self.modals.get_mut(&modal) {
            state.error = Some(message.to_string());
        }
    }

    fn clear_error(&mut self, modal: ModalKind) {
        if let Some(state) = self.modals.get_mut(&modal) {
            state.error = None;
        }
    }

    fn set_field_invalid(&mut self, field_id: &str, invalid: bool) {
        if let Some(state) = self.fields.get_mut(field_id) {
            state.invalid = invalid;
        }
    }

    fn is_field_enabled(&self, field_id: &str) -> bool {
        self.fields
            .get(field_id)
            .is_none_or(|state| state.enabled)
    }

    fn set_field_enabled(&mut self, field_id: &str, enabled: bool) {
        if let Some(state) = self.fields.get_mut(field_id) {
            state.enabled = enabled;
        }
    }

    fn focus_field(&mut self, field_id: &str, select: bool) {
        // Focusing a vanished element does nothing, as in a browser.
        if self.fields.contains_key(field_id) {
            self.focused = Some((field_id.to_string(), select));
        }
    }
}
