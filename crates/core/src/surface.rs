// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use pantry_domain::FormField;
use std::str::FromStr;

/// The two item modals rendered by the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalKind {
    Add,
    Edit,
}

impl ModalKind {
    /// Both modals, add first.
    pub const ALL: [Self; 2] = [Self::Add, Self::Edit];

    /// Returns the element id prefix for this modal's fields.
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Edit => "edit",
        }
    }

    /// Returns the element id of a field inside this modal.
    #[must_use]
    pub fn field_id(&self, field: FormField) -> String {
        format!("{}-{}", self.prefix(), field.key())
    }

    /// Splits an element id such as `edit-expiry-date` into modal and field.
    ///
    /// # Errors
    ///
    /// Returns a `CoreError` naming which part of the id did not resolve.
    pub fn parse_field_id(id: &str) -> Result<(Self, FormField), CoreError> {
        let (prefix, key) = id
            .split_once('-')
            .ok_or_else(|| CoreError::MalformedElementId(id.to_string()))?;
        let modal: Self = Self::from_str(prefix)?;
        let field: FormField =
            FormField::from_str(key).map_err(|error| CoreError::UnknownField {
                element_id: id.to_string(),
                error,
            })?;
        Ok((modal, field))
    }
}

impl FromStr for ModalKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "edit" => Ok(Self::Edit),
            _ => Err(CoreError::UnknownModal(s.to_string())),
        }
    }
}

impl std::fmt::Display for ModalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

/// Access to form inputs by element id.
///
/// Implementations must tolerate ids that are not present: reads return
/// `None` and writes do nothing.
pub trait FormFieldStore {
    /// Returns the current text of an input.
    fn get_value(&self, field_id: &str) -> Option<String>;
    /// Returns the checked state of a checkbox.
    fn get_checked(&self, field_id: &str) -> Option<bool>;
    fn set_value(&mut self, field_id: &str, value: &str);
    fn set_checked(&mut self, field_id: &str, checked: bool);
}

/// The parts of the card's markup the modal controller drives.
pub trait ModalSurface: FormFieldStore {
    /// Returns whether the modal element exists in the rendered card.
    fn has_modal(&self, modal: ModalKind) -> bool;
    fn is_modal_open(&self, modal: ModalKind) -> bool;
    fn set_modal_open(&mut self, modal: ModalKind, open: bool);
    /// Shows a message in the modal's error banner.
    fn show_error(&mut self, modal: ModalKind, message: &str);
    /// Hides the modal's error banner. Hiding a hidden banner is a no-op.
    fn clear_error(&mut self, modal: ModalKind);
    /// Marks or unmarks an input as failing validation.
    fn set_field_invalid(&mut self, field_id: &str, invalid: bool);
    /// Returns whether an input accepts edits. Missing inputs count as enabled.
    fn is_field_enabled(&self, field_id: &str) -> bool;
    fn set_field_enabled(&mut self, field_id: &str, enabled: bool);
    /// Moves keyboard focus to an input, optionally selecting its text.
    fn focus_field(&mut self, field_id: &str, select: bool);
}
