// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use pantry_domain::DomainError;

/// Failures mapping an element id such as `edit-expiry-date` back to a
/// modal and form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The id has no `<modal>-<field>` separator.
    MalformedElementId(String),
    /// The prefix is neither `add` nor `edit`.
    UnknownModal(String),
    /// The modal prefix is valid but the remainder names no form field.
    UnknownField {
        element_id: String,
        error: DomainError,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedElementId(id) => {
                write!(f, "Element id '{id}' is not of the form <modal>-<field>")
            }
            Self::UnknownModal(prefix) => write!(f, "No modal is named '{prefix}'"),
            Self::UnknownField { element_id, error } => {
                write!(f, "Element '{element_id}' is not a form field: {error}")
            }
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnknownField { error, .. } => Some(error),
            Self::MalformedElementId(_) | Self::UnknownModal(_) => None,
        }
    }
}
