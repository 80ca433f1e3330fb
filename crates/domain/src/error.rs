// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors raised by domain parsing helpers.
///
/// Field validation failures are not represented here; those are collected
/// as data in a `ValidationResult`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A date string could not be parsed as a calendar date.
    InvalidDate {
        /// The offending date string.
        date_string: String,
        /// The parser's error message.
        error: String,
    },
    /// A form field key does not name any known field.
    UnknownField(String),
    /// Text typed for a checkbox is not a recognised on/off spelling.
    InvalidCheckboxValue(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::UnknownField(key) => write!(f, "Unknown form field: {key}"),
            Self::InvalidCheckboxValue(value) => {
                write!(f, "Expected true or false for a checkbox, got '{value}'")
            }
        }
    }
}

impl std::error::Error for DomainError {}
