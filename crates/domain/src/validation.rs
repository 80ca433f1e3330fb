// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::number::parse_finite;
use crate::types::{FormField, RawFormData};
use serde::{Deserialize, Serialize};
use time::Date;
use time::macros::format_description;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: FormField,
    /// A human-readable description of the failure.
    pub message: String,
}

impl ValidationError {
    fn new(field: FormField, message: &str) -> Self {
        Self {
            field,
            message: String::from(message),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// The outcome of validating one form submission.
///
/// Errors are kept in check order, at most one per field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Returns the message shown to the user: the first error in check order.
    #[must_use]
    pub fn first_message(&self) -> Option<&str> {
        self.errors.first().map(|error| error.message.as_str())
    }

    /// Returns the fields that failed, in check order.
    #[must_use]
    pub fn invalid_fields(&self) -> Vec<FormField> {
        self.errors.iter().map(|error| error.field).collect()
    }

    /// Returns whether the given field has an error.
    #[must_use]
    pub fn has_error_for(&self, field: FormField) -> bool {
        self.errors.iter().any(|error| error.field == field)
    }
}

/// Parses an expiry date in the `YYYY-MM-DD` form produced by date inputs.
///
/// # Errors
///
/// Returns `DomainError::InvalidDate` if the string is not a real calendar
/// date (this includes out-of-range days such as February 30th).
pub fn parse_expiry_date(value: &str) -> Result<Date, DomainError> {
    let trimmed: &str = value.trim();
    Date::parse(trimmed, format_description!("[year]-[month]-[day]")).map_err(|e| {
        DomainError::InvalidDate {
            date_string: trimmed.to_string(),
            error: e.to_string(),
        }
    })
}

/// Checks a numeric input that has already been confirmed non-empty.
fn check_number(
    field: FormField,
    value: &str,
    invalid_message: &str,
    negative_message: &str,
) -> Option<ValidationError> {
    match parse_finite(value) {
        None => Some(ValidationError::new(field, invalid_message)),
        Some(number) if number < 0.0 => Some(ValidationError::new(field, negative_message)),
        Some(_) => None,
    }
}

/// Validates a raw form submission.
///
/// Rules run in a fixed order (name, quantity, auto-add pair, expiry pair)
/// and each field contributes at most one error. Empty optional numbers are
/// accepted here; conversion substitutes their defaults.
#[must_use]
pub fn validate_raw_form_data(raw: &RawFormData) -> ValidationResult {
    let mut errors: Vec<ValidationError> = Vec::new();

    if raw.name.trim().is_empty() {
        errors.push(ValidationError::new(FormField::Name, "Item name is required"));
    }

    if !raw.quantity.trim().is_empty() {
        errors.extend(check_number(
            FormField::Quantity,
            &raw.quantity,
            "Quantity must be a valid number",
            "Quantity cannot be negative",
        ));
    }

    if raw.auto_add_enabled {
        if raw.auto_add_to_list_quantity.trim().is_empty() {
            errors.push(ValidationError::new(
                FormField::AutoAddToListQuantity,
                "Auto-add quantity is required when auto-add is enabled",
            ));
        } else {
            errors.extend(check_number(
                FormField::AutoAddToListQuantity,
                &raw.auto_add_to_list_quantity,
                "Auto-add quantity must be a valid number",
                "Auto-add quantity cannot be negative",
            ));
        }

        if raw.todo_list.trim().is_empty() {
            errors.push(ValidationError::new(
                FormField::TodoList,
                "Todo list is required when auto-add is enabled",
            ));
        }
    }

    let has_expiry_date: bool = !raw.expiry_date.trim().is_empty();
    if has_expiry_date && parse_expiry_date(&raw.expiry_date).is_err() {
        errors.push(ValidationError::new(
            FormField::ExpiryDate,
            "Expiry date is not a valid date",
        ));
    }

    if !raw.expiry_alert_days.trim().is_empty() {
        if has_expiry_date {
            errors.extend(check_number(
                FormField::ExpiryAlertDays,
                &raw.expiry_alert_days,
                "Expiry alert days must be a valid number",
                "Expiry alert days cannot be negative",
            ));
        } else {
            errors.push(ValidationError::new(
                FormField::ExpiryAlertDays,
                "Expiry alert days requires an expiry date",
            ));
        }
    }

    ValidationResult::from_errors(errors)
}
