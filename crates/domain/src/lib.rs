// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod conversion;
mod error;
mod number;
mod sanitization;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use conversion::{
    DEFAULT_AUTO_ADD_QUANTITY, DEFAULT_EXPIRY_ALERT_DAYS, DEFAULT_QUANTITY,
    convert_raw_form_data_to_item_data,
};
pub use error::DomainError;
pub use number::parse_finite;
pub use sanitization::{
    MAX_CATEGORY_LENGTH, MAX_EXPIRY_DATE_LENGTH, MAX_LOCATION_LENGTH, MAX_NAME_LENGTH,
    MAX_QUANTITY, MAX_TODO_LIST_LENGTH, MAX_UNIT_LENGTH, sanitize_item_data,
};
pub use types::{
    FormDefaults, FormField, InventoryItem, ItemData, RawFormData, SanitizedItemData,
    format_number, parse_checkbox,
};
pub use validation::{
    ValidationError, ValidationResult, parse_expiry_date, validate_raw_form_data,
};
