// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::str::FromStr;

/// The fields shared by the add and edit item forms.
///
/// Both modals expose the same field set; only the element id prefix differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Name,
    Quantity,
    Unit,
    Category,
    Location,
    ExpiryDate,
    ExpiryAlertDays,
    AutoAddEnabled,
    AutoAddToListQuantity,
    TodoList,
}

impl FormField {
    /// Every form field, in form order.
    pub const ALL: [Self; 10] = [
        Self::Name,
        Self::Quantity,
        Self::Unit,
        Self::Category,
        Self::Location,
        Self::ExpiryDate,
        Self::ExpiryAlertDays,
        Self::AutoAddEnabled,
        Self::AutoAddToListQuantity,
        Self::TodoList,
    ];

    /// Returns the key used to build element ids (`<prefix>-<key>`).
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Quantity => "quantity",
            Self::Unit => "unit",
            Self::Category => "category",
            Self::Location => "location",
            Self::ExpiryDate => "expiry-date",
            Self::ExpiryAlertDays => "expiry-alert-days",
            Self::AutoAddEnabled => "auto-add-enabled",
            Self::AutoAddToListQuantity => "auto-add-to-list-quantity",
            Self::TodoList => "todo-list",
        }
    }

    /// Returns whether this field is a checkbox rather than a text input.
    #[must_use]
    pub const fn is_checkbox(&self) -> bool {
        matches!(self, Self::AutoAddEnabled)
    }
}

impl FromStr for FormField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| DomainError::UnknownField(s.to_string()))
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Reads a checkbox state typed as text.
///
/// Accepts `true`/`false`, `1`/`0`, `yes`/`no` and `on`/`off` in any case.
/// Empty text is unchecked.
///
/// # Errors
///
/// Returns `DomainError::InvalidCheckboxValue` for any other text.
pub fn parse_checkbox(raw: &str) -> Result<bool, DomainError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "" | "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(DomainError::InvalidCheckboxValue(raw.to_string())),
    }
}

/// A snapshot of an item form exactly as the user left it.
///
/// Text inputs are kept as strings; missing inputs read as empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawFormData {
    pub name: String,
    pub quantity: String,
    pub unit: String,
    pub category: String,
    pub location: String,
    pub expiry_date: String,
    pub expiry_alert_days: String,
    pub auto_add_enabled: bool,
    pub auto_add_to_list_quantity: String,
    pub todo_list: String,
}

/// A typed item with defaults applied and negatives removed.
///
/// No upper bounds are enforced at this stage; see `sanitize_item_data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemData {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "quantity_or_default")]
    pub quantity: f64,
    #[serde(deserialize_with = "lenient_string")]
    pub unit: String,
    #[serde(deserialize_with = "lenient_string")]
    pub category: String,
    #[serde(deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(deserialize_with = "lenient_string")]
    pub expiry_date: String,
    #[serde(deserialize_with = "alert_days_or_default")]
    pub expiry_alert_days: f64,
    #[serde(deserialize_with = "truthy")]
    pub auto_add_enabled: bool,
    #[serde(deserialize_with = "auto_add_quantity_or_default")]
    pub auto_add_to_list_quantity: f64,
    #[serde(deserialize_with = "lenient_string")]
    pub todo_list: String,
}

/// Reads text from JSON, taking anything that is not a string as empty.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        _ => String::new(),
    })
}

/// Reads a number from JSON that may hold a string, null or garbage.
///
/// Anything that is not a finite number becomes `default`, the same value
/// an absent field gets.
fn number_or_default(value: &Value, default: f64) -> f64 {
    match value {
        Value::Number(number) => number.as_f64().filter(|n| n.is_finite()).unwrap_or(default),
        Value::String(text) => crate::number::parse_finite(text).unwrap_or(default),
        _ => default,
    }
}

fn quantity_or_default<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Value = Value::deserialize(deserializer)?;
    Ok(number_or_default(&value, crate::conversion::DEFAULT_QUANTITY))
}

fn alert_days_or_default<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Value = Value::deserialize(deserializer)?;
    Ok(number_or_default(
        &value,
        crate::conversion::DEFAULT_EXPIRY_ALERT_DAYS,
    ))
}

fn auto_add_quantity_or_default<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Value = Value::deserialize(deserializer)?;
    Ok(number_or_default(
        &value,
        crate::conversion::DEFAULT_AUTO_ADD_QUANTITY,
    ))
}

/// Reads a flag from JSON using the platform's truthiness rules.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => false,
        Value::Bool(flag) => flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

impl Default for ItemData {
    fn default() -> Self {
        Self {
            name: String::new(),
            quantity: crate::conversion::DEFAULT_QUANTITY,
            unit: String::new(),
            category: String::new(),
            location: String::new(),
            expiry_date: String::new(),
            expiry_alert_days: crate::conversion::DEFAULT_EXPIRY_ALERT_DAYS,
            auto_add_enabled: false,
            auto_add_to_list_quantity: crate::conversion::DEFAULT_AUTO_ADD_QUANTITY,
            todo_list: String::new(),
        }
    }
}

/// Item data clamped to persistence limits.
///
/// The only way to obtain one is `sanitize_item_data`, so holding a value of
/// this type proves every bound has been applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SanitizedItemData {
    pub(crate) name: String,
    pub(crate) quantity: f64,
    pub(crate) unit: String,
    pub(crate) category: String,
    pub(crate) location: String,
    pub(crate) expiry_date: String,
    pub(crate) expiry_alert_days: f64,
    pub(crate) auto_add_enabled: bool,
    pub(crate) auto_add_to_list_quantity: f64,
    pub(crate) todo_list: String,
}

impl SanitizedItemData {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn quantity(&self) -> f64 {
        self.quantity
    }

    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn expiry_date(&self) -> &str {
        &self.expiry_date
    }

    #[must_use]
    pub const fn expiry_alert_days(&self) -> f64 {
        self.expiry_alert_days
    }

    #[must_use]
    pub const fn auto_add_enabled(&self) -> bool {
        self.auto_add_enabled
    }

    #[must_use]
    pub const fn auto_add_to_list_quantity(&self) -> f64 {
        self.auto_add_to_list_quantity
    }

    #[must_use]
    pub fn todo_list(&self) -> &str {
        &self.todo_list
    }

    /// Returns an unrestricted copy, e.g. to feed back through sanitization.
    #[must_use]
    pub fn to_item_data(&self) -> ItemData {
        ItemData {
            name: self.name.clone(),
            quantity: self.quantity,
            unit: self.unit.clone(),
            category: self.category.clone(),
            location: self.location.clone(),
            expiry_date: self.expiry_date.clone(),
            expiry_alert_days: self.expiry_alert_days,
            auto_add_enabled: self.auto_add_enabled,
            auto_add_to_list_quantity: self.auto_add_to_list_quantity,
            todo_list: self.todo_list.clone(),
        }
    }
}

/// An item as stored by the inventory integration.
///
/// Every field except `name` may be missing or null in platform state.
/// Server-assigned attributes this card does not interpret are preserved in
/// `metadata`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InventoryItem {
    /// The item name; unique within one inventory.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub expiry_alert_days: Option<f64>,
    #[serde(default)]
    pub auto_add_enabled: Option<bool>,
    #[serde(default)]
    pub auto_add_to_list_quantity: Option<f64>,
    #[serde(default)]
    pub todo_list: Option<String>,
    #[serde(flatten)]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl InventoryItem {
    /// Builds a stored item from sanitized data, with no metadata.
    #[must_use]
    pub fn from_sanitized(data: &SanitizedItemData) -> Self {
        let mut item: Self = Self::default();
        item.apply_sanitized(data);
        item
    }

    /// Overwrites every form-managed field, keeping `metadata` intact.
    pub fn apply_sanitized(&mut self, data: &SanitizedItemData) {
        self.name = data.name.clone();
        self.quantity = Some(data.quantity);
        self.unit = Some(data.unit.clone());
        self.category = Some(data.category.clone());
        self.location = Some(data.location.clone());
        self.expiry_date = Some(data.expiry_date.clone());
        self.expiry_alert_days = Some(data.expiry_alert_days);
        self.auto_add_enabled = Some(data.auto_add_enabled);
        self.auto_add_to_list_quantity = Some(data.auto_add_to_list_quantity);
        self.todo_list = Some(data.todo_list.clone());
    }
}

/// Values written into a form when it is reset or a stored field is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormDefaults {
    pub quantity: f64,
    pub unit: String,
    pub category: String,
    pub location: String,
    pub expiry_date: String,
    pub expiry_alert_days: f64,
    pub auto_add_enabled: bool,
    pub auto_add_to_list_quantity: f64,
    pub todo_list: String,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            quantity: 1.0,
            unit: String::new(),
            category: String::new(),
            location: String::new(),
            expiry_date: String::new(),
            expiry_alert_days: 1.0,
            auto_add_enabled: false,
            auto_add_to_list_quantity: 0.0,
            todo_list: String::new(),
        }
    }
}

/// Renders a number the way a numeric input displays it.
///
/// Whole numbers drop the fractional part (`3.0` becomes `"3"`).
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract().abs() < f64::EPSILON && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
