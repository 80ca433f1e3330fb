// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! One card session driven from the command line.
//!
//! The session renders both modals on a headless surface, types the
//! requested values into them and submits through the same controller a
//! browser host would use.

use pantry_card::{
    HeadlessSurface, ModalKind, VirtualClock, clear_add_modal_form, read_raw_form_data,
};
use pantry_card_api::{
    CardSnapshot, InventoryIdResolver, ModalController, ObjectIdResolver, OpenEditResult,
};
use pantry_card_persistence::{InventoryStore, PersistenceError};
use pantry_domain::{
    DomainError, FormField, InventoryItem, RawFormData, SanitizedItemData, ValidationError,
    ValidationResult, convert_raw_form_data_to_item_data, parse_checkbox, sanitize_item_data,
    validate_raw_form_data,
};
use serde::Serialize;
use std::cell::Cell;
use std::rc::Rc;
use tracing::{debug, info};

/// A `FIELD=VALUE` pair typed into a form.
pub type Assignment = (FormField, String);

/// Parses `--set` arguments such as `expiry-date=2026-11-01`.
///
/// # Errors
///
/// Returns a message if there is no `=`, the field is unknown, or a
/// checkbox value is not a recognised on/off spelling.
pub fn parse_assignment(raw: &str) -> Result<Assignment, String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{raw}'"))?;
    let field: FormField = key
        .trim()
        .parse()
        .map_err(|e: DomainError| e.to_string())?;
    if field.is_checkbox() {
        parse_checkbox(value).map_err(|e| e.to_string())?;
    }
    Ok((field, value.to_string()))
}

/// What a submitted modal ended up showing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub success: bool,
    /// The modal's error banner at the end of the submit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub invalid_fields: Vec<String>,
    /// The stored item after a successful submit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<InventoryItem>,
}

impl Outcome {
    fn failed(error: String) -> Self {
        Self {
            success: false,
            error: Some(error),
            invalid_fields: Vec::new(),
            item: None,
        }
    }
}

/// The result of running form values through the validation pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
    /// The item a submit would send, when the form is valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<SanitizedItemData>,
}

/// Builds raw form data from assignments over an otherwise blank form.
#[must_use]
pub fn raw_form(assignments: &[Assignment]) -> RawFormData {
    let mut surface: HeadlessSurface = HeadlessSurface::with_item_modals();
    for (field, value) in assignments {
        surface.fill(ModalKind::Add, *field, value);
    }
    read_raw_form_data(&surface, ModalKind::Add)
}

#[must_use]
pub fn validate_form(raw: &RawFormData) -> ValidationReport {
    let validation: ValidationResult = validate_raw_form_data(raw);
    let item: Option<SanitizedItemData> = validation
        .is_valid
        .then(|| sanitize_item_data(&convert_raw_form_data_to_item_data(raw)));

    ValidationReport {
        valid: validation.is_valid,
        errors: validation.errors,
        item,
    }
}

/// A card over a loaded snapshot, backed by an in-process store.
pub struct Session {
    snapshot: CardSnapshot,
    inventory_id: String,
    controller: ModalController<HeadlessSurface, InventoryStore>,
    clock: VirtualClock,
    changed: Rc<Cell<bool>>,
}

impl Session {
    /// Seeds a store from the snapshot's configured entity.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot has no usable inventory.
    pub fn new(snapshot: CardSnapshot) -> Result<Self, PersistenceError> {
        let inventory_id: String = ObjectIdResolver.resolve(&snapshot.config.entity)?;
        let store: InventoryStore = InventoryStore::from_snapshot(&snapshot, &ObjectIdResolver)?;

        let mut surface: HeadlessSurface = HeadlessSurface::with_item_modals();
        clear_add_modal_form(&mut surface, &snapshot.config.form_defaults);

        let clock: VirtualClock = VirtualClock::new();
        let changed: Rc<Cell<bool>> = Rc::new(Cell::new(false));
        let flag: Rc<Cell<bool>> = Rc::clone(&changed);
        let controller: ModalController<HeadlessSurface, InventoryStore> =
            ModalController::new(surface, store, clock.clone())
                .with_form_defaults(snapshot.config.form_defaults.clone())
                .on_data_changed(move || flag.set(true));

        debug!(entity = %snapshot.config.entity, %inventory_id, "Session ready");
        Ok(Self {
            snapshot,
            inventory_id,
            controller,
            clock,
            changed,
        })
    }

    /// Returns whether any submit changed the inventory.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.changed.get()
    }

    /// Opens the add modal, types the assignments and submits.
    pub async fn add(&mut self, assignments: &[Assignment]) -> Outcome {
        if !self.controller.open_add_modal() {
            return Outcome::failed(String::from("Add modal is not available"));
        }
        self.type_into(ModalKind::Add, assignments);

        let success: bool = self.controller.add_item(&self.snapshot.config).await;
        let item: Option<InventoryItem> = if success {
            self.stored_items().pop()
        } else {
            None
        };
        self.finish(ModalKind::Add, success, item)
    }

    /// Opens `name` in the edit modal, types the assignments and saves.
    pub async fn edit(&mut self, name: &str, assignments: &[Assignment]) -> Outcome {
        let fresh: CardSnapshot = match self.current_snapshot() {
            Ok(snapshot) => snapshot,
            Err(e) => return Outcome::failed(e.to_string()),
        };
        let opened: OpenEditResult = self.controller.open_edit_modal(name, move || fresh);
        if !opened.found {
            return Outcome::failed(format!("Item '{name}' not found"));
        }
        self.type_into(ModalKind::Edit, assignments);

        let success: bool = self.controller.save_edit_modal(&self.snapshot.config).await;
        let item: Option<InventoryItem> = if success {
            let saved_name: String =
                read_raw_form_data(self.controller.surface(), ModalKind::Edit).name;
            self.stored_items()
                .into_iter()
                .find(|item| item.name == saved_name)
        } else {
            None
        };
        self.finish(ModalKind::Edit, success, item)
    }

    /// Returns the snapshot with the store's current items written in.
    ///
    /// # Errors
    ///
    /// Returns an error if the store no longer holds the inventory.
    pub fn current_snapshot(&self) -> Result<CardSnapshot, PersistenceError> {
        let mut snapshot: CardSnapshot = self.snapshot.clone();
        self.controller
            .service()
            .write_to_snapshot(&mut snapshot, &ObjectIdResolver)?;
        Ok(snapshot)
    }

    fn stored_items(&self) -> Vec<InventoryItem> {
        self.controller
            .service()
            .items(&self.inventory_id)
            .unwrap_or_default()
    }

    fn type_into(&mut self, modal: ModalKind, assignments: &[Assignment]) {
        for (field, value) in assignments {
            self.controller.surface_mut().fill(modal, *field, value);
            self.controller.handle_field_input(modal, *field);
        }
    }

    fn finish(&mut self, modal: ModalKind, success: bool, item: Option<InventoryItem>) -> Outcome {
        let surface: &HeadlessSurface = self.controller.surface();
        let outcome: Outcome = Outcome {
            success,
            error: surface.modal(modal).and_then(|state| state.error.clone()),
            invalid_fields: surface.invalid_fields(),
            item,
        };

        // Let pending focus and banner timers run out.
        for action in self.clock.run_all() {
            self.controller.run_deferred(action);
        }

        info!(%modal, success, "Submit finished");
        outcome
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use pantry_card_api::{CardConfig, EntityAttributes, EntityState, HassState};
    use std::collections::HashMap;

    fn create_test_snapshot() -> CardSnapshot {
        let flour: InventoryItem = InventoryItem {
            name: String::from("Flour"),
            quantity: Some(2.0),
            unit: Some(String::from("kg")),
            ..InventoryItem::default()
        };
        let mut states: HashMap<String, EntityState> = HashMap::new();
        states.insert(
            String::from("sensor.pantry_inventory"),
            EntityState {
                state: String::from("1"),
                attributes: EntityAttributes {
                    items: Some(vec![flour]),
                    ..EntityAttributes::default()
                },
            },
        );
        CardSnapshot {
            hass: HassState { states },
            config: CardConfig::new("sensor.pantry_inventory"),
        }
    }

    fn set(field: FormField, value: &str) -> Assignment {
        (field, value.to_string())
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("expiry-date=2026-11-01"),
            Ok(set(FormField::ExpiryDate, "2026-11-01"))
        );
        assert_eq!(
            parse_assignment("name=a=b"),
            Ok(set(FormField::Name, "a=b"))
        );
        assert!(parse_assignment("name").is_err());
        assert_eq!(
            parse_assignment("barcode=123"),
            Err(String::from("Unknown form field: barcode"))
        );
    }

    #[test]
    fn test_parse_assignment_checks_checkbox_values() {
        assert_eq!(
            parse_assignment("auto-add-enabled=no"),
            Ok(set(FormField::AutoAddEnabled, "no"))
        );
        assert_eq!(
            parse_assignment("auto-add-enabled=maybe"),
            Err(String::from(
                "Expected true or false for a checkbox, got 'maybe'"
            ))
        );
    }

    #[test]
    fn test_falsy_checkbox_spellings_leave_auto_add_off() {
        for value in ["0", "no", "off", "false"] {
            let raw: RawFormData = raw_form(&[set(FormField::AutoAddEnabled, value)]);
            assert!(!raw.auto_add_enabled, "{value}");
        }
        let raw: RawFormData = raw_form(&[set(FormField::AutoAddEnabled, "yes")]);
        assert!(raw.auto_add_enabled);
    }

    #[test]
    fn test_validate_form_reports_errors() {
        let report: ValidationReport = validate_form(&raw_form(&[
            set(FormField::Quantity, "-1"),
            set(FormField::ExpiryAlertDays, "4"),
        ]));

        assert!(!report.valid);
        assert_eq!(report.item, None);
        let fields: Vec<FormField> = report.errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                FormField::Name,
                FormField::Quantity,
                FormField::ExpiryAlertDays
            ]
        );
    }

    #[test]
    fn test_validate_form_returns_sanitized_item() {
        let report: ValidationReport = validate_form(&raw_form(&[
            set(FormField::Name, "  Oats "),
            set(FormField::Quantity, "3"),
        ]));

        assert!(report.valid);
        let item: SanitizedItemData = report.item.unwrap();
        assert_eq!(item.name(), "Oats");
        assert!((item.quantity() - 3.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_add_stores_item() {
        let mut session: Session = Session::new(create_test_snapshot()).unwrap();

        let outcome: Outcome = session
            .add(&[set(FormField::Name, "Sugar"), set(FormField::Unit, "kg")])
            .await;

        assert!(outcome.success);
        assert_eq!(outcome.error, None);
        assert_eq!(outcome.item.unwrap().name, "Sugar");
        assert!(session.changed());

        let snapshot: CardSnapshot = session.current_snapshot().unwrap();
        assert_eq!(snapshot.items().unwrap().len(), 2);
        assert_eq!(snapshot.hass.states["sensor.pantry_inventory"].state, "2");
    }

    #[tokio::test]
    async fn test_add_duplicate_shows_banner() {
        let mut session: Session = Session::new(create_test_snapshot()).unwrap();

        let outcome: Outcome = session.add(&[set(FormField::Name, "flour")]).await;

        assert!(!outcome.success);
        assert_eq!(
            outcome.error.as_deref(),
            Some("Error adding item: Item 'flour' already exists")
        );
        assert!(!session.changed());
    }

    #[tokio::test]
    async fn test_add_invalid_lists_fields() {
        let mut session: Session = Session::new(create_test_snapshot()).unwrap();

        let outcome: Outcome = session.add(&[set(FormField::Quantity, "many")]).await;

        assert!(!outcome.success);
        assert_eq!(outcome.error.as_deref(), Some("Item name is required"));
        assert_eq!(
            outcome.invalid_fields,
            vec![String::from("add-name"), String::from("add-quantity")]
        );
    }

    #[tokio::test]
    async fn test_edit_renames_item() {
        let mut session: Session = Session::new(create_test_snapshot()).unwrap();

        let outcome: Outcome = session
            .edit("Flour", &[set(FormField::Name, "Bread flour")])
            .await;

        assert!(outcome.success);
        let item: InventoryItem = outcome.item.unwrap();
        assert_eq!(item.name, "Bread flour");
        assert_eq!(item.unit.as_deref(), Some("kg"));
        assert!((item.quantity.unwrap() - 2.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_edit_unknown_item() {
        let mut session: Session = Session::new(create_test_snapshot()).unwrap();

        let outcome: Outcome = session.edit("Salt", &[]).await;

        assert_eq!(outcome, Outcome::failed(String::from("Item 'Salt' not found")));
        assert!(!session.changed());
    }
}
