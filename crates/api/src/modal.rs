// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Add/edit modal orchestration.
//!
//! The controller owns the edit state and drives a `ModalSurface`. Every
//! submit runs the same pipeline: read the form, validate, convert,
//! sanitize, call the service, then report the outcome on the surface.
//! Failures are reported through return values and the error banner; no
//! operation returns an `Err` to its caller.

use crate::error::ApiError;
use crate::localize::{FallbackLocalizer, Localizer, keys};
use crate::service::{InventoryIdResolver, InventoryService, ObjectIdResolver, ServiceResponse};
use crate::snapshot::{CardConfig, CardSnapshot};
use pantry_card::{
    DeferredAction, EditState, ModalKind, ModalSurface, Scheduler, clear_add_modal_form,
    populate_edit_modal, read_raw_form_data,
};
use pantry_domain::{
    FormDefaults, FormField, InventoryItem, RawFormData, SanitizedItemData, ValidationResult,
    convert_raw_form_data_to_item_data, sanitize_item_data, validate_raw_form_data,
};
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Delays used for deferred modal work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalTimings {
    /// Wait before focusing a field in a just-opened modal.
    pub focus_delay: Duration,
    /// How long an error banner stays up.
    pub error_display: Duration,
}

impl Default for ModalTimings {
    fn default() -> Self {
        Self {
            focus_delay: Duration::from_millis(100),
            error_display: Duration::from_millis(5000),
        }
    }
}

/// Where a click landed relative to the item modals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalClick {
    /// The dimmed area around a modal's content.
    Backdrop(ModalKind),
    /// A modal's close button.
    CloseButton(ModalKind),
    /// Anywhere inside a modal's content area.
    Content(ModalKind),
    /// Somewhere unrelated to the modals.
    Elsewhere,
}

/// The outcome of opening the edit modal.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenEditResult {
    pub found: bool,
    pub item: Option<InventoryItem>,
}

impl OpenEditResult {
    const fn not_found() -> Self {
        Self {
            found: false,
            item: None,
        }
    }
}

/// Which service call a submit ends in.
enum Submit {
    Create,
    Update { original_name: String },
}

impl Submit {
    const fn modal(&self) -> ModalKind {
        match self {
            Self::Create => ModalKind::Add,
            Self::Update { .. } => ModalKind::Edit,
        }
    }
}

/// Coordinates the add and edit item modals.
pub struct ModalController<V, S> {
    surface: V,
    service: S,
    scheduler: Box<dyn Scheduler>,
    localizer: Box<dyn Localizer>,
    resolver: Box<dyn InventoryIdResolver>,
    on_data_changed: Option<Box<dyn FnMut()>>,
    edit_state: EditState,
    defaults: FormDefaults,
    timings: ModalTimings,
    key_listener_attached: bool,
}

impl<V, S> ModalController<V, S>
where
    V: ModalSurface,
    S: InventoryService,
{
    /// Creates a controller with default strings, resolver, defaults and
    /// timings. The Escape key listener starts detached.
    #[must_use]
    pub fn new(surface: V, service: S, scheduler: impl Scheduler + 'static) -> Self {
        Self {
            surface,
            service,
            scheduler: Box::new(scheduler),
            localizer: Box::new(FallbackLocalizer),
            resolver: Box::new(ObjectIdResolver),
            on_data_changed: None,
            edit_state: EditState::NotEditing,
            defaults: FormDefaults::default(),
            timings: ModalTimings::default(),
            key_listener_attached: false,
        }
    }

    #[must_use]
    pub fn with_localizer(mut self, localizer: impl Localizer + 'static) -> Self {
        self.localizer = Box::new(localizer);
        self
    }

    #[must_use]
    pub fn with_resolver(mut self, resolver: impl InventoryIdResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    #[must_use]
    pub fn with_form_defaults(mut self, defaults: FormDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    #[must_use]
    pub const fn with_timings(mut self, timings: ModalTimings) -> Self {
        self.timings = timings;
        self
    }

    /// Registers the callback run once after every successful add or save.
    #[must_use]
    pub fn on_data_changed(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_data_changed = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub const fn surface(&self) -> &V {
        &self.surface
    }

    #[must_use]
    pub const fn surface_mut(&mut self) -> &mut V {
        &mut self.surface
    }

    #[must_use]
    pub const fn service(&self) -> &S {
        &self.service
    }

    #[must_use]
    pub const fn edit_state(&self) -> &EditState {
        &self.edit_state
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Starts listening for the global Escape key.
    pub fn attach(&mut self) {
        if !self.key_listener_attached {
            debug!("Attaching modal key listener");
            self.key_listener_attached = true;
        }
    }

    /// Stops listening for the global Escape key.
    pub fn detach(&mut self) {
        if self.key_listener_attached {
            debug!("Detaching modal key listener");
            self.key_listener_attached = false;
        }
    }

    /// Releases the controller's listeners. Safe to call repeatedly.
    pub fn destroy(&mut self) {
        self.detach();
    }

    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.key_listener_attached
    }

    /// Handles a document-level key press. Returns whether it was consumed.
    pub fn handle_key_down(&mut self, key: &str) -> bool {
        if !self.key_listener_attached || key != "Escape" {
            return false;
        }
        self.close_all_modals();
        true
    }

    // ------------------------------------------------------------------
    // Opening and closing
    // ------------------------------------------------------------------

    /// Shows the add modal and schedules focus on its name field.
    ///
    /// Returns `false` without doing anything if the modal is not rendered.
    pub fn open_add_modal(&mut self) -> bool {
        if !self.surface.has_modal(ModalKind::Add) {
            warn!("Add modal not found; cannot open");
            return false;
        }

        self.surface.clear_error(ModalKind::Add);
        self.clear_highlights(ModalKind::Add);
        self.surface.set_modal_open(ModalKind::Add, true);
        self.sync_expiry_threshold(ModalKind::Add);
        self.scheduler.schedule(
            self.timings.focus_delay,
            DeferredAction::FocusField {
                modal: ModalKind::Add,
                field: FormField::Name,
                select: false,
            },
        );
        true
    }

    pub fn close_add_modal(&mut self) {
        self.surface.set_modal_open(ModalKind::Add, false);
    }

    /// Hides the edit modal and forgets the item being edited.
    pub fn close_edit_modal(&mut self) {
        self.surface.set_modal_open(ModalKind::Edit, false);
        if self.edit_state.is_editing() {
            debug!("Edit cancelled");
        }
        self.edit_state = EditState::NotEditing;
    }

    pub fn close_all_modals(&mut self) {
        self.close_add_modal();
        self.close_edit_modal();
    }

    /// Opens the edit modal for the item with exactly this name.
    ///
    /// State is read fresh through `get_fresh_state` so the form shows the
    /// item as currently stored. When the entity, its item list, or the item
    /// is missing, a warning is logged and nothing on the surface changes.
    pub fn open_edit_modal<F>(&mut self, item_name: &str, get_fresh_state: F) -> OpenEditResult
    where
        F: FnOnce() -> CardSnapshot,
    {
        let snapshot: CardSnapshot = get_fresh_state();
        let item: InventoryItem = match snapshot.find_item(item_name) {
            Ok(item) => item.clone(),
            Err(e) => {
                warn!(error = %e, "Cannot open edit modal");
                return OpenEditResult::not_found();
            }
        };

        self.surface.clear_error(ModalKind::Edit);
        self.clear_highlights(ModalKind::Edit);
        populate_edit_modal(&mut self.surface, &item, &self.defaults);
        self.surface.set_modal_open(ModalKind::Edit, true);
        self.sync_expiry_threshold(ModalKind::Edit);
        self.scheduler.schedule(
            self.timings.focus_delay,
            DeferredAction::FocusField {
                modal: ModalKind::Edit,
                field: FormField::Name,
                select: true,
            },
        );

        debug!(item = %item.name, "Editing item");
        self.edit_state = EditState::editing(item.clone());
        OpenEditResult {
            found: true,
            item: Some(item),
        }
    }

    // ------------------------------------------------------------------
    // Submitting
    // ------------------------------------------------------------------

    /// Creates an item from the add form.
    ///
    /// On success the add form is reset to its defaults and the data-changed
    /// callback runs.
    pub async fn add_item(&mut self, config: &CardConfig) -> bool {
        if !self.submit(&Submit::Create, config).await {
            return false;
        }

        clear_add_modal_form(&mut self.surface, &self.defaults);
        self.notify_data_changed();
        true
    }

    /// Saves the edit form over the item being edited.
    ///
    /// Refuses immediately when no item is being edited. On success the form
    /// keeps its values, editing ends, and the data-changed callback runs.
    pub async fn save_edit_modal(&mut self, config: &CardConfig) -> bool {
        let EditState::Editing { original_name, .. } = &self.edit_state else {
            warn!("Save requested with no item being edited");
            return false;
        };

        let target: Submit = Submit::Update {
            original_name: original_name.clone(),
        };
        if !self.submit(&target, config).await {
            return false;
        }

        self.edit_state = EditState::NotEditing;
        self.notify_data_changed();
        true
    }

    async fn submit(&mut self, target: &Submit, config: &CardConfig) -> bool {
        let modal: ModalKind = target.modal();
        self.surface.clear_error(modal);
        self.clear_highlights(modal);

        self.sync_expiry_threshold(modal);
        let mut raw: RawFormData = read_raw_form_data(&self.surface, modal);
        if !self
            .surface
            .is_field_enabled(&modal.field_id(FormField::ExpiryAlertDays))
        {
            // Disabled inputs are not submitted.
            raw.expiry_alert_days.clear();
        }

        let validation: ValidationResult = validate_raw_form_data(&raw);
        if !validation.is_valid {
            debug!(?modal, errors = validation.errors.len(), "Form rejected");
            self.report_validation(modal, &validation);
            return false;
        }

        let data: SanitizedItemData = sanitize_item_data(&convert_raw_form_data_to_item_data(&raw));

        match self.persist(target, config, &data).await {
            Ok(response) if response.success => {
                info!(?modal, item = %data.name(), "Item saved");
                true
            }
            Ok(response) => {
                let reason: String = response.error.unwrap_or_else(|| {
                    self.localizer
                        .localize(keys::UNKNOWN_ERROR, &[], "Unknown error")
                });
                error!(?modal, %reason, "Inventory service rejected item");
                let message: String = match modal {
                    ModalKind::Add => self.localizer.localize(
                        keys::ADD_FAILED,
                        &[("error", reason.as_str())],
                        "Error adding item: {error}",
                    ),
                    ModalKind::Edit => self.localizer.localize(
                        keys::UPDATE_FAILED,
                        &[("error", reason.as_str())],
                        "Error updating item: {error}",
                    ),
                };
                self.show_error(modal, &message);
                false
            }
            Err(e) => {
                error!(?modal, error = %e, "Saving item failed");
                let message: String = match modal {
                    ModalKind::Add => self.localizer.localize(
                        keys::ADD_UNEXPECTED,
                        &[],
                        "An error occurred while adding the item",
                    ),
                    ModalKind::Edit => self.localizer.localize(
                        keys::UPDATE_UNEXPECTED,
                        &[],
                        "An error occurred while updating the item",
                    ),
                };
                self.show_error(modal, &message);
                false
            }
        }
    }

    async fn persist(
        &self,
        target: &Submit,
        config: &CardConfig,
        data: &SanitizedItemData,
    ) -> Result<ServiceResponse, ApiError> {
        let inventory_id: String = self.resolver.resolve(&config.entity)?;
        let response: ServiceResponse = match target {
            Submit::Create => self.service.add_item(&inventory_id, data).await?,
            Submit::Update { original_name } => {
                self.service
                    .update_item(&inventory_id, original_name, data)
                    .await?
            }
        };
        Ok(response)
    }

    fn notify_data_changed(&mut self) {
        if let Some(callback) = self.on_data_changed.as_mut() {
            callback();
        }
    }

    // ------------------------------------------------------------------
    // Interaction
    // ------------------------------------------------------------------

    /// Closes a modal on backdrop or close-button clicks.
    ///
    /// Returns whether the click was handled. Clicks inside a modal's
    /// content never close it.
    pub fn handle_modal_click(&mut self, click: ModalClick) -> bool {
        match click {
            ModalClick::Backdrop(modal) | ModalClick::CloseButton(modal) => {
                if !self.surface.is_modal_open(modal) {
                    return false;
                }
                match modal {
                    ModalKind::Add => self.close_add_modal(),
                    ModalKind::Edit => self.close_edit_modal(),
                }
                true
            }
            ModalClick::Content(_) | ModalClick::Elsewhere => false,
        }
    }

    /// Reacts to the user changing a form field.
    ///
    /// Clears that field's error highlight; a change to the expiry date also
    /// enables or disables the alert threshold field.
    pub fn handle_field_input(&mut self, modal: ModalKind, field: FormField) {
        self.surface.set_field_invalid(&modal.field_id(field), false);
        if field == FormField::ExpiryDate {
            self.sync_expiry_threshold(modal);
        }
    }

    /// Like `handle_field_input`, keyed by element id. Unrelated ids are
    /// ignored; returns whether the id named a form field.
    pub fn handle_input_event(&mut self, element_id: &str) -> bool {
        match ModalKind::parse_field_id(element_id) {
            Ok((modal, field)) => {
                self.handle_field_input(modal, field);
                true
            }
            Err(_) => false,
        }
    }

    /// Runs a deferred action once its delay has elapsed.
    pub fn run_deferred(&mut self, action: DeferredAction) {
        match action {
            DeferredAction::FocusField {
                modal,
                field,
                select,
            } => {
                if self.surface.is_modal_open(modal) {
                    self.surface.focus_field(&modal.field_id(field), select);
                }
            }
            DeferredAction::DismissError(modal) => self.surface.clear_error(modal),
        }
    }

    // ------------------------------------------------------------------
    // Surface helpers
    // ------------------------------------------------------------------

    fn show_error(&mut self, modal: ModalKind, message: &str) {
        self.surface.show_error(modal, message);
        self.scheduler.schedule(
            self.timings.error_display,
            DeferredAction::DismissError(modal),
        );
    }

    fn report_validation(&mut self, modal: ModalKind, validation: &ValidationResult) {
        for field in validation.invalid_fields() {
            self.surface.set_field_invalid(&modal.field_id(field), true);
        }
        if let Some(message) = validation.first_message() {
            self.show_error(modal, message);
        }
    }

    fn clear_highlights(&mut self, modal: ModalKind) {
        for field in FormField::ALL {
            self.surface.set_field_invalid(&modal.field_id(field), false);
        }
    }

    /// The alert threshold only applies once an expiry date is set.
    fn sync_expiry_threshold(&mut self, modal: ModalKind) {
        let has_expiry_date: bool = self
            .surface
            .get_value(&modal.field_id(FormField::ExpiryDate))
            .is_some_and(|value| !value.trim().is_empty());
        self.surface.set_field_enabled(
            &modal.field_id(FormField::ExpiryAlertDays),
            has_expiry_date,
        );
    }
}
