// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pantry_card::{HeadlessSurface, ModalKind, VirtualClock};
use pantry_domain::{FormField, InventoryItem, SanitizedItemData};

use crate::{
    CardConfig, CardSnapshot, EntityAttributes, EntityState, HassState, InventoryService,
    ModalController, ServiceError, ServiceResponse,
};

pub const TEST_ENTITY: &str = "sensor.kitchen_inventory";
pub const TEST_INVENTORY_ID: &str = "kitchen_inventory";

/// One call received by `RecordingService`.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceCall {
    Add {
        inventory_id: String,
        item: SanitizedItemData,
    },
    Update {
        inventory_id: String,
        original_name: String,
        item: SanitizedItemData,
    },
}

impl ServiceCall {
    pub const fn item(&self) -> &SanitizedItemData {
        match self {
            Self::Add { item, .. } | Self::Update { item, .. } => item,
        }
    }
}

/// Records every call and answers each with the same reply.
#[derive(Debug, Clone)]
pub struct RecordingService {
    calls: Arc<Mutex<Vec<ServiceCall>>>,
    reply: Result<ServiceResponse, ServiceError>,
}

impl RecordingService {
    pub fn succeeding() -> Self {
        Self::replying(Ok(ServiceResponse::ok()))
    }

    pub fn replying(reply: Result<ServiceResponse, ServiceError>) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            reply,
        }
    }

    pub fn calls(&self) -> Vec<ServiceCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: ServiceCall) -> Result<ServiceResponse, ServiceError> {
        self.calls.lock().unwrap().push(call);
        self.reply.clone()
    }
}

#[async_trait]
impl InventoryService for RecordingService {
    async fn add_item(
        &self,
        inventory_id: &str,
        item: &SanitizedItemData,
    ) -> Result<ServiceResponse, ServiceError> {
        self.record(ServiceCall::Add {
            inventory_id: inventory_id.to_string(),
            item: item.clone(),
        })
    }

    async fn update_item(
        &self,
        inventory_id: &str,
        original_name: &str,
        item: &SanitizedItemData,
    ) -> Result<ServiceResponse, ServiceError> {
        self.record(ServiceCall::Update {
            inventory_id: inventory_id.to_string(),
            original_name: original_name.to_string(),
            item: item.clone(),
        })
    }
}

/// A controller wired to a headless surface, with handles for inspection.
pub struct Harness {
    pub controller: ModalController<HeadlessSurface, RecordingService>,
    pub clock: VirtualClock,
    pub service: RecordingService,
    pub changes: Rc<Cell<u32>>,
}

impl Harness {
    pub fn fill(&mut self, modal: ModalKind, field: FormField, value: &str) {
        self.controller.surface_mut().fill(modal, field, value);
    }

    pub fn value(&self, modal: ModalKind, field: FormField) -> String {
        self.controller
            .surface()
            .field(&modal.field_id(field))
            .map(|state| state.value.clone())
            .unwrap_or_default()
    }

    pub fn banner(&self, modal: ModalKind) -> Option<String> {
        self.controller
            .surface()
            .modal(modal)
            .and_then(|state| state.error.clone())
    }

    pub fn is_open(&self, modal: ModalKind) -> bool {
        self.controller
            .surface()
            .modal(modal)
            .is_some_and(|state| state.open)
    }

    /// Advances the clock and runs whatever fired.
    pub fn advance_ms(&mut self, millis: u64) {
        for action in self.clock.advance(std::time::Duration::from_millis(millis)) {
            self.controller.run_deferred(action);
        }
    }
}

pub fn create_harness(service: RecordingService) -> Harness {
    create_harness_on(HeadlessSurface::with_item_modals(), service)
}

pub fn create_harness_on(surface: HeadlessSurface, service: RecordingService) -> Harness {
    let clock: VirtualClock = VirtualClock::new();
    let changes: Rc<Cell<u32>> = Rc::new(Cell::new(0));
    let counter: Rc<Cell<u32>> = Rc::clone(&changes);
    let controller: ModalController<HeadlessSurface, RecordingService> =
        ModalController::new(surface, service.clone(), clock.clone())
            .on_data_changed(move || counter.set(counter.get() + 1));

    Harness {
        controller,
        clock,
        service,
        changes,
    }
}

pub fn create_test_config() -> CardConfig {
    CardConfig::new(TEST_ENTITY)
}

pub fn create_stored_item(name: &str) -> InventoryItem {
    InventoryItem {
        name: name.to_string(),
        quantity: Some(2.0),
        unit: Some(String::from("L")),
        category: Some(String::from("Dairy")),
        location: Some(String::from("Fridge")),
        expiry_date: Some(String::from("2026-10-25")),
        expiry_alert_days: Some(3.0),
        auto_add_enabled: Some(true),
        auto_add_to_list_quantity: Some(1.0),
        todo_list: Some(String::from("todo.shopping")),
        ..InventoryItem::default()
    }
}

pub fn create_test_snapshot(items: Option<Vec<InventoryItem>>) -> CardSnapshot {
    let mut states: HashMap<String, EntityState> = HashMap::new();
    states.insert(
        TEST_ENTITY.to_string(),
        EntityState {
            state: String::from("2"),
            attributes: EntityAttributes {
                items,
                ..EntityAttributes::default()
            },
        },
    );

    CardSnapshot {
        hass: HassState { states },
        config: create_test_config(),
    }
}

pub fn create_stocked_snapshot() -> CardSnapshot {
    create_test_snapshot(Some(vec![
        create_stored_item("Milk"),
        InventoryItem {
            name: String::from("Rice"),
            quantity: Some(1.0),
            ..InventoryItem::default()
        },
    ]))
}
