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

mod error;
mod localize;
mod modal;
mod service;
mod snapshot;

#[cfg(test)]
mod tests;

pub use error::{ApiError, ServiceError};
pub use localize::{FallbackLocalizer, Localizer, substitute};
pub use modal::{ModalClick, ModalController, ModalTimings, OpenEditResult};
pub use service::{InventoryIdResolver, InventoryService, ObjectIdResolver, ServiceResponse};
pub use snapshot::{CardConfig, CardSnapshot, EntityAttributes, EntityState, HassState};
