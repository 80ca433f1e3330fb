// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Storage for the pantry inventory card outside a live platform.
//!
//! `InventoryStore` answers the card's create/update service calls with the
//! integration's uniqueness rules, and snapshot files let a command-line
//! session load platform state and write the result back.

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
mod snapshot_file;
mod store;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use snapshot_file::{load_snapshot, save_snapshot};
pub use store::InventoryStore;
