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
mod form_io;
mod headless;
mod schedule;
mod state;
mod surface;

#[cfg(test)]
mod tests;

pub use error::CoreError;
pub use form_io::{
    clear_add_modal_form, get_raw_add_modal_data, get_raw_edit_modal_data, populate_edit_modal,
    read_raw_form_data,
};
pub use headless::{FieldState, HeadlessSurface, ModalState};
pub use schedule::{DeferredAction, Scheduler, VirtualClock};
pub use state::EditState;
pub use surface::{FormFieldStore, ModalKind, ModalSurface};
