// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Deferred UI work.
//!
//! Delayed steps are described as data. A host schedules them on its own
//! timers and hands each one back to the controller when it fires; tests do
//! the same with `VirtualClock`.

use crate::surface::ModalKind;
use pantry_domain::FormField;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// A step the controller wants run after a delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    /// Focus a field once the modal has become focusable.
    FocusField {
        modal: ModalKind,
        field: FormField,
        /// Also select the field's current text.
        select: bool,
    },
    /// Hide the modal's error banner.
    DismissError(ModalKind),
}

/// Runs deferred actions after a delay. Nothing is ever cancelled.
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, action: DeferredAction);
}

#[derive(Debug, Default)]
struct ClockState {
    now: Duration,
    pending: Vec<(Duration, DeferredAction)>,
}

/// A manually advanced clock.
///
/// Clones share one timeline, so a test can keep a handle while the
/// controller owns another.
#[derive(Debug, Clone, Default)]
pub struct VirtualClock {
    state: Rc<RefCell<ClockState>>,
}

impl VirtualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the time elapsed since the clock was created.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Returns how many actions are waiting to fire.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.state.borrow().pending.len()
    }

    /// Moves time forward and returns every action now due, earliest first.
    pub fn advance(&self, by: Duration) -> Vec<DeferredAction> {
        let mut state = self.state.borrow_mut();
        state.now += by;
        let now: Duration = state.now;

        let mut due: Vec<(Duration, DeferredAction)> = Vec::new();
        state.pending.retain(|entry| {
            if entry.0 <= now {
                due.push(*entry);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|entry| entry.0);
        due.into_iter().map(|(_, action)| action).collect()
    }

    /// Fires everything that is pending, regardless of delay.
    pub fn run_all(&self) -> Vec<DeferredAction> {
        let latest: Duration = self
            .state
            .borrow()
            .pending
            .iter()
            .map(|entry| entry.0)
            .max()
            .unwrap_or_default();
        let remaining: Duration = latest.saturating_sub(self.now());
        self.advance(remaining)
    }
}

impl Scheduler for VirtualClock {
    fn schedule(&mut self, delay: Duration, action: DeferredAction) {
        let mut state = self.state.borrow_mut();
        let due: Duration = state.now + delay;
        state.pending.push((due, action));
    }
}
