// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use pantry_domain::InventoryItem;

/// Which stored item, if any, the edit modal is working on.
///
/// Only `NotEditing -> Editing` via a successful edit-modal open, and
/// `Editing -> NotEditing` via closing the edit modal or a successful save.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditState {
    #[default]
    NotEditing,
    Editing {
        /// The item's name when the modal was opened; saves look it up by
        /// this name even if the user renamed it in the form.
        original_name: String,
        /// The stored item as it was displayed.
        item: InventoryItem,
    },
}

impl EditState {
    /// Starts editing the given item.
    #[must_use]
    pub fn editing(item: InventoryItem) -> Self {
        Self::Editing {
            original_name: item.name.clone(),
            item,
        }
    }

    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    /// Returns the name the item had when editing began.
    #[must_use]
    pub fn original_name(&self) -> Option<&str> {
        match self {
            Self::NotEditing => None,
            Self::Editing { original_name, .. } => Some(original_name),
        }
    }
}
