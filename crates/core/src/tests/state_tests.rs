// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::EditState;

use super::helpers::create_test_item;

#[test]
fn test_edit_state_defaults_to_not_editing() {
    let state: EditState = EditState::default();
    assert!(!state.is_editing());
    assert_eq!(state.original_name(), None);
}

#[test]
fn test_editing_captures_original_name() {
    let state: EditState = EditState::editing(create_test_item());

    assert!(state.is_editing());
    assert_eq!(state.original_name(), Some("Milk"));
    assert!(matches!(
        state,
        EditState::Editing { ref item, .. } if item.unit.as_deref() == Some("L")
    ));
}
