// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Looks up user-visible strings.
///
/// `fallback` is returned (with parameters substituted) when the key has no
/// translation. Parameters replace `{name}` placeholders.
pub trait Localizer {
    fn localize(&self, key: &str, params: &[(&str, &str)], fallback: &str) -> String;
}

/// A localizer with no catalog: always renders the fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackLocalizer;

impl Localizer for FallbackLocalizer {
    fn localize(&self, _key: &str, params: &[(&str, &str)], fallback: &str) -> String {
        substitute(fallback, params)
    }
}

/// Replaces each `{name}` placeholder in `template`.
#[must_use]
pub fn substitute(template: &str, params: &[(&str, &str)]) -> String {
    params
        .iter()
        .fold(template.to_string(), |text, (name, value)| {
            text.replace(&format!("{{{name}}}"), value)
        })
}

pub(crate) mod keys {
    pub const ADD_FAILED: &str = "modal.error_adding_item";
    pub const UPDATE_FAILED: &str = "modal.error_updating_item";
    pub const ADD_UNEXPECTED: &str = "modal.unexpected_add_error";
    pub const UPDATE_UNEXPECTED: &str = "modal.unexpected_update_error";
    pub const UNKNOWN_ERROR: &str = "common.unknown_error";
}
