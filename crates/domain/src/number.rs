// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Parses a trimmed numeric input, accepting only finite values.
///
/// Returns `None` for empty input, unparseable text, `NaN` and infinities.
#[must_use]
pub fn parse_finite(raw: &str) -> Option<f64> {
    let trimmed: &str = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Bounds a value from below by zero.
///
/// `NaN` and negative zero both map to positive zero.
#[must_use]
pub const fn non_negative(value: f64) -> f64 {
    if value > 0.0 { value } else { 0.0 }
}
