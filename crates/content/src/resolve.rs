// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Resolves an optional CMS value against its literal fallback.
///
/// The uniform resolution point for non-text content fields.
#[must_use]
pub fn or_fallback<T>(value: Option<T>, fallback: T) -> T {
    value.unwrap_or(fallback)
}

/// Resolves an optional CMS text field against its literal fallback.
///
/// Blank text counts as missing: content that is present but
/// whitespace-only must not render, so it resolves to the fallback too.
#[must_use]
pub fn text_or(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text,
        _ => fallback.to_string(),
    }
}
