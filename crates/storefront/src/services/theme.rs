//! Light/dark preference.
//!
//! The preference is applied to `<html data-theme>` on every render; the store
//! only needs to remember it across restarts.

use beauty_box_core::Theme;

use crate::store::KeyValueStore;
use crate::store::preferences::PreferenceRepository;

/// Read the persisted theme, falling back to light if the store fails.
pub fn load(store: &dyn KeyValueStore) -> Theme {
    PreferenceRepository::new(store)
        .theme()
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to read theme preference");
            Theme::default()
        })
}

/// Flip `current` and persist the result.
///
/// The flipped theme is returned even if persisting it fails.
pub fn toggle(store: &dyn KeyValueStore, current: Theme) -> Theme {
    let next = current.toggled();
    if let Err(e) = PreferenceRepository::new(store).set_theme(next) {
        tracing::warn!(error = %e, theme = %next, "Failed to persist theme preference");
    }
    next
}
