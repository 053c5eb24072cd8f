//! `theme` commands.

use std::io::Write;

use beauty_box_core::Theme;
use beauty_box_storefront::store::KeyValueStore;
use beauty_box_storefront::store::preferences::PreferenceRepository;

use super::CommandError;

/// Print the stored theme.
///
/// # Errors
///
/// Returns `CommandError` if the store cannot be read.
pub fn show(store: &dyn KeyValueStore, out: &mut impl Write) -> Result<(), CommandError> {
    let theme = PreferenceRepository::new(store).theme()?;
    writeln!(out, "{theme}")?;
    Ok(())
}

/// Store a theme.
///
/// # Errors
///
/// Returns `CommandError` if the store cannot be written.
pub fn set(store: &dyn KeyValueStore, theme: Theme, out: &mut impl Write) -> Result<(), CommandError> {
    PreferenceRepository::new(store).set_theme(theme)?;
    tracing::info!(theme = %theme, "Theme preference updated");
    writeln!(out, "Theme set to {theme}")?;
    Ok(())
}
