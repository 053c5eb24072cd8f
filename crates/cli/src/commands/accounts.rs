//! `accounts` commands.

use std::io::Write;

use beauty_box_storefront::store::KeyValueStore;
use beauty_box_storefront::store::accounts::AccountRepository;

use super::CommandError;

/// Print every account email with its favorites count. Passwords are never shown.
///
/// # Errors
///
/// Returns `CommandError` if the account mapping cannot be read.
pub fn list(store: &dyn KeyValueStore, out: &mut impl Write) -> Result<(), CommandError> {
    let accounts = AccountRepository::new(store).load_all()?;

    if accounts.is_empty() {
        writeln!(out, "No accounts")?;
        return Ok(());
    }

    for (email, account) in &accounts {
        writeln!(out, "{email}\t{} favorites", account.favorites.len())?;
    }
    writeln!(out, "{} account(s)", accounts.len())?;
    Ok(())
}
