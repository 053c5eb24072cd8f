//! `favorites` commands.

use std::io::Write;

use beauty_box_core::{Email, ProductId};
use beauty_box_storefront::controller::AppController;
use beauty_box_storefront::store::SharedStore;
use beauty_box_storefront::store::accounts::AccountRepository;

use super::CommandError;

/// Print a favorites list.
///
/// With an email, prints that account's list. Without one, prints the list
/// the storefront would start with: the persisted session's, or the
/// anonymous one.
///
/// # Errors
///
/// Returns `CommandError` if the email is blank, names no account, or the
/// store cannot be read.
pub fn show(
    store: SharedStore,
    email: Option<&str>,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let (owner, ids) = match email {
        Some(raw) => {
            let email = Email::parse(raw)?;
            let account = AccountRepository::new(store.as_ref())
                .get(&email)?
                .ok_or_else(|| CommandError::UnknownAccount(email.to_string()))?;
            (email.into_inner(), account.favorites)
        }
        None => {
            let controller = AppController::bootstrap(store);
            let owner = controller
                .current_user()
                .map_or_else(|| "anonymous".to_string(), |user| user.email.to_string());
            (owner, controller.favorites().ids().to_vec())
        }
    };

    write_list(&owner, &ids, out)
}

fn write_list(owner: &str, ids: &[ProductId], out: &mut impl Write) -> Result<(), CommandError> {
    writeln!(out, "Favorites for {owner}: {}", ids.len())?;
    for id in ids {
        writeln!(out, "  {id}")?;
    }
    Ok(())
}
