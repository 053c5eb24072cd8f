//! Domain models for the storefront.
//!
//! - [`account`] - Local accounts as persisted under `bb_users`
//! - [`session`] - The signed-in user
//! - [`page`] - Navigation state

pub mod account;
pub mod page;
pub mod session;

pub use account::{Account, AccountMap};
pub use page::Page;
pub use session::CurrentUser;
