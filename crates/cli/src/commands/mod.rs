//! Subcommand implementations.
//!
//! Each command writes plain text to the given writer so it can be driven
//! from tests against a [`MemoryStore`](beauty_box_storefront::store::MemoryStore).

pub mod accounts;
pub mod catalog;
pub mod favorites;
pub mod theme;

use thiserror::Error;

use beauty_box_core::EmailError;
use beauty_box_storefront::catalog::CatalogError;
use beauty_box_storefront::store::StorageError;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("No account for {0}")]
    UnknownAccount(String),

    #[error("Unknown {kind} {value:?}; expected one of: {expected}")]
    UnknownFilter {
        kind: &'static str,
        value: String,
        expected: String,
    },

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}
