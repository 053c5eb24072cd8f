//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `auth` - Local sign-in and registration against the account mapping
//! - `favorites` - The working favorites list
//! - `theme` - Light/dark preference

pub mod auth;
pub mod favorites;
pub mod theme;

pub use auth::{AuthError, AuthService};
pub use favorites::FavoritesList;
