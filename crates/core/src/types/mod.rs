//! Core types for Beauty Box.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod price;
pub mod product;
pub mod theme;

pub use email::{Email, EmailError};
pub use id::{ProductId, ProductIdError};
pub use price::Price;
pub use product::{Product, ProductColor};
pub use theme::Theme;
