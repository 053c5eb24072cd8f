//! Beauty Box Core - Shared types library.
//!
//! This crate provides common types used across all Beauty Box components:
//! - `storefront` - The catalog browser served over HTTP
//! - `cli` - Command-line tools for inspecting the local store and catalog
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs, prices, emails, themes, and
//!   the external product record

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
