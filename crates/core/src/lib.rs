//! Shodai Core - Shared types library.
//!
//! This crate provides common types used across the Shodai Carbon workspace:
//! - `storefront` - Public-facing bilingual storefront
//! - `integration-tests` - Cross-crate routing and rendering tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - `Locale` and `ProductStatus` domain enums

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
