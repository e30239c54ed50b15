//! Shodai Carbon storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing it to be tested and reused by the integration-tests crate.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod cms;
pub mod config;
pub mod content;
pub mod error;
pub mod filters;
pub mod i18n;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod video;
