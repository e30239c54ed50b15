//! Integration tests for the Shodai Carbon storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shodai-integration-tests
//! ```
//!
//! Most tests drive the full router in-process via `tower::ServiceExt`,
//! pointed at a CMS address that refuses connections. That exercises the
//! middleware stack, routing, template rendering, and the degraded paths
//! without any external services.
//!
//! Tests marked `#[ignore]` expect a live storefront and CMS; run them
//! against a deployed environment with `cargo test -- --ignored`.

use std::net::IpAddr;

use axum::Router;
use secrecy::SecretString;
use shodai_core::Locale;
use shodai_storefront::config::{CmsConfig, StorefrontConfig};
use shodai_storefront::routes;
use shodai_storefront::state::AppState;

/// A CMS base URL that refuses connections immediately (discard port).
pub const UNREACHABLE_CMS: &str = "http://127.0.0.1:9";

/// Build a test configuration pointing at an unreachable CMS.
///
/// # Panics
///
/// Panics if the hardcoded test values fail to parse.
#[must_use]
pub fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        host: "127.0.0.1".parse::<IpAddr>().expect("valid test host"),
        port: 0,
        base_url: "http://localhost:3000".to_string(),
        cms: CmsConfig {
            base_url: UNREACHABLE_CMS.parse().expect("valid test CMS URL"),
            api_key: Some(SecretString::from("aB3$xY9!mK2@nL5#pQ7&rT0*uW4^zC6")),
        },
        default_locale: Locale::Th,
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 0.0,
    }
}

/// Build the full application router for in-process testing.
///
/// Content pages load from the storefront crate's own `content/` directory,
/// so the about and contact routes behave as they do in production.
///
/// # Panics
///
/// Panics if the content directory exists but cannot be read.
#[must_use]
pub fn test_app() -> Router {
    let state = AppState::new(test_config(), std::path::Path::new("../storefront/content"))
        .expect("content store loads");
    routes::app(state, "../storefront/static")
}
