//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET /health              - Liveness check
//! GET /health/ready        - Readiness check (pings the CMS)
//! GET /static/*            - Static assets
//!
//! # Pages (locale-prefixed; the locale middleware redirects bare paths)
//! GET /{locale}            - Home page
//! GET /{locale}/shop       - Catalog listing (q, category, sort params)
//! GET /{locale}/shop/{slug} - Product detail (slug falls back to id)
//! GET /{locale}/about      - About page (markdown content)
//! GET /{locale}/contact    - Contact page (markdown content)
//! ```

pub mod home;
pub mod pages;
pub mod shop;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    middleware as axum_middleware,
    response::{IntoResponse, Response},
    routing::get,
};
use shodai_core::Locale;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::filters;
use crate::i18n::{self, UiStrings};
use crate::middleware::{
    csp_nonce_middleware, locale_redirect_middleware, request_id_middleware,
    security_headers_middleware,
};
use crate::state::AppState;

/// Localized 404 page.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub locale: Locale,
    pub t: &'static UiStrings,
    pub switch_path: String,
}

/// Render the 404 page for a locale.
pub(crate) fn not_found_page(locale: Locale) -> Response {
    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            locale,
            t: i18n::strings(locale),
            switch_path: format!("/{}", locale.other()),
        },
    )
        .into_response()
}

/// Parse the `{locale}` path segment; unknown codes render the 404 page.
pub(crate) fn parse_locale(code: &str) -> Result<Locale, Response> {
    code.parse::<Locale>()
        .map_err(|_| not_found_page(Locale::default()))
}

/// Fallback for paths matching no route.
async fn fallback() -> Response {
    not_found_page(Locale::default())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies CMS connectivity before returning OK.
/// Returns 503 Service Unavailable if the CMS is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.cms().ping().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

/// Create the page routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/{locale}", get(home::home))
        // The root redirect targets "/{locale}/"; axum matches trailing
        // slashes exactly, so the home route is registered for both.
        .route("/{locale}/", get(home::home))
        .route("/{locale}/shop", get(shop::index))
        .route("/{locale}/shop/{slug}", get(shop::show))
        .route("/{locale}/about", get(pages::about))
        .route("/{locale}/contact", get(pages::contact))
        .fallback(fallback)
}

/// Build the full application router with the middleware stack applied.
///
/// Sentry layers are added by `main` (they are not meaningful in tests).
pub fn app(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes())
        .nest_service("/static", ServeDir::new(static_dir))
        // Layers run top-down for a request in reverse order of addition:
        // request id, csp nonce, locale redirect, security headers, routes.
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            security_headers_middleware,
        ))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            locale_redirect_middleware,
        ))
        .layer(axum_middleware::from_fn(csp_nonce_middleware))
        .layer(axum_middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
