//! Locale-prefix enforcement middleware.
//!
//! Every page path must carry a supported locale prefix (`/th/...`,
//! `/en/...`). The pure [`resolve`] function decides; the middleware issues
//! the actual redirect, preserving the query string.

use axum::{
    extract::{Request, State},
    http::{HeaderValue, StatusCode, header::LOCATION},
    middleware::Next,
    response::Response,
};
use shodai_core::Locale;

use crate::state::AppState;

/// Path prefixes exempt from locale enforcement.
const BYPASS_PREFIXES: &[&str] = &["/admin", "/api", "/static", "/health"];

/// Routing decision for one request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingDecision {
    /// Path is exempt or already locale-prefixed.
    PassThrough,
    /// Path must be redirected to the given locale-prefixed path.
    Redirect(String),
}

/// Decide whether a path needs a locale prefix.
///
/// Bypass prefixes and any path containing a literal dot (static-file
/// requests) pass through, as does a path equal to `/{locale}` or starting
/// with `/{locale}/` for a supported locale. Everything else redirects to
/// the same path under the default locale; the root `/` becomes
/// `/{default}/`.
#[must_use]
pub fn resolve(path: &str, default_locale: Locale) -> RoutingDecision {
    if path.contains('.')
        || BYPASS_PREFIXES
            .iter()
            .any(|prefix| path == *prefix || path.starts_with(&format!("{prefix}/")))
    {
        return RoutingDecision::PassThrough;
    }

    let has_locale_prefix = Locale::ALL.iter().any(|locale| {
        let prefix = format!("/{locale}");
        path == prefix || path.starts_with(&format!("{prefix}/"))
    });

    if has_locale_prefix {
        RoutingDecision::PassThrough
    } else {
        // Root "/" becomes "/{default}/"; the router serves that explicitly.
        RoutingDecision::Redirect(format!("/{default_locale}{path}"))
    }
}

/// Middleware applying [`resolve`] to every request.
///
/// Redirects use 307 so methods and bodies survive, and carry no cacheable
/// permanence while the locale set can still change.
pub async fn locale_redirect_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path();

    match resolve(path, state.config().default_locale) {
        RoutingDecision::PassThrough => next.run(request).await,
        RoutingDecision::Redirect(new_path) => {
            let location = match request.uri().query() {
                Some(query) => format!("{new_path}?{query}"),
                None => new_path,
            };
            tracing::debug!(from = %path, to = %location, "Locale redirect");

            let mut response = Response::new(axum::body::Body::empty());
            *response.status_mut() = StatusCode::TEMPORARY_REDIRECT;
            if let Ok(value) = HeaderValue::from_str(&location) {
                response.headers_mut().insert(LOCATION, value);
            }
            response
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn redirect(to: &str) -> RoutingDecision {
        RoutingDecision::Redirect(to.to_string())
    }

    #[test]
    fn test_unprefixed_paths_redirect_to_default() {
        assert_eq!(resolve("/shop", Locale::Th), redirect("/th/shop"));
        assert_eq!(
            resolve("/shop/civic-hood", Locale::Th),
            redirect("/th/shop/civic-hood")
        );
        assert_eq!(resolve("/about", Locale::En), redirect("/en/about"));
    }

    #[test]
    fn test_root_redirects_to_default_locale() {
        assert_eq!(resolve("/", Locale::Th), redirect("/th/"));
        assert_eq!(resolve("/", Locale::En), redirect("/en/"));
    }

    #[test]
    fn test_locale_prefixed_paths_pass_through() {
        for path in ["/th", "/en", "/th/", "/th/shop", "/en/shop/civic-hood"] {
            assert_eq!(
                resolve(path, Locale::Th),
                RoutingDecision::PassThrough,
                "failed for {path}"
            );
        }
    }

    #[test]
    fn test_locale_lookalike_prefix_still_redirects() {
        // "/then" starts with "th" but is not the /th segment.
        assert_eq!(resolve("/then", Locale::Th), redirect("/th/then"));
        assert_eq!(resolve("/end", Locale::Th), redirect("/th/end"));
    }

    #[test]
    fn test_bypass_prefixes_pass_through() {
        for path in [
            "/admin",
            "/admin/collections/products",
            "/api/products",
            "/static/css/main.css",
            "/health",
            "/health/ready",
        ] {
            assert_eq!(
                resolve(path, Locale::Th),
                RoutingDecision::PassThrough,
                "failed for {path}"
            );
        }
    }

    #[test]
    fn test_dot_paths_pass_through() {
        assert_eq!(resolve("/favicon.ico", Locale::Th), RoutingDecision::PassThrough);
        assert_eq!(
            resolve("/images/logo.svg", Locale::Th),
            RoutingDecision::PassThrough
        );
    }

    #[test]
    fn test_unsupported_locale_prefix_redirects() {
        // "/fr" is not in the supported set, so it gets the default prefix;
        // the resulting path 404s at the page level.
        assert_eq!(resolve("/fr/shop", Locale::Th), redirect("/th/fr/shop"));
    }

    #[test]
    fn test_bypass_lookalike_is_not_exempt() {
        assert_eq!(
            resolve("/apidocs", Locale::Th),
            redirect("/th/apidocs")
        );
    }
}
