//! Security headers middleware.
//!
//! Adds restrictive security headers to all responses. The CSP is built per
//! request: it allows images and media from the CMS origin, YouTube for the
//! video iframes, and the per-request nonce for the gallery inline script.
//! Everything else stays locked down.

use axum::{
    extract::{Request, State},
    http::{
        HeaderName, HeaderValue,
        header::{
            CONTENT_SECURITY_POLICY, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS,
        },
    },
    middleware::Next,
    response::Response,
};

use crate::middleware::csp::CspNonce;
use crate::state::AppState;

/// Add security headers to all responses.
///
/// Headers applied:
/// - `X-Frame-Options: DENY` - Prevent clickjacking
/// - `X-Content-Type-Options: nosniff` - Prevent MIME sniffing
/// - `Referrer-Policy: strict-origin-when-cross-origin`
/// - `Content-Security-Policy` - Per-request policy (see [`build_csp`])
/// - `Permissions-Policy` - Deny sensitive features
/// - `X-DNS-Prefetch-Control: off`
pub async fn security_headers_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let nonce = request
        .extensions()
        .get::<CspNonce>()
        .map(|n| n.value().to_string())
        .unwrap_or_default();
    let csp = build_csp(&state.config().cms.origin(), &nonce);

    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    // Prevent clickjacking
    headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));

    // Prevent MIME sniffing
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));

    headers.insert(
        REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    if let Ok(value) = HeaderValue::from_str(&csp) {
        headers.insert(CONTENT_SECURITY_POLICY, value);
    }

    // Deny sensitive browser features
    headers.insert(
        HeaderName::from_static("permissions-policy"),
        HeaderValue::from_static(
            "accelerometer=(), \
             camera=(), \
             geolocation=(), \
             gyroscope=(), \
             magnetometer=(), \
             microphone=(), \
             midi=(), \
             payment=(), \
             usb=()",
        ),
    );

    // Prevent DNS prefetching to avoid leaking which links user hovers over
    headers.insert(
        HeaderName::from_static("x-dns-prefetch-control"),
        HeaderValue::from_static("off"),
    );

    response
}

/// Build the CSP for one request.
///
/// `cms_origin` is where product and banner media are served from;
/// `frame-src` admits only the YouTube embed domains.
fn build_csp(cms_origin: &str, nonce: &str) -> String {
    format!(
        "default-src 'none'; \
         script-src 'self' 'nonce-{nonce}'; \
         style-src 'self'; \
         font-src 'self'; \
         img-src 'self' data: {cms_origin}; \
         media-src 'self' {cms_origin}; \
         connect-src 'self'; \
         frame-src https://www.youtube.com https://www.youtube-nocookie.com; \
         object-src 'none'; \
         base-uri 'self'; \
         form-action 'self'; \
         frame-ancestors 'none'"
    )
}
