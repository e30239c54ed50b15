//! HTTP middleware stack for the storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (unique ID per request)
//! 4. CSP nonce (per-request nonce for the gallery inline script)
//! 5. Locale redirect (enforce `/{locale}` path prefixes)
//! 6. Security headers (CSP built from nonce + CMS origin)

pub mod csp;
pub mod locale;
pub mod request_id;
pub mod security_headers;

pub use csp::{CspNonce, csp_nonce_middleware};
pub use locale::{RoutingDecision, locale_redirect_middleware, resolve};
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
