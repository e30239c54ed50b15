//! Headless CMS read client.
//!
//! # Architecture
//!
//! - The CMS owns all persistence: products, media, and the two singleton
//!   globals (home page content, site videos). This client only reads.
//! - Every fetch passes the active locale; the CMS resolves localized fields
//!   with fallback to the default locale server-side.
//! - Requests use `depth=1` so media relations come back as objects, but the
//!   wire types still tolerate bare id strings ([`types::MediaRef`]) since
//!   depth is a CMS-side setting the storefront does not control.
//!
//! # Example
//!
//! ```rust,ignore
//! use shodai_storefront::cms::CmsClient;
//!
//! let client = CmsClient::new(&config.cms);
//!
//! let home = client.home_page(Locale::Th).await?;
//! let products = client.products(Locale::Th, 100).await?;
//! let hood = client.product_by_slug("civic-hood", Locale::En).await?;
//! ```

mod client;
pub mod types;

pub use client::CmsClient;

use thiserror::Error;

/// Errors that can occur when reading from the CMS.
#[derive(Debug, Error)]
pub enum CmsError {
    /// HTTP request failed (connect, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON shape.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Document not found (404 from the CMS, or empty query result).
    #[error("Not found: {0}")]
    NotFound(String),

    /// CMS returned an unexpected status code.
    #[error("CMS returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

impl CmsError {
    /// True for the not-found case, which routes render as a 404 page
    /// rather than a gateway error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cms_error_display() {
        let err = CmsError::NotFound("products/civic-hood".to_string());
        assert_eq!(err.to_string(), "Not found: products/civic-hood");
        assert!(err.is_not_found());

        let err = CmsError::Status {
            status: 500,
            body: "Internal Server Error".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "CMS returned HTTP 500: Internal Server Error"
        );
        assert!(!err.is_not_found());
    }
}
