//! CMS REST client implementation.
//!
//! Thin `reqwest` wrapper over the CMS read API. Every method takes the
//! active [`Locale`] explicitly so handlers stay testable in isolation.
//! No caching: products and globals are fetched fresh per request.

use std::sync::Arc;
use std::time::Duration;

use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use shodai_core::Locale;
use tracing::instrument;

use crate::cms::CmsError;
use crate::cms::types::{FindResponse, HomeContent, Product, SiteVideos};
use crate::config::CmsConfig;

/// Slug of the home-page global.
const HOME_PAGE_GLOBAL: &str = "home-page";
/// Slug of the site-videos global.
const SITE_VIDEOS_GLOBAL: &str = "site-videos";
/// Products collection name.
const PRODUCTS_COLLECTION: &str = "products";
/// Newest-first sort applied to every product listing fetch. The catalog
/// query engine preserves this order for its "newest" option.
const NEWEST_FIRST: &str = "-createdAt";

/// Client for the CMS read API.
///
/// Cheaply cloneable; shares one `reqwest` connection pool.
#[derive(Clone)]
pub struct CmsClient {
    inner: Arc<CmsClientInner>,
}

struct CmsClientInner {
    client: reqwest::Client,
    /// `{CMS_BASE_URL}/api`, no trailing slash.
    api_base: String,
    /// Pre-rendered `Authorization` header value, when an API key is set.
    auth_header: Option<String>,
}

impl CmsClient {
    /// Create a new CMS read client.
    #[must_use]
    pub fn new(config: &CmsConfig) -> Self {
        let api_base = format!("{}/api", config.base_url.as_str().trim_end_matches('/'));
        let auth_header = config
            .api_key
            .as_ref()
            .map(|key| format!("users API-Key {}", key.expose_secret()));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();

        Self {
            inner: Arc::new(CmsClientInner {
                client,
                api_base,
                auth_header,
            }),
        }
    }

    /// Execute a GET request and decode the JSON body.
    ///
    /// `context` names the requested document for error messages.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        context: &str,
    ) -> Result<T, CmsError> {
        let url = format!("{}{path}", self.inner.api_base);
        let mut request = self.inner.client.get(&url).query(query);
        if let Some(auth) = &self.inner.auth_header {
            request = request.header("Authorization", auth);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CmsError::NotFound(context.to_string()));
        }

        // Read the body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                context,
                "CMS returned non-success status"
            );
            return Err(CmsError::Status {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(500).collect::<String>(),
                context,
                "Failed to parse CMS response"
            );
            CmsError::Parse(e)
        })
    }

    // =========================================================================
    // Globals
    // =========================================================================

    /// Fetch the home-page global for a locale.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    #[instrument(skip(self), fields(locale = %locale))]
    pub async fn home_page(&self, locale: Locale) -> Result<HomeContent, CmsError> {
        self.get_json(
            &format!("/globals/{HOME_PAGE_GLOBAL}"),
            &[("locale", locale.as_str()), ("depth", "1")],
            HOME_PAGE_GLOBAL,
        )
        .await
    }

    /// Fetch the site-videos global for a locale.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    #[instrument(skip(self), fields(locale = %locale))]
    pub async fn site_videos(&self, locale: Locale) -> Result<SiteVideos, CmsError> {
        self.get_json(
            &format!("/globals/{SITE_VIDEOS_GLOBAL}"),
            &[("locale", locale.as_str()), ("depth", "1")],
            SITE_VIDEOS_GLOBAL,
        )
        .await
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Fetch up to `limit` products, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    #[instrument(skip(self), fields(locale = %locale, limit))]
    pub async fn products(&self, locale: Locale, limit: u32) -> Result<Vec<Product>, CmsError> {
        let limit = limit.to_string();
        let response: FindResponse<Product> = self
            .get_json(
                &format!("/{PRODUCTS_COLLECTION}"),
                &[
                    ("locale", locale.as_str()),
                    ("limit", limit.as_str()),
                    ("sort", NEWEST_FIRST),
                    ("depth", "1"),
                ],
                PRODUCTS_COLLECTION,
            )
            .await?;
        Ok(response.docs)
    }

    /// Fetch a single product by its slug.
    ///
    /// # Errors
    ///
    /// Returns `CmsError::NotFound` when no product carries the slug.
    #[instrument(skip(self), fields(slug = %slug, locale = %locale))]
    pub async fn product_by_slug(&self, slug: &str, locale: Locale) -> Result<Product, CmsError> {
        let response: FindResponse<Product> = self
            .get_json(
                &format!("/{PRODUCTS_COLLECTION}"),
                &[
                    ("where[slug][equals]", slug),
                    ("locale", locale.as_str()),
                    ("limit", "1"),
                    ("depth", "1"),
                ],
                &format!("{PRODUCTS_COLLECTION}/{slug}"),
            )
            .await?;

        response
            .docs
            .into_iter()
            .next()
            .ok_or_else(|| CmsError::NotFound(format!("{PRODUCTS_COLLECTION}/{slug}")))
    }

    /// Fetch a single product by its id (slug fallback for legacy links).
    ///
    /// # Errors
    ///
    /// Returns `CmsError::NotFound` when the id matches no document.
    #[instrument(skip(self), fields(id = %id, locale = %locale))]
    pub async fn product_by_id(&self, id: &str, locale: Locale) -> Result<Product, CmsError> {
        self.get_json(
            &format!("/{PRODUCTS_COLLECTION}/{id}"),
            &[("locale", locale.as_str()), ("depth", "1")],
            &format!("{PRODUCTS_COLLECTION}/{id}"),
        )
        .await
    }

    // =========================================================================
    // Health
    // =========================================================================

    /// Readiness ping: one cheap collection query with `depth=0`.
    ///
    /// # Errors
    ///
    /// Returns an error if the CMS is unreachable or unhealthy.
    #[instrument(skip(self))]
    pub async fn ping(&self) -> Result<(), CmsError> {
        let _: FindResponse<serde_json::Value> = self
            .get_json(
                &format!("/{PRODUCTS_COLLECTION}"),
                &[("limit", "1"), ("depth", "0")],
                "readiness",
            )
            .await?;
        Ok(())
    }
}
