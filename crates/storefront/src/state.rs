//! Application state shared across handlers.

use std::path::Path;
use std::sync::Arc;

use crate::cms::CmsClient;
use crate::config::StorefrontConfig;
use crate::content::{ContentError, ContentStore};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Everything inside is read-only after
/// startup; no mutable state crosses request boundaries.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    cms: CmsClient,
    content: ContentStore,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the content directory exists but cannot be read.
    pub fn new(config: StorefrontConfig, content_dir: &Path) -> Result<Self, ContentError> {
        let cms = CmsClient::new(&config.cms);
        let content = ContentStore::load(content_dir)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                cms,
                content,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the CMS read client.
    #[must_use]
    pub fn cms(&self) -> &CmsClient {
        &self.inner.cms
    }

    /// Get a reference to the loaded content pages.
    #[must_use]
    pub fn content(&self) -> &ContentStore {
        &self.inner.content
    }
}
