//! Wire types for the CMS read API.
//!
//! These mirror the CMS collection and global schemas. Field names on the
//! wire are camelCase; everything optional in the CMS is optional here, with
//! documented fallbacks applied by accessor methods so route code never
//! branches on raw shapes.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use shodai_core::ProductStatus;

use crate::catalog::FALLBACK_CATEGORY;

// =============================================================================
// Media
// =============================================================================

/// A resolved media document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: String,
    /// Public URL in object storage. The CMS can emit documents before the
    /// upload finishes, so this stays optional.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

/// A relation field that is either a nested media object (`depth >= 1`)
/// or a bare foreign-key string (`depth == 0`).
///
/// The unresolved form renders as "image unavailable" - it is never treated
/// as a URL.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MediaRef {
    Resolved(Media),
    Unresolved(String),
}

impl MediaRef {
    /// URL of the media, if the relation is resolved and the upload has one.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Resolved(media) => media.url.as_deref().filter(|u| !u.is_empty()),
            Self::Unresolved(_) => None,
        }
    }

    /// Alt text, empty when unresolved or unset.
    #[must_use]
    pub fn alt(&self) -> &str {
        match self {
            Self::Resolved(media) => media.alt.as_deref().unwrap_or_default(),
            Self::Unresolved(_) => "",
        }
    }

    /// Mime type of the underlying upload, if known.
    #[must_use]
    pub fn mime_type(&self) -> Option<&str> {
        match self {
            Self::Resolved(media) => media.mime_type.as_deref(),
            Self::Unresolved(_) => None,
        }
    }

    /// Thumbnail URL, if the CMS generated one.
    #[must_use]
    pub fn thumbnail_url(&self) -> Option<&str> {
        match self {
            Self::Resolved(media) => media.thumbnail_url.as_deref(),
            Self::Unresolved(_) => None,
        }
    }
}

// =============================================================================
// Products
// =============================================================================

/// One gallery row on a product (the CMS wraps array items in objects).
#[derive(Debug, Clone, Deserialize)]
pub struct GalleryEntry {
    #[serde(default)]
    pub image: Option<MediaRef>,
}

/// A product document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    /// Localized per the requested locale, with CMS-side fallback.
    pub name: String,
    /// Non-negative, currency-agnostic (the storefront renders THB).
    pub price: Decimal,
    /// Car model taxonomy label; absent or empty means "Universal".
    #[serde(default)]
    pub car_model: Option<String>,
    #[serde(default)]
    pub image: Option<MediaRef>,
    #[serde(default)]
    pub gallery: Vec<GalleryEntry>,
    /// URL-safe unique handle; detail links fall back to `id` when absent.
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<ProductStatus>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Category label with the "Universal" fallback applied.
    ///
    /// Only absent or strictly-empty labels collapse to the fallback;
    /// whitespace-only labels count as set.
    #[must_use]
    pub fn category_label(&self) -> &str {
        self.car_model
            .as_deref()
            .filter(|label| !label.is_empty())
            .unwrap_or(FALLBACK_CATEGORY)
    }

    /// Handle used in detail-page URLs: slug when present, id otherwise.
    #[must_use]
    pub fn link_slug(&self) -> &str {
        self.slug
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.id)
    }

    /// Availability with the in-stock default applied.
    #[must_use]
    pub fn availability(&self) -> ProductStatus {
        self.status.unwrap_or_default()
    }

    /// Primary image URL, if resolved.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_ref().and_then(MediaRef::url)
    }
}

// =============================================================================
// Globals
// =============================================================================

/// The singleton home-page global.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeContent {
    /// Banner shown to Thai visitors.
    #[serde(default, rename = "bannerTH")]
    pub banner_th: Option<MediaRef>,
    /// Banner shown to English visitors.
    #[serde(default, rename = "bannerEN")]
    pub banner_en: Option<MediaRef>,
    #[serde(default)]
    pub hero_title: Option<String>,
    #[serde(default)]
    pub hero_subtitle: Option<String>,
    /// Legacy single-video fields, superseded by the site-videos global but
    /// still rendered when that global has no entries.
    #[serde(default)]
    pub video_title: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
}

/// How a site video entry is sourced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoKind {
    Youtube,
    Upload,
    /// Forward compatibility: an unrecognized kind resolves to no video
    /// instead of failing the whole fetch.
    Unknown,
}

impl<'de> Deserialize<'de> for VideoKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(match value.as_str() {
            "youtube" => Self::Youtube,
            "upload" => Self::Upload,
            _ => Self::Unknown,
        })
    }
}

/// One entry in the site-videos global.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoEntry {
    #[serde(rename = "videoType")]
    pub kind: VideoKind,
    #[serde(default)]
    pub youtube_url: Option<String>,
    #[serde(default)]
    pub video_file: Option<MediaRef>,
    #[serde(default)]
    pub title: Option<String>,
}

/// The singleton site-videos global (0-2 entries rendered).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteVideos {
    #[serde(default)]
    pub videos: Vec<VideoEntry>,
}

// =============================================================================
// Query envelope
// =============================================================================

/// Paged response envelope for collection queries.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindResponse<T> {
    pub docs: Vec<T>,
    #[serde(default)]
    pub total_docs: u64,
}
