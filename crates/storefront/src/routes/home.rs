//! Home page route handler.
//!
//! The home page degrades gracefully: a failed CMS fetch logs and renders
//! fallback copy instead of an error page, so the storefront stays up while
//! the CMS is down.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use shodai_core::Locale;
use tracing::instrument;

use crate::cms::types::{HomeContent, SiteVideos};
use crate::filters;
use crate::i18n::{self, UiStrings, switch_locale_path};
use crate::state::AppState;
use crate::video::{self, PlayableVideo};

use super::parse_locale;
use super::shop::{ImageView, ProductCardView};

/// Products shown in the featured strip (newest first).
const FEATURED_LIMIT: u32 = 8;

/// One rendered video section, flattened for the template.
#[derive(Clone)]
pub struct VideoView {
    pub title: Option<String>,
    /// YouTube iframe src, when embedded.
    pub embed_url: Option<String>,
    /// Native file source, when uploaded.
    pub file_url: Option<String>,
    pub mime_type: String,
    pub poster_url: Option<String>,
}

impl From<video::VideoSection> for VideoView {
    fn from(section: video::VideoSection) -> Self {
        let embed_url = section.video.embed_url();
        match section.video {
            PlayableVideo::Embedded { .. } => Self {
                title: section.title,
                embed_url,
                file_url: None,
                mime_type: String::new(),
                poster_url: None,
            },
            PlayableVideo::File {
                url,
                mime_type,
                poster_url,
            } => Self {
                title: section.title,
                embed_url: None,
                file_url: Some(url),
                mime_type,
                poster_url,
            },
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub locale: Locale,
    pub t: &'static UiStrings,
    pub switch_path: String,
    pub banner: Option<ImageView>,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub featured: Vec<ProductCardView>,
    pub videos: Vec<VideoView>,
}

/// Display the home page.
#[instrument(skip(state), fields(locale = %locale_code))]
pub async fn home(State(state): State<AppState>, Path(locale_code): Path<String>) -> Response {
    let locale = match parse_locale(&locale_code) {
        Ok(locale) => locale,
        Err(response) => return response,
    };
    let t = i18n::strings(locale);

    let home_content = state.cms().home_page(locale).await.unwrap_or_else(|e| {
        tracing::error!("Failed to fetch home page content: {e}");
        HomeContent::default()
    });

    let site_videos = state.cms().site_videos(locale).await.unwrap_or_else(|e| {
        tracing::error!("Failed to fetch site videos: {e}");
        SiteVideos::default()
    });

    let featured = state
        .cms()
        .products(locale, FEATURED_LIMIT)
        .await
        .map_or_else(
            |e| {
                tracing::error!("Failed to fetch featured products: {e}");
                Vec::new()
            },
            |products| {
                products
                    .iter()
                    .map(|p| ProductCardView::build(p, locale, t))
                    .collect()
            },
        );

    let banner_media = match locale {
        Locale::Th => home_content.banner_th.as_ref(),
        Locale::En => home_content.banner_en.as_ref(),
    };
    let banner = banner_media.and_then(|media| ImageView::from_media(media, t.hero_title_fallback));

    let videos = video::resolve_sections(&site_videos, &home_content)
        .into_iter()
        .map(VideoView::from)
        .collect();

    let hero_title = home_content
        .hero_title
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| t.hero_title_fallback.to_string());
    let hero_subtitle = home_content
        .hero_subtitle
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| t.hero_subtitle_fallback.to_string());

    HomeTemplate {
        locale,
        t,
        switch_path: switch_locale_path(&format!("/{locale}"), locale.other()),
        banner,
        hero_title,
        hero_subtitle,
        featured,
        videos,
    }
    .into_response()
}
