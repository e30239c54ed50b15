//! Markdown content page route handlers (about, contact).

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use shodai_core::Locale;
use tracing::instrument;

use crate::filters;
use crate::i18n::{self, UiStrings, switch_locale_path};
use crate::state::AppState;

use super::{not_found_page, parse_locale};

/// Content page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/content.html")]
pub struct ContentPageTemplate {
    pub locale: Locale,
    pub t: &'static UiStrings,
    pub switch_path: String,
    pub title: String,
    pub description: String,
    pub updated_at: Option<NaiveDate>,
    pub content_html: String,
}

/// Serve a content page by slug for a locale.
fn serve_content_page(state: &AppState, slug: &str, locale: Locale) -> Response {
    let Some(page) = state.content().get_page(slug, locale) else {
        return not_found_page(locale);
    };

    ContentPageTemplate {
        locale,
        t: i18n::strings(locale),
        switch_path: switch_locale_path(&format!("/{locale}/{slug}"), locale.other()),
        title: page.meta.title.clone(),
        description: page.meta.description.clone().unwrap_or_default(),
        updated_at: page.meta.updated_at,
        content_html: page.content_html.clone(),
    }
    .into_response()
}

/// Display the About page.
#[instrument(skip(state), fields(locale = %locale_code))]
pub async fn about(State(state): State<AppState>, Path(locale_code): Path<String>) -> Response {
    match parse_locale(&locale_code) {
        Ok(locale) => serve_content_page(&state, "about", locale),
        Err(response) => response,
    }
}

/// Display the Contact page.
#[instrument(skip(state), fields(locale = %locale_code))]
pub async fn contact(State(state): State<AppState>, Path(locale_code): Path<String>) -> Response {
    match parse_locale(&locale_code) {
        Ok(locale) => serve_content_page(&state, "contact", locale),
        Err(response) => response,
    }
}
