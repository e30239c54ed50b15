//! Shop route handlers: catalog listing and product detail.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use shodai_core::{Locale, ProductStatus};
use tracing::instrument;

use crate::catalog::{self, ALL_CATEGORY, SortOrder};
use crate::cms::CmsError;
use crate::cms::types::{MediaRef, Product};
use crate::error::Result;
use crate::filters;
use crate::i18n::{self, UiStrings, switch_locale_path};
use crate::middleware::CspNonce;
use crate::state::AppState;

use super::{not_found_page, parse_locale};

/// Products fetched per listing request. The catalog stays small enough
/// that the query engine filters the whole set in memory.
const SHOP_FETCH_LIMIT: u32 = 100;

// =============================================================================
// View types
// =============================================================================

/// Image display data for templates.
#[derive(Clone)]
pub struct ImageView {
    pub url: String,
    pub alt: String,
}

impl ImageView {
    pub(crate) fn from_media(media: &MediaRef, fallback_alt: &str) -> Option<Self> {
        media.url().map(|url| Self {
            url: url.to_string(),
            alt: if media.alt().is_empty() {
                fallback_alt.to_string()
            } else {
                media.alt().to_string()
            },
        })
    }
}

/// Product card data shared by the shop grid and the home featured strip.
#[derive(Clone)]
pub struct ProductCardView {
    pub url: String,
    pub name: String,
    pub price: Decimal,
    pub category: String,
    pub image: Option<ImageView>,
    pub status: ProductStatus,
    pub status_label: &'static str,
}

impl ProductCardView {
    pub(crate) fn build(product: &Product, locale: Locale, t: &'static UiStrings) -> Self {
        let status = product.availability();
        Self {
            url: format!("/{locale}/shop/{}", product.link_slug()),
            name: product.name.clone(),
            price: product.price,
            category: product.category_label().to_string(),
            image: product
                .image
                .as_ref()
                .and_then(|media| ImageView::from_media(media, &product.name)),
            status,
            status_label: t.status_label(status),
        }
    }
}

/// One category filter pill.
#[derive(Clone)]
pub struct CategoryPill {
    pub label: String,
    pub url: String,
    pub active: bool,
}

// =============================================================================
// Listing
// =============================================================================

/// Transient catalog UI state, carried in the query string.
#[derive(Debug, Default, Deserialize)]
pub struct ShopQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
}

/// Shop listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "shop/index.html")]
pub struct ShopIndexTemplate {
    pub locale: Locale,
    pub t: &'static UiStrings,
    pub switch_path: String,
    pub q: String,
    pub category: String,
    pub sort_value: &'static str,
    pub categories: Vec<CategoryPill>,
    pub products: Vec<ProductCardView>,
    pub total: usize,
}

/// Build a shop URL preserving the other filter parameters.
fn shop_url(locale: Locale, q: &str, category: &str, sort: SortOrder) -> String {
    let mut url = format!("/{locale}/shop?category={}", urlencoding::encode(category));
    if !q.is_empty() {
        url.push_str(&format!("&q={}", urlencoding::encode(q)));
    }
    if sort != SortOrder::Newest {
        url.push_str(&format!("&sort={}", sort.as_str()));
    }
    url
}

/// Display the catalog listing with search, category filter, and sort.
#[instrument(skip(state), fields(locale = %locale_code))]
pub async fn index(
    State(state): State<AppState>,
    Path(locale_code): Path<String>,
    Query(params): Query<ShopQuery>,
) -> Result<Response> {
    let locale = match parse_locale(&locale_code) {
        Ok(locale) => locale,
        Err(response) => return Ok(response),
    };
    let t = i18n::strings(locale);

    let q = params.q.unwrap_or_default();
    let category = params
        .category
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| ALL_CATEGORY.to_string());
    let sort = SortOrder::from_query(params.sort.as_deref().unwrap_or_default());

    // Newest-first from the CMS; the engine preserves that order for the
    // default sort.
    let all_products = state.cms().products(locale, SHOP_FETCH_LIMIT).await?;

    let categories = catalog::derive_categories(&all_products)
        .into_iter()
        .map(|label| CategoryPill {
            url: shop_url(locale, &q, &label, sort),
            active: label == category,
            label,
        })
        .collect();

    let results = catalog::query(&all_products, &q, &category, sort);
    let products: Vec<ProductCardView> = results
        .iter()
        .map(|p| ProductCardView::build(p, locale, t))
        .collect();

    Ok(ShopIndexTemplate {
        locale,
        t,
        switch_path: switch_locale_path(&format!("/{locale}/shop"), locale.other()),
        q,
        category,
        sort_value: sort.as_str(),
        categories,
        total: products.len(),
        products,
    }
    .into_response())
}

// =============================================================================
// Detail
// =============================================================================

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "shop/show.html")]
pub struct ShopShowTemplate {
    pub locale: Locale,
    pub t: &'static UiStrings,
    pub switch_path: String,
    pub nonce: String,
    pub name: String,
    pub price: Decimal,
    pub category: String,
    pub status: ProductStatus,
    pub status_label: &'static str,
    pub description: Option<String>,
    pub main_image: Option<ImageView>,
    /// Primary image plus resolved gallery entries, in order.
    pub gallery: Vec<ImageView>,
}

/// Display the product detail page.
///
/// Looks up by slug first, then by id, because card links address
/// `slug || id`. Misses on both render the 404 page.
#[instrument(skip(state, nonce), fields(locale = %locale_code, slug = %slug))]
pub async fn show(
    State(state): State<AppState>,
    Path((locale_code, slug)): Path<(String, String)>,
    nonce: CspNonce,
) -> Result<Response> {
    let locale = match parse_locale(&locale_code) {
        Ok(locale) => locale,
        Err(response) => return Ok(response),
    };
    let t = i18n::strings(locale);

    let product = match state.cms().product_by_slug(&slug, locale).await {
        Ok(product) => product,
        Err(CmsError::NotFound(_)) => match state.cms().product_by_id(&slug, locale).await {
            Ok(product) => product,
            Err(CmsError::NotFound(_)) => return Ok(not_found_page(locale)),
            Err(e) => return Err(e.into()),
        },
        Err(e) => return Err(e.into()),
    };

    let main_image = product
        .image
        .as_ref()
        .and_then(|media| ImageView::from_media(media, &product.name));

    let mut gallery: Vec<ImageView> = main_image.iter().cloned().collect();
    gallery.extend(
        product
            .gallery
            .iter()
            .filter_map(|entry| entry.image.as_ref())
            .filter_map(|media| ImageView::from_media(media, &product.name)),
    );

    let status = product.availability();
    let category = product.category_label().to_string();
    let switch_path = switch_locale_path(
        &format!("/{locale}/shop/{}", product.link_slug()),
        locale.other(),
    );

    Ok(ShopShowTemplate {
        locale,
        t,
        switch_path,
        nonce: nonce.value().to_string(),
        name: product.name,
        price: product.price,
        category,
        status,
        status_label: t.status_label(status),
        description: product.description,
        main_image,
        gallery,
    }
    .into_response())
}
