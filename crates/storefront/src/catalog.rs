//! Catalog taxonomy derivation and query engine.
//!
//! Pure functions over the already-fetched product list. The shop page
//! re-runs these on every request from its `q`/`category`/`sort` query
//! parameters; nothing here touches the network.

use crate::cms::types::Product;

/// Synthetic wildcard category, always first in the derived taxonomy.
pub const ALL_CATEGORY: &str = "All";
/// Label substituted for products without a car model.
pub const FALLBACK_CATEGORY: &str = "Universal";

/// Sort options offered by the shop page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Preserves the input order. Product fetches are already ordered
    /// newest-first by the CMS, so the engine never re-sorts and the
    /// identity law `query(L, "", "All", Newest) == L` holds.
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
}

impl SortOrder {
    /// Parse the `sort` query parameter; anything unrecognized is Newest.
    #[must_use]
    pub fn from_query(s: &str) -> Self {
        match s {
            "price_asc" => Self::PriceAsc,
            "price_desc" => Self::PriceDesc,
            _ => Self::Newest,
        }
    }

    /// Value used in the `sort` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
        }
    }
}

/// Derive the category taxonomy from a product list.
///
/// Distinct car-model labels in first-occurrence order, with the
/// "Universal" fallback applied per product and the "All" wildcard
/// prepended. Idempotent over the same input.
#[must_use]
pub fn derive_categories(products: &[Product]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORY.to_string()];
    for product in products {
        let label = product.category_label();
        if !categories.iter().any(|c| c == label) {
            categories.push(label.to_string());
        }
    }
    categories
}

/// Filter and sort a product list.
///
/// - Category: passes when `category` is the wildcard or equals the
///   product's label (fallback applied).
/// - Search: empty passes everything; otherwise case-folded substring
///   match on the name. No tokenization, no fuzzy matching.
/// - Both predicates are ANDed; the input list is untouched.
///
/// Price sorts are stable, so equal-price products keep their relative
/// (newest-first) order.
#[must_use]
pub fn query<'a>(
    products: &'a [Product],
    search: &str,
    category: &str,
    sort: SortOrder,
) -> Vec<&'a Product> {
    let needle = search.to_lowercase();

    let mut results: Vec<&Product> = products
        .iter()
        .filter(|p| category == ALL_CATEGORY || p.category_label() == category)
        .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
        .collect();

    match sort {
        SortOrder::Newest => {}
        SortOrder::PriceAsc => results.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOrder::PriceDesc => results.sort_by(|a, b| b.price.cmp(&a.price)),
    }

    results
}
