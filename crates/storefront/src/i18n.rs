//! Static UI strings for the two supported locales.
//!
//! Catalog data (names, descriptions) is localized by the CMS; everything
//! baked into the templates - navigation, badges, empty states, footer copy -
//! comes from these tables. Car-model labels and the "All"/"Universal"
//! taxonomy values are shown as-is in both languages, matching the catalog
//! data itself.

use shodai_core::{Locale, ProductStatus};

/// UI strings for one locale.
#[derive(Debug)]
pub struct UiStrings {
    pub nav_home: &'static str,
    pub nav_shop: &'static str,
    pub nav_about: &'static str,
    pub nav_contact: &'static str,
    pub menu_label: &'static str,

    pub hero_title_fallback: &'static str,
    pub hero_subtitle_fallback: &'static str,
    pub featured_heading: &'static str,
    pub view_all: &'static str,
    pub videos_heading: &'static str,

    pub search_placeholder: &'static str,
    pub search_button: &'static str,
    pub sort_label: &'static str,
    pub sort_newest: &'static str,
    pub sort_price_asc: &'static str,
    pub sort_price_desc: &'static str,
    pub results_one: &'static str,
    pub results_many: &'static str,
    pub shop_empty: &'static str,

    pub badge_instock: &'static str,
    pub badge_outofstock: &'static str,
    pub badge_preorder: &'static str,

    pub back_to_shop: &'static str,
    pub image_unavailable: &'static str,

    pub not_found_title: &'static str,
    pub not_found_body: &'static str,

    pub footer_blurb: &'static str,
    pub footer_links: &'static str,
    pub footer_contact: &'static str,
}

static TH: UiStrings = UiStrings {
    nav_home: "หน้าแรก",
    nav_shop: "สินค้า",
    nav_about: "เกี่ยวกับเรา",
    nav_contact: "ติดต่อเรา",
    menu_label: "เมนู",

    hero_title_fallback: "SHODAI CARBON",
    hero_subtitle_fallback: "ผู้เชี่ยวชาญชิ้นส่วนคาร์บอนไฟเบอร์แท้",
    featured_heading: "สินค้ามาใหม่",
    view_all: "ดูสินค้าทั้งหมด",
    videos_heading: "วิดีโอ",

    search_placeholder: "ค้นหาสินค้า...",
    search_button: "ค้นหา",
    sort_label: "เรียงตาม",
    sort_newest: "มาใหม่",
    sort_price_asc: "ราคา: ต่ำไปสูง",
    sort_price_desc: "ราคา: สูงไปต่ำ",
    results_one: "รายการ",
    results_many: "รายการ",
    shop_empty: "ไม่พบสินค้าที่ค้นหา",

    badge_instock: "มีสินค้า",
    badge_outofstock: "สินค้าหมด",
    badge_preorder: "พรีออเดอร์",

    back_to_shop: "กลับไปหน้าสินค้า",
    image_unavailable: "ไม่มีรูปภาพ",

    not_found_title: "ไม่พบหน้าที่ต้องการ",
    not_found_body: "หน้าที่คุณค้นหาอาจถูกย้ายหรือลบไปแล้ว",

    footer_blurb: "ชิ้นส่วนคาร์บอนไฟเบอร์แท้ ผลิตด้วยความประณีตสำหรับรถของคุณ",
    footer_links: "ลิงก์",
    footer_contact: "ติดต่อ",
};

static EN: UiStrings = UiStrings {
    nav_home: "Home",
    nav_shop: "Shop",
    nav_about: "About",
    nav_contact: "Contact",
    menu_label: "Menu",

    hero_title_fallback: "SHODAI CARBON",
    hero_subtitle_fallback: "Genuine carbon-fiber parts, crafted for your car",
    featured_heading: "New Arrivals",
    view_all: "View all products",
    videos_heading: "Videos",

    search_placeholder: "Search products...",
    search_button: "Search",
    sort_label: "Sort by",
    sort_newest: "Newest",
    sort_price_asc: "Price: Low to High",
    sort_price_desc: "Price: High to Low",
    results_one: "item",
    results_many: "items",
    shop_empty: "No products match your search",

    badge_instock: "In stock",
    badge_outofstock: "Out of stock",
    badge_preorder: "Pre-order",

    back_to_shop: "Back to shop",
    image_unavailable: "Image unavailable",

    not_found_title: "Page not found",
    not_found_body: "The page you are looking for may have been moved or removed",

    footer_blurb: "Genuine carbon-fiber parts, crafted with care for your car",
    footer_links: "Links",
    footer_contact: "Contact",
};

/// Strings table for a locale.
#[must_use]
pub const fn strings(locale: Locale) -> &'static UiStrings {
    match locale {
        Locale::Th => &TH,
        Locale::En => &EN,
    }
}

impl UiStrings {
    /// Badge label for a product status.
    #[must_use]
    pub const fn status_label(&self, status: ProductStatus) -> &'static str {
        match status {
            ProductStatus::InStock => self.badge_instock,
            ProductStatus::OutOfStock => self.badge_outofstock,
            ProductStatus::PreOrder => self.badge_preorder,
        }
    }
}

/// Compute the same path under the other locale, for the language switcher.
///
/// Replaces the leading locale segment when one is present, otherwise
/// prefixes the target locale. Query strings are the caller's concern.
#[must_use]
pub fn switch_locale_path(path: &str, target: Locale) -> String {
    let rest = Locale::ALL
        .iter()
        .find_map(|locale| {
            let prefix = format!("/{locale}");
            if path == prefix {
                Some("")
            } else {
                path.strip_prefix(&format!("{prefix}/"))
            }
        })
        .unwrap_or_else(|| path.trim_start_matches('/'));

    if rest.is_empty() {
        format!("/{target}")
    } else {
        format!("/{target}/{rest}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_locale_path_replaces_prefix() {
        assert_eq!(switch_locale_path("/th/shop", Locale::En), "/en/shop");
        assert_eq!(
            switch_locale_path("/en/shop/civic-hood", Locale::Th),
            "/th/shop/civic-hood"
        );
    }

    #[test]
    fn test_switch_locale_path_bare_locale() {
        assert_eq!(switch_locale_path("/th", Locale::En), "/en");
        assert_eq!(switch_locale_path("/en", Locale::En), "/en");
    }

    #[test]
    fn test_switch_locale_path_unprefixed() {
        assert_eq!(switch_locale_path("/shop", Locale::En), "/en/shop");
        assert_eq!(switch_locale_path("/", Locale::Th), "/th");
    }

    #[test]
    fn test_status_labels_cover_both_locales() {
        for locale in Locale::ALL {
            let t = strings(locale);
            for status in [
                ProductStatus::InStock,
                ProductStatus::OutOfStock,
                ProductStatus::PreOrder,
            ] {
                assert!(!t.status_label(status).is_empty());
            }
        }
    }
}
