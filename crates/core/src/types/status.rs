//! Product availability status.

use serde::{Deserialize, Serialize};

/// Availability of a product, as stored in the CMS.
///
/// The CMS select field uses lowercase single-word values on the wire.
/// A product with no status is treated as in stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    #[default]
    InStock,
    OutOfStock,
    PreOrder,
}

impl ProductStatus {
    /// Wire value, also used as a CSS class suffix for the status badge.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InStock => "instock",
            Self::OutOfStock => "outofstock",
            Self::PreOrder => "preorder",
        }
    }
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
