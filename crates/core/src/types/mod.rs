//! Core types for the Shodai Carbon storefront.

pub mod locale;
pub mod status;

pub use locale::{Locale, LocaleParseError};
pub use status::ProductStatus;
