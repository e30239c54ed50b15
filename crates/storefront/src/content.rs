//! Markdown content pages (about, contact).
//!
//! Pages live in `content/pages` as `{slug}.{locale}.md` with YAML front
//! matter, loaded once at startup and rendered to HTML. A missing
//! translation falls back to the default locale's file.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use comrak::{Options, markdown_to_html};
use gray_matter::{Matter, ParsedEntity, engine::YAML};
use serde::Deserialize;
use shodai_core::Locale;
use thiserror::Error;

/// Errors loading or parsing content files.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Front matter for a content page.
#[derive(Debug, Clone, Deserialize)]
pub struct PageMeta {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub updated_at: Option<NaiveDate>,
}

/// A rendered page with metadata and HTML content.
#[derive(Debug, Clone)]
pub struct Page {
    pub slug: String,
    pub locale: Locale,
    pub meta: PageMeta,
    pub content_html: String,
}

/// Content store that holds all loaded pages in memory.
#[derive(Debug, Clone)]
pub struct ContentStore {
    pages: Arc<HashMap<(String, Locale), Page>>,
}

impl ContentStore {
    /// Load all pages from `{content_dir}/pages`.
    ///
    /// A missing directory is tolerated (empty store), matching first-boot
    /// and test environments.
    ///
    /// # Errors
    ///
    /// Returns an error if the pages directory exists but cannot be read.
    pub fn load(content_dir: &Path) -> Result<Self, ContentError> {
        let dir = content_dir.join("pages");
        let mut pages = HashMap::new();

        if !dir.exists() {
            tracing::warn!("Pages directory does not exist: {:?}", dir);
            return Ok(Self {
                pages: Arc::new(pages),
            });
        }

        let entries = std::fs::read_dir(&dir).map_err(|e| ContentError::Io(e.to_string()))?;

        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "md") {
                match Self::load_page(&path) {
                    Ok(page) => {
                        tracing::info!(slug = %page.slug, locale = %page.locale, "Loaded page");
                        pages.insert((page.slug.clone(), page.locale), page);
                    }
                    Err(e) => {
                        tracing::error!("Failed to load page {:?}: {}", path, e);
                    }
                }
            }
        }

        Ok(Self {
            pages: Arc::new(pages),
        })
    }

    /// Load a single page from a `{slug}.{locale}.md` file.
    fn load_page(path: &Path) -> Result<Page, ContentError> {
        let content = std::fs::read_to_string(path).map_err(|e| ContentError::Io(e.to_string()))?;

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ContentError::Parse("Invalid filename".to_string()))?;

        let (slug, locale_code) = stem
            .rsplit_once('.')
            .ok_or_else(|| ContentError::Parse(format!("Expected slug.locale.md: {stem}")))?;
        let locale = locale_code
            .parse::<Locale>()
            .map_err(|e| ContentError::Parse(e.to_string()))?;

        let matter = Matter::<YAML>::new();
        let parsed: ParsedEntity<PageMeta> = matter
            .parse(&content)
            .map_err(|e| ContentError::Parse(format!("Failed to parse frontmatter: {e}")))?;
        let meta = parsed
            .data
            .ok_or_else(|| ContentError::Parse("Missing frontmatter".to_string()))?;

        let content_html = render_markdown(&parsed.content);

        Ok(Page {
            slug: slug.to_string(),
            locale,
            meta,
            content_html,
        })
    }

    /// Get a page by slug for a locale, falling back to the default locale.
    #[must_use]
    pub fn get_page(&self, slug: &str, locale: Locale) -> Option<&Page> {
        self.pages
            .get(&(slug.to_string(), locale))
            .or_else(|| self.pages.get(&(slug.to_string(), Locale::default())))
    }
}

/// Render markdown to HTML with safe defaults (raw HTML escaped).
fn render_markdown(markdown: &str) -> String {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    markdown_to_html(markdown, &options)
}
